//! Noyau de calcul (f64)
//!
//! Organisation interne :
//! - jetons.rs : jetons + prédicats + tokenisation
//! - rpn.rs    : shunting-yard (infixe -> RPN)
//! - eval.rs   : pile RPN + pipeline complet
//! - format.rs : affichage du résultat
//! - erreur.rs : EvalError

pub mod erreur;
pub mod eval;
pub mod format;
pub mod jetons;
pub mod rpn;


#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use erreur::EvalError;
pub use eval::{evaluate_expression, evaluate_with_trace, Evaluation};
pub use format::{format_resultat, TEXTE_ERREUR};
