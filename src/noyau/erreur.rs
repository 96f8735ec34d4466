// src/noyau/erreur.rs
//
// Erreurs du noyau : une seule enum, trois cas distincts.
// L’UI les rend toutes par "Error", mais on garde la nature exacte pour les tests.

use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EvalError {
    /// La pile finale ne contient pas exactement une valeur.
    MalformedExpression,
    /// Un opérateur binaire a trouvé moins de deux opérandes.
    StackUnderflow,
    /// ')' sans '(' correspondante, ou '(' jamais refermée.
    UnbalancedParentheses,
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            Self::MalformedExpression => "expression invalide",
            Self::StackUnderflow => "opérande manquant pour un opérateur",
            Self::UnbalancedParentheses => "parenthèses non équilibrées",
        };
        f.write_str(msg)
    }
}

impl std::error::Error for EvalError {}
