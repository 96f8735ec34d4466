//! Calculatrice RPN : noyau f64 (jetons -> RPN -> pile) + UI egui.
//!
//! Point d’entrée du noyau : [`noyau::evaluate_expression`].

pub mod app;
pub mod noyau;
