//! Noyau — évaluation (pipeline réel)
//!
//! tokenize -> compile (RPN) -> evaluate (pile f64)
//!
//! Chaque appel est indépendant : aucun état partagé entre deux évaluations.

use super::erreur::EvalError;
use super::jetons::{est_numerique, format_tokens, tokenize, Tok};
use super::rpn::compile;

/// Résultat + démarche (jetons et RPN en texte) pour le panneau d’explication.
#[derive(Clone, Debug, PartialEq)]
pub struct Evaluation {
    pub valeur: f64,
    pub jetons: String,
    pub rpn: String,
}

/// Littéral -> f64. Un littéral mal formé ("1.2.3", ".") donne NaN, sans erreur.
fn lire_nombre(texte: &str) -> f64 {
    if !est_numerique(texte) {
        return f64::NAN;
    }
    texte.parse::<f64>().unwrap_or(f64::NAN)
}

/// Évalue une suite RPN avec une pile de f64.
///
/// - Op : b = pop, a = pop, push(a op b)
/// - fin : la pile doit contenir exactement une valeur
///
/// Les résultats non finis (division par zéro…) sont des valeurs, pas des erreurs.
pub fn evaluate(rpn: &[Tok]) -> Result<f64, EvalError> {
    let mut st: Vec<f64> = Vec::with_capacity(rpn.len());

    for tok in rpn {
        match tok {
            Tok::Num(texte) => st.push(lire_nombre(texte)),

            Tok::Op(op) => {
                let b = st.pop().ok_or(EvalError::StackUnderflow)?;
                let a = st.pop().ok_or(EvalError::StackUnderflow)?;
                st.push(op.appliquer(a, b));
            }

            Tok::LPar | Tok::RPar => return Err(EvalError::MalformedExpression),
        }
    }

    match st.as_slice() {
        [v] => Ok(*v),
        _ => Err(EvalError::MalformedExpression),
    }
}

/// API publique : texte affiché -> nombre.
pub fn evaluate_expression(texte: &str) -> Result<f64, EvalError> {
    evaluate_with_trace(texte).map(|e| e.valeur)
}

/// Comme `evaluate_expression`, en gardant jetons + RPN pour la démarche.
pub fn evaluate_with_trace(texte: &str) -> Result<Evaluation, EvalError> {
    let jetons = tokenize(texte);
    let jetons_txt = format_tokens(&jetons);
    log::debug!("jetons: {jetons_txt}");

    let rpn = compile(&jetons).inspect_err(|e| log::warn!("compilation de {texte:?}: {e}"))?;
    let rpn_txt = format_tokens(&rpn);
    log::debug!("rpn: {rpn_txt}");

    let valeur = evaluate(&rpn).inspect_err(|e| log::warn!("évaluation de {texte:?}: {e}"))?;
    log::debug!("résultat: {valeur}");

    Ok(Evaluation {
        valeur,
        jetons: jetons_txt,
        rpn: rpn_txt,
    })
}
