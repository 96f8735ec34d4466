// src/noyau/rpn.rs
//
// Shunting-yard : infixe -> RPN (postfixe, sans parenthèses)
//
// Règles:
// - Num : sortie directe
// - Op  : dépile tant que le sommet est un Op de priorité >= (associativité à gauche)
// - '(' : empilée sans condition
// - ')' : dépile jusqu’à '(' puis la jette
//
// Parenthèses non équilibrées => UnbalancedParentheses (pas de récupération silencieuse).
// Pas de moins unaire : "-3" donne une RPN incomplète, l’évaluateur la refusera.

use super::erreur::EvalError;
use super::jetons::{priorite, Tok};

/// Convertit une suite de jetons infixe en RPN.
///
/// Exemple:
///   tokens: [Num(2), Plus, Num(3), Star, Num(4)]
///   rpn:    [Num(2), Num(3), Num(4), Star, Plus]
pub fn compile(tokens: &[Tok]) -> Result<Vec<Tok>, EvalError> {
    let mut out: Vec<Tok> = Vec::with_capacity(tokens.len());
    let mut ops: Vec<Tok> = Vec::new();

    for tok in tokens.iter().cloned() {
        match tok {
            Tok::Num(_) => out.push(tok),

            Tok::Op(_) => {
                while let Some(top) = ops.last() {
                    if !matches!(top, Tok::Op(_)) || priorite(top) < priorite(&tok) {
                        break;
                    }
                    if let Some(t) = ops.pop() {
                        out.push(t);
                    }
                }
                ops.push(tok);
            }

            Tok::LPar => ops.push(tok),

            Tok::RPar => loop {
                match ops.pop() {
                    Some(Tok::LPar) => break,
                    Some(t) => out.push(t),
                    None => return Err(EvalError::UnbalancedParentheses),
                }
            },
        }
    }

    // vide la pile ops
    while let Some(op) = ops.pop() {
        if matches!(op, Tok::LPar) {
            return Err(EvalError::UnbalancedParentheses);
        }
        out.push(op);
    }

    Ok(out)
}
