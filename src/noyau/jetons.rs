// src/noyau/jetons.rs

use std::fmt;

/// Opérateurs binaires (forme canonique ASCII).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Op {
    Plus,
    Minus,
    Star,
    Slash,
}

impl Op {
    /// Reconnaît un opérateur, synonymes d’affichage compris (× → *, ÷ → /).
    pub fn depuis_char(c: char) -> Option<Op> {
        match c {
            '+' => Some(Op::Plus),
            '-' => Some(Op::Minus),
            '*' | '×' => Some(Op::Star),
            '/' | '÷' => Some(Op::Slash),
            _ => None,
        }
    }

    pub fn symbole(self) -> char {
        match self {
            Op::Plus => '+',
            Op::Minus => '-',
            Op::Star => '*',
            Op::Slash => '/',
        }
    }

    /// Applique l’opération en double précision (a op b).
    /// Division par zéro : ±inf ou NaN, pas d’erreur.
    pub fn appliquer(self, a: f64, b: f64) -> f64 {
        match self {
            Op::Plus => a + b,
            Op::Minus => a - b,
            Op::Star => a * b,
            Op::Slash => a / b,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Tok {
    // Texte littéral, converti en f64 seulement à l’évaluation.
    Num(String),
    Op(Op),

    LPar,
    RPar,
}

impl fmt::Display for Tok {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tok::Num(texte) => f.write_str(texte),
            Tok::Op(op) => write!(f, "{}", op.symbole()),
            Tok::LPar => f.write_str("("),
            Tok::RPar => f.write_str(")"),
        }
    }
}

/* ------------------------ Prédicats ------------------------ */

/// Chiffre décimal ASCII.
pub fn est_chiffre(c: char) -> bool {
    c.is_ascii_digit()
}

/// Nombre bien formé : au moins un chiffre, au plus un point ("5." et ".5" acceptés).
pub fn est_numerique(s: &str) -> bool {
    let mut chiffres = 0usize;
    let mut points = 0usize;
    for c in s.chars() {
        if est_chiffre(c) {
            chiffres += 1;
        } else if c == '.' {
            points += 1;
        } else {
            return false;
        }
    }
    chiffres > 0 && points <= 1
}

/// Rang de priorité : + - → 1 ; * / → 2 ; tout le reste → 0 (ne dépile jamais).
pub fn priorite(t: &Tok) -> u8 {
    match t {
        Tok::Op(Op::Plus | Op::Minus) => 1,
        Tok::Op(Op::Star | Op::Slash) => 2,
        _ => 0,
    }
}

/* ------------------------ Tokenisation ------------------------ */

/// Découpe une chaîne en jetons.
///
/// - chiffres et '.' consécutifs => un seul Num (même "1.2.3", filtré plus tard)
/// - + - * / × ÷ => Op (forme canonique)
/// - ( ) => parenthèses
/// - tout autre caractère (espaces, lettres…) est ignoré
///
/// Jamais d’erreur : une entrée mal formée se révèle à la compilation ou à l’évaluation.
pub fn tokenize(s: &str) -> Vec<Tok> {
    let mut out = Vec::new();
    let mut nombre = String::new();

    for c in s.chars() {
        if est_chiffre(c) || c == '.' {
            nombre.push(c);
            continue;
        }

        if !nombre.is_empty() {
            out.push(Tok::Num(std::mem::take(&mut nombre)));
        }

        if let Some(op) = Op::depuis_char(c) {
            out.push(Tok::Op(op));
        } else if c == '(' {
            out.push(Tok::LPar);
        } else if c == ')' {
            out.push(Tok::RPar);
        }
    }

    if !nombre.is_empty() {
        out.push(Tok::Num(nombre));
    }

    out
}

/// Format utilitaire (démarche / traces) : jetons séparés par des espaces.
pub fn format_tokens(tokens: &[Tok]) -> String {
    tokens
        .iter()
        .map(Tok::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}
