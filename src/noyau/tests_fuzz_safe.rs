//! Tests fuzz safe : robustesse + déterminisme + limites contrôlées.
//!
//! But : marteler le pipeline sans brûler la machine.
//! - RNG déterministe (seed fixe)
//! - profondeur bornée
//! - budget temps global
//! - oracle : chaque expression générée est aussi calculée directement en f64

use std::time::{Duration, Instant};

use super::erreur::EvalError;
use super::evaluate_expression;

/* ------------------------ RNG déterministe minimal ------------------------ */

#[derive(Clone)]
struct Rng {
    state: u64,
}
impl Rng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }
    fn next_u32(&mut self) -> u32 {
        // LCG simple (déterministe)
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }
    fn pick(&mut self, n: u32) -> u32 {
        if n == 0 {
            0
        } else {
            self.next_u32() % n
        }
    }
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Génération d’expressions (bornée) ------------------------ */

/// Atome : (texte, valeur attendue).
fn gen_atom(rng: &mut Rng) -> (String, f64) {
    let entier = rng.pick(50);
    if rng.pick(3) == 0 {
        let dec = rng.pick(10);
        let texte = format!("{entier}.{dec}");
        let v = texte.parse::<f64>().unwrap_or(f64::NAN);
        (texte, v)
    } else {
        (format!("{entier}"), entier as f64)
    }
}

/// Expression entièrement parenthésée : l’oracle n’a pas à connaître les priorités.
fn gen_expr(rng: &mut Rng, depth: usize) -> (String, f64) {
    if depth == 0 || rng.pick(4) == 0 {
        return gen_atom(rng);
    }

    let (ta, a) = gen_expr(rng, depth - 1);
    let (tb, b) = gen_expr(rng, depth - 1);

    match rng.pick(4) {
        0 => (format!("({ta}+{tb})"), a + b),
        1 => (format!("({ta}-{tb})"), a - b),
        2 => (format!("({ta}×{tb})"), a * b),
        _ => (format!("({ta}÷{tb})"), a / b),
    }
}

fn meme_f64(a: f64, b: f64) -> bool {
    (a.is_nan() && b.is_nan()) || a == b
}

/* ------------------------ Helper somme balancée anti pile ------------------------ */

fn somme_balancee(terme: &str, n: usize) -> String {
    let mut items: Vec<String> = (0..n).map(|_| terme.to_string()).collect();
    while items.len() > 1 {
        let mut next = Vec::new();
        let mut i = 0;
        while i < items.len() {
            if i + 1 < items.len() {
                next.push(format!("({}+{})", items[i], items[i + 1]));
                i += 2;
            } else {
                next.push(items[i].clone());
                i += 1;
            }
        }
        items = next;
    }
    items.pop().unwrap_or_else(|| "0".to_string())
}

/* ------------------------ Tests ------------------------ */

#[test]
fn fuzz_safe_oracle_et_determinisme() {
    let t0 = Instant::now();
    let max = Duration::from_millis(250);

    let mut rng = Rng::new(0xC0FFEE_u64);

    for _ in 0..300 {
        budget(t0, max);

        let (expr, attendu) = gen_expr(&mut rng, 5);
        let v = evaluate_expression(&expr).unwrap_or_else(|e| panic!("expr={expr:?} err={e}"));

        // Même ordre d’opérations que l’oracle => résultat bit à bit identique.
        assert!(
            meme_f64(v, attendu),
            "expr={expr:?} valeur={v} attendu={attendu}"
        );

        // Deuxième passage : aucun état caché.
        let w = evaluate_expression(&expr).unwrap_or_else(|e| panic!("expr={expr:?} err={e}"));
        assert!(meme_f64(v, w), "expr={expr:?} non déterministe");
    }
}

#[test]
fn fuzz_safe_parenthese_retiree() {
    let t0 = Instant::now();
    let max = Duration::from_millis(200);

    let mut rng = Rng::new(0xBADC0DE_u64);
    let mut vus = 0usize;

    for _ in 0..150 {
        budget(t0, max);

        let (expr, _) = gen_expr(&mut rng, 4);
        let Some(pos) = expr.rfind(')') else {
            continue;
        };

        // Une ')' en moins => '(' jamais refermée.
        let mut casse = expr.clone();
        casse.remove(pos);
        assert_eq!(
            evaluate_expression(&casse),
            Err(EvalError::UnbalancedParentheses),
            "expr={casse:?}"
        );
        vus += 1;
    }

    assert!(vus > 10, "trop peu d’expressions parenthésées: {vus}");
}

#[test]
fn fuzz_safe_somme_balancee_anti_pile() {
    let t0 = Instant::now();
    let max = Duration::from_millis(200);

    let expr = somme_balancee("0.5", 800);
    budget(t0, max);

    let v = evaluate_expression(&expr).unwrap_or_else(|e| panic!("err: {e}"));

    // 800*(1/2) = 400, exact en binaire
    assert_eq!(v, 400.0);
}

#[test]
fn fuzz_safe_longue_chaine_plate() {
    // 2000 termes sans parenthèses : la pile d’opérateurs reste courte (associativité à gauche).
    let expr = vec!["1"; 2000].join("-");
    assert_eq!(evaluate_expression(&expr), Ok(1.0 - 1999.0));
}
