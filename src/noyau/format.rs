// src/noyau/format.rs

/// Nombre de décimales pour un résultat non entier.
pub const DECIMALES_AFFICHAGE: usize = 2;

/// Texte affiché à la place du résultat quand l’évaluation échoue.
pub const TEXTE_ERREUR: &str = "Error";

/// Résultat -> texte d’affichage.
/// - entier fini : sans décimales ("14", "-3")
/// - autre fini  : DECIMALES_AFFICHAGE décimales ("3.80")
/// - non fini    : "Infinity", "-Infinity", "NaN"
pub fn format_resultat(v: f64) -> String {
    if v.is_nan() {
        return "NaN".to_string();
    }
    if v.is_infinite() {
        return if v > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    // -0 s’affiche 0
    if v == 0.0 {
        return "0".to_string();
    }
    if v.fract() == 0.0 {
        return format!("{v}");
    }
    format!("{v:.prec$}", prec = DECIMALES_AFFICHAGE)
}
