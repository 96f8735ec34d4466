//! src/app/etat.rs
//!
//! État UI (sans vue).
//!
//! Rôle : contenir l’affichage de la calculatrice et offrir les actions des boutons
//! (ajout, DEL, C, =) sans logique de rendu.
//!
//! Contrats :
//! - Le noyau ne voit que le texte passé en paramètre (aucun état global).
//! - Actions déterministes, sans effet de bord caché.

use crate::noyau::{evaluate_with_trace, format_resultat, TEXTE_ERREUR};

/// Symboles d’opérateur tels qu’affichés (remplaçables par un autre opérateur).
const OPERATEURS_AFFICHES: [char; 4] = ['+', '-', '×', '÷'];

#[derive(Clone, Default, Debug, PartialEq)]
pub struct Demarche {
    pub jetons: String,
    pub rpn: String,
}

#[derive(Clone, Default, Debug)]
pub struct AppCalc {
    // --- écran ---
    pub affichage: String,

    // Vrai juste après "=" : la prochaine saisie remplace l’écran.
    pub resultat_affiche: bool,

    // --- démarche (panneau d’explication) ---
    pub demarche: Demarche,
}

impl AppCalc {
    /* ------------------------ Actions “boutons” ------------------------ */

    /// Chiffre, point ou parenthèse.
    pub fn ajouter(&mut self, valeur: &str) {
        if self.resultat_affiche {
            self.resultat_affiche = false;
            self.affichage = valeur.to_string();
        } else {
            self.affichage.push_str(valeur);
        }
    }

    /// Opérateur : remplace l’opérateur final s’il y en a déjà un ("2+" puis × => "2×").
    pub fn ajouter_operateur(&mut self, op: &str) {
        if self.affichage.ends_with(OPERATEURS_AFFICHES) {
            self.supprimer_dernier();
        }
        self.ajouter(op);
    }

    /// DEL : retire le dernier caractère.
    pub fn supprimer_dernier(&mut self) {
        self.affichage.pop();
        self.resultat_affiche = false;
    }

    /// C : écran vide.
    pub fn effacer(&mut self) {
        self.affichage.clear();
        self.resultat_affiche = false;
    }

    /// = : évalue l’écran et le remplace par le résultat (ou "Error").
    pub fn calculer(&mut self) {
        match evaluate_with_trace(&self.affichage) {
            Ok(eval) => {
                self.affichage = format_resultat(eval.valeur);
                self.demarche = Demarche {
                    jetons: eval.jetons,
                    rpn: eval.rpn,
                };
            }
            Err(_) => {
                self.affichage = TEXTE_ERREUR.to_string();
                self.demarche = Demarche::default();
            }
        }
        self.resultat_affiche = true;
    }
}
