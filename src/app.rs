// src/app.rs
//
// Module App (racine)
// -------------------
// - Déclare les sous-modules (etat.rs + vue.rs)
// - Ré-exporte AppCalc
// - Fournit l’impl eframe::App (natif + web) + raccourcis clavier

pub mod etat;
pub mod vue;

pub use etat::AppCalc;

use eframe::egui;

impl eframe::App for AppCalc {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Raccourcis globaux : pas de champ texte, l’écran est en lecture seule.
        let (enter, backspace, esc, texte) = ctx.input(|i| {
            let texte: String = i
                .events
                .iter()
                .filter_map(|e| match e {
                    egui::Event::Text(t) => Some(t.as_str()),
                    _ => None,
                })
                .collect();
            (
                i.key_pressed(egui::Key::Enter),
                i.key_pressed(egui::Key::Backspace),
                i.key_pressed(egui::Key::Escape),
                texte,
            )
        });

        for c in texte.chars() {
            self.saisir_clavier(c);
        }
        if enter {
            self.calculer();
        }
        if backspace {
            self.supprimer_dernier();
        }
        if esc {
            self.effacer();
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            self.ui(ui);
        });
    }
}

impl AppCalc {
    /// Clavier : * et / sont affichés × et ÷ ; le reste hors pavé est ignoré.
    fn saisir_clavier(&mut self, c: char) {
        match c {
            '0'..='9' | '.' | '(' | ')' => self.ajouter(c.encode_utf8(&mut [0; 4])),
            '+' | '-' => self.ajouter_operateur(c.encode_utf8(&mut [0; 4])),
            '*' | 'x' => self.ajouter_operateur("×"),
            '/' => self.ajouter_operateur("÷"),
            '=' => self.calculer(),
            _ => {}
        }
    }
}
