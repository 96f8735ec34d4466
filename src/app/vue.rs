// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// - Écran en haut (lecture seule, aligné à droite)
// - Pavé : chiffres, point, parenthèses, + - × ÷, DEL, C, =
// - Panneau "Démarche" : jetons + RPN de la dernière évaluation
//
// Le clavier (Enter / Backspace / Escape) est géré dans app.rs.

use eframe::egui;

use super::etat::AppCalc;

/// Taille d’une touche du pavé.
const TOUCHE: [f32; 2] = [64.0, 48.0];

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        ui.heading("Calculatrice RPN");
        ui.add_space(6.0);

        self.ui_ecran(ui);

        ui.add_space(8.0);
        self.ui_pave(ui);

        ui.add_space(8.0);
        ui.separator();
        self.ui_demarche(ui);
    }

    fn ui_ecran(&self, ui: &mut egui::Ui) {
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    // Écran vide : on garde la hauteur d’une ligne.
                    let texte = if self.affichage.is_empty() {
                        " "
                    } else {
                        self.affichage.as_str()
                    };
                    ui.label(egui::RichText::new(texte).monospace().size(28.0));
                });
            });
    }

    fn ui_pave(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("pave_calculatrice")
            .num_columns(4)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                self.touche_action(ui, "C", Action::Effacer);
                self.touche_action(ui, "DEL", Action::Supprimer);
                self.touche(ui, "(", Touche::Saisie);
                self.touche(ui, ")", Touche::Saisie);
                ui.end_row();

                self.touche(ui, "7", Touche::Saisie);
                self.touche(ui, "8", Touche::Saisie);
                self.touche(ui, "9", Touche::Saisie);
                self.touche(ui, "÷", Touche::Operateur);
                ui.end_row();

                self.touche(ui, "4", Touche::Saisie);
                self.touche(ui, "5", Touche::Saisie);
                self.touche(ui, "6", Touche::Saisie);
                self.touche(ui, "×", Touche::Operateur);
                ui.end_row();

                self.touche(ui, "1", Touche::Saisie);
                self.touche(ui, "2", Touche::Saisie);
                self.touche(ui, "3", Touche::Saisie);
                self.touche(ui, "-", Touche::Operateur);
                ui.end_row();

                self.touche(ui, "0", Touche::Saisie);
                self.touche(ui, ".", Touche::Saisie);
                self.touche_action(ui, "=", Action::Calculer);
                self.touche(ui, "+", Touche::Operateur);
                ui.end_row();
            });
    }

    fn ui_demarche(&self, ui: &mut egui::Ui) {
        egui::CollapsingHeader::new("Démarche")
            .default_open(false)
            .show(ui, |ui| {
                ui.label("Jetons :");
                ui.monospace(&self.demarche.jetons);
                ui.add_space(4.0);
                ui.label("RPN :");
                ui.monospace(&self.demarche.rpn);
            });
    }

    fn touche(&mut self, ui: &mut egui::Ui, label: &str, kind: Touche) {
        let resp = ui.add_sized(TOUCHE, egui::Button::new(label));
        if !resp.clicked() {
            return;
        }

        match kind {
            Touche::Saisie => self.ajouter(label),
            Touche::Operateur => self.ajouter_operateur(label),
        }
    }

    fn touche_action(&mut self, ui: &mut egui::Ui, label: &str, action: Action) {
        let resp = ui.add_sized(TOUCHE, egui::Button::new(label));
        if !resp.clicked() {
            return;
        }

        match action {
            Action::Effacer => self.effacer(),
            Action::Supprimer => self.supprimer_dernier(),
            Action::Calculer => self.calculer(),
        }
    }
}

#[derive(Clone, Copy, Debug)]
enum Action {
    Effacer,
    Supprimer,
    Calculer,
}

#[derive(Clone, Copy, Debug)]
enum Touche {
    Saisie,
    Operateur,
}
