// src/app/vue.rs
//
// Vue (UI egui), natif + web
// ---------------------------
// Objectifs :
// - Même AppCalc (etat.rs) pour natif + wasm
// - Affichage : expression (gris) + résultat (grand, rouge si erreur)
// - Pavé 4×5 : C DEL ( ) / 7 8 9 ÷ / 4 5 6 × / 1 2 3 − / 0 . = +
// - Historique (10 derniers calculs)
//
// Le clavier est géré dans app.rs (au niveau du Context).

use eframe::egui;

use super::etat::{AppCalc, Touche};

const FOND_ECRAN: egui::Color32 = egui::Color32::from_rgb(0x0F, 0x17, 0x2A);
const TEXTE_EXPRESSION: egui::Color32 = egui::Color32::from_rgb(0x94, 0xA3, 0xB8);
const TEXTE_RESULTAT: egui::Color32 = egui::Color32::from_rgb(0xE5, 0xE7, 0xEB);
const TEXTE_ERREUR: egui::Color32 = egui::Color32::from_rgb(0xF8, 0x71, 0x71);

const TAILLE_BOUTON: [f32; 2] = [72.0, 56.0];

/// Pavé : (libellé, touche). Les libellés typographiques (÷ × −) envoient l’opérateur ASCII.
const PAVE: [[(&str, Touche); 4]; 5] = [
    [
        ("C", Touche::ToutEffacer),
        ("DEL", Touche::RetourArriere),
        ("(", Touche::Symbole('(')),
        (")", Touche::Symbole(')')),
    ],
    [
        ("7", Touche::Symbole('7')),
        ("8", Touche::Symbole('8')),
        ("9", Touche::Symbole('9')),
        ("÷", Touche::Symbole('/')),
    ],
    [
        ("4", Touche::Symbole('4')),
        ("5", Touche::Symbole('5')),
        ("6", Touche::Symbole('6')),
        ("×", Touche::Symbole('*')),
    ],
    [
        ("1", Touche::Symbole('1')),
        ("2", Touche::Symbole('2')),
        ("3", Touche::Symbole('3')),
        ("−", Touche::Symbole('-')),
    ],
    [
        ("0", Touche::Symbole('0')),
        (".", Touche::Symbole('.')),
        ("=", Touche::Egal),
        ("+", Touche::Symbole('+')),
    ],
];

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(8.0, 8.0);

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.heading(crate::TITRE_APP);
                    ui.label("Simple. Accurate. Readable.");
                });
                ui.add_space(8.0);

                self.ui_ecran(ui);

                if let Some(msg) = &self.erreur {
                    ui.add_space(6.0);
                    ui.colored_label(ui.visuals().error_fg_color, msg.as_str());
                }

                ui.add_space(8.0);
                self.ui_pave(ui);

                if !self.historique.is_empty() {
                    ui.add_space(8.0);
                    ui.separator();
                    self.ui_historique(ui);
                }
            });
    }

    fn ui_ecran(&self, ui: &mut egui::Ui) {
        egui::Frame::group(ui.style())
            .fill(FOND_ECRAN)
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());

                ui.label(
                    egui::RichText::new(self.expression_affichee())
                        .monospace()
                        .color(TEXTE_EXPRESSION),
                );

                let couleur = if self.erreur.is_some() {
                    TEXTE_ERREUR
                } else {
                    TEXTE_RESULTAT
                };
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(
                        egui::RichText::new(self.resultat.as_str())
                            .monospace()
                            .size(32.0)
                            .strong()
                            .color(couleur),
                    );
                });
            });
    }

    fn ui_pave(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("pave_bayzat")
            .num_columns(4)
            .spacing([8.0, 8.0])
            .show(ui, |ui| {
                for rangee in PAVE.iter() {
                    for (libelle, touche) in rangee.iter() {
                        let texte = egui::RichText::new(*libelle).size(18.0).strong();
                        if ui.add_sized(TAILLE_BOUTON, egui::Button::new(texte)).clicked() {
                            self.touche(*touche);
                        }
                    }
                    ui.end_row();
                }
            });
    }

    fn ui_historique(&self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.strong("History");
            ui.label(format!("({} items)", self.historique.len()));
        });
        for ligne in &self.historique {
            ui.monospace(ligne.as_str());
        }
    }
}
