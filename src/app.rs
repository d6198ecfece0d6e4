// src/app.rs
//
// Calculatrice Bayzat : module App (racine)
// -----------------------------------------
// Rôle:
// - Déclarer les sous-modules (etat.rs + vue.rs)
// - Ré-exporter AppCalc (pour main.rs: use calculatrice_bayzat::app::AppCalc;)
// - Fournir l’impl eframe::App (compatible NATIF + WEB)
// - Clavier global : chiffres . + - * / ( ) ; Entrée ou = ; Retour arrière ; Échap

pub mod etat;
pub mod vue;

// Ré-export pratique : `use crate::app::AppCalc;`
pub use etat::{AppCalc, Touche};

use eframe::egui;

/// Traduit un événement clavier egui en touche de calculatrice.
pub fn touche_depuis_evenement(ev: &egui::Event) -> Vec<Touche> {
    match ev {
        // Texte tapé : on garde seulement les symboles de la calculatrice.
        egui::Event::Text(t) => t.chars().filter_map(touche_depuis_caractere).collect(),

        egui::Event::Key {
            key, pressed: true, ..
        } => match key {
            egui::Key::Enter => vec![Touche::Egal],
            egui::Key::Backspace => vec![Touche::RetourArriere],
            egui::Key::Escape => vec![Touche::ToutEffacer],
            _ => Vec::new(),
        },

        _ => Vec::new(),
    }
}

/// Caractère tapé -> touche ('=' évalue, le reste est ignoré).
pub fn touche_depuis_caractere(c: char) -> Option<Touche> {
    match c {
        '0'..='9' | '.' | '+' | '-' | '*' | '/' | '(' | ')' => Some(Touche::Symbole(c)),
        '=' => Some(Touche::Egal),
        _ => None,
    }
}

impl eframe::App for AppCalc {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // On collecte d’abord (lecture de l’input), puis on applique (mutation de l’état).
        let touches: Vec<Touche> = ctx.input(|i| {
            i.events
                .iter()
                .flat_map(touche_depuis_evenement)
                .collect()
        });
        for t in touches {
            self.touche(t);
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            self.ui(ui); // méthode publique (dans vue.rs)
        });
    }
}
