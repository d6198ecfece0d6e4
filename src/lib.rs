//! Calculatrice Bayzat
//!
//! - noyau : évaluation d’une expression infixe (+ - * / parenthèses) en double précision,
//!   avec erreurs classées et affichage canonique
//! - app   : état + vue egui (pavé, clavier, historique), natif et wasm

pub mod app;
pub mod noyau;

/// Titre unique (natif + web).
pub const TITRE_APP: &str = "Bayzat Calculator";
