//! Noyau de calcul (double précision IEEE-754)
//!
//! Organisation interne :
//! - erreur.rs     : les cinq erreurs classées (messages fixes)
//! - validation.rs : blancs + gardes textuelles (division par zéro, caractères, parenthèses)
//! - jetons.rs     : tokenisation
//! - rpn.rs        : shunting-yard + évaluation de la RPN
//! - format.rs     : affichage canonique (arrondi 10 décimales, notation exponentielle)
//! - eval.rs       : pipeline complet

pub mod erreur;
pub mod eval;
pub mod format;
pub mod jetons;
pub mod rpn;
pub mod validation;

#[cfg(test)]
mod tests_scientifiques;


// API publique minimale
pub use erreur::ErreurCalcul;
pub use eval::eval_expression;
