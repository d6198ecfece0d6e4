// src/noyau/erreur.rs
//
// Erreurs classées du noyau.
// Cinq genres, chacun avec un message FIXE affiché tel quel par l’UI.

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ErreurCalcul {
    /// Sous-chaîne `/0` détectée avant l’évaluation (`5/0`, `5/0.0`, `5/0.5`…).
    #[error("Division by zero is not allowed")]
    DivisionParZero,

    /// Profondeur négative ou non nulle à la fin.
    #[error("Mismatched parentheses detected")]
    ParenthesesDesequilibrees,

    /// Caractère interdit, parenthèses vides, suite d’opérateurs mal formée.
    #[error("Invalid mathematical expression")]
    ExpressionInvalide,

    /// Valeur non finie (infini ou NaN).
    #[error("Invalid result")]
    ResultatInvalide,

    /// Tout le reste (incohérence interne).
    #[error("Calculation error")]
    Calcul,
}

pub type Resultat<T> = std::result::Result<T, ErreurCalcul>;
