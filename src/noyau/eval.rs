//! Noyau : évaluation (pipeline réel)
//!
//! blancs -> gardes textuelles -> jetons -> RPN -> valeur f64 -> finitude -> affichage
//!
//! Fonction pure : aucune mémoire entre deux appels.

use tracing::{debug, warn};

use super::erreur::Resultat;
use super::format::format_resultat;
use super::jetons::{format_tokens, tokenize};
use super::rpn::{eval_rpn, to_rpn};
use super::validation::{sans_blancs, valider};

/// API publique : évalue une expression et retourne la chaîne d’affichage canonique.
///
/// En cas d’échec, l’erreur porte un des cinq messages fixes (voir `ErreurCalcul`).
pub fn eval_expression(expr_str: &str) -> Resultat<String> {
    let sortie = pipeline(expr_str);
    if let Err(e) = &sortie {
        warn!(expression = expr_str, erreur = ?e, "évaluation refusée");
    }
    sortie
}

fn pipeline(expr_str: &str) -> Resultat<String> {
    // 1) Blancs
    let propre = sans_blancs(expr_str);

    // 2..6) Gardes textuelles
    valider(&propre)?;

    // 7) Jetons + RPN + valeur
    let jetons = tokenize(&propre)?;
    debug!(jetons = %format_tokens(&jetons), "tokenisation");

    let rpn = to_rpn(&jetons)?;
    debug!(rpn = %format_tokens(&rpn), "shunting-yard");

    let valeur = eval_rpn(&rpn)?;

    // 8) Finitude + 9) Affichage
    let texte = format_resultat(valeur)?;
    debug!(valeur, texte = %texte, "résultat");

    Ok(texte)
}
