// src/noyau/validation.rs
//
// Gardes textuelles, AVANT tout parsing (ordre imposé, première garde qui échoue gagne) :
// 1) suppression des blancs
// 2) motif division par zéro littérale
// 3) jeu de caractères
// 4) équilibre des parenthèses
// 5) "()" seul
// 6) "()" suivi d’un opérateur en tête

use super::erreur::{ErreurCalcul, Resultat};

const OPERATEURS: [char; 4] = ['+', '-', '*', '/'];

/// Retire tous les blancs (espaces, tabulations, retours…), BOM U+FEFF compris.
pub fn sans_blancs(s: &str) -> String {
    s.chars().filter(|&c| !est_blanc(c)).collect()
}

fn est_blanc(c: char) -> bool {
    // U+FEFF n’a pas la propriété White_Space mais compte comme blanc ici.
    c.is_whitespace() || c == '\u{FEFF}'
}

/// Applique les gardes 2 à 6 sur une chaîne déjà nettoyée.
pub fn valider(propre: &str) -> Resultat<()> {
    if division_par_zero_litterale(propre) {
        return Err(ErreurCalcul::DivisionParZero);
    }

    if propre.is_empty() || !propre.chars().all(caractere_autorise) {
        return Err(ErreurCalcul::ExpressionInvalide);
    }

    verifier_parentheses(propre)?;

    if propre == "()" {
        return Err(ErreurCalcul::ExpressionInvalide);
    }

    if let Some(reste) = propre.strip_prefix("()") {
        if reste.starts_with(OPERATEURS) {
            return Err(ErreurCalcul::ExpressionInvalide);
        }
    }

    Ok(())
}

fn caractere_autorise(c: char) -> bool {
    c.is_ascii_digit() || OPERATEURS.contains(&c) || matches!(c, '(' | ')' | '.')
}

/// Heuristique textuelle : la sous-chaîne "/0" n’importe où.
///
/// Attrape "5/0", "5/0.0", mais aussi "5/0.5" et "10/05" (motif littéral, pas la valeur).
/// Ne voit PAS les dénominateurs calculés ("5/(1-1)") : ceux-là finissent en ResultatInvalide.
pub fn division_par_zero_litterale(propre: &str) -> bool {
    propre.contains("/0")
}

/// Compteur de profondeur : négatif en cours de route, ou non nul à la fin => erreur.
pub fn verifier_parentheses(propre: &str) -> Resultat<()> {
    let mut profondeur: i64 = 0;
    for c in propre.chars() {
        match c {
            '(' => profondeur += 1,
            ')' => profondeur -= 1,
            _ => {}
        }
        if profondeur < 0 {
            return Err(ErreurCalcul::ParenthesesDesequilibrees);
        }
    }
    if profondeur != 0 {
        return Err(ErreurCalcul::ParenthesesDesequilibrees);
    }
    Ok(())
}
