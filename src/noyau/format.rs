// src/noyau/format.rs
//
// Affichage “canonique” d’un double :
// - entier     : tel quel (sans point), notation exponentielle à partir de 1e21
// - non entier : arrondi à 10 décimales (demi vers +∞), puis même rendu
//
// Rendu : chiffres les plus courts qui relisent le même double, puis placement du point
// selon l’exposant décimal n (k chiffres) :
//   k ≤ n ≤ 21   -> chiffres + zéros            (8999999999999991)
//   0 < n ≤ 21   -> point au milieu             (4.92)
//   -6 < n ≤ 0   -> 0.000…chiffres              (0.0001)
//   sinon        -> d[.ddd]e±x                  (9e+21, 1e-7)

use super::erreur::{ErreurCalcul, Resultat};

/// Échelle d’arrondi (10 décimales).
const ECHELLE: f64 = 1e10;

/// Formate le résultat final d’une évaluation.
pub fn format_resultat(x: f64) -> Resultat<String> {
    if !x.is_finite() {
        return Err(ErreurCalcul::ResultatInvalide);
    }

    if x.fract() == 0.0 {
        return Ok(nombre_vers_texte(x));
    }

    let arrondi = arrondi_demi_haut(x * ECHELLE) / ECHELLE;
    Ok(nombre_vers_texte(arrondi))
}

/// Arrondi à l’entier le plus proche, égalité vers +∞ (-2.5 -> -2, 2.5 -> 3).
///
/// `x - x.floor()` est exact pour un double, donc pas de biais sur les .5.
pub fn arrondi_demi_haut(x: f64) -> f64 {
    let bas = x.floor();
    if x - bas >= 0.5 {
        bas + 1.0
    } else {
        bas
    }
}

/// Conversion double -> texte, base 10 (voir l’en-tête pour le placement du point).
pub fn nombre_vers_texte(x: f64) -> String {
    if x.is_nan() {
        return "NaN".to_string();
    }
    // +0 et -0 s’affichent "0"
    if x == 0.0 {
        return "0".to_string();
    }
    if x.is_infinite() {
        return if x > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }

    let signe = if x < 0.0 { "-" } else { "" };
    let (chiffres, n) = chiffres_courts(x.abs());
    let k = chiffres.len() as i32;

    let corps = if k <= n && n <= 21 {
        format!("{chiffres}{}", "0".repeat((n - k) as usize))
    } else if 0 < n && n <= 21 {
        let (ent, frac) = chiffres.split_at(n as usize);
        format!("{ent}.{frac}")
    } else if -6 < n && n <= 0 {
        format!("0.{}{chiffres}", "0".repeat((-n) as usize))
    } else {
        let e = n - 1;
        let signe_e = if e < 0 { '-' } else { '+' };
        let (tete, queue) = chiffres.split_at(1);
        if queue.is_empty() {
            format!("{tete}e{signe_e}{}", e.abs())
        } else {
            format!("{tete}.{queue}e{signe_e}{}", e.abs())
        }
    };

    format!("{signe}{corps}")
}

/// Chiffres décimaux les plus courts (sans point, sans zéros de queue) et
/// exposant n tel que x = 0.chiffres × 10^n.
///
/// S’appuie sur `{:e}` de la std, qui produit déjà la représentation la plus
/// courte qui relit le même double (ex: "8.999999999999991e15", "3e-1").
fn chiffres_courts(x: f64) -> (String, i32) {
    let sci = format!("{x:e}");
    let (mantisse, exposant) = sci.split_once('e').unwrap_or((sci.as_str(), "0"));
    let exposant: i32 = exposant.parse().unwrap_or(0);

    let mut chiffres: String = mantisse.chars().filter(|c| c.is_ascii_digit()).collect();
    while chiffres.len() > 1 && chiffres.ends_with('0') {
        chiffres.pop();
    }

    (chiffres, exposant + 1)
}
