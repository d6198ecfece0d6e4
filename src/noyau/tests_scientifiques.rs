//! Tests scientifiques (campagne) : invariants + robustesse + limites contrôlées.
//!
//! But : trouver les limites sans faire chauffer la machine.
//! - budget temps global
//! - tailles bornées (profondeur, longueur)
//!
//! Notes importantes (aligné avec l’état actuel du noyau) :
//! - La division par zéro n’est détectée que sous forme LITTÉRALE : toute sous-chaîne `/0`
//!   (donc `5/0.5` aussi).
//!   Un dénominateur calculé nul finit en "Invalid result" (infini / NaN).
//! - L’arithmétique est celle du double IEEE-754 : les artefacts (0.1+0.2) sont
//!   gommés par l’arrondi à 10 décimales, pas par un calcul exact.

use std::time::{Duration, Instant};

use super::erreur::ErreurCalcul;
use super::eval_expression;
use super::format::nombre_vers_texte;

fn eval_ok(expr: &str) -> String {
    eval_expression(expr).unwrap_or_else(|e| panic!("expr={expr:?} err={e}"))
}

fn assert_eval_eq(expr: &str, attendu: &str) {
    assert_eq!(eval_ok(expr), attendu, "expr={expr:?}");
}

fn assert_erreur(expr: &str, attendue: ErreurCalcul) {
    assert_eq!(eval_expression(expr), Err(attendue), "expr={expr:?}");
}

/// Budget global anti-gel (scientifique + safe).
fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Catalogue de scénarios ------------------------ */

#[test]
fn sci_scenarios_de_reference() {
    assert_eval_eq("1+2", "3");
    assert_eval_eq("(2+3)*4 ", "20");
    assert_eval_eq("3+2*4-5", "6");
    assert_eval_eq("0.1+0.2", "0.3");
    assert_eval_eq("999999999999999*9", "8999999999999991");
    assert_eval_eq("999999999999999999999*9", "9e+21");

    assert_erreur("5/0", ErreurCalcul::DivisionParZero);
    assert_erreur("5/0.0", ErreurCalcul::DivisionParZero);
    assert_erreur("(2+3", ErreurCalcul::ParenthesesDesequilibrees);
    assert_erreur("()", ErreurCalcul::ExpressionInvalide);
    assert_erreur("2++2", ErreurCalcul::ExpressionInvalide);
    assert_erreur("1+abc", ErreurCalcul::ExpressionInvalide);
    assert_erreur("", ErreurCalcul::ExpressionInvalide);
}

/* ------------------------ Ordre des gardes ------------------------ */

#[test]
fn sci_premiere_garde_gagne() {
    // division par zéro avant jeu de caractères
    assert_erreur("abc/0", ErreurCalcul::DivisionParZero);
    // division par zéro avant parenthèses
    assert_erreur("(5/0", ErreurCalcul::DivisionParZero);
    // jeu de caractères avant parenthèses
    assert_erreur("(2+x", ErreurCalcul::ExpressionInvalide);
    // parenthèses avant forme mal formée
    assert_erreur("(2++", ErreurCalcul::ParenthesesDesequilibrees);
    assert_erreur(")(", ErreurCalcul::ParenthesesDesequilibrees);
}

/* ------------------------ Suites mal formées ------------------------ */

#[test]
fn sci_suites_mal_formees() {
    for s in [
        "2+", "*3", "2**3", "2*/3", "2--2", "(*2)", "(2+)", "1.2.3", ".", "2(3)", "(1)(2)",
        "()+1", "1+()",
    ] {
        assert_erreur(s, ErreurCalcul::ExpressionInvalide);
    }
}

#[test]
fn sci_litteraux_decimaux_souples() {
    assert_eval_eq(".5+.5", "1");
    assert_eval_eq("5.*2", "10");
    assert_eval_eq("0.5/.25", "2");
    assert_eval_eq("007+1", "8");
}

/* ------------------------ Arithmétique double ------------------------ */

#[test]
fn sci_associativite_gauche() {
    assert_eval_eq("100/10/5", "2");
    assert_eval_eq("2-3-4", "-5");
    assert_eval_eq("2-(3-4)", "3");
    assert_eval_eq("100/(10/5)", "50");
}

#[test]
fn sci_arrondi_dix_decimales() {
    assert_eval_eq("1/3", "0.3333333333");
    assert_eval_eq("2/3", "0.6666666667");
    assert_eval_eq("0-1/3", "-0.3333333333");
    assert_eval_eq("1/8", "0.125");
    // plus petit que la demi-unité de la 10e décimale
    assert_eval_eq("1/30000000000", "0");
}

#[test]
fn sci_notation_exponentielle() {
    assert_eval_eq("100000000000000000000*10", "1e+21");
    assert_eval_eq("99999999999999999999*1", "100000000000000000000");
    assert_eval_eq("0-999999999999999999999*9", "-9e+21");
}

#[test]
fn sci_resultat_non_fini() {
    // 1e308 * 10 déborde vers l’infini
    let enorme = format!("1{}", "0".repeat(308));
    assert_erreur(&format!("{enorme}*10"), ErreurCalcul::ResultatInvalide);
    assert_erreur("5/(2-2)", ErreurCalcul::ResultatInvalide);
}

/* ------------------------ Propriétés ------------------------ */

#[test]
fn sci_idempotence_entiers() {
    for expr in ["1+2", "999999999999999*9", "123456789012345/3", "0-5+3", "(0.1+0.2)*10"] {
        let r = eval_ok(expr);
        // ré-évaluer un entier déjà canonique ne change rien
        // (le signe moins en tête est réécrit "0-" comme le fait l’UI)
        let relu = match r.strip_prefix('-') {
            Some(abs) => format!("0-{abs}"),
            None => r.clone(),
        };
        assert_eq!(eval_ok(&relu), r, "expr={expr:?}");
    }
}

#[test]
fn sci_aller_retour_entiers() {
    let cas: [(&str, f64); 4] = [
        ("999999999999999*9", 999999999999999.0 * 9.0),
        ("123456789012345/3", 123456789012345.0 / 3.0),
        ("999999999999999999999*9", 9e21),
        ("2*3+4*5", 26.0),
    ];
    for (expr, valeur) in cas {
        let r = eval_ok(expr);
        let relu: f64 = r.parse().unwrap_or_else(|e| panic!("relecture {r:?}: {e}"));
        assert_eq!(relu, valeur, "expr={expr:?}");
        assert_eq!(nombre_vers_texte(relu), r);
    }
}

/* ------------------------ Stress contrôlé (sans brûler) ------------------------ */

#[test]
fn sci_stress_somme_longue() {
    let t0 = Instant::now();
    let max = Duration::from_millis(2000);

    // Évaluation par pile : pas de récursion, donc pas de risque de débordement.
    let expr = vec!["1"; 20_000].join("+");
    budget(t0, max);

    assert_eval_eq(&expr, "20000");
    budget(t0, max);
}

#[test]
fn sci_stress_parentheses_profondes() {
    let t0 = Instant::now();
    let max = Duration::from_millis(2000);

    let n = 5_000;
    let expr = format!("{}2*3{}", "(".repeat(n), ")".repeat(n));
    budget(t0, max);

    assert_eval_eq(&expr, "6");
    budget(t0, max);
}
