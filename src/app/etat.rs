//! src/app/etat.rs
//!
//! État UI (sans vue).
//!
//! Rôle : contenir l’état de la calculatrice (expression en cours, dernier résultat,
//! historique, erreur) et offrir les actions des boutons / touches.
//!
//! Contrats :
//! - Une seule évaluation par "=" (ou Entrée), déléguée au noyau.
//! - Le moins unaire est réécrit "0-" ici, jamais dans le noyau.
//! - En cas d’erreur : on garde le dernier résultat et l’expression, on affiche le message.

use tracing::info;

use crate::noyau::eval_expression;

/// Nombre d’entrées gardées dans l’historique (la plus récente en tête).
pub const HISTORIQUE_MAX: usize = 10;

/// Résultat affiché au démarrage et après "C".
const RESULTAT_INITIAL: &str = "0";

/// Une touche du pavé (ou son équivalent clavier).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Touche {
    /// Chiffre, point, opérateur ou parenthèse.
    Symbole(char),
    ToutEffacer,
    RetourArriere,
    Egal,
}

#[derive(Clone, Debug)]
pub struct AppCalc {
    // --- entrée utilisateur ---
    pub expression: String,

    // --- sorties ---
    pub resultat: String,
    pub historique: Vec<String>,
    pub erreur: Option<String>,
}

impl Default for AppCalc {
    fn default() -> Self {
        Self {
            expression: String::new(),
            resultat: RESULTAT_INITIAL.to_string(),
            historique: Vec::new(),
            erreur: None,
        }
    }
}

fn est_operateur(c: char) -> bool {
    matches!(c, '+' | '-' | '*' | '/')
}

fn finit_par_operateur(s: &str) -> bool {
    s.ends_with(est_operateur)
}

impl AppCalc {
    /* ------------------------ Actions “boutons” ------------------------ */

    /// Dispatch d’une touche vers l’action correspondante.
    pub fn touche(&mut self, t: Touche) {
        match t {
            Touche::Symbole(c) => self.ajouter(c),
            Touche::ToutEffacer => self.tout_effacer(),
            Touche::RetourArriere => self.retour_arriere(),
            Touche::Egal => self.egal(),
        }
    }

    /// Ajoute un symbole à l’expression (efface l’erreur affichée).
    ///
    /// - '.' : ignoré si le nombre courant a déjà un point
    /// - '-' en tête, après un opérateur ou après '(' : devient "0-"
    /// - autre opérateur en tête : ignoré
    /// - opérateur après opérateur : remplace le précédent
    pub fn ajouter(&mut self, c: char) {
        self.erreur = None;

        if c == '.' {
            let courant = self
                .expression
                .rsplit(|ch: char| est_operateur(ch) || ch == '(' || ch == ')')
                .next()
                .unwrap_or("");
            if !courant.contains('.') {
                self.expression.push('.');
            }
            return;
        }

        if est_operateur(c) {
            let vide = self.expression.is_empty();
            if c == '-'
                && (vide || finit_par_operateur(&self.expression) || self.expression.ends_with('('))
            {
                self.expression.push_str("0-");
                return;
            }
            if vide {
                return;
            }
            if finit_par_operateur(&self.expression) {
                self.expression.pop();
            }
        }

        self.expression.push(c);
    }

    /// C / Échap : remise à zéro (expression + résultat + erreur). L’historique reste.
    pub fn tout_effacer(&mut self) {
        self.expression.clear();
        self.resultat = RESULTAT_INITIAL.to_string();
        self.erreur = None;
    }

    /// DEL / Retour arrière : retire le dernier caractère.
    pub fn retour_arriere(&mut self) {
        self.expression.pop();
    }

    /// "=" / Entrée : évalue via le noyau.
    ///
    /// Un opérateur final est ignoré ("2+" évalue "2").
    pub fn egal(&mut self) {
        if self.expression.is_empty() {
            return;
        }

        let mut expr = self.expression.clone();
        if finit_par_operateur(&expr) {
            expr.pop();
        }

        match eval_expression(&expr) {
            Ok(valeur) => {
                info!(expression = %expr, resultat = %valeur, "calcul");
                self.historique.insert(0, format!("{expr} = {valeur}"));
                self.historique.truncate(HISTORIQUE_MAX);
                self.resultat = valeur;
                self.erreur = None;
                self.expression.clear();
            }
            Err(e) => {
                self.erreur = Some(e.to_string());
            }
        }
    }

    /// Ligne "expression" telle qu’affichée (vide pendant une erreur, "0" si rien).
    pub fn expression_affichee(&self) -> &str {
        if self.erreur.is_some() {
            ""
        } else if self.expression.is_empty() {
            "0"
        } else {
            &self.expression
        }
    }
}
