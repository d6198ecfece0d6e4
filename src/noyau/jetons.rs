// src/noyau/jetons.rs

use super::erreur::{ErreurCalcul, Resultat};

#[derive(Clone, Debug, PartialEq)]
pub enum Tok {
    Num(f64),

    Plus,
    Minus,
    Star,
    Slash,

    LPar,
    RPar,
}

/// Tokenize une chaîne en jetons.
/// Supporte:
/// - nombres décimaux (ex: 12, 0.5, .5, 5.)
/// - opérateurs + - * /
/// - parenthèses ( )
///
/// Un littéral comme `1.2.3` ou `.` seul est refusé (ExpressionInvalide).
/// Les zéros de tête sont lus en décimal (`007` = 7).
/// Attend une chaîne sans blancs (`validation::sans_blancs`) : un blanc est refusé.
pub fn tokenize(s: &str) -> Resultat<Vec<Tok>> {
    let mut out = Vec::new();
    let chars: Vec<char> = s.chars().collect();
    let mut i: usize = 0;

    while i < chars.len() {
        let c = chars[i];

        let simple = match c {
            '(' => Some(Tok::LPar),
            ')' => Some(Tok::RPar),
            '+' => Some(Tok::Plus),
            '-' => Some(Tok::Minus),
            '*' => Some(Tok::Star),
            '/' => Some(Tok::Slash),
            _ => None,
        };
        if let Some(t) = simple {
            out.push(t);
            i += 1;
            continue;
        }

        // Littéral numérique : plus longue suite de [0-9.]
        if c.is_ascii_digit() || c == '.' {
            let start = i;
            while i < chars.len() && (chars[i].is_ascii_digit() || chars[i] == '.') {
                i += 1;
            }
            let lit: String = chars[start..i].iter().collect();
            out.push(Tok::Num(lire_nombre(&lit)?));
            continue;
        }

        return Err(ErreurCalcul::ExpressionInvalide);
    }

    Ok(out)
}

fn lire_nombre(lit: &str) -> Resultat<f64> {
    let points = lit.chars().filter(|&c| c == '.').count();
    let chiffres = lit.chars().any(|c| c.is_ascii_digit());
    if points > 1 || !chiffres {
        return Err(ErreurCalcul::ExpressionInvalide);
    }
    // Conversion correctement arrondie (même valeur qu’un littéral double).
    lit.parse::<f64>().map_err(|_| ErreurCalcul::ExpressionInvalide)
}

/// Format utilitaire (journal) : liste de jetons en texte.
pub fn format_tokens(tokens: &[Tok]) -> String {
    let mut out = Vec::new();
    for t in tokens {
        let s = match t {
            Tok::Num(x) => format!("{x}"),

            Tok::Plus => "+".to_string(),
            Tok::Minus => "-".to_string(),
            Tok::Star => "*".to_string(),
            Tok::Slash => "/".to_string(),

            Tok::LPar => "(".to_string(),
            Tok::RPar => ")".to_string(),
        };
        out.push(s);
    }
    out.join(" ")
}
