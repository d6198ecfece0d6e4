// src/noyau/rpn.rs
//
// Shunting-yard -> RPN -> valeur f64
// Objectif:
// - Convertir une suite de Tok en RPN (postfix), en refusant les suites mal formées
// - Puis évaluer la RPN sur une pile de doubles (IEEE-754, sans récursion)
//
// Règles:
// - Opérateurs binaires seulement, associatifs à gauche
// - Pas de moins unaire : l’UI réécrit "-x" en "0-x" avant l’appel

use super::erreur::{ErreurCalcul, Resultat};
use super::jetons::Tok;

fn precedence(t: &Tok) -> i32 {
    match t {
        Tok::Plus | Tok::Minus => 1,
        Tok::Star | Tok::Slash => 2,
        _ => 0,
    }
}

/// Convertit une suite de jetons en RPN (notation polonaise inversée).
///
/// Exemple:
///   tokens: [Num(2), Plus, Num(3), Star, Num(4)]
///   rpn:    [Num(2), Num(3), Num(4), Star, Plus]
///
/// Refuse (ExpressionInvalide) : deux opérateurs de suite, opérateur en tête
/// ou en queue, `()` n’importe où, valeur collée à une valeur ou à `)`.
pub fn to_rpn(tokens: &[Tok]) -> Resultat<Vec<Tok>> {
    let mut out: Vec<Tok> = Vec::with_capacity(tokens.len());
    let mut ops: Vec<Tok> = Vec::new();

    // true tant qu’on attend un opérande (début, après opérateur, après '(').
    let mut attend_valeur = true;

    for tok in tokens.iter().cloned() {
        match tok {
            Tok::Num(_) => {
                if !attend_valeur {
                    return Err(ErreurCalcul::ExpressionInvalide);
                }
                out.push(tok);
                attend_valeur = false;
            }

            Tok::LPar => {
                // "2(3)" : multiplication implicite non supportée
                if !attend_valeur {
                    return Err(ErreurCalcul::ExpressionInvalide);
                }
                ops.push(tok);
            }

            Tok::RPar => {
                // "()" ou "(2+)"
                if attend_valeur {
                    return Err(ErreurCalcul::ExpressionInvalide);
                }
                loop {
                    match ops.pop() {
                        Some(Tok::LPar) => break,
                        Some(op) => out.push(op),
                        None => return Err(ErreurCalcul::ParenthesesDesequilibrees),
                    }
                }
            }

            Tok::Plus | Tok::Minus | Tok::Star | Tok::Slash => {
                if attend_valeur {
                    return Err(ErreurCalcul::ExpressionInvalide);
                }

                // associativité gauche : on sort tout ce qui lie au moins aussi fort
                while let Some(top) = ops.last() {
                    if matches!(top, Tok::LPar) || precedence(top) < precedence(&tok) {
                        break;
                    }
                    if let Some(op) = ops.pop() {
                        out.push(op);
                    }
                }

                ops.push(tok);
                attend_valeur = true;
            }
        }
    }

    // vide, ou opérateur final
    if attend_valeur {
        return Err(ErreurCalcul::ExpressionInvalide);
    }

    while let Some(op) = ops.pop() {
        if matches!(op, Tok::LPar) {
            return Err(ErreurCalcul::ParenthesesDesequilibrees);
        }
        out.push(op);
    }

    Ok(out)
}

/// Évalue une RPN déjà validée par `to_rpn`.
///
/// Une pile incohérente ici ne vient pas de l’utilisateur : ErreurCalcul::Calcul.
pub fn eval_rpn(rpn: &[Tok]) -> Resultat<f64> {
    let mut st: Vec<f64> = Vec::with_capacity(rpn.len() / 2 + 1);

    for tok in rpn {
        match tok {
            Tok::Num(x) => st.push(*x),

            Tok::Plus | Tok::Minus | Tok::Star | Tok::Slash => {
                let b = st.pop().ok_or(ErreurCalcul::Calcul)?;
                let a = st.pop().ok_or(ErreurCalcul::Calcul)?;

                let v = match tok {
                    Tok::Plus => a + b,
                    Tok::Minus => a - b,
                    Tok::Star => a * b,
                    _ => a / b,
                };
                st.push(v);
            }

            Tok::LPar | Tok::RPar => return Err(ErreurCalcul::Calcul),
        }
    }

    match (st.pop(), st.is_empty()) {
        (Some(v), true) => Ok(v),
        _ => Err(ErreurCalcul::Calcul),
    }
}
