// src/noyau/rpn.rs
//
// Shunting-yard -> RPN -> valeur
// Objectif:
// - Convertir une suite de Tok en RPN (postfix)
// - Puis l’évaluer sur une pile de f64
//
// Règles:
// - deux niveaux de précédence seulement (* / > + -), tous associatifs à gauche
// - pas de parenthèses : la pile d’opérateurs ne contient que des Op
// - le moins unaire est déjà collé au nombre par le tokenizer

use super::erreur::ErreurEval;
use super::jetons::{Op, Tok};

/// Sous ce seuil (en valeur absolue), un diviseur compte comme zéro.
///
/// Epsilon machine (≈2.22e-16), et non le plus petit sous-normal (≈4.9e-324) :
/// `5/0.0000000000000002` est donc refusé au lieu d’être calculé.
const SEUIL_DIVISEUR: f64 = f64::EPSILON;

fn precedence(op: Op) -> u8 {
    match op {
        Op::Plus | Op::Moins => 1,
        Op::Fois | Op::Divise => 2,
    }
}

/// Convertit une suite de jetons en RPN (notation polonaise inversée).
///
/// Exemple:
///   tokens: [2, +, 3, *, 4]
///   rpn:    [2, 3, 4, *, +]
pub fn to_rpn(tokens: &[Tok]) -> Vec<Tok> {
    let mut out: Vec<Tok> = Vec::with_capacity(tokens.len());
    let mut ops: Vec<Op> = Vec::new();

    for tok in tokens.iter().cloned() {
        match tok {
            Tok::Num(_) => out.push(tok),

            Tok::Op(op) => {
                // >= : associativité à gauche (10-2-3 => (10-2)-3)
                while let Some(&top) = ops.last() {
                    if precedence(top) < precedence(op) {
                        break;
                    }
                    out.push(Tok::Op(top));
                    ops.pop();
                }
                ops.push(op);
            }
        }
    }

    // vide la pile ops
    while let Some(op) = ops.pop() {
        out.push(Tok::Op(op));
    }

    out
}

/// Évalue une RPN. Il doit rester exactement une valeur sur la pile.
pub fn eval_rpn(rpn: &[Tok]) -> Result<f64, ErreurEval> {
    let mut st: Vec<f64> = Vec::new();

    for tok in rpn {
        match tok {
            Tok::Num(texte) => {
                let v = texte
                    .parse::<f64>()
                    .map_err(|_| ErreurEval::ExpressionMalformee("nombre invalide"))?;
                st.push(v);
            }

            Tok::Op(op) => {
                let b = st
                    .pop()
                    .ok_or(ErreurEval::ExpressionMalformee("opérande manquant"))?;
                let a = st
                    .pop()
                    .ok_or(ErreurEval::ExpressionMalformee("opérande manquant"))?;

                let v = match op {
                    Op::Plus => a + b,
                    Op::Moins => a - b,
                    Op::Fois => a * b,
                    Op::Divise => {
                        if b.abs() < SEUIL_DIVISEUR {
                            return Err(ErreurEval::DivisionParZero);
                        }
                        a / b
                    }
                };
                st.push(v);
            }
        }
    }

    match (st.pop(), st.is_empty()) {
        (Some(v), true) => Ok(v),
        (Some(_), false) => Err(ErreurEval::ExpressionMalformee("opérandes en trop")),
        (None, _) => Err(ErreurEval::ExpressionMalformee("expression vide")),
    }
}
