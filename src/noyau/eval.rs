//! Noyau — évaluation (pipeline réel)
//!
//! tokenize -> RPN (shunting-yard) -> pile f64
//!
//! Fonction pure : aucun état conservé entre deux appels.

use log::trace;

use super::erreur::ErreurEval;
use super::jetons::{format_tokens, tokenize};
use super::rpn::{eval_rpn, to_rpn};

/// API publique : évalue une expression déjà bien formée (`12+3.5*2`).
pub fn eval_expression(expr_str: &str) -> Result<f64, ErreurEval> {
    let s = expr_str.trim();
    if s.is_empty() {
        return Err(ErreurEval::ExpressionMalformee("entrée vide"));
    }

    // 1) Jetons
    let jetons = tokenize(s);
    trace!("jetons: {}", format_tokens(&jetons));

    // 2) RPN
    let rpn = to_rpn(&jetons);
    trace!("rpn: {}", format_tokens(&rpn));

    // 3) Pile
    let v = eval_rpn(&rpn)?;
    if !v.is_finite() {
        return Err(ErreurEval::Depassement);
    }

    Ok(v)
}
