//! Noyau de la calculatrice
//!
//! Organisation interne :
//! - erreur.rs   : erreurs typées de l’évaluateur
//! - jetons.rs   : tokenisation (+ opérateurs)
//! - rpn.rs      : shunting-yard + évaluation de la RPN
//! - format.rs   : affichage d’un résultat (15 décimales max)
//! - eval.rs     : pipeline complet (fonction pure)
//! - tampon.rs   : expression construite touche par touche

pub mod erreur;
pub mod eval;
pub mod format;
pub mod jetons;
pub mod rpn;
pub mod tampon;

#[cfg(test)]
mod tests_proprietes;

// API publique minimale
pub use eval::eval_expression;
pub use jetons::Op;
pub use tampon::{Tampon, Touche};
