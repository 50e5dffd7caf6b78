// src/noyau/erreur.rs

use thiserror::Error;

/// Échecs possibles de l’évaluateur.
///
/// Aucun n’est fatal : le tampon les rattrape tous et les traduit
/// en message d’affichage (voir `tampon.rs`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum ErreurEval {
    /// Diviseur de magnitude inférieure à `f64::EPSILON`.
    #[error("division par zéro")]
    DivisionParZero,

    /// Nombre illisible, pile vide ou opérandes en trop.
    /// Ne devrait pas arriver avec une entrée issue du tampon.
    #[error("expression malformée: {0}")]
    ExpressionMalformee(&'static str),

    /// Résultat non fini (±∞ ou NaN).
    #[error("dépassement de capacité")]
    Depassement,
}
