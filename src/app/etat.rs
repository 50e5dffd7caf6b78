//! src/app/etat.rs
//!
//! État UI (sans vue).
//!
//! Rôle : une session de calculatrice = un seul tampon d’expression.
//!
//! Contrats :
//! - Aucune évaluation ici : toute la logique de saisie vit dans le noyau.
//! - Une touche à la fois, chaque touche est appliquée jusqu’au bout.

use crate::noyau::{Tampon, Touche};

#[derive(Clone, Debug, Default)]
pub struct AppCalc {
    tampon: Tampon,
}

impl AppCalc {
    /// Bouton (ou raccourci) pressé.
    pub fn appuyer(&mut self, touche: Touche) {
        self.tampon.appliquer(touche);
    }

    /// Texte tapé au clavier : les caractères sans touche sont ignorés.
    pub fn saisie_texte(&mut self, texte: &str) {
        for touche in texte.chars().filter_map(Touche::depuis_caractere) {
            self.appuyer(touche);
        }
    }

    /// Ce que la vue doit afficher.
    pub fn affichage(&self) -> &str {
        self.tampon.affichage()
    }
}
