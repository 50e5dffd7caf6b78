// src/app.rs
//
// Calculatrice — module App (racine)
// ----------------------------------
// Rôle:
// - Déclarer les sous-modules (etat.rs + vue.rs)
// - Ré-exporter AppCalc (pour main.rs: use crate::app::AppCalc;)
// - Fournir l’impl eframe::App (compatible NATIF + WEB)
// - Clavier global : texte tapé + Enter / Backspace / Delete / Escape

pub mod etat;
pub mod vue;

// Ré-export pratique : `use crate::app::AppCalc;`
pub use etat::AppCalc;

use eframe::egui;

use crate::noyau::Touche;

/// Touches spéciales (hors texte) -> touche de la calculatrice.
fn touche_pour_cle(cle: egui::Key) -> Option<Touche> {
    match cle {
        egui::Key::Enter => Some(Touche::Egal),
        egui::Key::Backspace | egui::Key::Delete => Some(Touche::Supprimer),
        egui::Key::Escape => Some(Touche::Effacer),
        _ => None,
    }
}

impl eframe::App for AppCalc {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Pas de champ texte dans la vue : tout le clavier revient à la calculatrice.
        let events = ctx.input(|i| i.events.clone());
        for ev in &events {
            match ev {
                egui::Event::Text(texte) => self.saisie_texte(texte),
                egui::Event::Key {
                    key, pressed: true, ..
                } => {
                    if let Some(touche) = touche_pour_cle(*key) {
                        self.appuyer(touche);
                    }
                }
                _ => {}
            }
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            self.ui(ui); // méthode publique (dans vue.rs)
        });
    }
}
