// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// - Écran : une ligne, alignée à droite, monospace
// - Pavé : 5 rangées x 4 colonnes, chaque bouton = une Touche du noyau
// - Aucune règle de saisie ici (tout passe par AppCalc::appuyer)

use eframe::egui;

use super::etat::AppCalc;
use crate::noyau::{Op, Touche};

const TAILLE_ECRAN: f32 = 34.0;
const TAILLE_BOUTON: [f32; 2] = [72.0, 52.0];

/// Disposition du pavé, rangée par rangée.
const PAVE: [[(&str, Touche); 4]; 5] = [
    [
        ("AC", Touche::Effacer),
        ("DEL", Touche::Supprimer),
        ("%", Touche::Pourcent),
        ("÷", Touche::Operateur(Op::Divise)),
    ],
    [
        ("7", Touche::Chiffre(7)),
        ("8", Touche::Chiffre(8)),
        ("9", Touche::Chiffre(9)),
        ("×", Touche::Operateur(Op::Fois)),
    ],
    [
        ("4", Touche::Chiffre(4)),
        ("5", Touche::Chiffre(5)),
        ("6", Touche::Chiffre(6)),
        ("-", Touche::Operateur(Op::Moins)),
    ],
    [
        ("1", Touche::Chiffre(1)),
        ("2", Touche::Chiffre(2)),
        ("3", Touche::Chiffre(3)),
        ("+", Touche::Operateur(Op::Plus)),
    ],
    [
        ("00", Touche::DoubleZero),
        ("0", Touche::Chiffre(0)),
        (".", Touche::Point),
        ("=", Touche::Egal),
    ],
];

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        self.ui_ecran(ui);
        ui.add_space(10.0);
        self.ui_pave(ui);
    }

    fn ui_ecran(&self, ui: &mut egui::Ui) {
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(
                        egui::RichText::new(self.affichage())
                            .monospace()
                            .size(TAILLE_ECRAN),
                    );
                });
            });
    }

    fn ui_pave(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("pave_calculatrice")
            .num_columns(4)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                for rangee in PAVE {
                    for (libelle, touche) in rangee {
                        self.bouton(ui, libelle, touche);
                    }
                    ui.end_row();
                }
            });
    }

    fn bouton(&mut self, ui: &mut egui::Ui, libelle: &str, touche: Touche) {
        let resp = ui.add_sized(
            TAILLE_BOUTON,
            egui::Button::new(egui::RichText::new(libelle).size(20.0)),
        );
        if resp.clicked() {
            self.appuyer(touche);
        }
    }
}
