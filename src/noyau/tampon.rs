//! src/noyau/tampon.rs
//!
//! Tampon d’expression : l’expression se construit touche par touche.
//!
//! Contrats :
//! - jamais deux opérateurs de suite (le second remplace le premier)
//! - pas d’opérateur en tête, sauf le moins unaire
//! - au plus un '.' par nombre
//! - chaque touche est une transition complète (état, touche) -> (état, affichage)
//!
//! Le tampon est le seul point de reprise des erreurs de l’évaluateur :
//! rien ne remonte vers la vue, sinon un texte d’affichage.

use log::{debug, error, warn};

use super::erreur::ErreurEval;
use super::eval::eval_expression;
use super::format::format_resultat;
use super::jetons::{est_operateur, Op};

/// Affichage au démarrage, et après "=" sur une entrée vide.
pub const AFFICHAGE_ZERO: &str = "0";

/// Affichage après AC (ou DEL sur une entrée déjà vide).
pub const AFFICHAGE_VIDE: &str = " ";

pub const MSG_DIVISION_PAR_ZERO: &str = "Cannot divide by 0";
pub const MSG_ERREUR: &str = "Error";

/// Jeu fermé d’actions accepté par le tampon.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Touche {
    /// 0..=9 (toute autre valeur est ignorée)
    Chiffre(u8),
    DoubleZero,
    Operateur(Op),
    Point,
    Pourcent,
    Egal,
    /// AC
    Effacer,
    /// DEL
    Supprimer,
}

impl Touche {
    /// Correspondance clavier -> touche (saisie au clavier physique).
    pub fn depuis_caractere(c: char) -> Option<Touche> {
        if let Some(d) = c.to_digit(10) {
            return Some(Touche::Chiffre(d as u8));
        }
        if let Some(op) = Op::depuis_char(c) {
            return Some(Touche::Operateur(op));
        }
        match c {
            'x' | 'X' | '×' => Some(Touche::Operateur(Op::Fois)),
            '÷' => Some(Touche::Operateur(Op::Divise)),
            '.' | ',' => Some(Touche::Point),
            '%' => Some(Touche::Pourcent),
            '=' => Some(Touche::Egal),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tampon {
    /// Expression complète, ex: "12+3.5*2"
    expression: String,
    /// Nombre en cours de saisie (après le dernier opérateur)
    fragment: String,
    /// Vrai juste après un "=" réussi
    vient_d_evaluer: bool,
    /// Dernier texte rendu (conservé tel quel par les touches sans effet)
    affichage: String,
}

impl Default for Tampon {
    fn default() -> Self {
        Self {
            expression: String::new(),
            fragment: String::new(),
            vient_d_evaluer: false,
            affichage: AFFICHAGE_ZERO.to_string(),
        }
    }
}

impl Tampon {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn expression(&self) -> &str {
        &self.expression
    }

    pub fn fragment(&self) -> &str {
        &self.fragment
    }

    pub fn vient_d_evaluer(&self) -> bool {
        self.vient_d_evaluer
    }

    pub fn affichage(&self) -> &str {
        &self.affichage
    }

    /* ------------------------ Répartition ------------------------ */

    /// Applique une touche et renvoie le nouvel affichage.
    pub fn appliquer(&mut self, touche: Touche) -> &str {
        debug!("touche: {touche:?}");

        match touche {
            Touche::Chiffre(d) => self.append_digit(d),
            Touche::DoubleZero => self.append_double_zero(),
            Touche::Operateur(op) => self.apply_operator(op),
            Touche::Point => self.append_decimal_point(),
            Touche::Pourcent => self.apply_percent(),
            Touche::Egal => self.evaluate(),
            Touche::Effacer => self.clear_all(),
            Touche::Supprimer => self.delete_last(),
        }
    }

    /// Forme pure : (état, touche) -> (nouvel état, affichage). `self` est intact.
    pub fn transition(&self, touche: Touche) -> (Tampon, String) {
        let mut suivant = self.clone();
        let affichage = suivant.appliquer(touche).to_string();
        (suivant, affichage)
    }

    /* ------------------------ Saisie ------------------------ */

    pub fn append_digit(&mut self, d: u8) -> &str {
        let Some(c) = char::from_digit(u32::from(d), 10) else {
            warn!("chiffre hors bornes ignoré: {d}");
            return &self.affichage;
        };

        self.repartir_si_evalue();
        self.expression.push(c);
        self.fragment.push(c);
        self.afficher_expression()
    }

    /// "00" : pas de suppression des zéros de tête ("0" + "00" => "000").
    pub fn append_double_zero(&mut self) -> &str {
        self.repartir_si_evalue();
        self.expression.push_str("00");
        self.fragment.push_str("00");
        self.afficher_expression()
    }

    pub fn apply_operator(&mut self, op: Op) -> &str {
        self.vient_d_evaluer = false;

        if self.expression.is_empty() {
            // seul le moins unaire peut ouvrir une expression
            if op == Op::Moins {
                self.expression.push('-');
                self.fragment.push('-');
                return self.afficher_expression();
            }
            return &self.affichage;
        }

        // moins unaire seul : il ne se remplace pas par un opérateur binaire
        if self.expression == "-" {
            return self.afficher_expression();
        }

        if self.expression.ends_with(est_operateur) {
            self.expression.pop();
        }
        self.expression.push(op.symbole());
        self.fragment.clear();
        self.afficher_expression()
    }

    pub fn append_decimal_point(&mut self) -> &str {
        self.repartir_si_evalue();

        if self.fragment.is_empty() {
            self.expression.push_str("0.");
            self.fragment.push_str("0.");
        } else if !self.fragment.contains('.') {
            self.expression.push('.');
            self.fragment.push('.');
        }

        self.afficher_expression()
    }

    /// % : le nombre en cours est divisé par 100 et réécrit suivi de '%'.
    ///
    /// Pas idempotent : "50" % => "0.5%", puis % => "0.005%".
    pub fn apply_percent(&mut self) -> &str {
        if self.fragment.is_empty() {
            return &self.affichage;
        }

        let nombre = match self.fragment.parse::<f64>() {
            Ok(v) => v,
            Err(e) => {
                warn!("% ignoré sur {:?}: {e}", self.fragment);
                return &self.affichage;
            }
        };

        let pourcent = nombre / 100.0;
        if !pourcent.is_finite() {
            warn!("% ignoré : nombre trop grand ({} chiffres)", self.fragment.len());
            return &self.affichage;
        }

        let formate = format_resultat(pourcent);

        let debut = debut_nombre(&self.expression);
        self.expression.truncate(debut);
        self.expression.push_str(&formate);
        self.expression.push('%');

        self.fragment = formate;
        self.afficher_expression()
    }

    /* ------------------------ Évaluation ------------------------ */

    pub fn evaluate(&mut self) -> &str {
        if self.expression.trim().is_empty() {
            return self.afficher(AFFICHAGE_ZERO);
        }

        // tolère une saisie inachevée : "5+" ou "5."
        if self.expression.ends_with(|c: char| est_operateur(c) || c == '.') {
            self.expression.pop();
        }

        match eval_expression(&self.expression) {
            Ok(v) => {
                let formate = format_resultat(v);
                debug!("{} = {formate}", self.expression);

                self.expression.clone_from(&formate);
                self.fragment = formate;
                self.vient_d_evaluer = true;
                self.afficher_expression()
            }
            Err(ErreurEval::DivisionParZero) => {
                error!("évaluation de {:?}: division par zéro", self.expression);
                self.vider();
                self.afficher(MSG_DIVISION_PAR_ZERO)
            }
            Err(e) => {
                error!("évaluation de {:?}: {e}", self.expression);
                self.vider();
                self.afficher(MSG_ERREUR)
            }
        }
    }

    /* ------------------------ Effacement ------------------------ */

    /// AC : remise à zéro totale.
    pub fn clear_all(&mut self) -> &str {
        self.vider();
        self.afficher(AFFICHAGE_VIDE)
    }

    /// DEL : retire le dernier caractère et recalcule le nombre en cours.
    pub fn delete_last(&mut self) -> &str {
        if self.expression.is_empty() {
            return self.afficher(AFFICHAGE_VIDE);
        }

        self.expression.pop();
        self.fragment = self.expression[debut_nombre(&self.expression)..].to_string();
        self.vient_d_evaluer = false;

        if self.expression.is_empty() {
            self.afficher(AFFICHAGE_ZERO)
        } else {
            self.afficher_expression()
        }
    }

    /* ------------------------ Utilitaires ------------------------ */

    /// Après un "=", une nouvelle saisie repart d’une expression vide.
    fn repartir_si_evalue(&mut self) {
        if self.vient_d_evaluer {
            self.vider();
        }
    }

    fn vider(&mut self) {
        self.expression.clear();
        self.fragment.clear();
        self.vient_d_evaluer = false;
    }

    fn afficher(&mut self, texte: &str) -> &str {
        self.affichage.clear();
        self.affichage.push_str(texte);
        &self.affichage
    }

    fn afficher_expression(&mut self) -> &str {
        self.affichage.clone_from(&self.expression);
        &self.affichage
    }
}

/// Indice où commence le nombre en cours : juste après le dernier opérateur binaire.
/// Un moins unaire (en tête, ou juste après un opérateur) fait partie du nombre.
fn debut_nombre(expr: &str) -> usize {
    let Some(i) = expr.rfind(est_operateur) else {
        return 0;
    };

    let unaire =
        expr[i..].starts_with('-') && expr[..i].chars().next_back().map_or(true, est_operateur);

    if unaire {
        i
    } else {
        i + 1
    }
}
