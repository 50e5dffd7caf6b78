//! Tests de propriétés : invariants du tampon + évaluateur, sur saisies aléatoires.
//!
//! - RNG déterministe (seed fixe)
//! - longueur de saisie bornée
//! - budget temps global

use std::time::{Duration, Instant};

use super::erreur::ErreurEval;
use super::eval_expression;
use super::format::format_resultat;
use super::jetons::{est_operateur, Op};
use super::tampon::{Tampon, Touche, MSG_DIVISION_PAR_ZERO, MSG_ERREUR};

/* ------------------------ RNG déterministe minimal ------------------------ */

#[derive(Clone)]
struct Rng {
    state: u64,
}
impl Rng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }
    fn next_u32(&mut self) -> u32 {
        // LCG simple (déterministe)
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }
    fn pick(&mut self, n: u32) -> u32 {
        if n == 0 {
            0
        } else {
            self.next_u32() % n
        }
    }
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Génération ------------------------ */

const OPS: [Op; 4] = [Op::Plus, Op::Moins, Op::Fois, Op::Divise];

fn touche_au_hasard(rng: &mut Rng) -> Touche {
    match rng.pick(20) {
        0..=9 => Touche::Chiffre(rng.pick(10) as u8),
        10..=12 => Touche::Operateur(OPS[rng.pick(4) as usize]),
        13 => Touche::DoubleZero,
        14 => Touche::Point,
        15 => Touche::Pourcent,
        16 | 17 => Touche::Egal,
        18 => Touche::Supprimer,
        _ => Touche::Effacer,
    }
}

/// Expression "propre" : nombres (≤ 1 point) séparés par des opérateurs binaires.
fn expression_au_hasard(rng: &mut Rng) -> String {
    let mut s = String::new();
    let n = 1 + rng.pick(5);
    for k in 0..n {
        if k > 0 {
            s.push(OPS[rng.pick(4) as usize].symbole());
        }
        s.push_str(&(1 + rng.pick(999)).to_string());
        if rng.pick(3) == 0 {
            s.push('.');
            s.push_str(&rng.pick(100).to_string());
        }
    }
    s
}

/// Référence : précédence appliquée à la main (produits d’abord, puis somme gauche-droite).
fn reference(expr: &str) -> Option<f64> {
    let mut termes: Vec<f64> = Vec::new();
    let mut signes: Vec<f64> = vec![1.0];
    let mut courant: Option<f64> = None;
    let mut op_mul: Option<char> = None;

    let mut nombre = String::new();
    let vider = |nombre: &mut String,
                     courant: &mut Option<f64>,
                     op_mul: &mut Option<char>|
     -> Option<()> {
        let v: f64 = nombre.parse().ok()?;
        nombre.clear();
        *courant = Some(match (*courant, *op_mul) {
            (None, _) => v,
            (Some(c), Some('*')) => c * v,
            (Some(c), Some('/')) => {
                if v.abs() < f64::EPSILON {
                    return None;
                }
                c / v
            }
            _ => return None,
        });
        *op_mul = None;
        Some(())
    };

    for c in expr.chars() {
        if c.is_ascii_digit() || c == '.' {
            nombre.push(c);
            continue;
        }
        vider(&mut nombre, &mut courant, &mut op_mul)?;
        match c {
            '*' | '/' => op_mul = Some(c),
            '+' | '-' => {
                termes.push(courant.take()?);
                signes.push(if c == '-' { -1.0 } else { 1.0 });
            }
            _ => return None,
        }
    }
    vider(&mut nombre, &mut courant, &mut op_mul)?;
    termes.push(courant?);

    Some(
        termes
            .iter()
            .zip(signes.iter())
            .fold(0.0, |acc, (t, s)| acc + s * t),
    )
}

/* ------------------------ Propriétés de l’évaluateur ------------------------ */

#[test]
fn prop_precedence_comme_reference() {
    let start = Instant::now();
    let mut rng = Rng::new(0x00C0_FFEE);

    for _ in 0..2_000 {
        budget(start, Duration::from_secs(5));

        let expr = expression_au_hasard(&mut rng);
        match (eval_expression(&expr), reference(&expr)) {
            (Ok(v), Some(r)) => {
                let tol = 1e-9 * r.abs().max(1.0);
                assert!((v - r).abs() <= tol, "expr={expr:?} v={v} ref={r}");
            }
            (Err(ErreurEval::DivisionParZero), None) => {}
            (obtenu, attendu) => panic!("expr={expr:?} obtenu={obtenu:?} attendu={attendu:?}"),
        }
    }
}

#[test]
fn prop_format_idempotent() {
    let start = Instant::now();
    let mut rng = Rng::new(42);

    for _ in 0..2_000 {
        budget(start, Duration::from_secs(5));

        let expr = expression_au_hasard(&mut rng);
        let Ok(v) = eval_expression(&expr) else {
            continue;
        };
        let texte = format_resultat(v);
        let relu = eval_expression(&texte)
            .unwrap_or_else(|e| panic!("relecture de {texte:?} ({expr:?}): {e}"));
        assert_eq!(format_resultat(relu), texte, "expr={expr:?}");
    }
}

#[test]
fn prop_diviseur_minuscule_toujours_refuse() {
    for diviseur in ["0", "0.0", "00", "0.0000000000000001", "0.00000000000000002"] {
        for num in ["1", "-5", "123.25", "0"] {
            let expr = format!("{num}/{diviseur}");
            assert_eq!(
                eval_expression(&expr),
                Err(ErreurEval::DivisionParZero),
                "expr={expr:?}"
            );
        }
    }
}

/* ------------------------ Invariants du tampon ------------------------ */

fn check_invariants(t: &Tampon, touche: Touche) {
    let e = t.expression();

    // seulement chiffres, '.', opérateurs et '%'
    assert!(
        e.chars()
            .all(|c| c.is_ascii_digit() || c == '.' || c == '%' || est_operateur(c)),
        "caractère inattendu dans {e:?} après {touche:?}"
    );

    // jamais deux opérateurs de suite
    let chars: Vec<char> = e.chars().collect();
    for w in chars.windows(2) {
        assert!(
            !(est_operateur(w[0]) && est_operateur(w[1])),
            "deux opérateurs de suite dans {e:?} après {touche:?}"
        );
    }

    // pas d’opérateur en tête, sauf le moins unaire
    if let Some(c) = chars.first() {
        assert!(
            !est_operateur(*c) || *c == '-',
            "opérateur en tête dans {e:?} après {touche:?}"
        );
    }

    // au plus un '.' dans le nombre en cours
    assert!(
        t.fragment().matches('.').count() <= 1,
        "fragment {:?} après {touche:?}",
        t.fragment()
    );

    // l’affichage est l’expression, ou une sentinelle
    let a = t.affichage();
    assert!(
        a == e || a == "0" || a == " " || a == MSG_ERREUR || a == MSG_DIVISION_PAR_ZERO,
        "affichage {a:?} pour expression {e:?} après {touche:?}"
    );

    // après '=', seul '%' peut encore réécrire le résultat
    if t.vient_d_evaluer() {
        let f = t.fragment();
        assert!(
            e == f || e.strip_suffix('%') == Some(f),
            "après '=' : expression {e:?}, fragment {f:?}"
        );
    }
}

#[test]
fn prop_saisie_aleatoire_ne_casse_rien() {
    let start = Instant::now();
    let mut rng = Rng::new(7);

    for _ in 0..300 {
        budget(start, Duration::from_secs(5));

        let mut t = Tampon::new();
        for _ in 0..(1 + rng.pick(40)) {
            let touche = touche_au_hasard(&mut rng);
            t.appliquer(touche);
            check_invariants(&t, touche);
        }
    }
}

#[test]
fn prop_egal_sur_saisie_propre_donne_la_reference() {
    let start = Instant::now();
    let mut rng = Rng::new(2024);

    for _ in 0..500 {
        budget(start, Duration::from_secs(5));

        let expr = expression_au_hasard(&mut rng);
        let mut t = Tampon::new();
        for c in expr.chars() {
            let touche = Touche::depuis_caractere(c)
                .unwrap_or_else(|| panic!("caractère non saisissable: {c:?}"));
            t.appliquer(touche);
        }
        assert_eq!(t.expression(), expr);

        let affichage = t.evaluate().to_string();
        match reference(&expr) {
            Some(r) => assert_eq!(affichage, format_resultat(r).as_str(), "expr={expr:?}"),
            None => assert_eq!(affichage, MSG_DIVISION_PAR_ZERO, "expr={expr:?}"),
        }
    }
}
