// src/noyau/format.rs

/// Nombre maximal de chiffres après le point.
const CHIFFRES_FRACTION: usize = 15;

/// Affichage d’un résultat :
/// - au plus 15 chiffres après le point (arrondi)
/// - zéros finaux et point inutile retirés
/// - séparateur décimal toujours '.', jamais de notation exponentielle
/// - jamais de "-0"
pub fn format_resultat(v: f64) -> String {
    let mut s = format!("{v:.prec$}", prec = CHIFFRES_FRACTION);

    if s.contains('.') {
        while s.ends_with('0') {
            s.pop();
        }
        if s.ends_with('.') {
            s.pop();
        }
    }

    if s == "-0" {
        s.remove(0);
    }

    s
}
