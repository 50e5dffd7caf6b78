// src/noyau/jetons.rs

/// Les quatre opérateurs binaires de la calculatrice.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Op {
    Plus,
    Moins,
    Fois,
    Divise,
}

impl Op {
    pub fn depuis_char(c: char) -> Option<Op> {
        match c {
            '+' => Some(Op::Plus),
            '-' => Some(Op::Moins),
            '*' => Some(Op::Fois),
            '/' => Some(Op::Divise),
            _ => None,
        }
    }

    /// Caractère tel qu’il apparaît dans l’expression.
    pub fn symbole(self) -> char {
        match self {
            Op::Plus => '+',
            Op::Moins => '-',
            Op::Fois => '*',
            Op::Divise => '/',
        }
    }
}

pub fn est_operateur(c: char) -> bool {
    Op::depuis_char(c).is_some()
}

#[derive(Clone, Debug, PartialEq)]
pub enum Tok {
    /// Texte brut du nombre (signe éventuel inclus), lu plus tard par l’évaluateur.
    Num(String),
    Op(Op),
}

/// Tokenize une chaîne en jetons.
///
/// Règles:
/// - un nombre commence sur un chiffre, un '.', ou un '-' unaire
///   (premier caractère, ou juste après un opérateur)
/// - un nombre avale chiffres + au plus un '.' ; un second '.' coupe le nombre
/// - + - * / hors moins unaire => jeton opérateur
/// - tout autre caractère (ex: '%') est ignoré
pub fn tokenize(s: &str) -> Vec<Tok> {
    let mut out = Vec::new();
    let chars: Vec<char> = s.chars().collect();
    let mut i: usize = 0;

    while i < chars.len() {
        let c = chars[i];

        let moins_unaire = c == '-' && (i == 0 || est_operateur(chars[i - 1]));

        if c.is_ascii_digit() || c == '.' || moins_unaire {
            let start = i;
            if moins_unaire {
                i += 1;
            }

            let mut point_vu = false;
            while i < chars.len() && (chars[i].is_ascii_digit() || chars[i] == '.') {
                if chars[i] == '.' {
                    if point_vu {
                        break;
                    }
                    point_vu = true;
                }
                i += 1;
            }

            out.push(Tok::Num(chars[start..i].iter().collect()));
            continue;
        }

        if let Some(op) = Op::depuis_char(c) {
            out.push(Tok::Op(op));
        }
        i += 1;
    }

    out
}

/// Format utilitaire (logs) : liste de jetons en texte.
pub fn format_tokens(tokens: &[Tok]) -> String {
    tokens
        .iter()
        .map(|t| match t {
            Tok::Num(n) => n.clone(),
            Tok::Op(op) => op.symbole().to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}
