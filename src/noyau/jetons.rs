// src/noyau/jetons.rs

use super::erreurs::LexError;

#[derive(Clone, Debug, PartialEq)]
pub enum Tok {
    // Littéral brut, validé (f64 fini) mais pas encore converti.
    Num(String),

    // Opérateur binaire : '+', '-', '*', '/'
    Op(char),

    // '-' préfixe (décidé à la lecture, voir `est_moins_unaire`)
    MoinsUnaire,

    LPar,
    RPar,
}

impl Tok {
    /// Opérateur au sens de la table de précédence (binaire ou moins unaire).
    pub fn est_operateur(&self) -> bool {
        matches!(self, Tok::Op(_) | Tok::MoinsUnaire)
    }
}

/// Tokenize une chaîne en jetons.
/// Supporte:
/// - décimaux (ex: 12, 3.5, .5, 2.)
/// - notation scientifique (ex: 1e3, 2.5E-4)
/// - opérateurs + - * /
/// - parenthèses ( )
///
/// Le '-' est résolu par regard arrière sur UN seul jeton, sans retour arrière.
pub fn tokenize(s: &str) -> Result<Vec<Tok>, LexError> {
    let mut out: Vec<Tok> = Vec::new();
    let chars: Vec<char> = s.chars().collect();
    let mut i: usize = 0;

    while i < chars.len() {
        let c = chars[i];

        if c.is_whitespace() {
            i += 1;
            continue;
        }

        match c {
            '(' => {
                out.push(Tok::LPar);
                i += 1;
                continue;
            }
            ')' => {
                out.push(Tok::RPar);
                i += 1;
                continue;
            }
            '+' | '*' | '/' => {
                out.push(Tok::Op(c));
                i += 1;
                continue;
            }
            '-' => {
                if est_moins_unaire(out.last()) {
                    out.push(Tok::MoinsUnaire);
                } else {
                    out.push(Tok::Op('-'));
                }
                i += 1;
                continue;
            }
            _ => {}
        }

        // Nombre : chiffres, au plus un '.', au plus un exposant e/E[+-]
        if c.is_ascii_digit() || c == '.' {
            let start = i;
            let mut point = false;
            let mut exposant = false;

            while i < chars.len() {
                let d = chars[i];
                if d.is_ascii_digit() {
                    i += 1;
                } else if d == '.' && !point && !exposant {
                    point = true;
                    i += 1;
                } else if (d == 'e' || d == 'E') && !exposant {
                    exposant = true;
                    i += 1;
                    if i < chars.len() && (chars[i] == '+' || chars[i] == '-') {
                        i += 1;
                    }
                } else {
                    break;
                }
            }

            let litteral: String = chars[start..i].iter().collect();
            match litteral.parse::<f64>() {
                Ok(v) if v.is_finite() => out.push(Tok::Num(litteral)),
                _ => {
                    return Err(LexError::NombreInvalide {
                        litteral,
                        position: start,
                    })
                }
            }
            continue;
        }

        return Err(LexError::CaractereInattendu {
            caractere: c,
            position: i,
        });
    }

    Ok(out)
}

/// Règle volontairement locale (un seul jeton en arrière) :
/// unaire en début d'expression, après un opérateur ou après '('.
fn est_moins_unaire(precedent: Option<&Tok>) -> bool {
    match precedent {
        None => true,
        Some(t) => t.est_operateur() || matches!(t, Tok::LPar),
    }
}

/// Format utilitaire (debug/“démarche”) : liste de jetons en texte.
pub fn format_tokens(tokens: &[Tok]) -> String {
    let mut out = Vec::with_capacity(tokens.len());
    for t in tokens {
        let s = match t {
            Tok::Num(n) => n.clone(),
            Tok::Op(c) => c.to_string(),
            Tok::MoinsUnaire => "u-".to_string(),
            Tok::LPar => "(".to_string(),
            Tok::RPar => ")".to_string(),
        };
        out.push(s);
    }
    out.join(" ")
}
