// src/noyau/rpn.rs
//
// Shunting-yard -> RPN
// Objectif:
// - Convertir une suite de Tok (infixe) en RPN (postfix)
// - Aucune parenthèse ne survit dans la sortie
//
// Règles:
// - '+' '-' : 1, '*' '/' : 2, moins unaire : 3
// - binaires associatifs à gauche, moins unaire associatif à droite
//   (il ne dépile jamais un autre moins unaire en entrant sur la pile)

use super::erreurs::ParseError;
use super::jetons::Tok;

/// Table de précédence (constante : ne dépend d'aucun appel).
pub const fn precedence(t: &Tok) -> u8 {
    match t {
        Tok::Op('+') | Tok::Op('-') => 1,
        Tok::Op('*') | Tok::Op('/') => 2,
        Tok::MoinsUnaire => 3,
        _ => 0,
    }
}

fn is_right_associative(t: &Tok) -> bool {
    matches!(t, Tok::MoinsUnaire)
}

/// Convertit une suite de jetons en RPN (notation polonaise inversée).
///
/// Exemple:
///   tokens: [Num(3), Op(+), Num(4), Op(*), Num(2)]
///   rpn:    [Num(3), Num(4), Num(2), Op(*), Op(+)]
pub fn to_rpn(tokens: &[Tok]) -> Result<Vec<Tok>, ParseError> {
    let mut out: Vec<Tok> = Vec::with_capacity(tokens.len());
    let mut ops: Vec<Tok> = Vec::new();

    for tok in tokens.iter().cloned() {
        match tok {
            Tok::Num(_) => out.push(tok),

            Tok::Op(_) | Tok::MoinsUnaire => {
                // dépile tant que le sommet est un opérateur
                // et que la précédence/associativité exige de le sortir
                while let Some(top) = ops.last() {
                    if !top.est_operateur() {
                        break;
                    }

                    let p_top = precedence(top);
                    let p_tok = precedence(&tok);

                    let doit_pop = if is_right_associative(&tok) {
                        p_top > p_tok
                    } else {
                        p_top >= p_tok
                    };
                    if !doit_pop {
                        break;
                    }

                    if let Some(op) = ops.pop() {
                        out.push(op);
                    }
                }

                ops.push(tok);
            }

            Tok::LPar => ops.push(tok),

            Tok::RPar => {
                // dépile jusqu’à '(' (qui disparaît)
                let mut ouverte = false;
                while let Some(top) = ops.pop() {
                    if matches!(top, Tok::LPar) {
                        ouverte = true;
                        break;
                    }
                    out.push(top);
                }
                if !ouverte {
                    return Err(ParseError::ParentheseFermanteOrpheline);
                }
            }
        }
    }

    // vide la pile ops
    while let Some(op) = ops.pop() {
        if matches!(op, Tok::LPar | Tok::RPar) {
            return Err(ParseError::ParentheseOuvranteOrpheline);
        }
        out.push(op);
    }

    Ok(out)
}
