//! Noyau — évaluation (pipeline réel)
//!
//! tokenize -> RPN -> machine à pile (f64)
//!
//! Aucun état entre deux appels : même entrée => même sortie.

use super::erreurs::{EvalError, EvaluationError};
use super::jetons::{format_tokens, tokenize, Tok};
use super::operateurs::{registre_standard, RegistreOperateurs};
use super::rpn::to_rpn;

#[derive(Default, Clone, Debug, PartialEq)]
pub struct DemarcheNoyau {
    pub jetons: String,
    pub rpn: String,
    pub note: String,
}

/// Point d'entrée du noyau (registre standard).
pub fn evaluate(expression: &str) -> Result<f64, EvaluationError> {
    evaluate_avec(expression, registre_standard())
}

/// Même chose avec un registre fourni par l'appelant.
pub fn evaluate_avec(
    expression: &str,
    registre: &RegistreOperateurs,
) -> Result<f64, EvaluationError> {
    let jetons = tokenize(expression)?;
    let rpn = to_rpn(&jetons)?;
    eval_rpn(&rpn, registre)
}

/// API interface : évalue et retourne aussi la démarche (jetons, RPN).
pub fn eval_expression(
    expression: &str,
    registre: &RegistreOperateurs,
) -> Result<(f64, DemarcheNoyau), EvaluationError> {
    // 1) Jetons
    let jetons = tokenize(expression)?;

    // 2) RPN
    let rpn = to_rpn(&jetons)?;

    // 3) Pile
    let valeur = eval_rpn(&rpn, registre)?;

    let d = DemarcheNoyau {
        jetons: format_tokens(&jetons),
        rpn: format_tokens(&rpn),
        note: "Pipeline: jetons → RPN (shunting-yard) → pile f64.".into(),
    };

    Ok((valeur, d))
}

/// Évalue une suite RPN avec une pile explicite.
///
/// - Num : empilé
/// - u-  : dépile a, empile -a
/// - op  : dépile b puis a, empile op(a, b)
pub fn eval_rpn(rpn: &[Tok], registre: &RegistreOperateurs) -> Result<f64, EvaluationError> {
    let mut pile: Vec<f64> = Vec::with_capacity(rpn.len());

    for tok in rpn {
        match tok {
            Tok::Num(litteral) => {
                let v = litteral
                    .parse::<f64>()
                    .map_err(|_| EvalError::NombreInvalide {
                        litteral: litteral.clone(),
                    })?;
                pile.push(v);
            }

            Tok::MoinsUnaire => {
                let a = pile.pop().ok_or_else(|| manque(tok))?;
                pile.push(-a);
            }

            Tok::Op(sym) => {
                if pile.len() < 2 {
                    return Err(manque(tok).into());
                }
                let b = pile.pop().ok_or_else(|| manque(tok))?;
                let a = pile.pop().ok_or_else(|| manque(tok))?;

                let op = registre.resolve(sym.encode_utf8(&mut [0u8; 4]))?;
                pile.push(op(a, b)?);
            }

            Tok::LPar | Tok::RPar => {
                return Err(EvalError::MalformedExpression {
                    restants: pile.len(),
                }
                .into())
            }
        }
    }

    match pile.as_slice() {
        [v] => Ok(*v),
        _ => Err(EvalError::MalformedExpression {
            restants: pile.len(),
        }
        .into()),
    }
}

fn manque(tok: &Tok) -> EvalError {
    EvalError::StackUnderflow {
        jeton: format_tokens(std::slice::from_ref(tok)),
    }
}
