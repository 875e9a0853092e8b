//! Tests scientifiques (campagne) : propriétés de bout en bout du noyau.
//!
//! - littéraux seuls : valeur exacte
//! - priorités, parenthèses, moins chaînés
//! - notation scientifique
//! - erreurs typées (lecture, parenthèses, division par zéro)
//! - idempotence (aucun état caché)

use super::erreurs::{ArithmeticError, LexError, ParseError};
use super::{evaluate, EvaluationError};

fn eval_ok(expr: &str) -> f64 {
    evaluate(expr).unwrap_or_else(|e| panic!("expr={expr:?} err={e}"))
}

fn assert_valeur(expr: &str, attendu: f64) {
    let v = eval_ok(expr);
    assert_eq!(v, attendu, "expr={expr:?}");
}

/* ------------------------ Littéraux ------------------------ */

#[test]
fn sci_litteral_seul() {
    for s in ["0", "42", "3.25", ".5", "7.", "1e3", "2.5E-4", "6.02e+23", "0.1"] {
        let attendu: f64 = s.parse().unwrap();
        assert_valeur(s, attendu);
    }
}

/* ------------------------ Priorités ------------------------ */

#[test]
fn sci_priorites_et_parentheses() {
    assert_valeur("3 + 4 * 2", 11.0);
    assert_valeur("(3 + 4) * 2", 14.0);
    assert_valeur("2 * (3 + 4) * (5 - 1)", 56.0);
    assert_valeur("((((1 + 1))))", 2.0);
}

#[test]
fn sci_moins_chaines() {
    assert_valeur("2---2", 0.0);
    assert_valeur("2--2", 4.0);
    assert_valeur("2 - - - - 2", 4.0);
    assert_valeur("-(-(-1))", -1.0);
}

#[test]
fn sci_notation_scientifique() {
    assert_valeur("1e3 + 1", 1001.0);
    assert_valeur("1.5e2 * 2", 300.0);
    assert_valeur("1e-2 * 100", 1.0);
}

/* ------------------------ Erreurs ------------------------ */

#[test]
fn sci_parenthese_non_fermee() {
    assert_eq!(
        evaluate("(1+2"),
        Err(EvaluationError::Parse(ParseError::ParentheseOuvranteOrpheline))
    );
    assert_eq!(
        evaluate("1+2)"),
        Err(EvaluationError::Parse(ParseError::ParentheseFermanteOrpheline))
    );
}

#[test]
fn sci_caractere_inconnu() {
    assert_eq!(
        evaluate("5 $ 3"),
        Err(EvaluationError::Lex(LexError::CaractereInattendu {
            caractere: '$',
            position: 2,
        }))
    );
}

#[test]
fn sci_division_par_zero() {
    assert_eq!(
        evaluate("5 / 0"),
        Err(EvaluationError::Arithmetique(ArithmeticError::DivisionParZero))
    );
    assert_eq!(
        evaluate("5 / -0.0"),
        Err(EvaluationError::Arithmetique(ArithmeticError::DivisionParZero))
    );
}

/* ------------------------ Idempotence ------------------------ */

#[test]
fn sci_idempotence() {
    for expr in ["3 + 4 * 2", "2---2", "(1+2", "1 / 0", "0.1 + 0.2"] {
        let premier = evaluate(expr);
        for _ in 0..50 {
            assert_eq!(evaluate(expr), premier, "expr={expr:?}");
        }
    }
}

#[test]
fn sci_appels_concurrents() {
    let fils: Vec<_> = (0..4)
        .map(|i| {
            std::thread::spawn(move || {
                let expr = format!("{i} * (2 + 3) - -1");
                (i, evaluate(&expr))
            })
        })
        .collect();

    for f in fils {
        let (i, r) = f.join().unwrap();
        assert_eq!(r, Ok(f64::from(i) * 5.0 + 1.0));
    }
}
