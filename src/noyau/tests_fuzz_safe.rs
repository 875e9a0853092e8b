//! Tests fuzz safe : robustesse + déterminisme + oracle.
//!
//! But : marteler le pipeline sans brûler la machine.
//! - proptest (expressions générées, profondeur bornée)
//! - oracle : descente récursive directe sur les mêmes jetons
//! - aucune panique, quelle que soit l'entrée
//! - budget temps global sur les cas de stress

use std::time::{Duration, Instant};

use proptest::prelude::*;

use super::erreurs::EvaluationError;
use super::evaluate;
use super::jetons::{tokenize, Tok};
use super::operateurs::registre_standard;

/* ------------------------ Oracle : descente récursive ------------------------ */

/// expr    := terme (('+' | '-') terme)*
/// terme   := unaire (('*' | '/') unaire)*
/// unaire  := 'u-' unaire | primaire
/// primaire:= Num | '(' expr ')'
struct Descente<'a> {
    jetons: &'a [Tok],
    i: usize,
}

impl Descente<'_> {
    fn applique(c: char, a: f64, b: f64) -> Result<f64, EvaluationError> {
        let mut buf = [0u8; 4];
        let op = registre_standard().resolve(c.encode_utf8(&mut buf))?;
        Ok(op(a, b)?)
    }

    fn expr(&mut self) -> Result<f64, EvaluationError> {
        let mut acc = self.terme()?;
        while let Some(Tok::Op(c @ ('+' | '-'))) = self.jetons.get(self.i) {
            let c = *c;
            self.i += 1;
            let b = self.terme()?;
            acc = Self::applique(c, acc, b)?;
        }
        Ok(acc)
    }

    fn terme(&mut self) -> Result<f64, EvaluationError> {
        let mut acc = self.unaire()?;
        while let Some(Tok::Op(c @ ('*' | '/'))) = self.jetons.get(self.i) {
            let c = *c;
            self.i += 1;
            let b = self.unaire()?;
            acc = Self::applique(c, acc, b)?;
        }
        Ok(acc)
    }

    fn unaire(&mut self) -> Result<f64, EvaluationError> {
        if let Some(Tok::MoinsUnaire) = self.jetons.get(self.i) {
            self.i += 1;
            return Ok(-self.unaire()?);
        }
        self.primaire()
    }

    fn primaire(&mut self) -> Result<f64, EvaluationError> {
        let tok = self.jetons.get(self.i).cloned();
        self.i += 1;
        match tok {
            Some(Tok::Num(n)) => Ok(n.parse().unwrap()),
            Some(Tok::LPar) => {
                let v = self.expr()?;
                assert_eq!(self.jetons.get(self.i), Some(&Tok::RPar), "oracle: ')' attendue");
                self.i += 1;
                Ok(v)
            }
            autre => panic!("oracle: jeton inattendu {autre:?}"),
        }
    }
}

fn oracle(expr: &str) -> Result<f64, EvaluationError> {
    let jetons = tokenize(expr)?;
    let mut d = Descente {
        jetons: &jetons,
        i: 0,
    };
    let v = d.expr()?;
    assert_eq!(d.i, jetons.len(), "oracle: jetons restants dans {expr:?}");
    Ok(v)
}

/* ------------------------ Génération d’expressions (bornée) ------------------------ */

fn litteral() -> impl Strategy<Value = String> {
    prop_oneof![
        (0u32..1000).prop_map(|n| n.to_string()),
        (0u32..100, 0u32..100).prop_map(|(a, b)| format!("{a}.{b}")),
        (1u32..10, 0u32..4).prop_map(|(m, e)| format!("{m}e{e}")),
        (1u32..10).prop_map(|n| format!(".{n}")),
    ]
}

/// Expressions syntaxiquement valides (le rendu ne met pas toujours d'espaces).
fn expression() -> impl Strategy<Value = String> {
    litteral().prop_recursive(5, 48, 2, |inner| {
        prop_oneof![
            (
                inner.clone(),
                prop::sample::select(vec!["+", "-", "*", "/"]),
                inner.clone(),
                any::<bool>(),
            )
                .prop_map(|(a, op, b, espaces)| if espaces {
                    format!("{a} {op} {b}")
                } else {
                    format!("{a}{op}{b}")
                }),
            inner.clone().prop_map(|a| format!("({a})")),
            inner.prop_map(|a| format!("-{a}")),
        ]
    })
}

fn meme_resultat(a: &Result<f64, EvaluationError>, b: &Result<f64, EvaluationError>) -> bool {
    match (a, b) {
        (Ok(x), Ok(y)) => x == y || (x.is_nan() && y.is_nan()),
        (Err(_), Err(_)) => true,
        _ => false,
    }
}

proptest! {
    #[test]
    fn rpn_egale_descente_recursive(expr in expression()) {
        let rpn = evaluate(&expr);
        let direct = oracle(&expr);
        prop_assert!(
            meme_resultat(&rpn, &direct),
            "expr={:?} rpn={:?} direct={:?}", expr, rpn, direct
        );
    }

    #[test]
    fn idempotence(expr in expression()) {
        let a = evaluate(&expr);
        let b = evaluate(&expr);
        prop_assert!(meme_resultat(&a, &b));
    }

    #[test]
    fn aucune_panique_sur_entree_arbitraire(s in "[0-9eE.+*/() $x-]{0,40}") {
        // Erreur ou valeur : les deux sont acceptables, la panique non.
        let _ = evaluate(&s);
    }

    #[test]
    fn litteral_seul_exact(n in 0u32..1_000_000, frac in 0u32..1000) {
        let s = format!("{n}.{frac}");
        let attendu: f64 = s.parse().unwrap();
        prop_assert_eq!(evaluate(&s), Ok(attendu));
    }
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Helper somme balancée ------------------------ */

fn somme_balancee(terme: &str, n: usize) -> String {
    let mut items: Vec<String> = (0..n).map(|_| terme.to_string()).collect();
    while items.len() > 1 {
        let mut next = Vec::new();
        let mut i = 0;
        while i < items.len() {
            if i + 1 < items.len() {
                next.push(format!("({}+{})", items[i], items[i + 1]));
                i += 2;
            } else {
                next.push(items[i].clone());
                i += 1;
            }
        }
        items = next;
    }
    items.pop().unwrap_or_else(|| "0".to_string())
}

/* ------------------------ Stress ------------------------ */

#[test]
fn fuzz_safe_somme_balancee() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    let expr = somme_balancee("1/2", 800);
    let v = evaluate(&expr).unwrap_or_else(|e| panic!("err: {e}"));
    budget(t0, max);

    // 800*(1/2) = 400
    assert_eq!(v, 400.0);
}

#[test]
fn fuzz_safe_imbrication_profonde() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    // pile explicite : pas de récursion, pas de débordement
    let n = 5000;
    let expr = format!("{}1{}", "(".repeat(n), ")".repeat(n));
    assert_eq!(evaluate(&expr), Ok(1.0));

    let moins = format!("{}7", "-".repeat(n));
    assert_eq!(evaluate(&moins), Ok(7.0));
    budget(t0, max);
}
