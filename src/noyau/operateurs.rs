//! Noyau — registre des opérateurs binaires
//!
//! Table immuable alias -> fonction. Un alias peut être un symbole (`+`) ou
//! un mot (`add`) ; la recherche ignore la casse et les espaces autour.
//!
//! Ajouter un opérateur = ajouter UNE entrée (via `avec`), sans toucher
//! aux appelants (évaluateur, requêtes).

use std::collections::HashMap;
use std::sync::OnceLock;

use super::erreurs::{ArithmeticError, UnsupportedOperationError};

/// Opération binaire f64 (peut échouer : division par zéro).
pub type OperationBinaire = fn(f64, f64) -> Result<f64, ArithmeticError>;

fn addition(a: f64, b: f64) -> Result<f64, ArithmeticError> {
    Ok(a + b)
}

fn soustraction(a: f64, b: f64) -> Result<f64, ArithmeticError> {
    Ok(a - b)
}

fn multiplication(a: f64, b: f64) -> Result<f64, ArithmeticError> {
    Ok(a * b)
}

fn division(a: f64, b: f64) -> Result<f64, ArithmeticError> {
    // 0.0 et -0.0 : égaux pour ==
    if b == 0.0 {
        return Err(ArithmeticError::DivisionParZero);
    }
    Ok(a / b)
}

/// Entrées standard : (alias, opération).
const STANDARD: &[(&str, OperationBinaire)] = &[
    ("+", addition),
    ("add", addition),
    ("-", soustraction),
    ("subtract", soustraction),
    ("*", multiplication),
    ("multiply", multiplication),
    ("/", division),
    ("divide", division),
];

#[derive(Clone, Debug, Default)]
pub struct RegistreOperateurs {
    entrees: HashMap<String, OperationBinaire>,
}

impl RegistreOperateurs {
    /// Registre vide (utile pour composer un jeu d'opérateurs réduit).
    pub fn vide() -> Self {
        Self::default()
    }

    /// Les quatre opérations, symboles + mots.
    pub fn standard() -> Self {
        STANDARD
            .iter()
            .fold(Self::vide(), |r, (alias, op)| r.avec(alias, *op))
    }

    /// Enregistre un alias supplémentaire (remplace un alias existant).
    pub fn avec(mut self, alias: &str, op: OperationBinaire) -> Self {
        self.entrees.insert(normalise(alias), op);
        self
    }

    pub fn resolve(&self, cle: &str) -> Result<OperationBinaire, UnsupportedOperationError> {
        self.entrees
            .get(&normalise(cle))
            .copied()
            .ok_or_else(|| UnsupportedOperationError {
                cle: cle.to_string(),
            })
    }

    /// Alias connus, triés (affichage / aide).
    pub fn alias(&self) -> Vec<&str> {
        let mut v: Vec<&str> = self.entrees.keys().map(String::as_str).collect();
        v.sort_unstable();
        v
    }
}

/// Registre standard partagé (construit une seule fois, jamais modifié).
pub fn registre_standard() -> &'static RegistreOperateurs {
    static REGISTRE: OnceLock<RegistreOperateurs> = OnceLock::new();
    REGISTRE.get_or_init(RegistreOperateurs::standard)
}

fn normalise(cle: &str) -> String {
    cle.trim().to_lowercase()
}
