//! Calculatrice RPN — bibliothèque
//!
//! - `noyau`   : tokenisation, shunting-yard, pile f64, registre d'opérateurs, matrices
//! - `requete` : travaux demandés par l'interface (JSON, saisie clavier)
//!
//! L'interface (fenêtre egui, ligne de commande) vit dans le binaire.

pub mod noyau;
pub mod requete;

pub use noyau::{evaluate, EvaluationError};
