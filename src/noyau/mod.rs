//! Noyau d'évaluation (f64)
//!
//! Organisation interne :
//! - erreurs.rs    : taxonomie des erreurs (thiserror)
//! - jetons.rs     : tokenisation (moins unaire / binaire)
//! - rpn.rs        : shunting-yard -> RPN
//! - operateurs.rs : registre alias -> opération binaire
//! - eval.rs       : machine à pile + pipeline complet
//! - matrice.rs    : addition / multiplication de matrices
//!
//! Le noyau ne journalise rien : toute erreur remonte à l'appelant.

pub mod erreurs;
pub mod eval;
pub mod jetons;
pub mod matrice;
pub mod operateurs;
pub mod rpn;

#[cfg(test)]
mod tests_scientifiques;

#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use erreurs::EvaluationError;
pub use eval::{eval_expression, evaluate, evaluate_avec};
pub use matrice::Matrice;
pub use operateurs::{registre_standard, RegistreOperateurs};
