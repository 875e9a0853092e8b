//! src/cli.rs
//!
//! Ligne de commande (natif seulement).
//!
//! - sans argument        : fenêtre
//! - `--fichier req.json` : exécute la requête JSON, affiche le résultat
//! - `--expression "..."` : évalue une expression, affiche le résultat

use std::path::PathBuf;

use clap::Parser;

use calculatrice_rpn::noyau::EvaluationError;
use calculatrice_rpn::requete::{charger_fichier, Resultat, Travail};

#[derive(Parser, Debug)]
#[command(
    name = "calculatrice_rpn",
    version,
    about = "Calculatrice RPN (f64) : fenêtre, ou calcul direct en ligne de commande"
)]
pub struct Cli {
    /// Fichier JSON de requête (operation + numbers, matrixA + matrixB, ou expression)
    #[arg(short, long, conflicts_with = "expression")]
    pub fichier: Option<PathBuf>,

    /// Expression à évaluer, ex: "(3 + 4) * 2"
    #[arg(short, long, allow_hyphen_values = true)]
    pub expression: Option<String>,
}

impl Cli {
    /// Travail demandé sans fenêtre (None => lancer l'interface graphique).
    pub fn travail(&self) -> Option<Result<Travail, EvaluationError>> {
        if let Some(chemin) = &self.fichier {
            return Some(charger_fichier(chemin).and_then(|q| q.travail()));
        }
        self.expression
            .as_ref()
            .map(|e| Ok(Travail::Expression(e.clone())))
    }
}

/// Exécute un travail sans fenêtre. Code de sortie : 0 si succès, 1 sinon.
pub fn executer(travail: Result<Travail, EvaluationError>) -> i32 {
    match travail.and_then(|t| t.executer()) {
        Ok(Resultat::Scalaire(v)) => {
            println!("Résultat : {v}");
            0
        }
        Ok(r @ Resultat::Matrice(_)) => {
            println!("Résultat de l'opération sur les matrices :");
            println!("{r}");
            0
        }
        Err(e) => {
            let msg = e.to_string();
            tracing::warn!(erreur = %msg.as_str(), "calcul refusé");
            eprintln!("Erreur : {msg}");
            1
        }
    }
}
