//! src/requete.rs
//!
//! Couche “requête” : ce que l'interface (fenêtre, ligne de commande,
//! fichier JSON) demande au noyau.
//!
//! Trois travaux possibles :
//! - opérations de base : un opérateur + une liste de nombres (repli gauche)
//! - expression : un texte passé tel quel à `evaluate`
//! - matrices : deux grilles + `+` / `*`
//!
//! Les erreurs d'E/S et de décodage sont traduites en `EvaluationError::Requete`.

use std::fmt;
use std::path::Path;

use serde::Deserialize;
use tracing::{debug, warn};

use crate::noyau::erreurs::DimensionMismatchError;
use crate::noyau::matrice::{resolve_matrice, Matrice};
use crate::noyau::{evaluate_avec, registre_standard, EvaluationError, RegistreOperateurs};

/// Fichier JSON de travail (mêmes clés que les fichiers existants).
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Requete {
    pub operation: Option<String>,
    pub numbers: Option<Vec<f64>>,
    pub matrix_a: Option<Matrice>,
    pub matrix_b: Option<Matrice>,
    pub expression: Option<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Travail {
    Basique {
        operateur: String,
        operandes: Vec<f64>,
    },
    Expression(String),
    Matrice {
        operateur: String,
        a: Matrice,
        b: Matrice,
    },
}

#[derive(Clone, Debug, PartialEq)]
pub enum Resultat {
    Scalaire(f64),
    Matrice(Matrice),
}

impl fmt::Display for Resultat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Resultat::Scalaire(v) => write!(f, "{v}"),
            Resultat::Matrice(m) => {
                let lignes: Vec<String> = m
                    .iter()
                    .map(|ligne| {
                        ligne
                            .iter()
                            .map(|x| x.to_string())
                            .collect::<Vec<_>>()
                            .join(" ")
                    })
                    .collect();
                write!(f, "{}", lignes.join("\n"))
            }
        }
    }
}

impl Requete {
    /// Choix du travail, dans l'ordre : expression, matrices, nombres.
    pub fn travail(self) -> Result<Travail, EvaluationError> {
        if let Some(expression) = self.expression {
            return Ok(Travail::Expression(expression));
        }

        if let (Some(a), Some(b)) = (self.matrix_a, self.matrix_b) {
            let operateur = self.operation.ok_or_else(|| sans_operation("matrices"))?;
            return Ok(Travail::Matrice { operateur, a, b });
        }

        if let Some(operandes) = self.numbers {
            let operateur = self.operation.ok_or_else(|| sans_operation("nombres"))?;
            return Ok(Travail::Basique {
                operateur,
                operandes,
            });
        }

        warn!("requête sans expression, matrices ni nombres");
        Err(EvaluationError::Requete(
            "données d'entrée invalides".to_string(),
        ))
    }
}

fn sans_operation(quoi: &str) -> EvaluationError {
    warn!(quoi, "requête sans champ \"operation\"");
    EvaluationError::Requete(format!("champ \"operation\" manquant ({quoi})"))
}

impl Travail {
    pub fn executer(&self) -> Result<Resultat, EvaluationError> {
        self.executer_avec(registre_standard())
    }

    pub fn executer_avec(&self, registre: &RegistreOperateurs) -> Result<Resultat, EvaluationError> {
        match self {
            Travail::Basique {
                operateur,
                operandes,
            } => {
                debug!(%operateur, n = operandes.len(), "opération de base");
                reduit(operateur, operandes, registre).map(Resultat::Scalaire)
            }
            Travail::Expression(expression) => {
                debug!(%expression, "expression");
                evaluate_avec(expression, registre).map(Resultat::Scalaire)
            }
            Travail::Matrice { operateur, a, b } => {
                debug!(%operateur, "opération matricielle");
                let op = resolve_matrice(operateur)?;
                Ok(Resultat::Matrice(op.executer(a, b)?))
            }
        }
    }
}

/// Repli gauche : acc = op(acc, suivant), à partir du premier opérande.
///
/// Convention d'interface : liste vide => 0.0 (l'opérateur est quand même vérifié).
pub fn reduit(
    cle: &str,
    operandes: &[f64],
    registre: &RegistreOperateurs,
) -> Result<f64, EvaluationError> {
    let op = registre.resolve(cle)?;

    let Some((premier, reste)) = operandes.split_first() else {
        return Ok(0.0);
    };

    let mut acc = *premier;
    for x in reste {
        acc = op(acc, *x)?;
    }
    Ok(acc)
}

pub fn depuis_json(texte: &str) -> Result<Requete, EvaluationError> {
    serde_json::from_str(texte)
        .map_err(|e| EvaluationError::Requete(format!("JSON invalide: {e}")))
}

pub fn charger_fichier(chemin: &Path) -> Result<Requete, EvaluationError> {
    debug!(chemin = %chemin.display(), "lecture du fichier de requête");
    let texte = std::fs::read_to_string(chemin).map_err(|e| {
        EvaluationError::Requete(format!(
            "lecture de {} impossible: {e}",
            chemin.display()
        ))
    })?;
    depuis_json(&texte)
}

/// Liste de nombres séparés par des espaces (saisie clavier).
pub fn lire_nombres(texte: &str) -> Result<Vec<f64>, EvaluationError> {
    texte
        .split_whitespace()
        .map(|mot| {
            mot.parse::<f64>()
                .map_err(|_| EvaluationError::Requete(format!("nombre invalide: '{mot}'")))
        })
        .collect()
}

/// Matrice saisie ligne par ligne ; les lignes vides sont ignorées.
/// Toutes les lignes doivent avoir le même nombre de colonnes que la première.
pub fn lire_matrice(texte: &str) -> Result<Matrice, EvaluationError> {
    let mut m: Matrice = Vec::new();

    for ligne in texte.lines().filter(|l| !l.trim().is_empty()) {
        let valeurs = lire_nombres(ligne)?;
        if let Some(premiere) = m.first() {
            if premiere.len() != valeurs.len() {
                return Err(DimensionMismatchError::MatriceIrreguliere {
                    ligne: m.len() + 1,
                    attendu: premiere.len(),
                    trouve: valeurs.len(),
                }
                .into());
            }
        }
        m.push(valeurs);
    }

    Ok(m)
}
