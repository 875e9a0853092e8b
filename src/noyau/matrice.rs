// src/noyau/matrice.rs
//
// Opérations matricielles (f64) : addition, multiplication.
// Boucles imbriquées + contrôles de dimensions, rien de plus.

use super::erreurs::{DimensionMismatchError, UnsupportedOperationError};

pub type Matrice = Vec<Vec<f64>>;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OperationMatricielle {
    Addition,
    Multiplication,
}

impl OperationMatricielle {
    pub fn nom(self) -> &'static str {
        match self {
            OperationMatricielle::Addition => "matrix_add",
            OperationMatricielle::Multiplication => "matrix_multiply",
        }
    }

    pub fn executer(self, a: &Matrice, b: &Matrice) -> Result<Matrice, DimensionMismatchError> {
        match self {
            OperationMatricielle::Addition => addition(a, b),
            OperationMatricielle::Multiplication => multiplication(a, b),
        }
    }
}

/// `+` / `matrix_add`, `*` / `matrix_multiply` (casse ignorée).
pub fn resolve_matrice(cle: &str) -> Result<OperationMatricielle, UnsupportedOperationError> {
    match cle.trim().to_lowercase().as_str() {
        "+" | "matrix_add" => Ok(OperationMatricielle::Addition),
        "*" | "matrix_multiply" => Ok(OperationMatricielle::Multiplication),
        _ => Err(UnsupportedOperationError {
            cle: cle.to_string(),
        }),
    }
}

/// (lignes, colonnes) d'une matrice non vide et rectangulaire.
pub fn dimensions(m: &Matrice) -> Result<(usize, usize), DimensionMismatchError> {
    let cols = match m.first() {
        Some(ligne) if !ligne.is_empty() => ligne.len(),
        _ => return Err(DimensionMismatchError::MatriceVide),
    };

    for (i, ligne) in m.iter().enumerate() {
        if ligne.len() != cols {
            return Err(DimensionMismatchError::MatriceIrreguliere {
                ligne: i + 1,
                attendu: cols,
                trouve: ligne.len(),
            });
        }
    }

    Ok((m.len(), cols))
}

fn addition(a: &Matrice, b: &Matrice) -> Result<Matrice, DimensionMismatchError> {
    let da = dimensions(a)?;
    let db = dimensions(b)?;
    if da != db {
        return Err(DimensionMismatchError::Incompatible {
            operation: OperationMatricielle::Addition.nom(),
            gauche: da,
            droite: db,
        });
    }

    Ok(a.iter()
        .zip(b)
        .map(|(la, lb)| la.iter().zip(lb).map(|(x, y)| x + y).collect())
        .collect())
}

fn multiplication(a: &Matrice, b: &Matrice) -> Result<Matrice, DimensionMismatchError> {
    let (lignes_a, cols_a) = dimensions(a)?;
    let (lignes_b, cols_b) = dimensions(b)?;
    if cols_a != lignes_b {
        return Err(DimensionMismatchError::Incompatible {
            operation: OperationMatricielle::Multiplication.nom(),
            gauche: (lignes_a, cols_a),
            droite: (lignes_b, cols_b),
        });
    }

    let mut out = vec![vec![0.0; cols_b]; lignes_a];
    for (i, ligne) in out.iter_mut().enumerate() {
        for (j, cellule) in ligne.iter_mut().enumerate() {
            let mut somme = 0.0;
            for k in 0..cols_a {
                somme += a[i][k] * b[k][j];
            }
            *cellule = somme;
        }
    }
    Ok(out)
}
