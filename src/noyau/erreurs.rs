//! Noyau — taxonomie des erreurs
//!
//! Toutes les erreurs sont des valeurs (`Result`), jamais des paniques.
//! `EvaluationError` regroupe tout ce que le noyau et la couche requête
//! peuvent renvoyer à l'interface.

use thiserror::Error;

/// Erreur de lecture (tokenisation).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LexError {
    #[error("caractère inattendu: '{caractere}' (position {position})")]
    CaractereInattendu { caractere: char, position: usize },

    /// Littéral accumulé qui ne donne pas un f64 fini ("1e", ".", "1e999"…).
    #[error("nombre invalide: '{litteral}' (position {position})")]
    NombreInvalide { litteral: String, position: usize },
}

/// Parenthèses non équilibrées détectées pendant la conversion en RPN.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("parenthèses non fermées")]
    ParentheseOuvranteOrpheline,

    #[error("parenthèse fermante sans ouvrante")]
    ParentheseFermanteOrpheline,
}

/// Erreur de la machine à pile.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EvalError {
    #[error("pile vide: opérandes manquants pour '{jeton}'")]
    StackUnderflow { jeton: String },

    /// La pile ne se réduit pas à une seule valeur.
    #[error("expression invalide ({restants} valeur(s) sur la pile)")]
    MalformedExpression { restants: usize },

    #[error("nombre invalide en RPN: '{litteral}'")]
    NombreInvalide { litteral: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("opération non supportée: '{cle}'")]
pub struct UnsupportedOperationError {
    pub cle: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ArithmeticError {
    #[error("division par zéro")]
    DivisionParZero,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DimensionMismatchError {
    #[error("opération impossible sur une matrice vide")]
    MatriceVide,

    #[error("ligne {ligne}: {trouve} colonne(s) au lieu de {attendu}")]
    MatriceIrreguliere {
        ligne: usize,
        attendu: usize,
        trouve: usize,
    },

    #[error("dimensions incompatibles pour {operation}: {}x{} et {}x{}", .gauche.0, .gauche.1, .droite.0, .droite.1)]
    Incompatible {
        operation: &'static str,
        gauche: (usize, usize),
        droite: (usize, usize),
    },
}

/// Erreur “publique” : ce que l'interface affiche.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EvaluationError {
    #[error(transparent)]
    Lex(#[from] LexError),

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Eval(#[from] EvalError),

    #[error(transparent)]
    OperationNonSupportee(#[from] UnsupportedOperationError),

    #[error(transparent)]
    Arithmetique(#[from] ArithmeticError),

    #[error(transparent)]
    Dimension(#[from] DimensionMismatchError),

    /// Entrée/sortie ou décodage côté interface (fichier, JSON, saisie).
    #[error("requête invalide: {0}")]
    Requete(String),
}
