//! src/app/etat.rs
//!
//! État UI (sans vue, sans noyau).
//!
//! Rôle : contenir l’état de la calculatrice (mode, entrées, résultat, erreur, démarche)
//! et offrir des opérations simples (C/CLR/AC) sans logique d’affichage.
//!
//! Contrats :
//! - Aucune évaluation ici (pas de noyau, pas de parsing).
//! - Actions déterministes, sans effet de bord caché.

/// Opérateur proposé au démarrage (opérations de base et matrices).
const OPERATEUR_DEFAUT: &str = "+";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Mode {
    #[default]
    Expression,
    Basique,
    Matrices,
}

impl Mode {
    pub const TOUS: [Mode; 3] = [Mode::Expression, Mode::Basique, Mode::Matrices];

    pub fn libelle(self) -> &'static str {
        match self {
            Mode::Expression => "Expression",
            Mode::Basique => "Opérations de base",
            Mode::Matrices => "Matrices",
        }
    }
}

#[derive(Clone, Default, Debug, PartialEq)]
pub struct Demarche {
    pub jetons: String,
    pub rpn: String,
    pub note: String,
}

#[derive(Clone, Debug)]
pub struct AppCalc {
    pub mode: Mode,

    // --- entrées utilisateur ---
    pub entree: String,            // expression
    pub operateur_base: String,    // +, -, *, /, add, ...
    pub operandes: String,         // "1 2 3"
    pub operateur_matrice: String, // + ou *
    pub matrice_a: String,         // une ligne par rangée
    pub matrice_b: String,

    // --- sorties ---
    pub resultat: String,
    pub erreur: String, // message d’erreur (si parsing/éval échoue)

    // --- démarche (mode expression seulement) ---
    pub demarche: Demarche,

    // --- UX ---
    // Permet à vue.rs de redonner le focus à l’entrée après un clic sur un bouton.
    pub focus_entree: bool,
}

impl Default for AppCalc {
    fn default() -> Self {
        Self {
            mode: Mode::default(),
            entree: String::new(),
            operateur_base: OPERATEUR_DEFAUT.to_string(),
            operandes: String::new(),
            operateur_matrice: OPERATEUR_DEFAUT.to_string(),
            matrice_a: String::new(),
            matrice_b: String::new(),
            resultat: String::new(),
            erreur: String::new(),
            demarche: Demarche::default(),
            focus_entree: true, // au lancement, on veut pouvoir taper tout de suite
        }
    }
}

impl AppCalc {
    /* ------------------------ Actions “boutons” (état seulement) ------------------------ */

    /// AC : remise à zéro totale (toutes les entrées + résultats, mode conservé).
    pub fn reset_total(&mut self) {
        let mode = self.mode;
        *self = Self::default();
        self.mode = mode;
    }

    /// C : effacer seulement l’entrée du mode courant (sans toucher aux résultats).
    pub fn clear_entree(&mut self) {
        match self.mode {
            Mode::Expression => self.entree.clear(),
            Mode::Basique => self.operandes.clear(),
            Mode::Matrices => {
                self.matrice_a.clear();
                self.matrice_b.clear();
            }
        }
        self.focus_entree = true;
    }

    /// CLR : effacer résultat + erreur + démarche (sans toucher aux entrées).
    pub fn clear_resultats(&mut self) {
        self.resultat.clear();
        self.erreur.clear();
        self.demarche = Demarche::default();
        self.focus_entree = true;
    }

    /// Changer de mode : les résultats de l’ancien mode n’ont plus de sens.
    pub fn set_mode(&mut self, mode: Mode) {
        if self.mode != mode {
            self.mode = mode;
            self.clear_resultats();
        }
    }

    /// Utilitaire : placer une erreur.
    ///
    /// On CONSERVE `resultat` (dernier résultat) pour ne pas “effacer l’écran” sur une faute.
    pub fn set_erreur(&mut self, msg: impl Into<String>) {
        self.erreur = msg.into();
        self.demarche = Demarche::default();
        self.focus_entree = true;
    }

    /// Utilitaire : déposer un résultat complet (+ démarche éventuelle).
    pub fn set_resultat(&mut self, resultat: impl Into<String>, demarche: Demarche) {
        self.erreur.clear();
        self.resultat = resultat.into();
        self.demarche = demarche;
        self.focus_entree = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clear_entree_selon_le_mode() {
        let mut app = AppCalc {
            entree: "1+2".into(),
            operandes: "1 2".into(),
            ..Default::default()
        };
        app.clear_entree();
        assert!(app.entree.is_empty());
        assert_eq!(app.operandes, "1 2");

        app.set_mode(Mode::Basique);
        app.clear_entree();
        assert!(app.operandes.is_empty());
    }

    #[test]
    fn erreur_conserve_le_resultat() {
        let mut app = AppCalc::default();
        app.set_resultat("11", Demarche::default());
        app.set_erreur("division par zéro");
        assert_eq!(app.resultat, "11");
        assert_eq!(app.erreur, "division par zéro");

        app.set_resultat("4", Demarche::default());
        assert!(app.erreur.is_empty());
    }

    #[test]
    fn reset_total_garde_le_mode() {
        let mut app = AppCalc::default();
        app.set_mode(Mode::Matrices);
        app.matrice_a = "1 2".into();
        app.operateur_matrice = "*".into();
        app.reset_total();
        assert_eq!(app.mode, Mode::Matrices);
        assert!(app.matrice_a.is_empty());
        assert_eq!(app.operateur_matrice, "+");
    }
}
