// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// Objectifs :
// - Même AppCalc (etat.rs) pour natif + wasm
// - Trois modes : expression, opérations de base, matrices
// - Clavier : Enter évalue (quand le champ d'expression est focus)
// - Tactile : gros boutons, focus redonné après clic (focus_entree)

use eframe::egui;
use tracing::{debug, warn};

use super::etat::{AppCalc, Demarche, Mode};
use calculatrice_rpn::noyau::{eval_expression, registre_standard, EvaluationError};
use calculatrice_rpn::requete::{lire_matrice, lire_nombres, Travail};

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.heading(crate::TITRE_APP);
                ui.add_space(6.0);

                self.ui_modes(ui);

                ui.add_space(6.0);

                match self.mode {
                    Mode::Expression => self.ui_expression(ui),
                    Mode::Basique => self.ui_basique(ui),
                    Mode::Matrices => self.ui_matrices(ui),
                }

                ui.add_space(6.0);
                self.ui_actions(ui);

                if !self.erreur.is_empty() {
                    ui.add_space(6.0);
                    ui.colored_label(ui.visuals().error_fg_color, &self.erreur);
                }

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_resultat(ui);

                if self.mode == Mode::Expression {
                    ui.add_space(8.0);
                    ui.separator();
                    ui.add_space(8.0);

                    self.ui_demarche(ui);
                }
            });
    }

    fn ui_modes(&mut self, ui: &mut egui::Ui) {
        let mut choisi = self.mode;
        ui.horizontal(|ui| {
            for mode in Mode::TOUS {
                ui.selectable_value(&mut choisi, mode, mode.libelle());
            }
        });
        self.set_mode(choisi);
    }

    fn ui_expression(&mut self, ui: &mut egui::Ui) {
        ui.label("Expression :");

        // IMPORTANT : id stable + focus contrôlé
        let resp = ui.add(
            egui::TextEdit::singleline(&mut self.entree)
                .desired_width(ui.available_width())
                .hint_text("Ex: (3 + 4) * 2, 2---2, 1e3 + 1")
                .id_salt("entree_edit")
                .code_editor(),
        );

        if self.focus_entree {
            resp.request_focus();
            self.focus_entree = false;
        }

        // Enter évalue (seulement si le champ est focus)
        let enter = ui.input(|i| i.key_pressed(egui::Key::Enter));
        if resp.has_focus() && enter {
            self.evaluer();
        }

        ui.add_space(8.0);

        ui.horizontal_wrapped(|ui| {
            for s in ["(", ")", "+", "-", "*", "/"] {
                self.bouton_insert(ui, s, InsertKind::Op);
            }
        });

        ui.add_space(4.0);
        self.ui_pave_numerique(ui);
    }

    fn ui_pave_numerique(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("pave_numerique")
            .num_columns(4)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                for rangee in [["7", "8", "9", "e"], ["4", "5", "6", "."], ["1", "2", "3", "0"]] {
                    for s in rangee {
                        self.bouton_insert(ui, s, InsertKind::Chiffre);
                    }
                    ui.end_row();
                }
            });
    }

    fn ui_basique(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.label("Opération :");
            egui::ComboBox::from_id_salt("operateur_base")
                .selected_text(self.operateur_base.as_str())
                .show_ui(ui, |ui| {
                    for alias in registre_standard().alias() {
                        ui.selectable_value(&mut self.operateur_base, alias.to_string(), alias);
                    }
                });
        });

        ui.label("Nombres (séparés par des espaces) :");
        ui.add(
            egui::TextEdit::singleline(&mut self.operandes)
                .desired_width(ui.available_width())
                .hint_text("Ex: 10 2 3")
                .code_editor(),
        );
    }

    fn ui_matrices(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.label("Opération :");
            ui.radio_value(&mut self.operateur_matrice, "+".to_string(), "A + B");
            ui.radio_value(&mut self.operateur_matrice, "*".to_string(), "A × B");
        });

        let largeur = (ui.available_width() - 12.0) / 2.0;
        ui.horizontal(|ui| {
            ui.vertical(|ui| {
                ui.label("Matrice A (une ligne par rangée) :");
                ui.add(
                    egui::TextEdit::multiline(&mut self.matrice_a)
                        .desired_width(largeur)
                        .desired_rows(4)
                        .code_editor(),
                );
            });
            ui.vertical(|ui| {
                ui.label("Matrice B :");
                ui.add(
                    egui::TextEdit::multiline(&mut self.matrice_b)
                        .desired_width(largeur)
                        .desired_rows(4)
                        .code_editor(),
                );
            });
        });
    }

    fn ui_actions(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            // Contrat: C = entrée seulement ; CLR = résultats seulement ; AC = tout
            self.bouton_action(ui, "C", "Efface seulement l’entrée", Action::ClearEntree);
            self.bouton_action(ui, "CLR", "Efface résultat + erreur + démarche", Action::ClearResultats);
            self.bouton_action(ui, "AC", "Remise à zéro totale", Action::ResetTotal);

            ui.add_space(10.0);

            let eq = ui.add_sized([64.0, 32.0], egui::Button::new("="));
            if eq.clicked() {
                self.evaluer();
            }
        });
    }

    fn ui_resultat(&mut self, ui: &mut egui::Ui) {
        ui.label("Résultat :");
        let lignes = self.resultat.lines().count().max(1);
        Self::champ_monospace(ui, "resultat_out", &self.resultat, lignes);
    }

    fn ui_demarche(&mut self, ui: &mut egui::Ui) {
        egui::CollapsingHeader::new("Démarche")
            .default_open(false)
            .show(ui, |ui| {
                Self::champ_demarche(ui, "Jetons", "demarche_jetons", &self.demarche.jetons);
                Self::champ_demarche(ui, "RPN", "demarche_rpn", &self.demarche.rpn);
                Self::champ_demarche(ui, "Note", "demarche_note", &self.demarche.note);
            });
    }

    fn champ_demarche(ui: &mut egui::Ui, titre: &str, id: &str, contenu: &str) {
        ui.add_space(4.0);
        ui.label(format!("{titre} :"));
        Self::champ_monospace(ui, id, contenu, 1);
    }

    fn champ_monospace(ui: &mut egui::Ui, id: &str, contenu: &str, rows: usize) {
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.push_id(id, |ui| {
                    ui.set_min_width(ui.available_width());
                    ui.set_min_height(
                        rows as f32 * ui.text_style_height(&egui::TextStyle::Monospace),
                    );
                    ui.monospace(contenu);
                });
            });
    }

    fn bouton_action(&mut self, ui: &mut egui::Ui, label: &str, tip: &str, action: Action) {
        let resp = ui
            .add_sized([56.0, 30.0], egui::Button::new(label))
            .on_hover_text(tip);

        if resp.clicked() {
            match action {
                Action::ClearEntree => self.clear_entree(),
                Action::ClearResultats => self.clear_resultats(),
                Action::ResetTotal => self.reset_total(),
            }
        }
    }

    fn bouton_insert(&mut self, ui: &mut egui::Ui, label: &str, kind: InsertKind) {
        let resp = ui.add_sized([46.0, 28.0], egui::Button::new(label));
        if !resp.clicked() {
            return;
        }

        match kind {
            InsertKind::Op => {
                while self.entree.ends_with(' ') {
                    self.entree.pop();
                }
                if !self.entree.is_empty() {
                    self.entree.push(' ');
                }
                self.entree.push_str(label);
                self.entree.push(' ');
            }
            // chiffres: pas d’espaces auto
            InsertKind::Chiffre => self.entree.push_str(label),
        }

        self.focus_entree = true;
    }

    /* ------------------------ Évaluation (via noyau / requête) ------------------------ */

    fn evaluer(&mut self) {
        let issue = match self.mode {
            Mode::Expression => self.evaluer_expression(),
            Mode::Basique => self.evaluer_travail(|app| {
                Ok(Travail::Basique {
                    operateur: app.operateur_base.clone(),
                    operandes: lire_nombres(&app.operandes)?,
                })
            }),
            Mode::Matrices => self.evaluer_travail(|app| {
                Ok(Travail::Matrice {
                    operateur: app.operateur_matrice.clone(),
                    a: lire_matrice(&app.matrice_a)?,
                    b: lire_matrice(&app.matrice_b)?,
                })
            }),
        };

        match issue {
            Ok((resultat, demarche)) => {
                debug!(mode = ?self.mode, resultat = %resultat.as_str(), "évaluation réussie");
                self.set_resultat(resultat, demarche);
            }
            Err(e) => {
                let msg = e.to_string();
                warn!(mode = ?self.mode, erreur = %msg.as_str(), "évaluation refusée");
                self.set_erreur(msg);
            }
        }
    }

    fn evaluer_expression(&self) -> Result<(String, Demarche), EvaluationError> {
        let s = self.entree.trim();
        if s.is_empty() {
            return Err(EvaluationError::Requete("Entrée vide".into()));
        }

        let (valeur, d) = eval_expression(s, registre_standard())?;
        let demarche = Demarche {
            jetons: d.jetons,
            rpn: d.rpn,
            note: d.note,
        };
        Ok((valeur.to_string(), demarche))
    }

    fn evaluer_travail(
        &self,
        construit: impl FnOnce(&Self) -> Result<Travail, EvaluationError>,
    ) -> Result<(String, Demarche), EvaluationError> {
        let travail = construit(self)?;
        let resultat = travail.executer()?;
        Ok((resultat.to_string(), Demarche::default()))
    }
}

#[derive(Clone, Copy, Debug)]
enum Action {
    ClearEntree,
    ClearResultats,
    ResetTotal,
}

#[derive(Clone, Copy, Debug)]
enum InsertKind {
    Chiffre,
    Op,
}
