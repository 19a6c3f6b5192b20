// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// Objectifs :
// - Même AppCalc (etat.rs) pour natif + wasm
// - Clavier : Enter évalue (quand le champ est focus)
// - Tactile : gros boutons, focus redonné après clic (focus_entree)
// - Registres a..z cliquables (insère la lettre)
//
// Syntaxe rappelée à l’utilisateur : jetons séparés par des espaces,
// fraction collée ("1/2"), opérateur entouré d’espaces ("1/2 / 3").

use eframe::egui;

use super::etat::AppCalc;

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        // Densité “calc”
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.heading("Calculatrice de fractions");
                ui.add_space(6.0);

                self.ui_entree(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_resultats(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_registres(ui);
                self.ui_historique(ui);
            });
    }

    fn ui_entree(&mut self, ui: &mut egui::Ui) {
        ui.label("Entrée :");

        // IMPORTANT : id stable + focus contrôlé
        let resp = ui.add(
            egui::TextEdit::singleline(&mut self.entree)
                .desired_width(ui.available_width())
                .hint_text("Ex: 1/2 + 1/3, STORE a, a * 2")
                .id_source("entree_edit")
                .code_editor(),
        );

        if self.focus_entree {
            resp.request_focus();
            self.focus_entree = false;
        }

        // Enter évalue seulement si le champ est focus
        let enter = ui.input(|i| i.key_pressed(egui::Key::Enter));
        if resp.has_focus() && enter {
            self.evaluer();
        }

        ui.add_space(6.0);

        // Actions + précision décimale
        ui.horizontal(|ui| {
            // Contrat: C = entrée seulement ; CLR = résultat seulement ; AC = tout (registres compris)
            self.bouton_action(ui, "C", "Efface seulement l’entrée", Action::ClearEntree);
            self.bouton_action(ui, "CLR", "Efface résultat + erreur", Action::ClearResultats);
            self.bouton_action(
                ui,
                "AC",
                "Remise à zéro totale (registres compris)",
                Action::ResetTotal,
            );

            ui.separator();

            ui.label("Décimales :");
            let mut d = self.digits as u32;
            let resp = ui.add(
                egui::DragValue::new(&mut d)
                    .speed(1)
                    .range(0..=200)
                    .suffix(" chiffres"),
            );
            if resp.changed() {
                self.set_digits(d as usize);
            }
        });

        ui.add_space(8.0);

        // Opérateurs (espacés) + STORE + "="
        ui.horizontal_wrapped(|ui| {
            self.bouton_insert(ui, "+", "+", InsertKind::Op);
            self.bouton_insert(ui, "-", "-", InsertKind::Op);
            self.bouton_insert(ui, "×", "*", InsertKind::Op);
            self.bouton_insert(ui, "÷", "/", InsertKind::Op);

            ui.separator();

            self.bouton_insert(ui, "STORE", "STORE ", InsertKind::Commande);

            ui.add_space(10.0);

            let eq = ui.add_sized([64.0, 32.0], egui::Button::new("="));
            if eq.clicked() {
                self.evaluer();
            }
        });

        ui.add_space(8.0);

        // Pavé numérique
        self.ui_pave_numerique(ui);

        if !self.erreur.is_empty() {
            ui.add_space(6.0);
            ui.colored_label(ui.visuals().error_fg_color, &self.erreur);
        }
    }

    fn ui_pave_numerique(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("pave_numerique_fractions")
            .num_columns(4)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                self.bouton_insert(ui, "7", "7", InsertKind::Digit);
                self.bouton_insert(ui, "8", "8", InsertKind::Digit);
                self.bouton_insert(ui, "9", "9", InsertKind::Digit);
                self.bouton_action(ui, "DEL", "Efface le dernier symbole", Action::Backspace);
                ui.end_row();

                self.bouton_insert(ui, "4", "4", InsertKind::Digit);
                self.bouton_insert(ui, "5", "5", InsertKind::Digit);
                self.bouton_insert(ui, "6", "6", InsertKind::Digit);
                // barre de fraction : collée, pas un opérateur
                self.bouton_insert(ui, "a/b", "/", InsertKind::Digit);
                ui.end_row();

                self.bouton_insert(ui, "1", "1", InsertKind::Digit);
                self.bouton_insert(ui, "2", "2", InsertKind::Digit);
                self.bouton_insert(ui, "3", "3", InsertKind::Digit);
                self.bouton_insert(ui, "±", "-", InsertKind::Signe);
                ui.end_row();

                self.bouton_insert(ui, "0", "0", InsertKind::Digit);
                ui.label("");
                ui.label("");
                ui.label("");
                ui.end_row();
            });
    }

    /// Backspace “intelligent” : retire d’un coup "STORE " et les opérateurs espacés.
    fn backspace_entree(&mut self) {
        if self.entree.is_empty() {
            return;
        }

        // Retire espaces finaux
        while self.entree.ends_with(' ') {
            self.entree.pop();
        }

        if self.entree.eq_ignore_ascii_case("store") {
            self.entree.clear();
            return;
        }

        // Sinon : un caractère
        self.entree.pop();
        while self.entree.ends_with(' ') {
            self.entree.pop();
        }
    }

    fn ui_resultats(&mut self, ui: &mut egui::Ui) {
        ui.label("EXACT :");
        Self::champ_monospace(ui, "exact_out", &self.exact, 2);

        ui.add_space(6.0);

        ui.label("Décimal (tronqué) :");
        if self.lecture_dispo {
            Self::champ_monospace(ui, "lecture_out", &self.lecture, 2);
        } else {
            ui.monospace("indisponible");
        }
    }

    fn ui_registres(&mut self, ui: &mut egui::Ui) {
        egui::CollapsingHeader::new("Registres")
            .default_open(true)
            .show(ui, |ui| {
                // lettres cliquables a..z
                ui.horizontal_wrapped(|ui| {
                    for c in 'a'..='z' {
                        let lettre = c.to_string();
                        self.bouton_insert(ui, &lettre, &lettre, InsertKind::Registre);
                    }
                });

                ui.add_space(4.0);

                // valeurs non nulles seulement
                let lignes: Vec<String> = self
                    .session
                    .registres()
                    .non_zero()
                    .map(|(id, v)| format!("{id} = {v}"))
                    .collect();
                let contenu = if lignes.is_empty() {
                    "(tous à 0)".to_string()
                } else {
                    lignes.join("\n")
                };
                Self::champ_monospace(ui, "registres_out", &contenu, 2);
            });
    }

    fn ui_historique(&mut self, ui: &mut egui::Ui) {
        egui::CollapsingHeader::new("Historique")
            .default_open(false)
            .show(ui, |ui| {
                let contenu = self.historique.join("\n");
                Self::champ_monospace(ui, "historique_out", &contenu, 4);
            });
    }

    fn champ_monospace(ui: &mut egui::Ui, id: &str, contenu: &str, rows: usize) {
        // Affichage lecture seule “stable”, sans TextEdit interactif.
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
                Action::Backspace => self.backspace_entree(),
            }
            self.focus_entree = true;
        }
    }

    fn bouton_insert(&mut self, ui: &mut egui::Ui, label: &str, to_insert: &str, kind: InsertKind) {
        let resp = ui.add_sized([46.0, 28.0], egui::Button::new(label));
        if !resp.clicked() {
            return;
        }
        inserer(&mut self.entree, to_insert, kind);
        self.focus_entree = true;
    }
}

/// Règles d’espacement : un jeton = un mot séparé par des espaces.
fn inserer(entree: &mut String, to_insert: &str, kind: InsertKind) {
    match kind {
        InsertKind::Op => {
            while entree.ends_with(' ') {
                entree.pop();
            }
            if !entree.is_empty() {
                entree.push(' ');
            }
            entree.push_str(to_insert);
            entree.push(' ');
        }
        InsertKind::Digit => {
            // chiffres et barre de fraction : collés
            entree.push_str(to_insert);
        }
        InsertKind::Signe => {
            // signe : seulement en début de jeton
            if entree.is_empty() || entree.ends_with(' ') {
                entree.push_str(to_insert);
            }
        }
        InsertKind::Registre => {
            // une lettre = un jeton complet
            if !entree.is_empty() && !entree.ends_with(' ') {
                entree.push(' ');
            }
            entree.push_str(to_insert);
        }
        InsertKind::Commande => {
            // STORE ouvre toujours une nouvelle commande
            entree.clear();
            entree.push_str(to_insert);
        }
    }
}

#[derive(Clone, Copy, Debug)]
enum Action {
    ClearEntree,
    ClearResultats,
    ResetTotal,
    Backspace,
}

#[derive(Clone, Copy, Debug)]
enum InsertKind {
    Digit,
    Signe,
    Registre,
    Op,
    Commande,
}
