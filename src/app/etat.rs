//! src/app/etat.rs
//!
//! État UI (sans vue).
//!
//! Rôle : contenir l’état de la calculatrice (entrée, résultat, erreur, digits, historique)
//! et la Session du noyau; offrir des opérations simples (C/CLR/AC, =) sans logique
//! d’affichage.
//!
//! Contrats :
//! - L’évaluation passe uniquement par Session (jamais de calcul dans la vue).
//! - Actions déterministes, sans effet de bord caché.
//! - Défense en profondeur : bornes sur la lecture décimale (digits) et sur l’historique.

use calculatrice_fractions::noyau::lecture::DIGITS_MAX;
use calculatrice_fractions::{Session, Sortie};

/// Précision de la lecture décimale par défaut.
const DIGITS_DEFAUT: usize = 20;

/// Garde-fou : nombre de lignes d’historique conservées.
const HISTORIQUE_MAX: usize = 50;

#[derive(Clone, Debug)]
pub struct AppCalc {
    // --- entrée utilisateur ---
    pub entree: String,

    // --- noyau (registres + accumulateur) ---
    pub session: Session,

    // --- sorties ---
    pub exact: String,       // rendu canonique (ou "STORED")
    pub lecture: String,     // décimal tronqué
    pub erreur: String,      // message d’erreur (si l’évaluation échoue)
    pub lecture_dispo: bool, // false si vide / STORE

    // --- historique "entrée -> sortie" (plus récent en dernier) ---
    pub historique: Vec<String>,

    // --- paramètres ---
    pub digits: usize,

    // --- UX ---
    // Permet à vue.rs de redonner le focus à l’entrée après un clic sur un bouton.
    pub focus_entree: bool,
}

impl Default for AppCalc {
    fn default() -> Self {
        Self {
            entree: String::new(),
            session: Session::new(),
            exact: String::new(),
            lecture: String::new(),
            erreur: String::new(),
            lecture_dispo: false,
            historique: Vec::new(),
            digits: DIGITS_DEFAUT,
            focus_entree: true,
        }
    }
}

impl AppCalc {
    /* ------------------------ Actions “boutons” ------------------------ */

    /// AC : remise à zéro totale (entrée + résultats + registres + accumulateur).
    pub fn reset_total(&mut self) {
        self.entree.clear();
        self.clear_resultats();
        self.historique.clear();
        self.session.reset();
        self.digits = DIGITS_DEFAUT;
        self.focus_entree = true;
    }

    /// C : effacer seulement l’entrée.
    pub fn clear_entree(&mut self) {
        self.entree.clear();
        self.focus_entree = true;
    }

    /// CLR : effacer résultat + erreur (sans toucher à l’entrée ni à la session).
    pub fn clear_resultats(&mut self) {
        self.exact.clear();
        self.lecture.clear();
        self.erreur.clear();
        self.lecture_dispo = false;
        self.focus_entree = true;
    }

    /// "=" : évalue l’entrée via la Session.
    ///
    /// Choix UX :
    /// - succès : l’entrée est vidée (prête pour la commande suivante)
    /// - échec : l’entrée est CONSERVÉE pour correction, `exact` garde le dernier résultat
    pub fn evaluer(&mut self) {
        let ligne = self.entree.trim().to_string();
        if ligne.is_empty() {
            self.set_erreur("Entrée vide");
            return;
        }

        match self.session.evaluate_line(&ligne) {
            Ok(sortie) => {
                let lecture = match &sortie {
                    Sortie::Valeur(v) => Some(v.to_decimal(self.digits)),
                    Sortie::Stored(_) => None,
                };
                self.pousser_historique(format!("{ligne} -> {sortie}"));
                self.set_resultats(sortie.to_string(), lecture);
                self.entree.clear();
            }
            Err(e) => {
                self.pousser_historique(format!("{ligne} : {e}"));
                self.set_erreur(e.to_string());
            }
        }
    }

    fn pousser_historique(&mut self, ligne: String) {
        self.historique.push(ligne);
        if self.historique.len() > HISTORIQUE_MAX {
            let trop = self.historique.len() - HISTORIQUE_MAX;
            self.historique.drain(..trop);
        }
    }

    /// Utilitaire : placer une erreur.
    /// On CONSERVE `exact` (dernier résultat) pour ne pas “effacer l’écran” sur une faute.
    pub fn set_erreur(&mut self, msg: impl Into<String>) {
        self.erreur = msg.into();
        self.lecture.clear();
        self.lecture_dispo = false;
        self.focus_entree = true;
    }

    /// Utilitaire : déposer un résultat (rendu exact + lecture optionnelle).
    pub fn set_resultats(&mut self, exact: impl Into<String>, lecture: Option<String>) {
        self.erreur.clear();
        self.exact = exact.into();

        if let Some(v) = lecture {
            self.lecture_dispo = true;
            self.lecture = v;
        } else {
            self.lecture_dispo = false;
            self.lecture.clear();
        }

        self.focus_entree = true;
    }

    /// Garde-fou : limite digits; la lecture affichée suit la nouvelle précision.
    pub fn set_digits(&mut self, digits: usize) {
        self.digits = digits.min(DIGITS_MAX);
        if self.lecture_dispo {
            self.lecture = self.session.accumulateur().value().to_decimal(self.digits);
        }
        self.focus_entree = true;
    }
}
