//! Noyau — évaluation d’une commande
//!
//! jetons -> (STORE x) | opérande (op opérande)*  -> repli dans l’accumulateur
//!
//! Règles :
//! - gauche -> droite, sans priorité ni parenthèses : "1 + 2 * 3" vaut 9
//! - un jeton qui commence par une lettre est un registre, sinon un littéral "N" ou "N/D"
//! - rien n’est écrit (registre ou accumulateur) tant que la commande n’a pas réussi

use std::fmt;

use log::{debug, trace};

use super::accumulateur::Accumulator;
use super::erreur::{CalcError, Resultat};
use super::jetons::{decouper, Operateur};
use super::rationnel::Rational;
use super::registres::{id_depuis_texte, RegisterBank};

/// Mot-clé (insensible à la casse) de la commande de mémorisation.
pub const MOT_STORE: &str = "STORE";

/// Acquittement affiché après un STORE réussi.
pub const ACK_STORED: &str = "STORED";

/// Ce que le noyau renvoie au frontal pour affichage.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Sortie {
    Valeur(Rational),
    Stored(char),
}

impl fmt::Display for Sortie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sortie::Valeur(v) => write!(f, "{v}"),
            Sortie::Stored(_) => f.write_str(ACK_STORED),
        }
    }
}

/// État persistant entre deux commandes : registres + accumulateur.
#[derive(Clone, Debug, Default)]
pub struct Session {
    registres: RegisterBank,
    acc: Accumulator,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn registres(&self) -> &RegisterBank {
        &self.registres
    }

    pub fn accumulateur(&self) -> &Accumulator {
        &self.acc
    }

    pub fn evaluate(&mut self, jetons: &[&str]) -> Resultat<Sortie> {
        evaluate(self, jetons)
    }

    /// Découpe la ligne sur les espaces puis évalue.
    pub fn evaluate_line(&mut self, ligne: &str) -> Resultat<Sortie> {
        evaluate(self, &decouper(ligne))
    }

    /// AC : registres et accumulateur à zéro.
    pub fn reset(&mut self) {
        self.registres.clear();
        self.acc.reset();
    }
}

/// Opérande -> Rational (registre ou littéral).
pub fn resoudre_operande(jeton: &str, registres: &RegisterBank) -> Resultat<Rational> {
    let commence_par_lettre = jeton.chars().next().is_some_and(char::is_alphabetic);
    if commence_par_lettre {
        let id = id_depuis_texte(jeton)?;
        return registres.get(id).cloned();
    }
    jeton.parse()
}

/// Évalue une commande déjà découpée.
///
/// En cas d’erreur, la session est laissée telle quelle.
pub fn evaluate(session: &mut Session, jetons: &[&str]) -> Resultat<Sortie> {
    let sortie = evaluate_sans_trace(session, jetons);
    match &sortie {
        Ok(s) => debug!("{jetons:?} -> {s}"),
        Err(e) => debug!("{jetons:?} -> {} ({e})", e.genre()),
    }
    sortie
}

fn evaluate_sans_trace(session: &mut Session, jetons: &[&str]) -> Resultat<Sortie> {
    let Some((&premier, reste)) = jetons.split_first() else {
        return Err(CalcError::MalformedExpression("entrée vide".into()));
    };

    // 1) STORE <lettre>
    if premier.eq_ignore_ascii_case(MOT_STORE) {
        let id = cible_store(reste)?;
        let valeur = session.acc.value().clone();
        session.registres.store(id, valeur)?;
        return Ok(Sortie::Stored(id));
    }

    // 2) Premier opérande
    let mut resultat = resoudre_operande(premier, &session.registres)?;

    // 3) Paires (opérateur, opérande)
    let mut it = reste.iter();
    while let Some(&op_txt) = it.next() {
        let Some(&operande) = it.next() else {
            return Err(CalcError::MalformedExpression(format!(
                "opérande manquant après '{op_txt}'"
            )));
        };
        let op: Operateur = op_txt.parse()?;
        let v = resoudre_operande(operande, &session.registres)?;
        resultat = op.appliquer(&resultat, &v)?;
        trace!("{op} {v} => {resultat}");
    }

    // 4) Repli : seulement maintenant, tout a réussi
    session.acc.set(&resultat);
    Ok(Sortie::Valeur(resultat))
}

/// Cible de STORE : exactement un jeton d’une seule lettre.
fn cible_store(reste: &[&str]) -> Resultat<char> {
    let [cible] = reste else {
        return Err(CalcError::InvalidCommand(format!(
            "{MOT_STORE} attend un registre (reçu {} jetons)",
            reste.len()
        )));
    };

    let mut chars = cible.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_alphabetic() => Ok(c),
        _ => Err(CalcError::InvalidCommand(format!(
            "{MOT_STORE} : cible '{cible}' n’est pas une lettre"
        ))),
    }
}
