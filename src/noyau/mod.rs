//! Noyau exact : fractions en précision arbitraire
//!
//! Organisation interne :
//! - rationnel.rs    : Rational (forme réduite, signe au numérateur)
//! - lecture.rs      : lecture décimale tronquée (affichage d’appoint)
//! - registres.rs    : 26 registres a..=z
//! - accumulateur.rs : valeur courante (total)
//! - jetons.rs       : découpage + opérateurs
//! - eval.rs         : évaluation gauche -> droite, STORE, Session
//! - partage.rs      : Session sous verrou (appelants concurrents)
//! - erreur.rs       : CalcError

pub mod accumulateur;
pub mod erreur;
pub mod eval;
pub mod jetons;
pub mod lecture;
pub mod partage;
pub mod rationnel;
pub mod registres;

#[cfg(test)]
mod tests_scientifiques;

#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use accumulateur::Accumulator;
pub use erreur::{CalcError, Resultat};
pub use eval::{evaluate, Session, Sortie, ACK_STORED, MOT_STORE};
pub use partage::SessionPartagee;
pub use rationnel::Rational;
pub use registres::RegisterBank;
