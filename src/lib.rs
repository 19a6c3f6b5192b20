//! Calculatrice de fractions exactes.
//!
//! Le noyau (`noyau`) est partagé par les trois frontaux : fenêtre egui, boucle
//! interactive et mode lot.

pub mod frontal;
pub mod noyau;

pub use noyau::{
    evaluate, Accumulator, CalcError, RegisterBank, Rational, Resultat, Session,
    SessionPartagee, Sortie,
};
