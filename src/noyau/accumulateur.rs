// src/noyau/accumulateur.rs
//
// Valeur courante de la calculatrice (le “total”), zéro au départ.
// Les opérations remplacent la valeur par un nouveau Rational; divide ne modifie rien
// en cas d’échec.

use log::{debug, trace};

use super::erreur::Resultat;
use super::rationnel::Rational;

#[derive(Clone, Debug, Default)]
pub struct Accumulator {
    valeur: Rational,
}

impl Accumulator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self) -> &Rational {
        &self.valeur
    }

    pub fn add(&mut self, v: &Rational) {
        self.valeur = self.valeur.add(v);
        trace!("acc + {v} = {}", self.valeur);
    }

    pub fn subtract(&mut self, v: &Rational) {
        self.valeur = self.valeur.subtract(v);
        trace!("acc - {v} = {}", self.valeur);
    }

    pub fn multiply(&mut self, v: &Rational) {
        self.valeur = self.valeur.multiply(v);
        trace!("acc * {v} = {}", self.valeur);
    }

    pub fn divide(&mut self, v: &Rational) -> Resultat<()> {
        self.valeur = self.valeur.divide(v)?;
        trace!("acc / {v} = {}", self.valeur);
        Ok(())
    }

    pub fn reset(&mut self) {
        debug!("acc remis à zéro");
        self.valeur = Rational::zero();
    }

    /// Repli d’un résultat : reset puis add (la valeur précédente est oubliée).
    pub fn set(&mut self, v: &Rational) {
        self.reset();
        self.add(v);
    }
}
