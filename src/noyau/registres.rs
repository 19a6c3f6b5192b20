// src/noyau/registres.rs
//
// Banque de registres : 26 cases a..=z (minuscules seulement), toutes à zéro au départ.
// Une case n’est jamais absente : get() ne peut échouer que sur un identifiant hors plage.

use log::debug;

use super::erreur::{CalcError, Resultat};
use super::rationnel::Rational;

pub const NB_REGISTRES: usize = 26;

#[derive(Clone, Debug)]
pub struct RegisterBank {
    cases: [Rational; NB_REGISTRES],
}

/// 'a' -> 0 ... 'z' -> 25
fn indice(id: char) -> Resultat<usize> {
    if id.is_ascii_lowercase() {
        Ok((id as u8 - b'a') as usize)
    } else {
        Err(CalcError::InvalidRegister(id.to_string()))
    }
}

/// Identifiant sous forme texte : exactement un caractère.
pub fn id_depuis_texte(s: &str) -> Resultat<char> {
    let mut it = s.chars();
    match (it.next(), it.next()) {
        (Some(c), None) => indice(c).map(|_| c),
        _ => Err(CalcError::InvalidRegister(s.to_string())),
    }
}

impl Default for RegisterBank {
    fn default() -> Self {
        Self::new()
    }
}

impl RegisterBank {
    pub fn new() -> Self {
        Self {
            cases: std::array::from_fn(|_| Rational::zero()),
        }
    }

    /// Écrase la case sans condition.
    pub fn store(&mut self, id: char, valeur: Rational) -> Resultat<()> {
        let i = indice(id)?;
        debug!("registre {id} <- {valeur}");
        self.cases[i] = valeur;
        Ok(())
    }

    pub fn get(&self, id: char) -> Resultat<&Rational> {
        Ok(&self.cases[indice(id)?])
    }

    /// Toutes les cases à zéro.
    pub fn clear(&mut self) {
        for c in self.cases.iter_mut() {
            *c = Rational::zero();
        }
    }

    /// (identifiant, valeur) dans l’ordre alphabétique.
    pub fn iter(&self) -> impl Iterator<Item = (char, &Rational)> {
        ('a'..='z').zip(self.cases.iter())
    }

    /// Seulement les cases non nulles (panneau registres / REGISTERS).
    pub fn non_zero(&self) -> impl Iterator<Item = (char, &Rational)> {
        self.iter().filter(|(_, v)| !v.is_zero())
    }
}
