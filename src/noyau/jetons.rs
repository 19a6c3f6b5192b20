// src/noyau/jetons.rs
//
// Découpage d’une ligne en jetons (séparés par des espaces) + opérateurs.
// Pas de parenthèses, pas de priorité : l’évaluation est strictement gauche -> droite.

use std::fmt;
use std::str::FromStr;

use super::erreur::{CalcError, Resultat};
use super::rationnel::Rational;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operateur {
    Plus,
    Minus,
    Star,
    Slash,
}

impl Operateur {
    /// a <op> b, via les opérations pures de Rational.
    pub fn appliquer(self, a: &Rational, b: &Rational) -> Resultat<Rational> {
        match self {
            Operateur::Plus => Ok(a.add(b)),
            Operateur::Minus => Ok(a.subtract(b)),
            Operateur::Star => Ok(a.multiply(b)),
            Operateur::Slash => a.divide(b),
        }
    }
}

impl FromStr for Operateur {
    type Err = CalcError;

    fn from_str(s: &str) -> Resultat<Self> {
        match s {
            "+" => Ok(Operateur::Plus),
            "-" => Ok(Operateur::Minus),
            "*" => Ok(Operateur::Star),
            "/" => Ok(Operateur::Slash),
            _ => Err(CalcError::InvalidOperator(s.to_string())),
        }
    }
}

impl fmt::Display for Operateur {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Operateur::Plus => "+",
            Operateur::Minus => "-",
            Operateur::Star => "*",
            Operateur::Slash => "/",
        };
        f.write_str(s)
    }
}

/// Jetons d’une ligne : les suites d’espaces comptent pour un seul séparateur.
pub fn decouper(ligne: &str) -> Vec<&str> {
    ligne.split_whitespace().collect()
}
