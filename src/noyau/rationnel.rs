// src/noyau/rationnel.rs
//
// Rationnel exact (sans flottants).
// - numérateur : BigInt signé (porte le signe)
// - dénominateur : BigInt strictement positif
// - toujours réduit : pgcd(|num|, den) = 1, zéro = 0/1
//
// Immuable : chaque opération renvoie un nouveau Rational.

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Signed, Zero};

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};
use std::str::FromStr;

use super::erreur::{CalcError, Resultat};

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Rational {
    num: BigInt,
    den: BigInt,
}

impl Rational {
    /* ------------------------ Construction ------------------------ */

    /// num/den réduit et normalisé. Échoue si den = 0.
    pub fn new(num: impl Into<BigInt>, den: impl Into<BigInt>) -> Resultat<Self> {
        let den = den.into();
        if den.is_zero() {
            return Err(CalcError::DivisionByZero);
        }
        Ok(Self::reduit(num.into(), den))
    }

    pub fn from_integer(n: impl Into<BigInt>) -> Self {
        Self {
            num: n.into(),
            den: BigInt::one(),
        }
    }

    pub fn zero() -> Self {
        Self::from_integer(0)
    }

    pub fn one() -> Self {
        Self::from_integer(1)
    }

    /// Forme canonique. Appelant garantit den ≠ 0.
    fn reduit(mut num: BigInt, mut den: BigInt) -> Self {
        // pgcd(0, x) = |x| => 0/x devient 0/1
        let g = num.gcd(&den);
        if !g.is_zero() && !g.is_one() {
            num /= &g;
            den /= &g;
        }
        if den.is_negative() {
            num = -num;
            den = -den;
        }
        Self { num, den }
    }

    /* ------------------------ Accès ------------------------ */

    pub fn numerator(&self) -> &BigInt {
        &self.num
    }

    pub fn denominator(&self) -> &BigInt {
        &self.den
    }

    pub fn is_zero(&self) -> bool {
        self.num.is_zero()
    }

    pub fn is_integer(&self) -> bool {
        self.den.is_one()
    }

    pub fn is_negative(&self) -> bool {
        self.num.is_negative()
    }

    /* ------------------------ Opérations pures ------------------------ */

    pub fn add(&self, other: &Rational) -> Rational {
        let num = &self.num * &other.den + &other.num * &self.den;
        Self::reduit(num, &self.den * &other.den)
    }

    pub fn subtract(&self, other: &Rational) -> Rational {
        let num = &self.num * &other.den - &other.num * &self.den;
        Self::reduit(num, &self.den * &other.den)
    }

    pub fn multiply(&self, other: &Rational) -> Rational {
        Self::reduit(&self.num * &other.num, &self.den * &other.den)
    }

    /// Seule division exposée : pas de `Div` qui paniquerait.
    pub fn divide(&self, other: &Rational) -> Resultat<Rational> {
        if other.num.is_zero() {
            return Err(CalcError::DivisionByZero);
        }
        Ok(Self::reduit(&self.num * &other.den, &self.den * &other.num))
    }

    pub fn negate(&self) -> Rational {
        Self {
            num: -&self.num,
            den: self.den.clone(),
        }
    }

    pub fn reciprocal(&self) -> Resultat<Rational> {
        Rational::one().divide(self)
    }
}

/* ------------------------ Lecture texte : "N" ou "N/D" ------------------------ */

/// Entier signé strict : [+-]?[0-9]+ (pas d’espaces, pas de '_').
fn parse_entier(s: &str, jeton: &str) -> Resultat<BigInt> {
    let chiffres = s.strip_prefix(|c: char| c == '+' || c == '-').unwrap_or(s);
    if chiffres.is_empty() || !chiffres.bytes().all(|b| b.is_ascii_digit()) {
        return Err(CalcError::Parse(jeton.to_string()));
    }
    BigInt::parse_bytes(s.as_bytes(), 10).ok_or_else(|| CalcError::Parse(jeton.to_string()))
}

impl FromStr for Rational {
    type Err = CalcError;

    fn from_str(s: &str) -> Resultat<Self> {
        match s.split_once('/') {
            Some((n, d)) => {
                let num = parse_entier(n, s)?;
                let den = parse_entier(d, s)?;
                Rational::new(num, den)
            }
            None => parse_entier(s, s).map(Rational::from),
        }
    }
}

/* ------------------------ Rendu canonique ------------------------ */

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.den.is_one() {
            write!(f, "{}", self.num)
        } else {
            write!(f, "{}/{}", self.num, self.den)
        }
    }
}

impl Default for Rational {
    fn default() -> Self {
        Rational::zero()
    }
}

impl From<i64> for Rational {
    fn from(n: i64) -> Self {
        Rational::from_integer(n)
    }
}

impl From<BigInt> for Rational {
    fn from(n: BigInt) -> Self {
        Rational::from_integer(n)
    }
}

/* ------------------------ Ordre (produit en croix, den > 0) ------------------------ */

impl Ord for Rational {
    fn cmp(&self, other: &Self) -> Ordering {
        (&self.num * &other.den).cmp(&(&other.num * &self.den))
    }
}

impl PartialOrd for Rational {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/* ------------------------ Opérateurs (infaillibles seulement) ------------------------ */

macro_rules! op_infaillible {
    ($Trait:ident, $methode:ident, $pure:ident) => {
        impl $Trait<&Rational> for &Rational {
            type Output = Rational;
            fn $methode(self, rhs: &Rational) -> Rational {
                Rational::$pure(self, rhs)
            }
        }

        impl $Trait for Rational {
            type Output = Rational;
            fn $methode(self, rhs: Rational) -> Rational {
                Rational::$pure(&self, &rhs)
            }
        }
    };
}

op_infaillible!(Add, add, add);
op_infaillible!(Sub, sub, subtract);
op_infaillible!(Mul, mul, multiply);

impl Neg for &Rational {
    type Output = Rational;
    fn neg(self) -> Rational {
        self.negate()
    }
}

impl Neg for Rational {
    type Output = Rational;
    fn neg(self) -> Rational {
        self.negate()
    }
}
