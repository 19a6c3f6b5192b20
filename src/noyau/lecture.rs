// src/noyau/lecture.rs
//
// Lecture décimale tronquée d’un rationnel exact (affichage d’appoint, jamais réinjectée
// dans le calcul).

use num_bigint::BigInt;
use num_traits::{Signed, Zero};

use super::rationnel::Rational;

/// Garde-fou : on borne la précision (anti-abus / anti-gel).
pub const DIGITS_MAX: usize = 200;

fn pow10(n: usize) -> BigInt {
    BigInt::from(10u32).pow(n as u32)
}

/// Convertit un entier “scalé” (×10^digits) en texte décimal.
/// Le signe est porté à part : `neg` couvre aussi -0.xxx (partie entière nulle).
fn scaled_to_decimal(scaled: BigInt, neg: bool, digits: usize) -> String {
    let scale = pow10(digits);
    let int_part = &scaled / &scale;
    let frac_part = &scaled % &scale;

    let signe = if neg { "-" } else { "" };

    if digits == 0 {
        return format!("{signe}{int_part}");
    }

    let mut frac = frac_part.to_str_radix(10);
    while frac.len() < digits {
        frac.insert(0, '0');
    }

    format!("{signe}{int_part}.{frac}")
}

impl Rational {
    /// Lecture décimale tronquée vers zéro, exactement `digits` décimales
    /// (bornées à DIGITS_MAX).
    pub fn to_decimal(&self, digits: usize) -> String {
        let digits = digits.min(DIGITS_MAX);
        // |r| * 10^digits, division entière (troncature)
        let scaled = (self.numerator().abs() * pow10(digits)) / self.denominator();

        // pas de "-0" quand tout est tronqué
        let neg = self.is_negative() && !scaled.is_zero();
        scaled_to_decimal(scaled, neg, digits)
    }
}
