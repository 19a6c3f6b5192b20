//! Tests scientifiques (campagne) : invariants + robustesse + limites contrôlées.
//!
//! But : trouver les limites sans faire chauffer la machine.
//! - budget temps global
//! - tailles bornées (longueur des chaînes, taille des entiers)
//!
//! Notes :
//! - la forme canonique est vérifiée après CHAQUE construction (pgcd = 1, den > 0)
//! - l’évaluation est itérative : une somme de 2000 termes ne touche pas la pile

use std::time::{Duration, Instant};

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Signed};

use super::{Rational, Session};

fn eval_ok(s: &mut Session, ligne: &str) -> String {
    s.evaluate_line(ligne)
        .unwrap_or_else(|e| panic!("ligne={ligne:?} err={e}"))
        .to_string()
}

fn assert_canonique(r: &Rational) {
    assert!(r.denominator().is_positive(), "den <= 0 : {r:?}");
    assert!(
        r.numerator().gcd(r.denominator()).is_one(),
        "non réduit : {r:?}"
    );
}

/// Budget global anti-gel (scientifique + safe).
fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Forme canonique ------------------------ */

#[test]
fn sci_grille_canonique() {
    for n in -24i64..=24 {
        for d in -24i64..=24 {
            if d == 0 {
                continue;
            }
            let r = Rational::new(n, d).unwrap();
            assert_canonique(&r);

            // relecture de son propre rendu : même valeur
            let relu: Rational = r.to_string().parse().unwrap();
            assert_eq!(relu, r, "n={n} d={d}");
        }
    }
}

#[test]
fn sci_operations_restent_canoniques() {
    let valeurs: Vec<Rational> = ["0", "1", "-1", "1/2", "-2/3", "7/12", "-35/6", "9/4"]
        .iter()
        .map(|s| s.parse().unwrap())
        .collect();

    for a in &valeurs {
        for b in &valeurs {
            assert_canonique(&a.add(b));
            assert_canonique(&a.subtract(b));
            assert_canonique(&a.multiply(b));
            if !b.is_zero() {
                assert_canonique(&a.divide(b).unwrap());
            }
        }
    }
}

/* ------------------------ Cohérence algébrique ------------------------ */

#[test]
fn sci_zero_algebrique() {
    let mut s = Session::new();
    assert_eq!(eval_ok(&mut s, "1/2 + 1/3 - 5/6"), "0");
    assert_eq!(eval_ok(&mut s, "2/3 * 3/4 - 1/2"), "0");
    assert_eq!(eval_ok(&mut s, "7/9 / 7/9 - 1"), "0");
}

#[test]
fn sci_inverse_multiplicatif() {
    for s in ["1/2", "-3/7", "22/7", "5"] {
        let r: Rational = s.parse().unwrap();
        let inv = r.reciprocal().unwrap();
        assert_eq!(r.multiply(&inv), Rational::one(), "r={s}");
    }
}

/* ------------------------ Stress contrôlé (sans brûler) ------------------------ */

#[test]
fn sci_stress_somme_longue() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    let mut ligne = String::from("1/2");
    for _ in 1..2000 {
        ligne.push_str(" + 1/2");
    }
    budget(t0, max);

    // 2000 * 1/2 = 1000
    let mut s = Session::new();
    assert_eq!(eval_ok(&mut s, &ligne), "1000");
    budget(t0, max);
}

#[test]
fn sci_stress_bigint_safe() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    // gros numérateur contrôlé (300 chiffres)
    let big = "9".repeat(300);
    let mut s = Session::new();
    let v = eval_ok(&mut s, &format!("{big}/7 + 1/7"));
    budget(t0, max);

    // (10^300 - 1 + 1) / 7, pgcd(10^300, 7) = 1
    let attendu = format!("1{}/7", "0".repeat(300));
    assert_eq!(v, attendu);
}

#[test]
fn sci_stress_denominateurs_croissants() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    // somme des 1/k : dénominateur ppcm(1..=60), reste exact et réduit
    let mut total = Rational::zero();
    for k in 1..=60i64 {
        total = total.add(&Rational::new(1, k).unwrap());
        budget(t0, max);
    }
    assert_canonique(&total);

    let mut ppcm = BigInt::one();
    for k in 1..=60i64 {
        ppcm = ppcm.lcm(&BigInt::from(k));
    }
    assert!(total.denominator() <= &ppcm);
}

/* ------------------------ Lecture décimale : cohérence minimale ------------------------ */

#[test]
fn sci_lecture_coherente() {
    let mut s = Session::new();
    eval_ok(&mut s, "1 / 3");
    assert_eq!(s.accumulateur().value().to_decimal(6), "0.333333");

    eval_ok(&mut s, "0 - 10 / 4");
    assert_eq!(s.accumulateur().value().to_decimal(3), "-2.500");
}
