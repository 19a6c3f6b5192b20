//! Conventions d’affichage communes aux frontaux terminal (interactif + lot).
//!
//! Une seule convention d’erreur par frontal; le noyau ne formate jamais rien.

use crate::noyau::{CalcError, Sortie};

/// Sentinelle de fin de la boucle interactive (insensible à la casse).
pub const MOT_QUIT: &str = "QUIT";

/// Commande interactive : liste des registres non nuls.
pub const MOT_REGISTERS: &str = "REGISTERS";

pub fn est_quit(ligne: &str) -> bool {
    ligne.trim().eq_ignore_ascii_case(MOT_QUIT)
}

pub fn est_registers(ligne: &str) -> bool {
    ligne.trim().eq_ignore_ascii_case(MOT_REGISTERS)
}

/// Interactif : valeur canonique, suivie de la lecture décimale si demandée.
pub fn ligne_interactive(sortie: &Sortie, digits: usize) -> String {
    match sortie {
        Sortie::Valeur(v) if digits > 0 && !v.is_integer() => {
            format!("{v}  (≈ {})", v.to_decimal(digits))
        }
        autre => autre.to_string(),
    }
}

pub fn erreur_interactive(e: &CalcError) -> String {
    format!("*** ERROR: {e} ***")
}

/// Lot : "<expr> -> <valeur>" ou "<expr> -> STORED".
pub fn succes_lot(expr: &str, sortie: &Sortie, digits: usize) -> String {
    format!("{expr} -> {}", ligne_interactive(sortie, digits))
}

/// Lot : "<expr>: FAILED [<message>]".
pub fn echec_lot(expr: &str, e: &CalcError) -> String {
    format!("{expr}: FAILED [{e}]")
}
