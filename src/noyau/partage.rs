// src/noyau/partage.rs
//
// Session partagée entre plusieurs appelants (threads).
// Un seul verrou par session : STORE et repli sont atomiques vis-à-vis des autres commandes.

use std::sync::{Mutex, MutexGuard};

use super::erreur::Resultat;
use super::eval::{Session, Sortie};
use super::rationnel::Rational;

#[derive(Debug, Default)]
pub struct SessionPartagee {
    inner: Mutex<Session>,
}

impl SessionPartagee {
    pub fn new() -> Self {
        Self::default()
    }

    /// Un verrou empoisonné reste utilisable : une commande n’écrit qu’à la toute fin,
    /// la session n’est donc jamais à moitié modifiée.
    fn verrou(&self) -> MutexGuard<'_, Session> {
        self.inner
            .lock()
            .unwrap_or_else(|poison| poison.into_inner())
    }

    pub fn evaluate_line(&self, ligne: &str) -> Resultat<Sortie> {
        self.verrou().evaluate_line(ligne)
    }

    pub fn valeur(&self) -> Rational {
        self.verrou().accumulateur().value().clone()
    }

    pub fn registre(&self, id: char) -> Resultat<Rational> {
        self.verrou().registres().get(id).cloned()
    }

    pub fn reset(&self) {
        self.verrou().reset();
    }

    /// Accès direct (plusieurs lectures cohérentes sous le même verrou).
    pub fn avec<T>(&self, f: impl FnOnce(&mut Session) -> T) -> T {
        f(&mut self.verrou())
    }
}
