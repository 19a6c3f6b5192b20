// src/noyau/erreur.rs
//
// Erreurs du noyau (typées).
// Une variante par genre d’échec; le noyau ne rattrape jamais ses propres erreurs,
// ce sont les frontaux qui les affichent.

use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum CalcError {
    /// Littéral numérique mal formé.
    #[error("nombre invalide: '{0}'")]
    Parse(String),

    /// Dénominateur nul (construction) ou division par une valeur nulle.
    #[error("division par zéro")]
    DivisionByZero,

    /// Identifiant hors de a..=z.
    #[error("registre invalide: '{0}'")]
    InvalidRegister(String),

    /// Jeton en position d’opérateur hors de {+, -, *, /}.
    #[error("opérateur invalide: '{0}'")]
    InvalidOperator(String),

    /// STORE mal formé (arité ou cible).
    #[error("commande invalide: {0}")]
    InvalidCommand(String),

    /// Opérateur final sans opérande, ou entrée vide.
    #[error("expression invalide: {0}")]
    MalformedExpression(String),
}

impl CalcError {
    /// Nom stable du genre d’erreur (indépendant du message).
    pub fn genre(&self) -> &'static str {
        match self {
            CalcError::Parse(_) => "ParseError",
            CalcError::DivisionByZero => "DivisionByZero",
            CalcError::InvalidRegister(_) => "InvalidRegister",
            CalcError::InvalidOperator(_) => "InvalidOperator",
            CalcError::InvalidCommand(_) => "InvalidCommand",
            CalcError::MalformedExpression(_) => "MalformedExpression",
        }
    }
}

pub type Resultat<T> = Result<T, CalcError>;
