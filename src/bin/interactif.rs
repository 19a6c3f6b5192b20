// src/bin/interactif.rs
//
// Boucle interactive : une commande par ligne, jusqu’à QUIT (ou Ctrl-D / Ctrl-C).
// Chaque erreur est affichée puis la boucle continue.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use log::{debug, warn};
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use calculatrice_fractions::frontal::{
    erreur_interactive, est_quit, est_registers, ligne_interactive,
};
use calculatrice_fractions::Session;

/// Calculatrice de fractions exactes (mode interactif).
///
/// Jetons séparés par des espaces, évaluation de gauche à droite :
/// `1/2 + 1/3`, `STORE a`, `a * 2`. QUIT pour sortir.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Invite affichée avant chaque ligne.
    #[arg(long, env = "CALC_PROMPT", default_value = "> ")]
    prompt: String,

    /// Décimales de la lecture tronquée (0 = aucune).
    #[arg(short, long, env = "CALC_DIGITS", default_value_t = 0)]
    digits: usize,

    /// Fichier d’historique (chargé au départ, sauvegardé à la sortie).
    #[arg(long)]
    history: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args = Args::parse();

    let mut rl = DefaultEditor::new()?;
    if let Some(path) = &args.history {
        if let Err(e) = rl.load_history(path) {
            debug!("historique non chargé ({}): {e}", path.display());
        }
    }

    let mut session = Session::new();

    loop {
        let line = match rl.readline(&args.prompt) {
            Ok(line) => line,
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => break,
            Err(e) => return Err(e.into()),
        };

        let ligne = line.trim();
        if ligne.is_empty() {
            continue;
        }
        rl.add_history_entry(ligne)?;

        if est_quit(ligne) {
            break;
        }

        if est_registers(ligne) {
            for (id, v) in session.registres().non_zero() {
                println!("{id} = {v}");
            }
            continue;
        }

        match session.evaluate_line(ligne) {
            Ok(sortie) => println!("{}", ligne_interactive(&sortie, args.digits)),
            Err(e) => println!("{}", erreur_interactive(&e)),
        }
    }

    if let Some(path) = &args.history {
        if let Err(e) = rl.save_history(path) {
            warn!("historique non sauvegardé ({}): {e}", path.display());
        }
    }

    Ok(())
}
