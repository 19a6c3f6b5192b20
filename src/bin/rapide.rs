// src/bin/rapide.rs
//
// Mode lot : chaque argument est une expression, évaluée dans l’ordre sur une même
// session. Un échec est signalé puis on passe à l’argument suivant.

use std::process::ExitCode;

use clap::Parser;
use log::info;

use calculatrice_fractions::frontal::{echec_lot, succes_lot};
use calculatrice_fractions::Session;

/// Calculatrice de fractions exactes (mode lot).
///
/// Exemple : rapide "1/2 + 1/3" "STORE a" "a * 2"
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Décimales de la lecture tronquée (0 = aucune).
    #[arg(short, long, env = "CALC_DIGITS", default_value_t = 0)]
    digits: usize,

    /// Code de sortie non nul si au moins une expression échoue.
    #[arg(long)]
    strict: bool,

    /// Expressions (une par argument, jetons séparés par des espaces).
    expressions: Vec<String>,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args = Args::parse();

    let mut session = Session::new();
    let mut echecs = 0usize;

    for expr in &args.expressions {
        match session.evaluate_line(expr) {
            Ok(sortie) => println!("{}", succes_lot(expr, &sortie, args.digits)),
            Err(e) => {
                echecs += 1;
                println!("{}", echec_lot(expr, &e));
            }
        }
    }

    info!("{} expression(s), {echecs} échec(s)", args.expressions.len());

    if args.strict && echecs > 0 {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
