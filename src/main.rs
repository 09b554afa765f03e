mod cli;
mod combine;
mod config;
mod error;
mod report;
mod scenario;
mod session;
mod table;
mod telemetry;
mod types;

use crate::error::CalcError;
use crate::scenario::{coerce_ratings, CoercedRating};
use crate::types::rating::ScenarioName;
use clap::Parser;

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const RUNTIME_FAILURE: i32 = 3;
}

fn run() -> Result<i32, CalcError> {
    let cli = cli::Cli::parse();
    let settings = config::Settings::from_cli(&cli);
    telemetry::init(&settings)?;

    match cli.command.unwrap_or(cli::Commands::Interactive) {
        cli::Commands::Interactive => {
            let stdin = std::io::stdin();
            let stdout = std::io::stdout();
            session::Session::new(stdin.lock(), stdout.lock()).run()?;
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Combine(cmd) => {
            let (ratings, coerced) = coerce_ratings(&cmd.ratings);
            warn_coerced(ScenarioName::Current, &coerced);
            let rendered =
                report::render_scenario(ScenarioName::Current, &ratings, settings.format)?;
            println!("{}", rendered.trim_end());
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Compare(cmd) => {
            let (current, coerced) = coerce_ratings(&cmd.current);
            warn_coerced(ScenarioName::Current, &coerced);
            let (proposed, coerced) = coerce_ratings(&cmd.proposed);
            warn_coerced(ScenarioName::Proposed, &coerced);

            let outcome = report::compare(Some(&current), Some(&proposed));
            let rendered = report::render_comparison(&outcome, settings.format)?;
            println!("{}", rendered.trim_end());
            Ok(exit_code::SUCCESS)
        }
    }
}

fn warn_coerced(name: ScenarioName, coerced: &[CoercedRating]) {
    for entry in coerced {
        eprintln!(
            "warning: {} rating {} ({}) is outside 0-100; stored as 0",
            name.label(),
            entry.position,
            entry.raw
        );
    }
}

fn main() {
    match run() {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
        }
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(exit_code::RUNTIME_FAILURE);
        }
    }
}
