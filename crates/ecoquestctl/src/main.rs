//! EcoQuest Control - CLI for EcoQuest level progression
//!
//! Drives the progression store for one player: report wins, check unlocks,
//! show plant growth and badges.

use clap::Parser;
use ecoquestctl::cli::Cli;
use ecoquestctl::commands;
use ecoquestctl::errors::{EXIT_GENERAL_ERROR, EXIT_SUCCESS, EXIT_USAGE};

fn main() {
    // clap's own exit code 2 would read as "reset not confirmed"
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            std::process::exit(if e.use_stderr() { EXIT_USAGE } else { EXIT_SUCCESS });
        }
    };

    match commands::run(&cli) {
        Ok(output) => {
            print!("{}", output.text);
            std::process::exit(output.code);
        }
        Err(e) => {
            eprintln!("Error: {:#}", e);
            let code = if e.downcast_ref::<ecoquest_shared::EcoQuestError>().is_some() {
                EXIT_USAGE
            } else {
                EXIT_GENERAL_ERROR
            };
            std::process::exit(code);
        }
    }
}
