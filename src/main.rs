//! Kepler - orbit renderer
//!
//! Every exit path reports success; failures are only visible as an
//! `ERROR:` line on standard error.

use std::process::ExitCode;

use kepler::app;
use kepler::cli::Cli;

fn main() -> ExitCode {
    // Initialize logging
    env_logger::init();

    let cli = match Cli::from_env() {
        Ok(cli) => cli,
        Err(e) => {
            eprintln!("ERROR: {}", e);
            return ExitCode::SUCCESS;
        }
    };

    if cli.help {
        eprint!("{}", Cli::usage());
        return ExitCode::SUCCESS;
    }

    log::info!("Starting Kepler");

    if let Err(e) = app::run_cli(&cli) {
        eprintln!("ERROR: {}", e);
    }

    ExitCode::SUCCESS
}
