//! Rook launcher
//!
//! Parses the command line, initializes logging and hands control to the
//! selected daemon role.

use clap::Parser;
use rook::cli::{self, error::HelpfulError, Cli};
use rook_logging::{init_logging, LogConfig};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let _log_guard = match init_logging(LogConfig {
        app_name: "rook",
        level: cli.globals.log_level,
        log_dir: cli.globals.log_dir.clone(),
    }) {
        Ok(guard) => guard,
        Err(err) => {
            eprintln!("Warning: failed to initialize logging: {:#}", err);
            None
        }
    };

    match cli::run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            if let Some(helpful) = err.downcast_ref::<HelpfulError>() {
                eprint!("{}", helpful);
            } else {
                eprintln!("ERROR: {:#}", err);
            }
            ExitCode::FAILURE
        }
    }
}
