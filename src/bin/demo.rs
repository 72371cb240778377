//! Process bootstrap
//!
//! Prints the working-directory banner, constructs the application from
//! configuration, runs it, and forwards the run status verbatim as the
//! process exit code.

use std::process::ExitCode;

use tracing::{error, warn};
use tracing_subscriber::EnvFilter;

use gpu_text::app::{App, status_to_exit_code};
use gpu_text::paths;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // The banner is part of the observable contract and stays on stdout
    match std::env::current_dir() {
        Ok(dir) => println!("{}", paths::banner_line(&dir)),
        Err(e) => warn!(error = %e, "Could not determine working directory"),
    }

    match App::from_env().run() {
        Ok(status) => status_to_exit_code(status),
        Err(e) => {
            error!(error = %e, "Event loop failed");
            ExitCode::FAILURE
        }
    }
}
