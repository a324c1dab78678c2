//! Binary crate for the `weather` command-line tool.
//!
//! This crate focuses on:
//! - Parsing CLI arguments
//! - Loading `.env` and initialising logging
//! - Interactive configuration
//! - Printing the report, or the error with its stage context

use clap::Parser;
use std::{
    path::{Path, PathBuf},
    process::ExitCode,
};
use tracing::{debug, warn};

mod cli;
mod logging;

#[tokio::main]
async fn main() -> ExitCode {
    // Before parsing, so `API_KEY` from `.env` is visible to clap.
    let dotenv = load_dotenv();

    if let Err(err) = logging::init() {
        eprintln!("{err:#}");
    }

    match dotenv {
        Ok(path) => debug!(path = %path.display(), "loaded .env"),
        Err(err) if err.not_found() => debug!("no .env file, using process environment"),
        Err(err) => warn!(%err, "failed to load .env"),
    }

    let cmd = cli::Cli::parse();
    let (output, code) = outcome(cmd.run().await);
    println!("{output}");
    code
}

fn load_dotenv() -> dotenvy::Result<PathBuf> {
    load_dotenv_from(&std::env::current_dir().map_err(dotenvy::Error::Io)?)
}

/// Only `.env` directly inside `dir` is considered, parents are not searched.
fn load_dotenv_from(dir: &Path) -> dotenvy::Result<PathBuf> {
    let path = dir.join(".env");
    dotenvy::from_path(&path)?;
    Ok(path)
}

/// Both the report and the error chain go to stdout; only the exit code tells them apart.
fn outcome(result: anyhow::Result<String>) -> (String, ExitCode) {
    match result {
        Ok(output) => (output, ExitCode::SUCCESS),
        Err(err) => (format!("{err:#}"), ExitCode::FAILURE),
    }
}
