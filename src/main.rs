//! flashdeck - browse certification flashcards
//!
//! Opens the configured store (default `flashcards.db`) and launches the
//! cascading selector.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::error;

use flashdeck::Result;
use flashdeck::cli::{AppCli, LogSink, browse, init_tracing};
use flashdeck::config::Config;

fn main() -> ExitCode {
    let _cli = AppCli::parse();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(code = %e.code(), "{e}");
            eprintln!("Error: {e}");
            eprintln!("  hint: {}", e.code().suggestion());
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    // The selector owns the terminal, so logs only go to an explicit file.
    let log_path = std::env::var_os("FLASHDECK_LOG").map(PathBuf::from);
    match &log_path {
        Some(path) => init_tracing(LogSink::File(path))?,
        None => init_tracing(LogSink::Disabled)?,
    }

    let config = Config::load(None, &std::env::current_dir()?)?;
    browse::run(&config)
}
