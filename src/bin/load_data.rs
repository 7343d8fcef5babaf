//! load-data - load flashcards from a resources tree of CSV files
//!
//! Usage: `load-data <STORE> <RESOURCES>`

use std::process::ExitCode;

use clap::Parser;
use tracing::error;

use flashdeck::Result;
use flashdeck::cli::{LoadDataCli, LogSink, init_tracing, load_data};
use flashdeck::config::Config;

fn main() -> ExitCode {
    let cli = LoadDataCli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(code = %e.code(), "{e}");
            eprintln!("Error: {e}");
            eprintln!("  hint: {}", e.code().suggestion());
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &LoadDataCli) -> Result<()> {
    init_tracing(LogSink::Stderr)?;
    let config = Config::load(None, &std::env::current_dir()?)?;
    load_data::run(cli, &config)?;
    Ok(())
}
