//! CLI module - argument definitions and entry points for both binaries
//!
//! Uses clap v4 with derive macros for argument parsing.

use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use crate::error::Result;

pub mod browse;
pub mod load_data;

/// Default log filter when `RUST_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "warn,flashdeck=info";

/// Flashdeck - browse certification flashcards
#[derive(Parser, Debug)]
#[command(name = "flashdeck")]
#[command(author, version, about, long_about = None)]
pub struct AppCli {}

/// Load flashcard data from CSV files into the database
#[derive(Parser, Debug)]
#[command(name = "load-data")]
#[command(author, version, about, long_about = None)]
pub struct LoadDataCli {
    /// Path of the SQLite store (created if absent)
    #[arg(value_name = "STORE")]
    pub store: PathBuf,

    /// Directory containing one folder per certification
    #[arg(value_name = "RESOURCES")]
    pub resources: PathBuf,
}

/// Where log events go.
#[derive(Debug, Clone, Copy)]
pub enum LogSink<'a> {
    Stderr,
    /// Append to a file; used while the TUI owns the terminal.
    File(&'a Path),
    Disabled,
}

/// Install the global tracing subscriber.
pub fn init_tracing(sink: LogSink<'_>) -> Result<()> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    match sink {
        LogSink::Stderr => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt::layer().with_writer(std::io::stderr))
                .init();
        }
        LogSink::File(path) => {
            let file = File::options().create(true).append(true).open(path)?;
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
                .init();
        }
        LogSink::Disabled => {}
    }
    Ok(())
}
