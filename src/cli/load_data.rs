//! load-data - Populate the store from a resources directory

use colored::Colorize;
use tracing::info;

use crate::cli::LoadDataCli;
use crate::config::Config;
use crate::error::Result;
use crate::ingest::{IngestReport, Ingestor};
use crate::storage::SqliteStore;

/// Ingest `args.resources` into the store at `args.store`.
///
/// The store path always comes from the arguments; only the `ingest` section
/// of `config` is used.
pub fn run(args: &LoadDataCli, config: &Config) -> Result<IngestReport> {
    info!(
        store = %args.store.display(),
        resources = %args.resources.display(),
        "loading flashcards"
    );

    let store = SqliteStore::open(&args.store)?;
    let report = Ingestor::new(config.ingest.clone()).ingest(&store, &args.resources)?;

    println!("{} {}", "✓".green().bold(), report);
    Ok(report)
}
