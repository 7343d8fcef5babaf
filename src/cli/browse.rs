//! flashdeck - Open the configured store and launch the selector

use tracing::info;

use crate::config::Config;
use crate::error::Result;
use crate::services::{CatalogService, FlashcardService};
use crate::storage::SqliteStore;
use crate::tui::run_browse_tui;

pub fn run(config: &Config) -> Result<()> {
    let store = SqliteStore::open(&config.store.path)?;
    info!(store = %store.path().display(), "opening selector");

    run_browse_tui(CatalogService::sqlite(&store), FlashcardService::sqlite(&store))
}
