pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod ingest;
pub mod services;
pub mod storage;
pub mod test_utils;
pub mod tui;

pub use error::{FlashError, Result};

/// Package version from Cargo.toml.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
