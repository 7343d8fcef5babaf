//! Storage layer for flashdeck
//!
//! Read access goes through the per-kind repository traits. SQLite is the
//! persistent backend; an in-memory backend exists for tests.

pub mod memory;
pub mod migrations;
pub mod repository;
pub mod sqlite;

pub use memory::MemoryStore;
pub use repository::{CategoryRepository, CertificationRepository, FlashcardRepository};
pub use sqlite::{Fetched, SqliteStore, StoreWriter, WriteTx};
