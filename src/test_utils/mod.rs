//! Shared test utilities for flashdeck.

pub mod fixtures;
pub mod logging;

pub use fixtures::ResourcesFixture;
pub use logging::TestLogger;
