//! Terminal UI for flashdeck.
//!
//! [`selector`] holds the cascading selection rules; [`browse`] draws them
//! with ratatui.

pub mod browse;
pub mod selector;

pub use browse::{BrowseTui, run_browse_tui};
pub use selector::Selector;
