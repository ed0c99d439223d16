//! State management modules for the catalog browser.
//!
//! This module contains state-only logic (no UI concerns):
//! - Catalog state (loaded products, source description)
//! - List state (windowed list, last viewport, pending scroll requests)
//! - Theme state (theme manager, current theme)

mod catalog_state;
mod list_state;
mod theme_state;

pub use catalog_state::CatalogState;
pub use list_state::ListState;
pub use theme_state::ThemeState;
