//! Low-level painting for the catalog browser
//!
//! - Product cards (painter-based, positioned by the windowed list)
//! - Text utilities (measurement and truncation)

pub mod card_renderer;
pub mod text_utils;
