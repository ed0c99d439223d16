//! UI panel rendering subsystem
//!
//! - Header panel (navigation, theme selector)
//! - Product list panel (windowed card grid)
//! - Details panel (full product record, cart action)
//! - Status bar (catalog and windowing counters)
//! - Virtual scroll manager (scroll area ↔ windowed list coordinates)
//! - Panel manager (panel orchestration and layout)

pub mod header;
pub mod product_list_panel;
pub mod details_panel;
pub mod status_bar;
pub mod virtual_scroll_manager;
pub mod panel_manager;
