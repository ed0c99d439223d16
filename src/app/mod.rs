//! Application-level modules for the catalog browser.
//!
//! This module contains the coordinators and the centralized state.

mod app_state;
mod application_coordinator;
mod catalog_source;
mod theme_coordinator;
mod settings_coordinator;

pub use app_state::{AppState, Notice};
pub use application_coordinator::ApplicationCoordinator;
pub use catalog_source::CatalogSource;
pub use theme_coordinator::ThemeCoordinator;
pub use settings_coordinator::{CatalogConfig, SettingsCoordinator};
