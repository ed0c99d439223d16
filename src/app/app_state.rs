//! Centralized application state for the catalog browser.
//!
//! The state is composed of focused components that each own one concern,
//! so panels can borrow them independently.

use rcatalog::NavigationStack;

use crate::app::CatalogConfig;
use crate::state::{CatalogState, ListState, ThemeState};

/// Short-lived message shown under the details view (e.g. cart acknowledgement)
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub text: String,
    /// egui time (seconds) after which the notice is dropped
    pub expires_at: f64,
}

impl Notice {
    pub fn new(text: impl Into<String>, now: f64, duration: f64) -> Self {
        Self {
            text: text.into(),
            expires_at: now + duration,
        }
    }

    pub fn is_expired(&self, now: f64) -> bool {
        now >= self.expires_at
    }
}

/// Main application state composed of focused state components.
pub struct AppState {
    /// Loaded catalog and where it came from
    pub catalog: CatalogState,

    /// Windowed list bookkeeping for the product grid
    pub list: ListState,

    /// List / details routes
    pub navigation: NavigationStack,

    /// Theme and styling state
    pub theme: ThemeState,

    /// Layout and windowing configuration
    pub config: CatalogConfig,

    /// Current error message to display (if any)
    pub error_message: Option<String>,

    pub notice: Option<Notice>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::with_theme_and_config(ThemeState::new().current_theme_name().to_string(), CatalogConfig::default())
    }

    /// Creates a new AppState with theme and configuration loaded from storage.
    pub fn with_theme_and_config(theme_name: String, config: CatalogConfig) -> Self {
        Self {
            catalog: CatalogState::new(),
            list: ListState::new(&config),
            navigation: NavigationStack::new(),
            theme: ThemeState::with_theme(theme_name),
            config,
            error_message: None,
            notice: None,
        }
    }

    /// Resets everything that depends on the loaded catalog.
    pub fn reset_catalog_state(&mut self) {
        self.catalog.clear();
        self.list.reset();
        self.navigation = NavigationStack::new();
        self.error_message = None;
        self.notice = None;
    }

    /// Drops the notice once it has expired.
    pub fn expire_notice(&mut self, now: f64) {
        if self.notice.as_ref().is_some_and(|notice| notice.is_expired(now)) {
            self.notice = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notice_expiry() {
        let mut state = AppState::new();
        state.notice = Some(Notice::new("Added to cart!", 10.0, 2.0));

        state.expire_notice(11.0);
        assert!(state.notice.is_some());

        state.expire_notice(12.0);
        assert!(state.notice.is_none());
    }
}
