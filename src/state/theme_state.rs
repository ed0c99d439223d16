//! Theme and styling state management.

use rcatalog::theme::DEFAULT_THEME;
use rcatalog::ThemeManager;

/// Theme manager plus the name of the selected theme.
pub struct ThemeState {
    theme_manager: ThemeManager,
    current_theme_name: String,
}

impl std::fmt::Debug for ThemeState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemeState")
            .field("current_theme_name", &self.current_theme_name)
            .finish_non_exhaustive()
    }
}

impl Default for ThemeState {
    fn default() -> Self {
        Self::new()
    }
}

impl ThemeState {
    pub fn new() -> Self {
        Self::with_theme(DEFAULT_THEME.to_string())
    }

    /// Creates a theme state for a stored theme name.
    ///
    /// Unknown names (e.g. from an older settings file) fall back to the default.
    pub fn with_theme(theme_name: String) -> Self {
        let theme_manager = ThemeManager::new();
        let current_theme_name = if theme_manager.get_theme(&theme_name).is_some() {
            theme_name
        } else {
            tracing::debug!(theme = %theme_name, "unknown theme, using default");
            DEFAULT_THEME.to_string()
        };
        Self {
            theme_manager,
            current_theme_name,
        }
    }

    pub fn theme_manager(&self) -> &ThemeManager {
        &self.theme_manager
    }

    pub fn current_theme_name(&self) -> &str {
        &self.current_theme_name
    }

    pub fn set_theme(&mut self, theme_name: String) {
        self.current_theme_name = theme_name;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_stored_theme_falls_back() {
        assert_eq!(ThemeState::with_theme("Dracula".to_string()).current_theme_name(), DEFAULT_THEME);
        assert_eq!(ThemeState::with_theme("Dark".to_string()).current_theme_name(), "Dark");
    }
}
