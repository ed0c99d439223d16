//! Generic settings persistence coordination.
//!
//! Settings are stored in eframe's persistent storage as JSON strings. The
//! catalog browser persists one structured value, [`CatalogConfig`], next to
//! the theme preference handled by `ThemeCoordinator`.

use rcatalog::{LayoutConfig, WindowConfig};
use serde::{Deserialize, Serialize};

/// Storage key of the persisted [`CatalogConfig`]
pub const CATALOG_CONFIG_KEY: &str = "catalog_config";

/// Layout and windowing tunables.
///
/// Missing fields in stored JSON fall back to their defaults, so older or
/// hand-edited settings still load.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    pub layout: LayoutConfig,
    pub window: WindowConfig,
}

/// Coordinates generic settings persistence.
pub struct SettingsCoordinator;

impl SettingsCoordinator {
    /// Loads a setting, or `T::default()` if it is missing or unreadable.
    ///
    /// # Examples
    /// ```ignore
    /// let config: CatalogConfig = SettingsCoordinator::load_setting(storage, CATALOG_CONFIG_KEY);
    /// ```
    pub fn load_setting<T>(storage: Option<&dyn eframe::Storage>, key: &str) -> T
    where
        T: for<'de> Deserialize<'de> + Default,
    {
        Self::try_load_setting(storage, key).unwrap_or_default()
    }

    /// Saves a setting as JSON. Serialization failures are logged and skipped.
    pub fn save_setting<T>(storage: &mut dyn eframe::Storage, key: &str, value: &T)
    where
        T: Serialize,
    {
        match serde_json::to_string(value) {
            Ok(json_str) => {
                storage.set_string(key, json_str);
                storage.flush();
            }
            Err(e) => tracing::warn!(key, error = %e, "failed to serialize setting"),
        }
    }

    /// Attempts to load a setting, returning None if not found or invalid.
    pub fn try_load_setting<T>(storage: Option<&dyn eframe::Storage>, key: &str) -> Option<T>
    where
        T: for<'de> Deserialize<'de>,
    {
        let storage = storage?;
        let json_str = storage.get_string(key)?;
        match serde_json::from_str(&json_str) {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!(key, error = %e, "ignoring unreadable setting");
                None
            }
        }
    }

    pub fn load_catalog_config(storage: Option<&dyn eframe::Storage>) -> CatalogConfig {
        Self::load_setting(storage, CATALOG_CONFIG_KEY)
    }

    pub fn save_catalog_config(storage: &mut dyn eframe::Storage, config: &CatalogConfig) {
        Self::save_setting(storage, CATALOG_CONFIG_KEY, config);
    }
}
