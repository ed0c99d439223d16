//! Color themes for the catalog browser.
//!
//! Two palettes are built in (Light, Dark). Besides the egui chrome colors,
//! each palette carries the catalog-specific colors painted by hand: card
//! surfaces, price accent, rating star, stock badges and the cart button.
//!
//! # Examples
//!
//! ```
//! use rcatalog::theme::ThemeManager;
//!
//! let manager = ThemeManager::new();
//! let light = manager.get_theme("Light").unwrap();
//! println!("Light price accent: {:?}", light.colors.price);
//! ```

use egui::Color32;
use std::collections::HashMap;

/// Theme used when no preference is stored
pub const DEFAULT_THEME: &str = "Light";

/// Color palette for one theme
#[derive(Debug, Clone)]
pub struct ThemeColors {
    // Chrome
    pub background: Color32,
    pub panel_background: Color32,
    pub extreme_background: Color32,
    pub text: Color32,
    pub text_dim: Color32,
    pub text_strong: Color32,
    pub selection: Color32,
    pub hover: Color32,
    pub border: Color32,

    // Cards and details
    pub card_background: Color32,
    pub card_shadow: Color32,
    pub image_placeholder: Color32,
    pub category: Color32,
    pub price: Color32,
    pub star: Color32,
    pub in_stock: Color32,
    pub out_of_stock: Color32,
    pub badge_text: Color32,
    pub button: Color32,
    pub button_disabled: Color32,
    pub button_text: Color32,
    pub spec_row_alt: Color32,
}

#[derive(Debug, Clone)]
pub struct Theme {
    pub name: String,
    pub description: String,
    pub colors: ThemeColors,
}

/// Owns the built-in themes and the current selection
pub struct ThemeManager {
    themes: HashMap<String, Theme>,
    current_theme_name: String,
}

impl ThemeManager {
    pub fn new() -> Self {
        let mut themes = HashMap::new();
        themes.insert("Light".to_string(), light_theme());
        themes.insert("Dark".to_string(), dark_theme());

        Self {
            themes,
            current_theme_name: DEFAULT_THEME.to_string(),
        }
    }

    pub fn get_theme(&self, name: &str) -> Option<&Theme> {
        self.themes.get(name)
    }

    /// Theme names, sorted
    pub fn list_themes(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.themes.keys().map(|s| s.as_str()).collect();
        names.sort();
        names
    }

    pub fn current_theme_name(&self) -> &str {
        &self.current_theme_name
    }

    /// Gets the currently selected theme, falling back to the default palette
    pub fn current_theme(&self) -> &Theme {
        self.themes
            .get(&self.current_theme_name)
            .or_else(|| self.themes.get(DEFAULT_THEME))
            .unwrap_or_else(|| unreachable!("built-in themes are always registered"))
    }

    pub fn set_current_theme(&mut self, name: &str) -> Result<(), String> {
        if self.themes.contains_key(name) {
            self.current_theme_name = name.to_string();
            Ok(())
        } else {
            Err(format!("Theme '{}' not found", name))
        }
    }

    /// Applies a theme's chrome colors to egui visuals
    pub fn apply_theme(&self, theme: &Theme, visuals: &mut egui::Visuals) {
        let colors = &theme.colors;

        visuals.panel_fill = colors.panel_background;
        visuals.window_fill = colors.card_background;
        visuals.extreme_bg_color = colors.extreme_background;
        visuals.faint_bg_color = colors.hover;

        visuals.override_text_color = Some(colors.text);

        visuals.selection.bg_fill = colors.selection;
        visuals.selection.stroke.color = colors.price;

        visuals.widgets.noninteractive.bg_fill = colors.panel_background;
        visuals.widgets.inactive.bg_fill = colors.hover;
        visuals.widgets.hovered.bg_fill = colors.hover;
        visuals.widgets.active.bg_fill = colors.selection;

        visuals.hyperlink_color = colors.price;
        visuals.error_fg_color = colors.out_of_stock;
        visuals.warn_fg_color = colors.star;
    }
}

impl Default for ThemeManager {
    fn default() -> Self {
        Self::new()
    }
}

fn light_theme() -> Theme {
    Theme {
        name: "Light".to_string(),
        description: "Light catalog palette".to_string(),
        colors: ThemeColors {
            background: hex_to_color32("#f5f5f5"),
            panel_background: hex_to_color32("#f5f5f5"),
            extreme_background: hex_to_color32("#ffffff"),
            text: hex_to_color32("#333333"),
            text_dim: hex_to_color32("#666666"),
            text_strong: hex_to_color32("#000000"),
            selection: hex_to_color32("#bbdefb"),
            hover: hex_to_color32("#e0e0e0"),
            border: hex_to_color32("#dddddd"),

            card_background: hex_to_color32("#ffffff"),
            card_shadow: with_alpha(Color32::BLACK, 24),
            image_placeholder: hex_to_color32("#eeeeee"),
            category: hex_to_color32("#666666"),
            price: hex_to_color32("#2196f3"),
            star: hex_to_color32("#ffa000"),
            in_stock: hex_to_color32("#4caf50"),
            out_of_stock: hex_to_color32("#f44336"),
            badge_text: hex_to_color32("#ffffff"),
            button: hex_to_color32("#2196f3"),
            button_disabled: hex_to_color32("#cccccc"),
            button_text: hex_to_color32("#ffffff"),
            spec_row_alt: hex_to_color32("#f9f9f9"),
        },
    }
}

fn dark_theme() -> Theme {
    Theme {
        name: "Dark".to_string(),
        description: "Dark catalog palette".to_string(),
        colors: ThemeColors {
            background: Color32::from_rgb(30, 30, 30),
            panel_background: Color32::from_rgb(30, 30, 30),
            extreme_background: Color32::from_rgb(16, 16, 16),
            text: Color32::from_rgb(235, 235, 235),
            text_dim: Color32::from_rgb(160, 160, 160),
            text_strong: Color32::from_rgb(255, 255, 255),
            selection: Color32::from_rgb(40, 70, 110),
            hover: Color32::from_rgb(60, 60, 60),
            border: Color32::from_rgb(80, 80, 80),

            card_background: Color32::from_rgb(45, 45, 45),
            card_shadow: with_alpha(Color32::BLACK, 80),
            image_placeholder: Color32::from_rgb(64, 64, 64),
            category: Color32::from_rgb(170, 170, 170),
            price: hex_to_color32("#64b5f6"),
            star: hex_to_color32("#ffb300"),
            in_stock: hex_to_color32("#43a047"),
            out_of_stock: hex_to_color32("#e53935"),
            badge_text: hex_to_color32("#ffffff"),
            button: hex_to_color32("#1e88e5"),
            button_disabled: Color32::from_rgb(90, 90, 90),
            button_text: hex_to_color32("#ffffff"),
            spec_row_alt: Color32::from_rgb(52, 52, 52),
        },
    }
}

/// Converts a hex color string (like "#2196f3") to Color32
pub fn hex_to_color32(hex: &str) -> Color32 {
    let hex = hex.trim_start_matches('#');

    if hex.len() == 6 && hex.is_ascii() {
        let r = u8::from_str_radix(&hex[0..2], 16).unwrap_or(0);
        let g = u8::from_str_radix(&hex[2..4], 16).unwrap_or(0);
        let b = u8::from_str_radix(&hex[4..6], 16).unwrap_or(0);
        Color32::from_rgb(r, g, b)
    } else {
        Color32::from_rgb(0, 0, 0)
    }
}

/// Scales the brightness of a color (1.0 = no change)
pub fn adjust_brightness(color: Color32, factor: f32) -> Color32 {
    let r = (color.r() as f32 * factor).min(255.0) as u8;
    let g = (color.g() as f32 * factor).min(255.0) as u8;
    let b = (color.b() as f32 * factor).min(255.0) as u8;
    Color32::from_rgb(r, g, b)
}

pub fn with_alpha(color: Color32, alpha: u8) -> Color32 {
    Color32::from_rgba_premultiplied(color.r(), color.g(), color.b(), alpha)
}
