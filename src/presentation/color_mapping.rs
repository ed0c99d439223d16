//! Color mapping for catalog widgets.
//!
//! Maps view-model states (stock badge, cart button) to theme colors so that
//! painters never hardcode colors.

use egui::Color32;
use rcatalog::{CartButton, StockBadge, ThemeColors, ThemeManager};

/// Returns the palette of the named theme, or of the current theme if the
/// name is unknown.
pub fn theme_colors<'a>(theme_manager: &'a ThemeManager, current_theme_name: &str) -> &'a ThemeColors {
    theme_manager
        .get_theme(current_theme_name)
        .map(|t| &t.colors)
        .unwrap_or_else(|| &theme_manager.current_theme().colors)
}

pub fn stock_badge_color(stock: StockBadge, colors: &ThemeColors) -> Color32 {
    match stock {
        StockBadge::InStock => colors.in_stock,
        StockBadge::OutOfStock => colors.out_of_stock,
    }
}

pub fn cart_button_fill(button: &CartButton, colors: &ThemeColors) -> Color32 {
    if button.enabled {
        colors.button
    } else {
        colors.button_disabled
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_theme_name_falls_back() {
        let manager = ThemeManager::new();
        let colors = theme_colors(&manager, "Solarized");
        assert_eq!(colors.price, manager.current_theme().colors.price);
    }

    #[test]
    fn test_badge_and_button_colors() {
        let manager = ThemeManager::new();
        let colors = theme_colors(&manager, "Light");
        assert_eq!(stock_badge_color(StockBadge::InStock, colors), colors.in_stock);
        assert_eq!(stock_badge_color(StockBadge::OutOfStock, colors), colors.out_of_stock);

        let disabled = CartButton { label: "Out of Stock", enabled: false };
        assert_eq!(cart_button_fill(&disabled, colors), colors.button_disabled);
    }
}
