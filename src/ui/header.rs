//! Header panel UI rendering
//!
//! Title, back navigation, scroll-to-top and the theme selector.

use eframe::egui;
use crate::app::AppState;

/// Result of user interaction with the header panel
pub enum HeaderInteraction {
    BackRequested,
    ScrollToTopRequested,
}

pub fn render_header(ui: &mut egui::Ui, state: &mut AppState) -> Option<HeaderInteraction> {
    let mut interaction = None;

    ui.horizontal(|ui| {
        if state.navigation.can_go_back() {
            if ui.button("⬅ Back").clicked() {
                interaction = Some(HeaderInteraction::BackRequested);
            }
            let title = state
                .navigation
                .current_product()
                .map(|product| product.name.as_str())
                .unwrap_or("Product Details");
            ui.heading(title);
        } else {
            ui.heading("Products");
            if state.catalog.catalog().is_some() {
                ui.separator();
                if ui.button("⬆ Top").clicked() {
                    interaction = Some(HeaderInteraction::ScrollToTopRequested);
                }
                let columns = state.list.windowed().geometry().columns;
                ui.label(if columns > 1 { "Grid view" } else { "List view" });
            }
        }

        // Push theme selector to the right
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let old_theme = state.theme.current_theme_name().to_string();
            let mut current_theme = old_theme.clone();
            egui::ComboBox::from_id_salt("theme_selector")
                .selected_text(&current_theme)
                .show_ui(ui, |ui| {
                    for theme_name in state.theme.theme_manager().list_themes() {
                        ui.selectable_value(&mut current_theme, theme_name.to_string(), theme_name);
                    }
                });

            if old_theme != current_theme {
                tracing::debug!(theme = %current_theme, "theme changed");
                state.theme.set_theme(current_theme);
                ui.ctx().request_repaint();
            }

            ui.label("Theme:");
        });
    });

    if let Some(err) = &state.error_message {
        let color = ui.visuals().error_fg_color;
        ui.colored_label(color, err);
    }

    interaction
}
