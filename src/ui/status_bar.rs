//! Status bar UI rendering
//!
//! Catalog source and size, current layout, and windowing counters.

use eframe::egui;
use egui::RichText;
use crate::app::AppState;

pub fn render_status_bar(ui: &mut egui::Ui, state: &AppState) {
    ui.horizontal(|ui| {
        let Some(catalog) = state.catalog.catalog() else {
            ui.label(RichText::new("No catalog loaded").strong());
            return;
        };

        let source = state.catalog.source().unwrap_or("unknown source");
        ui.label(RichText::new(source).strong());
        ui.label(RichText::new("|").strong());
        ui.label(format!(
            "{} products ({} in stock)",
            catalog.len(),
            catalog.in_stock_count()
        ));

        let list = state.list.windowed();
        let geometry = list.geometry();
        ui.label(RichText::new("|").strong());
        ui.label(format!(
            "{} column(s), {:.0}px cards",
            geometry.columns, geometry.item_width
        ));

        let viewport = state.list.last_viewport();
        let stats = state.list.last_stats();
        ui.label(RichText::new("|").strong());
        ui.label(format!(
            "Materialized: {} / {} | Slots: {}",
            stats.materialized,
            list.capacity(viewport.height),
            list.slot_count()
        ));
        if stats.pending > 0 {
            ui.label(format!("Pending: {}", stats.pending));
        }
        if let Some(first) = state.list.first_visible_index() {
            ui.label(format!("| Top item: #{}", first + 1));
        }
    });
}
