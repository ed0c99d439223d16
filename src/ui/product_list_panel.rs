//! Product list panel
//!
//! A grid of product cards inside a vertical scroll area. Only items the
//! windowed list has materialized are rendered; the rest of the content is
//! empty space sized analytically, so scrolling cost does not depend on the
//! catalog size.

use egui::ScrollArea;
use rcatalog::{render_card, CardEvent, ThemeColors};

use crate::app::AppState;
use crate::rendering::card_renderer;
use crate::ui::virtual_scroll_manager::VirtualScrollManager;

/// Result of list panel interactions that need to be handled by the application.
pub enum ListPanelInteraction {
    CardSelected(CardEvent),
}

pub fn render_product_list(
    ui: &mut egui::Ui,
    state: &mut AppState,
    theme_colors: &ThemeColors,
) -> Option<ListPanelInteraction> {
    let Some(catalog) = state.catalog.catalog().cloned() else {
        ui.centered_and_justified(|ui| {
            ui.label("No products to display");
        });
        return None;
    };

    // Geometry follows the current width every frame
    let geometry = state.config.layout.compute(ui.available_width());
    state.list.apply_geometry(geometry);

    let generation = state.list.windowed().generation();
    let content_height = state.list.windowed().content_height();

    let mut scroll_area = ScrollArea::vertical()
        .id_salt(("product_list", generation))
        .auto_shrink([false, false]);
    if let Some(offset) = state.list.take_scroll_target() {
        let offset = VirtualScrollManager::clamp_offset(offset, content_height, ui.available_height());
        scroll_area = scroll_area.vertical_scroll_offset(offset);
    }

    let mut interaction = None;

    scroll_area.show_viewport(ui, |ui, viewport| {
        ui.set_height(content_height);
        let origin = ui.min_rect().min;

        let stats = state.list.run_pass(VirtualScrollManager::viewport_from_rect(viewport));
        let rendered = state
            .list
            .windowed()
            .render(catalog.products(), render_card);

        for item in &rendered {
            let rect = VirtualScrollManager::card_rect(origin, &item.rect, &geometry);
            if !ui.is_rect_visible(rect) {
                continue;
            }
            let response = card_renderer::paint_card(ui, rect, &item.view, theme_colors);
            if response.clicked() {
                interaction = Some(ListPanelInteraction::CardSelected(item.view.select()));
            }
        }

        // Keep mounting remaining window items on the following frames
        if !stats.is_settled() {
            ui.ctx().request_repaint();
        }
    });

    interaction
}
