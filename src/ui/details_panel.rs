//! Details panel UI rendering
//!
//! Shows the full record of the product on top of the navigation stack.

use eframe::egui;
use egui::{RichText, ScrollArea};
use rcatalog::{render_detail, ProductDetailView, ProductId, ThemeColors};

use crate::app::AppState;
use crate::presentation::color_mapping::{cart_button_fill, stock_badge_color};
use crate::rendering::card_renderer::paint_image_area;

const IMAGE_HEIGHT: f32 = 300.0;

pub enum DetailsPanelInteraction {
    AddToCartRequested(ProductId),
}

pub fn render_details_panel(
    ui: &mut egui::Ui,
    state: &AppState,
    theme_colors: &ThemeColors,
) -> Option<DetailsPanelInteraction> {
    let product = state.navigation.current_product()?;
    let view = render_detail(product);
    let mut interaction = None;

    ScrollArea::vertical()
        .id_salt(("details_scroll_area", view.product_id))
        .auto_shrink([false, false])
        .show(ui, |ui| {
            let (image_rect, _) = ui.allocate_exact_size(
                egui::vec2(ui.available_width(), IMAGE_HEIGHT),
                egui::Sense::hover(),
            );
            paint_image_area(ui.painter(), image_rect, &view.image, theme_colors);

            ui.add_space(12.0);
            render_summary(ui, &view, theme_colors);

            ui.add_space(16.0);
            ui.label(RichText::new("Description").strong().size(16.0));
            ui.label(&view.description);

            if !view.spec_rows.is_empty() {
                ui.add_space(16.0);
                ui.label(RichText::new("Specifications").strong().size(16.0));
                egui::Grid::new(("spec_table", view.product_id))
                    .num_columns(2)
                    .striped(true)
                    .spacing([24.0, 6.0])
                    .show(ui, |ui| {
                        for row in &view.spec_rows {
                            ui.label(RichText::new(&row.label).color(theme_colors.text_dim));
                            ui.label(&row.value);
                            ui.end_row();
                        }
                    });
            }

            ui.add_space(20.0);
            let button = egui::Button::new(
                RichText::new(view.cart_button.label)
                    .color(theme_colors.button_text)
                    .size(16.0),
            )
            .fill(cart_button_fill(&view.cart_button, theme_colors))
            .min_size(egui::vec2(ui.available_width(), 44.0));

            if ui.add_enabled(view.cart_button.enabled, button).clicked() {
                interaction = Some(DetailsPanelInteraction::AddToCartRequested(view.product_id));
            }

            if let Some(notice) = &state.notice {
                ui.add_space(8.0);
                ui.colored_label(theme_colors.in_stock, &notice.text);
            }
        });

    interaction
}

fn render_summary(ui: &mut egui::Ui, view: &ProductDetailView, colors: &ThemeColors) {
    ui.horizontal(|ui| {
        ui.label(RichText::new(&view.category_label).size(12.0).color(colors.category));
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            egui::Frame::NONE
                .fill(stock_badge_color(view.stock, colors))
                .inner_margin(egui::Margin::symmetric(8, 3))
                .corner_radius(10.0)
                .show(ui, |ui| {
                    ui.label(RichText::new(view.stock.label()).size(12.0).color(colors.badge_text));
                });
        });
    });

    ui.label(RichText::new(&view.name).size(22.0).strong().color(colors.text_strong));
    ui.label(RichText::new(&view.price_text).size(24.0).strong().color(colors.price));
    ui.horizontal(|ui| {
        ui.label(RichText::new(format!("★ {}", view.rating_text)).size(16.0).color(colors.star));
        ui.label(RichText::new(format!("({})", view.rating_caption)).color(colors.text_dim));
    });
}
