//! Panel orchestration and layout management.
//!
//! Header on top, status bar at the bottom, and the central area showing
//! either the product list or the details of the selected product.

use crate::app::AppState;
use crate::presentation::color_mapping;
use crate::ui::{details_panel, header, product_list_panel, status_bar};
use rcatalog::{CardEvent, ProductId, Route};

/// Result of panel interactions that need to be handled by the application coordinator.
pub enum PanelInteraction {
    CardSelected(CardEvent),
    BackRequested,
    ScrollToTopRequested,
    AddToCartRequested(ProductId),
}

pub struct PanelManager;

impl PanelManager {
    /// Renders all panels in the application window.
    pub fn render_all_panels(ctx: &egui::Context, state: &mut AppState) -> Option<PanelInteraction> {
        let mut interaction: Option<PanelInteraction> = None;

        let theme_colors =
            color_mapping::theme_colors(state.theme.theme_manager(), state.theme.current_theme_name()).clone();

        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            if let Some(header_interaction) = header::render_header(ui, state) {
                interaction = Some(match header_interaction {
                    header::HeaderInteraction::BackRequested => PanelInteraction::BackRequested,
                    header::HeaderInteraction::ScrollToTopRequested => {
                        PanelInteraction::ScrollToTopRequested
                    }
                });
            }
        });

        egui::TopBottomPanel::bottom("status_panel").show(ctx, |ui| {
            status_bar::render_status_bar(ui, state);
        });

        let central_frame = egui::Frame::default().fill(theme_colors.background);

        let showing_details = matches!(state.navigation.current(), Route::ProductDetails { .. });

        egui::CentralPanel::default()
            .frame(central_frame)
            .show(ctx, |ui| {
                if showing_details {
                    egui::Frame::default().inner_margin(16.0).show(ui, |ui| {
                        if let Some(details_interaction) =
                            details_panel::render_details_panel(ui, state, &theme_colors)
                        {
                            interaction = Some(match details_interaction {
                                details_panel::DetailsPanelInteraction::AddToCartRequested(id) => {
                                    PanelInteraction::AddToCartRequested(id)
                                }
                            });
                        }
                    });
                } else if let Some(list_interaction) =
                    product_list_panel::render_product_list(ui, state, &theme_colors)
                {
                    interaction = Some(match list_interaction {
                        product_list_panel::ListPanelInteraction::CardSelected(event) => {
                            PanelInteraction::CardSelected(event)
                        }
                    });
                }
            });

        interaction
    }
}
