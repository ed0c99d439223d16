//! Product catalog browser
//!
//! An egui application that shows a product catalog as a responsive card
//! grid (one column on narrow windows, two on wide ones) and a details view
//! per product. The list is virtualized: only cards near the viewport are
//! materialized, so catalogs of any size scroll at the same cost.
//!
//! Usage: `catalog-gui [CATALOG]` where CATALOG is a `.json` / `.json.br`
//! file or `virtual:N` for N synthetic products. Without an argument the
//! bundled catalog is shown.
//!
//! Modules:
//! - `app/` - Coordinators, catalog source resolution and centralized state
//! - `state/` - Focused state components (catalog, list windowing, theme)
//! - `presentation/` - Color mapping for badges and buttons
//! - `ui/` - Panels (header, product list, details, status bar)
//! - `rendering/` - Card painting and text measurement

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use eframe::egui;
use tracing_subscriber::EnvFilter;

mod app;
mod presentation;
mod rendering;
mod state;
mod ui;

use app::{AppState, ApplicationCoordinator, SettingsCoordinator, ThemeCoordinator};
use ui::panel_manager::{PanelInteraction, PanelManager};

fn main() -> eframe::Result {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let source_arg = std::env::args().nth(1);
    tracing::info!(source = ?source_arg, "starting catalog browser");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 800.0])
            .with_min_inner_size([200.0, 300.0])
            .with_title("Product Catalog"),
        ..Default::default()
    };

    eframe::run_native(
        "Product Catalog",
        options,
        Box::new(move |cc| Ok(Box::new(CatalogApp::new(cc, source_arg.as_deref())))),
    )
}

/// The catalog browser application.
///
/// Workflow lives in `ApplicationCoordinator`, theme handling in
/// `ThemeCoordinator`, and panel layout in `PanelManager`.
struct CatalogApp {
    state: AppState,
}

impl CatalogApp {
    /// Restores theme and configuration from storage and loads the catalog.
    fn new(cc: &eframe::CreationContext, source_arg: Option<&str>) -> Self {
        let theme_name = ThemeCoordinator::load_theme_from_storage(cc.storage);
        let config = SettingsCoordinator::load_catalog_config(cc.storage);
        tracing::debug!(?config, theme = %theme_name, "settings restored");

        let mut state = AppState::with_theme_and_config(theme_name, config);
        ApplicationCoordinator::open_source_arg(&mut state, source_arg);

        Self { state }
    }

    fn handle_panel_interaction(&mut self, interaction: PanelInteraction, ctx: &egui::Context) {
        match interaction {
            PanelInteraction::CardSelected(event) => {
                ApplicationCoordinator::handle_card_event(&mut self.state, event);
            }
            PanelInteraction::BackRequested => {
                ApplicationCoordinator::handle_back(&mut self.state);
            }
            PanelInteraction::ScrollToTopRequested => {
                ApplicationCoordinator::handle_scroll_to_top(&mut self.state);
            }
            PanelInteraction::AddToCartRequested(product_id) => {
                let now = ctx.input(|i| i.time);
                ApplicationCoordinator::handle_add_to_cart(&mut self.state, product_id, now);
            }
        }
        ctx.request_repaint();
    }
}

impl eframe::App for CatalogApp {
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        ThemeCoordinator::save_theme_to_storage(storage, self.state.theme.current_theme_name());
        SettingsCoordinator::save_catalog_config(storage, &self.state.config);
    }

    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        ThemeCoordinator::apply_current_theme(ctx, &self.state);

        // Escape / browser-style back
        let back_pressed = ctx.input(|i| {
            i.key_pressed(egui::Key::Escape) || i.pointer.button_pressed(egui::PointerButton::Extra1)
        });
        if back_pressed {
            ApplicationCoordinator::handle_back(&mut self.state);
        }

        let now = ctx.input(|i| i.time);
        self.state.expire_notice(now);
        if let Some(notice) = &self.state.notice {
            ctx.request_repaint_after(std::time::Duration::from_secs_f64((notice.expires_at - now).max(0.0)));
        }

        if let Some(interaction) = PanelManager::render_all_panels(ctx, &mut self.state) {
            self.handle_panel_interaction(interaction, ctx);
        }
    }
}
