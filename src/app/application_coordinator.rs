//! Application-level coordination and workflow management.
//!
//! Handles catalog loading, card selection, navigation and the cart
//! placeholder, keeping panels free of workflow logic.

use rcatalog::{dispatch_card_event, render_detail, CardEvent, CatalogProvider, ProductId};

use crate::app::{AppState, CatalogSource, Notice};

/// How long the cart acknowledgement stays visible, in seconds
const NOTICE_DURATION: f64 = 2.0;

/// Coordinates application-level operations and workflows.
pub struct ApplicationCoordinator;

impl ApplicationCoordinator {
    /// Resolves the command-line argument and loads the catalog it names.
    ///
    /// Errors end up in `state.error_message`; the list stays empty.
    pub fn open_source_arg(state: &mut AppState, arg: Option<&str>) {
        match CatalogSource::from_arg(arg) {
            Ok(source) => Self::open_source(state, &source),
            Err(e) => {
                tracing::error!(error = %e, "invalid catalog argument");
                state.reset_catalog_state();
                state.error_message = Some(format!("Error: {:#}", e));
            }
        }
    }

    pub fn open_source(state: &mut AppState, source: &CatalogSource) {
        let provider = source.provider();
        Self::load_catalog(state, provider.as_ref());
    }

    /// Loads a catalog synchronously and resets the list around it.
    pub fn load_catalog(state: &mut AppState, provider: &dyn CatalogProvider) {
        state.reset_catalog_state();

        let description = provider.describe();
        match provider.load() {
            Ok(catalog) => {
                tracing::info!(source = %description, products = catalog.len(), "catalog ready");
                state.list.set_items(&catalog);
                state.catalog.load(catalog, description);
            }
            Err(e) => {
                tracing::error!(source = %description, error = %e, "failed to load catalog");
                state.error_message = Some(format!("Error loading catalog: {:#}", e));
            }
        }
    }

    /// Handles a card tap by navigating to that product's details.
    pub fn handle_card_event(state: &mut AppState, event: CardEvent) {
        let Some(catalog) = state.catalog.catalog() else {
            return;
        };
        if dispatch_card_event(event, catalog, &mut state.navigation) {
            state.notice = None;
        }
    }

    /// Pops the details view. Returns false when already at the list.
    pub fn handle_back(state: &mut AppState) -> bool {
        let went_back = state.navigation.go_back();
        if went_back {
            state.notice = None;
        }
        went_back
    }

    /// Runs the placeholder cart action for the product shown in details.
    pub fn handle_add_to_cart(state: &mut AppState, product_id: ProductId, now: f64) {
        let Some(product) = state.navigation.current_product() else {
            return;
        };
        if product.id != product_id {
            return;
        }

        if let Some(ack) = render_detail(product).add_to_cart() {
            state.notice = Some(Notice::new(ack.message, now, NOTICE_DURATION));
        }
    }

    pub fn handle_scroll_to_top(state: &mut AppState) {
        state.list.scroll_to_index(0);
    }
}
