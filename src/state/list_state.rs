//! Product list windowing state.
//!
//! Wraps the [`WindowedList`] keyed by product id together with what the
//! host scroll area needs between frames: the last viewport and a pending
//! scroll request.

use rcatalog::{Catalog, LayoutGeometry, PassStats, ProductId, Viewport, WindowedList};

use crate::app::CatalogConfig;

#[derive(Debug, Clone)]
pub struct ListState {
    list: WindowedList<ProductId>,
    last_viewport: Viewport,
    last_stats: PassStats,
    /// Offset the scroll area should jump to on the next frame
    scroll_target: Option<f32>,
}

impl ListState {
    pub fn new(config: &CatalogConfig) -> Self {
        Self {
            list: WindowedList::new(config.window, config.layout.compute(0.0)),
            last_viewport: Viewport::default(),
            last_stats: PassStats::default(),
            scroll_target: None,
        }
    }

    pub fn set_items(&mut self, catalog: &Catalog) {
        if self.list.set_items(catalog.products(), |product| product.id) {
            self.scroll_target = Some(0.0);
        }
    }

    /// Applies the geometry for the current width.
    ///
    /// On remount the first visible item stays in view: its analytic offset
    /// under the new geometry becomes the scroll target. Returns true on remount.
    pub fn apply_geometry(&mut self, geometry: LayoutGeometry) -> bool {
        let anchor = self.list.index_at_offset(self.last_viewport.scroll_offset);
        let remounted = self.list.set_geometry(geometry);
        if remounted {
            tracing::debug!(columns = geometry.columns, anchor = ?anchor, "list geometry changed");
            if let Some(anchor) = anchor {
                self.scroll_target = Some(self.list.offset_of(anchor));
            }
        }
        remounted
    }

    /// Runs the windowing pass for this frame's viewport.
    pub fn run_pass(&mut self, viewport: Viewport) -> PassStats {
        self.last_viewport = viewport;
        self.last_stats = self.list.update(viewport);
        self.last_stats
    }

    pub fn scroll_to_index(&mut self, index: usize) {
        if index < self.list.len() {
            self.scroll_target = Some(self.list.offset_of(index));
        }
    }

    pub fn take_scroll_target(&mut self) -> Option<f32> {
        self.scroll_target.take()
    }

    /// Forgets all views, e.g. before a new catalog is loaded.
    pub fn reset(&mut self) {
        let empty: [ProductId; 0] = [];
        self.list.set_items(&empty, |id| *id);
        self.list.remount();
        self.last_viewport = Viewport::default();
        self.last_stats = PassStats::default();
        self.scroll_target = None;
    }

    pub fn windowed(&self) -> &WindowedList<ProductId> {
        &self.list
    }

    pub fn last_viewport(&self) -> Viewport {
        self.last_viewport
    }

    pub fn last_stats(&self) -> PassStats {
        self.last_stats
    }

    /// First item row currently at the top of the viewport
    pub fn first_visible_index(&self) -> Option<usize> {
        self.list.index_at_offset(self.last_viewport.scroll_offset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rcatalog::VirtualCatalogProvider;
    use rcatalog::CatalogProvider;

    fn state_with_catalog(count: usize) -> ListState {
        let config = CatalogConfig::default();
        let mut state = ListState::new(&config);
        let catalog = VirtualCatalogProvider::with_config(count, 1).load().unwrap();
        state.set_items(&catalog);
        state
    }

    #[test]
    fn test_remount_keeps_first_visible_item() {
        let config = CatalogConfig::default();
        let mut state = state_with_catalog(100);
        state.apply_geometry(config.layout.compute(400.0));
        let _ = state.take_scroll_target();

        // One column: item 10 starts at 3600
        state.run_pass(Viewport::new(3600.0, 700.0));
        assert_eq!(state.first_visible_index(), Some(10));

        assert!(state.apply_geometry(config.layout.compute(900.0)));
        // Two columns: item 10 sits in row 5
        assert_eq!(state.take_scroll_target(), Some(1800.0));
        assert_eq!(state.take_scroll_target(), None);
    }

    #[test]
    fn test_same_columns_do_not_remount() {
        let config = CatalogConfig::default();
        let mut state = state_with_catalog(10);
        state.apply_geometry(config.layout.compute(800.0));
        let generation = state.windowed().generation();

        assert!(!state.apply_geometry(config.layout.compute(1000.0)));
        assert_eq!(state.windowed().generation(), generation);
        assert_eq!(state.windowed().geometry().viewport_width, 1000.0);
    }

    #[test]
    fn test_reset_clears_views() {
        let mut state = state_with_catalog(50);
        state.run_pass(Viewport::new(0.0, 700.0));
        assert!(state.windowed().materialized_count() > 0);

        state.reset();
        assert_eq!(state.windowed().materialized_count(), 0);
        assert!(state.windowed().is_empty());
    }
}
