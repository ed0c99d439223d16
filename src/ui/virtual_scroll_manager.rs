//! Glue between the egui scroll area and the windowed list.
//!
//! The scroll area reports its viewport in content coordinates; the windowed
//! list works in the same coordinates, so conversion is mostly about the
//! content origin and sanitizing what egui hands us.

use egui::{Pos2, Rect, Vec2};
use rcatalog::{ItemRect, LayoutGeometry, Viewport};

/// Converts between scroll-area rectangles and windowed-list coordinates.
pub struct VirtualScrollManager;

impl VirtualScrollManager {
    /// Viewport of the windowed list from the rect passed to `show_viewport`.
    pub fn viewport_from_rect(viewport: Rect) -> Viewport {
        Viewport::new(viewport.min.y, viewport.height())
    }

    /// Screen rect of a card given the content origin.
    ///
    /// The card is the item slot minus the bottom margin.
    pub fn card_rect(origin: Pos2, item: &ItemRect, geometry: &LayoutGeometry) -> Rect {
        Rect::from_min_size(
            origin + Vec2::new(item.x, item.y),
            Vec2::new(item.width, geometry.card_height()),
        )
    }

    /// Scroll offset that keeps `offset` inside the scrollable range.
    pub fn clamp_offset(offset: f32, content_height: f32, viewport_height: f32) -> f32 {
        let max = (content_height - viewport_height).max(0.0);
        if offset.is_finite() {
            offset.clamp(0.0, max)
        } else {
            0.0
        }
    }
}
