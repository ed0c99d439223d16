//! Responsive grid geometry for the product list.
//!
//! Geometry is a pure function of the viewport width and a `LayoutConfig`.
//! It is cheap and is recomputed on every layout pass; nothing here is stored
//! between frames.
//!
//! Item height is uniform across all items. The windowed list relies on that
//! to compute offsets analytically (`row * item_height`) instead of measuring
//! rendered cards.

use serde::{Deserialize, Serialize};

/// Tunable layout constants.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Viewport widths strictly above this use two columns
    pub column_threshold: f32,
    /// Content padding on each side of the list
    pub padding: f32,
    /// Margin between cards (and between cards and the padded edge in grid mode)
    pub card_margin: f32,
    /// Row stride; every card occupies exactly this much vertical space
    pub item_height: f32,
    /// Smallest width a card is ever given
    pub min_item_width: f32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            column_threshold: 600.0,
            padding: 16.0,
            card_margin: 8.0,
            item_height: 360.0,
            min_item_width: 120.0,
        }
    }
}

impl LayoutConfig {
    /// Smallest viewport width the calculator lays out for.
    ///
    /// Narrower (or unavailable) widths are clamped up to this.
    pub fn min_viewport_width(&self) -> f32 {
        2.0 * self.padding.max(0.0) + self.min_item_width.max(1.0)
    }

    /// Computes the geometry for a viewport width.
    pub fn compute(&self, viewport_width: f32) -> LayoutGeometry {
        compute_layout(viewport_width, self)
    }
}

/// Derived layout for one viewport width.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutGeometry {
    /// 1 or 2
    pub columns: usize,
    pub item_width: f32,
    pub item_height: f32,
    /// Width actually laid out (after clamping)
    pub viewport_width: f32,
    pub padding: f32,
    pub card_margin: f32,
}

/// Placement of one item relative to the list content origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ItemRect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl ItemRect {
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }
}

/// Computes column count and card size for a viewport width.
///
/// - `columns = 2` if `width > threshold`, else 1
/// - one column: `item_width = width - 2 * padding`
/// - two columns: `item_width = (width - 2 * padding - margin * 3) / 2`
///
/// Zero, negative and NaN widths are clamped to `min_viewport_width()`. If a
/// configuration would give two-column cards narrower than `min_item_width`,
/// one column is used instead.
pub fn compute_layout(viewport_width: f32, config: &LayoutConfig) -> LayoutGeometry {
    let padding = config.padding.max(0.0);
    let card_margin = config.card_margin.max(0.0);
    let min_item_width = config.min_item_width.max(1.0);
    let item_height = if config.item_height.is_finite() && config.item_height > 0.0 {
        config.item_height
    } else {
        LayoutConfig::default().item_height
    };

    let width = if viewport_width.is_finite() {
        viewport_width.max(config.min_viewport_width())
    } else {
        config.min_viewport_width()
    };

    let mut columns = if width > config.column_threshold { 2 } else { 1 };

    let mut item_width = grid_item_width(width, columns, padding, card_margin);
    if columns > 1 && item_width < min_item_width {
        columns = 1;
        item_width = grid_item_width(width, columns, padding, card_margin);
    }

    LayoutGeometry {
        columns,
        item_width,
        item_height,
        viewport_width: width,
        padding,
        card_margin,
    }
}

fn grid_item_width(width: f32, columns: usize, padding: f32, card_margin: f32) -> f32 {
    if columns > 1 {
        (width - padding * 2.0 - card_margin * (columns as f32 + 1.0)) / columns as f32
    } else {
        width - padding * 2.0
    }
}

impl LayoutGeometry {
    /// Total horizontal space not covered by cards
    pub fn horizontal_margins(&self) -> f32 {
        if self.columns > 1 {
            self.padding * 2.0 + self.card_margin * (self.columns as f32 + 1.0)
        } else {
            self.padding * 2.0
        }
    }

    /// Number of rows needed for `item_count` items.
    pub fn row_count(&self, item_count: usize) -> usize {
        item_count.div_ceil(self.columns)
    }

    pub fn row_of(&self, index: usize) -> usize {
        index / self.columns
    }

    pub fn column_of(&self, index: usize) -> usize {
        index % self.columns
    }

    /// Analytic scroll offset of an item: `row * item_height`.
    pub fn offset_of(&self, index: usize) -> f32 {
        self.row_of(index) as f32 * self.item_height
    }

    /// Total scrollable content height for `item_count` items.
    pub fn content_height(&self, item_count: usize) -> f32 {
        self.row_count(item_count) as f32 * self.item_height
    }

    /// Left edge of a column relative to the viewport.
    pub fn column_x(&self, column: usize) -> f32 {
        if self.columns > 1 {
            self.padding + self.card_margin + column as f32 * (self.item_width + self.card_margin)
        } else {
            self.padding
        }
    }

    /// Full slot of an item (card plus the margin below it).
    pub fn item_rect(&self, index: usize) -> ItemRect {
        ItemRect {
            x: self.column_x(self.column_of(index)),
            y: self.offset_of(index),
            width: self.item_width,
            height: self.item_height,
        }
    }

    /// Height of the painted card inside its slot
    pub fn card_height(&self) -> f32 {
        (self.item_height - self.card_margin).max(1.0)
    }
}
