//! Windowed (virtualized) list rendering.
//!
//! Only items whose analytic row range intersects the visible viewport plus
//! an overscan buffer are materialized. Each materialized item is bound to a
//! slot in an arena of views; when the window moves, slots of items that left
//! are released to a free list and rebound to items that entered.
//!
//! The host frame loop drives everything: it calls [`WindowedList::update`]
//! with the current viewport once per frame and then renders the
//! materialized items. There are no suspension points here.

use std::collections::BTreeMap;
use std::ops::Range;

use serde::{Deserialize, Serialize};

use crate::layout::{ItemRect, LayoutGeometry};

/// Windowing policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Window length measured in viewport heights (visible + overscan on both sides)
    pub window_size: usize,
    /// Upper bound on items mounted per pass after the first
    pub max_to_render_per_batch: usize,
    /// Items mounted by the first pass after (re)mount
    pub initial_num_to_render: usize,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            window_size: 5,
            max_to_render_per_batch: 10,
            initial_num_to_render: 6,
        }
    }
}

impl WindowConfig {
    /// Overscan distance per side for a viewport height.
    pub fn overscan_for(&self, viewport_height: f32) -> f32 {
        let extra = self.window_size.max(1) - 1;
        viewport_height.max(0.0) * extra as f32 / 2.0
    }
}

/// Scroll position and visible height, in content coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Viewport {
    pub scroll_offset: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(scroll_offset: f32, height: f32) -> Self {
        Self { scroll_offset, height }
    }

    fn sanitized(self) -> Self {
        let finite_or_zero = |v: f32| if v.is_finite() { v.max(0.0) } else { 0.0 };
        Self {
            scroll_offset: finite_or_zero(self.scroll_offset),
            height: finite_or_zero(self.height),
        }
    }
}

/// What a view slot currently shows.
#[derive(Debug, Clone, PartialEq)]
pub struct SlotBinding<K> {
    pub index: usize,
    pub key: K,
}

/// One recyclable view in the arena.
#[derive(Debug, Clone)]
pub struct ViewSlot<K> {
    binding: Option<SlotBinding<K>>,
    bind_count: u64,
}

impl<K> ViewSlot<K> {
    pub fn binding(&self) -> Option<&SlotBinding<K>> {
        self.binding.as_ref()
    }

    /// How many times this slot has been bound to an item
    pub fn bind_count(&self) -> u64 {
        self.bind_count
    }
}

/// Outcome of one render pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PassStats {
    /// Items mounted during this pass
    pub mounted: usize,
    /// Items unmounted (slot released) during this pass
    pub recycled: usize,
    /// Items inside the window still waiting for a later pass
    pub pending: usize,
    /// Items materialized after this pass
    pub materialized: usize,
}

impl PassStats {
    pub fn is_settled(&self) -> bool {
        self.pending == 0
    }
}

/// A materialized item as seen by the renderer.
#[derive(Debug, Clone, Copy)]
pub struct MaterializedItem<'a, K> {
    pub index: usize,
    pub slot: usize,
    pub key: &'a K,
    pub rect: ItemRect,
}

/// A materialized item together with its rendered view.
#[derive(Debug, Clone)]
pub struct RenderedItem<V> {
    pub index: usize,
    pub slot: usize,
    pub rect: ItemRect,
    pub view: V,
}

/// Virtualized list over an ordered, keyed item sequence.
#[derive(Debug, Clone)]
pub struct WindowedList<K> {
    config: WindowConfig,
    geometry: LayoutGeometry,
    keys: Vec<K>,
    slots: Vec<ViewSlot<K>>,
    free_slots: Vec<usize>,
    /// item index -> slot
    mounted: BTreeMap<usize, usize>,
    generation: u64,
    has_rendered: bool,
    pending: usize,
}

impl<K: Clone + PartialEq> WindowedList<K> {
    pub fn new(config: WindowConfig, geometry: LayoutGeometry) -> Self {
        Self {
            config,
            geometry,
            keys: Vec::new(),
            slots: Vec::new(),
            free_slots: Vec::new(),
            mounted: BTreeMap::new(),
            generation: 0,
            has_rendered: false,
            pending: 0,
        }
    }

    // ===== Inputs =====

    /// Replaces the item sequence.
    ///
    /// Slots whose index now carries a different key are released. Returns
    /// true if the key sequence changed.
    pub fn set_items<T>(&mut self, items: &[T], key_fn: impl Fn(&T) -> K) -> bool {
        let keys: Vec<K> = items.iter().map(key_fn).collect();
        if keys == self.keys {
            return false;
        }

        let stale: Vec<usize> = self
            .mounted
            .iter()
            .filter(|&(&index, &slot)| {
                let bound_key = self.slots[slot].binding.as_ref().map(|b| &b.key);
                keys.get(index) != bound_key
            })
            .map(|(&index, _)| index)
            .collect();
        for index in stale {
            self.release(index);
        }

        self.keys = keys;
        true
    }

    /// Applies new geometry. A change in column count or item height
    /// remounts the list. Returns true on remount.
    pub fn set_geometry(&mut self, geometry: LayoutGeometry) -> bool {
        let remount = geometry.columns != self.geometry.columns
            || geometry.item_height != self.geometry.item_height;
        self.geometry = geometry;
        if remount {
            self.remount();
        }
        remount
    }

    /// Drops every view and starts over with a new identity.
    pub fn remount(&mut self) {
        self.slots.clear();
        self.free_slots.clear();
        self.mounted.clear();
        self.generation += 1;
        self.has_rendered = false;
        self.pending = 0;
        tracing::debug!(
            generation = self.generation,
            columns = self.geometry.columns,
            "windowed list remounted"
        );
    }

    // ===== Render pass =====

    /// Runs one windowing pass for the viewport.
    ///
    /// Items outside the window are released immediately. Items inside it are
    /// mounted nearest-to-visible first, at most `initial_num_to_render` on
    /// the first pass and `max_to_render_per_batch` afterwards.
    pub fn update(&mut self, viewport: Viewport) -> PassStats {
        let viewport = viewport.sanitized();
        let target = self.target_range(viewport);
        let mut stats = PassStats::default();

        let leaving: Vec<usize> = self
            .mounted
            .keys()
            .copied()
            .filter(|index| !target.contains(index))
            .collect();
        for index in leaving {
            self.release(index);
            stats.recycled += 1;
        }

        let budget = if self.has_rendered {
            self.config.max_to_render_per_batch
        } else {
            self.config.initial_num_to_render
        };
        let budget = budget.max(1);

        let visible = self.visible_range(viewport);
        let visible = if visible.start < visible.end {
            visible.start.max(target.start)..visible.end.min(target.end)
        } else {
            target.start..target.start
        };

        let below = visible.end..target.end;
        let above = (target.start..visible.start).rev();
        for index in visible.chain(below).chain(above) {
            if self.mounted.contains_key(&index) {
                continue;
            }
            if stats.mounted == budget {
                stats.pending += 1;
                continue;
            }
            self.bind(index);
            stats.mounted += 1;
        }

        self.has_rendered = true;
        self.pending = stats.pending;
        stats.materialized = self.mounted.len();

        if stats.mounted > 0 || stats.recycled > 0 {
            tracing::trace!(
                mounted = stats.mounted,
                recycled = stats.recycled,
                pending = stats.pending,
                materialized = stats.materialized,
                "window pass"
            );
        }
        stats
    }

    /// Renders every materialized item with `render_item(item, item_width)`,
    /// in index order.
    pub fn render<T, V>(
        &self,
        items: &[T],
        mut render_item: impl FnMut(&T, f32) -> V,
    ) -> Vec<RenderedItem<V>> {
        let width = self.geometry.item_width;
        self.mounted
            .iter()
            .filter_map(|(&index, &slot)| {
                let item = items.get(index)?;
                Some(RenderedItem {
                    index,
                    slot,
                    rect: self.geometry.item_rect(index),
                    view: render_item(item, width),
                })
            })
            .collect()
    }

    /// Materialized items in index order.
    pub fn materialized(&self) -> impl Iterator<Item = MaterializedItem<'_, K>> + '_ {
        self.mounted.iter().filter_map(move |(&index, &slot)| {
            let binding = self.slots[slot].binding.as_ref()?;
            Some(MaterializedItem {
                index,
                slot,
                key: &binding.key,
                rect: self.geometry.item_rect(index),
            })
        })
    }

    // ===== Window math =====

    /// Item indices whose rows intersect
    /// `[scroll - overscan, scroll + height + overscan]`.
    pub fn target_range(&self, viewport: Viewport) -> Range<usize> {
        let viewport = viewport.sanitized();
        let overscan = self.config.overscan_for(viewport.height);
        self.items_between(
            viewport.scroll_offset - overscan,
            viewport.scroll_offset + viewport.height + overscan,
            viewport.height,
        )
    }

    /// Item indices whose rows intersect the viewport itself.
    pub fn visible_range(&self, viewport: Viewport) -> Range<usize> {
        let viewport = viewport.sanitized();
        self.items_between(
            viewport.scroll_offset,
            viewport.scroll_offset + viewport.height,
            viewport.height,
        )
    }

    fn items_between(&self, low: f32, high: f32, viewport_height: f32) -> Range<usize> {
        let count = self.keys.len();
        if count == 0 || viewport_height <= 0.0 || high <= 0.0 {
            return 0..0;
        }

        let row_height = self.geometry.item_height;
        let rows = self.geometry.row_count(count);
        let first_row = if low <= 0.0 { 0 } else { (low / row_height).floor() as usize };
        let end_row = ((high / row_height).ceil() as usize).min(rows);
        if first_row >= end_row {
            return 0..0;
        }

        let columns = self.geometry.columns;
        (first_row * columns)..(end_row * columns).min(count)
    }

    /// Items a viewport of this height can show at once (partial rows included).
    pub fn window_capacity(&self, viewport_height: f32) -> usize {
        let rows = (viewport_height.max(0.0) / self.geometry.item_height).ceil() as usize + 1;
        rows * self.geometry.columns
    }

    /// Items the overscan buffer on one side can hold.
    pub fn overscan_capacity(&self, viewport_height: f32) -> usize {
        let overscan = self.config.overscan_for(viewport_height);
        (overscan / self.geometry.item_height).ceil() as usize * self.geometry.columns
    }

    /// Upper bound on simultaneously materialized items for a viewport height.
    pub fn capacity(&self, viewport_height: f32) -> usize {
        self.window_capacity(viewport_height) + 2 * self.overscan_capacity(viewport_height)
    }

    /// Analytic scroll offset of an item.
    pub fn offset_of(&self, index: usize) -> f32 {
        self.geometry.offset_of(index)
    }

    /// First item of the row at a scroll offset.
    pub fn index_at_offset(&self, offset: f32) -> Option<usize> {
        if self.keys.is_empty() {
            return None;
        }
        let offset = if offset.is_finite() { offset.max(0.0) } else { 0.0 };
        let row = (offset / self.geometry.item_height).floor() as usize;
        let index = row.saturating_mul(self.geometry.columns);
        Some(index.min(self.keys.len() - 1) / self.geometry.columns * self.geometry.columns)
    }

    pub fn content_height(&self) -> f32 {
        self.geometry.content_height(self.keys.len())
    }

    // ===== Queries =====

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn geometry(&self) -> &LayoutGeometry {
        &self.geometry
    }

    pub fn config(&self) -> &WindowConfig {
        &self.config
    }

    /// Identity of the current mount; changes on every remount.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_materialized(&self, index: usize) -> bool {
        self.mounted.contains_key(&index)
    }

    pub fn materialized_count(&self) -> usize {
        self.mounted.len()
    }

    /// Items inside the window left unmounted by the last pass
    pub fn pending(&self) -> usize {
        self.pending
    }

    pub fn is_settled(&self) -> bool {
        self.pending == 0
    }

    /// Size of the view arena
    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    pub fn slots(&self) -> &[ViewSlot<K>] {
        &self.slots
    }

    // ===== Slot arena =====

    fn bind(&mut self, index: usize) {
        let key = self.keys[index].clone();
        let slot = match self.free_slots.pop() {
            Some(slot) => slot,
            None => {
                self.slots.push(ViewSlot {
                    binding: None,
                    bind_count: 0,
                });
                self.slots.len() - 1
            }
        };

        let view = &mut self.slots[slot];
        view.binding = Some(SlotBinding { index, key });
        view.bind_count += 1;
        self.mounted.insert(index, slot);
    }

    fn release(&mut self, index: usize) {
        if let Some(slot) = self.mounted.remove(&index) {
            self.slots[slot].binding = None;
            self.free_slots.push(slot);
        }
    }
}
