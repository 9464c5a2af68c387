// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A small controller that owns a [`UniformStrip`] and scroll state.

use crate::{UniformStrip, VisibleStrip, compute_visible_strip};

/// Alignment mode when scrolling a specific index into view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollAlign {
    /// Align the start of the row with the start of the viewport.
    Start,
    /// Center the row within the viewport.
    Center,
    /// Align the end of the row with the end of the viewport.
    End,
    /// Move just enough to make the row fully visible, preferring the
    /// smallest change from the current scroll offset.
    Nearest,
}

/// Scroll state over a [`UniformStrip`].
///
/// This type:
/// - stores scroll offset, viewport extent, and asymmetric overscan,
/// - owns the strip,
/// - caches the last computed [`VisibleStrip`],
/// - exposes helpers for visibility queries, index-aligned scrolling and
///   finding the row under the viewport's center line.
///
/// The scroll offset is never negative. It is *not* clamped against the end of
/// the content automatically, since the strip may be resized after the offset
/// is set; call [`StripScroller::clamp_scroll_to_content`] once the strip is current.
#[derive(Debug, Clone)]
pub struct StripScroller {
    strip: UniformStrip,
    scroll_offset: f64,
    viewport_extent: f64,
    overscan_before: f64,
    overscan_after: f64,

    dirty: bool,
    last_visible: VisibleStrip,
}

impl StripScroller {
    /// Creates a scroller over `strip` with the given `viewport_extent` and symmetric `overscan`.
    #[must_use]
    pub fn new(strip: UniformStrip, viewport_extent: f64, overscan: f64) -> Self {
        Self {
            strip,
            scroll_offset: 0.0,
            viewport_extent: viewport_extent.max(0.0),
            overscan_before: overscan.max(0.0),
            overscan_after: overscan.max(0.0),
            dirty: true,
            last_visible: VisibleStrip::EMPTY,
        }
    }

    /// Returns the underlying strip.
    #[must_use]
    pub const fn strip(&self) -> &UniformStrip {
        &self.strip
    }

    /// Returns the underlying strip mutably, marking the cached visibility dirty.
    pub fn strip_mut(&mut self) -> &mut UniformStrip {
        self.dirty = true;
        &mut self.strip
    }

    /// Returns the current scroll offset.
    #[must_use]
    pub const fn scroll_offset(&self) -> f64 {
        self.scroll_offset
    }

    /// Sets the scroll offset. Negative and NaN offsets become `0.0`.
    pub fn set_scroll_offset(&mut self, offset: f64) {
        let offset = offset.max(0.0);
        if offset != self.scroll_offset {
            self.scroll_offset = offset;
            self.dirty = true;
        }
    }

    /// Adjusts the scroll offset by `delta`.
    pub fn scroll_by(&mut self, delta: f64) {
        self.set_scroll_offset(self.scroll_offset + delta);
    }

    /// Returns the current viewport extent.
    #[must_use]
    pub const fn viewport_extent(&self) -> f64 {
        self.viewport_extent
    }

    /// Sets the viewport extent.
    pub fn set_viewport_extent(&mut self, extent: f64) {
        let extent = extent.max(0.0);
        if extent != self.viewport_extent {
            self.viewport_extent = extent;
            self.dirty = true;
        }
    }

    /// Sets the overscan extents applied before and after the viewport.
    pub fn set_overscan(&mut self, overscan_before: f64, overscan_after: f64) {
        let before = overscan_before.max(0.0);
        let after = overscan_after.max(0.0);
        if before != self.overscan_before || after != self.overscan_after {
            self.overscan_before = before;
            self.overscan_after = after;
            self.dirty = true;
        }
    }

    /// Returns the overscan extent applied before the viewport.
    #[must_use]
    pub const fn overscan_before(&self) -> f64 {
        self.overscan_before
    }

    /// Returns the overscan extent applied after the viewport.
    #[must_use]
    pub const fn overscan_after(&self) -> f64 {
        self.overscan_after
    }

    /// Computes or returns the cached visible strip.
    #[must_use]
    pub fn visible_strip(&mut self) -> VisibleStrip {
        if self.dirty {
            self.last_visible = compute_visible_strip(
                &self.strip,
                self.scroll_offset,
                self.viewport_extent,
                self.overscan_before,
                self.overscan_after,
            );
            self.dirty = false;
        }
        self.last_visible
    }

    /// Convenience iterator over visible indices.
    pub fn visible_indices(&mut self) -> impl Iterator<Item = usize> + use<> {
        let visible = self.visible_strip();
        visible.start..visible.end
    }

    /// Returns the first visible index, if any.
    #[must_use]
    pub fn first_visible_index(&mut self) -> Option<usize> {
        let visible = self.visible_strip();
        (!visible.is_empty()).then_some(visible.start)
    }

    /// Returns the last visible index, if any.
    #[must_use]
    pub fn last_visible_index(&mut self) -> Option<usize> {
        let visible = self.visible_strip();
        (!visible.is_empty()).then(|| visible.end - 1)
    }

    fn row_bounds(&self, index: usize) -> (f64, f64) {
        let start = self.strip.offset_of(index);
        (start, start + self.strip.extent())
    }

    /// Returns `true` if the given index is fully visible within the viewport.
    #[must_use]
    pub fn is_index_fully_visible(&self, index: usize) -> bool {
        if index >= self.strip.len() {
            return false;
        }
        let (row_start, row_end) = self.row_bounds(index);
        let view_end = self.scroll_offset + self.viewport_extent;
        row_start >= self.scroll_offset && row_end <= view_end
    }

    /// Returns `true` if the given index overlaps the viewport at all.
    #[must_use]
    pub fn is_index_partially_visible(&self, index: usize) -> bool {
        if index >= self.strip.len() {
            return false;
        }
        let (row_start, row_end) = self.row_bounds(index);
        let view_end = self.scroll_offset + self.viewport_extent;
        row_end > self.scroll_offset && row_start < view_end
    }

    /// Largest scroll offset that keeps the viewport within the content.
    #[must_use]
    pub fn max_scroll_offset(&self) -> f64 {
        (self.strip.total_extent() - self.viewport_extent).max(0.0)
    }

    /// Clamps the current scroll offset so that the viewport stays within the content extent.
    pub fn clamp_scroll_to_content(&mut self) {
        let max_offset = self.max_scroll_offset();
        if self.scroll_offset > max_offset {
            self.set_scroll_offset(max_offset);
        }
    }

    /// Index of the row nearest the center line of the viewport.
    ///
    /// For a wheel picker this is the selected row. When the content is shorter
    /// than the viewport the center line may fall past the last row; the index
    /// is then clamped to that row. Returns `None` when the strip is empty or
    /// its rows have no extent.
    #[must_use]
    pub fn centered_index(&self) -> Option<usize> {
        if self.strip.is_empty() || self.strip.extent() <= 0.0 {
            return None;
        }
        let center = self.scroll_offset + self.viewport_extent / 2.0;
        Some(self.strip.index_at_offset(center))
    }

    /// Scrolls so that row `index` is brought into view using the given alignment.
    ///
    /// Out-of-range indices are clamped to the last row.
    pub fn scroll_to_index(&mut self, index: usize, align: ScrollAlign) {
        let len = self.strip.len();
        if len == 0 {
            self.set_scroll_offset(0.0);
            return;
        }
        let (row_start, row_end) = self.row_bounds(index.min(len - 1));
        let viewport = self.viewport_extent;

        let new_offset = match align {
            ScrollAlign::Start => row_start,
            ScrollAlign::End => (row_end - viewport).max(0.0),
            ScrollAlign::Center => ((row_start + row_end) / 2.0 - viewport / 2.0).max(0.0),
            ScrollAlign::Nearest => {
                let current = self.scroll_offset;
                if row_start >= current && row_end <= current + viewport {
                    current
                } else if row_start < current {
                    row_start
                } else {
                    (row_end - viewport).max(0.0)
                }
            }
        };

        self.set_scroll_offset(new_offset);
    }
}
