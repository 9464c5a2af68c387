// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Visibility queries over a [`UniformStrip`].

use crate::UniformStrip;

/// Result of a visibility query over a strip.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisibleStrip {
    /// First visible index (inclusive).
    pub start: usize,
    /// One past the last visible index (exclusive).
    pub end: usize,

    /// Total extent of rows before `start`.
    pub before_extent: f64,
    /// Total extent of rows from `end` to the end of the strip.
    pub after_extent: f64,
    /// Total extent of the entire strip.
    pub content_extent: f64,
}

impl VisibleStrip {
    /// A strip with nothing visible and no content.
    pub const EMPTY: Self = Self {
        start: 0,
        end: 0,
        before_extent: 0.0,
        after_extent: 0.0,
        content_extent: 0.0,
    };

    /// Returns `true` if there are no visible rows.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Number of visible rows.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.end - self.start
    }
}

/// Compute the visible slice of a strip, given scroll position, viewport size, and overscan.
///
/// - `scroll_offset`: top of the viewport in strip coordinates.
/// - `viewport_extent`: size of the viewport.
/// - `overscan_before` / `overscan_after`: extra margin realized on either side of the viewport.
///
/// Negative inputs are treated as zero. Rows that merely touch the window edge
/// are not included.
#[must_use]
pub fn compute_visible_strip(
    strip: &UniformStrip,
    scroll_offset: f64,
    viewport_extent: f64,
    overscan_before: f64,
    overscan_after: f64,
) -> VisibleStrip {
    let len = strip.len();
    let content_extent = strip.total_extent();
    if len == 0 || content_extent <= 0.0 {
        return VisibleStrip::EMPTY;
    }

    let scroll_offset = scroll_offset.max(0.0);
    let viewport_extent = viewport_extent.max(0.0);
    let overscan_before = overscan_before.max(0.0);
    let overscan_after = overscan_after.max(0.0);

    let min = (scroll_offset - overscan_before).max(0.0);
    let max = (scroll_offset + viewport_extent + overscan_after).min(content_extent);

    if max <= min {
        return VisibleStrip {
            start: 0,
            end: 0,
            before_extent: min.min(content_extent),
            after_extent: (content_extent - min).max(0.0),
            content_extent,
        };
    }

    let start = strip.index_at_offset(min);
    let mut end = start;
    while end < len && strip.offset_of(end) < max {
        end += 1;
    }

    let end_start = if end < len {
        strip.offset_of(end)
    } else {
        content_extent
    };

    VisibleStrip {
        start,
        end,
        before_extent: strip.offset_of(start),
        after_extent: (content_extent - end_start).max(0.0),
        content_extent,
    }
}

#[cfg(test)]
mod tests {
    use super::{VisibleStrip, compute_visible_strip};
    use crate::UniformStrip;

    #[test]
    fn empty_strip_yields_empty_result() {
        let strip = UniformStrip::new(0, 10.0);
        let visible = compute_visible_strip(&strip, 0.0, 100.0, 10.0, 10.0);
        assert_eq!(visible, VisibleStrip::EMPTY);

        let strip = UniformStrip::new(10, 0.0);
        let visible = compute_visible_strip(&strip, 0.0, 100.0, 10.0, 10.0);
        assert_eq!(visible, VisibleStrip::EMPTY);
    }

    #[test]
    fn partially_covered_rows_are_included() {
        // Three rows, each 10 units tall.
        let strip = UniformStrip::new(3, 10.0);
        let visible = compute_visible_strip(&strip, 5.0, 10.0, 0.0, 0.0);
        assert_eq!(visible.start, 0);
        assert_eq!(visible.end, 2);
        assert_eq!(visible.before_extent, 0.0);
        assert_eq!(visible.after_extent, 10.0);
        assert_eq!(visible.content_extent, 30.0);
    }

    #[test]
    fn asymmetric_overscan_extends_in_one_direction() {
        let strip = UniformStrip::new(4, 10.0);
        let visible = compute_visible_strip(&strip, 10.0, 20.0, 0.0, 10.0);
        assert_eq!(visible.start, 1);
        assert_eq!(visible.end, 4);
        assert_eq!(visible.len(), 3);
    }

    #[test]
    fn zero_viewport_reports_padding_only() {
        let strip = UniformStrip::new(4, 10.0);
        let visible = compute_visible_strip(&strip, 15.0, 0.0, 0.0, 0.0);
        assert!(visible.is_empty());
        assert_eq!(visible.before_extent, 15.0);
        assert_eq!(visible.after_extent, 25.0);
        assert_eq!(visible.content_extent, 40.0);
    }
}
