// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A strip of rows that all share one extent.

/// A dense strip of `len` rows, each `extent` units tall.
///
/// Offsets are measured from the start of the strip, so row `i` starts at
/// `i * extent` and the whole strip spans `len * extent`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UniformStrip {
    len: usize,
    extent: f64,
}

impl UniformStrip {
    /// An empty strip with zero extent.
    pub const EMPTY: Self = Self {
        len: 0,
        extent: 0.0,
    };

    /// Creates a strip of `len` rows of uniform `extent`.
    #[must_use]
    pub fn new(len: usize, extent: f64) -> Self {
        let mut strip = Self::EMPTY;
        strip.set_len(len);
        strip.set_extent(extent);
        strip
    }

    /// Number of rows in the strip.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the strip has no rows.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Sets the number of rows.
    pub fn set_len(&mut self, len: usize) {
        self.len = len;
    }

    /// Returns the extent shared by every row.
    #[must_use]
    pub const fn extent(&self) -> f64 {
        self.extent
    }

    /// Sets the extent shared by every row.
    ///
    /// Negative values clamp to `0.0`.
    pub fn set_extent(&mut self, extent: f64) {
        debug_assert!(
            extent.is_finite(),
            "UniformStrip extents must be finite; got {extent:?}"
        );
        self.extent = if extent.is_sign_negative() {
            0.0
        } else {
            extent
        };
    }

    /// Total extent of all rows.
    #[must_use]
    pub fn total_extent(&self) -> f64 {
        self.len as f64 * self.extent
    }

    /// Offset of the start of row `index`.
    ///
    /// Indices past the end are not clamped; `offset_of(len)` is the end of the strip.
    #[must_use]
    pub fn offset_of(&self, index: usize) -> f64 {
        index as f64 * self.extent
    }

    /// Index of the row containing `offset`, clamped into `0..len`.
    ///
    /// Returns `0` for an empty strip or one whose rows have zero extent.
    #[must_use]
    pub fn index_at_offset(&self, offset: f64) -> usize {
        if self.len == 0 || self.extent <= 0.0 || offset.is_nan() || offset <= 0.0 {
            return 0;
        }
        // Saturating float-to-int cast; `offset` is positive so this floors.
        #[allow(
            clippy::cast_possible_truncation,
            reason = "Index is clamped to bounds immediately after the cast"
        )]
        let i = (offset / self.extent) as usize;
        i.min(self.len - 1)
    }
}

impl Default for UniformStrip {
    fn default() -> Self {
        Self::EMPTY
    }
}

#[cfg(test)]
mod tests {
    use super::UniformStrip;

    #[test]
    fn offsets_and_indices() {
        let strip = UniformStrip::new(5, 44.0);
        assert_eq!(strip.total_extent(), 220.0);
        assert_eq!(strip.offset_of(0), 0.0);
        assert_eq!(strip.offset_of(3), 132.0);
        assert_eq!(strip.index_at_offset(0.0), 0);
        assert_eq!(strip.index_at_offset(43.9), 0);
        assert_eq!(strip.index_at_offset(44.0), 1);
        assert_eq!(strip.index_at_offset(219.0), 4);
        assert_eq!(strip.index_at_offset(1000.0), 4);
        assert_eq!(strip.index_at_offset(-10.0), 0);
    }

    #[test]
    fn degenerate_strips_map_everything_to_zero() {
        let strip = UniformStrip::new(0, 10.0);
        assert!(strip.is_empty());
        assert_eq!(strip.total_extent(), 0.0);
        assert_eq!(strip.index_at_offset(25.0), 0);

        let strip = UniformStrip::new(4, 0.0);
        assert_eq!(strip.total_extent(), 0.0);
        assert_eq!(strip.index_at_offset(25.0), 0);
    }

    #[test]
    fn negative_extents_are_clamped_to_zero() {
        let mut strip = UniformStrip::new(3, -5.0);
        assert_eq!(strip.extent(), 0.0);

        strip.set_extent(12.0);
        assert_eq!(strip.extent(), 12.0);
        strip.set_extent(-1.0);
        assert_eq!(strip.extent(), 0.0);
    }
}
