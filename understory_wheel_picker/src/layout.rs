// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The result of a refresh: row frames, content size, and recovered issues.

use alloc::vec::Vec;

use kurbo::{Rect, Size};
use smallvec::SmallVec;
use thiserror::Error;

/// A problem a refresh recovered from locally.
///
/// None of these abort a refresh; they are logged and recorded on the
/// resulting [`WheelLayout`] so hosts and tests can observe them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LayoutIssue {
    /// The data source reported a row height that is not positive.
    #[error("data source returned non-positive cell height {height}")]
    InvalidCellHeight {
        /// The height that was reported.
        height: i32,
    },
    /// The data source returned no cell for a requested row.
    #[error("data source returned no cell for row {index}; using a placeholder")]
    InvalidCell {
        /// The row that received a placeholder.
        index: usize,
    },
    /// The data source was already mutably borrowed when the view refreshed.
    #[error("data source is borrowed elsewhere; refreshing as empty")]
    DataSourceBusy,
}

/// Content shown in one row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowContent<C> {
    /// A cell supplied by the data source.
    Cell(C),
    /// An empty stand-in for a missing cell.
    Placeholder,
}

impl<C> RowContent<C> {
    /// Returns the supplied cell, if this row has one.
    #[must_use]
    pub const fn cell(&self) -> Option<&C> {
        match self {
            Self::Cell(cell) => Some(cell),
            Self::Placeholder => None,
        }
    }

    /// Returns `true` for [`RowContent::Placeholder`].
    #[must_use]
    pub const fn is_placeholder(&self) -> bool {
        matches!(self, Self::Placeholder)
    }
}

/// One realized row.
#[derive(Debug, Clone, PartialEq)]
pub struct LaidOutRow<C> {
    /// Row index in `0..row_count`.
    pub index: usize,
    /// Frame in content coordinates: `y0 = index * row_height`.
    pub frame: Rect,
    /// What to draw inside `frame`.
    pub content: RowContent<C>,
}

/// Layout produced by [`WheelPickerView::refresh`](crate::WheelPickerView::refresh).
#[derive(Debug, Clone, PartialEq)]
pub struct WheelLayout<C> {
    /// Number of rows laid out (zero when layout was skipped).
    pub row_count: usize,
    /// Height of every row, or `0.0` when nothing was laid out.
    pub row_height: f64,
    /// Size of the scrollable content: view width by `row_count * row_height`.
    pub content_size: Size,
    /// Realized rows in ascending index order.
    pub rows: Vec<LaidOutRow<C>>,
    /// Problems recovered from during the refresh.
    pub issues: SmallVec<[LayoutIssue; 2]>,
}

impl<C> WheelLayout<C> {
    /// A layout with no rows and zero extent.
    #[must_use]
    pub fn empty(width: f64) -> Self {
        Self {
            row_count: 0,
            row_height: 0.0,
            content_size: Size::new(width, 0.0),
            rows: Vec::new(),
            issues: SmallVec::new(),
        }
    }

    /// Returns `true` if no rows were laid out.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.row_count == 0
    }

    /// Total scrollable extent along the wheel's axis.
    #[must_use]
    pub fn content_extent(&self) -> f64 {
        self.content_size.height
    }

    /// Returns the realized row with the given index, if any.
    #[must_use]
    pub fn row(&self, index: usize) -> Option<&LaidOutRow<C>> {
        let first = self.rows.first()?.index;
        self.rows
            .get(index.checked_sub(first)?)
            .filter(|row| row.index == index)
    }
}
