// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The data source capability and the non-owning handle the view keeps to it.

use alloc::rc::{Rc, Weak};
use core::cell::RefCell;

/// Supplies row count, row height, and row content to a [`WheelPickerView`].
///
/// All three queries are synchronous and run on the UI thread during
/// [`WheelPickerView::refresh`]. Implementations that fetch data
/// asynchronously must have it cached before the picker asks.
///
/// [`WheelPickerView`]: crate::WheelPickerView
/// [`WheelPickerView::refresh`]: crate::WheelPickerView::refresh
pub trait WheelPickerDataSource {
    /// Content type for one row.
    type Cell;

    /// Number of rows. Queried once per refresh.
    fn number_of_cells(&self) -> usize;

    /// Height shared by every row. Queried once per refresh.
    ///
    /// Must be positive; zero or negative values are handled by the view's
    /// [`InvalidHeightPolicy`](crate::InvalidHeightPolicy).
    fn height_for_cell(&self) -> i32;

    /// Content for the row at `index`, which is always in `0..number_of_cells()`.
    ///
    /// Returning `None` makes the view render a placeholder in that row.
    /// Implementations are free to pool and reuse cell instances.
    fn cell_for_row_at_index(&mut self, index: usize) -> Option<Self::Cell>;
}

/// A non-owning reference from a view to its data source.
///
/// The host (typically the screen that also owns the view) keeps the strong
/// [`Rc`]. Once it is dropped the view behaves as if no data source were set.
pub type DataSourceRef<C> = Weak<RefCell<dyn WheelPickerDataSource<Cell = C>>>;

/// Downgrades a shared data source into a [`DataSourceRef`] for
/// [`WheelPickerView::set_data_source`](crate::WheelPickerView::set_data_source).
#[must_use]
pub fn downgrade_source<D, C>(source: &Rc<RefCell<D>>) -> DataSourceRef<C>
where
    D: WheelPickerDataSource<Cell = C> + 'static,
{
    let weak: Weak<RefCell<D>> = Rc::downgrade(source);
    weak
}
