// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Understory Wheel Picker: a wheel-style picker view driven by a data source.
//!
//! A [`WheelPickerView`] arranges uniformly sized rows in a vertically
//! scrolling wheel. It owns none of the content: on every
//! [`refresh`](WheelPickerView::refresh) it asks a [`WheelPickerDataSource`] for
//!
//! - the number of rows ([`WheelPickerDataSource::number_of_cells`]),
//! - the height shared by every row ([`WheelPickerDataSource::height_for_cell`]),
//! - a cell for each realized index ([`WheelPickerDataSource::cell_for_row_at_index`]),
//!
//! and produces a [`WheelLayout`]: one [`LaidOutRow`] per realized index, with
//! row `i` framed at `y = i * height`, and a content size of `count * height`.
//!
//! The view keeps only a [`DataSourceRef`], a `Weak` handle, so a screen that
//! owns both the view and its data source does not form a reference cycle.
//!
//! Rendering, gestures, scroll physics and snapping belong to the host toolkit.
//! The host feeds scroll offsets in and draws the returned frames, subtracting
//! [`WheelPickerView::scroll_offset`] to get viewport coordinates.
//!
//! ## Failure handling
//!
//! Nothing here panics on bad data. A missing data source yields an empty
//! wheel, a non-positive row height follows the configured
//! [`InvalidHeightPolicy`], and a missing cell becomes a
//! [`RowContent::Placeholder`]. Each recovery is logged through the `log`
//! facade and recorded as a [`LayoutIssue`] on the layout.
//!
//! ## Minimal example
//!
//! ```rust
//! use std::cell::RefCell;
//! use std::rc::Rc;
//!
//! use understory_wheel_picker::{
//!     WheelPickerConfig, WheelPickerDataSource, WheelPickerView, downgrade_source,
//! };
//!
//! struct Hours;
//!
//! impl WheelPickerDataSource for Hours {
//!     type Cell = String;
//!
//!     fn number_of_cells(&self) -> usize {
//!         24
//!     }
//!
//!     fn height_for_cell(&self) -> i32 {
//!         44
//!     }
//!
//!     fn cell_for_row_at_index(&mut self, index: usize) -> Option<String> {
//!         Some(format!("{index:02}"))
//!     }
//! }
//!
//! let hours = Rc::new(RefCell::new(Hours));
//! let mut picker = WheelPickerView::new(WheelPickerConfig::default());
//! picker.set_width(80.0);
//! picker.set_viewport_extent(Some(220.0));
//! picker.set_data_source(Some(downgrade_source(&hours)));
//!
//! let layout = picker.refresh();
//! assert_eq!(layout.content_extent(), 24.0 * 44.0);
//! // Only the rows inside the 220px viewport were requested.
//! assert_eq!(layout.rows.len(), 5);
//! assert_eq!(layout.rows[1].frame.y0, 44.0);
//! assert_eq!(picker.selected_index(), Some(2));
//! ```
//!
//! This crate is `no_std` and uses `alloc`. Enable either the `std` (default)
//! or `libm` feature for `kurbo`.

#![no_std]

extern crate alloc;

mod config;
mod data_source;
mod layout;
mod view;

pub use config::{DEFAULT_MINIMUM_CELL_HEIGHT, InvalidHeightPolicy, WheelPickerConfig};
pub use data_source::{DataSourceRef, WheelPickerDataSource, downgrade_source};
pub use layout::{LaidOutRow, LayoutIssue, RowContent, WheelLayout};
pub use understory_wheel_strip::ScrollAlign;
pub use view::WheelPickerView;
