// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The wheel picker view.

use alloc::rc::Weak;
use alloc::vec::Vec;
use core::fmt;
use core::ops::Range;

use kurbo::{Rect, Size};
use smallvec::SmallVec;
use understory_wheel_strip::{ScrollAlign, StripScroller, UniformStrip};

use crate::{
    DataSourceRef, InvalidHeightPolicy, LaidOutRow, LayoutIssue, RowContent, WheelLayout,
    WheelPickerConfig,
};

/// A vertically scrolling wheel of uniformly sized rows.
///
/// The view holds a non-owning [`DataSourceRef`] and asks it for a row count,
/// a row height, and per-row cells every time it [refreshes](Self::refresh).
/// Nothing the data source reports is cached across refreshes.
///
/// By default the viewport is unbounded and every row in `0..count` is realized.
/// With [`set_viewport_extent`](Self::set_viewport_extent) only the rows
/// intersecting the viewport (plus [`WheelPickerConfig::overscan`]) are requested.
pub struct WheelPickerView<C> {
    data_source: Option<DataSourceRef<C>>,
    config: WheelPickerConfig,
    width: f64,
    viewport_extent: Option<f64>,
    scroller: StripScroller,
    layout: WheelLayout<C>,
    needs_refresh: bool,
}

impl<C> WheelPickerView<C> {
    /// Creates an empty view with no data source.
    #[must_use]
    pub fn new(config: WheelPickerConfig) -> Self {
        Self {
            data_source: None,
            config,
            width: 0.0,
            viewport_extent: None,
            scroller: StripScroller::new(UniformStrip::EMPTY, 0.0, config.overscan),
            layout: WheelLayout::empty(0.0),
            needs_refresh: true,
        }
    }

    /// Returns the current configuration.
    #[must_use]
    pub const fn config(&self) -> &WheelPickerConfig {
        &self.config
    }

    /// Replaces the configuration.
    pub fn set_config(&mut self, config: WheelPickerConfig) {
        if config != self.config {
            self.config = config;
            self.scroller.set_overscan(config.overscan, config.overscan);
            self.needs_refresh = true;
        }
    }

    /// Sets or clears the data source.
    ///
    /// Passing `None` makes the next refresh present zero rows.
    pub fn set_data_source(&mut self, source: Option<DataSourceRef<C>>) {
        self.data_source = source;
        self.needs_refresh = true;
    }

    /// Returns `true` if a data source is set and still alive.
    #[must_use]
    pub fn has_data_source(&self) -> bool {
        self.data_source
            .as_ref()
            .is_some_and(|source| source.strong_count() > 0)
    }

    /// Returns the width given to every row frame.
    #[must_use]
    pub const fn width(&self) -> f64 {
        self.width
    }

    /// Sets the width given to every row frame. Negative widths become `0.0`.
    pub fn set_width(&mut self, width: f64) {
        let width = width.max(0.0);
        if width != self.width {
            self.width = width;
            self.needs_refresh = true;
        }
    }

    /// Returns the viewport extent, or `None` when unbounded.
    #[must_use]
    pub const fn viewport_extent(&self) -> Option<f64> {
        self.viewport_extent
    }

    /// Bounds the viewport to `extent`, or makes it unbounded with `None`.
    pub fn set_viewport_extent(&mut self, extent: Option<f64>) {
        let extent = extent.map(|extent| extent.max(0.0));
        if extent != self.viewport_extent {
            self.viewport_extent = extent;
            self.sync_viewport();
            self.scroller.clamp_scroll_to_content();
            self.needs_refresh = true;
        }
    }

    /// Returns the current scroll offset.
    #[must_use]
    pub const fn scroll_offset(&self) -> f64 {
        self.scroller.scroll_offset()
    }

    /// Sets the scroll offset, clamped to the content laid out by the last refresh.
    pub fn set_scroll_offset(&mut self, offset: f64) {
        self.scroller.set_scroll_offset(offset);
        self.scroller.clamp_scroll_to_content();
        self.needs_refresh = true;
    }

    /// Adjusts the scroll offset by `delta`.
    pub fn scroll_by(&mut self, delta: f64) {
        self.set_scroll_offset(self.scroller.scroll_offset() + delta);
    }

    /// Scrolls row `index` into view using the rows known from the last refresh.
    pub fn scroll_to_index(&mut self, index: usize, align: ScrollAlign) {
        self.scroller.scroll_to_index(index, align);
        self.scroller.clamp_scroll_to_content();
        self.needs_refresh = true;
    }

    /// Row nearest the center line of the viewport, or `None` when the wheel is empty.
    ///
    /// An unbounded viewport covers the whole content. When the rows do not
    /// fill a bounded viewport the last row is selected.
    #[must_use]
    pub fn selected_index(&self) -> Option<usize> {
        self.scroller.centered_index()
    }

    /// Marks the view as needing a refresh on the next [`layout_if_needed`](Self::layout_if_needed).
    pub fn set_needs_refresh(&mut self) {
        self.needs_refresh = true;
    }

    /// Returns `true` if something changed since the last refresh.
    #[must_use]
    pub const fn needs_refresh(&self) -> bool {
        self.needs_refresh
    }

    /// Refreshes only if the view has been invalidated.
    pub fn layout_if_needed(&mut self) -> &WheelLayout<C> {
        if self.needs_refresh {
            self.refresh();
        }
        &self.layout
    }

    /// Returns the layout produced by the last refresh.
    #[must_use]
    pub const fn layout(&self) -> &WheelLayout<C> {
        &self.layout
    }

    /// Queries the data source and lays out the rows.
    ///
    /// Asks for the row count and row height once each, then for one cell per
    /// realized index in ascending order. Row `i` is placed at `y = i * height`
    /// and the content spans `count * height`. Every failure degrades to an
    /// empty or partially filled wheel and is recorded in [`WheelLayout::issues`].
    pub fn refresh(&mut self) -> &WheelLayout<C> {
        self.needs_refresh = false;

        let Some(handle) = self.data_source.as_ref().and_then(Weak::upgrade) else {
            log::debug!("wheel picker refreshed without a data source");
            self.reset_to_empty(SmallVec::new());
            return &self.layout;
        };
        let Ok(mut source) = handle.try_borrow_mut() else {
            let issue = LayoutIssue::DataSourceBusy;
            log::warn!("{issue}");
            self.reset_to_empty(SmallVec::from_elem(issue, 1));
            return &self.layout;
        };

        let mut issues = SmallVec::new();
        let count = source.number_of_cells();
        let reported = source.height_for_cell();
        let row_height = if reported > 0 {
            f64::from(reported)
        } else {
            let issue = LayoutIssue::InvalidCellHeight { height: reported };
            log::error!("{issue}");
            issues.push(issue);
            match self.config.invalid_height {
                InvalidHeightPolicy::SkipLayout => {
                    drop(source);
                    self.reset_to_empty(issues);
                    return &self.layout;
                }
                InvalidHeightPolicy::Substitute(height) => f64::from(height.get()),
            }
        };

        *self.scroller.strip_mut() = UniformStrip::new(count, row_height);
        self.sync_viewport();
        self.scroller.clamp_scroll_to_content();
        let realized = self.realized_range(count);

        let mut rows = Vec::with_capacity(realized.len());
        for index in realized {
            debug_assert!(
                index < count,
                "wheel picker requested row {index} outside 0..{count}"
            );
            let content = match source.cell_for_row_at_index(index) {
                Some(cell) => RowContent::Cell(cell),
                None => {
                    let issue = LayoutIssue::InvalidCell { index };
                    log::warn!("{issue}");
                    issues.push(issue);
                    RowContent::Placeholder
                }
            };
            let y0 = self.scroller.strip().offset_of(index);
            rows.push(LaidOutRow {
                index,
                frame: Rect::new(0.0, y0, self.width, y0 + row_height),
                content,
            });
        }

        let content_extent = self.scroller.strip().total_extent();
        log::trace!(
            "wheel picker laid out {} of {count} rows at height {row_height}, extent {content_extent}",
            rows.len()
        );
        self.layout = WheelLayout {
            row_count: count,
            row_height,
            content_size: Size::new(self.width, content_extent),
            rows,
            issues,
        };
        &self.layout
    }

    fn realized_range(&mut self, count: usize) -> Range<usize> {
        if self.viewport_extent.is_none() {
            return 0..count;
        }
        let visible = self.scroller.visible_strip();
        visible.start..visible.end
    }

    fn sync_viewport(&mut self) {
        let extent = self
            .viewport_extent
            .unwrap_or_else(|| self.scroller.strip().total_extent());
        self.scroller.set_viewport_extent(extent);
    }

    fn reset_to_empty(&mut self, issues: SmallVec<[LayoutIssue; 2]>) {
        *self.scroller.strip_mut() = UniformStrip::EMPTY;
        self.sync_viewport();
        self.scroller.set_scroll_offset(0.0);
        self.layout = WheelLayout {
            issues,
            ..WheelLayout::empty(self.width)
        };
    }
}

impl<C> Default for WheelPickerView<C> {
    fn default() -> Self {
        Self::new(WheelPickerConfig::default())
    }
}

impl<C: fmt::Debug> fmt::Debug for WheelPickerView<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WheelPickerView")
            .field("has_data_source", &self.has_data_source())
            .field("config", &self.config)
            .field("width", &self.width)
            .field("viewport_extent", &self.viewport_extent)
            .field("scroller", &self.scroller)
            .field("layout", &self.layout)
            .field("needs_refresh", &self.needs_refresh)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use alloc::format;
    use alloc::rc::Rc;
    use alloc::string::String;
    use alloc::vec::Vec;
    use core::cell::{Cell, RefCell};
    use core::num::NonZeroU32;

    use understory_wheel_strip::ScrollAlign;

    use super::WheelPickerView;
    use crate::{
        InvalidHeightPolicy, LayoutIssue, RowContent, WheelPickerConfig, WheelPickerDataSource,
        downgrade_source,
    };

    /// Labels rows `"row {i}"` and records every query it answers.
    #[derive(Default)]
    struct Rows {
        count: usize,
        height: i32,
        missing: Vec<usize>,
        requested: Vec<usize>,
        count_queries: Cell<usize>,
        height_queries: Cell<usize>,
    }

    impl Rows {
        fn shared(count: usize, height: i32) -> Rc<RefCell<Self>> {
            Rc::new(RefCell::new(Self {
                count,
                height,
                ..Self::default()
            }))
        }
    }

    impl WheelPickerDataSource for Rows {
        type Cell = String;

        fn number_of_cells(&self) -> usize {
            self.count_queries.set(self.count_queries.get() + 1);
            self.count
        }

        fn height_for_cell(&self) -> i32 {
            self.height_queries.set(self.height_queries.get() + 1);
            self.height
        }

        fn cell_for_row_at_index(&mut self, index: usize) -> Option<String> {
            self.requested.push(index);
            (!self.missing.contains(&index)).then(|| format!("row {index}"))
        }
    }

    fn attached(source: &Rc<RefCell<Rows>>) -> WheelPickerView<String> {
        let mut view = WheelPickerView::default();
        view.set_width(320.0);
        view.set_data_source(Some(downgrade_source(source)));
        view
    }

    #[test]
    fn five_rows_of_44() {
        let source = Rows::shared(5, 44);
        let mut view = attached(&source);

        let layout = view.refresh();
        assert_eq!(layout.row_count, 5);
        assert_eq!(layout.content_extent(), 220.0);
        assert_eq!(layout.content_size.width, 320.0);
        for (i, row) in layout.rows.iter().enumerate() {
            assert_eq!(row.index, i);
            assert_eq!(row.frame.y0, 44.0 * i as f64);
            assert_eq!(row.frame.height(), 44.0);
            assert_eq!(row.frame.width(), 320.0);
            assert_eq!(row.content, RowContent::Cell(format!("row {i}")));
        }
        assert!(layout.issues.is_empty());
        assert_eq!(source.borrow().requested, [0, 1, 2, 3, 4]);
    }

    #[test]
    fn count_and_height_are_queried_once_per_refresh() {
        let source = Rows::shared(8, 10);
        let mut view = attached(&source);

        view.refresh();
        view.refresh();
        let source = source.borrow();
        assert_eq!(source.count_queries.get(), 2);
        assert_eq!(source.height_queries.get(), 2);
        assert_eq!(source.requested.len(), 16);
    }

    #[test]
    fn zero_rows_yield_no_requests_and_no_extent() {
        let source = Rows::shared(0, 44);
        let mut view = attached(&source);

        let layout = view.refresh();
        assert!(layout.is_empty());
        assert!(layout.rows.is_empty());
        assert_eq!(layout.content_extent(), 0.0);
        assert!(source.borrow().requested.is_empty());
        assert_eq!(view.selected_index(), None);
    }

    #[test]
    fn no_data_source_presents_nothing() {
        let mut view = WheelPickerView::<String>::default();
        assert!(!view.has_data_source());
        let layout = view.refresh();
        assert!(layout.is_empty());
        assert_eq!(layout.content_extent(), 0.0);
        assert!(layout.issues.is_empty());
    }

    #[test]
    fn clearing_the_data_source_empties_the_wheel() {
        let source = Rows::shared(3, 20);
        let mut view = attached(&source);
        assert_eq!(view.refresh().rows.len(), 3);

        view.set_data_source(None);
        assert!(view.needs_refresh());
        let layout = view.layout_if_needed();
        assert!(layout.rows.is_empty());
        assert_eq!(layout.content_extent(), 0.0);
        assert_eq!(source.borrow().requested.len(), 3);
    }

    #[test]
    fn dropped_data_source_is_treated_as_unset() {
        let source = Rows::shared(3, 20);
        let mut view = attached(&source);
        assert!(view.has_data_source());

        drop(source);
        assert!(!view.has_data_source());
        assert!(view.refresh().is_empty());
    }

    #[test]
    fn view_does_not_own_the_data_source() {
        let source = Rows::shared(3, 20);
        let _view = attached(&source);
        assert_eq!(Rc::strong_count(&source), 1);
    }

    #[test]
    fn refresh_is_idempotent() {
        let source = Rows::shared(6, 30);
        let mut view = attached(&source);

        let first = view.refresh().clone();
        let second = view.refresh().clone();
        assert_eq!(first, second);
    }

    #[test]
    fn windowed_refresh_is_idempotent() {
        let source = Rows::shared(40, 20);
        let mut view = attached(&source);
        view.set_config(WheelPickerConfig {
            overscan: 15.0,
            ..WheelPickerConfig::default()
        });
        view.set_viewport_extent(Some(100.0));
        view.refresh();
        view.set_scroll_offset(333.0);

        let first = view.refresh().clone();
        let second = view.refresh().clone();
        assert_eq!(first, second);
        let indices: Vec<usize> = second.rows.iter().map(|row| row.index).collect();
        assert_eq!(indices, (15..=22).collect::<Vec<_>>());
    }

    #[test]
    fn short_content_selects_the_last_row() {
        let source = Rows::shared(3, 10);
        let mut view = attached(&source);
        view.set_viewport_extent(Some(100.0));
        view.refresh();
        assert_eq!(view.selected_index(), Some(2));
    }

    #[test]
    fn changed_count_is_picked_up_on_next_refresh() {
        let source = Rows::shared(2, 10);
        let mut view = attached(&source);
        assert_eq!(view.refresh().content_extent(), 20.0);

        source.borrow_mut().count = 4;
        source.borrow_mut().height = 15;
        let layout = view.refresh();
        assert_eq!(layout.row_count, 4);
        assert_eq!(layout.row_height, 15.0);
        assert_eq!(layout.content_extent(), 60.0);
        assert_eq!(layout.rows[3].frame.y0, 45.0);
    }

    #[test]
    fn non_positive_height_skips_layout_by_default() {
        for height in [0, -7] {
            let source = Rows::shared(5, height);
            let mut view = attached(&source);

            let layout = view.refresh();
            assert!(layout.rows.is_empty());
            assert_eq!(layout.content_extent(), 0.0);
            assert_eq!(
                layout.issues.as_slice(),
                [LayoutIssue::InvalidCellHeight { height }]
            );
            assert!(source.borrow().requested.is_empty());
        }
    }

    #[test]
    fn non_positive_height_can_substitute_a_minimum() {
        let source = Rows::shared(3, -1);
        let mut view = attached(&source);
        view.set_config(WheelPickerConfig {
            invalid_height: InvalidHeightPolicy::default_substitute(),
            ..WheelPickerConfig::default()
        });

        let layout = view.refresh();
        assert_eq!(layout.row_height, 1.0);
        assert_eq!(layout.content_extent(), 3.0);
        assert!(layout.rows.iter().all(|row| row.frame.height() > 0.0));
        assert_eq!(layout.rows[2].frame.y0, 2.0);

        view.set_config(WheelPickerConfig {
            invalid_height: InvalidHeightPolicy::Substitute(NonZeroU32::new(12).unwrap()),
            ..WheelPickerConfig::default()
        });
        assert_eq!(view.layout_if_needed().content_extent(), 36.0);
    }

    #[test]
    fn missing_cells_become_placeholders() {
        let source = Rows::shared(4, 10);
        source.borrow_mut().missing = [1, 3].into();
        let mut view = attached(&source);

        let layout = view.refresh();
        assert_eq!(layout.rows.len(), 4);
        assert!(layout.rows[1].content.is_placeholder());
        assert!(layout.rows[3].content.is_placeholder());
        assert_eq!(layout.rows[2].content.cell().map(String::as_str), Some("row 2"));
        assert_eq!(
            layout.issues.as_slice(),
            [
                LayoutIssue::InvalidCell { index: 1 },
                LayoutIssue::InvalidCell { index: 3 },
            ]
        );
    }

    #[test]
    fn busy_data_source_degrades_to_empty() {
        let source = Rows::shared(4, 10);
        let mut view = attached(&source);

        let guard = source.borrow_mut();
        let layout = view.refresh();
        assert!(layout.is_empty());
        assert_eq!(layout.issues.as_slice(), [LayoutIssue::DataSourceBusy]);
        drop(guard);

        assert_eq!(view.refresh().rows.len(), 4);
    }

    #[test]
    fn bounded_viewport_realizes_visible_rows_only() {
        let source = Rows::shared(50, 20);
        let mut view = attached(&source);
        view.set_viewport_extent(Some(100.0));

        let layout = view.refresh();
        assert_eq!(layout.content_extent(), 1000.0);
        let indices: Vec<usize> = layout.rows.iter().map(|row| row.index).collect();
        assert_eq!(indices, [0, 1, 2, 3, 4]);

        view.scroll_by(45.0);
        assert!(view.needs_refresh());
        let layout = view.layout_if_needed();
        let indices: Vec<usize> = layout.rows.iter().map(|row| row.index).collect();
        assert_eq!(indices, [2, 3, 4, 5, 6, 7]);
        assert_eq!(layout.row(5).map(|row| row.frame.y0), Some(100.0));
    }

    #[test]
    fn overscan_widens_the_realized_range() {
        let source = Rows::shared(50, 20);
        let mut view = attached(&source);
        view.set_config(WheelPickerConfig {
            overscan: 40.0,
            ..WheelPickerConfig::default()
        });
        view.set_viewport_extent(Some(100.0));
        view.refresh();

        view.set_scroll_offset(200.0);
        let layout = view.layout_if_needed();
        assert_eq!(layout.rows.first().map(|row| row.index), Some(8));
        assert_eq!(layout.rows.last().map(|row| row.index), Some(16));
    }

    #[test]
    fn scrolling_is_clamped_to_content() {
        let source = Rows::shared(10, 20);
        let mut view = attached(&source);
        view.set_viewport_extent(Some(100.0));
        view.refresh();

        view.set_scroll_offset(10_000.0);
        assert_eq!(view.scroll_offset(), 100.0);
        view.scroll_by(-500.0);
        assert_eq!(view.scroll_offset(), 0.0);

        // Shrinking the data clamps on the next refresh.
        view.set_scroll_offset(100.0);
        source.borrow_mut().count = 6;
        view.refresh();
        assert_eq!(view.scroll_offset(), 20.0);
    }

    #[test]
    fn selected_index_tracks_the_center_line() {
        let source = Rows::shared(60, 44);
        let mut view = attached(&source);
        view.set_viewport_extent(Some(220.0));
        view.refresh();
        assert_eq!(view.selected_index(), Some(2));

        view.scroll_to_index(30, ScrollAlign::Center);
        assert_eq!(view.selected_index(), Some(30));
        let layout = view.layout_if_needed();
        assert!(layout.row(30).is_some());

        view.scroll_to_index(59, ScrollAlign::Center);
        assert_eq!(view.selected_index(), Some(57));
    }

    #[test]
    fn unbounded_viewport_stays_at_the_top() {
        let source = Rows::shared(4, 10);
        let mut view = attached(&source);
        view.refresh();

        view.set_scroll_offset(25.0);
        assert_eq!(view.scroll_offset(), 0.0);
        assert_eq!(view.selected_index(), Some(2));
    }

    #[test]
    fn width_changes_resize_row_frames() {
        let source = Rows::shared(2, 10);
        let mut view = attached(&source);
        view.refresh();
        assert!(!view.needs_refresh());

        view.set_width(-5.0);
        assert_eq!(view.width(), 0.0);
        let layout = view.layout_if_needed();
        assert_eq!(layout.rows[0].frame.width(), 0.0);
        assert_eq!(layout.content_size.width, 0.0);
    }
}
