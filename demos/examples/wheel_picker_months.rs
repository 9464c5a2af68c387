// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A month wheel rendered as text.
//!
//! This example shows how a host drives `understory_wheel_picker`:
//! - the screen owns the data source and hands the view a weak reference,
//! - scroll input moves the wheel and the view re-queries on `layout_if_needed`,
//! - row frames are shifted by the scroll offset into viewport coordinates.
//!
//! The data source "forgets" one month to show placeholder handling; the
//! warning appears in the log output.
//!
//! Run:
//! - `cargo run -p understory_demos --example wheel_picker_months`

use std::cell::RefCell;
use std::rc::Rc;

use kurbo::Vec2;
use simplelog::{Config, LevelFilter, SimpleLogger};
use understory_wheel_picker::{
    RowContent, ScrollAlign, WheelPickerConfig, WheelPickerDataSource, WheelPickerView,
    downgrade_source,
};

const MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Row height in terminal "pixels": one text line per 10 units.
const ROW_HEIGHT: i32 = 10;

struct Months {
    unavailable: Option<usize>,
}

impl WheelPickerDataSource for Months {
    type Cell = &'static str;

    fn number_of_cells(&self) -> usize {
        MONTHS.len()
    }

    fn height_for_cell(&self) -> i32 {
        ROW_HEIGHT
    }

    fn cell_for_row_at_index(&mut self, index: usize) -> Option<&'static str> {
        if self.unavailable == Some(index) {
            return None;
        }
        MONTHS.get(index).copied()
    }
}

fn render(picker: &mut WheelPickerView<&'static str>) {
    picker.layout_if_needed();
    let scroll = Vec2::new(0.0, picker.scroll_offset());
    let selected = picker.selected_index();
    let layout = picker.layout();
    println!(
        "-- offset {:>5.1} / content {:>5.1} --",
        scroll.y,
        layout.content_extent()
    );
    for row in &layout.rows {
        let frame = row.frame - scroll;
        let marker = if Some(row.index) == selected { '>' } else { ' ' };
        let label = match &row.content {
            RowContent::Cell(name) => *name,
            RowContent::Placeholder => "·",
        };
        println!("{marker} y={:>6.1} {label}", frame.y0);
    }
}

fn main() {
    SimpleLogger::init(LevelFilter::Debug, Config::default())
        .expect("Failed to initialize logger");

    let months = Rc::new(RefCell::new(Months {
        unavailable: Some(4),
    }));

    let mut picker = WheelPickerView::new(WheelPickerConfig {
        overscan: f64::from(ROW_HEIGHT),
        ..WheelPickerConfig::default()
    });
    picker.set_width(120.0);
    picker.set_viewport_extent(Some(5.0 * f64::from(ROW_HEIGHT)));
    picker.set_data_source(Some(downgrade_source(&months)));
    render(&mut picker);

    // A few flicks of the wheel.
    for delta in [15.0, 20.0, 40.0] {
        picker.scroll_by(delta);
        render(&mut picker);
    }

    picker.scroll_to_index(11, ScrollAlign::Center);
    render(&mut picker);

    // The screen tears down its data source; the wheel goes empty.
    drop(months);
    log::info!("month data source dropped; the wheel should now be empty");
    picker.set_needs_refresh();
    render(&mut picker);
}
