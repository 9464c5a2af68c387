// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Understory Wheel Strip: geometry for a strip of uniformly sized rows.
//!
//! Wheel-style pickers lay out every row at the same height, so the geometry
//! collapses to multiplication: row `i` starts at `i * extent` and the content
//! spans `len * extent`. This crate packages that arithmetic together with the
//! scroll bookkeeping a picker needs:
//!
//! - [`UniformStrip`]: `len` rows of one shared extent, with offset and
//!   index-at-offset queries.
//! - [`compute_visible_strip`]: which rows intersect a viewport plus
//!   asymmetric overscan, returned as a [`VisibleStrip`].
//! - [`StripScroller`]: scroll offset, viewport, overscan, and a cached
//!   [`VisibleStrip`], with [`ScrollAlign`]-based scrolling and
//!   [`StripScroller::centered_index`] for the row under the center line.
//!
//! The crate knows nothing about cells or views; hosts such as
//! `understory_wheel_picker` own the content and position it.
//!
//! ## Minimal example
//!
//! ```rust
//! use understory_wheel_strip::{ScrollAlign, StripScroller, UniformStrip};
//!
//! // 60 rows (minutes), each 44 logical pixels tall, in a 220px viewport.
//! let mut scroller = StripScroller::new(UniformStrip::new(60, 44.0), 220.0, 44.0);
//!
//! scroller.scroll_to_index(30, ScrollAlign::Center);
//! assert_eq!(scroller.centered_index(), Some(30));
//!
//! let visible = scroller.visible_strip();
//! assert!(visible.start <= 30 && 30 < visible.end);
//! assert_eq!(visible.content_extent, 60.0 * 44.0);
//! ```
//!
//! All extents and offsets are `f64` in a caller-chosen coordinate space and
//! are expected to be finite.
//!
//! This crate is `no_std`.

#![no_std]

mod scroller;
mod uniform;
mod visible;

pub use scroller::{ScrollAlign, StripScroller};
pub use uniform::UniformStrip;
pub use visible::{VisibleStrip, compute_visible_strip};
