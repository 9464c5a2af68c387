// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! View configuration.

use core::num::NonZeroU32;

/// Row height used by [`InvalidHeightPolicy::default_substitute`].
pub const DEFAULT_MINIMUM_CELL_HEIGHT: NonZeroU32 = NonZeroU32::MIN;

/// What a refresh does when the data source reports a row height `<= 0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InvalidHeightPolicy {
    /// Lay out nothing: zero rows, zero content extent, no cell requests.
    #[default]
    SkipLayout,
    /// Lay out every row at the given height instead.
    Substitute(NonZeroU32),
}

impl InvalidHeightPolicy {
    /// [`InvalidHeightPolicy::Substitute`] with [`DEFAULT_MINIMUM_CELL_HEIGHT`].
    #[must_use]
    pub const fn default_substitute() -> Self {
        Self::Substitute(DEFAULT_MINIMUM_CELL_HEIGHT)
    }
}

/// Configuration for a [`WheelPickerView`](crate::WheelPickerView).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct WheelPickerConfig {
    /// Extra extent realized before and after a bounded viewport.
    ///
    /// Ignored while the viewport is unbounded.
    pub overscan: f64,
    /// Recovery for non-positive row heights.
    pub invalid_height: InvalidHeightPolicy,
}
