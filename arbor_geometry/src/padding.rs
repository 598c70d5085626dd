// Copyright 2026 the Arbor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Four-sided spacing applied around a layout slot.

/// Four-sided spacing around a layout slot, in layout units.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Padding {
    /// Space above the slot content.
    pub top: f32,
    /// Space to the right of the slot content.
    pub right: f32,
    /// Space below the slot content.
    pub bottom: f32,
    /// Space to the left of the slot content.
    pub left: f32,
}

impl Padding {
    /// No padding on any side.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    /// Creates a padding from its four sides.
    #[must_use]
    pub const fn new(top: f32, right: f32, bottom: f32, left: f32) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    /// Equal padding on all sides.
    #[must_use]
    pub const fn uniform(value: f32) -> Self {
        Self::new(value, value, value, value)
    }

    /// Builds a padding from a `[top, right, bottom, left]` tuple, the
    /// order used by the property layer.
    #[must_use]
    pub const fn from_array(values: [f32; 4]) -> Self {
        Self::new(values[0], values[1], values[2], values[3])
    }

    /// `left + right`.
    #[must_use]
    pub fn horizontal(&self) -> f32 {
        self.left + self.right
    }

    /// `top + bottom`.
    #[must_use]
    pub fn vertical(&self) -> f32 {
        self.top + self.bottom
    }
}
