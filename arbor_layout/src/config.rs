// Copyright 2026 the Arbor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-layout-node configuration: kind, declared size, padding, alignment.

use arbor_geometry::{Alignment, Padding};
use glam::Vec2;
use hashbrown::HashMap;

/// Main-axis direction of a linear layout.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Orientation {
    /// Items stack along y, first item on top.
    #[default]
    Vertical,
    /// Items run along x, first item leftmost.
    Horizontal,
}

/// Which layout algorithm a node runs over its children.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LayoutKind {
    /// Items stacked along one axis, aligned on the other.
    Linear(Orientation),
    /// Items placed into uniform cells in row-major order.
    ///
    /// A zero `columns` or `rows` is derived from the item count and the
    /// other dimension; both zero behaves as a single column.
    Grid {
        /// Number of columns, or 0 to derive from `rows`.
        columns: u32,
        /// Number of rows, or 0 to derive from `columns`.
        rows: u32,
    },
    /// A single child aligned (and, if needed, uniformly downscaled)
    /// within a rectangle.
    Rect,
    /// Only the child at `visible_page` is shown and laid out.
    Page {
        /// Index of the visible child; out of range means none.
        visible_page: i32,
    },
}

/// Configuration of one layout node.
///
/// The declared size uses ≤ 0 to mean "grow to fit content" along that
/// axis. Item padding and alignment have layout-wide defaults plus
/// optional per-child-index overrides.
#[derive(Clone, Debug)]
pub struct LayoutConfig {
    /// The algorithm and its kind-specific parameters.
    pub kind: LayoutKind,
    /// Declared width/height; a component ≤ 0 grows to fit content.
    pub size: Vec2,
    /// Default padding around each item's slot.
    pub item_padding: Padding,
    /// Default alignment of each item within its slot.
    pub item_alignment: Alignment,
    /// When set, invisible children are excluded from measurement and
    /// receive no slot.
    pub skip_invisible: bool,
    padding_overrides: HashMap<usize, Padding>,
    alignment_overrides: HashMap<usize, Alignment>,
}

impl LayoutConfig {
    /// Creates a configuration for `kind` with auto size and no padding.
    #[must_use]
    pub fn new(kind: LayoutKind) -> Self {
        Self {
            kind,
            size: Vec2::ZERO,
            item_padding: Padding::ZERO,
            item_alignment: Alignment::default(),
            skip_invisible: false,
            padding_overrides: HashMap::new(),
            alignment_overrides: HashMap::new(),
        }
    }

    /// A linear layout along `orientation`.
    #[must_use]
    pub fn linear(orientation: Orientation) -> Self {
        Self::new(LayoutKind::Linear(orientation))
    }

    /// A grid layout with the given track counts (0 = derive).
    #[must_use]
    pub fn grid(columns: u32, rows: u32) -> Self {
        Self::new(LayoutKind::Grid { columns, rows })
    }

    /// A single-child rect layout.
    #[must_use]
    pub fn rect() -> Self {
        Self::new(LayoutKind::Rect)
    }

    /// A page layout showing its first child.
    #[must_use]
    pub fn page() -> Self {
        Self::new(LayoutKind::Page { visible_page: 0 })
    }

    /// Overrides the padding for the child at `index`.
    pub fn set_item_padding(&mut self, index: usize, padding: Padding) {
        self.padding_overrides.insert(index, padding);
    }

    /// Overrides the alignment for the child at `index`.
    pub fn set_item_alignment(&mut self, index: usize, alignment: Alignment) {
        self.alignment_overrides.insert(index, alignment);
    }

    /// Resolves the padding for the child at `index`.
    #[must_use]
    pub fn padding_for(&self, index: usize) -> Padding {
        self.padding_overrides
            .get(&index)
            .copied()
            .unwrap_or(self.item_padding)
    }

    /// Resolves the alignment for the child at `index`.
    #[must_use]
    pub fn alignment_for(&self, index: usize) -> Alignment {
        self.alignment_overrides
            .get(&index)
            .copied()
            .unwrap_or(self.item_alignment)
    }
}

#[cfg(test)]
mod tests {
    use super::{LayoutConfig, Orientation};
    use arbor_geometry::{Alignment, Padding};

    #[test]
    fn overrides_fall_back_to_defaults() {
        let mut cfg = LayoutConfig::linear(Orientation::Vertical);
        cfg.item_padding = Padding::uniform(1.0);
        cfg.set_item_padding(1, Padding::new(0.0, 0.0, 0.0, 4.0));

        assert_eq!(cfg.padding_for(0), Padding::uniform(1.0));
        assert_eq!(cfg.padding_for(1).left, 4.0);
        assert_eq!(cfg.padding_for(2), Padding::uniform(1.0));

        cfg.set_item_alignment(0, Alignment::parse("top-left").unwrap());
        assert_eq!(cfg.alignment_for(0), Alignment::parse("top-left").unwrap());
        assert_eq!(cfg.alignment_for(5), Alignment::default());
    }
}
