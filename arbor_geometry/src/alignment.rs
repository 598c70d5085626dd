// Copyright 2026 the Arbor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Named pivot placement with per-axis center-offset factors.

/// Horizontal half of an [`Alignment`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HorizontalAlignment {
    /// Pivot at the left edge.
    Left,
    /// Pivot at the horizontal center.
    #[default]
    Center,
    /// Pivot at the right edge.
    Right,
}

impl HorizontalAlignment {
    /// How far the pivot sits from the center, as a fraction of width.
    #[must_use]
    pub const fn center_offset(self) -> f32 {
        match self {
            Self::Left => -0.5,
            Self::Center => 0.0,
            Self::Right => 0.5,
        }
    }
}

/// Vertical half of an [`Alignment`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum VerticalAlignment {
    /// Pivot at the top edge.
    Top,
    /// Pivot at the vertical center.
    #[default]
    Center,
    /// Pivot at the bottom edge.
    Bottom,
}

impl VerticalAlignment {
    /// How far the pivot sits from the center, as a fraction of height.
    #[must_use]
    pub const fn center_offset(self) -> f32 {
        match self {
            Self::Top => 0.5,
            Self::Center => 0.0,
            Self::Bottom => -0.5,
        }
    }
}

/// A named pivot placement, e.g. `"bottom-center"`.
///
/// The default is center-center, which is also what unrecognized input
/// resolves to at the property layer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Alignment {
    /// Vertical placement.
    pub vertical: VerticalAlignment,
    /// Horizontal placement.
    pub horizontal: HorizontalAlignment,
}

impl Alignment {
    /// Creates an alignment from its two halves.
    #[must_use]
    pub const fn new(vertical: VerticalAlignment, horizontal: HorizontalAlignment) -> Self {
        Self {
            vertical,
            horizontal,
        }
    }

    /// Parses a `"<vertical>-<horizontal>"` string such as
    /// `"bottom-center"` or `"top-left"`.
    ///
    /// Returns `None` for anything else; callers decide whether that means
    /// "keep the previous value" or "use the default".
    #[must_use]
    pub fn parse(text: &str) -> Option<Self> {
        let (vertical, horizontal) = text.split_once('-')?;
        let vertical = match vertical {
            "top" => VerticalAlignment::Top,
            "center" => VerticalAlignment::Center,
            "bottom" => VerticalAlignment::Bottom,
            _ => return None,
        };
        let horizontal = match horizontal {
            "left" => HorizontalAlignment::Left,
            "center" => HorizontalAlignment::Center,
            "right" => HorizontalAlignment::Right,
            _ => return None,
        };
        Some(Self {
            vertical,
            horizontal,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::{Alignment, HorizontalAlignment, VerticalAlignment};

    #[test]
    fn center_offsets() {
        assert_eq!(HorizontalAlignment::Left.center_offset(), -0.5);
        assert_eq!(HorizontalAlignment::Center.center_offset(), 0.0);
        assert_eq!(HorizontalAlignment::Right.center_offset(), 0.5);
        assert_eq!(VerticalAlignment::Top.center_offset(), 0.5);
        assert_eq!(VerticalAlignment::Center.center_offset(), 0.0);
        assert_eq!(VerticalAlignment::Bottom.center_offset(), -0.5);
    }

    #[test]
    fn parse_valid() {
        assert_eq!(
            Alignment::parse("bottom-center"),
            Some(Alignment::new(
                VerticalAlignment::Bottom,
                HorizontalAlignment::Center
            ))
        );
        assert_eq!(
            Alignment::parse("top-left"),
            Some(Alignment::new(
                VerticalAlignment::Top,
                HorizontalAlignment::Left
            ))
        );
    }

    #[test]
    fn parse_rejects_malformed() {
        assert_eq!(Alignment::parse(""), None);
        assert_eq!(Alignment::parse("center"), None);
        assert_eq!(Alignment::parse("middle-center"), None);
        assert_eq!(Alignment::parse("top-up"), None);
    }

    #[test]
    fn default_is_center_center() {
        assert_eq!(
            Alignment::default(),
            Alignment::new(VerticalAlignment::Center, HorizontalAlignment::Center)
        );
    }
}
