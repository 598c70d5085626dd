// Copyright 2026 the Arbor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! An axis-aligned rectangle in a local 2D plane.

use glam::Vec2;

use crate::approx_eq;

/// An axis-aligned rectangle in a local 2D plane, y up.
///
/// The all-zero rectangle is the canonical empty value: it stands in for
/// "no content" as well as "no intersection". Construction does not
/// normalize edges; a transient `left > right` is permitted mid-computation
/// but is never published as a final size.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Bounding {
    /// Left edge (minimum x).
    pub left: f32,
    /// Bottom edge (minimum y).
    pub bottom: f32,
    /// Right edge (maximum x).
    pub right: f32,
    /// Top edge (maximum y).
    pub top: f32,
}

impl Bounding {
    /// The canonical empty rectangle.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    /// Creates a new rectangle from its four edges.
    #[must_use]
    pub const fn new(left: f32, bottom: f32, right: f32, top: f32) -> Self {
        Self {
            left,
            bottom,
            right,
            top,
        }
    }

    /// Returns `(width, height)`.
    #[must_use]
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.right - self.left, self.top - self.bottom)
    }

    /// Returns the midpoint of the extrema.
    #[must_use]
    pub fn center(&self) -> Vec2 {
        Vec2::new(
            (self.left + self.right) / 2.0,
            (self.bottom + self.top) / 2.0,
        )
    }

    /// Returns this rectangle moved by `offset`.
    #[must_use]
    pub fn translated(&self, offset: Vec2) -> Self {
        Self::new(
            self.left + offset.x,
            self.bottom + offset.y,
            self.right + offset.x,
            self.top + offset.y,
        )
    }

    /// Returns this rectangle with every edge multiplied component-wise.
    #[must_use]
    pub fn scaled(&self, sx: f32, sy: f32) -> Self {
        Self::new(
            self.left * sx,
            self.bottom * sy,
            self.right * sx,
            self.top * sy,
        )
    }

    /// Returns the overlap of two rectangles.
    ///
    /// If the rectangles do not overlap on some axis the result is
    /// [`Bounding::ZERO`], not a rectangle with negative extent.
    #[must_use]
    pub fn intersection(&self, other: &Self) -> Self {
        let left = self.left.max(other.left);
        let bottom = self.bottom.max(other.bottom);
        let right = self.right.min(other.right);
        let top = self.top.min(other.top);
        if left > right || bottom > top {
            return Self::ZERO;
        }
        Self::new(left, bottom, right, top)
    }

    /// Returns the smallest rectangle containing both inputs.
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        Self::new(
            self.left.min(other.left),
            self.bottom.min(other.bottom),
            self.right.max(other.right),
            self.top.max(other.top),
        )
    }

    /// Per-component comparison with tolerance [`EPSILON`](crate::EPSILON).
    #[must_use]
    pub fn equal_inexact(&self, other: &Self) -> bool {
        approx_eq(self.left, other.left)
            && approx_eq(self.bottom, other.bottom)
            && approx_eq(self.right, other.right)
            && approx_eq(self.top, other.top)
    }
}

#[cfg(test)]
mod tests {
    use super::Bounding;
    use glam::Vec2;

    #[test]
    fn size_and_center() {
        let b = Bounding::new(-1.0, -2.0, 3.0, 6.0);
        assert_eq!(b.size(), Vec2::new(4.0, 8.0));
        assert_eq!(b.center(), Vec2::new(1.0, 2.0));
    }

    #[test]
    fn translate_then_scale() {
        let b = Bounding::new(1.0, 1.0, 2.0, 3.0);
        let moved = b.translated(Vec2::new(-1.0, 2.0));
        assert_eq!(moved, Bounding::new(0.0, 3.0, 1.0, 5.0));
        let scaled = moved.scaled(2.0, 0.5);
        assert_eq!(scaled, Bounding::new(0.0, 1.5, 2.0, 2.5));
    }

    #[test]
    fn intersection_overlapping() {
        let a = Bounding::new(0.0, 0.0, 4.0, 4.0);
        let b = Bounding::new(2.0, 1.0, 6.0, 3.0);
        let i = a.intersection(&b);
        assert_eq!(i, Bounding::new(2.0, 1.0, 4.0, 3.0));
    }

    #[test]
    fn intersection_disjoint_is_zero_and_commutative() {
        let a = Bounding::new(0.0, 0.0, 1.0, 1.0);
        let b = Bounding::new(2.0, 2.0, 3.0, 3.0);
        assert_eq!(a.intersection(&b), Bounding::ZERO);
        assert_eq!(b.intersection(&a), Bounding::ZERO);

        let c = Bounding::new(0.5, -1.0, 2.5, 0.5);
        assert_eq!(a.intersection(&c), c.intersection(&a));
    }

    #[test]
    fn equal_inexact_tolerance() {
        let a = Bounding::new(-2.0, 1.0, -0.5, 1.0);
        let near = Bounding::new(-2.000007, 1.0, -0.5, 1.0);
        let far = Bounding::new(-2.07, 1.0, -0.5, 1.0);
        assert!(a.equal_inexact(&near));
        assert!(!a.equal_inexact(&far));
    }

    #[test]
    fn union_encloses_both() {
        let a = Bounding::new(0.0, 0.0, 1.0, 1.0);
        let b = Bounding::new(-2.0, 0.5, 0.5, 3.0);
        assert_eq!(a.union(&b), Bounding::new(-2.0, 0.0, 1.0, 3.0));
    }
}
