// Copyright 2026 the Arbor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! An axis-aligned box in 3D.

use glam::Vec3;

use crate::{Bounding, approx_eq};

/// An axis-aligned box in 3D, stored as `min`/`max` corners.
///
/// As with [`Bounding`], the all-zero box is the canonical empty value and
/// is what degenerate operations (an empty intersection, an empty point
/// cloud) return.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Aabb {
    /// Corner with the smallest coordinates.
    pub min: Vec3,
    /// Corner with the largest coordinates.
    pub max: Vec3,
}

impl Aabb {
    /// The canonical empty box.
    pub const ZERO: Self = Self {
        min: Vec3::ZERO,
        max: Vec3::ZERO,
    };

    /// Creates a new box from its two extreme corners.
    #[must_use]
    pub const fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    /// Returns the smallest box containing every point in `points`.
    ///
    /// An empty slice yields [`Aabb::ZERO`].
    #[must_use]
    pub fn from_points(points: &[Vec3]) -> Self {
        let Some((first, rest)) = points.split_first() else {
            return Self::ZERO;
        };
        let mut min = *first;
        let mut max = *first;
        for p in rest {
            min = min.min(*p);
            max = max.max(*p);
        }
        Self { min, max }
    }

    /// Returns the extent along each axis.
    #[must_use]
    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }

    /// Returns the midpoint of the extrema.
    #[must_use]
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) / 2.0
    }

    /// Returns this box moved by `offset`.
    #[must_use]
    pub fn translated(&self, offset: Vec3) -> Self {
        Self {
            min: self.min + offset,
            max: self.max + offset,
        }
    }

    /// Returns this box with both corners multiplied component-wise by
    /// `scale`. Callers are expected to pass non-negative scales.
    #[must_use]
    pub fn scaled(&self, scale: Vec3) -> Self {
        Self {
            min: self.min * scale,
            max: self.max * scale,
        }
    }

    /// Returns the overlap of two boxes.
    ///
    /// If the boxes do not overlap on some axis the result is
    /// [`Aabb::ZERO`], not a box with negative extent.
    #[must_use]
    pub fn intersection(&self, other: &Self) -> Self {
        let min = self.min.max(other.min);
        let max = self.max.min(other.max);
        if min.x > max.x || min.y > max.y || min.z > max.z {
            return Self::ZERO;
        }
        Self { min, max }
    }

    /// Returns the smallest box containing both inputs.
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        Self {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }

    /// Projects to 2D by dropping the z components.
    #[must_use]
    pub fn to_bounding(&self) -> Bounding {
        Bounding::new(self.min.x, self.min.y, self.max.x, self.max.y)
    }

    /// Per-component comparison with tolerance [`EPSILON`](crate::EPSILON).
    #[must_use]
    pub fn equal_inexact(&self, other: &Self) -> bool {
        approx_eq(self.min.x, other.min.x)
            && approx_eq(self.min.y, other.min.y)
            && approx_eq(self.min.z, other.min.z)
            && approx_eq(self.max.x, other.max.x)
            && approx_eq(self.max.y, other.max.y)
            && approx_eq(self.max.z, other.max.z)
    }
}
