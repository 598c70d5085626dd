// Copyright 2026 the Arbor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Arbor Geometry: primitives for spatial (AR/3D) UI layout.
//!
//! This crate provides the small, allocation-free value types that the rest
//! of the Arbor workspace is defined over:
//!
//! - [`Bounding`]: an axis-aligned rectangle in a local 2D plane, stored as
//!   `left`/`bottom`/`right`/`top` edges with y pointing up.
//! - [`Aabb`]: an axis-aligned box in 3D, stored as `min`/`max` corners.
//! - [`Alignment`]: a named pivot placement (for example `"bottom-center"`)
//!   whose axes each carry a center-offset factor in `{-0.5, 0.0, 0.5}`.
//! - [`Padding`]: four-sided spacing applied around a layout slot.
//!
//! Two conventions hold everywhere:
//!
//! - The canonical "empty" value of a bound or box is the all-zero value,
//!   used both for "no content" and for "no intersection". Degenerate
//!   geometry never produces NaN or negative extents in published results.
//! - Equality is epsilon-tolerant: [`Bounding::equal_inexact`] and
//!   [`Aabb::equal_inexact`] compare per component with [`EPSILON`].
//!
//! This crate is `no_std`.

#![no_std]

mod aabb;
mod alignment;
mod bounding;
mod padding;

pub use aabb::Aabb;
pub use alignment::{Alignment, HorizontalAlignment, VerticalAlignment};
pub use bounding::Bounding;
pub use padding::Padding;

/// Tolerance used by the `equal_inexact` comparisons.
pub const EPSILON: f32 = 1e-5;

/// Returns `true` if `a` and `b` differ by less than [`EPSILON`].
#[inline]
#[must_use]
pub fn approx_eq(a: f32, b: f32) -> bool {
    let d = a - b;
    -EPSILON < d && d < EPSILON
}
