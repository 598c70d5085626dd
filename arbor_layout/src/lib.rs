// Copyright 2026 the Arbor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Arbor Layout: layout managers and the layout pass driver.
//!
//! This crate arranges the children of nodes in an `arbor_node` tree:
//!
//! - [`LayoutEngine`]: owns per-node [`LayoutConfig`]s and runs
//!   dirty-driven passes, post order, publishing each layout's extents as
//!   its content bounds.
//! - [`LayoutKind::Linear`]: items stacked along one axis, aligned on the
//!   other.
//! - [`LayoutKind::Grid`]: uniform cells filled in row-major order, with
//!   track counts derived from whichever of columns/rows is declared.
//! - [`LayoutKind::Rect`]: a single child aligned within a rectangle and
//!   uniformly downscaled when it would overflow a declared size.
//! - [`LayoutKind::Page`]: only the child at the visible index is shown
//!   and laid out.
//!
//! Sizes follow one rule everywhere: a declared extent ≤ 0 means "grow to
//! fit content" on that axis. [`PropValue`] lets hosts drive all of this
//! from untyped scene descriptions.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod config;
mod engine;
mod grid;
mod linear;
mod metrics;
mod page;
mod props;
mod rect;

pub use config::{LayoutConfig, LayoutKind, Orientation};
pub use engine::LayoutEngine;
pub use props::PropValue;

pub use grid::tracks;
pub use linear::offsets;
pub use rect::fit_scale;
