// Copyright 2026 the Arbor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Arbor Clip: clip propagation and its two projections.
//!
//! When a node in an `arbor_node` tree declares a clip volume, everything
//! beneath it should render and hit-test as if cut to that box. This
//! crate walks a subtree with [`apply_clip_bounds`], carrying the
//! effective clip box (own volume intersected with whatever an ancestor
//! imposed) into each node's local frame, and emits two independent
//! projections through a [`ClipSink`]:
//!
//! - [`RenderClip`]: the clip window in the node's content-normalized
//!   shader space, for material-level fragment clipping.
//! - [`CollisionShape`]: the visible portion of the node as an unscaled
//!   content-local box, for hit-testing backends that ignore node scale.
//!
//! Propagation is read-only over the tree; it is typically run right
//! after a layout pass, since repositioned children change what falls
//! inside an ancestor's volume.
//!
//! This crate is `no_std`.

#![no_std]

#[cfg(test)]
extern crate alloc;

mod collider;
mod propagate;
mod render;

pub use collider::{CollisionShape, collision_shape};
pub use propagate::{ClipSink, apply_clip_bounds};
pub use render::{RenderClip, render_clip};
