// Copyright 2026 the Arbor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Arbor Node: the scene-node arena for the Arbor layout engine.
//!
//! This crate owns the tree of transform-bearing nodes that the layout and
//! clipping crates operate on:
//!
//! - [`NodeTree`]: a generational slot arena with ordered children,
//!   non-owning parent back-references, and stale-id detection.
//! - [`NodeState`]: per-node local transform (position, quaternion
//!   rotation, non-uniform scale), pivot [`Alignment`], content sub-offset,
//!   intrinsic content bounds, optional clip volume, and [`NodeFlags`].
//! - Bounds derivation: [`NodeTree::bounding`] (parent space, rotation
//!   aware), [`NodeTree::content_bounding`] (local space), and
//!   [`NodeTree::sum_bounds`] (minimum 2D envelope of a node list).
//!
//! ## Dirty tracking
//!
//! Every setter compares against the stored value and, on change, marks
//! the node and its ancestors as needing layout. A layout driver (see the
//! `arbor_layout` crate) consumes and clears the flags once per update
//! cycle, bracketed by [`NodeTree::begin_layout_pass`] /
//! [`NodeTree::end_layout_pass`]. Structural mutation between those two
//! calls is disallowed and debug-asserted; hosts must defer it.
//!
//! ## Who feeds content bounds
//!
//! Hosts push intrinsic sizes for leaves via
//! [`NodeTree::set_content_bounds`] whenever their native measurement
//! changes (text metrics, image dimensions); group nodes derive bounds
//! from their children; layout nodes have theirs published by the layout
//! driver. The engine never calls back into the host.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod bounds;
mod tree;
mod types;

pub use tree::NodeTree;
pub use types::{NodeFlags, NodeId, NodeKind, NodeState};

pub use arbor_geometry as geometry;
