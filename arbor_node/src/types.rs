// Copyright 2026 the Arbor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types for the node tree: identifiers, flags, and local node state.

use arbor_geometry::{Aabb, Alignment, Bounding};
use glam::{Quat, Vec3};

/// Identifier for a node in the tree (generational).
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct NodeId(pub(crate) u32, pub(crate) u32);

impl NodeId {
    pub(crate) const fn new(idx: u32, generation: u32) -> Self {
        Self(idx, generation)
    }

    pub(crate) const fn idx(self) -> usize {
        self.0 as usize
    }
}

bitflags::bitflags! {
    /// Node flags controlling visibility and content alignment.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct NodeFlags: u8 {
        /// Node is visible (participates in layout measurement and clipping).
        const VISIBLE         = 0b0000_0001;
        /// Node aligns its renderable content through the content sub-offset
        /// rather than by shifting its own pivot.
        const CONTENT_ALIGNED = 0b0000_0010;
    }
}

impl Default for NodeFlags {
    fn default() -> Self {
        Self::VISIBLE
    }
}

/// What a node's own content bounds are derived from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NodeKind {
    /// Intrinsic content bounds are fed by the host (text metrics, image
    /// dimensions) or published by a layout manager.
    #[default]
    Leaf,
    /// Content bounds are the union of the children's bounds; children are
    /// positioned freely, not by a layout manager.
    Group,
}

/// Local state for a node.
#[derive(Clone, Debug)]
pub struct NodeState {
    /// Position relative to parent space.
    pub local_position: Vec3,
    /// Rotation relative to parent space.
    pub local_rotation: Quat,
    /// Scale relative to parent space.
    pub local_scale: Vec3,
    /// Pivot placement used when a parent slot aligns this node.
    pub alignment: Alignment,
    /// Offset of the renderable content relative to the node's own origin.
    pub content_offset: Vec3,
    /// Intrinsic content bounds in content-local space, before any
    /// transform. Ignored for [`NodeKind::Group`].
    pub content_bounds: Bounding,
    /// Declared clip volume, if this node is a clipping container.
    pub clip_volume: Option<Aabb>,
    /// Visibility and alignment flags.
    pub flags: NodeFlags,
    /// How content bounds are derived.
    pub kind: NodeKind,
}

impl Default for NodeState {
    fn default() -> Self {
        Self {
            local_position: Vec3::ZERO,
            local_rotation: Quat::IDENTITY,
            local_scale: Vec3::ONE,
            alignment: Alignment::default(),
            content_offset: Vec3::ZERO,
            content_bounds: Bounding::ZERO,
            clip_volume: None,
            flags: NodeFlags::default(),
            kind: NodeKind::default(),
        }
    }
}
