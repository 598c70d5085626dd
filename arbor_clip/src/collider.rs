// Copyright 2026 the Arbor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Collision-shape projection: the visible portion of a node as a 2D
//! axis-aligned box in the node's unscaled content-local space.

use arbor_geometry::{Aabb, Bounding};
use arbor_node::{NodeFlags, NodeId, NodeTree};
use glam::{Vec2, Vec3};

/// An axis-aligned collision box in a node's content-local space.
///
/// Hit-testing backends are typically unaware of node scale, so both the
/// size and the center are expressed in unscaled local units.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CollisionShape {
    /// Box center, relative to the node's content origin.
    pub center: Vec3,
    /// Box extents; a fully clipped node has the zero size.
    pub size: Vec3,
}

impl CollisionShape {
    /// The degenerate box of a fully clipped node.
    pub const ZERO: Self = Self {
        center: Vec3::ZERO,
        size: Vec3::ZERO,
    };
}

/// Computes the collision box for `id` under `clip`, given in the node's
/// parent space.
///
/// Returns `None` for stale or invisible nodes, whose shapes must be left
/// untouched. If the node's 3D bounds miss the clip box entirely (for
/// example the node sits in front of or behind the clip's depth range)
/// the result is [`CollisionShape::ZERO`].
#[must_use]
pub fn collision_shape(tree: &NodeTree, id: NodeId, clip: &Aabb) -> Option<CollisionShape> {
    if !tree.is_visible(id) {
        return None;
    }
    let state = tree.state(id)?;
    let node_bounds = tree.bounding(id);
    if node_bounds.intersection(clip).equal_inexact(&Aabb::ZERO) {
        return Some(CollisionShape::ZERO);
    }

    let size = node_bounds.size();
    let content_aligned = state.flags.contains(NodeFlags::CONTENT_ALIGNED);

    // With pivot alignment the footprint is offset so the visual bounds,
    // not the transform origin, are centered; content-aligned nodes keep
    // their content centered already.
    let (pivot_x, pivot_y) = if content_aligned {
        (0.0, 0.0)
    } else {
        (
            -state.alignment.horizontal.center_offset() * size.x,
            -state.alignment.vertical.center_offset() * size.y,
        )
    };

    let scale = state.local_scale;
    let footprint = Bounding::new(
        -size.x / 2.0 * scale.x,
        -size.y / 2.0 * scale.y,
        size.x / 2.0 * scale.x,
        size.y / 2.0 * scale.y,
    )
    .translated(Vec2::new(pivot_x, pivot_y));

    let content_position = state.local_position + state.content_offset;
    let clip_2d = clip.translated(-content_position).to_bounding();
    let visible = footprint.intersection(&clip_2d);

    // Hit-testing is unaware of node scale, so map back to unscaled units;
    // a zero scale collapses the shape rather than dividing by zero.
    let size_x = if scale.x > 0.0 {
        visible.size().x / scale.x
    } else {
        0.0
    };
    let size_y = if scale.y > 0.0 {
        visible.size().y / scale.y
    } else {
        0.0
    };

    let center = if !content_aligned && scale.x > 0.0 && scale.y > 0.0 {
        let c = visible.center();
        Vec3::new(c.x / scale.x, c.y / scale.y, 0.0)
    } else {
        Vec3::ZERO
    };

    Some(CollisionShape {
        center,
        size: Vec3::new(size_x, size_y, 0.0),
    })
}
