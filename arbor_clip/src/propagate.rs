// Copyright 2026 the Arbor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Top-down clip propagation over the node tree.

use arbor_geometry::Aabb;
use arbor_node::{NodeId, NodeTree};
use glam::Vec3;

use crate::collider::collision_shape;
use crate::render::{RenderClip, render_clip};

/// Receives the per-node clip projections as a propagation pass visits
/// the tree.
///
/// Implementations forward to the host renderer and hit-testing backend.
pub trait ClipSink {
    /// Called for every visited node; unclipped nodes receive
    /// [`RenderClip::DEFAULT`].
    fn apply_render_clip(&mut self, node: NodeId, clip: RenderClip);

    /// Called for visible nodes under an active clip box.
    fn apply_collision_shape(&mut self, node: NodeId, center: Vec3, size: Vec3);
}

/// Applies `clip` (in the parent space of `id`) to the subtree rooted at
/// `id`, emitting projections into `sink`.
///
/// A node's children inherit the intersection of the node's own clip
/// volume with the incoming box carried into the node's local frame:
/// translated against the node's content position and divided by its
/// scale (a non-positive scale component collapses that axis to zero
/// rather than inverting). Passing `None` at the root resets every
/// subtree node to the unclipped defaults.
pub fn apply_clip_bounds<S: ClipSink>(
    tree: &NodeTree,
    id: NodeId,
    clip: Option<&Aabb>,
    sink: &mut S,
) {
    let Some(state) = tree.state(id) else {
        return;
    };

    match clip {
        Some(clip) => {
            let node_bounds = tree.bounding(id).to_bounding();
            sink.apply_render_clip(id, render_clip(&node_bounds, &clip.to_bounding()));
            if let Some(shape) = collision_shape(tree, id, clip) {
                sink.apply_collision_shape(id, shape.center, shape.size);
            }
        }
        None => sink.apply_render_clip(id, RenderClip::DEFAULT),
    }

    // Carry the box into this node's local frame before intersecting it
    // with the node's own clip volume.
    let inherited = clip.map(|c| {
        let scale = state.local_scale;
        let inverse = Vec3::new(
            if scale.x > 0.0 { 1.0 / scale.x } else { 0.0 },
            if scale.y > 0.0 { 1.0 / scale.y } else { 0.0 },
            if scale.z > 0.0 { 1.0 / scale.z } else { 0.0 },
        );
        c.translated(-(state.local_position + state.content_offset))
            .scaled(inverse)
    });
    let effective = match (state.clip_volume, inherited) {
        (Some(own), Some(inherited)) => Some(own.intersection(&inherited)),
        (Some(own), None) => Some(own),
        (None, inherited) => inherited,
    };

    for child in tree.children(id) {
        apply_clip_bounds(tree, *child, effective.as_ref(), sink);
    }
}
