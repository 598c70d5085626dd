// Copyright 2026 the Arbor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A vertical list inside a clipping viewport: layout + clip end to end.
//!
//! This example shows how to combine:
//! - `arbor_node` for the node tree and bounds,
//! - `arbor_layout` for the linear layout pass,
//! - `arbor_clip` to derive render and collision clipping for the
//!   viewport's content.
//!
//! Run:
//! - `cargo run -p arbor_demos --example scrolling_list`

use arbor_clip::{ClipSink, RenderClip, apply_clip_bounds};
use arbor_geometry::{Aabb, Bounding};
use arbor_layout::{LayoutConfig, LayoutEngine, Orientation};
use arbor_node::{NodeId, NodeState, NodeTree};
use glam::Vec3;

/// A sink that prints what a host renderer would apply.
struct PrintSink;

impl ClipSink for PrintSink {
    fn apply_render_clip(&mut self, node: NodeId, clip: RenderClip) {
        println!(
            "  render clip {node:?}: left {:.2} right {:.2} bottom {:.2} top {:.2}",
            clip.left, clip.right, clip.bottom, clip.top
        );
    }

    fn apply_collision_shape(&mut self, node: NodeId, center: Vec3, size: Vec3) {
        println!("  collision   {node:?}: center {center:?} size {size:?}");
    }
}

fn main() {
    let mut tree = NodeTree::new();

    // A viewport that clips everything outside a 1 × 1 × 0.2 window.
    let viewport = tree.insert(
        NodeState {
            clip_volume: Some(Aabb::new(
                Vec3::new(0.0, 0.0, -0.1),
                Vec3::new(1.0, 1.0, 0.1),
            )),
            ..NodeState::default()
        },
        None,
    );

    // A list of five half-unit-tall rows; the lower two fit the viewport,
    // the rest hang above it until the host scrolls the list down.
    let list = tree.insert(NodeState::default(), Some(viewport));
    for _ in 0..5 {
        tree.insert(
            NodeState {
                content_bounds: Bounding::new(0.0, 0.0, 1.0, 0.5),
                ..NodeState::default()
            },
            Some(list),
        );
    }

    let mut engine = LayoutEngine::new();
    engine.set_config(list, LayoutConfig::linear(Orientation::Vertical));
    engine.layout_if_needed(&mut tree);

    let size = engine.size_of(&tree, list).unwrap();
    println!("list laid out at {} x {}", size.x, size.y);
    for (index, row) in tree.children(list).iter().enumerate() {
        let bounds = tree.bounding(*row).to_bounding();
        println!(
            "  row {index}: y in [{:.2}, {:.2}]",
            bounds.bottom, bounds.top
        );
    }

    println!("clipping to the viewport:");
    apply_clip_bounds(&tree, viewport, None, &mut PrintSink);

    // Scroll: shift the list down one row and rerun both passes.
    tree.set_local_position(list, Vec3::new(0.0, -0.5, 0.0));
    engine.layout_if_needed(&mut tree);
    println!("after scrolling down one row:");
    apply_clip_bounds(&tree, viewport, None, &mut PrintSink);
}
