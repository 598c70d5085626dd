// Copyright 2026 the Arbor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Linear layout: items stacked along one axis, aligned on the other.
//!
//! The layout's content occupies the first quadrant of its local space:
//! x ∈ [0, width] and y ∈ [0, height], with the first child topmost in a
//! vertical layout and leftmost in a horizontal one.

use alloc::vec;
use alloc::vec::Vec;

use arbor_geometry::Aabb;
use arbor_node::{NodeId, NodeTree};
use glam::{Vec2, Vec3};

use crate::config::{LayoutConfig, Orientation};
use crate::metrics::{ItemInfo, item_info, size_limit, z_range};

/// Main-axis slot offsets for each child, given its measured bounds.
///
/// Each item's span contribution is its size along the main axis plus its
/// resolved padding on both main-axis sides; a zero-size item still
/// contributes its padding. Vertical layouts measure a slot's offset from
/// the layout's bottom edge, so the **last** child sits at offset 0 and
/// the first child carries the largest offset; horizontal layouts run
/// left to right with the first child at 0.
#[must_use]
pub fn offsets(cfg: &LayoutConfig, orientation: Orientation, bounds: &[Aabb]) -> Vec<f32> {
    let span = |index: usize| -> f32 {
        let padding = cfg.padding_for(index);
        let size = bounds[index].size();
        match orientation {
            Orientation::Vertical => size.y + padding.vertical(),
            Orientation::Horizontal => size.x + padding.horizontal(),
        }
    };

    let mut result = vec![0.0; bounds.len()];
    let mut sum = 0.0;
    match orientation {
        Orientation::Vertical => {
            for index in (0..bounds.len()).rev() {
                result[index] = sum;
                sum += span(index);
            }
        }
        Orientation::Horizontal => {
            for index in 0..bounds.len() {
                result[index] = sum;
                sum += span(index);
            }
        }
    }
    result
}

fn content_size(cfg: &LayoutConfig, orientation: Orientation, items: &[ItemInfo]) -> Vec2 {
    let mut sum = 0.0;
    let mut max = 0.0_f32;
    for (index, item) in items.iter().enumerate() {
        let padding = cfg.padding_for(index);
        let (main, cross) = match orientation {
            Orientation::Vertical => (
                item.height + padding.vertical(),
                item.width + padding.horizontal(),
            ),
            Orientation::Horizontal => (
                item.width + padding.horizontal(),
                item.height + padding.vertical(),
            ),
        };
        sum += main;
        max = max.max(cross);
    }
    match orientation {
        Orientation::Vertical => Vec2::new(max, sum),
        Orientation::Horizontal => Vec2::new(sum, max),
    }
}

/// Positions `children` and returns the layout's own bounds.
pub(crate) fn layout(
    tree: &mut NodeTree,
    children: &[NodeId],
    cfg: &LayoutConfig,
    orientation: Orientation,
) -> Aabb {
    let items: Vec<ItemInfo> = children.iter().map(|id| item_info(tree, *id)).collect();
    let content = content_size(cfg, orientation, &items);
    let limit = size_limit(content, cfg.size);
    let bounds: Vec<Aabb> = items.iter().map(|i| i.bounds).collect();
    let slot_offsets = offsets(cfg, orientation, &bounds);

    for (index, (id, item)) in children.iter().zip(&items).enumerate() {
        let padding = cfg.padding_for(index);
        let alignment = cfg.alignment_for(index);

        let (x, y) = match orientation {
            Orientation::Vertical => {
                let x = crate::metrics::align_x(0.0, limit.x, item, padding, alignment);
                // Stacked along y; the item alignment only anchors the
                // whole content run within a larger declared height.
                let anchor = crate::metrics::anchor_y(limit.y - content.y, alignment);
                let y = slot_offsets[index] + padding.bottom + item.height / 2.0 + item.pivot_y
                    + anchor;
                (x, y)
            }
            Orientation::Horizontal => {
                let anchor = crate::metrics::anchor_x(limit.x - content.x, alignment);
                let x = slot_offsets[index] + padding.left + item.width / 2.0 + item.pivot_x
                    + anchor;
                let y = crate::metrics::align_y(0.0, limit.y, item, padding, alignment);
                (x, y)
            }
        };

        let z = tree.state(*id).map_or(0.0, |s| s.local_position.z);
        tree.set_local_position(*id, Vec3::new(x, y, z));
    }

    let (min_z, max_z) = z_range(&items);
    Aabb::new(Vec3::new(0.0, 0.0, min_z), Vec3::new(limit.x, limit.y, max_z))
}

#[cfg(test)]
mod tests {
    use super::offsets;
    use crate::config::{LayoutConfig, Orientation};
    use crate::engine::LayoutEngine;
    use arbor_geometry::{Aabb, Alignment, Bounding, Padding};
    use arbor_node::{NodeState, NodeTree};
    use glam::{Vec2, Vec3};

    fn boxed(b: Bounding) -> Aabb {
        Aabb::new(Vec3::new(b.left, b.bottom, 0.0), Vec3::new(b.right, b.top, 0.0))
    }

    #[test]
    fn vertical_offsets_accumulate_from_the_bottom() {
        let mut cfg = LayoutConfig::linear(Orientation::Vertical);
        cfg.item_padding = Padding::uniform(1.0);
        let bounds = [
            boxed(Bounding::new(1.0, 10.0, 2.0, 15.0)),
            boxed(Bounding::new(-1.0, -7.0, 2.0, 3.0)),
            boxed(Bounding::new(0.0, 0.0, 1.0, 2.0)),
        ];
        assert_eq!(
            offsets(&cfg, Orientation::Vertical, &bounds),
            alloc::vec![16.0, 4.0, 0.0]
        );
    }

    #[test]
    fn horizontal_offsets_accumulate_forward() {
        let mut cfg = LayoutConfig::linear(Orientation::Horizontal);
        cfg.item_padding = Padding::uniform(1.0);
        let bounds = [
            boxed(Bounding::new(1.0, 10.0, 2.0, 15.0)),
            boxed(Bounding::new(-1.0, -7.0, 2.0, 3.0)),
            boxed(Bounding::new(0.0, 0.0, 1.0, 2.0)),
        ];
        assert_eq!(
            offsets(&cfg, Orientation::Horizontal, &bounds),
            alloc::vec![0.0, 3.0, 8.0]
        );
    }

    #[test]
    fn zero_size_item_still_contributes_padding() {
        let mut cfg = LayoutConfig::linear(Orientation::Vertical);
        cfg.item_padding = Padding::uniform(1.0);
        let bounds = [
            boxed(Bounding::new(0.0, 0.0, 1.0, 1.0)),
            boxed(Bounding::ZERO),
            boxed(Bounding::new(0.0, 0.0, 1.0, 1.0)),
        ];
        // Middle slot is padding only: 2 units tall.
        assert_eq!(
            offsets(&cfg, Orientation::Vertical, &bounds),
            alloc::vec![5.0, 3.0, 0.0]
        );
    }

    #[test]
    fn vertical_layout_stacks_first_child_on_top() {
        let mut tree = NodeTree::new();
        let root = tree.insert(NodeState::default(), None);
        let first = tree.insert(
            NodeState {
                content_bounds: Bounding::new(0.0, 0.0, 1.0, 2.0),
                ..NodeState::default()
            },
            Some(root),
        );
        let second = tree.insert(
            NodeState {
                content_bounds: Bounding::new(0.0, 0.0, 1.0, 2.0),
                ..NodeState::default()
            },
            Some(root),
        );

        let mut engine = LayoutEngine::new();
        engine.set_config(root, LayoutConfig::linear(Orientation::Vertical));
        assert!(engine.layout_if_needed(&mut tree));

        // Each item is 2 tall; the first occupies y ∈ [2, 4], the second
        // y ∈ [0, 2]; both are centered on x within a width-1 layout.
        let first_bounds = tree.bounding(first).to_bounding();
        let second_bounds = tree.bounding(second).to_bounding();
        assert!(first_bounds.equal_inexact(&Bounding::new(0.0, 2.0, 1.0, 4.0)));
        assert!(second_bounds.equal_inexact(&Bounding::new(0.0, 0.0, 1.0, 2.0)));

        // The layout node itself reports the summed content size.
        assert_eq!(engine.size_of(&tree, root), Some(Vec2::new(1.0, 4.0)));
    }

    #[test]
    fn declared_cross_size_right_aligns() {
        let mut tree = NodeTree::new();
        let root = tree.insert(NodeState::default(), None);
        let child = tree.insert(
            NodeState {
                content_bounds: Bounding::new(0.0, 0.0, 1.0, 1.0),
                ..NodeState::default()
            },
            Some(root),
        );

        let mut cfg = LayoutConfig::linear(Orientation::Vertical);
        cfg.size = Vec2::new(4.0, 0.0);
        cfg.item_alignment = Alignment::parse("center-right").unwrap();
        let mut engine = LayoutEngine::new();
        engine.set_config(root, cfg);
        engine.layout_if_needed(&mut tree);

        let bounds = tree.bounding(child).to_bounding();
        assert!(bounds.equal_inexact(&Bounding::new(3.0, 0.0, 4.0, 1.0)));
    }
}
