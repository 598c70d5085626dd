// Copyright 2026 the Arbor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Page layout: an ordered set of candidate children of which only the
//! one at the visible index is shown and laid out.
//!
//! Switching pages hides the previous child and shows the new one; hidden
//! children keep their state and are not laid out until they become
//! visible. An out-of-range index (including negative) shows nothing.

use arbor_geometry::Aabb;
use arbor_node::{NodeId, NodeTree};
use glam::Vec3;

use crate::config::{LayoutConfig, Orientation};
use crate::linear;

/// Shows the visible child, hides the rest, and returns the layout's own
/// bounds.
pub(crate) fn layout(
    tree: &mut NodeTree,
    children: &[NodeId],
    cfg: &LayoutConfig,
    visible_page: i32,
) -> Aabb {
    let visible = usize::try_from(visible_page)
        .ok()
        .filter(|index| *index < children.len());

    for (index, id) in children.iter().enumerate() {
        tree.set_visible(*id, Some(index) == visible);
    }

    match visible {
        // The active page is positioned like a single-item vertical run.
        Some(index) => linear::layout(tree, &children[index..=index], cfg, Orientation::Vertical),
        None => Aabb::new(
            Vec3::ZERO,
            Vec3::new(cfg.size.x.max(0.0), cfg.size.y.max(0.0), 0.0),
        ),
    }
}

#[cfg(test)]
mod tests {
    use crate::config::LayoutConfig;
    use crate::engine::LayoutEngine;
    use arbor_geometry::Bounding;
    use arbor_node::{NodeId, NodeState, NodeTree};
    use glam::Vec2;

    fn page_setup() -> (NodeTree, NodeId, alloc::vec::Vec<NodeId>) {
        let mut tree = NodeTree::new();
        let root = tree.insert(NodeState::default(), None);
        let children: alloc::vec::Vec<NodeId> = (0..3)
            .map(|i| {
                tree.insert(
                    NodeState {
                        content_bounds: Bounding::new(0.0, 0.0, 1.0 + i as f32, 1.0),
                        ..NodeState::default()
                    },
                    Some(root),
                )
            })
            .collect();
        (tree, root, children)
    }

    #[test]
    fn only_visible_page_is_shown() {
        let (mut tree, root, children) = page_setup();
        let mut engine = LayoutEngine::new();
        engine.set_config(root, LayoutConfig::page());
        engine.layout_if_needed(&mut tree);

        assert!(tree.is_visible(children[0]));
        assert!(!tree.is_visible(children[1]));
        assert!(!tree.is_visible(children[2]));
        // The layout adopts the visible child's size.
        assert_eq!(engine.size_of(&tree, root), Some(Vec2::new(1.0, 1.0)));
    }

    #[test]
    fn switching_pages_swaps_visibility_and_relayouts() {
        let (mut tree, root, children) = page_setup();
        let mut engine = LayoutEngine::new();
        engine.set_config(root, LayoutConfig::page());
        engine.layout_if_needed(&mut tree);

        engine.set_visible_page(&mut tree, root, 2);
        assert!(engine.layout_if_needed(&mut tree));

        assert!(!tree.is_visible(children[0]));
        assert!(tree.is_visible(children[2]));
        assert_eq!(engine.size_of(&tree, root), Some(Vec2::new(3.0, 1.0)));
    }

    #[test]
    fn out_of_range_page_shows_nothing() {
        let (mut tree, root, children) = page_setup();
        let mut engine = LayoutEngine::new();
        engine.set_config(root, LayoutConfig::page());
        engine.set_visible_page(&mut tree, root, 7);
        engine.layout_if_needed(&mut tree);
        assert!(children.iter().all(|c| !tree.is_visible(*c)));
        assert_eq!(engine.size_of(&tree, root), Some(Vec2::ZERO));

        engine.set_visible_page(&mut tree, root, -1);
        engine.layout_if_needed(&mut tree);
        assert!(children.iter().all(|c| !tree.is_visible(*c)));
    }
}
