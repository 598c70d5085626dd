// Copyright 2026 the Arbor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The layout driver: owns per-node configurations and runs dirty-driven
//! layout passes over a [`NodeTree`].

use alloc::vec::Vec;

use arbor_node::{NodeId, NodeTree};
use glam::Vec2;
use hashbrown::HashMap;

use crate::config::{LayoutConfig, LayoutKind};
use crate::{grid, linear, page, rect};

/// Runs layout over a [`NodeTree`].
///
/// Any node can be given a [`LayoutConfig`]; a pass visits dirty subtrees
/// in post order so inner layouts are measured before the layouts that
/// contain them. Each configured node arranges its children and publishes
/// its own extents as its content bounds, which is what a parent layout
/// (or [`LayoutEngine::size_of`]) observes.
#[derive(Debug, Default)]
pub struct LayoutEngine {
    configs: HashMap<NodeId, LayoutConfig>,
}

impl LayoutEngine {
    /// Creates an engine with no configured nodes.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Assigns a layout configuration to `id`, replacing any previous one.
    pub fn set_config(&mut self, id: NodeId, cfg: LayoutConfig) {
        self.configs.insert(id, cfg);
    }

    /// Returns the configuration assigned to `id`, if any.
    #[must_use]
    pub fn config(&self, id: NodeId) -> Option<&LayoutConfig> {
        self.configs.get(&id)
    }

    /// Returns a mutable reference to the configuration assigned to `id`.
    ///
    /// Changes made through this do not mark the node dirty; call
    /// [`NodeTree::mark_dirty`] afterwards.
    pub fn config_mut(&mut self, id: NodeId) -> Option<&mut LayoutConfig> {
        self.configs.get_mut(&id)
    }

    /// Removes and returns the configuration assigned to `id`.
    pub fn remove_config(&mut self, id: NodeId) -> Option<LayoutConfig> {
        self.configs.remove(&id)
    }

    /// Switches a page layout to the child at `page` and marks the node
    /// for relayout. No-op for non-page nodes or an unchanged index.
    pub fn set_visible_page(&mut self, tree: &mut NodeTree, id: NodeId, page: i32) {
        if let Some(cfg) = self.configs.get_mut(&id) {
            if let LayoutKind::Page { visible_page } = &mut cfg.kind {
                if *visible_page != page {
                    *visible_page = page;
                    tree.mark_dirty(id);
                }
            }
        }
    }

    /// Runs a layout pass if any root is dirty. Returns whether a pass ran.
    ///
    /// After the pass every visited node is clean; the pass itself dirties
    /// nodes as it repositions them, which must not carry into the next
    /// frame.
    pub fn layout_if_needed(&self, tree: &mut NodeTree) -> bool {
        let roots = tree.roots();
        if !roots.iter().any(|root| tree.needs_layout(*root)) {
            return false;
        }
        tree.begin_layout_pass();
        for root in &roots {
            self.layout_node(tree, *root);
        }
        tree.end_layout_pass();
        for root in &roots {
            clear_subtree(tree, *root);
        }
        true
    }

    fn layout_node(&self, tree: &mut NodeTree, id: NodeId) {
        if !tree.needs_layout(id) {
            return;
        }
        let children: Vec<NodeId> = tree.children(id).to_vec();
        // Children first, so inner layouts are measured before this one
        // asks for their bounds.
        for child in &children {
            self.layout_node(tree, *child);
        }
        let Some(cfg) = self.configs.get(&id) else {
            return;
        };
        let bounds = match cfg.kind {
            // A page manages visibility itself and always sees every child.
            LayoutKind::Page { visible_page } => page::layout(tree, &children, cfg, visible_page),
            kind => {
                let slots: Vec<NodeId> = if cfg.skip_invisible {
                    children
                        .iter()
                        .copied()
                        .filter(|child| tree.is_visible(*child))
                        .collect()
                } else {
                    children
                };
                match kind {
                    LayoutKind::Linear(orientation) => {
                        linear::layout(tree, &slots, cfg, orientation)
                    }
                    LayoutKind::Grid { .. } => grid::layout(tree, &slots, cfg),
                    LayoutKind::Rect => rect::layout(tree, &slots, cfg),
                    LayoutKind::Page { .. } => unreachable!(),
                }
            }
        };
        tree.set_content_bounds(id, bounds.to_bounding());
    }

    /// The laid-out 2D size of `id`, from its content bounds.
    ///
    /// For a configured node this is the size its manager published in the
    /// last pass. `None` for stale ids.
    #[must_use]
    pub fn size_of(&self, tree: &NodeTree, id: NodeId) -> Option<Vec2> {
        tree.state(id)?;
        let size = tree.content_bounding(id).size();
        Some(Vec2::new(size.x, size.y))
    }
}

fn clear_subtree(tree: &mut NodeTree, id: NodeId) {
    if !tree.needs_layout(id) {
        return;
    }
    tree.clear_needs_layout(id);
    let children: Vec<NodeId> = tree.children(id).to_vec();
    for child in children {
        clear_subtree(tree, child);
    }
}

#[cfg(test)]
mod tests {
    use super::LayoutEngine;
    use crate::config::{LayoutConfig, Orientation};
    use arbor_geometry::Bounding;
    use arbor_node::{NodeId, NodeState, NodeTree};
    use glam::{Vec2, Vec3};

    fn unit_child(tree: &mut NodeTree, parent: NodeId) -> NodeId {
        tree.insert(
            NodeState {
                content_bounds: Bounding::new(0.0, 0.0, 1.0, 1.0),
                ..NodeState::default()
            },
            Some(parent),
        )
    }

    #[test]
    fn pass_runs_only_while_dirty() {
        let mut tree = NodeTree::new();
        let root = tree.insert(NodeState::default(), None);
        let child = unit_child(&mut tree, root);

        let engine = {
            let mut engine = LayoutEngine::new();
            engine.set_config(root, LayoutConfig::linear(Orientation::Vertical));
            engine
        };
        assert!(engine.layout_if_needed(&mut tree));
        // The pass leaves the tree clean, including nodes it repositioned.
        assert!(!engine.layout_if_needed(&mut tree));

        tree.set_content_bounds(child, Bounding::new(0.0, 0.0, 2.0, 2.0));
        assert!(engine.layout_if_needed(&mut tree));
        assert_eq!(engine.size_of(&tree, root), Some(Vec2::new(2.0, 2.0)));
    }

    #[test]
    fn nested_layouts_resolve_inner_first() {
        let mut tree = NodeTree::new();
        let outer = tree.insert(NodeState::default(), None);
        let inner = tree.insert(NodeState::default(), Some(outer));
        unit_child(&mut tree, inner);
        unit_child(&mut tree, inner);
        unit_child(&mut tree, outer);

        let mut engine = LayoutEngine::new();
        engine.set_config(outer, LayoutConfig::linear(Orientation::Vertical));
        engine.set_config(inner, LayoutConfig::linear(Orientation::Horizontal));
        engine.layout_if_needed(&mut tree);

        // The inner run is 2 wide × 1 tall; the outer stack is as wide as
        // its widest item and two items tall.
        assert_eq!(engine.size_of(&tree, inner), Some(Vec2::new(2.0, 1.0)));
        assert_eq!(engine.size_of(&tree, outer), Some(Vec2::new(2.0, 2.0)));
    }

    #[test]
    fn clean_siblings_are_not_revisited() {
        let mut tree = NodeTree::new();
        let root_a = tree.insert(NodeState::default(), None);
        unit_child(&mut tree, root_a);
        let root_b = tree.insert(NodeState::default(), None);
        let b_child = unit_child(&mut tree, root_b);

        let mut engine = LayoutEngine::new();
        engine.set_config(root_a, LayoutConfig::linear(Orientation::Vertical));
        engine.set_config(root_b, LayoutConfig::linear(Orientation::Vertical));
        engine.layout_if_needed(&mut tree);

        // Only the second root is dirtied; the first keeps its position
        // even after we park the moved child somewhere a relayout would
        // undo.
        tree.set_content_bounds(b_child, Bounding::new(0.0, 0.0, 3.0, 3.0));
        tree.set_local_position(b_child, Vec3::new(9.0, 9.0, 0.0));
        assert!(!tree.needs_layout(root_a));
        assert!(engine.layout_if_needed(&mut tree));
        let b_pos = tree.state(b_child).unwrap().local_position;
        assert_ne!(b_pos, Vec3::new(9.0, 9.0, 0.0));
    }

    #[test]
    fn skip_invisible_excludes_hidden_children() {
        let mut tree = NodeTree::new();
        let root = tree.insert(NodeState::default(), None);
        unit_child(&mut tree, root);
        let hidden = unit_child(&mut tree, root);
        unit_child(&mut tree, root);
        tree.set_visible(hidden, false);

        let mut cfg = LayoutConfig::linear(Orientation::Vertical);
        cfg.skip_invisible = true;
        let mut engine = LayoutEngine::new();
        engine.set_config(root, cfg);
        engine.layout_if_needed(&mut tree);

        // Two slots, not three.
        assert_eq!(engine.size_of(&tree, root), Some(Vec2::new(1.0, 2.0)));

        // Without the flag the hidden child still occupies a slot.
        let mut engine = LayoutEngine::new();
        engine.set_config(root, LayoutConfig::linear(Orientation::Vertical));
        tree.mark_dirty(root);
        engine.layout_if_needed(&mut tree);
        assert_eq!(engine.size_of(&tree, root), Some(Vec2::new(1.0, 3.0)));
    }
}
