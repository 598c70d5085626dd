// Copyright 2026 the Arbor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Recursive bounds derivation over the node tree.

use arbor_geometry::{Aabb, Bounding};
use glam::{Quat, Vec3};

use crate::tree::NodeTree;
use crate::types::{NodeId, NodeKind};

impl NodeTree {
    /// Returns the node's bounds in its **parent's** space.
    ///
    /// Content bounds are taken in content-local space, rotated (the
    /// axis-aligned envelope of all eight rotated corners, so the result
    /// is never smaller than the true rotated footprint), scaled by the
    /// local scale, and translated by the local position. Stale ids and
    /// empty containers yield [`Aabb::ZERO`].
    #[must_use]
    pub fn bounding(&self, id: NodeId) -> Aabb {
        let Some(state) = self.state(id) else {
            return Aabb::ZERO;
        };
        let content = self.content_bounding(id);
        let rotated = if state.local_rotation == Quat::IDENTITY {
            content
        } else {
            rotated_envelope(&content, state.local_rotation)
        };
        rotated
            .scaled(state.local_scale)
            .translated(state.local_position)
    }

    /// Returns the node's content bounds in its **own** local space.
    ///
    /// For [`NodeKind::Leaf`] this is the intrinsic content bounds plus
    /// the content sub-offset; for [`NodeKind::Group`] it is the union of
    /// the children's parent-space bounds, seeded by the first child so a
    /// zero first bound does not absorb the others.
    #[must_use]
    pub fn content_bounding(&self, id: NodeId) -> Aabb {
        let Some(state) = self.state(id) else {
            return Aabb::ZERO;
        };
        match state.kind {
            NodeKind::Leaf => {
                let b = state.content_bounds;
                Aabb::new(
                    Vec3::new(b.left, b.bottom, 0.0),
                    Vec3::new(b.right, b.top, 0.0),
                )
                .translated(state.content_offset)
            }
            NodeKind::Group => {
                let mut union: Option<Aabb> = None;
                for child in self.children(id) {
                    let child_bounds = self.bounding(*child);
                    union = Some(match union {
                        Some(current) => current.union(&child_bounds),
                        None => child_bounds,
                    });
                }
                union.unwrap_or(Aabb::ZERO).translated(state.content_offset)
            }
        }
    }

    /// Returns the minimum 2D envelope of the given nodes' parent-space
    /// bounds.
    ///
    /// An empty list yields the zero bound; a single node yields exactly
    /// its bound; otherwise the running min/max envelope is seeded by the
    /// first node's bound.
    #[must_use]
    pub fn sum_bounds(&self, ids: &[NodeId]) -> Bounding {
        let mut sum: Option<Bounding> = None;
        for id in ids {
            let bounds = self.bounding(*id).to_bounding();
            sum = Some(match sum {
                Some(current) => current.union(&bounds),
                None => bounds,
            });
        }
        sum.unwrap_or(Bounding::ZERO)
    }
}

fn rotated_envelope(bounds: &Aabb, rotation: Quat) -> Aabb {
    let (min, max) = (bounds.min, bounds.max);
    let corners = [
        rotation * Vec3::new(min.x, min.y, min.z),
        rotation * Vec3::new(max.x, min.y, min.z),
        rotation * Vec3::new(min.x, max.y, min.z),
        rotation * Vec3::new(max.x, max.y, min.z),
        rotation * Vec3::new(min.x, min.y, max.z),
        rotation * Vec3::new(max.x, min.y, max.z),
        rotation * Vec3::new(min.x, max.y, max.z),
        rotation * Vec3::new(max.x, max.y, max.z),
    ];
    Aabb::from_points(&corners)
}

#[cfg(test)]
mod tests {
    use crate::tree::NodeTree;
    use crate::types::{NodeKind, NodeState};
    use arbor_geometry::{Aabb, Bounding};
    use glam::{Quat, Vec3};

    fn point_node(position: Vec3) -> NodeState {
        NodeState {
            local_position: position,
            ..NodeState::default()
        }
    }

    fn sized_node(bounds: Bounding) -> NodeState {
        NodeState {
            content_bounds: bounds,
            ..NodeState::default()
        }
    }

    #[test]
    fn leaf_bounds_scale_then_translate() {
        let mut tree = NodeTree::new();
        let id = tree.insert(
            NodeState {
                content_bounds: Bounding::new(-1.0, -1.0, 1.0, 1.0),
                local_scale: Vec3::new(2.0, 3.0, 1.0),
                local_position: Vec3::new(10.0, 20.0, 5.0),
                ..NodeState::default()
            },
            None,
        );
        let b = tree.bounding(id);
        assert_eq!(b.min, Vec3::new(8.0, 17.0, 5.0));
        assert_eq!(b.max, Vec3::new(12.0, 23.0, 5.0));
    }

    #[test]
    fn rotation_uses_axis_aligned_envelope() {
        let mut tree = NodeTree::new();
        let id = tree.insert(
            NodeState {
                content_bounds: Bounding::new(0.0, 0.0, 2.0, 1.0),
                local_rotation: Quat::from_rotation_z(core::f32::consts::FRAC_PI_2),
                ..NodeState::default()
            },
            None,
        );
        // A quarter turn about z maps (x, y) to (-y, x).
        let expected = Aabb::new(Vec3::new(-1.0, 0.0, 0.0), Vec3::new(0.0, 2.0, 0.0));
        assert!(tree.bounding(id).equal_inexact(&expected));
    }

    #[test]
    fn group_unions_children_in_parent_space() {
        let mut tree = NodeTree::new();
        let group = tree.insert(
            NodeState {
                kind: NodeKind::Group,
                local_position: Vec3::new(1.0, 0.0, 0.0),
                ..NodeState::default()
            },
            None,
        );
        let _a = tree.insert(
            NodeState {
                content_bounds: Bounding::new(0.0, 0.0, 1.0, 1.0),
                ..NodeState::default()
            },
            Some(group),
        );
        let _b = tree.insert(
            NodeState {
                content_bounds: Bounding::new(0.0, 0.0, 1.0, 1.0),
                local_position: Vec3::new(3.0, 2.0, 0.0),
                ..NodeState::default()
            },
            Some(group),
        );
        let b = tree.bounding(group);
        assert_eq!(b.min, Vec3::new(1.0, 0.0, 0.0));
        assert_eq!(b.max, Vec3::new(5.0, 3.0, 0.0));
    }

    #[test]
    fn empty_group_is_zero() {
        let mut tree = NodeTree::new();
        let group = tree.insert(
            NodeState {
                kind: NodeKind::Group,
                ..NodeState::default()
            },
            None,
        );
        assert_eq!(tree.bounding(group), Aabb::ZERO);
    }

    #[test]
    fn sum_bounds_empty_and_single() {
        let mut tree = NodeTree::new();
        assert_eq!(tree.sum_bounds(&[]), Bounding::ZERO);

        let only = tree.insert(sized_node(Bounding::new(1.0, 1.0, 2.0, 3.0)), None);
        assert_eq!(tree.sum_bounds(&[only]), Bounding::new(1.0, 1.0, 2.0, 3.0));
    }

    #[test]
    fn sum_bounds_of_three_points() {
        let mut tree = NodeTree::new();
        let a = tree.insert(point_node(Vec3::new(1.0, 2.0, 3.0)), None);
        let b = tree.insert(point_node(Vec3::new(10.0, 20.0, 30.0)), None);
        let c = tree.insert(point_node(Vec3::new(100.0, 200.0, 300.0)), None);
        let sum = tree.sum_bounds(&[a, b, c]);
        assert_eq!(sum, Bounding::new(1.0, 2.0, 100.0, 200.0));
    }

    #[test]
    fn content_offset_shifts_content() {
        let mut tree = NodeTree::new();
        let id = tree.insert(
            NodeState {
                content_bounds: Bounding::new(-1.0, -1.0, 1.0, 1.0),
                content_offset: Vec3::new(0.0, 1.0, 0.0),
                ..NodeState::default()
            },
            None,
        );
        let b = tree.bounding(id);
        assert_eq!(b.min, Vec3::new(-1.0, 0.0, 0.0));
        assert_eq!(b.max, Vec3::new(1.0, 2.0, 0.0));
    }
}
