// Copyright 2026 the Arbor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared measurement helpers for the layout managers.

use arbor_geometry::{Aabb, Alignment, HorizontalAlignment, Padding, VerticalAlignment};
use arbor_node::{NodeId, NodeTree};
use glam::Vec2;

/// A child's measured extents and pivot offset, captured before the
/// manager repositions it.
#[derive(Clone, Copy, Debug)]
pub(crate) struct ItemInfo {
    pub(crate) width: f32,
    pub(crate) height: f32,
    /// How far the node's transform origin sits from its visual center.
    /// Adding this to a target center position makes the visual bounds,
    /// not the raw origin, land on the target.
    pub(crate) pivot_x: f32,
    pub(crate) pivot_y: f32,
    pub(crate) bounds: Aabb,
}

pub(crate) fn item_info(tree: &NodeTree, id: NodeId) -> ItemInfo {
    let bounds = tree.bounding(id);
    let size = bounds.size();
    let center = bounds.center();
    let position = tree
        .state(id)
        .map_or(glam::Vec3::ZERO, |s| s.local_position);
    ItemInfo {
        width: size.x,
        height: size.y,
        pivot_x: position.x - center.x,
        pivot_y: position.y - center.y,
        bounds,
    }
}

/// The size a layout actually occupies: the declared size where positive,
/// otherwise the measured content size.
pub(crate) fn size_limit(content: Vec2, declared: Vec2) -> Vec2 {
    Vec2::new(
        if declared.x > 0.0 { declared.x } else { content.x },
        if declared.y > 0.0 { declared.y } else { content.y },
    )
}

/// Places an item horizontally within a slot starting at `origin` with
/// the given `extent`, honoring the item's pivot offset and padding.
pub(crate) fn align_x(
    origin: f32,
    extent: f32,
    item: &ItemInfo,
    padding: Padding,
    alignment: Alignment,
) -> f32 {
    match alignment.horizontal {
        HorizontalAlignment::Left => origin + item.width / 2.0 + item.pivot_x + padding.left,
        HorizontalAlignment::Center => {
            origin + extent / 2.0 + item.pivot_x + (padding.left - padding.right)
        }
        HorizontalAlignment::Right => {
            origin + extent - item.width / 2.0 + item.pivot_x - padding.right
        }
    }
}

/// Places an item vertically within a slot starting at `origin` (bottom
/// edge) with the given `extent`.
pub(crate) fn align_y(
    origin: f32,
    extent: f32,
    item: &ItemInfo,
    padding: Padding,
    alignment: Alignment,
) -> f32 {
    match alignment.vertical {
        VerticalAlignment::Bottom => origin + item.height / 2.0 + item.pivot_y + padding.bottom,
        VerticalAlignment::Center => {
            origin + extent / 2.0 + item.pivot_y + (padding.bottom - padding.top)
        }
        VerticalAlignment::Top => origin + extent - item.height / 2.0 + item.pivot_y - padding.top,
    }
}

/// Horizontal anchor of a content run within leftover space `slack`.
pub(crate) fn anchor_x(slack: f32, alignment: Alignment) -> f32 {
    match alignment.horizontal {
        HorizontalAlignment::Left => 0.0,
        HorizontalAlignment::Center => slack / 2.0,
        HorizontalAlignment::Right => slack,
    }
}

/// Vertical anchor of a content run within leftover space `slack`.
pub(crate) fn anchor_y(slack: f32, alignment: Alignment) -> f32 {
    match alignment.vertical {
        VerticalAlignment::Bottom => 0.0,
        VerticalAlignment::Center => slack / 2.0,
        VerticalAlignment::Top => slack,
    }
}

/// Min/max z over the measured child boxes; (0, 0) for no children.
pub(crate) fn z_range(items: &[ItemInfo]) -> (f32, f32) {
    let mut min_z = f32::MAX;
    let mut max_z = f32::MIN;
    for item in items {
        min_z = min_z.min(item.bounds.min.z);
        max_z = max_z.max(item.bounds.max.z);
    }
    if items.is_empty() {
        (0.0, 0.0)
    } else {
        (min_z, max_z)
    }
}

#[cfg(test)]
mod tests {
    use super::size_limit;
    use glam::Vec2;

    #[test]
    fn declared_size_wins_only_when_positive() {
        let content = Vec2::new(3.0, 4.0);
        assert_eq!(size_limit(content, Vec2::ZERO), content);
        assert_eq!(
            size_limit(content, Vec2::new(10.0, -1.0)),
            Vec2::new(10.0, 4.0)
        );
        assert_eq!(
            size_limit(content, Vec2::new(-2.0, 7.0)),
            Vec2::new(3.0, 7.0)
        );
    }
}
