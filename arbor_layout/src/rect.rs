// Copyright 2026 the Arbor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rect layout: a single child aligned within a rectangle, uniformly
//! downscaled when it would overflow a declared size.
//!
//! Unlike the stacking layouts, a rect's local space is centered on its
//! origin: the rectangle spans ±size/2 on both axes. This is the only
//! layout operation that mutates a child's scale rather than only its
//! position.

use arbor_geometry::{Aabb, HorizontalAlignment, Padding, VerticalAlignment};
use arbor_node::{NodeId, NodeTree};
use glam::{Vec2, Vec3};

use crate::config::LayoutConfig;
use crate::metrics::item_info;

/// The uniform rescale factor keeping a child of the given unscaled size
/// inside `max_w` × `max_h`: `min(1, max_w/width, max_h/height)`.
///
/// Non-positive child extents yield 1 (nothing to fit).
#[must_use]
pub fn fit_scale(width: f32, height: f32, max_w: f32, max_h: f32) -> f32 {
    let mut factor = 1.0_f32;
    if width > 0.0 {
        factor = factor.min(max_w / width);
    }
    if height > 0.0 {
        factor = factor.min(max_h / height);
    }
    factor
}

fn rescale_child(tree: &mut NodeTree, child: NodeId, cfg: &LayoutConfig, padding: Padding) {
    let Some(state) = tree.state(child) else {
        return;
    };
    let scale = state.local_scale;
    if scale.x <= 0.0 || scale.y <= 0.0 {
        return;
    }
    let measured = tree.bounding(child).size();
    let unscaled_w = measured.x / scale.x;
    let unscaled_h = measured.y / scale.y;
    if unscaled_w <= 0.0 || unscaled_h <= 0.0 {
        return;
    }
    let max_w = if cfg.size.x > 0.0 {
        cfg.size.x - padding.horizontal()
    } else {
        f32::MAX
    };
    let max_h = if cfg.size.y > 0.0 {
        cfg.size.y - padding.vertical()
    } else {
        f32::MAX
    };
    let factor = fit_scale(unscaled_w, unscaled_h, max_w, max_h);
    tree.set_local_scale(child, Vec3::new(factor, factor, scale.z));
}

/// Positions (and possibly rescales) the first child and returns the
/// layout's own bounds.
pub(crate) fn layout(tree: &mut NodeTree, children: &[NodeId], cfg: &LayoutConfig) -> Aabb {
    debug_assert!(children.len() <= 1, "rect layout supports a single child");
    let Some(&child) = children.first() else {
        let limit = crate::metrics::size_limit(Vec2::ZERO, cfg.size);
        return centered_bounds(limit, cfg, Padding::ZERO, 0.0, 0.0);
    };
    let padding = cfg.padding_for(0);
    rescale_child(tree, child, cfg, padding);

    // Re-measure after rescaling so alignment uses the final extents.
    let item = item_info(tree, child);
    let limit = crate::metrics::size_limit(Vec2::new(item.width, item.height), cfg.size);

    let alignment = cfg.alignment_for(0);
    let x = match alignment.horizontal {
        HorizontalAlignment::Left => -limit.x / 2.0 + item.width / 2.0 + item.pivot_x + padding.left,
        HorizontalAlignment::Center => item.pivot_x + (padding.right - padding.left),
        HorizontalAlignment::Right => limit.x / 2.0 - item.width / 2.0 + item.pivot_x - padding.right,
    };
    let y = match alignment.vertical {
        VerticalAlignment::Top => limit.y / 2.0 - item.height / 2.0 + item.pivot_y - padding.top,
        VerticalAlignment::Center => item.pivot_y + (padding.top - padding.bottom),
        VerticalAlignment::Bottom => {
            -limit.y / 2.0 + item.height / 2.0 + item.pivot_y + padding.bottom
        }
    };
    let z = tree.state(child).map_or(0.0, |s| s.local_position.z);
    tree.set_local_position(child, Vec3::new(x, y, z));

    centered_bounds(limit, cfg, padding, item.bounds.min.z, item.bounds.max.z)
}

fn centered_bounds(limit: Vec2, cfg: &LayoutConfig, padding: Padding, min_z: f32, max_z: f32) -> Aabb {
    // Padding widens the reported bounds only on auto-sized axes; a
    // declared size is authoritative.
    let (left, right) = if cfg.size.x > 0.0 {
        (0.0, 0.0)
    } else {
        (padding.left, padding.right)
    };
    let (bottom, top) = if cfg.size.y > 0.0 {
        (0.0, 0.0)
    } else {
        (padding.bottom, padding.top)
    };
    Aabb::new(
        Vec3::new(-limit.x / 2.0 - left, -limit.y / 2.0 - bottom, min_z),
        Vec3::new(limit.x / 2.0 + right, limit.y / 2.0 + top, max_z),
    )
}
