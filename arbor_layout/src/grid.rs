// Copyright 2026 the Arbor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Grid layout: items placed into uniform cells in row-major order.
//!
//! Cells are uniform: when a declared size is set it is divided evenly
//! across the tracks, otherwise every cell takes the extent of the
//! largest padded item. The first child occupies the top-left cell; a
//! partially filled last row neither shrinks nor grows the grid.

use alloc::vec::Vec;

use arbor_geometry::Aabb;
use arbor_node::{NodeId, NodeTree};
use glam::Vec3;

use crate::config::LayoutConfig;
use crate::metrics::{ItemInfo, align_x, align_y, item_info, z_range};

/// Resolves the effective `(columns, rows)` track counts.
///
/// A zero dimension is derived as `ceil(item_count / other)`; both zero
/// behaves as a single column. Rows always cover every item, so an
/// explicit row count smaller than needed is grown.
#[must_use]
pub fn tracks(columns: u32, rows: u32, item_count: usize) -> (usize, usize) {
    let columns = columns as usize;
    let rows = rows as usize;
    let columns = if columns > 0 {
        columns
    } else if rows > 0 {
        item_count.div_ceil(rows)
    } else {
        1
    };
    let needed_rows = item_count.div_ceil(columns.max(1));
    (columns.max(1), rows.max(needed_rows).max(1))
}

fn cell_size(cfg: &LayoutConfig, items: &[ItemInfo], columns: usize, rows: usize) -> (f32, f32) {
    let mut max_w = 0.0_f32;
    let mut max_h = 0.0_f32;
    for (index, item) in items.iter().enumerate() {
        let padding = cfg.padding_for(index);
        max_w = max_w.max(item.width + padding.horizontal());
        max_h = max_h.max(item.height + padding.vertical());
    }
    let width = if cfg.size.x > 0.0 {
        cfg.size.x / columns as f32
    } else {
        max_w
    };
    let height = if cfg.size.y > 0.0 {
        cfg.size.y / rows as f32
    } else {
        max_h
    };
    (width, height)
}

/// Positions `children` and returns the layout's own bounds.
pub(crate) fn layout(tree: &mut NodeTree, children: &[NodeId], cfg: &LayoutConfig) -> Aabb {
    let (columns, rows) = match cfg.kind {
        crate::config::LayoutKind::Grid { columns, rows } => tracks(columns, rows, children.len()),
        _ => (1, children.len().max(1)),
    };
    let items: Vec<ItemInfo> = children.iter().map(|id| item_info(tree, *id)).collect();
    let (cell_w, cell_h) = cell_size(cfg, &items, columns, rows);

    for (index, (id, item)) in children.iter().zip(&items).enumerate() {
        let column = index % columns;
        let row = index / columns;
        // Rows fill downward from the top of the grid.
        let cell_x = column as f32 * cell_w;
        let cell_y = (rows - 1 - row) as f32 * cell_h;

        let padding = cfg.padding_for(index);
        let alignment = cfg.alignment_for(index);
        let x = align_x(cell_x, cell_w, item, padding, alignment);
        let y = align_y(cell_y, cell_h, item, padding, alignment);
        let z = tree.state(*id).map_or(0.0, |s| s.local_position.z);
        tree.set_local_position(*id, Vec3::new(x, y, z));
    }

    let (min_z, max_z) = z_range(&items);
    Aabb::new(
        Vec3::new(0.0, 0.0, min_z),
        Vec3::new(columns as f32 * cell_w, rows as f32 * cell_h, max_z),
    )
}
