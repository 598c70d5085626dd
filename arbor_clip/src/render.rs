// Copyright 2026 the Arbor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Render-clip projection: a clip box expressed in a node's
//! content-normalized shader space.

use arbor_geometry::Bounding;

/// Clip parameters relative to a node's own width and height, with the
/// origin at bottom-center: x runs from -0.5 (left edge) to 0.5 (right
/// edge), y from 0.0 (bottom edge) to 1.0 (top edge).
///
/// Renderers feed these four floats to a material that discards fragments
/// outside the window.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RenderClip {
    /// Left edge, in [-0.5, 0.5].
    pub left: f32,
    /// Bottom edge, in [0.0, 1.0].
    pub bottom: f32,
    /// Right edge, in [-0.5, 0.5].
    pub right: f32,
    /// Top edge, in [0.0, 1.0].
    pub top: f32,
}

impl RenderClip {
    /// The fully visible window.
    pub const DEFAULT: Self = Self {
        left: -0.5,
        bottom: 0.0,
        right: 0.5,
        top: 1.0,
    };
}

impl Default for RenderClip {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Projects `clip` into the normalized window of a node occupying
/// `node_bounds`, both given in the node's parent space.
///
/// Each edge moves inward only as far as the clip cuts into the node and
/// never past the node's own edge; a clip that fully contains the node
/// yields [`RenderClip::DEFAULT`]. A degenerate node axis (zero width or
/// height) keeps the default window on that axis.
#[must_use]
pub fn render_clip(node_bounds: &Bounding, clip: &Bounding) -> RenderClip {
    let mut result = RenderClip::DEFAULT;
    let size = node_bounds.size();

    if size.x > 0.0 {
        result.left = (-0.5 + (clip.left - node_bounds.left) / size.x).max(-0.5);
        result.right = (0.5 - (node_bounds.right - clip.right) / size.x).min(0.5);
    }
    if size.y > 0.0 {
        result.bottom = ((clip.bottom - node_bounds.bottom) / size.y).max(0.0);
        result.top = (1.0 - (node_bounds.top - clip.top) / size.y).min(1.0);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::{RenderClip, render_clip};
    use arbor_geometry::Bounding;

    #[test]
    fn containing_clip_is_fully_visible() {
        let node = Bounding::new(0.0, 0.0, 2.0, 1.0);
        let clip = Bounding::new(-10.0, -10.0, 10.0, 10.0);
        assert_eq!(render_clip(&node, &clip), RenderClip::DEFAULT);
    }

    #[test]
    fn horizontal_cut_moves_both_edges_inward() {
        let node = Bounding::new(0.0, 0.0, 4.0, 2.0);
        let clip = Bounding::new(1.0, 0.0, 3.0, 2.0);
        let got = render_clip(&node, &clip);
        assert_eq!(got.left, -0.25);
        assert_eq!(got.right, 0.25);
        assert_eq!(got.bottom, 0.0);
        assert_eq!(got.top, 1.0);
    }

    #[test]
    fn vertical_cut_moves_both_edges_inward() {
        let node = Bounding::new(0.0, 0.0, 2.0, 4.0);
        let clip = Bounding::new(0.0, 1.0, 2.0, 3.0);
        let got = render_clip(&node, &clip);
        assert_eq!(got.bottom, 0.25);
        assert_eq!(got.top, 0.75);
        assert_eq!(got.left, -0.5);
        assert_eq!(got.right, 0.5);
    }

    #[test]
    fn degenerate_node_keeps_defaults() {
        let node = Bounding::ZERO;
        let clip = Bounding::new(0.25, 0.25, 0.75, 0.75);
        assert_eq!(render_clip(&node, &clip), RenderClip::DEFAULT);
    }
}
