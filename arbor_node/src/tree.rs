// Copyright 2026 the Arbor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Generational node arena with parent/child links and dirty tracking.

use alloc::vec::Vec;

use arbor_geometry::{Aabb, Alignment, Bounding};
use glam::{Quat, Vec3};
use smallvec::SmallVec;

use crate::types::{NodeFlags, NodeId, NodeKind, NodeState};

struct Entry {
    state: NodeState,
    parent: Option<NodeId>,
    children: SmallVec<[NodeId; 4]>,
    needs_layout: bool,
}

struct Slot {
    generation: u32,
    entry: Option<Entry>,
}

/// A tree of transform-bearing nodes stored in a generational slot arena.
///
/// Nodes are addressed by [`NodeId`]; a removed node's slot is recycled
/// with a bumped generation so stale ids are detected rather than aliased.
/// Children keep insertion order (which is also layout order) and every
/// node carries a non-owning back-reference to its parent.
///
/// Every state setter compares against the stored value and, on change,
/// marks the node and all of its ancestors as needing layout. Structural
/// mutation (insert/remove/reparent) while a layout pass is running is
/// disallowed; it is guarded by debug assertions and must be deferred by
/// the host.
#[derive(Default)]
pub struct NodeTree {
    slots: Vec<Slot>,
    free: Vec<u32>,
    in_layout: bool,
}

impl core::fmt::Debug for NodeTree {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("NodeTree")
            .field("slots", &self.slots.len())
            .field("free", &self.free.len())
            .field("in_layout", &self.in_layout)
            .finish()
    }
}

impl NodeTree {
    /// Creates an empty tree.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if `id` refers to a live node.
    #[must_use]
    pub fn contains(&self, id: NodeId) -> bool {
        self.entry(id).is_some()
    }

    fn entry(&self, id: NodeId) -> Option<&Entry> {
        let slot = self.slots.get(id.idx())?;
        if slot.generation != id.1 {
            return None;
        }
        slot.entry.as_ref()
    }

    fn entry_mut(&mut self, id: NodeId) -> Option<&mut Entry> {
        let slot = self.slots.get_mut(id.idx())?;
        if slot.generation != id.1 {
            return None;
        }
        slot.entry.as_mut()
    }

    /// Inserts a node with the given state as the last child of `parent`,
    /// or as a root when `parent` is `None` or no longer alive.
    pub fn insert(&mut self, state: NodeState, parent: Option<NodeId>) -> NodeId {
        debug_assert!(
            !self.in_layout,
            "tree mutation during a layout pass is disallowed"
        );
        let parent = parent.filter(|p| self.contains(*p));
        let entry = Entry {
            state,
            parent,
            children: SmallVec::new(),
            needs_layout: false,
        };
        let id = match self.free.pop() {
            Some(idx) => {
                let slot = &mut self.slots[idx as usize];
                debug_assert!(slot.entry.is_none(), "free list pointed at a live slot");
                slot.entry = Some(entry);
                NodeId::new(idx, slot.generation)
            }
            None => {
                let idx =
                    u32::try_from(self.slots.len()).expect("node arena exceeds u32 slot range");
                self.slots.push(Slot {
                    generation: 0,
                    entry: Some(entry),
                });
                NodeId::new(idx, 0)
            }
        };
        if let Some(parent) = parent {
            if let Some(p) = self.entry_mut(parent) {
                p.children.push(id);
            }
            self.mark_dirty(parent);
        }
        id
    }

    /// Removes `id` and its whole subtree. Returns `false` for stale ids.
    pub fn remove(&mut self, id: NodeId) -> bool {
        debug_assert!(
            !self.in_layout,
            "tree mutation during a layout pass is disallowed"
        );
        if !self.contains(id) {
            return false;
        }
        let parent = self.detach(id);
        if let Some(parent) = parent {
            self.mark_dirty(parent);
        }
        let mut stack: Vec<NodeId> = Vec::new();
        stack.push(id);
        while let Some(current) = stack.pop() {
            let slot = &mut self.slots[current.idx()];
            if let Some(entry) = slot.entry.take() {
                slot.generation = slot.generation.wrapping_add(1);
                self.free.push(current.0);
                stack.extend(entry.children);
            }
        }
        true
    }

    /// Moves `id` (with its subtree) under `new_parent`, appended as the
    /// last child, or to root level when `new_parent` is `None`.
    ///
    /// Returns `false` if either id is stale or the move would create a
    /// cycle.
    pub fn reparent(&mut self, id: NodeId, new_parent: Option<NodeId>) -> bool {
        debug_assert!(
            !self.in_layout,
            "tree mutation during a layout pass is disallowed"
        );
        if !self.contains(id) {
            return false;
        }
        if let Some(np) = new_parent {
            if !self.contains(np) {
                return false;
            }
            // Reject cycles: `id` must not be an ancestor of its new parent.
            let mut cursor = Some(np);
            while let Some(current) = cursor {
                if current == id {
                    return false;
                }
                cursor = self.parent(current);
            }
        }
        let old_parent = self.detach(id);
        if let Some(e) = self.entry_mut(id) {
            e.parent = new_parent;
        }
        if let Some(np) = new_parent {
            if let Some(p) = self.entry_mut(np) {
                p.children.push(id);
            }
            self.mark_dirty(np);
        }
        if let Some(old) = old_parent {
            self.mark_dirty(old);
        }
        true
    }

    fn detach(&mut self, id: NodeId) -> Option<NodeId> {
        let parent = self.entry(id)?.parent;
        if let Some(parent) = parent {
            if let Some(p) = self.entry_mut(parent) {
                p.children.retain(|c| *c != id);
            }
        }
        if let Some(e) = self.entry_mut(id) {
            e.parent = None;
        }
        parent
    }

    /// Returns the parent of `id`, if any.
    #[must_use]
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.entry(id)?.parent
    }

    /// Returns all live nodes without a parent, in slot order.
    #[must_use]
    pub fn roots(&self) -> Vec<NodeId> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(idx, slot)| {
                let entry = slot.entry.as_ref()?;
                entry.parent.is_none().then(|| {
                    #[allow(
                        clippy::cast_possible_truncation,
                        reason = "NodeId uses 32-bit indices by design."
                    )]
                    NodeId::new(idx as u32, slot.generation)
                })
            })
            .collect()
    }

    /// Returns the children of `id` in insertion (layout) order.
    ///
    /// Stale ids yield an empty slice.
    #[must_use]
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.entry(id).map_or(&[], |e| &e.children)
    }

    /// Returns a shared reference to the node's state.
    #[must_use]
    pub fn state(&self, id: NodeId) -> Option<&NodeState> {
        self.entry(id).map(|e| &e.state)
    }

    /// Marks `id` and all of its ancestors as needing layout.
    ///
    /// Ancestors are included because auto-fit containers resize with
    /// their content; descendants are revisited by the layout pass itself.
    pub fn mark_dirty(&mut self, id: NodeId) {
        let mut cursor = Some(id);
        while let Some(current) = cursor {
            let Some(e) = self.entry_mut(current) else {
                return;
            };
            if e.needs_layout {
                return;
            }
            e.needs_layout = true;
            cursor = e.parent;
        }
    }

    /// Returns `true` if `id` was marked dirty since the last pass.
    #[must_use]
    pub fn needs_layout(&self, id: NodeId) -> bool {
        self.entry(id).is_some_and(|e| e.needs_layout)
    }

    /// Clears the dirty flag of a single node.
    pub fn clear_needs_layout(&mut self, id: NodeId) {
        if let Some(e) = self.entry_mut(id) {
            e.needs_layout = false;
        }
    }

    /// Begins a layout pass, arming the structural-mutation guard.
    pub fn begin_layout_pass(&mut self) {
        debug_assert!(!self.in_layout, "layout pass is already in progress");
        self.in_layout = true;
    }

    /// Ends the current layout pass.
    pub fn end_layout_pass(&mut self) {
        debug_assert!(self.in_layout, "no layout pass in progress");
        self.in_layout = false;
    }

    /// Returns `true` while a layout pass is running.
    #[must_use]
    pub fn in_layout_pass(&self) -> bool {
        self.in_layout
    }

    /// Returns `true` if the node is live and visible.
    #[must_use]
    pub fn is_visible(&self, id: NodeId) -> bool {
        self.state(id)
            .is_some_and(|s| s.flags.contains(NodeFlags::VISIBLE))
    }

    /// Sets the node's position relative to its parent.
    pub fn set_local_position(&mut self, id: NodeId, position: Vec3) {
        if let Some(e) = self.entry_mut(id) {
            if e.state.local_position != position {
                e.state.local_position = position;
                self.mark_dirty(id);
            }
        }
    }

    /// Sets the node's rotation relative to its parent.
    pub fn set_local_rotation(&mut self, id: NodeId, rotation: Quat) {
        if let Some(e) = self.entry_mut(id) {
            if e.state.local_rotation != rotation {
                e.state.local_rotation = rotation;
                self.mark_dirty(id);
            }
        }
    }

    /// Sets the node's scale relative to its parent.
    pub fn set_local_scale(&mut self, id: NodeId, scale: Vec3) {
        if let Some(e) = self.entry_mut(id) {
            if e.state.local_scale != scale {
                e.state.local_scale = scale;
                self.mark_dirty(id);
            }
        }
    }

    /// Sets the node's pivot alignment.
    pub fn set_alignment(&mut self, id: NodeId, alignment: Alignment) {
        if let Some(e) = self.entry_mut(id) {
            if e.state.alignment != alignment {
                e.state.alignment = alignment;
                self.mark_dirty(id);
            }
        }
    }

    /// Sets the offset of the node's renderable content.
    pub fn set_content_offset(&mut self, id: NodeId, offset: Vec3) {
        if let Some(e) = self.entry_mut(id) {
            if e.state.content_offset != offset {
                e.state.content_offset = offset;
                self.mark_dirty(id);
            }
        }
    }

    /// Feeds the node's intrinsic content bounds.
    ///
    /// Hosts push these for leaves (text metrics, image sizes); layout
    /// managers publish theirs after arranging children. The comparison is
    /// epsilon-tolerant so re-measured but unchanged content does not keep
    /// the tree dirty.
    pub fn set_content_bounds(&mut self, id: NodeId, bounds: Bounding) {
        if let Some(e) = self.entry_mut(id) {
            if !e.state.content_bounds.equal_inexact(&bounds) {
                e.state.content_bounds = bounds;
                self.mark_dirty(id);
            }
        }
    }

    /// Declares (or clears) the node's clip volume.
    pub fn set_clip_volume(&mut self, id: NodeId, clip: Option<Aabb>) {
        if let Some(e) = self.entry_mut(id) {
            if e.state.clip_volume != clip {
                e.state.clip_volume = clip;
                self.mark_dirty(id);
            }
        }
    }

    /// Replaces the node's flags.
    pub fn set_flags(&mut self, id: NodeId, flags: NodeFlags) {
        if let Some(e) = self.entry_mut(id) {
            if e.state.flags != flags {
                e.state.flags = flags;
                self.mark_dirty(id);
            }
        }
    }

    /// Shows or hides the node.
    pub fn set_visible(&mut self, id: NodeId, visible: bool) {
        if let Some(e) = self.entry_mut(id) {
            let flags = if visible {
                e.state.flags | NodeFlags::VISIBLE
            } else {
                e.state.flags & !NodeFlags::VISIBLE
            };
            if e.state.flags != flags {
                e.state.flags = flags;
                self.mark_dirty(id);
            }
        }
    }

    /// Changes how the node's content bounds are derived.
    pub fn set_kind(&mut self, id: NodeId, kind: NodeKind) {
        if let Some(e) = self.entry_mut(id) {
            if e.state.kind != kind {
                e.state.kind = kind;
                self.mark_dirty(id);
            }
        }
    }
}
