// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Ordered child collections and whole-subtree queries over them.

use alloc::vec::Vec;

use smallvec::SmallVec;

use crate::arena::Nodes;
use crate::error::{Error, Result};
use crate::node::Node;
use crate::types::{NodeFlags, NodeId, Owner};

/// The direct children of a node or of one side of the root, in stacking order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Children {
    ids: SmallVec<[NodeId; 4]>,
}

impl Children {
    /// Create an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Child ids, top to bottom.
    pub fn ids(&self) -> &[NodeId] {
        &self.ids
    }

    /// Number of direct children.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Returns `true` if there are no direct children.
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// The topmost child.
    pub fn first(&self) -> Option<NodeId> {
        self.ids.first().copied()
    }

    /// Whether `id` is a direct child.
    pub fn contains(&self, id: NodeId) -> bool {
        self.ids.contains(&id)
    }

    /// Index of `id` among the direct children.
    pub fn position(&self, id: NodeId) -> Option<usize> {
        self.ids.iter().position(|&c| c == id)
    }

    /// The sibling directly above `id`, or `None` if `id` is first or absent.
    pub fn top_sibling_of(&self, id: NodeId) -> Option<NodeId> {
        let pos = self.position(id)?;
        pos.checked_sub(1).map(|above| self.ids[above])
    }

    /// The sibling directly below `id`, or `None` if `id` is last or absent.
    pub fn bottom_sibling_of(&self, id: NodeId) -> Option<NodeId> {
        let pos = self.position(id)?;
        self.ids.get(pos + 1).copied()
    }

    pub(crate) fn push(&mut self, id: NodeId) {
        self.ids.push(id);
    }

    /// Splice `id` in directly below `anchor`. Returns `false` if `anchor` is not a direct child.
    pub(crate) fn insert_after(&mut self, anchor: NodeId, id: NodeId) -> bool {
        match self.position(anchor) {
            Some(pos) => {
                self.ids.insert(pos + 1, id);
                true
            }
            None => false,
        }
    }

    /// Splice `id` in directly above `anchor`. Returns `false` if `anchor` is not a direct child.
    pub(crate) fn insert_before(&mut self, anchor: NodeId, id: NodeId) -> bool {
        match self.position(anchor) {
            Some(pos) => {
                self.ids.insert(pos, id);
                true
            }
            None => false,
        }
    }

    /// Drop `id` from the direct children. Returns `false` if it was not one.
    pub(crate) fn remove(&mut self, id: NodeId) -> bool {
        match self.position(id) {
            Some(pos) => {
                self.ids.remove(pos);
                true
            }
            None => false,
        }
    }

    /// Total vertical span of the direct children: each contributes the larger of its own height
    /// and its subtree's height.
    pub fn height(&self, nodes: &Nodes) -> f64 {
        self.ids
            .iter()
            .filter_map(|&id| nodes.get(id))
            .map(|node| span(node, nodes))
            .sum()
    }

    /// Whole-subtree queries rooted at this collection. `owner` is the collection's own owner.
    pub fn subtree<'a>(&'a self, nodes: &'a Nodes, owner: Owner) -> Subtree<'a> {
        Subtree {
            nodes,
            children: self,
            owner,
        }
    }

    /// Detach `id` from whichever collection under this one directly holds it.
    ///
    /// The node stays in the arena; re-attach it elsewhere or free it.
    pub(crate) fn remove_by_id(&mut self, nodes: &mut Nodes, id: NodeId) -> Result<NodeId> {
        if self.remove(id) {
            return Ok(id);
        }
        let parent = self
            .find_parent_node_of(nodes, id)
            .ok_or(Error::NotFoundNode(id))?;
        let removed = nodes
            .get_mut(parent)
            .is_some_and(|node| node.children.remove(id));
        if removed {
            Ok(id)
        } else {
            Err(Error::NotFoundChildren(id))
        }
    }

    /// Splice `id` in directly below `anchor`, wherever `anchor` lives under this collection.
    pub(crate) fn insert_after_id(
        &mut self,
        nodes: &mut Nodes,
        anchor: NodeId,
        id: NodeId,
    ) -> Result<()> {
        if self.insert_after(anchor, id) {
            return Ok(());
        }
        let inserted = self
            .find_parent_node_of(nodes, anchor)
            .and_then(|parent| nodes.get_mut(parent))
            .is_some_and(|node| node.children.insert_after(anchor, id));
        if inserted {
            Ok(())
        } else {
            Err(Error::NotFoundChildren(anchor))
        }
    }

    pub(crate) fn depth_first<'a>(&self, nodes: &'a Nodes) -> DepthFirst<'a> {
        let mut stack = self.ids.to_vec();
        stack.reverse();
        DepthFirst { nodes, stack }
    }

    /// The node below this collection whose direct children hold `id`.
    fn find_parent_node_of(&self, nodes: &Nodes, id: NodeId) -> Option<NodeId> {
        self.depth_first(nodes)
            .filter_map(|c| nodes.get(c))
            .find(|node| node.children.contains(id))
            .map(|node| node.frame.id)
    }

    /// Hide or reveal every node below this collection.
    ///
    /// Hiding marks every descendant. Revealing stops at collapsed descendants, whose own
    /// subtrees stay hidden. Collapse flags are never touched.
    pub(crate) fn toggle_hidden(&self, nodes: &mut Nodes, hide: bool) {
        let mut stack: Vec<NodeId> = self.ids.to_vec();
        while let Some(id) = stack.pop() {
            let Some(node) = nodes.get_mut(id) else {
                continue;
            };
            node.frame.flags.set(NodeFlags::HIDDEN, hide);
            if hide || !node.group.is_collapsed {
                stack.extend_from_slice(node.children.ids());
            }
        }
    }
}

/// A node's vertical allotment: the larger of its own height and its subtree's.
pub(crate) fn span(node: &Node, nodes: &Nodes) -> f64 {
    node.frame.height.max(node.children.height(nodes))
}

/// Read-only, depth-first queries over every node below a [`Children`] collection.
#[derive(Clone, Copy, Debug)]
pub struct Subtree<'a> {
    nodes: &'a Nodes,
    children: &'a Children,
    owner: Owner,
}

impl<'a> Subtree<'a> {
    /// Depth-first (pre-order) iterator over every id below the collection.
    pub fn iter(&self) -> DepthFirst<'a> {
        self.children.depth_first(self.nodes)
    }

    /// Find a node by id.
    pub fn find_by_id(&self, id: NodeId) -> Option<&'a Node> {
        self.iter().find(|&c| c == id).and_then(|c| self.nodes.get(c))
    }

    /// Whether `id` is anywhere below the collection.
    pub fn contains(&self, id: NodeId) -> bool {
        self.find_by_id(id).is_some()
    }

    /// Find the selected node, if it is below the collection.
    pub fn find_selected(&self) -> Option<&'a Node> {
        self.iter()
            .filter_map(|id| self.nodes.get(id))
            .find(|node| node.frame.is_selected())
    }

    /// The collection that directly holds `id`.
    pub fn find_owner_of(&self, id: NodeId) -> Option<Owner> {
        if self.children.contains(id) {
            return Some(self.owner);
        }
        self.children
            .find_parent_node_of(self.nodes, id)
            .map(Owner::Node)
    }

    /// The [`Children`] that directly hold `id`.
    pub fn find_children_containing(&self, id: NodeId) -> Option<&'a Children> {
        if self.children.contains(id) {
            return Some(self.children);
        }
        let parent = self.children.find_parent_node_of(self.nodes, id)?;
        self.nodes.get(parent).map(|node| &node.children)
    }

    /// The sibling directly above `id`.
    pub fn find_top_sibling_of(&self, id: NodeId) -> Option<NodeId> {
        self.find_children_containing(id)?.top_sibling_of(id)
    }

    /// The sibling directly below `id`.
    pub fn find_bottom_sibling_of(&self, id: NodeId) -> Option<NodeId> {
        self.find_children_containing(id)?.bottom_sibling_of(id)
    }

    /// The first child of `id`, unless there is none or it is hidden.
    pub fn find_first_child_of(&self, id: NodeId) -> Option<&'a Node> {
        let first = self.find_by_id(id)?.children.first()?;
        self.nodes.get(first).filter(|child| !child.frame.is_hidden())
    }

    /// Whether any node below the collection is editing its text or estimate.
    pub fn is_inputting(&self) -> bool {
        self.iter().filter_map(|id| self.nodes.get(id)).any(|node| {
            node.frame.is_inputting() || node.accessory.estimate.is_editing
        })
    }

    /// Total vertical span of the collection. See [`Children::height`].
    pub fn height(&self) -> f64 {
        self.children.height(self.nodes)
    }
}

/// Depth-first iterator returned by [`Subtree::iter`].
#[derive(Clone, Debug)]
pub struct DepthFirst<'a> {
    nodes: &'a Nodes,
    stack: Vec<NodeId>,
}

impl Iterator for DepthFirst<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let id = self.stack.pop()?;
        if let Some(node) = self.nodes.get(id) {
            // Push in reverse so the topmost child is visited first.
            self.stack.extend(node.children.ids().iter().rev());
        }
        Some(id)
    }
}
