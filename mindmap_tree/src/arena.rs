// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Slot arena owning every non-root node.

use alloc::string::String;
use alloc::vec::Vec;

use crate::node::Node;
use crate::types::NodeId;

/// Generational slot storage for [`Node`]s.
///
/// Nodes refer to each other only by [`NodeId`]; the tree shape lives in the
/// [`Children`](crate::Children) collections, never in the arena.
pub struct Nodes {
    /// slots
    slots: Vec<Option<Node>>,
    /// last generation per slot (persists across frees)
    generations: Vec<u32>,
    free_list: Vec<usize>,
}

impl core::fmt::Debug for Nodes {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Nodes")
            .field("nodes_total", &self.slots.len())
            .field("nodes_alive", &self.len())
            .field("free_list", &self.free_list.len())
            .finish_non_exhaustive()
    }
}

impl Default for Nodes {
    fn default() -> Self {
        Self::new()
    }
}

impl Nodes {
    /// Create an empty arena.
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            generations: Vec::new(),
            free_list: Vec::new(),
        }
    }

    /// Allocate a detached node with `text` and return its id.
    pub(crate) fn insert(&mut self, text: String) -> NodeId {
        if let Some(idx) = self.free_list.pop() {
            let generation = self.generations[idx].saturating_add(1);
            self.generations[idx] = generation;
            #[allow(
                clippy::cast_possible_truncation,
                reason = "NodeId uses 32-bit indices by design."
            )]
            let id = NodeId::new(idx as u32, generation);
            self.slots[idx] = Some(Node::new(id, text));
            id
        } else {
            let generation = 1_u32;
            #[allow(
                clippy::cast_possible_truncation,
                reason = "NodeId uses 32-bit indices by design."
            )]
            let id = NodeId::new(self.slots.len() as u32, generation);
            self.slots.push(Some(Node::new(id, text)));
            self.generations.push(generation);
            id
        }
    }

    /// Free `id` and every node below it, returning the freed top node.
    ///
    /// The caller is responsible for detaching `id` from its owning collection first.
    pub(crate) fn free_subtree(&mut self, id: NodeId) -> Option<Node> {
        if !self.is_alive(id) {
            return None;
        }
        let node = self.slots[id.idx()].take()?;
        self.free_list.push(id.idx());
        for &child in node.children.ids() {
            self.free_subtree(child);
        }
        Some(node)
    }

    /// Returns true if `id` refers to a live node.
    pub fn is_alive(&self, id: NodeId) -> bool {
        self.slots
            .get(id.idx())
            .and_then(|n| n.as_ref())
            .map(|n| n.frame.id.1 == id.1)
            .unwrap_or(false)
    }

    /// The node for a live `id`.
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        let n = self.slots.get(id.idx())?.as_ref()?;
        (n.frame.id == id).then_some(n)
    }

    pub(crate) fn get_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        let n = self.slots.get_mut(id.idx())?.as_mut()?;
        if n.frame.id != id {
            return None;
        }
        Some(n)
    }

    /// Number of live nodes.
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|n| n.is_some()).count()
    }

    /// Returns `true` if no node is live.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
