// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types for the mind map: node identifiers, flags, sides, and per-node state.

use core::fmt;

/// Identifier for a node in the mind map (generational).
///
/// Identifiers handed out by [`crate::MindMap::add_node`] stay unique for the lifetime of the
/// map: when a slot is reused after a removal its generation is bumped, so a stale id never
/// resolves to the new occupant.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct NodeId(pub(crate) u32, pub(crate) u32);

impl NodeId {
    /// The identifier of the root node. Never handed out by the arena.
    pub const ROOT: Self = Self(u32::MAX, 0);

    pub(crate) const fn new(idx: u32, generation: u32) -> Self {
        Self(idx, generation)
    }

    pub(crate) const fn idx(self) -> usize {
        self.0 as usize
    }

    /// Returns `true` for [`NodeId::ROOT`].
    pub const fn is_root(self) -> bool {
        self.0 == Self::ROOT.0 && self.1 == Self::ROOT.1
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_root() {
            f.write_str("root")
        } else {
            write!(f, "node_{}v{}", self.0, self.1)
        }
    }
}

bitflags::bitflags! {
    /// Per-node state flags.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct NodeFlags: u8 {
        /// Node is hidden because an ancestor is collapsed. Hidden nodes are not drawn,
        /// navigated to, or used as drop targets.
        const HIDDEN    = 0b0000_0001;
        /// Node is the current selection. At most one node in a map carries this flag.
        const SELECTED  = 0b0000_0010;
        /// Node text is being edited.
        const INPUTTING = 0b0000_0100;
    }
}

/// Which lateral half of the map a subtree hangs in.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    /// Subtrees grow to the right of the root.
    Right,
    /// Subtrees grow to the left of the root, mirroring the right side.
    Left,
}

impl Side {
    /// `1.0` for [`Side::Right`], `-1.0` for [`Side::Left`].
    pub const fn sign(self) -> f64 {
        match self {
            Self::Right => 1.0,
            Self::Left => -1.0,
        }
    }
}

/// The collection that directly owns a node.
///
/// Nodes do not store parent pointers; the owner is found by searching the map.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Owner {
    /// The top-level collection of one side of the root.
    Map(Side),
    /// The children of another node.
    Node(NodeId),
}

/// A node's own vertical slot, independent of the height of its subtree.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Group {
    /// Top of the slot allotted to this node and its subtree.
    pub top: f64,
    /// Whether the node's subtree is folded away.
    pub is_collapsed: bool,
}

/// Checkbox shown in front of a node's text.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Checkbox {
    /// The checkbox is not shown and takes no width.
    pub hidden: bool,
    /// The checkbox is ticked.
    pub checked: bool,
}

impl Default for Checkbox {
    fn default() -> Self {
        Self {
            hidden: true,
            checked: false,
        }
    }
}

/// A per-node time estimate in minutes.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct EstimateTime {
    /// Estimated minutes.
    pub minutes: u16,
    /// The estimate field has keyboard focus.
    pub is_editing: bool,
}

impl EstimateTime {
    /// Longest accepted estimate entry, in characters.
    pub const MAX_DIGITS: usize = 3;

    /// Parses user input into minutes.
    ///
    /// An empty entry means zero. Entries longer than [`EstimateTime::MAX_DIGITS`] characters or
    /// that are not a non-negative integer yield `None`.
    pub fn parse(text: &str) -> Option<u16> {
        if text.is_empty() {
            return Some(0);
        }
        if text.len() > Self::MAX_DIGITS {
            return None;
        }
        text.parse().ok()
    }
}
