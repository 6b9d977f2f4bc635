// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Arrow-key navigation over the mind map.

use mindmap_tree::{MindMap, NodeId, Placed, Side};

/// Direction of an arrow key.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Navigation {
    /// Move to the sibling above.
    Up,
    /// Move to the sibling below.
    Down,
    /// Move one level leftwards on screen.
    Left,
    /// Move one level rightwards on screen.
    Right,
}

/// A move in tree terms, independent of which side of the root the node is on.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Step {
    TopSibling,
    BottomSibling,
    /// Away from the root: the first child.
    Tail,
    /// Towards the root: the parent.
    Head,
}

impl Navigation {
    /// Arrow keys point at the screen; on the left map the tail is on the left.
    fn step(self, side: Side) -> Step {
        match (self, side) {
            (Self::Up, _) => Step::TopSibling,
            (Self::Down, _) => Step::BottomSibling,
            (Self::Right, Side::Right) | (Self::Left, Side::Left) => Step::Tail,
            (Self::Left, Side::Right) | (Self::Right, Side::Left) => Step::Head,
        }
    }
}

/// Chooses the next selected node for a navigation intent.
pub trait SelectionPolicy {
    /// The node to select when moving from `origin` towards `direction`, or `None` to stay.
    fn next(&self, origin: NodeId, direction: Navigation, map: &MindMap) -> Option<NodeId>;
}

/// Tree-shaped navigation.
///
/// - Up and down move between siblings of one collection and stop at either end.
/// - Towards the tail moves to the first child, unless the node is collapsed or the child is
///   hidden. From the root it enters the right map.
/// - Towards the head moves to the parent; first-layer nodes go to the root.
/// - The root has no siblings and no head.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct TreePolicy;

impl SelectionPolicy for TreePolicy {
    fn next(&self, origin: NodeId, direction: Navigation, map: &MindMap) -> Option<NodeId> {
        if origin.is_root() {
            return match direction.step(Side::Right) {
                Step::Tail => map.map(Side::Right).children().first(),
                Step::TopSibling | Step::BottomSibling | Step::Head => None,
            };
        }

        let side = map.side_of(origin)?;
        let subtree = map.map(side).subtree(map.nodes());
        match direction.step(side) {
            Step::TopSibling => subtree.find_top_sibling_of(origin),
            Step::BottomSibling => subtree.find_bottom_sibling_of(origin),
            Step::Tail => {
                if map.node(origin)?.is_collapsed() {
                    return None;
                }
                subtree
                    .find_first_child_of(origin)
                    .map(|child| child.frame().id())
            }
            Step::Head => map.parent_of(origin),
        }
    }
}
