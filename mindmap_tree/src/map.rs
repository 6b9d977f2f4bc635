// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! One lateral half of the mind map and the whole-subtree layout over it.

use alloc::vec::Vec;

use kurbo::Point;

use crate::arena::Nodes;
use crate::children::{Children, Subtree};
use crate::config::LayoutConfig;
use crate::geometry::{Curve, Placed};
use crate::node::RootNode;
use crate::types::{NodeId, Owner, Side};

/// Where a dragged node lands.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum DropTarget {
    /// Appended to the end of one side's top-level collection.
    MapEnd(Side),
    /// Appended as the last child of the node.
    LastChildOf(NodeId),
    /// Inserted directly above the node, in its collection.
    Above(NodeId),
    /// Inserted directly below the node, in its collection.
    Below(NodeId),
}

/// The top-level collection of one side of the root.
///
/// Maps hold ids only; the nodes themselves live in the [`Nodes`] arena, which every layout
/// method takes alongside the map.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Map {
    side: Side,
    pub(crate) children: Children,
}

impl Map {
    /// Create an empty map for `side`.
    pub fn new(side: Side) -> Self {
        Self {
            side,
            children: Children::new(),
        }
    }

    /// Which side of the root this map grows on.
    pub fn side(&self) -> Side {
        self.side
    }

    /// First-layer node ids, top to bottom.
    pub fn children(&self) -> &Children {
        &self.children
    }

    /// Whole-subtree queries over this map.
    pub fn subtree<'a>(&'a self, nodes: &'a Nodes) -> Subtree<'a> {
        self.children.subtree(nodes, Owner::Map(self.side))
    }

    /// Recompute `left`, then `group.top` and `top`, of every node in the map.
    pub(crate) fn update_placement(&self, nodes: &mut Nodes, root: &RootNode) {
        self.update_nodes_lateral(nodes, root);
        self.update_nodes_vertical(nodes, root);
    }

    /// Stack the whole map vertically, centred on the root.
    pub(crate) fn update_nodes_vertical(&self, nodes: &mut Nodes, root: &RootNode) {
        let frame = root.frame();
        let block = self.children.height(nodes);
        let start = frame.top + frame.height / 2.0 - block / 2.0;
        stack_vertically(nodes, self.children.ids(), start);
    }

    /// Offset every node laterally from its parent, starting at the root.
    pub(crate) fn update_nodes_lateral(&self, nodes: &mut Nodes, root: &RootNode) {
        let frame = root.frame();
        place_laterally(nodes, self.children.ids(), frame.left, frame.width, self.side);
    }

    /// Recompute every connector curve in the map from current geometry.
    pub(crate) fn update_accessory_placement(
        &self,
        nodes: &mut Nodes,
        root: &RootNode,
        config: &LayoutConfig,
    ) {
        let mut curves = Vec::with_capacity(nodes.len());
        for child in self.children.ids().iter().filter_map(|&id| nodes.get(id)) {
            curves.push((child.frame.id, Curve::between(root, child, config, self.side)));
        }
        for parent in self.subtree(nodes).iter().filter_map(|id| nodes.get(id)) {
            for child in parent.children.ids().iter().filter_map(|&id| nodes.get(id)) {
                curves.push((child.frame.id, Curve::between(parent, child, config, self.side)));
            }
        }
        for (id, curve) in curves {
            if let Some(node) = nodes.get_mut(id) {
                node.accessory.curve = curve;
            }
        }
    }

    /// Find where a drop at `position` lands among the visible nodes of this map.
    ///
    /// `moved` and its subtree are skipped. The first hit in depth-first order wins.
    pub(crate) fn hit_test(
        &self,
        nodes: &Nodes,
        position: Point,
        moved: NodeId,
        config: &LayoutConfig,
    ) -> Option<DropTarget> {
        let mut stack: Vec<NodeId> = self.children.ids().iter().rev().copied().collect();
        while let Some(id) = stack.pop() {
            if id == moved {
                continue;
            }
            let Some(node) = nodes.get(id) else {
                continue;
            };
            if !node.frame.is_hidden() && node.on_area(position) {
                let target = if node.on_tail(position.x, config, self.side) {
                    DropTarget::LastChildOf(id)
                } else if node.on_upper(position.y) {
                    DropTarget::Above(id)
                } else {
                    DropTarget::Below(id)
                };
                return Some(target);
            }
            stack.extend(node.children.ids().iter().rev());
        }
        None
    }
}

/// Stack `ids` downwards from `cursor`, recursing into each node's children.
fn stack_vertically(nodes: &mut Nodes, ids: &[NodeId], mut cursor: f64) {
    for &id in ids {
        let Some(node) = nodes.get(id) else {
            continue;
        };
        let own = node.frame.height;
        let subtree = node.children.height(nodes);
        let children = node.children.clone();

        if let Some(node) = nodes.get_mut(id) {
            node.group.top = cursor;
            node.update_top(subtree);
        }
        let children_top = if own > subtree {
            cursor + (own - subtree) / 2.0
        } else {
            cursor
        };
        stack_vertically(nodes, children.ids(), children_top);

        cursor += own.max(subtree);
    }
}

/// Set `left` of `ids` next to a parent at `parent_left` with `parent_width`, recursively.
fn place_laterally(
    nodes: &mut Nodes,
    ids: &[NodeId],
    parent_left: f64,
    parent_width: f64,
    side: Side,
) {
    for &id in ids {
        let Some(node) = nodes.get_mut(id) else {
            continue;
        };
        node.set_left(parent_left, parent_width, side);
        let (left, width) = (node.frame.left, node.frame.width);
        let children = node.children.clone();
        place_laterally(nodes, children.ids(), left, width, side);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::NodeFlags;

    /// Root 100x40 at the origin, `side` map with `[a, b]` and `a: [a1, a2]`, every node 50x20.
    fn sample(side: Side) -> (Nodes, Map, RootNode, [NodeId; 4]) {
        let mut nodes = Nodes::new();
        let a = nodes.insert("a".into());
        let b = nodes.insert("b".into());
        let a1 = nodes.insert("a1".into());
        let a2 = nodes.insert("a2".into());
        for id in [a, b, a1, a2] {
            let node = nodes.get_mut(id).unwrap();
            node.frame.width = 50.0;
            node.frame.height = 20.0;
        }
        nodes.get_mut(a).unwrap().children.push(a1);
        nodes.get_mut(a).unwrap().children.push(a2);
        let mut map = Map::new(side);
        map.children.push(a);
        map.children.push(b);

        let mut root = RootNode::new("root");
        root.frame_mut().width = 100.0;
        root.frame_mut().height = 40.0;
        (nodes, map, root, [a, b, a1, a2])
    }

    fn frame(nodes: &Nodes, id: NodeId) -> (f64, f64) {
        let node = nodes.get(id).unwrap();
        (node.frame.left, node.frame.top)
    }

    #[test]
    fn right_map_layout() {
        let (mut nodes, map, root, [a, b, a1, a2]) = sample(Side::Right);
        map.update_placement(&mut nodes, &root);

        // Block is 40 (a's subtree) + 20 (b) = 60, centred on the root's 20.
        assert_eq!(frame(&nodes, a), (100.0, 0.0));
        assert_eq!(nodes.get(a).unwrap().group.top, -10.0);
        assert_eq!(frame(&nodes, a1), (150.0, -10.0));
        assert_eq!(frame(&nodes, a2), (150.0, 10.0));
        assert_eq!(frame(&nodes, b), (100.0, 30.0));
    }

    #[test]
    fn left_map_mirrors_lateral_offset() {
        let (mut nodes, map, root, [a, b, a1, _]) = sample(Side::Left);
        map.update_placement(&mut nodes, &root);

        assert_eq!(frame(&nodes, a).0, -50.0);
        assert_eq!(frame(&nodes, b).0, -50.0);
        assert_eq!(frame(&nodes, a1).0, -100.0);
        // Vertical stacking does not depend on the side.
        assert_eq!(frame(&nodes, b).1, 30.0);
    }

    #[test]
    fn tall_node_centres_its_children() {
        let (mut nodes, map, root, [a, _, a1, a2]) = sample(Side::Right);
        nodes.get_mut(a).unwrap().frame.height = 80.0;
        map.update_placement(&mut nodes, &root);

        let a_top = nodes.get(a).unwrap().frame.top;
        assert_eq!(nodes.get(a).unwrap().group.top, a_top);
        assert_eq!(frame(&nodes, a1).1, a_top + 20.0);
        assert_eq!(frame(&nodes, a2).1, a_top + 40.0);
    }

    #[test]
    fn curves_connect_tail_to_head() {
        let config = LayoutConfig::default();
        let (mut nodes, map, root, [a, _, a1, _]) = sample(Side::Right);
        map.update_placement(&mut nodes, &root);
        map.update_accessory_placement(&mut nodes, &root, &config);

        let node_a = nodes.get(a).unwrap();
        let curve = node_a.accessory.curve;
        assert_eq!(curve.start_point().x, root.branch_x(&config, Side::Right));
        assert_eq!(curve.start_point().y, root.center_y(&config));
        assert_eq!(curve.end_point().x, node_a.head_x(&config, Side::Right));
        assert_eq!(curve.end_point().y, node_a.center_y(&config));

        let node_a1 = nodes.get(a1).unwrap();
        assert_eq!(
            node_a1.accessory.curve.start_point().x,
            node_a.branch_x(&config, Side::Right)
        );
    }

    #[test]
    fn hit_test_regions() {
        let config = LayoutConfig::default();
        let (mut nodes, map, root, [a, b, a1, _]) = sample(Side::Right);
        map.update_placement(&mut nodes, &root);
        let moved = NodeId::new(99, 1);

        // b spans x 100..150, y 30..50; its tail is x > 137.5.
        assert_eq!(
            map.hit_test(&nodes, Point::new(145.0, 40.0), moved, &config),
            Some(DropTarget::LastChildOf(b))
        );
        assert_eq!(
            map.hit_test(&nodes, Point::new(110.0, 35.0), moved, &config),
            Some(DropTarget::Above(b))
        );
        assert_eq!(
            map.hit_test(&nodes, Point::new(110.0, 45.0), moved, &config),
            Some(DropTarget::Below(b))
        );
        // Exactly on the boundary between a and b is neither.
        assert_eq!(map.hit_test(&nodes, Point::new(110.0, 20.0), moved, &config), None);

        // The moved subtree is never a target.
        assert_eq!(map.hit_test(&nodes, Point::new(160.0, -5.0), a, &config), None);
        assert_eq!(
            map.hit_test(&nodes, Point::new(160.0, -5.0), moved, &config),
            Some(DropTarget::Above(a1))
        );

        // Hidden nodes are not targets.
        nodes.get_mut(a1).unwrap().frame.flags.insert(NodeFlags::HIDDEN);
        assert_eq!(map.hit_test(&nodes, Point::new(160.0, -5.0), moved, &config), None);
    }
}
