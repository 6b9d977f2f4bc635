// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The aggregate: a root, the node arena, and the two lateral maps.

use alloc::string::String;
use alloc::vec::Vec;

use kurbo::Point;

use crate::arena::Nodes;
use crate::children::Children;
use crate::config::LayoutConfig;
use crate::error::{Error, Result};
use crate::geometry::Placed;
use crate::map::{DropTarget, Map};
use crate::metrics::TextMetrics;
use crate::node::{Node, NodeBox, NodeRef, RootNode};
use crate::types::{NodeFlags, NodeId, Owner, Side};

/// A mind map: the root node with a right and a left map hanging off it.
///
/// `MindMap` is the single entry point for lookups, selection, structural edits and placement.
/// Structural edits ([`add_node`](Self::add_node), [`insert_after`](Self::insert_after),
/// [`remove_node`](Self::remove_node), [`move_node`](Self::move_node)) only change the tree;
/// call [`update_all_placement`](Self::update_all_placement) afterwards to recompute geometry.
/// Edits that are defined by their geometric effect ([`set_text`](Self::set_text),
/// [`drop_node`](Self::drop_node), the checkbox setters) place the tree themselves.
#[derive(Debug)]
pub struct MindMap {
    config: LayoutConfig,
    nodes: Nodes,
    root: RootNode,
    right: Map,
    left: Map,
}

impl MindMap {
    /// Create a map holding only a root with `root_text`, using the default [`LayoutConfig`].
    pub fn new(root_text: impl Into<String>) -> Self {
        Self::with_config(root_text, LayoutConfig::default())
    }

    /// Create a map holding only a root with `root_text`.
    pub fn with_config(root_text: impl Into<String>, config: LayoutConfig) -> Self {
        Self {
            config,
            nodes: Nodes::new(),
            root: RootNode::new(root_text),
            right: Map::new(Side::Right),
            left: Map::new(Side::Left),
        }
    }

    /// Layout constants in use.
    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// The root node.
    pub fn root(&self) -> &RootNode {
        &self.root
    }

    /// The node arena.
    pub fn nodes(&self) -> &Nodes {
        &self.nodes
    }

    /// The map on `side`.
    pub fn map(&self, side: Side) -> &Map {
        match side {
            Side::Right => &self.right,
            Side::Left => &self.left,
        }
    }

    /// A non-root node.
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id)
    }

    /// The root or a non-root node.
    pub fn find_node(&self, id: NodeId) -> Option<NodeRef<'_>> {
        if id.is_root() {
            Some(NodeRef::Root(&self.root))
        } else {
            self.nodes.get(id).map(NodeRef::Node)
        }
    }

    /// Returns `true` if `id` is the root or a live node.
    pub fn contains(&self, id: NodeId) -> bool {
        id.is_root() || self.nodes.is_alive(id)
    }

    /// Every non-root id with its side: the right map depth-first, then the left map.
    pub fn iter(&self) -> impl Iterator<Item = (Side, NodeId)> + '_ {
        let right = self.right.subtree(&self.nodes).iter();
        let left = self.left.subtree(&self.nodes).iter();
        right
            .map(|id| (Side::Right, id))
            .chain(left.map(|id| (Side::Left, id)))
    }

    /// The side `id` hangs on. `None` for the root and unknown ids.
    pub fn side_of(&self, id: NodeId) -> Option<Side> {
        if !self.nodes.is_alive(id) {
            return None;
        }
        [Side::Right, Side::Left]
            .into_iter()
            .find(|&side| self.map(side).subtree(&self.nodes).contains(id))
    }

    /// The collection that directly holds `id`. `None` for the root and unknown ids.
    pub fn owner_of(&self, id: NodeId) -> Option<Owner> {
        let side = self.side_of(id)?;
        self.map(side).subtree(&self.nodes).find_owner_of(id)
    }

    /// The parent of `id`: [`NodeId::ROOT`] for first-layer nodes.
    pub fn parent_of(&self, id: NodeId) -> Option<NodeId> {
        match self.owner_of(id)? {
            Owner::Map(_) => Some(NodeId::ROOT),
            Owner::Node(parent) => Some(parent),
        }
    }

    /// Whether `id` hangs directly off the root.
    pub fn is_first_layer(&self, id: NodeId) -> bool {
        matches!(self.owner_of(id), Some(Owner::Map(_)))
    }

    /// The children collection for `owner`.
    pub fn children_of(&self, owner: Owner) -> Option<&Children> {
        match owner {
            Owner::Map(side) => Some(&self.map(side).children),
            Owner::Node(id) => self.nodes.get(id).map(|node| &node.children),
        }
    }

    /// The selected node, if any.
    pub fn selected(&self) -> Option<NodeId> {
        if self.root.frame().is_selected() {
            return Some(NodeId::ROOT);
        }
        self.right
            .subtree(&self.nodes)
            .find_selected()
            .or_else(|| self.left.subtree(&self.nodes).find_selected())
            .map(|node| node.frame.id)
    }

    /// Clear the selection.
    pub fn deselect(&mut self) {
        let Some(id) = self.selected() else {
            return;
        };
        if let Some(frame) = self.frame_mut(id) {
            frame.flags.remove(NodeFlags::SELECTED);
        }
    }

    /// Make `id` the only selected node.
    pub fn select(&mut self, id: NodeId) -> Result<()> {
        if !self.contains(id) {
            return Err(Error::NotFoundNode(id));
        }
        self.deselect();
        if let Some(frame) = self.frame_mut(id) {
            frame.flags.insert(NodeFlags::SELECTED);
        }
        #[cfg(feature = "tracing")]
        tracing::trace!(%id, "select");
        Ok(())
    }

    /// Whether any node is editing its text or its estimate.
    pub fn is_inputting(&self) -> bool {
        self.root.frame().is_inputting()
            || self.right.subtree(&self.nodes).is_inputting()
            || self.left.subtree(&self.nodes).is_inputting()
    }

    /// Enter or leave text edit mode on `id`.
    pub fn set_inputting(&mut self, id: NodeId, inputting: bool) -> Result<()> {
        let frame = self.frame_mut(id).ok_or(Error::NotFoundNode(id))?;
        frame.flags.set(NodeFlags::INPUTTING, inputting);
        Ok(())
    }

    /// Replace the text of `id`, re-measure it and re-place its map.
    pub fn set_text(
        &mut self,
        id: NodeId,
        text: impl Into<String>,
        metrics: &dyn TextMetrics,
    ) -> Result<()> {
        let text = text.into();
        if id.is_root() {
            self.root.set_text(text);
            self.root.measure(metrics, &self.config);
        } else {
            let node = self.nodes.get_mut(id).ok_or(Error::NotFoundNode(id))?;
            node.set_text(text);
            node.measure(metrics, &self.config);
        }
        self.update_node_placement(id)
    }

    /// Re-measure `id` from its current text without placing anything.
    pub fn measure_node(&mut self, id: NodeId, metrics: &dyn TextMetrics) -> Result<()> {
        if id.is_root() {
            self.root.measure(metrics, &self.config);
        } else {
            let node = self.nodes.get_mut(id).ok_or(Error::NotFoundNode(id))?;
            node.measure(metrics, &self.config);
        }
        Ok(())
    }

    /// Measure the root and every node.
    pub fn measure_all(&mut self, metrics: &dyn TextMetrics) {
        self.root.measure(metrics, &self.config);
        let ids: Vec<NodeId> = self.iter().map(|(_, id)| id).collect();
        for id in ids {
            if let Some(node) = self.nodes.get_mut(id) {
                node.measure(metrics, &self.config);
            }
        }
    }

    /// Place the root, both maps and every connector.
    pub fn update_all_placement(&mut self) {
        self.root.update_placement();
        self.right.update_placement(&mut self.nodes, &self.root);
        self.left.update_placement(&mut self.nodes, &self.root);
        self.update_accessory_placement();
    }

    /// Re-place the map holding `id` (everything for the root), then every connector.
    pub fn update_node_placement(&mut self, id: NodeId) -> Result<()> {
        if id.is_root() {
            self.update_all_placement();
            return Ok(());
        }
        let side = self.side_of(id).ok_or(Error::NotFoundNode(id))?;
        match side {
            Side::Right => self.right.update_placement(&mut self.nodes, &self.root),
            Side::Left => self.left.update_placement(&mut self.nodes, &self.root),
        }
        self.update_accessory_placement();
        Ok(())
    }

    /// Recompute every connector from current geometry.
    pub fn update_accessory_placement(&mut self) {
        self.right
            .update_accessory_placement(&mut self.nodes, &self.root, &self.config);
        self.left
            .update_accessory_placement(&mut self.nodes, &self.root, &self.config);
    }

    /// Append a new node with `text` to the collection `owner`.
    ///
    /// `Owner::Node(NodeId::ROOT)` means the right map. The new node is hidden if its parent
    /// is hidden or collapsed. Call [`measure_all`](Self::measure_all) or
    /// [`set_text`](Self::set_text) to size it.
    pub fn add_node(&mut self, owner: Owner, text: impl Into<String>) -> Result<NodeId> {
        let owner = match owner {
            Owner::Node(id) if id.is_root() => Owner::Map(Side::Right),
            owner => owner,
        };
        let hidden = match owner {
            Owner::Map(_) => false,
            Owner::Node(parent) => {
                let parent_node = self.nodes.get(parent).ok_or(Error::NotFoundNode(parent))?;
                parent_node.frame.is_hidden() || parent_node.is_collapsed()
            }
        };

        let id = self.nodes.insert(text.into());
        if let Some(node) = self.nodes.get_mut(id) {
            node.frame.flags.set(NodeFlags::HIDDEN, hidden);
        }
        if let Some(children) = self.collection_mut(owner) {
            children.push(id);
        }
        #[cfg(feature = "tracing")]
        tracing::debug!(%id, ?owner, "add node");
        Ok(id)
    }

    /// Insert a new node with `text` directly below `anchor`, in `anchor`'s collection.
    pub fn insert_after(&mut self, anchor: NodeId, text: impl Into<String>) -> Result<NodeId> {
        if anchor.is_root() {
            return Err(Error::NotFoundChildren(anchor));
        }
        let side = self.side_of(anchor).ok_or(Error::NotFoundNode(anchor))?;
        let hidden = self
            .nodes
            .get(anchor)
            .is_some_and(|node| node.frame.is_hidden());

        let id = self.nodes.insert(text.into());
        if let Some(node) = self.nodes.get_mut(id) {
            node.frame.flags.set(NodeFlags::HIDDEN, hidden);
        }
        let (children, nodes) = self.split_mut(side);
        if let Err(err) = children.insert_after_id(nodes, anchor, id) {
            nodes.free_subtree(id);
            return Err(err);
        }
        #[cfg(feature = "tracing")]
        tracing::debug!(%id, %anchor, "insert node");
        Ok(id)
    }

    /// Detach `id` and free it with its whole subtree, returning the freed node.
    pub fn remove_node(&mut self, id: NodeId) -> Result<Node> {
        if id.is_root() {
            return Err(Error::RootNotMovable);
        }
        let side = self.side_of(id).ok_or(Error::NotFoundNode(id))?;
        let (children, nodes) = self.split_mut(side);
        children.remove_by_id(nodes, id)?;
        let node = self.nodes.free_subtree(id).ok_or(Error::NotFoundNode(id))?;
        #[cfg(feature = "tracing")]
        tracing::debug!(%id, "remove node");
        Ok(node)
    }

    /// Move `id` and its subtree to `target`.
    ///
    /// `LastChildOf(NodeId::ROOT)` means the end of the right map. Every id is checked before
    /// anything moves, so an error leaves the map unchanged. The moved subtree's hidden state is
    /// refreshed against its new parent.
    pub fn move_node(&mut self, id: NodeId, target: DropTarget) -> Result<()> {
        if id.is_root() {
            return Err(Error::RootNotMovable);
        }
        let from = self.side_of(id).ok_or(Error::NotFoundNode(id))?;
        let target = match target {
            DropTarget::LastChildOf(anchor) if anchor.is_root() => DropTarget::MapEnd(Side::Right),
            target => target,
        };

        let (owner, hidden) = match target {
            DropTarget::MapEnd(side) => (Owner::Map(side), false),
            DropTarget::LastChildOf(anchor) => {
                self.check_move_anchor(id, anchor)?;
                let parent = self.nodes.get(anchor).ok_or(Error::NotFoundNode(anchor))?;
                (
                    Owner::Node(anchor),
                    parent.frame.is_hidden() || parent.is_collapsed(),
                )
            }
            DropTarget::Above(anchor) | DropTarget::Below(anchor) => {
                if anchor.is_root() {
                    return Err(Error::NotFoundChildren(anchor));
                }
                self.check_move_anchor(id, anchor)?;
                let owner = self.owner_of(anchor).ok_or(Error::NotFoundNode(anchor))?;
                let sibling = self.nodes.get(anchor).ok_or(Error::NotFoundNode(anchor))?;
                (owner, sibling.frame.is_hidden())
            }
        };

        let (children, nodes) = self.split_mut(from);
        children.remove_by_id(nodes, id)?;
        let attached = self.collection_mut(owner).is_some_and(|children| match target {
            DropTarget::MapEnd(_) | DropTarget::LastChildOf(_) => {
                children.push(id);
                true
            }
            DropTarget::Above(anchor) => children.insert_before(anchor, id),
            DropTarget::Below(anchor) => children.insert_after(anchor, id),
        });
        debug_assert!(attached, "move target was validated before detaching");
        self.refresh_hidden(id, hidden);

        #[cfg(feature = "tracing")]
        tracing::debug!(%id, ?target, "move node");
        Ok(())
    }

    /// Where a drop of `id` at origin-relative `position` would land.
    ///
    /// The root's tail regions come first, then the visible nodes of the right and the left map,
    /// skipping `id`'s own subtree.
    pub fn drop_target(&self, id: NodeId, position: Point) -> Option<DropTarget> {
        for side in [Side::Right, Side::Left] {
            if self.root.on_area(position) && self.root.on_tail(position.x, &self.config, side) {
                return Some(DropTarget::MapEnd(side));
            }
        }
        self.right
            .hit_test(&self.nodes, position, id, &self.config)
            .or_else(|| self.left.hit_test(&self.nodes, position, id, &self.config))
    }

    /// Drag-and-drop: move `id` to wherever `position` lands and re-place the tree.
    ///
    /// Returns the landing target, or `None` (and changes nothing) if the drop hit nothing.
    pub fn drop_node(&mut self, id: NodeId, position: Point) -> Result<Option<DropTarget>> {
        if id.is_root() {
            return Err(Error::RootNotMovable);
        }
        if !self.nodes.is_alive(id) {
            return Err(Error::NotFoundNode(id));
        }
        let Some(target) = self.drop_target(id, position) else {
            return Ok(None);
        };
        self.move_node(id, target)?;
        self.update_all_placement();
        Ok(Some(target))
    }

    /// Fold or unfold the subtree of `id`. Returns `false` for the root, which never collapses.
    ///
    /// Geometry is unchanged: hidden nodes keep their slots.
    pub fn toggle_collapse(&mut self, id: NodeId) -> Result<bool> {
        if id.is_root() {
            return Ok(false);
        }
        let node = self.node_mut(id)?;
        node.group.is_collapsed = !node.group.is_collapsed;
        let collapsed = node.group.is_collapsed;
        let hide = collapsed || node.frame.is_hidden();
        let children = node.children.clone();
        children.toggle_hidden(&mut self.nodes, hide);
        #[cfg(feature = "tracing")]
        tracing::debug!(%id, collapsed, "toggle collapse");
        Ok(true)
    }

    /// Show or hide the checkbox of `id`, re-measuring it since its width depends on it.
    pub fn set_checkbox_hidden(
        &mut self,
        id: NodeId,
        hidden: bool,
        metrics: &dyn TextMetrics,
    ) -> Result<()> {
        let node = self.nodes.get_mut(id).ok_or(Error::NotFoundNode(id))?;
        node.accessory.checkbox.hidden = hidden;
        node.measure(metrics, &self.config);
        self.update_node_placement(id)
    }

    /// Tick or untick the checkbox of `id`.
    pub fn toggle_checkbox_checked(&mut self, id: NodeId) -> Result<()> {
        let checkbox = &mut self.node_mut(id)?.accessory.checkbox;
        checkbox.checked = !checkbox.checked;
        Ok(())
    }

    /// Enter or leave estimate edit mode on `id`.
    pub fn set_estimate_editing(&mut self, id: NodeId, editing: bool) -> Result<()> {
        self.node_mut(id)?.accessory.estimate.is_editing = editing;
        Ok(())
    }

    /// Set the estimate of `id`, in minutes.
    pub fn set_estimate_minutes(&mut self, id: NodeId, minutes: u16) -> Result<()> {
        self.node_mut(id)?.accessory.estimate.minutes = minutes;
        Ok(())
    }

    fn node_mut(&mut self, id: NodeId) -> Result<&mut Node> {
        self.nodes.get_mut(id).ok_or(Error::NotFoundNode(id))
    }

    fn frame_mut(&mut self, id: NodeId) -> Option<&mut NodeBox> {
        if id.is_root() {
            Some(self.root.frame_mut())
        } else {
            self.nodes.get_mut(id).map(|node| &mut node.frame)
        }
    }

    fn split_mut(&mut self, side: Side) -> (&mut Children, &mut Nodes) {
        let map = match side {
            Side::Right => &mut self.right,
            Side::Left => &mut self.left,
        };
        (&mut map.children, &mut self.nodes)
    }

    fn collection_mut(&mut self, owner: Owner) -> Option<&mut Children> {
        match owner {
            Owner::Map(side) => Some(self.split_mut(side).0),
            Owner::Node(id) => self.nodes.get_mut(id).map(|node| &mut node.children),
        }
    }

    /// `anchor` must be a live node outside the subtree of `moved`.
    fn check_move_anchor(&self, moved: NodeId, anchor: NodeId) -> Result<()> {
        let moved_node = self.nodes.get(moved).ok_or(Error::NotFoundNode(moved))?;
        let cyclic = anchor == moved
            || moved_node
                .children
                .subtree(&self.nodes, Owner::Node(moved))
                .contains(anchor);
        if cyclic {
            return Err(Error::CyclicMove {
                moved,
                target: anchor,
            });
        }
        if !self.nodes.is_alive(anchor) {
            return Err(Error::NotFoundNode(anchor));
        }
        Ok(())
    }

    fn refresh_hidden(&mut self, id: NodeId, hidden: bool) {
        let Some(node) = self.nodes.get_mut(id) else {
            return;
        };
        node.frame.flags.set(NodeFlags::HIDDEN, hidden);
        let hide_children = hidden || node.group.is_collapsed;
        let children = node.children.clone();
        children.toggle_hidden(&mut self.nodes, hide_children);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::{FontProfile, TextExtent};

    fn fixed(text: &str, _font: FontProfile) -> TextExtent {
        TextExtent {
            longest_line_width: text.lines().map(str::len).max().unwrap_or(0) as f64 * 10.0,
            line_count: text.lines().count(),
        }
    }

    /// ```text
    /// root ─┬─ a ─┬─ x ── z
    ///       │     └─ y
    ///       └─ b
    /// ```
    fn sample() -> (MindMap, [NodeId; 5]) {
        let mut map = MindMap::new("root");
        let a = map.add_node(Owner::Map(Side::Right), "a").unwrap();
        let b = map.add_node(Owner::Map(Side::Right), "b").unwrap();
        let x = map.add_node(Owner::Node(a), "x").unwrap();
        let y = map.add_node(Owner::Node(a), "y").unwrap();
        let z = map.add_node(Owner::Node(x), "z").unwrap();
        map.measure_all(&fixed);
        map.update_all_placement();
        (map, [a, b, x, y, z])
    }

    #[test]
    fn lookups() {
        let (map, [a, b, x, _, z]) = sample();
        assert_eq!(map.side_of(z), Some(Side::Right));
        assert_eq!(map.side_of(NodeId::ROOT), None);
        assert_eq!(map.owner_of(b), Some(Owner::Map(Side::Right)));
        assert_eq!(map.parent_of(z), Some(x));
        assert_eq!(map.parent_of(a), Some(NodeId::ROOT));
        assert!(map.is_first_layer(a));
        assert!(!map.is_first_layer(x));
        assert!(matches!(map.find_node(NodeId::ROOT), Some(NodeRef::Root(_))));
        assert_eq!(map.iter().count(), 5);
    }

    #[test]
    fn selection_is_exclusive() {
        let (mut map, [a, b, ..]) = sample();
        map.select(a).unwrap();
        map.select(b).unwrap();
        assert_eq!(map.selected(), Some(b));
        assert!(!map.node(a).unwrap().frame().is_selected());

        map.select(NodeId::ROOT).unwrap();
        assert_eq!(map.selected(), Some(NodeId::ROOT));
        assert!(!map.node(b).unwrap().frame().is_selected());

        let dead = NodeId::new(77, 3);
        assert_eq!(map.select(dead), Err(Error::NotFoundNode(dead)));
        assert_eq!(map.selected(), Some(NodeId::ROOT));
    }

    #[test]
    fn lateral_offsets_follow_parents() {
        let (map, [a, b, x, y, z]) = sample();
        let root = map.root().frame();
        let left_of = |id| map.node(id).unwrap().frame().left;
        let width_of = |id| map.node(id).unwrap().frame().width;
        assert_eq!(left_of(a), root.left + root.width);
        assert_eq!(left_of(b), root.left + root.width);
        assert_eq!(left_of(x), left_of(a) + width_of(a));
        assert_eq!(left_of(y), left_of(a) + width_of(a));
        assert_eq!(left_of(z), left_of(x) + width_of(x));
    }

    #[test]
    fn delete_restacks_from_removed_slot() {
        let (mut map, [a, _, x, y, z]) = sample();
        assert_eq!(
            map.node(x).unwrap().group.top,
            map.node(a).unwrap().group.top
        );

        let removed = map.remove_node(x).unwrap();
        assert_eq!(removed.frame().text(), "x");
        assert!(map.node(z).is_none(), "subtree is freed with its top");
        map.update_all_placement();

        assert_eq!(map.node(a).unwrap().children.ids(), &[y]);
        assert_eq!(
            map.node(y).unwrap().group.top,
            map.node(a).unwrap().group.top
        );
        assert_eq!(map.remove_node(x).unwrap_err(), Error::NotFoundNode(x));
        assert_eq!(
            map.remove_node(NodeId::ROOT).unwrap_err(),
            Error::RootNotMovable
        );
    }

    #[test]
    fn insert_after_splices_into_anchor_collection() {
        let (mut map, [a, _, x, y, _]) = sample();
        let n = map.insert_after(x, "").unwrap();
        assert_eq!(map.node(a).unwrap().children.ids(), &[x, n, y]);
        assert_eq!(
            map.insert_after(NodeId::ROOT, "").unwrap_err(),
            Error::NotFoundChildren(NodeId::ROOT)
        );
    }

    #[test]
    fn drop_on_tail_reparents_as_last_child() {
        let (mut map, [a, b, x, y, _]) = sample();
        let frame = map.node(a).unwrap().frame().clone();
        let position = Point::new(
            frame.left + frame.width - 1.0,
            frame.top + frame.height / 2.0,
        );

        assert_eq!(
            map.drop_node(b, position),
            Ok(Some(DropTarget::LastChildOf(a)))
        );
        assert_eq!(map.node(a).unwrap().children.ids(), &[x, y, b]);
        assert_eq!(map.owner_of(b), Some(Owner::Node(a)));
        let a_frame = map.node(a).unwrap().frame();
        assert_eq!(
            map.node(b).unwrap().frame().left,
            a_frame.left + a_frame.width
        );
    }

    #[test]
    fn drop_on_root_tail_moves_to_map_end() {
        let (mut map, [a, b, x, ..]) = sample();
        let root = map.root().frame().clone();
        let center_y = root.top + root.height / 2.0;

        assert_eq!(
            map.drop_node(x, Point::new(root.width - 1.0, center_y)),
            Ok(Some(DropTarget::MapEnd(Side::Right)))
        );
        assert_eq!(map.map(Side::Right).children().ids(), &[a, b, x]);

        assert_eq!(
            map.drop_node(x, Point::new(1.0, center_y)),
            Ok(Some(DropTarget::MapEnd(Side::Left)))
        );
        assert_eq!(map.side_of(x), Some(Side::Left));
        let x_frame = map.node(x).unwrap().frame();
        assert_eq!(x_frame.left + x_frame.width, root.left);
    }

    #[test]
    fn drop_nowhere_is_a_no_op() {
        let (mut map, [_, b, ..]) = sample();
        let before = map.map(Side::Right).clone();
        assert_eq!(map.drop_node(b, Point::new(-5000.0, -5000.0)), Ok(None));
        assert_eq!(map.map(Side::Right), &before);
        assert_eq!(
            map.drop_node(NodeId::ROOT, Point::ZERO),
            Err(Error::RootNotMovable)
        );
    }

    #[test]
    fn move_into_own_subtree_is_rejected() {
        let (mut map, [a, _, x, _, z]) = sample();
        assert_eq!(
            map.move_node(a, DropTarget::LastChildOf(z)),
            Err(Error::CyclicMove {
                moved: a,
                target: z
            })
        );
        assert_eq!(
            map.move_node(x, DropTarget::Above(x)),
            Err(Error::CyclicMove {
                moved: x,
                target: x
            })
        );
        assert_eq!(map.owner_of(a), Some(Owner::Map(Side::Right)));
        assert_eq!(map.owner_of(z), Some(Owner::Node(x)));
    }

    #[test]
    fn move_above_and_below_siblings() {
        let (mut map, [a, b, x, y, _]) = sample();
        map.move_node(b, DropTarget::Above(y)).unwrap();
        assert_eq!(map.node(a).unwrap().children.ids(), &[x, b, y]);
        map.move_node(x, DropTarget::Below(y)).unwrap();
        assert_eq!(map.node(a).unwrap().children.ids(), &[b, y, x]);
    }

    #[test]
    fn collapse_hides_and_restores_descendants() {
        let (mut map, [a, _, x, y, z]) = sample();
        let curve = map.node(a).unwrap().accessory.curve;
        let hidden = |map: &MindMap, id| map.node(id).unwrap().frame().is_hidden();

        assert_eq!(map.toggle_collapse(x), Ok(true));
        assert!(hidden(&map, z));

        assert_eq!(map.toggle_collapse(a), Ok(true));
        map.update_all_placement();
        assert!(!hidden(&map, a));
        assert!(hidden(&map, x) && hidden(&map, y) && hidden(&map, z));
        assert_eq!(map.node(a).unwrap().accessory.curve, curve);

        assert_eq!(map.toggle_collapse(a), Ok(true));
        assert!(!hidden(&map, x) && !hidden(&map, y));
        assert!(hidden(&map, z), "x is still collapsed");
        assert!(map.node(x).unwrap().is_collapsed());

        assert_eq!(map.toggle_collapse(NodeId::ROOT), Ok(false));
    }

    #[test]
    fn moved_subtree_takes_hidden_state_of_new_parent() {
        let (mut map, [a, b, x, _, z]) = sample();
        map.toggle_collapse(a).unwrap();
        map.move_node(b, DropTarget::LastChildOf(a)).unwrap();
        assert!(map.node(b).unwrap().frame().is_hidden());

        map.move_node(x, DropTarget::MapEnd(Side::Left)).unwrap();
        assert!(!map.node(x).unwrap().frame().is_hidden());
        assert!(!map.node(z).unwrap().frame().is_hidden());
    }

    #[test]
    fn checkbox_widens_node() {
        let (mut map, [a, ..]) = sample();
        let width = map.node(a).unwrap().frame().width;
        map.set_checkbox_hidden(a, false, &fixed).unwrap();
        assert_eq!(
            map.node(a).unwrap().frame().width,
            width + map.config().checkbox_width
        );
        map.toggle_checkbox_checked(a).unwrap();
        assert!(map.node(a).unwrap().accessory.checkbox.checked);
    }

    #[test]
    fn inputting_is_derived() {
        let (mut map, [_, b, ..]) = sample();
        assert!(!map.is_inputting());
        map.set_estimate_editing(b, true).unwrap();
        assert!(map.is_inputting());
        map.set_estimate_editing(b, false).unwrap();
        map.set_inputting(NodeId::ROOT, true).unwrap();
        assert!(map.is_inputting());
    }

    #[test]
    fn root_text_edit_shifts_first_layer() {
        let (mut map, [a, ..]) = sample();
        map.set_text(NodeId::ROOT, "a much longer root", &fixed).unwrap();
        let root = map.root().frame();
        assert_eq!(map.node(a).unwrap().frame().left, root.left + root.width);
    }
}
