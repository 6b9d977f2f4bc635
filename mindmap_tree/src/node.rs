// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Node variants: the root and ordinary nodes, sharing a [`NodeBox`].

use alloc::string::String;

use crate::children::Children;
use crate::config::LayoutConfig;
use crate::geometry::{Curve, Placed};
use crate::metrics::{FontProfile, TextExtent, TextMetrics};
use crate::types::{Checkbox, EstimateTime, Group, NodeFlags, NodeId, Side};

/// State shared by every node: identity, text, placement and flags.
///
/// `width` and `height` are the total box including margin, border and padding. `top` and
/// `left` are relative to the configured origin.
#[derive(Clone, Debug, PartialEq)]
pub struct NodeBox {
    pub(crate) id: NodeId,
    pub(crate) text: String,
    /// Total width.
    pub width: f64,
    /// Total height.
    pub height: f64,
    /// Top edge, relative to the origin.
    pub top: f64,
    /// Left edge, relative to the origin.
    pub left: f64,
    /// Hidden, selected and inputting state.
    pub flags: NodeFlags,
}

impl NodeBox {
    fn new(id: NodeId, text: String) -> Self {
        Self {
            id,
            text,
            width: 0.0,
            height: 0.0,
            top: 0.0,
            left: 0.0,
            flags: NodeFlags::empty(),
        }
    }

    /// The node's id.
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// The node's text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Whether the node is hidden under a collapsed ancestor.
    pub fn is_hidden(&self) -> bool {
        self.flags.contains(NodeFlags::HIDDEN)
    }

    /// Whether the node is the current selection.
    pub fn is_selected(&self) -> bool {
        self.flags.contains(NodeFlags::SELECTED)
    }

    /// Whether the node's text is being edited.
    pub fn is_inputting(&self) -> bool {
        self.flags.contains(NodeFlags::INPUTTING)
    }

    fn size_from(
        &mut self,
        extent: TextExtent,
        line_height: f64,
        min_width: f64,
        config: &LayoutConfig,
    ) {
        let lines = extent.line_count.max(1);
        #[allow(clippy::cast_precision_loss, reason = "Line counts are far below 2^52.")]
        let text_height = lines as f64 * line_height;
        self.width = config.around_area_width() + extent.longest_line_width.max(min_width);
        self.height = config.around_area_height() + text_height;
    }
}

/// The unique parentless node the two lateral maps hang off.
#[derive(Clone, Debug, PartialEq)]
pub struct RootNode {
    frame: NodeBox,
}

impl RootNode {
    /// Create a root with `text`. Size and position are zero until measured and placed.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            frame: NodeBox::new(NodeId::ROOT, text.into()),
        }
    }

    pub(crate) fn set_text(&mut self, text: String) {
        self.frame.text = text;
    }

    /// Root placement: pinned to the origin.
    pub(crate) fn update_placement(&mut self) {
        self.frame.top = 0.0;
        self.frame.left = 0.0;
    }
}

impl Placed for RootNode {
    fn frame(&self) -> &NodeBox {
        &self.frame
    }

    fn frame_mut(&mut self) -> &mut NodeBox {
        &mut self.frame
    }

    fn measure(&mut self, metrics: &dyn TextMetrics, config: &LayoutConfig) {
        let extent = metrics.measure(&self.frame.text, FontProfile::Root);
        self.frame.size_from(
            extent,
            config.root_line_height,
            config.root_min_text_width,
            config,
        );
    }
}

/// Secondary per-node state that does not affect the tree's structure.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Accessory {
    /// Connector from the parent to this node.
    pub curve: Curve,
    /// Checkbox in front of the text.
    pub checkbox: Checkbox,
    /// Time estimate.
    pub estimate: EstimateTime,
}

/// A non-root node: a box with a subtree.
#[derive(Clone, Debug, PartialEq)]
pub struct Node {
    pub(crate) frame: NodeBox,
    /// Vertical slot and collapse state.
    pub group: Group,
    /// Direct children, in stacking order.
    pub children: Children,
    /// Connector, checkbox and estimate.
    pub accessory: Accessory,
}

impl Node {
    pub(crate) fn new(id: NodeId, text: String) -> Self {
        Self {
            frame: NodeBox::new(id, text),
            group: Group::default(),
            children: Children::new(),
            accessory: Accessory::default(),
        }
    }

    /// Whether the node's own subtree is folded away.
    pub fn is_collapsed(&self) -> bool {
        self.group.is_collapsed
    }

    pub(crate) fn set_text(&mut self, text: String) {
        self.frame.text = text;
    }

    /// Place the box inside its group: vertically centred against a taller subtree, top-aligned
    /// otherwise.
    pub(crate) fn update_top(&mut self, subtree_height: f64) {
        let from_group_top = if subtree_height < self.frame.height {
            0.0
        } else {
            (subtree_height - self.frame.height) / 2.0
        };
        self.frame.top = self.group.top + from_group_top;
    }

    /// Place the box laterally next to its parent.
    pub(crate) fn set_left(&mut self, parent_left: f64, parent_width: f64, side: Side) {
        self.frame.left = match side {
            Side::Right => parent_left + parent_width,
            Side::Left => parent_left - self.frame.width,
        };
    }
}

impl Placed for Node {
    fn frame(&self) -> &NodeBox {
        &self.frame
    }

    fn frame_mut(&mut self) -> &mut NodeBox {
        &mut self.frame
    }

    fn measure(&mut self, metrics: &dyn TextMetrics, config: &LayoutConfig) {
        let extent = metrics.measure(&self.frame.text, FontProfile::Node);
        self.frame.size_from(extent, config.line_height, config.min_text_width, config);
        if !self.accessory.checkbox.hidden {
            self.frame.width += config.checkbox_width;
        }
    }
}

/// A borrowed node of either variant.
#[derive(Clone, Copy, Debug)]
pub enum NodeRef<'a> {
    /// The root node.
    Root(&'a RootNode),
    /// A non-root node.
    Node(&'a Node),
}

impl<'a> NodeRef<'a> {
    /// The node's box.
    pub fn frame(self) -> &'a NodeBox {
        match self {
            Self::Root(root) => &root.frame,
            Self::Node(node) => &node.frame,
        }
    }

    /// The node's id.
    pub fn id(self) -> NodeId {
        self.frame().id
    }

    /// The node as a geometry trait object.
    pub fn as_placed(self) -> &'a dyn Placed {
        match self {
            Self::Root(root) => root as &dyn Placed,
            Self::Node(node) => node as &dyn Placed,
        }
    }

    /// The node if it is not the root.
    pub fn as_node(self) -> Option<&'a Node> {
        match self {
            Self::Root(_) => None,
            Self::Node(node) => Some(node),
        }
    }
}
