// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=mindmap_tree --heading-base-level=0

//! Mindmap Tree: the node tree, layout and drag-and-drop engine of a mind-map editor.
//!
//! A mind map is a root node with two lateral halves: subtrees on the right grow rightwards,
//! subtrees on the left mirror them. This crate holds that tree and computes every node's box
//! and the connector curve between each parent and child.
//!
//! - Represents the tree as a generational arena of nodes plus ordered id collections.
//! - Stacks siblings vertically by the larger of their own and their subtree's height, centred
//!   on the root, and offsets each depth laterally from its parent.
//! - Hit-tests drop positions to re-parent or reorder nodes by drag-and-drop.
//! - Folds subtrees away without moving anything else.
//!
//! ## Not a text engine
//!
//! This crate never shapes or measures text. Hosts implement [`TextMetrics`] over their font
//! stack; the engine turns the reported extents into box sizes using [`LayoutConfig`].
//! Nor does it render: read [`NodeBox`] fields and [`Curve::path_command`] to draw.
//!
//! ## API overview
//!
//! - [`MindMap`]: the aggregate. Lookups, selection, structural edits, placement and drops.
//! - [`Map`]: one side of the root and its whole-subtree layout.
//! - [`Children`] and [`Subtree`]: ordered direct children and depth-first queries below them.
//! - [`RootNode`], [`Node`] and [`NodeRef`]: the node variants, sharing a [`NodeBox`] and the
//!   [`Placed`] geometry trait.
//! - [`NodeId`]: generational handle of a node. [`NodeId::ROOT`] names the root.
//! - [`NodeFlags`]: hidden, selected and inputting state.
//! - [`DropTarget`]: where a dragged node lands.
//!
//! Key operations:
//! - [`MindMap::add_node`] / [`MindMap::insert_after`] → [`NodeId`]
//! - [`MindMap::remove_node`] and [`MindMap::move_node`]
//! - [`MindMap::set_text`] re-measures and re-places.
//! - [`MindMap::update_all_placement`] runs node placement, then connector placement.
//! - [`MindMap::drop_node`] hit-tests a drop and moves the node.
//! - [`MindMap::toggle_collapse`] hides or reveals a subtree.
//!
//! ## Example
//!
//! ```rust
//! use mindmap_tree::{FontProfile, MindMap, Owner, Placed, Side, TextExtent};
//!
//! // 8px per character, one line per `\n`.
//! let metrics = |text: &str, _font: FontProfile| TextExtent {
//!     longest_line_width: text.lines().map(str::len).max().unwrap_or(0) as f64 * 8.0,
//!     line_count: text.lines().count(),
//! };
//!
//! let mut map = MindMap::new("Plan");
//! let a = map.add_node(Owner::Map(Side::Right), "Design").unwrap();
//! let b = map.add_node(Owner::Map(Side::Right), "Build").unwrap();
//! map.measure_all(&metrics);
//! map.update_all_placement();
//!
//! let root = map.root().frame();
//! let (a, b) = (map.node(a).unwrap().frame(), map.node(b).unwrap().frame());
//! assert_eq!(a.left, root.left + root.width);
//! assert_eq!(b.top, a.top + a.height);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod arena;
mod children;
mod config;
mod error;
mod geometry;
mod map;
mod metrics;
mod mind_map;
mod node;
mod types;

pub use arena::Nodes;
pub use children::{Children, DepthFirst, Subtree};
pub use config::LayoutConfig;
pub use error::{Error, Result};
pub use geometry::{Curve, Placed};
pub use map::{DropTarget, Map};
pub use metrics::{FontProfile, TextExtent, TextMetrics};
pub use mind_map::MindMap;
pub use node::{Accessory, Node, NodeBox, NodeRef, RootNode};
pub use types::{Checkbox, EstimateTime, Group, NodeFlags, NodeId, Owner, Side};
