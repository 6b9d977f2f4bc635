// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Mindmap Input: keyboard navigation, shortcuts and command dispatch for a mind map.
//!
//! This crate turns input events into edits of a [`mindmap_tree::MindMap`]:
//! - **Navigation intents** ([`Navigation`]) from the arrow keys, resolved to the next selected
//!   node by a pluggable [`SelectionPolicy`]. [`TreePolicy`] walks siblings, first children and
//!   parents, mirroring left and right on the left map.
//! - **Shortcuts** ([`Shortcut`]) mapped from DOM-style key identifiers plus [`Modifiers`].
//! - **Commands** ([`Command`]) applied by an [`Editor`], which owns the map and a
//!   [`mindmap_tree::TextMetrics`], performs at most one mutation per command, and re-places the
//!   tree afterwards.
//!
//! ## Minimal example
//!
//! ```rust
//! use mindmap_input::{Command, Editor, Modifiers, Outcome, Shortcut};
//! use mindmap_tree::{FontProfile, MindMap, NodeId, Owner, Side, TextExtent};
//!
//! let metrics = |text: &str, _font: FontProfile| TextExtent {
//!     longest_line_width: text.len() as f64 * 8.0,
//!     line_count: text.lines().count(),
//! };
//! let mut map = MindMap::new("Trip");
//! let a = map.add_node(Owner::Map(Side::Right), "Tickets").unwrap();
//! let b = map.add_node(Owner::Map(Side::Right), "Hotel").unwrap();
//! let mut editor = Editor::new(map, metrics);
//!
//! editor.apply(Command::Select(a)).unwrap();
//! let down = Shortcut::from_key("ArrowDown", Modifiers::empty()).unwrap();
//! assert_eq!(editor.apply(Command::Key(down)), Ok(Outcome::Changed));
//! assert_eq!(editor.mind_map().selected(), Some(b));
//!
//! // Tab adds a blank child and starts editing it.
//! editor.apply(Command::Key(Shortcut::AddChild)).unwrap();
//! assert!(editor.mind_map().is_inputting());
//! assert_ne!(editor.mind_map().selected(), Some(NodeId::ROOT));
//! ```
//!
//! ## Features
//!
//! - `std` (default): enables `std` support for dependencies such as `kurbo`.
//! - `libm`: enables `no_std` + `alloc` builds that rely on `libm` for floating-point math.
//! - `tracing`: emits a `tracing` span per applied command and events for structural edits.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod editor;
mod navigation;
mod shortcut;

pub use editor::{Command, Editor, Outcome};
pub use navigation::{Navigation, SelectionPolicy, TreePolicy};
pub use shortcut::{Modifiers, Shortcut};

pub use mindmap_tree::{Error, Result};
