// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Property-based editor invariants.
//!
//! For any sequence of key presses, clicks and edit-mode exits:
//!
//! 1. Key commands never fail.
//! 2. At most one node is selected.
//! 3. Every node stays laterally attached to its parent.
//! 4. A navigation key from a visible node never selects a hidden node.

use mindmap_input::{Command, Editor, Navigation, Outcome, Shortcut};
use mindmap_tree::{FontProfile, MindMap, NodeId, Owner, Placed, Side, TextExtent};
use proptest::prelude::*;

// ── Helpers ─────────────────────────────────────────────────────────────

type Metrics = fn(&str, FontProfile) -> TextExtent;

fn fixed(text: &str, _font: FontProfile) -> TextExtent {
    TextExtent {
        longest_line_width: text.len() as f64 * 9.0,
        line_count: text.lines().count(),
    }
}

#[derive(Clone, Debug)]
enum Step {
    Key(Shortcut),
    /// Click the n-th node in depth-first order (the root when out of range).
    Click(usize),
    /// Leave text and estimate edit mode on whatever is selected.
    StopEditing,
}

fn shortcut() -> impl Strategy<Value = Shortcut> {
    prop_oneof![
        Just(Shortcut::Navigate(Navigation::Up)),
        Just(Shortcut::Navigate(Navigation::Down)),
        Just(Shortcut::Navigate(Navigation::Left)),
        Just(Shortcut::Navigate(Navigation::Right)),
        Just(Shortcut::AddChild),
        Just(Shortcut::AddSibling),
        Just(Shortcut::Delete),
        Just(Shortcut::EditText),
        Just(Shortcut::ToggleCheckbox),
        Just(Shortcut::ToggleChecked),
        Just(Shortcut::EditEstimate),
        Just(Shortcut::ToggleCollapse),
        Just(Shortcut::NewLine),
        Just(Shortcut::ScrollToOrigin),
    ]
}

fn step() -> impl Strategy<Value = Step> {
    prop_oneof![
        6 => shortcut().prop_map(Step::Key),
        2 => (0usize..16).prop_map(Step::Click),
        2 => Just(Step::StopEditing),
    ]
}

fn editor() -> Editor<Metrics> {
    let mut map = MindMap::new("root");
    let a = map.add_node(Owner::Map(Side::Right), "alpha").unwrap();
    map.add_node(Owner::Map(Side::Right), "beta").unwrap();
    map.add_node(Owner::Node(a), "gamma").unwrap();
    map.add_node(Owner::Map(Side::Left), "delta").unwrap();
    map.select(NodeId::ROOT).unwrap();
    Editor::new(map, fixed as Metrics)
}

fn run(editor: &mut Editor<Metrics>, step: &Step) -> Result<Outcome, mindmap_input::Error> {
    match *step {
        Step::Key(shortcut) => editor.apply(Command::Key(shortcut)),
        Step::Click(n) => {
            let id = editor
                .mind_map()
                .iter()
                .nth(n)
                .map_or(NodeId::ROOT, |(_, id)| id);
            editor.apply(Command::Select(id))
        }
        Step::StopEditing => {
            let Some(id) = editor.mind_map().selected() else {
                return Ok(Outcome::Unchanged);
            };
            editor.apply(Command::SetInputting {
                id,
                inputting: false,
            })?;
            if id.is_root() {
                return Ok(Outcome::Changed);
            }
            editor.apply(Command::ExitEstimateEdit(id))
        }
    }
}

fn selected_count(map: &MindMap) -> usize {
    let root = usize::from(map.root().frame().is_selected());
    root + map
        .iter()
        .filter(|&(_, id)| map.node(id).unwrap().frame().is_selected())
        .count()
}

// ═════════════════════════════════════════════════════════════════════════
// Invariants over command sequences
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn commands_keep_tree_consistent(steps in proptest::collection::vec(step(), 1..60)) {
        let mut editor = editor();
        for step in &steps {
            let result = run(&mut editor, step);
            prop_assert!(result.is_ok(), "{:?} failed: {:?}", step, result);

            let map = editor.mind_map();
            prop_assert!(selected_count(map) <= 1, "more than one selection after {:?}", step);

            for (side, id) in map.iter() {
                let parent = map.find_node(map.parent_of(id).unwrap()).unwrap().frame();
                let frame = map.node(id).unwrap().frame();
                let attached = match side {
                    Side::Right => frame.left == parent.left + parent.width,
                    Side::Left => frame.left + frame.width == parent.left,
                };
                prop_assert!(attached, "{} detached after {:?}", id, step);
            }
        }
    }

    #[test]
    fn navigation_never_selects_hidden_nodes(steps in proptest::collection::vec(step(), 1..60)) {
        let mut editor = editor();
        for step in &steps {
            let before = editor.mind_map().selected();
            let from_hidden = before
                .and_then(|id| editor.mind_map().node(id))
                .is_some_and(|node| node.frame().is_hidden());
            run(&mut editor, step).unwrap();
            // Clicks can select hidden nodes; their siblings and parent are hidden too.
            if from_hidden {
                continue;
            }
            if !matches!(step, Step::Key(Shortcut::Navigate(_))) {
                continue;
            }
            let map = editor.mind_map();
            let Some(selected) = map.selected() else { continue };
            if Some(selected) == before || selected.is_root() {
                continue;
            }
            prop_assert!(
                !map.node(selected).unwrap().frame().is_hidden(),
                "{:?} selected hidden node {}",
                step,
                selected
            );
        }
    }
}
