// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Keyboard editing and drag-and-drop over a small mind map.
//!
//! This example shows how to combine:
//! - `mindmap_tree` for the node tree, layout and connector curves,
//! - `mindmap_input` for key mapping, navigation and command dispatch.
//!
//! Text is measured with a fixed advance per character, standing in for a real font stack.
//!
//! Run:
//! - `cargo run -p mindmap_demos --example edit_and_drop`

use kurbo::Point;
use mindmap_input::{Command, Editor, Modifiers, Outcome, Shortcut};
use mindmap_tree::{FontProfile, MindMap, NodeId, Owner, Placed, Side, TextExtent};

type Metrics = fn(&str, FontProfile) -> TextExtent;

/// 7px per character for nodes, 9px for the root; one line per `\n`.
fn fixed_advance(text: &str, font: FontProfile) -> TextExtent {
    let advance = match font {
        FontProfile::Root => 9.0,
        FontProfile::Node => 7.0,
    };
    let longest = text.lines().map(|line| line.chars().count()).max().unwrap_or(0);
    TextExtent {
        longest_line_width: longest as f64 * advance,
        line_count: text.lines().count(),
    }
}

fn print_map(label: &str, editor: &Editor<Metrics>) {
    let map = editor.mind_map();
    let root = map.root().frame();
    println!("\n== {label} ==");
    println!(
        "root {:?} box=({:.1}, {:.1}) {:.1}x{:.1}{}",
        root.text(),
        root.left,
        root.top,
        root.width,
        root.height,
        if root.is_selected() { " [selected]" } else { "" }
    );
    for (side, id) in map.iter() {
        let node = map.node(id).expect("ids from iter are live");
        let frame = node.frame();
        let mut depth = 0;
        let mut cursor = id;
        while let Some(parent) = map.parent_of(cursor) {
            depth += 1;
            cursor = parent;
        }
        let mut marks = String::new();
        if frame.is_selected() {
            marks.push_str(" [selected]");
        }
        if frame.is_inputting() {
            marks.push_str(" [editing]");
        }
        if frame.is_hidden() {
            marks.push_str(" [hidden]");
        }
        if node.is_collapsed() {
            marks.push_str(" [collapsed]");
        }
        println!(
            "{:indent$}{side:?} {id} {:?} box=({:.1}, {:.1}) {:.1}x{:.1}{marks}",
            "",
            frame.text(),
            frame.left,
            frame.top,
            frame.width,
            frame.height,
            indent = depth * 2,
        );
        println!(
            "{:indent$}  path: {}",
            "",
            node.accessory.curve.path_command(),
            indent = depth * 2
        );
    }
}

fn press(editor: &mut Editor<Metrics>, key: &str, modifiers: Modifiers) {
    let Some(shortcut) = Shortcut::from_key(key, modifiers) else {
        println!("key {key:?} has no shortcut");
        return;
    };
    match editor.apply(Command::Key(shortcut)) {
        Ok(Outcome::ScrollToOrigin) => println!("key {key:?}: scroll to origin"),
        Ok(outcome) => println!("key {key:?}: {outcome:?}"),
        Err(err) => println!("key {key:?}: error: {err}"),
    }
}

fn main() {
    let mut map = MindMap::new("Release");
    let plan = map.add_node(Owner::Map(Side::Right), "Plan").unwrap();
    map.add_node(Owner::Node(plan), "Scope\nand milestones").unwrap();
    map.add_node(Owner::Node(plan), "Risks").unwrap();
    let build = map.add_node(Owner::Map(Side::Right), "Build").unwrap();
    map.add_node(Owner::Map(Side::Left), "Docs").unwrap();
    map.select(NodeId::ROOT).unwrap();

    let metrics: Metrics = fixed_advance;
    let mut editor = Editor::new(map, metrics);
    print_map("initial", &editor);

    // Into the right map, down to "Build", then add a child and name it.
    press(&mut editor, "ArrowRight", Modifiers::empty());
    press(&mut editor, "ArrowDown", Modifiers::empty());
    press(&mut editor, "Tab", Modifiers::empty());
    let added = editor.mind_map().selected().unwrap();
    editor
        .apply(Command::SetText {
            id: added,
            text: "Continuous integration".into(),
        })
        .unwrap();
    // Keys are ignored until editing ends.
    press(&mut editor, "ArrowLeft", Modifiers::empty());
    editor
        .apply(Command::SetInputting {
            id: added,
            inputting: false,
        })
        .unwrap();
    print_map("after adding a child to Build", &editor);

    // Drag "Build" onto the tail of "Plan".
    let plan_frame = editor.mind_map().node(plan).unwrap().frame().clone();
    let position = Point::new(
        plan_frame.left + plan_frame.width - 2.0,
        plan_frame.top + plan_frame.height / 2.0,
    );
    let outcome = editor.apply(Command::Drop { id: build, position }).unwrap();
    println!("\ndrop Build at ({:.1}, {:.1}): {outcome:?}", position.x, position.y);
    print_map("after dropping Build onto Plan", &editor);

    // Fold "Plan" away; geometry stays, descendants hide.
    editor.apply(Command::Select(plan)).unwrap();
    press(&mut editor, " ", Modifiers::empty());
    press(&mut editor, "F6", Modifiers::empty());
    print_map("after collapsing Plan", &editor);
}
