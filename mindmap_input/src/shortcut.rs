// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Keyboard shortcuts and the key identifiers that produce them.

use crate::navigation::Navigation;

bitflags::bitflags! {
    /// Modifier keys held with a key press.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Modifiers: u8 {
        /// Shift.
        const SHIFT = 0b0000_0001;
        /// Meta (Command on macOS).
        const META  = 0b0000_0010;
    }
}

/// Every keyboard action the editor understands.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Shortcut {
    /// Arrow keys.
    Navigate(Navigation),
    /// `Tab`: append a blank child to the selected node.
    AddChild,
    /// `Enter`: insert a blank sibling below the selected node.
    AddSibling,
    /// `Backspace`: delete the selected node and its subtree.
    Delete,
    /// `Meta+E`: edit the selected node's text.
    EditText,
    /// `C`: show or hide the selected node's checkbox.
    ToggleCheckbox,
    /// `Meta+Enter`: tick or untick the selected node's checkbox.
    ToggleChecked,
    /// `T`: edit the selected node's estimate.
    EditEstimate,
    /// `Space`: fold or unfold the selected node's subtree.
    ToggleCollapse,
    /// `Shift+Enter`: a line break inside the text being edited. Never edits the tree.
    NewLine,
    /// `F6`: scroll the viewport back to the origin. Never edits the tree.
    ScrollToOrigin,
}

impl Shortcut {
    /// Map a DOM-style key identifier (`"ArrowUp"`, `"Tab"`, `"e"`, `" "`, ...) and the held
    /// modifiers to a shortcut.
    ///
    /// Letter keys match either case. Keys with no shortcut, and letters held with a modifier
    /// they do not use, yield `None`.
    pub fn from_key(key: &str, modifiers: Modifiers) -> Option<Self> {
        let meta = modifiers.contains(Modifiers::META);
        let shift = modifiers.contains(Modifiers::SHIFT);
        let shortcut = match key {
            "ArrowUp" => Self::Navigate(Navigation::Up),
            "ArrowDown" => Self::Navigate(Navigation::Down),
            "ArrowLeft" => Self::Navigate(Navigation::Left),
            "ArrowRight" => Self::Navigate(Navigation::Right),
            "Tab" => Self::AddChild,
            "Enter" if meta => Self::ToggleChecked,
            "Enter" if shift => Self::NewLine,
            "Enter" => Self::AddSibling,
            "Backspace" => Self::Delete,
            "e" | "E" if meta => Self::EditText,
            "c" | "C" if !meta => Self::ToggleCheckbox,
            "t" | "T" if !meta => Self::EditEstimate,
            " " => Self::ToggleCollapse,
            "F6" => Self::ScrollToOrigin,
            _ => return None,
        };
        Some(shortcut)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enter_depends_on_modifiers() {
        assert_eq!(
            Shortcut::from_key("Enter", Modifiers::empty()),
            Some(Shortcut::AddSibling)
        );
        assert_eq!(
            Shortcut::from_key("Enter", Modifiers::SHIFT),
            Some(Shortcut::NewLine)
        );
        assert_eq!(
            Shortcut::from_key("Enter", Modifiers::META),
            Some(Shortcut::ToggleChecked)
        );
    }

    #[test]
    fn letters() {
        assert_eq!(
            Shortcut::from_key("e", Modifiers::META),
            Some(Shortcut::EditText)
        );
        assert_eq!(Shortcut::from_key("e", Modifiers::empty()), None);
        assert_eq!(
            Shortcut::from_key("C", Modifiers::SHIFT),
            Some(Shortcut::ToggleCheckbox)
        );
        assert_eq!(Shortcut::from_key("c", Modifiers::META), None);
        assert_eq!(
            Shortcut::from_key("t", Modifiers::empty()),
            Some(Shortcut::EditEstimate)
        );
    }

    #[test]
    fn navigation_and_others() {
        assert_eq!(
            Shortcut::from_key("ArrowLeft", Modifiers::empty()),
            Some(Shortcut::Navigate(Navigation::Left))
        );
        assert_eq!(
            Shortcut::from_key(" ", Modifiers::empty()),
            Some(Shortcut::ToggleCollapse)
        );
        assert_eq!(
            Shortcut::from_key("F6", Modifiers::empty()),
            Some(Shortcut::ScrollToOrigin)
        );
        assert_eq!(Shortcut::from_key("Escape", Modifiers::empty()), None);
    }
}
