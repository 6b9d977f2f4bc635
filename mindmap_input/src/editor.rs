// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Command dispatch: one input event, at most one mutation, then placement.

use alloc::string::String;

use kurbo::Point;
use mindmap_tree::{
    Error, EstimateTime, MindMap, Node, NodeId, Owner, Placed, Result, Side, TextMetrics,
};

use crate::navigation::{Navigation, SelectionPolicy, TreePolicy};
use crate::shortcut::Shortcut;

/// One input event, already translated from the host's event system.
#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    /// A key press. See [`Shortcut::from_key`].
    Key(Shortcut),
    /// A dragged node released at an origin-relative position.
    Drop {
        /// The dragged node.
        id: NodeId,
        /// Release position, relative to the map origin.
        position: Point,
    },
    /// A click on a node.
    Select(NodeId),
    /// The text of a node changed.
    SetText {
        /// The edited node.
        id: NodeId,
        /// Its new text.
        text: String,
    },
    /// A node's text field gained or lost focus.
    SetInputting {
        /// The node.
        id: NodeId,
        /// Whether its text is being edited.
        inputting: bool,
    },
    /// The estimate field of a node changed.
    SetEstimate {
        /// The node.
        id: NodeId,
        /// Raw field content. See [`EstimateTime::parse`].
        text: String,
    },
    /// The estimate field of a node lost focus.
    ExitEstimateEdit(NodeId),
}

/// What a command did.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// The map changed; redraw it.
    Changed,
    /// Nothing changed.
    Unchanged,
    /// Nothing changed; the host should scroll its viewport back to the origin.
    ScrollToOrigin,
}

impl Outcome {
    fn changed_if(changed: bool) -> Self {
        if changed {
            Self::Changed
        } else {
            Self::Unchanged
        }
    }
}

/// Owns a [`MindMap`] and applies [`Command`]s to it.
///
/// Every command runs to completion: the structural edit first, then node placement, then
/// connector placement. Keys need a selected node and, while any node is editing its text or
/// estimate, only `Enter` acts.
#[derive(Debug)]
pub struct Editor<M, P = TreePolicy> {
    map: MindMap,
    metrics: M,
    policy: P,
}

impl<M: TextMetrics> Editor<M> {
    /// Measure and place `map`, then wrap it with tree navigation.
    pub fn new(map: MindMap, metrics: M) -> Self {
        Self::with_policy(map, metrics, TreePolicy)
    }
}

impl<M: TextMetrics, P: SelectionPolicy> Editor<M, P> {
    /// Measure and place `map`, then wrap it with a custom navigation policy.
    pub fn with_policy(mut map: MindMap, metrics: M, policy: P) -> Self {
        map.measure_all(&metrics);
        map.update_all_placement();
        Self {
            map,
            metrics,
            policy,
        }
    }

    /// The map, for drawing.
    pub fn mind_map(&self) -> &MindMap {
        &self.map
    }

    /// Give up the map.
    pub fn into_mind_map(self) -> MindMap {
        self.map
    }

    /// Apply one command.
    ///
    /// Errors come from ids that are not in the map; the map is unchanged when one is returned.
    pub fn apply(&mut self, command: Command) -> Result<Outcome> {
        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!("apply", ?command).entered();

        match command {
            Command::Key(shortcut) => self.handle_key(shortcut),
            Command::Drop { id, position } => {
                let target = self.map.drop_node(id, position)?;
                Ok(Outcome::changed_if(target.is_some()))
            }
            Command::Select(id) => {
                self.map.select(id)?;
                Ok(Outcome::Changed)
            }
            Command::SetText { id, text } => {
                self.map.set_text(id, text, &self.metrics)?;
                Ok(Outcome::Changed)
            }
            Command::SetInputting { id, inputting } => {
                self.map.set_inputting(id, inputting)?;
                Ok(Outcome::Changed)
            }
            Command::SetEstimate { id, text } => {
                if !self.map.contains(id) {
                    return Err(Error::NotFoundNode(id));
                }
                let Some(minutes) = EstimateTime::parse(&text) else {
                    #[cfg(feature = "tracing")]
                    tracing::debug!(%id, text = %text, "rejected estimate");
                    return Ok(Outcome::Unchanged);
                };
                self.map.set_estimate_minutes(id, minutes)?;
                Ok(Outcome::Changed)
            }
            Command::ExitEstimateEdit(id) => {
                self.map.set_estimate_editing(id, false)?;
                Ok(Outcome::Changed)
            }
        }
    }

    fn handle_key(&mut self, shortcut: Shortcut) -> Result<Outcome> {
        if self.map.is_inputting() {
            return match shortcut {
                Shortcut::AddSibling => self.exit_estimate_edit_mode(),
                _ => Ok(Outcome::Unchanged),
            };
        }
        let Some(selected) = self.map.selected() else {
            return Ok(match shortcut {
                Shortcut::ScrollToOrigin => Outcome::ScrollToOrigin,
                _ => Outcome::Unchanged,
            });
        };

        match shortcut {
            Shortcut::Navigate(direction) => self.navigate(selected, direction),
            Shortcut::AddChild => self.add_node_to_tail(selected),
            Shortcut::AddSibling => self.add_node_to_bottom(selected),
            Shortcut::Delete => self.delete_node(selected),
            Shortcut::EditText => {
                self.map.set_inputting(selected, true)?;
                Ok(Outcome::Changed)
            }
            Shortcut::ToggleCheckbox => {
                let Some(node) = self.map.node(selected) else {
                    return Ok(Outcome::Unchanged);
                };
                let hidden = !node.accessory.checkbox.hidden;
                self.map
                    .set_checkbox_hidden(selected, hidden, &self.metrics)?;
                Ok(Outcome::Changed)
            }
            Shortcut::ToggleChecked => {
                if selected.is_root() {
                    return Ok(Outcome::Unchanged);
                }
                self.map.toggle_checkbox_checked(selected)?;
                Ok(Outcome::Changed)
            }
            Shortcut::EditEstimate => {
                if selected.is_root() {
                    return Ok(Outcome::Unchanged);
                }
                self.map.set_estimate_editing(selected, true)?;
                Ok(Outcome::Changed)
            }
            Shortcut::ToggleCollapse => {
                let changed = self.map.toggle_collapse(selected)?;
                if changed {
                    self.map.update_accessory_placement();
                }
                Ok(Outcome::changed_if(changed))
            }
            Shortcut::NewLine => Ok(Outcome::Unchanged),
            Shortcut::ScrollToOrigin => Ok(Outcome::ScrollToOrigin),
        }
    }

    fn navigate(&mut self, selected: NodeId, direction: Navigation) -> Result<Outcome> {
        let Some(next) = self.policy.next(selected, direction, &self.map) else {
            return Ok(Outcome::Unchanged);
        };
        self.map.select(next)?;
        Ok(Outcome::Changed)
    }

    /// `Tab`: a blank last child. A collapsed node is unfolded first.
    fn add_node_to_tail(&mut self, selected: NodeId) -> Result<Outcome> {
        let owner = if selected.is_root() {
            Owner::Map(Side::Right)
        } else {
            Owner::Node(selected)
        };
        if self.map.node(selected).is_some_and(Node::is_collapsed) {
            self.map.toggle_collapse(selected)?;
        }
        let id = self.map.add_node(owner, String::new())?;
        self.focus_added_node(id)
    }

    /// `Enter`: a blank sibling directly below, with the same checkbox visibility.
    fn add_node_to_bottom(&mut self, selected: NodeId) -> Result<Outcome> {
        let Some(node) = self.map.node(selected) else {
            return Ok(Outcome::Unchanged);
        };
        let with_checkbox = !node.accessory.checkbox.hidden;
        let id = self.map.insert_after(selected, String::new())?;
        if with_checkbox {
            self.map.set_checkbox_hidden(id, false, &self.metrics)?;
        }
        self.focus_added_node(id)
    }

    fn focus_added_node(&mut self, id: NodeId) -> Result<Outcome> {
        self.map.measure_node(id, &self.metrics)?;
        self.map.select(id)?;
        self.map.set_inputting(id, true)?;
        self.map.update_all_placement();
        Ok(Outcome::Changed)
    }

    /// `Backspace`: the top sibling, or else the parent, takes the selection.
    fn delete_node(&mut self, selected: NodeId) -> Result<Outcome> {
        if selected.is_root() {
            return Ok(Outcome::Unchanged);
        }
        let side = self
            .map
            .side_of(selected)
            .ok_or(Error::NotFoundNode(selected))?;
        let next = self
            .map
            .map(side)
            .subtree(self.map.nodes())
            .find_top_sibling_of(selected)
            .or_else(|| self.map.parent_of(selected))
            .ok_or(Error::NotFoundChildren(selected))?;

        self.map.remove_node(selected)?;
        self.map.select(next)?;
        self.map.update_all_placement();
        Ok(Outcome::Changed)
    }

    /// `Enter` while inputting: leave estimate edit mode on the selected node.
    fn exit_estimate_edit_mode(&mut self) -> Result<Outcome> {
        let editing = self
            .map
            .selected()
            .and_then(|id| self.map.node(id))
            .filter(|node| node.accessory.estimate.is_editing)
            .map(|node| node.frame().id());
        let Some(id) = editing else {
            return Ok(Outcome::Unchanged);
        };
        self.map.set_estimate_editing(id, false)?;
        Ok(Outcome::Changed)
    }
}
