// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors raised by mind map mutations and lookups.

use crate::types::NodeId;

/// Errors returned by [`crate::MindMap`] operations.
///
/// Operations check every id they touch before mutating anything, so an `Err` leaves the map
/// exactly as it was.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The id is not present in the map.
    #[error("can not find node {0}")]
    NotFoundNode(NodeId),
    /// The collection directly holding the id could not be located.
    #[error("can not find the children collection containing {0}")]
    NotFoundChildren(NodeId),
    /// Moving `moved` under `target` would place a node inside its own subtree.
    #[error("can not move {moved} into its own subtree at {target}")]
    CyclicMove {
        /// The node being moved.
        moved: NodeId,
        /// The requested new parent or sibling.
        target: NodeId,
    },
    /// The root node can not be detached, removed or moved.
    #[error("the root node can not be moved or removed")]
    RootNotMovable,
}

/// Shorthand for results of mind map operations.
pub type Result<T, E = Error> = core::result::Result<T, E>;
