//! # Core Data Model
//!
//! The room layout graph: an insertion-ordered arena of `RoomNode`s owned by
//! `RoomGraph`, with a derived id index for O(1) lookup. Nodes never hold
//! references to each other; parent/child relations are recorded as stable
//! `Uuid`s resolved through the graph, so there are no ownership cycles.

use std::collections::HashMap;

use bitflags::bitflags;
use glam::Vec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::input::{InputEvent, PointerButton};
use crate::math::Rect;
use crate::registry::RoomKind;

pub use uuid::Uuid;

/// Stable unique identifier of a room node. Generated at creation, never reused.
pub type RoomNodeId = Uuid;

bitflags! {
    /// Transient UI state bits of a node. Not persisted.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    pub struct NodeFlags: u8 {
        /// The node is currently selected.
        const SELECTED = 1 << 0;
        /// The node is being repositioned by a primary-button drag.
        const DRAGGING = 1 << 1;
    }
}

impl Serialize for NodeFlags {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_u8(self.bits())
    }
}

impl<'de> Deserialize<'de> for NodeFlags {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let bits = u8::deserialize(deserializer)?;
        Ok(Self::from_bits_truncate(bits))
    }
}

/// Why a link mutation was rejected.
///
/// Rejections are expected outcomes, not failures: callers check the result
/// and skip the dependent action (e.g. the parent-side add).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum LinkError {
    #[error("a room node cannot link to itself")]
    SelfLoop,
    #[error("the link is already recorded")]
    Duplicate,
}

/// A single vertex of the room layout graph.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RoomNode {
    pub id: RoomNodeId,
    /// Position and fixed size in canvas space.
    pub rect: Rect,
    pub kind: RoomKind,
    /// Ids of parent nodes, in link-creation order. No duplicates.
    pub parents: Vec<RoomNodeId>,
    /// Ids of child nodes, in link-creation order. No duplicates.
    pub children: Vec<RoomNodeId>,
    #[serde(default, skip)]
    pub flags: NodeFlags,
}

impl RoomNode {
    /// Creates a node with a fresh id and empty adjacency.
    pub fn new(pos: Vec2, size: Vec2, kind: RoomKind) -> Self {
        Self {
            id: Uuid::new_v4(),
            rect: Rect::new(pos, size),
            kind,
            parents: Vec::new(),
            children: Vec::new(),
            flags: NodeFlags::default(),
        }
    }

    /// Records `child` in this node's child list.
    ///
    /// Rejected on self-reference or duplicate; the list is unchanged on
    /// rejection. The caller is responsible for recording the mirror
    /// parent reference on the child, and must only do so on success.
    pub fn add_child(&mut self, child: RoomNodeId) -> Result<(), LinkError> {
        Self::check_link(self.id, &self.children, child)?;
        self.children.push(child);
        Ok(())
    }

    /// Records `parent` in this node's parent list. Symmetric to `add_child`.
    pub fn add_parent(&mut self, parent: RoomNodeId) -> Result<(), LinkError> {
        Self::check_link(self.id, &self.parents, parent)?;
        self.parents.push(parent);
        Ok(())
    }

    fn check_link(own: RoomNodeId, list: &[RoomNodeId], other: RoomNodeId) -> Result<(), LinkError> {
        if other == own {
            return Err(LinkError::SelfLoop);
        }
        if list.contains(&other) {
            return Err(LinkError::Duplicate);
        }
        Ok(())
    }

    /// Removes `child` from the child list. Idempotent: absent ids are a no-op.
    pub fn remove_child(&mut self, child: RoomNodeId) {
        self.children.retain(|&id| id != child);
    }

    /// Removes `parent` from the parent list. Idempotent.
    pub fn remove_parent(&mut self, parent: RoomNodeId) {
        self.parents.retain(|&id| id != parent);
    }

    /// Translates the node rect. Pure geometry, no adjacency effect.
    pub fn drag(&mut self, delta: Vec2) {
        self.rect.translate(delta);
    }

    /// Hit-test against the node rect.
    pub fn contains(&self, point: Vec2) -> bool {
        self.rect.contains(point)
    }

    pub fn is_selected(&self) -> bool {
        self.flags.contains(NodeFlags::SELECTED)
    }

    /// Node-local input handling, for events the controller routes to the
    /// node under the cursor: primary press toggles selection, primary drag
    /// repositions the node, primary release ends the reposition. Graph-level
    /// gestures (connection dragging, panning) are the controller's job.
    pub fn handle_input(&mut self, event: &InputEvent) {
        match event {
            InputEvent::PointerPressed {
                button: PointerButton::Primary,
                ..
            } => {
                self.flags.toggle(NodeFlags::SELECTED);
            }
            InputEvent::PointerDragged {
                button: PointerButton::Primary,
                delta,
                ..
            } => {
                self.flags.insert(NodeFlags::DRAGGING);
                self.drag(*delta);
            }
            InputEvent::PointerReleased {
                button: PointerButton::Primary,
                ..
            } => {
                self.flags.remove(NodeFlags::DRAGGING);
            }
            _ => {}
        }
    }
}

/// The room layout graph for one edited asset.
///
/// `nodes` is the source of truth, ordered by creation; `index` is a derived
/// cache kept in sync on every add/remove within the same call, so no frame
/// observes a torn state. `link_origin`/`link_endpoint` hold the in-progress
/// connection drag.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RoomGraph {
    pub nodes: Vec<RoomNode>,
    #[serde(default, skip)]
    index: HashMap<RoomNodeId, usize>,
    /// Node the pending connection wire is dragged from, if any.
    #[serde(default, skip)]
    pub link_origin: Option<RoomNodeId>,
    /// Free end of the pending connection wire. Meaningful only while
    /// `link_origin` is set; `Vec2::ZERO` otherwise.
    #[serde(default, skip)]
    pub link_endpoint: Vec2,
}

impl Default for RoomGraph {
    fn default() -> Self {
        Self {
            nodes: Vec::new(),
            index: HashMap::new(),
            link_origin: None,
            link_endpoint: Vec2::ZERO,
        }
    }
}

impl RoomGraph {
    /// Looks up a node by id. Absent ids return `None`, never an error.
    pub fn lookup(&self, id: RoomNodeId) -> Option<&RoomNode> {
        self.index.get(&id).and_then(|&slot| self.nodes.get(slot))
    }

    pub fn lookup_mut(&mut self, id: RoomNodeId) -> Option<&mut RoomNode> {
        let slot = *self.index.get(&id)?;
        self.nodes.get_mut(slot)
    }

    /// Appends a node and indexes it. Ids are unique by construction; inserting
    /// an id already present would corrupt the index.
    pub fn add_node(&mut self, node: RoomNode) -> RoomNodeId {
        let id = node.id;
        debug_assert!(!self.index.contains_key(&id), "duplicate room node id");
        self.index.insert(id, self.nodes.len());
        self.nodes.push(node);
        debug!(node = %id, "room node added");
        id
    }

    /// Removes a node from the collection and the index.
    ///
    /// Does not cascade: callers sever the node's parent/child relations first.
    pub fn remove_node(&mut self, id: RoomNodeId) -> Option<RoomNode> {
        let slot = self.index.remove(&id)?;
        let node = self.nodes.remove(slot);
        // Positions after the removed slot shifted down by one.
        for other in self.index.values_mut() {
            if *other > slot {
                *other -= 1;
            }
        }
        debug!(node = %id, "room node removed");
        Some(node)
    }

    /// Rebuilds the id index from `nodes`. Call after any bulk structural
    /// change that bypassed `add_node`/`remove_node`, such as loading a
    /// persisted graph.
    pub fn reindex(&mut self) {
        self.index = self
            .nodes
            .iter()
            .enumerate()
            .map(|(slot, node)| (node.id, slot))
            .collect();
    }

    /// Starts a connection drag from `origin`, anchoring the wire endpoint at
    /// the origin's center. Unknown ids are a no-op.
    pub fn begin_link(&mut self, origin: RoomNodeId) {
        if let Some(node) = self.lookup(origin) {
            self.link_endpoint = node.rect.center();
            self.link_origin = Some(origin);
        }
    }

    /// Moves the free end of the pending wire. No-op when no drag is pending.
    pub fn drag_link(&mut self, delta: Vec2) {
        if self.link_origin.is_some() {
            self.link_endpoint += delta;
        }
    }

    /// Clears any pending connection drag.
    pub fn clear_link(&mut self) {
        self.link_origin = None;
        self.link_endpoint = Vec2::ZERO;
    }

    /// Topmost node under `point`, scanning front to back (later-created nodes
    /// draw on top).
    pub fn hit_test(&self, point: Vec2) -> Option<RoomNodeId> {
        self.nodes
            .iter()
            .rev()
            .find(|node| node.contains(point))
            .map(|node| node.id)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
