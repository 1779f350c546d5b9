//! # Persistence Snapshots
//!
//! The graph and its nodes are saved as a unit. `SavedGraph` is the stable,
//! serde-serializable form keyed by node uuid; transient UI state (selection,
//! drag flags, the pending link wire) is not part of it. Actual file IO is
//! the host's responsibility — it must persist a snapshot whenever it sees
//! `LogicEvent::GraphChanged`, before the next frame.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::math::Rect;
use crate::model::{RoomGraph, RoomNode, RoomNodeId};
use crate::registry::RoomKind;

/// A serializable representation of one room node.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SavedNode {
    pub id: RoomNodeId,
    pub position: Vec2,
    pub size: Vec2,
    pub kind: RoomKind,
    pub parents: Vec<RoomNodeId>,
    pub children: Vec<RoomNodeId>,
}

/// A serializable snapshot of the whole graph, in node creation order.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SavedGraph {
    pub nodes: Vec<SavedNode>,
}

impl RoomGraph {
    /// Captures the persistent state of the graph.
    pub fn save(&self) -> SavedGraph {
        SavedGraph {
            nodes: self
                .nodes
                .iter()
                .map(|node| SavedNode {
                    id: node.id,
                    position: node.rect.min,
                    size: node.rect.size(),
                    kind: node.kind,
                    parents: node.parents.clone(),
                    children: node.children.clone(),
                })
                .collect(),
        }
    }

    /// Replaces the current state with a saved snapshot and rebuilds the id
    /// index. Any in-progress link drag is discarded.
    pub fn load(&mut self, saved: SavedGraph) {
        self.nodes = saved
            .nodes
            .into_iter()
            .map(|saved_node| RoomNode {
                id: saved_node.id,
                rect: Rect::new(saved_node.position, saved_node.size),
                kind: saved_node.kind,
                parents: saved_node.parents,
                children: saved_node.children,
                flags: Default::default(),
            })
            .collect();
        self.clear_link();
        self.reindex();
    }
}
