//! # Editor Commands
//!
//! The context-menu operations as discrete command values interpreted by
//! `apply_command`. The host builds a command from its menu selection; tests
//! construct commands directly without simulating a menu.

use glam::Vec2;
use tracing::debug;

use crate::config::EditorConfig;
use crate::interaction::LogicEvent;
use crate::model::{NodeFlags, RoomGraph, RoomNode, RoomNodeId};
use crate::registry::KindRegistry;

/// A graph-level operation chosen from the editor's context menu.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum EditorCommand {
    /// Create an unassigned-kind node at the given canvas position. On an
    /// empty graph, an entrance node is auto-created first.
    CreateNode(Vec2),
    SelectAll,
    /// Delete every selected node except entrance nodes, detaching each from
    /// the graph topology before removal.
    DeleteSelected,
    /// Sever every link whose parent AND child are both selected.
    DeleteSelectedLinks,
}

/// Applies one command to the graph. Runs synchronously to completion before
/// the next frame renders.
pub fn apply_command(
    graph: &mut RoomGraph,
    registry: &KindRegistry,
    config: &EditorConfig,
    command: EditorCommand,
) -> Vec<LogicEvent> {
    let mut events = Vec::new();
    match command {
        EditorCommand::CreateNode(pos) => create_node(graph, registry, config, pos, &mut events),
        EditorCommand::SelectAll => select_all(graph, &mut events),
        EditorCommand::DeleteSelected => delete_selected(graph, &mut events),
        EditorCommand::DeleteSelectedLinks => delete_selected_links(graph, &mut events),
    }
    events
}

fn create_node(
    graph: &mut RoomGraph,
    registry: &KindRegistry,
    config: &EditorConfig,
    pos: Vec2,
    events: &mut Vec<LogicEvent>,
) {
    // The first node ever created brings the entrance with it, so every
    // graph has its unique root.
    if graph.is_empty()
        && let Some(entrance) = registry.entrance()
    {
        graph.add_node(RoomNode::new(config.entrance_spawn, config.node_size, entrance));
    }

    let Some(kind) = registry.unassigned() else {
        // Misconfigured registry; validated upstream, so nothing to do here.
        return;
    };

    let id = graph.add_node(RoomNode::new(pos, config.node_size, kind));
    debug!(node = %id, ?pos, "room node created");
    events.push(LogicEvent::GraphChanged);
    events.push(LogicEvent::RepaintNeeded);
}

fn select_all(graph: &mut RoomGraph, events: &mut Vec<LogicEvent>) {
    for node in &mut graph.nodes {
        node.flags.insert(NodeFlags::SELECTED);
    }
    events.push(LogicEvent::RepaintNeeded);
}

fn delete_selected(graph: &mut RoomGraph, events: &mut Vec<LogicEvent>) {
    let doomed: Vec<RoomNodeId> = graph
        .nodes
        .iter()
        .filter(|node| node.is_selected() && node.kind.caps().deletable)
        .map(|node| node.id)
        .collect();

    for &id in &doomed {
        // Detach before removal: every neighbor drops its back-reference.
        // Neighbors already deleted in this pass simply fail the lookup, and
        // the removals are idempotent, so deletion order does not matter.
        let (parents, children) = match graph.lookup(id) {
            Some(node) => (node.parents.clone(), node.children.clone()),
            None => continue,
        };

        for parent_id in parents {
            if let Some(parent) = graph.lookup_mut(parent_id) {
                parent.remove_child(id);
            }
        }
        for child_id in children {
            if let Some(child) = graph.lookup_mut(child_id) {
                child.remove_parent(id);
            }
        }

        graph.remove_node(id);
        debug!(node = %id, "selected room node deleted");
    }

    if !doomed.is_empty() {
        events.push(LogicEvent::GraphChanged);
    }
    events.push(LogicEvent::RepaintNeeded);
}

fn delete_selected_links(graph: &mut RoomGraph, events: &mut Vec<LogicEvent>) {
    let selected: Vec<RoomNodeId> = graph
        .nodes
        .iter()
        .filter(|node| node.is_selected())
        .map(|node| node.id)
        .collect();

    let mut severed = false;
    for &id in &selected {
        let children = match graph.lookup(id) {
            Some(node) => node.children.clone(),
            None => continue,
        };

        for child_id in children {
            // Only links with BOTH endpoints selected are removed.
            let child_selected = graph
                .lookup(child_id)
                .map(RoomNode::is_selected)
                .unwrap_or(false);
            if !child_selected {
                continue;
            }

            if let Some(parent) = graph.lookup_mut(id) {
                parent.remove_child(child_id);
            }
            if let Some(child) = graph.lookup_mut(child_id) {
                child.remove_parent(id);
            }
            debug!(parent = %id, child = %child_id, "link severed");
            severed = true;
        }
    }

    // The menu action ends by clearing the selection.
    for node in &mut graph.nodes {
        node.flags.remove(NodeFlags::SELECTED);
    }

    if severed {
        events.push(LogicEvent::GraphChanged);
    }
    events.push(LogicEvent::RepaintNeeded);
}
