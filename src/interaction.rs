//! # Interaction State Machine
//!
//! Maps pointer events to graph mutations. The secondary button drives
//! connection dragging; the primary button drives selection and node/graph
//! dragging. Panning the canvas and dragging every node are the same code
//! path: a primary drag over empty canvas translates all stored node
//! positions (see DESIGN.md for the product-owner flag on this behavior).

use glam::Vec2;
use tracing::debug;

use crate::input::{InputEvent, PointerButton};
use crate::model::{NodeFlags, RoomGraph, RoomNodeId};

/// Events emitted to the host application.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogicEvent {
    /// A directed parent -> child link was established.
    LinkCreated {
        parent: RoomNodeId,
        child: RoomNodeId,
    },
    /// The graph structure changed. The host must persist the graph before
    /// the next frame; no in-memory-only structural state may survive a crash.
    GraphChanged,
    /// The visual state changed and the host should repaint.
    RepaintNeeded,
}

/// The current state of user interaction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InteractionMode {
    /// No drag in progress.
    Idle,
    /// Primary button held. `target` is the node being repositioned, or
    /// `None` when the whole graph is being dragged (canvas pan).
    DraggingNodes { target: Option<RoomNodeId> },
    /// Secondary button held, dragging a connection wire. The origin node and
    /// wire endpoint live on the graph (`link_origin`/`link_endpoint`).
    Linking,
}

/// Processes one input event against the current mode and graph.
///
/// At most one structural mutation path runs to completion per call, before
/// any rendering reads the graph.
pub fn handle_event(
    mode: &mut InteractionMode,
    event: &InputEvent,
    graph: &mut RoomGraph,
    grid_offset: &mut Vec2,
    events: &mut Vec<LogicEvent>,
) {
    let next = match event {
        InputEvent::PointerPressed { button, pos } => {
            handle_press(event, *button, *pos, graph, events)
        }
        InputEvent::PointerDragged { button, delta, .. } => {
            handle_drag(event, mode, *button, *delta, graph, grid_offset, events)
        }
        InputEvent::PointerReleased { button, pos } => {
            handle_release(event, mode, *button, *pos, graph, events)
        }
        InputEvent::FocusLost => handle_focus_lost(graph, events),
    };

    if let Some(next_mode) = next {
        *mode = next_mode;
    }
}

fn handle_press(
    event: &InputEvent,
    button: PointerButton,
    pos: Vec2,
    graph: &mut RoomGraph,
    events: &mut Vec<LogicEvent>,
) -> Option<InteractionMode> {
    match button {
        PointerButton::Secondary => {
            let origin = graph.hit_test(pos)?;
            // Over a node: start a connection drag. Over empty canvas the
            // host opens its context menu instead (see `EditorCommand`).
            graph.begin_link(origin);
            events.push(LogicEvent::RepaintNeeded);
            Some(InteractionMode::Linking)
        }
        PointerButton::Primary => {
            if let Some(id) = graph.hit_test(pos) {
                if let Some(node) = graph.lookup_mut(id) {
                    node.handle_input(event);
                }
                events.push(LogicEvent::RepaintNeeded);
                Some(InteractionMode::DraggingNodes { target: Some(id) })
            } else {
                // Empty canvas: abandon any pending wire and deselect all.
                graph.clear_link();
                for node in &mut graph.nodes {
                    node.flags.remove(NodeFlags::SELECTED);
                }
                events.push(LogicEvent::RepaintNeeded);
                Some(InteractionMode::DraggingNodes { target: None })
            }
        }
    }
}

fn handle_drag(
    event: &InputEvent,
    mode: &InteractionMode,
    button: PointerButton,
    delta: Vec2,
    graph: &mut RoomGraph,
    grid_offset: &mut Vec2,
    events: &mut Vec<LogicEvent>,
) -> Option<InteractionMode> {
    match (button, mode) {
        (PointerButton::Secondary, InteractionMode::Linking) => {
            graph.drag_link(delta);
            events.push(LogicEvent::RepaintNeeded);
            None
        }
        (PointerButton::Primary, InteractionMode::DraggingNodes { target: Some(id) }) => {
            if let Some(node) = graph.lookup_mut(*id) {
                node.handle_input(event);
                events.push(LogicEvent::RepaintNeeded);
            }
            None
        }
        (PointerButton::Primary, InteractionMode::DraggingNodes { target: None }) => {
            drag_whole_graph(graph, delta, grid_offset, events);
            None
        }
        (PointerButton::Primary, InteractionMode::Idle) => {
            // A drag that arrived without a press lands on the pan path.
            drag_whole_graph(graph, delta, grid_offset, events);
            Some(InteractionMode::DraggingNodes { target: None })
        }
        _ => None,
    }
}

/// Every node receives the same delta; the grid scrolls at half speed for
/// visual depth, matching the original editor.
fn drag_whole_graph(
    graph: &mut RoomGraph,
    delta: Vec2,
    grid_offset: &mut Vec2,
    events: &mut Vec<LogicEvent>,
) {
    for node in &mut graph.nodes {
        node.drag(delta);
    }
    *grid_offset += delta * 0.5;
    events.push(LogicEvent::RepaintNeeded);
}

fn handle_release(
    event: &InputEvent,
    mode: &InteractionMode,
    button: PointerButton,
    pos: Vec2,
    graph: &mut RoomGraph,
    events: &mut Vec<LogicEvent>,
) -> Option<InteractionMode> {
    match (button, mode) {
        (PointerButton::Secondary, InteractionMode::Linking) => {
            complete_link(graph, pos, events);
            Some(InteractionMode::Idle)
        }
        (PointerButton::Primary, InteractionMode::DraggingNodes { target }) => {
            if let Some(node) = target.and_then(|id| graph.lookup_mut(id)) {
                node.handle_input(event);
            }
            Some(InteractionMode::Idle)
        }
        _ => None,
    }
}

/// Finishes a connection drag. If released over a target node, establishes
/// the directed edge origin -> target: the child-side add runs first, and the
/// parent-side add only runs if it succeeded, so a rejected link (self-loop,
/// duplicate) never leaves a dangling one-directional reference. Drag state
/// is cleared regardless of outcome.
fn complete_link(graph: &mut RoomGraph, pos: Vec2, events: &mut Vec<LogicEvent>) {
    if let Some(origin) = graph.link_origin
        && let Some(target) = graph.hit_test(pos)
    {
        let child_added = graph
            .lookup_mut(origin)
            .map(|node| node.add_child(target).is_ok())
            .unwrap_or(false);

        if child_added {
            if let Some(node) = graph.lookup_mut(target) {
                let _ = node.add_parent(origin);
            }
            debug!(parent = %origin, child = %target, "link created");
            events.push(LogicEvent::LinkCreated {
                parent: origin,
                child: target,
            });
            events.push(LogicEvent::GraphChanged);
        }
    }

    graph.clear_link();
    events.push(LogicEvent::RepaintNeeded);
}

fn handle_focus_lost(graph: &mut RoomGraph, events: &mut Vec<LogicEvent>) -> Option<InteractionMode> {
    graph.clear_link();
    for node in &mut graph.nodes {
        node.flags.remove(NodeFlags::DRAGGING);
    }
    events.push(LogicEvent::RepaintNeeded);
    Some(InteractionMode::Idle)
}
