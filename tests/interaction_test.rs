use glam::Vec2;
use room_canvas::input::{InputEvent, PointerButton};
use room_canvas::model::{NodeFlags, RoomGraph, RoomNode, RoomNodeId};
use room_canvas::{Editor, EditorConfig, InteractionMode, LogicEvent, RoomKind};

const NODE_SIZE: Vec2 = Vec2::new(160.0, 75.0);

fn graph_with_two_nodes() -> (RoomGraph, RoomNodeId, RoomNodeId) {
    let mut graph = RoomGraph::default();
    let a = graph.add_node(RoomNode::new(Vec2::ZERO, NODE_SIZE, RoomKind::Unassigned));
    let b = graph.add_node(RoomNode::new(
        Vec2::new(300.0, 0.0),
        NODE_SIZE,
        RoomKind::Unassigned,
    ));
    (graph, a, b)
}

fn press(button: PointerButton, pos: Vec2) -> InputEvent {
    InputEvent::PointerPressed { button, pos }
}

fn release(button: PointerButton, pos: Vec2) -> InputEvent {
    InputEvent::PointerReleased { button, pos }
}

fn drag(button: PointerButton, pos: Vec2, delta: Vec2) -> InputEvent {
    InputEvent::PointerDragged { button, pos, delta }
}

#[test]
fn test_connection_drag_creates_edge() {
    let mut editor = Editor::new(EditorConfig::default());
    let (mut graph, a, b) = graph_with_two_nodes();

    // 1. Secondary press over A starts a connection drag.
    let a_center = graph.lookup(a).unwrap().rect.center();
    editor.update(Some(&press(PointerButton::Secondary, a_center)), &mut graph);
    assert_eq!(editor.mode, InteractionMode::Linking);
    assert_eq!(graph.link_origin, Some(a));

    // 2. Drag the wire towards B.
    let delta = Vec2::new(300.0, 0.0);
    editor.update(
        Some(&drag(PointerButton::Secondary, a_center + delta, delta)),
        &mut graph,
    );
    assert_eq!(graph.link_endpoint, a_center + delta);

    // 3. Release over B establishes the directed edge A -> B.
    let b_center = graph.lookup(b).unwrap().rect.center();
    let (_, events) = editor.update(
        Some(&release(PointerButton::Secondary, b_center)),
        &mut graph,
    );

    assert_eq!(editor.mode, InteractionMode::Idle);
    assert_eq!(graph.link_origin, None);
    assert_eq!(graph.lookup(a).unwrap().children, vec![b]);
    assert_eq!(graph.lookup(b).unwrap().parents, vec![a]);

    assert!(events.contains(&LogicEvent::LinkCreated { parent: a, child: b }));
    assert!(events.contains(&LogicEvent::GraphChanged));
}

#[test]
fn test_release_over_origin_creates_nothing() {
    let mut editor = Editor::new(EditorConfig::default());
    let (mut graph, a, _) = graph_with_two_nodes();

    let a_center = graph.lookup(a).unwrap().rect.center();
    editor.update(Some(&press(PointerButton::Secondary, a_center)), &mut graph);
    let (_, events) = editor.update(
        Some(&release(PointerButton::Secondary, a_center)),
        &mut graph,
    );

    // Self-connection is rejected; drag state is cleared regardless.
    assert_eq!(editor.mode, InteractionMode::Idle);
    assert_eq!(graph.link_origin, None);
    assert!(graph.lookup(a).unwrap().children.is_empty());
    assert!(!events.contains(&LogicEvent::GraphChanged));
}

#[test]
fn test_duplicate_edge_not_recorded() {
    let mut editor = Editor::new(EditorConfig::default());
    let (mut graph, a, b) = graph_with_two_nodes();
    let a_center = graph.lookup(a).unwrap().rect.center();
    let b_center = graph.lookup(b).unwrap().rect.center();

    for _ in 0..2 {
        editor.update(Some(&press(PointerButton::Secondary, a_center)), &mut graph);
        editor.update(
            Some(&release(PointerButton::Secondary, b_center)),
            &mut graph,
        );
    }

    assert_eq!(graph.lookup(a).unwrap().children, vec![b]);
    assert_eq!(graph.lookup(b).unwrap().parents, vec![a]);
}

#[test]
fn test_release_over_empty_canvas_clears_drag() {
    let mut editor = Editor::new(EditorConfig::default());
    let (mut graph, a, b) = graph_with_two_nodes();
    let a_center = graph.lookup(a).unwrap().rect.center();

    editor.update(Some(&press(PointerButton::Secondary, a_center)), &mut graph);
    let (_, events) = editor.update(
        Some(&release(PointerButton::Secondary, Vec2::new(900.0, 900.0))),
        &mut graph,
    );

    assert_eq!(editor.mode, InteractionMode::Idle);
    assert_eq!(graph.link_origin, None);
    assert!(graph.lookup(a).unwrap().children.is_empty());
    assert!(graph.lookup(b).unwrap().parents.is_empty());
    assert!(!events.contains(&LogicEvent::GraphChanged));
}

#[test]
fn test_primary_click_toggles_selection() {
    let mut editor = Editor::new(EditorConfig::default());
    let (mut graph, a, b) = graph_with_two_nodes();
    let a_center = graph.lookup(a).unwrap().rect.center();

    editor.update(Some(&press(PointerButton::Primary, a_center)), &mut graph);
    assert!(graph.lookup(a).unwrap().is_selected());
    assert!(!graph.lookup(b).unwrap().is_selected());
    assert_eq!(editor.mode, InteractionMode::DraggingNodes { target: Some(a) });

    editor.update(Some(&release(PointerButton::Primary, a_center)), &mut graph);
    assert_eq!(editor.mode, InteractionMode::Idle);

    // A second click on the same node deselects it.
    editor.update(Some(&press(PointerButton::Primary, a_center)), &mut graph);
    assert!(!graph.lookup(a).unwrap().is_selected());
}

#[test]
fn test_primary_press_on_empty_canvas_deselects_all() {
    let mut editor = Editor::new(EditorConfig::default());
    let (mut graph, a, b) = graph_with_two_nodes();
    graph.lookup_mut(a).unwrap().flags.insert(NodeFlags::SELECTED);
    graph.lookup_mut(b).unwrap().flags.insert(NodeFlags::SELECTED);
    graph.begin_link(a);

    editor.update(
        Some(&press(PointerButton::Primary, Vec2::new(900.0, 900.0))),
        &mut graph,
    );

    assert!(!graph.lookup(a).unwrap().is_selected());
    assert!(!graph.lookup(b).unwrap().is_selected());
    assert_eq!(graph.link_origin, None);
    assert_eq!(editor.mode, InteractionMode::DraggingNodes { target: None });
}

#[test]
fn test_dragging_a_node_moves_only_that_node() {
    let mut editor = Editor::new(EditorConfig::default());
    let (mut graph, a, b) = graph_with_two_nodes();
    let a_center = graph.lookup(a).unwrap().rect.center();
    let b_min_before = graph.lookup(b).unwrap().rect.min;

    editor.update(Some(&press(PointerButton::Primary, a_center)), &mut graph);
    let delta = Vec2::new(25.0, 40.0);
    editor.update(
        Some(&drag(PointerButton::Primary, a_center + delta, delta)),
        &mut graph,
    );

    let a_node = graph.lookup(a).unwrap();
    assert_eq!(a_node.rect.min, delta);
    assert!(a_node.flags.contains(NodeFlags::DRAGGING));
    assert_eq!(graph.lookup(b).unwrap().rect.min, b_min_before);

    editor.update(
        Some(&release(PointerButton::Primary, a_center + delta)),
        &mut graph,
    );
    assert!(!graph.lookup(a).unwrap().flags.contains(NodeFlags::DRAGGING));
}

#[test]
fn test_canvas_pan_drags_every_node() {
    let mut editor = Editor::new(EditorConfig::default());
    let (mut graph, a, b) = graph_with_two_nodes();

    editor.update(
        Some(&press(PointerButton::Primary, Vec2::new(900.0, 900.0))),
        &mut graph,
    );
    let delta = Vec2::new(-30.0, 10.0);
    editor.update(
        Some(&drag(PointerButton::Primary, Vec2::new(870.0, 910.0), delta)),
        &mut graph,
    );

    // Pan and drag-all share one code path: every stored position moves.
    assert_eq!(graph.lookup(a).unwrap().rect.min, delta);
    assert_eq!(graph.lookup(b).unwrap().rect.min, Vec2::new(300.0, 0.0) + delta);
    // The grid scrolls at half the pan speed.
    assert_eq!(editor.grid_offset, delta * 0.5);
}

#[test]
fn test_focus_lost_resets_interaction() {
    let mut editor = Editor::new(EditorConfig::default());
    let (mut graph, a, _) = graph_with_two_nodes();
    let a_center = graph.lookup(a).unwrap().rect.center();

    editor.update(Some(&press(PointerButton::Secondary, a_center)), &mut graph);
    editor.update(Some(&InputEvent::FocusLost), &mut graph);

    assert_eq!(editor.mode, InteractionMode::Idle);
    assert_eq!(graph.link_origin, None);
}
