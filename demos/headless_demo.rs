use glam::Vec2;
use room_canvas::input::{InputEvent, PointerButton};
use room_canvas::model::RoomGraph;
use room_canvas::{Editor, EditorCommand, EditorConfig, KindRegistry, LogicEvent};

fn main() {
    println!("=== room_canvas Headless Demo ===");

    // 1. Load the room kind registry (external configuration).
    let registry = KindRegistry::default();
    registry.validate().expect("invalid kind registry");

    // 2. Initialize the editor session and an empty graph.
    let mut editor = Editor::new(EditorConfig::default());
    editor.update_viewport_size(Vec2::new(1280.0, 720.0));
    let mut graph = RoomGraph::default();

    // 3. Create a node via the context-menu command. The entrance is seeded
    // automatically because the graph is empty.
    let events = editor.apply(
        EditorCommand::CreateNode(Vec2::new(500.0, 300.0)),
        &registry,
        &mut graph,
    );
    println!("Created nodes: {} (events: {:?})", graph.len(), events);

    let entrance = graph.nodes[0].id;
    let room = graph.nodes[1].id;

    // 4. Drag a connection from the entrance onto the new room.
    let entrance_center = graph.lookup(entrance).unwrap().rect.center();
    let room_center = graph.lookup(room).unwrap().rect.center();

    let script = [
        InputEvent::PointerPressed {
            button: PointerButton::Secondary,
            pos: entrance_center,
        },
        InputEvent::PointerDragged {
            button: PointerButton::Secondary,
            pos: room_center,
            delta: room_center - entrance_center,
        },
        InputEvent::PointerReleased {
            button: PointerButton::Secondary,
            pos: room_center,
        },
    ];

    for (frame, event) in script.iter().enumerate() {
        let (draw_list, events) = editor.update(Some(event), &mut graph);
        println!(
            "--- Frame {frame}: {} draw commands, events {:?}",
            draw_list.len(),
            events
        );

        if events.contains(&LogicEvent::GraphChanged) {
            // The durable-save boundary: persist before the next frame.
            let json = serde_json::to_string_pretty(&graph.save()).unwrap();
            println!("Persisted snapshot:\n{json}");
        }
    }

    println!(
        "Entrance children: {:?}",
        graph.lookup(entrance).unwrap().children
    );
    println!("Demo Complete.");
}
