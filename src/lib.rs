//! # room_canvas
//!
//! `room_canvas` is a headless editor core for authoring the room layout
//! graph of a procedural dungeon generator. It handles state, graph
//! mutation, and interaction logic while delegating rendering, windowing,
//! and asset IO to the host application.
//!
//! ## Core Architecture
//! - **Model (`src/model.rs`)**: the room graph in a flat, id-indexed arena.
//! - **Interaction (`src/interaction.rs`)**: pointer events -> graph mutations.
//! - **Command (`src/command.rs`)**: context-menu operations as command values.
//! - **Painter (`src/painter.rs`)**: graph state -> a list of `DrawCommand`s.
//!
//! The host feeds at most one `InputEvent` per frame into [`Editor::update`]
//! and receives a display list plus [`LogicEvent`]s; `GraphChanged` events
//! mark the durable-save boundary.

pub mod command;
pub mod config;
pub mod input;
pub mod interaction;
pub mod math;
pub mod model;
pub mod painter;
pub mod persistence;
pub mod registry;
pub mod render;

use glam::Vec2;
use input::InputEvent;
use model::RoomGraph;
use render::RenderList;

// Re-exports for convenience
pub use command::EditorCommand;
pub use config::EditorConfig;
pub use interaction::{InteractionMode, LogicEvent};
pub use registry::{KindRegistry, RoomKind};

/// The main entry point for the library.
///
/// The `Editor` holds the transient session state (interaction mode, grid
/// scroll offset, viewport size) and configuration. The edited graph is
/// passed in explicitly each frame; the host swaps it out when the designer
/// opens a different graph asset.
pub struct Editor {
    /// Configuration settings.
    pub config: EditorConfig,
    /// Current interaction mode.
    pub mode: InteractionMode,
    /// Accumulated grid scroll offset from canvas panning.
    pub grid_offset: Vec2,
    /// Size of the editor viewport in pixels.
    pub viewport_size: Vec2,
}

impl Editor {
    /// Creates a new editor session with the given configuration.
    pub fn new(config: EditorConfig) -> Self {
        Self {
            config,
            mode: InteractionMode::Idle,
            grid_offset: Vec2::ZERO,
            viewport_size: Vec2::new(800.0, 600.0), // Default, host should update
        }
    }

    /// Updates the viewport size (e.g. on window resize).
    pub fn update_viewport_size(&mut self, size: Vec2) {
        self.viewport_size = size;
    }

    /// The once-per-frame update.
    ///
    /// Processes at most one input event, then paints. The mutation runs to
    /// completion before rendering reads the graph, so the returned display
    /// list always reflects a consistent state.
    pub fn update(
        &mut self,
        event: Option<&InputEvent>,
        graph: &mut RoomGraph,
    ) -> (RenderList, Vec<LogicEvent>) {
        let mut logic_events = Vec::new();

        if let Some(event) = event {
            interaction::handle_event(
                &mut self.mode,
                event,
                graph,
                &mut self.grid_offset,
                &mut logic_events,
            );
        }

        let draw_list =
            painter::Painter::draw_graph(&self.config, graph, self.viewport_size, self.grid_offset);

        (draw_list, logic_events)
    }

    /// Applies a context-menu command.
    ///
    /// The menu is a modal side channel: the command runs synchronously and
    /// the editor returns to `Idle` afterwards.
    pub fn apply(
        &mut self,
        command: EditorCommand,
        registry: &KindRegistry,
        graph: &mut RoomGraph,
    ) -> Vec<LogicEvent> {
        let events = command::apply_command(graph, registry, &self.config, command);
        self.mode = InteractionMode::Idle;
        events
    }
}
