//! # Input Protocol
//!
//! The host application translates its native pointer events into `InputEvent`s
//! and feeds at most one to the editor per frame. Pointer positions and deltas
//! are in canvas-space pixels.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Which pointer button an event refers to.
///
/// Primary is the selection/drag button (typically left), secondary drives
/// connection dragging and the context menu (typically right).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PointerButton {
    Primary,
    Secondary,
}

/// A single pointer event for one frame.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum InputEvent {
    PointerPressed {
        button: PointerButton,
        pos: Vec2,
    },
    PointerReleased {
        button: PointerButton,
        pos: Vec2,
    },
    PointerDragged {
        button: PointerButton,
        pos: Vec2,
        /// Movement since the previous frame.
        delta: Vec2,
    },
    /// The editor window lost input focus; any drag in progress is abandoned.
    FocusLost,
}
