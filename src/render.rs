//! # Rendering Output
//!
//! Instead of drawing directly, the editor outputs a display list of `DrawCommand`s.
//! The host application (an engine editor window, egui panel, etc.) interprets these
//! commands and draws pixels. Exact colors and widths come from the style config and
//! are cosmetic, not part of the functional contract.

use glam::{Vec2, Vec4};
use serde::{Deserialize, Serialize};

/// A single drawing primitive.
///
/// Coordinates are in canvas space, which for this editor is also screen space
/// (there is no zoom; panning translates node positions instead of a camera).
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum DrawCommand {
    /// A filled rectangle with an optional stroke. Used for room nodes.
    Rect {
        /// Top-left position in pixels.
        pos: Vec2,
        /// Size in pixels.
        size: Vec2,
        /// Fill color (RGBA, 0.0 - 1.0).
        color: Vec4,
        /// Width of the border stroke in pixels.
        stroke_width: f32,
        /// Color of the border stroke.
        stroke_color: Option<Vec4>,
    },
    /// A straight line segment. Used for grid lines, connections, and arrowheads.
    Line {
        start: Vec2,
        end: Vec2,
        color: Vec4,
        width: f32,
    },
    /// Text label for a node.
    Text {
        /// Top-left position in pixels.
        pos: Vec2,
        text: String,
        color: Vec4,
        /// Font size in pixels (approximate).
        size: f32,
    },
    /// A cubic Bezier curve, used for the in-progress connection wire.
    Bezier {
        start: Vec2,
        cp1: Vec2,
        cp2: Vec2,
        end: Vec2,
        color: Vec4,
        width: f32,
    },
}

/// A list of draw commands representing the current frame.
pub type RenderList = Vec<DrawCommand>;
