//! # Configuration
//!
//! Layout and style parameters for the editor. The host can deserialize these
//! from its settings store or use the defaults, which match the original
//! dungeon editor's node and grid dimensions.

use glam::{Vec2, Vec4};
use serde::{Deserialize, Serialize};

/// Layout parameters for the editor.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct EditorConfig {
    /// Fixed size of every room node in pixels. Default: 160x75.
    pub node_size: Vec2,
    /// Where the auto-created entrance node is placed when the first node is
    /// added to an empty graph. Default: (200, 200).
    pub entrance_spawn: Vec2,
    /// Width of connection lines and the pending link wire. Default: 3.0.
    pub connecting_line_width: f32,
    /// Length of the arrowhead strokes on connection lines. Default: 6.0.
    pub arrow_size: f32,
    /// Spacing of the fine background grid. Default: 25.0.
    pub grid_small: f32,
    /// Spacing of the coarse background grid. Default: 100.0.
    pub grid_large: f32,
    /// Visual styling configuration.
    #[serde(default)]
    pub style: EditorStyle,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            node_size: Vec2::new(160.0, 75.0),
            entrance_spawn: Vec2::new(200.0, 200.0),
            connecting_line_width: 3.0,
            arrow_size: 6.0,
            grid_small: 25.0,
            grid_large: 100.0,
            style: EditorStyle::default(),
        }
    }
}

/// Visual styling for the editor. Colors are RGBA in `glam::Vec4`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct EditorStyle {
    /// Base color of the grid lines; per-scale opacity is applied on top.
    pub grid_color: Vec4,
    /// Opacity of the fine grid. Default: 0.2.
    pub grid_small_opacity: f32,
    /// Opacity of the coarse grid. Default: 0.3.
    pub grid_large_opacity: f32,
    /// Style for unselected nodes.
    #[serde(default)]
    pub node_default: NodeStyle,
    /// Style for selected nodes.
    #[serde(default = "NodeStyle::selected")]
    pub node_selected: NodeStyle,
    /// Color of connection lines, arrowheads, and the pending link wire.
    pub link_color: Vec4,
    /// Font size for node labels.
    pub label_size: f32,
}

impl Default for EditorStyle {
    fn default() -> Self {
        Self {
            grid_color: Vec4::new(0.5, 0.5, 0.5, 1.0),
            grid_small_opacity: 0.2,
            grid_large_opacity: 0.3,
            node_default: NodeStyle::default(),
            node_selected: NodeStyle::selected(),
            link_color: Vec4::new(1.0, 1.0, 1.0, 1.0),
            label_size: 14.0,
        }
    }
}

/// Visual style for a room node.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct NodeStyle {
    pub color: Vec4,
    pub border_color: Vec4,
    pub text_color: Vec4,
    pub border_width: f32,
}

impl Default for NodeStyle {
    fn default() -> Self {
        Self {
            color: Vec4::new(0.17, 0.22, 0.28, 1.0),
            border_color: Vec4::new(0.45, 0.45, 0.45, 1.0),
            text_color: Vec4::new(1.0, 1.0, 1.0, 1.0),
            border_width: 1.0,
        }
    }
}

impl NodeStyle {
    /// Highlighted variant used while a node is selected.
    fn selected() -> Self {
        Self {
            color: Vec4::new(0.22, 0.30, 0.40, 1.0),
            border_color: Vec4::new(0.85, 0.85, 0.55, 1.0),
            border_width: 2.0,
            ..Self::default()
        }
    }
}
