use glam::{Vec2, Vec4};

use crate::config::{EditorConfig, NodeStyle};
use crate::math;
use crate::model::RoomGraph;
use crate::render::{DrawCommand, RenderList};

/// Converts the graph state into a display list for the host to render.
///
/// Rendering is read-only: it never mutates the graph, and redraw signaling
/// happens through `LogicEvent::RepaintNeeded` from the interaction layer.
pub struct Painter;

impl Painter {
    /// Generates the draw commands for one frame:
    /// dual-scale background grid, connection lines with arrowheads, the
    /// pending link wire if one is being dragged, and every node rect with
    /// its kind label (highlighted style while selected).
    pub fn draw_graph(
        config: &EditorConfig,
        graph: &RoomGraph,
        screen_size: Vec2,
        grid_offset: Vec2,
    ) -> RenderList {
        let mut draw_list = Vec::new();
        let style = &config.style;

        // 1. Two overlaid grids at different scales for visual depth.
        Self::draw_grid(
            config.grid_small,
            style.grid_small_opacity,
            style.grid_color,
            screen_size,
            grid_offset,
            &mut draw_list,
        );
        Self::draw_grid(
            config.grid_large,
            style.grid_large_opacity,
            style.grid_color,
            screen_size,
            grid_offset,
            &mut draw_list,
        );

        // 2. Established connections, drawn behind nodes.
        for node in &graph.nodes {
            for &child_id in &node.children {
                if let Some(child) = graph.lookup(child_id) {
                    Self::draw_connection(
                        node.rect.center(),
                        child.rect.center(),
                        config,
                        &mut draw_list,
                    );
                }
            }
        }

        // 3. The in-progress connection wire.
        if let Some(origin) = graph.link_origin
            && let Some(origin_node) = graph.lookup(origin)
        {
            let start = origin_node.rect.center();
            let end = graph.link_endpoint;
            let (cp1, cp2) = math::calculate_bezier_points(start, end);
            draw_list.push(DrawCommand::Bezier {
                start,
                cp1,
                cp2,
                end,
                color: style.link_color,
                width: config.connecting_line_width,
            });
        }

        // 4. Nodes, in creation order.
        for node in &graph.nodes {
            let node_style: &NodeStyle = if node.is_selected() {
                &style.node_selected
            } else {
                &style.node_default
            };

            draw_list.push(DrawCommand::Rect {
                pos: node.rect.min,
                size: node.rect.size(),
                color: node_style.color,
                stroke_width: node_style.border_width,
                stroke_color: Some(node_style.border_color),
            });

            draw_list.push(DrawCommand::Text {
                pos: node.rect.min + Vec2::new(8.0, 8.0),
                text: node.kind.display_name().to_string(),
                color: node_style.text_color,
                size: style.label_size,
            });
        }

        draw_list
    }

    /// A directed edge: a straight line plus an arrowhead built from two
    /// short strokes at the midpoint, pointing from parent to child.
    fn draw_connection(
        start: Vec2,
        end: Vec2,
        config: &EditorConfig,
        draw_list: &mut RenderList,
    ) {
        let color = config.style.link_color;
        let width = config.connecting_line_width;

        let (head, tail_a, tail_b) = math::arrowhead_points(start, end, config.arrow_size);
        draw_list.push(DrawCommand::Line {
            start: tail_a,
            end: head,
            color,
            width,
        });
        draw_list.push(DrawCommand::Line {
            start: tail_b,
            end: head,
            color,
            width,
        });

        draw_list.push(DrawCommand::Line {
            start,
            end,
            color,
            width,
        });
    }

    /// One grid layer, scrolled by the accumulated pan offset. Lines overshoot
    /// the viewport by one cell so partial cells at the edges stay covered.
    fn draw_grid(
        spacing: f32,
        opacity: f32,
        base_color: Vec4,
        screen_size: Vec2,
        grid_offset: Vec2,
        draw_list: &mut RenderList,
    ) {
        let color = Vec4::new(base_color.x, base_color.y, base_color.z, opacity);
        let offset = Vec2::new(
            grid_offset.x.rem_euclid(spacing),
            grid_offset.y.rem_euclid(spacing),
        );

        let vertical_count = ((screen_size.x + spacing) / spacing).ceil() as i32;
        for i in 0..vertical_count {
            let x = spacing * i as f32 + offset.x;
            draw_list.push(DrawCommand::Line {
                start: Vec2::new(x, -spacing + offset.y),
                end: Vec2::new(x, screen_size.y + spacing + offset.y),
                color,
                width: 1.0,
            });
        }

        let horizontal_count = ((screen_size.y + spacing) / spacing).ceil() as i32;
        for j in 0..horizontal_count {
            let y = spacing * j as f32 + offset.y;
            draw_list.push(DrawCommand::Line {
                start: Vec2::new(-spacing + offset.x, y),
                end: Vec2::new(screen_size.x + spacing + offset.x, y),
                color,
                width: 1.0,
            });
        }
    }
}
