use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle in canvas space.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub min: Vec2,
    pub max: Vec2,
}

impl Rect {
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Self {
            min: pos,
            max: pos + size,
        }
    }

    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }

    pub fn center(&self) -> Vec2 {
        (self.min + self.max) * 0.5
    }

    pub fn size(&self) -> Vec2 {
        self.max - self.min
    }

    pub fn translate(&mut self, delta: Vec2) {
        self.min += delta;
        self.max += delta;
    }
}

/// Calculates the two control points for a cubic Bezier curve connecting `start` to `end`.
///
/// Used for the pending connection wire while the user is dragging a link.
pub fn calculate_bezier_points(start: Vec2, end: Vec2) -> (Vec2, Vec2) {
    let dist = start.distance(end);
    let control_dist = (dist * 0.5).min(150.0);
    let cp1 = start + Vec2::new(control_dist, 0.0);
    let cp2 = end - Vec2::new(control_dist, 0.0);
    (cp1, cp2)
}

/// Calculates the arrowhead geometry for a directed edge from `start` to `end`.
///
/// The arrowhead sits at the edge midpoint: a head point offset along the edge
/// direction, and two tail points offset perpendicular to it. Returns
/// `(head, tail_a, tail_b)`; drawing `tail_a -> head` and `tail_b -> head`
/// produces the arrow.
pub fn arrowhead_points(start: Vec2, end: Vec2, size: f32) -> (Vec2, Vec2, Vec2) {
    let mid = (start + end) * 0.5;
    let dir = (end - start).normalize_or_zero();
    let perp = Vec2::new(-dir.y, dir.x);
    let head = mid + dir * size;
    (head, mid - perp * size, mid + perp * size)
}
