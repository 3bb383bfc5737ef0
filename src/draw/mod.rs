// src/draw/mod.rs
// Drawing summon lines and the card with Nannou.
// Everything upstream works in screen space (origin top-left, y down);
// conversion to Nannou space happens here and nowhere else.

pub mod line_draw;

pub use line_draw::{draw_burst, draw_card, draw_polyline, LinePalette};

use nannou::prelude::*;

#[derive(Debug, Clone)]
pub struct DrawParams {
    pub color: Rgba<f32>,
    pub stroke_weight: f32,
}

impl Default for DrawParams {
    fn default() -> Self {
        Self {
            color: rgba(1.0, 0.0, 0.0, 0.6),
            stroke_weight: 5.0,
        }
    }
}

// Method to transform from origin at top left to origin at center
pub fn to_view(point: Point2, viewport: Vec2) -> Point2 {
    let center_x = viewport.x / 2.0;
    let center_y = viewport.y / 2.0;
    pt2(point.x - center_x, center_y - point.y) // invert y to match nannou
}
