/// src/draw/line_draw.rs
/// Summon lines and card translation to Nannou Draw

use nannou::prelude::*;
use rand::Rng;

use super::{to_view, DrawParams};
use crate::animation::RevealWindow;
use crate::models::{CardFrame, Polyline};
use crate::services::SummonBurst;

// hue spread of the palette around its base hue
const HUE_SPREAD: f32 = 0.1;

/// Three related colours, handed out to lines in turn.
#[derive(Debug, Clone)]
pub struct LinePalette {
    colors: [Rgba<f32>; 3],
}

impl LinePalette {
    pub fn from_hue(base_hue: f32, alpha: f32) -> Self {
        let hue = |offset: f32| (base_hue + offset).rem_euclid(1.0);
        Self {
            colors: [
                Rgba::from(hsva(hue(0.0), 0.7, 0.8, alpha)),
                Rgba::from(hsva(hue(HUE_SPREAD), 0.8, 0.9, alpha)),
                Rgba::from(hsva(hue(-HUE_SPREAD), 0.6, 0.7, alpha)),
            ],
        }
    }

    pub fn random<R: Rng + ?Sized>(rng: &mut R, alpha: f32) -> Self {
        Self::from_hue(rng.gen_range(0.0..1.0), alpha)
    }

    pub fn color(&self, index: usize) -> Rgba<f32> {
        self.colors[index % self.colors.len()]
    }
}

pub fn draw_polyline(draw: &Draw, polyline: &Polyline, viewport: Vec2, params: &DrawParams) {
    if polyline.len() < 2 {
        return;
    }

    let points = polyline.points().iter().map(|p| to_view(*p, viewport));
    draw.polyline()
        .weight(params.stroke_weight)
        .join_round()
        .caps_round()
        .points(points)
        .color(params.color);
}

/// Draws the part of every line in `burst` that `reveal` leaves visible.
pub fn draw_burst(
    draw: &Draw,
    burst: &SummonBurst,
    reveal: RevealWindow,
    viewport: Vec2,
    palette: &LinePalette,
    stroke_weight: f32,
) {
    if reveal.visible_range().is_none() {
        return;
    }

    for (index, line) in burst.lines().enumerate() {
        let params = DrawParams {
            color: palette.color(index),
            stroke_weight,
        };
        draw_polyline(draw, &reveal.apply(&line.polyline), viewport, &params);
    }
}

/// The card turns about its vertical axis; at -90° it is edge-on and invisible.
pub fn draw_card(draw: &Draw, card: &CardFrame, angle_deg: f32, viewport: Vec2, color: Rgb<f32>) {
    let width = card.size.x * angle_deg.to_radians().cos().abs();
    if width < 0.5 {
        return;
    }

    let center = to_view(card.center(), viewport);
    draw.rect()
        .xy(center)
        .w_h(width, card.size.y)
        .color(color);
    draw.rect()
        .xy(center)
        .w_h(width, card.size.y)
        .no_fill()
        .stroke(rgb(1.0, 1.0, 1.0))
        .stroke_weight(2.0);
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn same(a: Rgba<f32>, b: Rgba<f32>) -> bool {
        (a.red - b.red).abs() < 1e-4
            && (a.green - b.green).abs() < 1e-4
            && (a.blue - b.blue).abs() < 1e-4
            && (a.alpha - b.alpha).abs() < 1e-4
    }

    #[test]
    fn test_palette_cycles() {
        let palette = LinePalette::from_hue(0.5, 0.6);
        assert!(same(palette.color(0), palette.color(3)));
        assert!(same(palette.color(1), palette.color(4)));
        assert!(!same(palette.color(0), palette.color(1)));
        assert_relative_eq!(palette.color(2).alpha, 0.6);
    }

    #[test]
    fn test_palette_wraps_hue() {
        // base hue near zero must not go negative on the low side
        let low = LinePalette::from_hue(0.05, 1.0);
        let high = LinePalette::from_hue(1.05, 1.0);
        assert!(same(low.color(2), high.color(2)));
    }
}
