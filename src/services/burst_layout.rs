// src/services/burst_layout.rs
//
// Places the lines of one summon around the card.
// Each departing edge of the card is split into equal slots, one per line; a line
// starts somewhere inside its slot and runs to the safe boundary of the screen.

use nannou::prelude::*;
use rand::Rng;

use crate::models::{CardFrame, Direction, LineConfig, LineSpec, Polyline};
use crate::services::config_factory::random_configs;
use crate::services::path_service::generate_polylines;

// how far a top line's end may drift sideways, as a fraction of the card width
const TOP_END_DRIFT: f32 = 0.2;
// stroke width as a fraction of the shorter viewport side
const STROKE_RATIO: f32 = 0.008;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BurstLayout {
    pub viewport: Vec2,
    pub card: CardFrame,
    // y of the boundary top lines run into
    pub safe_top: f32,
    // distance of the left/right boundaries from the viewport edges
    pub edge_inset: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineCounts {
    pub top: usize,
    pub leading: usize,
    pub trailing: usize,
}

impl Default for LineCounts {
    fn default() -> Self {
        Self {
            top: 7,
            leading: 10,
            trailing: 10,
        }
    }
}

impl BurstLayout {
    pub fn new(viewport: Vec2, card_size: Vec2, safe_top: f32, edge_inset: f32) -> Self {
        Self {
            viewport,
            card: CardFrame::centered(viewport, card_size),
            safe_top,
            edge_inset,
        }
    }

    pub fn stroke_width(&self) -> f32 {
        stroke_width(self.viewport)
    }

    /// One LineSpec per config, leaving the card edge that `direction` names.
    pub fn layout_edge<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        direction: Direction,
        configs: &[LineConfig],
    ) -> Vec<LineSpec> {
        if configs.is_empty() {
            return Vec::new();
        }

        let card = self.card;
        let slot_count = configs.len() as f32;

        configs
            .iter()
            .enumerate()
            .map(|(index, config)| match direction {
                Direction::Top => {
                    let slot = card.size.x / slot_count;
                    let slot_start = card.left() + index as f32 * slot;
                    let start_x = rng.gen_range(slot_start..=slot_start + slot);

                    let drift = card.size.x * TOP_END_DRIFT;
                    let lower = card.left().max(start_x - drift);
                    let upper = card.right().min(start_x + drift);
                    let end_x = rng.gen_range(lower..=upper);

                    LineSpec {
                        start: pt2(start_x, card.top()),
                        end: pt2(end_x, self.safe_top),
                        direction,
                        style: config.style,
                        lateral_bound: card.size.x,
                    }
                }
                Direction::Leading | Direction::Trailing => {
                    let slot = card.size.y / slot_count;
                    let slot_start = card.top() + index as f32 * slot;
                    let start_y = rng.gen_range(slot_start..=slot_start + slot);

                    let (start_x, end_x) = if direction == Direction::Leading {
                        (card.left(), self.edge_inset)
                    } else {
                        (card.right(), self.viewport.x - self.edge_inset)
                    };

                    LineSpec {
                        start: pt2(start_x, start_y),
                        end: pt2(end_x, start_y),
                        direction,
                        style: config.style,
                        lateral_bound: card.size.y,
                    }
                }
            })
            .collect()
    }
}

pub fn stroke_width(viewport: Vec2) -> f32 {
    viewport.x.min(viewport.y) * STROKE_RATIO
}

#[derive(Debug, Clone, PartialEq)]
pub struct BurstLine {
    pub spec: LineSpec,
    pub polyline: Polyline,
}

/// Every line of one summon, grouped by the edge it leaves from.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SummonBurst {
    pub top: Vec<BurstLine>,
    pub leading: Vec<BurstLine>,
    pub trailing: Vec<BurstLine>,
}

impl SummonBurst {
    pub fn generate<R: Rng + ?Sized>(rng: &mut R, layout: &BurstLayout, counts: LineCounts) -> Self {
        let top_configs = random_configs(rng, counts.top, true);
        let leading_configs = random_configs(rng, counts.leading, false);
        let trailing_configs = random_configs(rng, counts.trailing, false);

        let burst = Self {
            top: build_lines(layout.layout_edge(rng, Direction::Top, &top_configs)),
            leading: build_lines(layout.layout_edge(rng, Direction::Leading, &leading_configs)),
            trailing: build_lines(layout.layout_edge(rng, Direction::Trailing, &trailing_configs)),
        };
        log::debug!(
            "Generated burst: {} top, {} leading, {} trailing",
            burst.top.len(),
            burst.leading.len(),
            burst.trailing.len()
        );
        burst
    }

    pub fn lines(&self) -> impl Iterator<Item = &BurstLine> {
        self.top
            .iter()
            .chain(self.leading.iter())
            .chain(self.trailing.iter())
    }

    pub fn line_count(&self) -> usize {
        self.top.len() + self.leading.len() + self.trailing.len()
    }
}

fn build_lines(specs: Vec<LineSpec>) -> Vec<BurstLine> {
    let polylines = generate_polylines(&specs);
    specs
        .into_iter()
        .zip(polylines)
        .map(|(spec, polyline)| BurstLine { spec, polyline })
        .collect()
}
