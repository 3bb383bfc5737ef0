// src/models/line_config.rs
//
// How a single summon line bends, and which frame edge it leaves from.

use rand::Rng;
use serde::{Deserialize, Serialize};

pub const FIRST_TURN_MIN: f32 = 0.1;
pub const FIRST_TURN_MAX: f32 = 0.6;
pub const SECOND_TURN_FLOOR: f32 = 0.5;
pub const SECOND_TURN_MAX: f32 = 0.9;
// minimum spacing between the two turns, as a fraction of the travel distance
pub const TURN_GAP: f32 = 0.1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Top,
    Leading,
    Trailing,
}

impl Direction {
    pub const ALL: [Direction; 3] = [Direction::Top, Direction::Leading, Direction::Trailing];

    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::ALL[rng.gen_range(0..Self::ALL.len())]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Handedness {
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PathStyle {
    Straight,
    Curved {
        handedness: Handedness,
        first_turn_fraction: f32,
        second_turn_fraction: f32,
        angle_degrees: f32,
    },
}

impl PathStyle {
    /// Returns the style with both turn fractions pulled into their legal ranges.
    /// The second turn is always at least `TURN_GAP` past the first and never before
    /// the halfway mark.
    pub fn clamped(self) -> Self {
        match self {
            PathStyle::Straight => PathStyle::Straight,
            PathStyle::Curved {
                handedness,
                first_turn_fraction,
                second_turn_fraction,
                angle_degrees,
            } => {
                let first = clamp(first_turn_fraction, FIRST_TURN_MIN, FIRST_TURN_MAX);
                let second_min = (first + TURN_GAP).max(SECOND_TURN_FLOOR);
                let second = clamp(second_turn_fraction, second_min, SECOND_TURN_MAX);
                PathStyle::Curved {
                    handedness,
                    first_turn_fraction: first,
                    second_turn_fraction: second,
                    angle_degrees,
                }
            }
        }
    }

    pub fn is_straight(&self) -> bool {
        matches!(self, PathStyle::Straight)
    }
}

// max(lower, min(value, upper)): lower wins when the bounds cross
fn clamp(value: f32, lower: f32, upper: f32) -> f32 {
    lower.max(value.min(upper))
}

/// One entry of a batch handed to the layout. Its index in the batch is its identity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineConfig {
    pub style: PathStyle,
}

impl LineConfig {
    pub fn new(style: PathStyle) -> Self {
        Self { style }
    }
}
