// src/services/path_service.rs
//
// Turns a LineSpec into the polyline that gets stroked on screen.
// Straight lines run directly into the boundary. Curved lines run straight,
// kink sideways by the style's angle between the two turns, then run straight
// again into the boundary.

use nannou::prelude::*;
use rayon::prelude::*;

use crate::models::{Direction, Handedness, LineSpec, PathStyle, Polyline};
use crate::models::line_config::TURN_GAP;

pub fn generate_polyline(spec: &LineSpec) -> Polyline {
    let start = spec.start;
    let end = spec.end;

    let (handedness, first, second, angle) = match spec.style.clamped() {
        PathStyle::Straight => {
            let end = match spec.direction {
                // vertical lines keep their x
                Direction::Top => pt2(start.x, end.y),
                Direction::Leading | Direction::Trailing => end,
            };
            return Polyline::new(vec![start, end]);
        }
        PathStyle::Curved {
            handedness,
            first_turn_fraction,
            second_turn_fraction,
            angle_degrees,
        } => (
            handedness,
            first_turn_fraction,
            second_turn_fraction,
            angle_degrees,
        ),
    };

    let total_distance = travel_distance(spec.direction, start, end);

    // distances from start along the travel axis
    let t1 = first * total_distance;
    let mut t2 = second * total_distance;
    if t2 <= t1 {
        t2 = t1 + TURN_GAP * total_distance;
    }

    let lateral = (t2 - t1) * angle.abs().to_radians().tan();
    let offset = lateral * lateral_sign(spec.direction, handedness);

    let (point1, point2, final_point) = match spec.direction {
        Direction::Top => {
            let point1 = pt2(start.x, start.y - t1);
            let point2 = pt2(start.x + offset, start.y - t2);
            (point1, point2, pt2(point2.x, end.y))
        }
        Direction::Leading => {
            let point1 = pt2(start.x - t1, start.y);
            let point2 = pt2(start.x - t2, start.y + offset);
            (point1, point2, pt2(end.x, point2.y))
        }
        Direction::Trailing => {
            let point1 = pt2(start.x + t1, start.y);
            let point2 = pt2(start.x + t2, start.y + offset);
            (point1, point2, pt2(end.x, point2.y))
        }
    };

    Polyline::new(vec![start, point1, point2, final_point])
}

/// Polylines for a whole batch of lines, in input order.
pub fn generate_polylines(specs: &[LineSpec]) -> Vec<Polyline> {
    specs.par_iter().map(generate_polyline).collect()
}

/// Distance from start to end measured along the direction of travel.
/// Non-positive when the end is not ahead of the start.
pub fn travel_distance(direction: Direction, start: Point2, end: Point2) -> f32 {
    match direction {
        Direction::Top => start.y - end.y,
        Direction::Leading => start.x - end.x,
        Direction::Trailing => end.x - start.x,
    }
}

fn lateral_sign(direction: Direction, handedness: Handedness) -> f32 {
    match (direction, handedness) {
        (Direction::Top | Direction::Trailing, Handedness::Right) => 1.0,
        (Direction::Top | Direction::Trailing, Handedness::Left) => -1.0,
        (Direction::Leading, Handedness::Right) => -1.0,
        (Direction::Leading, Handedness::Left) => 1.0,
    }
}
