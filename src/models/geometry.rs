// src/models/geometry.rs
// Geometry types for summon lines.
// All points are in screen space: origin at the top-left, y grows downward.

use nannou::prelude::*;

use super::line_config::{Direction, PathStyle};

/// Full input to path generation. Built fresh for every line of every summon.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineSpec {
    pub start: Point2,
    pub end: Point2,
    pub direction: Direction,
    pub style: PathStyle,
    // width of the card for Top lines, height for Leading/Trailing
    pub lateral_bound: f32,
}

/// Ordered points joined by straight segments.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Polyline {
    points: Vec<Point2>,
}

impl Polyline {
    pub fn new(points: Vec<Point2>) -> Self {
        Self { points }
    }

    pub fn empty() -> Self {
        Self { points: Vec::new() }
    }

    pub fn points(&self) -> &[Point2] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn first(&self) -> Option<Point2> {
        self.points.first().copied()
    }

    pub fn last(&self) -> Option<Point2> {
        self.points.last().copied()
    }

    pub fn segment_lengths(&self) -> Vec<f32> {
        self.points
            .windows(2)
            .map(|pair| pair[0].distance(pair[1]))
            .collect()
    }

    /// Total arc length.
    pub fn length(&self) -> f32 {
        self.segment_lengths().iter().sum()
    }

    /// Point at `fraction` of the arc length, fraction clamped to [0, 1].
    pub fn point_at(&self, fraction: f32) -> Option<Point2> {
        let first = self.first()?;
        let total = self.length();
        if total <= 0.0 {
            return Some(first);
        }

        let target = fraction.clamp(0.0, 1.0) * total;
        let mut accumulated = 0.0;
        for pair in self.points.windows(2) {
            let seg_len = pair[0].distance(pair[1]);
            if accumulated + seg_len >= target {
                let t = if seg_len > 0.0 {
                    ((target - accumulated) / seg_len).clamp(0.0, 1.0)
                } else {
                    0.0
                };
                return Some(pair[0].lerp(pair[1], t));
            }
            accumulated += seg_len;
        }
        self.last()
    }
}

/// The card rectangle lines depart from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardFrame {
    pub origin: Point2,
    pub size: Vec2,
}

impl CardFrame {
    pub fn new(origin: Point2, size: Vec2) -> Self {
        Self { origin, size }
    }

    /// Card of `size` centered in a viewport of `viewport`.
    pub fn centered(viewport: Vec2, size: Vec2) -> Self {
        Self {
            origin: (viewport - size) / 2.0,
            size,
        }
    }

    pub fn left(&self) -> f32 {
        self.origin.x
    }

    pub fn right(&self) -> f32 {
        self.origin.x + self.size.x
    }

    pub fn top(&self) -> f32 {
        self.origin.y
    }

    pub fn bottom(&self) -> f32 {
        self.origin.y + self.size.y
    }

    pub fn center(&self) -> Point2 {
        self.origin + self.size / 2.0
    }
}
