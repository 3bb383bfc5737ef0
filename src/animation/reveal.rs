// src/animation/reveal.rs
//
// Progressive reveal of a summon line.
// A RevealWindow picks the visible part of a polyline as a [from, to] range of its
// arc length. The window may sit partly (or wholly) outside [0, 1]: sliding
// (-1, 0) -> (1, 2) grows the line out of its start and then retracts it into the
// boundary.

use nannou::prelude::*;

use crate::models::Polyline;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealWindow {
    pub from: f32,
    pub to: f32,
}

impl RevealWindow {
    /// Nothing visible before the first summon.
    pub const HIDDEN: RevealWindow = RevealWindow { from: -1.0, to: -1.0 };
    /// Start of the sweep, nothing visible yet.
    pub const START: RevealWindow = RevealWindow { from: -1.0, to: 0.0 };
    /// End of the sweep, everything has passed.
    pub const END: RevealWindow = RevealWindow { from: 1.0, to: 2.0 };

    pub fn new(from: f32, to: f32) -> Self {
        Self { from, to }
    }

    pub fn lerp(a: RevealWindow, b: RevealWindow, t: f32) -> Self {
        Self {
            from: a.from + (b.from - a.from) * t,
            to: a.to + (b.to - a.to) * t,
        }
    }

    /// The part of the window that lands on the line, or None when nothing shows.
    pub fn visible_range(&self) -> Option<(f32, f32)> {
        let from = self.from.clamp(0.0, 1.0);
        let to = self.to.clamp(0.0, 1.0);
        if from < to {
            Some((from, to))
        } else {
            None
        }
    }

    pub fn apply(&self, polyline: &Polyline) -> Polyline {
        polyline.trimmed(self.from, self.to)
    }
}

impl Polyline {
    /// The sub-polyline between arc-length fractions `from` and `to`.
    /// Both are clamped to [0, 1]; an empty range or a zero-length line gives an
    /// empty polyline.
    pub fn trimmed(&self, from: f32, to: f32) -> Polyline {
        let Some((from, to)) = RevealWindow::new(from, to).visible_range() else {
            return Polyline::empty();
        };

        let total = self.length();
        if self.len() < 2 || total <= 0.0 {
            return Polyline::empty();
        }

        let start_at = from * total;
        let end_at = to * total;
        let points = self.points();

        let mut result: Vec<Point2> = Vec::with_capacity(points.len());
        let mut accumulated = 0.0;
        for pair in points.windows(2) {
            let seg_len = pair[0].distance(pair[1]);
            let seg_start = accumulated;
            let seg_end = accumulated + seg_len;
            accumulated = seg_end;

            if seg_len <= 0.0 || seg_end <= start_at {
                continue;
            }
            if seg_start > end_at {
                break;
            }

            if result.is_empty() {
                let t = ((start_at - seg_start) / seg_len).clamp(0.0, 1.0);
                result.push(pair[0].lerp(pair[1], t));
            }

            if seg_end >= end_at {
                let t = ((end_at - seg_start) / seg_len).clamp(0.0, 1.0);
                result.push(pair[0].lerp(pair[1], t));
                break;
            }
            result.push(pair[1]);
        }

        Polyline::new(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn bent() -> Polyline {
        // segments of 3, 4 and 5
        Polyline::new(vec![
            pt2(0.0, 0.0),
            pt2(3.0, 0.0),
            pt2(3.0, 4.0),
            pt2(6.0, 8.0),
        ])
    }

    #[test]
    fn test_full_range_keeps_line() {
        let polyline = bent();
        assert_eq!(polyline.trimmed(0.0, 1.0), polyline);
        assert_eq!(polyline.trimmed(-1.0, 2.0), polyline);
    }

    #[test]
    fn test_empty_ranges() {
        let polyline = bent();
        assert!(polyline.trimmed(0.5, 0.5).is_empty());
        assert!(polyline.trimmed(0.8, 0.2).is_empty());
        assert!(polyline.trimmed(-1.0, 0.0).is_empty());
        assert!(polyline.trimmed(1.0, 2.0).is_empty());
        assert!(Polyline::new(vec![pt2(1.0, 1.0), pt2(1.0, 1.0)])
            .trimmed(0.0, 1.0)
            .is_empty());
    }

    #[test]
    fn test_trim_inside_segments() {
        let polyline = bent();
        // 1.5 .. 9.0 along the line
        let trimmed = polyline.trimmed(0.125, 0.75);
        let points = trimmed.points();
        assert_eq!(points.len(), 4);
        assert_relative_eq!(points[0].x, 1.5);
        assert_relative_eq!(points[0].y, 0.0);
        assert_eq!(points[1], pt2(3.0, 0.0));
        assert_eq!(points[2], pt2(3.0, 4.0));
        assert_relative_eq!(points[3].x, 4.2, epsilon = 1e-5);
        assert_relative_eq!(points[3].y, 5.6, epsilon = 1e-5);
        assert_relative_eq!(trimmed.length(), 7.5, epsilon = 1e-4);
    }

    #[test]
    fn test_trim_within_one_segment() {
        let polyline = bent();
        // 3.5 .. 6.0, both inside the second segment
        let trimmed = polyline.trimmed(3.5 / 12.0, 0.5);
        let points = trimmed.points();
        assert_eq!(points.len(), 2);
        assert_relative_eq!(points[0].y, 0.5, epsilon = 1e-5);
        assert_relative_eq!(points[1].y, 3.0, epsilon = 1e-5);
    }

    #[test]
    fn test_trimmed_length_tracks_window() {
        let polyline = bent();
        for (from, to) in [(0.0_f32, 0.3_f32), (0.2, 0.9), (0.4, 1.0), (-0.5, 0.5)] {
            let visible = to.min(1.0) - from.max(0.0);
            assert_relative_eq!(polyline.trimmed(from, to).length(), visible * 12.0, epsilon = 1e-4);
        }
    }

    #[test]
    fn test_window_lerp() {
        let mid = RevealWindow::lerp(RevealWindow::START, RevealWindow::END, 0.5);
        assert_relative_eq!(mid.from, 0.0);
        assert_relative_eq!(mid.to, 1.0);
        assert_eq!(mid.visible_range(), Some((0.0, 1.0)));
        assert_eq!(RevealWindow::HIDDEN.visible_range(), None);
        assert_eq!(RevealWindow::START.apply(&bent()), Polyline::empty());
    }
}
