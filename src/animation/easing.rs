// src/animation/easing.rs
//
// Easing curves for the summon timeline.

use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EasingType {
    #[default]
    Linear,
    EaseInOut,
    EaseIn,
    EaseOut,
}

impl EasingType {
    /// Maps linear progress in [0, 1] onto the curve. Input outside that range is clamped.
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            EasingType::Linear => t,
            EasingType::EaseInOut => ease_in_out(t),
            EasingType::EaseIn => ease_in(t),
            EasingType::EaseOut => ease_out(t),
        }
    }
}

fn ease_in_out(t: f32) -> f32 {
    if t < 0.5 {
        2.0 * t * t
    } else {
        -1.0 + (4.0 - 2.0 * t) * t
    }
}

fn ease_in(t: f32) -> f32 {
    t * t
}

fn ease_out(t: f32) -> f32 {
    t * (2.0 - t)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_endpoints_fixed() {
        for easing in [
            EasingType::Linear,
            EasingType::EaseInOut,
            EasingType::EaseIn,
            EasingType::EaseOut,
        ] {
            assert_relative_eq!(easing.apply(0.0), 0.0);
            assert_relative_eq!(easing.apply(1.0), 1.0);
        }
    }

    #[test]
    fn test_curves() {
        assert_relative_eq!(EasingType::Linear.apply(0.25), 0.25);
        assert_relative_eq!(EasingType::EaseIn.apply(0.5), 0.25);
        assert_relative_eq!(EasingType::EaseOut.apply(0.5), 0.75);
        assert_relative_eq!(EasingType::EaseInOut.apply(0.25), 0.125);
        assert_relative_eq!(EasingType::EaseInOut.apply(0.75), 0.875);
    }

    #[test]
    fn test_out_of_range_clamped() {
        assert_eq!(EasingType::EaseOut.apply(-2.0), 0.0);
        assert_eq!(EasingType::EaseIn.apply(3.0), 1.0);
    }
}
