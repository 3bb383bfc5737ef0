// src/services/config_factory.rs
//
// Samples batches of randomized LineConfigs.
// The caller owns the rng, so a seeded rng gives a repeatable summon.

use rand::Rng;
use std::ops::RangeInclusive;

use crate::errors::{SummonError, SummonResult};
use crate::models::{Handedness, LineConfig, PathStyle};

const ANGLE_RANGE: RangeInclusive<f32> = 25.0..=35.0;

// top lines turn earlier and tighter than side lines
const TOP_FIRST_TURN: RangeInclusive<f32> = 0.1..=0.2;
const TOP_SECOND_TURN: RangeInclusive<f32> = 0.3..=0.4;
const SIDE_FIRST_TURN: RangeInclusive<f32> = 0.2..=0.4;
const SIDE_SECOND_TURN: RangeInclusive<f32> = 0.5..=0.8;

pub fn random_configs<R: Rng + ?Sized>(rng: &mut R, count: usize, is_top: bool) -> Vec<LineConfig> {
    (0..count)
        .map(|_| LineConfig::new(random_style(rng, is_top)))
        .collect()
}

/// Same as `random_configs`, for counts that arrive signed (config files, OSC-style
/// messages). A negative count is rejected instead of producing an empty batch.
pub fn random_configs_checked<R: Rng + ?Sized>(
    rng: &mut R,
    count: i64,
    is_top: bool,
) -> SummonResult<Vec<LineConfig>> {
    let count = usize::try_from(count).map_err(|_| {
        SummonError::InvalidArgument(format!("line count must be non-negative, got {}", count))
    })?;
    Ok(random_configs(rng, count, is_top))
}

/// One of straight, left-curved or right-curved with equal odds.
pub fn random_style<R: Rng + ?Sized>(rng: &mut R, is_top: bool) -> PathStyle {
    let handedness = match rng.gen_range(0..3) {
        0 => return PathStyle::Straight,
        1 => Handedness::Left,
        _ => Handedness::Right,
    };

    let (first_range, second_range) = if is_top {
        (TOP_FIRST_TURN, TOP_SECOND_TURN)
    } else {
        (SIDE_FIRST_TURN, SIDE_SECOND_TURN)
    };

    PathStyle::Curved {
        handedness,
        first_turn_fraction: rng.gen_range(first_range),
        second_turn_fraction: rng.gen_range(second_range),
        angle_degrees: rng.gen_range(ANGLE_RANGE),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    fn curved_fields(config: &LineConfig) -> Option<(f32, f32, f32)> {
        match config.style {
            PathStyle::Curved {
                first_turn_fraction,
                second_turn_fraction,
                angle_degrees,
                ..
            } => Some((first_turn_fraction, second_turn_fraction, angle_degrees)),
            PathStyle::Straight => None,
        }
    }

    #[test]
    fn test_top_batch_ranges() {
        let mut rng = StdRng::seed_from_u64(42);
        let configs = random_configs(&mut rng, 10, true);
        assert_eq!(configs.len(), 10);
        for (first, second, angle) in configs.iter().filter_map(curved_fields) {
            assert!(TOP_FIRST_TURN.contains(&first));
            assert!(TOP_SECOND_TURN.contains(&second));
            assert!(ANGLE_RANGE.contains(&angle));
        }
    }

    #[test]
    fn test_side_batch_ranges() {
        let mut rng = StdRng::seed_from_u64(3);
        let configs = random_configs(&mut rng, 50, false);
        assert_eq!(configs.len(), 50);
        for (first, second, angle) in configs.iter().filter_map(curved_fields) {
            assert!(SIDE_FIRST_TURN.contains(&first));
            assert!(SIDE_SECOND_TURN.contains(&second));
            assert!(ANGLE_RANGE.contains(&angle));
        }
    }

    #[test]
    fn test_all_styles_appear() {
        let mut rng = StdRng::seed_from_u64(11);
        let configs = random_configs(&mut rng, 300, false);
        let straight = configs.iter().filter(|c| c.style.is_straight()).count();
        let left = configs
            .iter()
            .filter(|c| {
                matches!(
                    c.style,
                    PathStyle::Curved {
                        handedness: Handedness::Left,
                        ..
                    }
                )
            })
            .count();
        let right = configs.len() - straight - left;
        assert!(straight > 50, "straight: {}", straight);
        assert!(left > 50, "left: {}", left);
        assert!(right > 50, "right: {}", right);
    }

    #[test]
    fn test_seeded_batches_repeat() {
        let a = random_configs(&mut StdRng::seed_from_u64(9), 12, false);
        let b = random_configs(&mut StdRng::seed_from_u64(9), 12, false);
        assert_eq!(a, b);
    }

    #[test]
    fn test_zero_count() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(random_configs(&mut rng, 0, true).is_empty());
    }

    #[test]
    fn test_negative_count_rejected() {
        let mut rng = StdRng::seed_from_u64(1);
        let result = random_configs_checked(&mut rng, -1, false);
        assert!(matches!(result, Err(SummonError::InvalidArgument(_))));

        let configs = random_configs_checked(&mut rng, 4, false).unwrap();
        assert_eq!(configs.len(), 4);
    }
}
