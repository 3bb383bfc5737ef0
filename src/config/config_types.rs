// src/config/config_types.rs
//
// Config types for the app

use crate::animation::EasingType;
use crate::errors::{SummonError, SummonResult};
use crate::services::LineCounts;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct WindowConfig {
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Deserialize)]
pub struct StyleConfig {
    pub line_alpha: f32,
    pub card_color: [f32; 3],
    pub background_color: [f32; 3],
}

#[derive(Debug, Deserialize)]
pub struct PathConfig {
    pub output_directory: String,
}

/************************* Summon Configs ********************/
#[derive(Debug, Deserialize)]
pub struct SummonConfig {
    pub card: CardConfig,
    pub lines: LinesConfig,
    pub timing: TimingConfig,
    // fixed seed for a repeatable sequence of bursts
    pub seed: Option<u64>,
}

#[derive(Debug, Deserialize)]
pub struct CardConfig {
    pub width: f32,
    pub height: f32,
}

/// Counts are signed in the file so a negative value is reported, not wrapped.
#[derive(Debug, Deserialize)]
pub struct LinesConfig {
    pub top_count: i64,
    pub leading_count: i64,
    pub trailing_count: i64,
    pub safe_top: f32,
    pub edge_inset: f32,
}

#[derive(Debug, Deserialize, Clone, Copy)]
pub struct TimingConfig {
    pub delay: f32,          // pause after a trigger before the card turns
    pub flip_duration: f32,  // card turning from edge-on to face-on
    pub reveal_duration: f32, // lines sweeping out to the boundary
    #[serde(default)]
    pub easing: EasingType,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            delay: 0.1,
            flip_duration: 0.5,
            reveal_duration: 0.3,
            easing: EasingType::Linear,
        }
    }
}

impl LinesConfig {
    pub fn counts(&self) -> SummonResult<LineCounts> {
        Ok(LineCounts {
            top: checked_count("top_count", self.top_count)?,
            leading: checked_count("leading_count", self.leading_count)?,
            trailing: checked_count("trailing_count", self.trailing_count)?,
        })
    }
}

impl TimingConfig {
    pub fn validate(&self) -> SummonResult<()> {
        if self.delay < 0.0 {
            return Err(SummonError::InvalidArgument(format!(
                "timing.delay must not be negative, got {}",
                self.delay
            )));
        }
        for (name, value) in [
            ("flip_duration", self.flip_duration),
            ("reveal_duration", self.reveal_duration),
        ] {
            if value <= 0.0 {
                return Err(SummonError::InvalidArgument(format!(
                    "timing.{} must be positive, got {}",
                    name, value
                )));
            }
        }
        Ok(())
    }
}

impl CardConfig {
    pub fn validate(&self) -> SummonResult<()> {
        if self.width <= 0.0 || self.height <= 0.0 {
            return Err(SummonError::InvalidArgument(format!(
                "card size must be positive, got {}x{}",
                self.width, self.height
            )));
        }
        Ok(())
    }
}

fn checked_count(name: &str, value: i64) -> SummonResult<usize> {
    usize::try_from(value).map_err(|_| {
        SummonError::InvalidArgument(format!("lines.{} must not be negative, got {}", name, value))
    })
}
