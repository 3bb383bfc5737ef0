// src/services/snapshot.rs
//
// Writes the current burst to JSON so a summon can be inspected or replayed
// outside the app.

use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

use super::burst_layout::{BurstLine, SummonBurst};
use crate::errors::SummonResult;
use crate::models::{Direction, PathStyle};

#[derive(Debug, Serialize)]
pub struct LineSnapshot {
    pub direction: Direction,
    pub style: PathStyle,
    pub lateral_bound: f32,
    pub points: Vec<[f32; 2]>,
}

#[derive(Debug, Serialize)]
pub struct BurstSnapshot {
    pub seed: Option<u64>,
    pub lines: Vec<LineSnapshot>,
}

impl BurstSnapshot {
    pub fn from_burst(burst: &SummonBurst, seed: Option<u64>) -> Self {
        Self {
            seed,
            lines: burst.lines().map(LineSnapshot::from).collect(),
        }
    }

    pub fn to_json(&self) -> SummonResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Writes `burst_NNNN.json` into `dir`, creating it if needed.
    pub fn write_to_dir(&self, dir: &Path, index: u32) -> SummonResult<PathBuf> {
        fs::create_dir_all(dir)?;
        let path = dir.join(format!("burst_{:04}.json", index));
        fs::write(&path, self.to_json()?)?;
        log::info!("Wrote burst snapshot to {}", path.display());
        Ok(path)
    }
}

impl From<&BurstLine> for LineSnapshot {
    fn from(line: &BurstLine) -> Self {
        Self {
            direction: line.spec.direction,
            style: line.spec.style,
            lateral_bound: line.spec.lateral_bound,
            points: line.polyline.points().iter().map(|p| [p.x, p.y]).collect(),
        }
    }
}
