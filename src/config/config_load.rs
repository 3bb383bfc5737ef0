// src/config/config_load.rs
//
// loading to config.toml

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use super::config_types::{PathConfig, StyleConfig, SummonConfig, WindowConfig};
use crate::errors::{SummonError, SummonResult};
use crate::services::LineCounts;

#[derive(Debug, Deserialize)]
pub struct Config {
    pub paths: PathConfig,
    pub window: WindowConfig,
    pub style: StyleConfig,
    pub summon: SummonConfig,
}

impl Config {
    pub fn load() -> SummonResult<Self> {
        // First try to load from the executable's directory
        if let Some(exe_config) = Self::load_from_exe_dir() {
            return exe_config;
        }

        // Fallback to loading from the current working directory
        Self::load_from_path(Path::new("config.toml"))
    }

    fn load_from_exe_dir() -> Option<SummonResult<Self>> {
        let exe_path = std::env::current_exe().ok()?;
        let exe_dir = exe_path.parent()?;
        let config_path = exe_dir.join("config.toml");

        if config_path.exists() {
            Some(Self::load_from_path(&config_path))
        } else {
            None
        }
    }

    pub fn load_from_path(path: &Path) -> SummonResult<Self> {
        let content = fs::read_to_string(path)?;
        let config = Self::from_toml(&content)?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn from_toml(content: &str) -> SummonResult<Self> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> SummonResult<()> {
        if self.window.width == 0 || self.window.height == 0 {
            return Err(SummonError::Config(String::from(
                "window size must be non-zero",
            )));
        }
        self.summon.card.validate()?;
        self.summon.timing.validate()?;
        self.summon.lines.counts()?;
        Ok(())
    }

    pub fn line_counts(&self) -> SummonResult<LineCounts> {
        self.summon.lines.counts()
    }

    pub fn resolve_output_dir(&self) -> PathBuf {
        if Path::new(&self.paths.output_directory).is_absolute() {
            PathBuf::from(&self.paths.output_directory)
        } else {
            // If path is relative, resolve it relative to the executable or working directory
            std::env::current_exe()
                .ok()
                .and_then(|p| p.parent().map(|p| p.to_path_buf()))
                .map(|exe_dir| exe_dir.join(&self.paths.output_directory))
                .unwrap_or_else(|| PathBuf::from(&self.paths.output_directory))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::EasingType;

    const SAMPLE: &str = r#"
[paths]
output_directory = "bursts"

[window]
width = 600
height = 1000

[style]
line_alpha = 0.6
card_color = [0.8, 0.7, 0.4]
background_color = [0.0, 0.0, 0.0]

[summon]
seed = 17

[summon.card]
width = 150.0
height = 300.0

[summon.lines]
top_count = 7
leading_count = 10
trailing_count = 10
safe_top = 5.0
edge_inset = 5.0

[summon.timing]
delay = 0.1
flip_duration = 0.5
reveal_duration = 0.3
easing = "ease_out"
"#;

    #[test]
    fn test_parse_sample() {
        let config = Config::from_toml(SAMPLE).unwrap();
        assert_eq!(config.window.width, 600);
        assert_eq!(config.summon.seed, Some(17));
        assert_eq!(config.summon.timing.easing, EasingType::EaseOut);
        assert_eq!(config.line_counts().unwrap(), LineCounts::default());
        assert_eq!(config.style.card_color, [0.8, 0.7, 0.4]);
    }

    #[test]
    fn test_negative_count_rejected() {
        let content = SAMPLE.replace("leading_count = 10", "leading_count = -2");
        let result = Config::from_toml(&content);
        assert!(matches!(result, Err(SummonError::InvalidArgument(_))));
    }

    #[test]
    fn test_zero_duration_rejected() {
        let content = SAMPLE.replace("reveal_duration = 0.3", "reveal_duration = 0.0");
        assert!(matches!(
            Config::from_toml(&content),
            Err(SummonError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_missing_section_is_parse_error() {
        let content = SAMPLE.replace("[window]\nwidth = 600\nheight = 1000\n", "");
        assert!(matches!(Config::from_toml(&content), Err(SummonError::Toml(_))));
    }

    #[test]
    fn test_easing_defaults_to_linear() {
        let content = SAMPLE.replace("easing = \"ease_out\"\n", "");
        let config = Config::from_toml(&content).unwrap();
        assert_eq!(config.summon.timing.easing, EasingType::Linear);
    }

    #[test]
    fn test_absolute_output_dir() {
        let content = SAMPLE.replace("\"bursts\"", "\"/tmp/bursts\"");
        let config = Config::from_toml(&content).unwrap();
        assert_eq!(config.resolve_output_dir(), PathBuf::from("/tmp/bursts"));
    }
}
