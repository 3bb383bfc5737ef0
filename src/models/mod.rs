pub mod geometry;
pub mod line_config;

pub use geometry::{CardFrame, LineSpec, Polyline};
pub use line_config::{Direction, Handedness, LineConfig, PathStyle};
