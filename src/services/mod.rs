pub mod burst_layout;
pub mod config_factory;
pub mod path_service;
pub mod snapshot;

pub use burst_layout::{BurstLayout, BurstLine, LineCounts, SummonBurst};
pub use config_factory::{random_configs, random_configs_checked};
pub use path_service::{generate_polyline, generate_polylines};
pub use snapshot::BurstSnapshot;
