//! Configuration for solar-risk.
//!
//! All tunable values are data loaded from `.solar-risk.toml`; the engine
//! receives a validated [`ScoringConfig`] at construction and never reads
//! configuration afterwards.

mod core;
mod loader;
mod scoring;

pub use core::{OutputConfig, SolarRiskConfig};
pub use loader::{
    directory_ancestors, find_config_file, load_config, load_config_from_path,
    parse_and_validate_config, resolve_config, CONFIG_FILE_NAME,
};
pub use scoring::{CategoryConfig, ScoringConfig, WEIGHT_TOLERANCE};
