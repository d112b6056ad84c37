//! CLI command implementations for solar-risk.
//!
//! Available commands:
//! - **assess**: Score a site assessment and optionally export it
//! - **init**: Write a configuration file with the reference weights
//! - **factors**: Print the rating rubric for each factor
//! - **validate-config**: Load and check a configuration file

pub mod assess;
pub mod factors;
pub mod init;
pub mod validate_config;

pub use assess::{handle_assess, AssessConfig};
pub use factors::list_factors;
pub use init::init_config;
pub use validate_config::validate_config;
