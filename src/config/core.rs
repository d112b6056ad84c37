use serde::{Deserialize, Serialize};

use super::scoring::ScoringConfig;
use crate::io::output::OutputFormat;

/// Root configuration structure for solar-risk
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct SolarRiskConfig {
    /// Category and factor weights
    #[serde(default)]
    pub scoring: ScoringConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,
}

impl SolarRiskConfig {
    /// Output format to use when the command line does not pick one
    ///
    /// # Examples
    ///
    /// ```
    /// use solar_risk::config::SolarRiskConfig;
    /// use solar_risk::io::output::OutputFormat;
    ///
    /// let config = SolarRiskConfig::default();
    /// assert_eq!(config.default_format(), OutputFormat::Terminal);
    /// ```
    pub fn default_format(&self) -> OutputFormat {
        self.output.default_format.unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct OutputConfig {
    #[serde(default)]
    pub default_format: Option<OutputFormat>,
    /// Enable colored output (default: auto-detect based on TTY)
    #[serde(default)]
    pub use_color: Option<bool>,
}
