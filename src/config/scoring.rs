//! Scoring configuration for solar site risk assessment
//!
//! Weights are plain data so they can be retuned from `.solar-risk.toml`
//! without touching the scoring logic:
//! - one weight per risk category (operational, technical, climate)
//! - one weight per factor inside each category
//!
//! Both levels must sum to 1.0 (within [`WEIGHT_TOLERANCE`]).

use crate::errors::ValidationError;
use crate::risk::Category;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Allowed deviation from 1.0 when summing a weight set
pub const WEIGHT_TOLERANCE: f64 = 1e-9;

/// Weight of one category and of each factor inside it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryConfig {
    /// Share of the overall score (0.0-1.0)
    pub weight: f64,

    /// Factor name to weight within this category (0.0-1.0 each)
    pub factors: BTreeMap<String, f64>,
}

impl CategoryConfig {
    pub fn new<I, K>(weight: f64, factors: I) -> Self
    where
        I: IntoIterator<Item = (K, f64)>,
        K: Into<String>,
    {
        Self {
            weight,
            factors: factors.into_iter().map(|(k, w)| (k.into(), w)).collect(),
        }
    }

    /// Sum of the factor weights
    pub fn factor_weight_sum(&self) -> f64 {
        self.factors.values().sum()
    }

    pub fn factor_names(&self) -> impl Iterator<Item = &str> {
        self.factors.keys().map(String::as_str)
    }
}

/// Complete weight configuration for the scoring engine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringConfig {
    #[serde(default = "default_operational")]
    pub operational: CategoryConfig,

    #[serde(default = "default_technical")]
    pub technical: CategoryConfig,

    #[serde(default = "default_climate")]
    pub climate: CategoryConfig,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            operational: default_operational(),
            technical: default_technical(),
            climate: default_climate(),
        }
    }
}

impl ScoringConfig {
    pub fn category(&self, category: Category) -> &CategoryConfig {
        match category {
            Category::Operational => &self.operational,
            Category::Technical => &self.technical,
            Category::Climate => &self.climate,
        }
    }

    // Pure function: Check if a weight is in valid range
    pub fn is_valid_weight(weight: f64) -> bool {
        (0.0..=1.0).contains(&weight)
    }

    // Pure function: Validate a single weight with its scope and name
    pub fn validate_weight(weight: f64, scope: &str, name: &str) -> Result<(), ValidationError> {
        if Self::is_valid_weight(weight) {
            Ok(())
        } else {
            Err(ValidationError::WeightOutOfRange {
                scope: scope.to_string(),
                name: name.to_string(),
                weight,
            })
        }
    }

    // Pure function: Validate a weight set sums to 1.0
    pub fn validate_sum(sum: f64, scope: &str) -> Result<(), ValidationError> {
        if (sum - 1.0).abs() > WEIGHT_TOLERANCE {
            Err(ValidationError::WeightSumMismatch {
                scope: scope.to_string(),
                sum,
            })
        } else {
            Ok(())
        }
    }

    /// Validate every weight range and both levels of weight sums.
    ///
    /// Checks run category by category in [`Category::ALL`] order and stop
    /// at the first failure.
    pub fn validate(&self) -> Result<(), ValidationError> {
        for category in Category::ALL {
            let config = self.category(category);
            Self::validate_weight(config.weight, "category", category.as_str())?;

            if config.factors.is_empty() {
                return Err(ValidationError::WeightSumMismatch {
                    scope: category.as_str().to_string(),
                    sum: 0.0,
                });
            }
            for (factor, weight) in &config.factors {
                Self::validate_weight(*weight, category.as_str(), factor)?;
            }
            Self::validate_sum(config.factor_weight_sum(), category.as_str())?;
        }

        Self::validate_sum(self.category_weight_sum(), "category")
    }

    /// Sum of the three category weights
    pub fn category_weight_sum(&self) -> f64 {
        Category::ALL
            .iter()
            .map(|c| self.category(*c).weight)
            .sum()
    }
}

fn default_operational() -> CategoryConfig {
    CategoryConfig::new(
        0.30,
        [
            ("grid_connection", 0.30),
            ("om_provider", 0.25),
            ("regulatory", 0.25),
            ("site_access", 0.20),
        ],
    )
}

fn default_technical() -> CategoryConfig {
    CategoryConfig::new(
        0.40,
        [
            ("panel_tech", 0.25),
            ("inverter_tech", 0.25),
            ("system_design", 0.25),
            ("installation", 0.25),
        ],
    )
}

fn default_climate() -> CategoryConfig {
    CategoryConfig::new(
        0.30,
        [
            ("weather_variability", 0.35),
            ("extreme_weather", 0.35),
            ("resource_stability", 0.30),
        ],
    )
}
