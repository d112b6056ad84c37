//! Error types for solar risk scoring.
//!
//! Two layers:
//!
//! - [`ValidationError`]: caller-recoverable input and configuration problems.
//!   Raised before any computation starts, so a failed call never produces a
//!   partial result.
//! - [`Error`]: everything the library can report, including file and format
//!   errors from loading configuration or assessment input.
//!
//! # Example
//!
//! ```rust
//! use solar_risk::errors::{Error, ValidationError};
//!
//! let err: Error = ValidationError::missing_factor("climate", "extreme_weather").into();
//! assert!(err.is_validation());
//! assert_eq!(
//!     err.to_string(),
//!     "Validation error: climate ratings are missing factor 'extreme_weather'"
//! );
//! ```

use std::path::PathBuf;
use thiserror::Error;

/// Input or configuration that violates the scoring contract.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// A configured factor has no rating
    #[error("{category} ratings are missing factor '{factor}'")]
    MissingFactor { category: String, factor: String },

    /// A rating was supplied for a factor the category does not define
    #[error("{category} ratings contain unexpected factor '{factor}'")]
    UnexpectedFactor { category: String, factor: String },

    /// A rating outside the inclusive 1-5 scale
    #[error("{category} factor '{factor}' has rating {rating}, expected 1-5")]
    RatingOutOfRange {
        category: String,
        factor: String,
        rating: i64,
    },

    /// A single configured weight outside [0, 1]
    #[error("{scope} weight '{name}' is {weight}, expected 0.0-1.0")]
    WeightOutOfRange {
        scope: String,
        name: String,
        weight: f64,
    },

    /// A weight set that does not sum to 1.0
    #[error("{scope} weights must sum to 1.0, but sum to {sum:.6}")]
    WeightSumMismatch { scope: String, sum: f64 },

    /// A required intake field left blank
    #[error("{step}: '{field}' is required")]
    MissingField { step: String, field: String },

    /// An intake field with an unusable value
    #[error("{step}: '{field}' {message}")]
    FieldOutOfRange {
        step: String,
        field: String,
        message: String,
    },
}

impl ValidationError {
    pub fn missing_factor(category: impl Into<String>, factor: impl Into<String>) -> Self {
        Self::MissingFactor {
            category: category.into(),
            factor: factor.into(),
        }
    }

    pub fn unexpected_factor(category: impl Into<String>, factor: impl Into<String>) -> Self {
        Self::UnexpectedFactor {
            category: category.into(),
            factor: factor.into(),
        }
    }

    pub fn missing_field(step: impl Into<String>, field: impl Into<String>) -> Self {
        Self::MissingField {
            step: step.into(),
            field: field.into(),
        }
    }

    pub fn field_out_of_range(
        step: impl Into<String>,
        field: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::FieldOutOfRange {
            step: step.into(),
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Main error type for solar-risk operations
#[derive(Debug, Error)]
pub enum Error {
    /// Input or configuration validation errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// File system errors with path context
    #[error("File system error: {message} ({})", .path.display())]
    FileSystem {
        message: String,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// IO errors
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON errors
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// TOML parse errors
    #[error(transparent)]
    Toml(#[from] toml::de::Error),
}

impl Error {
    /// Create a file system error with path context
    pub fn file_system(
        message: impl Into<String>,
        path: impl Into<PathBuf>,
        source: std::io::Error,
    ) -> Self {
        Self::FileSystem {
            message: message.into(),
            path: path.into(),
            source,
        }
    }

    /// True for errors the caller can fix by correcting its input.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

/// Result type alias using our error type
pub type Result<T> = std::result::Result<T, Error>;
