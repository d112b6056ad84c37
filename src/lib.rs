// Export modules for library usage
pub mod assessment;
pub mod cli;
pub mod commands;
pub mod config;
pub mod errors;
pub mod export;
pub mod factors;
pub mod intake;
pub mod io;
pub mod observability;
pub mod risk;

// Re-export commonly used types
pub use crate::assessment::{assess, Assessment, ScoreRow};

pub use crate::config::{ScoringConfig, SolarRiskConfig};

pub use crate::errors::{Error, Result, ValidationError};

pub use crate::export::ExportRecord;

pub use crate::intake::{AssessmentInput, IntakeStep, SiteInfo, UserProfile};

pub use crate::risk::{
    advisories, classify_indicator, classify_level, interpret, recommend, Advisory, Category,
    FactorRatings, Indicator, Interpretation, RiskEngine, RiskLevel, RiskScores,
};
