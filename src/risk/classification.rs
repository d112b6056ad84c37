//! Five-band classification of scores into risk levels and indicators.

use super::SCORE_EPSILON;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Qualitative risk band for a score on the 1-5 scale
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RiskLevel {
    #[serde(rename = "VERY LOW RISK")]
    VeryLowRisk,
    #[serde(rename = "LOW RISK")]
    LowRisk,
    #[serde(rename = "MEDIUM RISK")]
    MediumRisk,
    #[serde(rename = "HIGH RISK")]
    HighRisk,
    #[serde(rename = "VERY HIGH RISK")]
    VeryHighRisk,
}

impl RiskLevel {
    /// Lower bound of each band, best band first. The last band has no
    /// lower bound.
    const LADDER: [(f64, RiskLevel); 4] = [
        (4.5, RiskLevel::VeryLowRisk),
        (3.5, RiskLevel::LowRisk),
        (2.5, RiskLevel::MediumRisk),
        (1.5, RiskLevel::HighRisk),
    ];

    pub fn label(self) -> &'static str {
        match self {
            RiskLevel::VeryLowRisk => "VERY LOW RISK",
            RiskLevel::LowRisk => "LOW RISK",
            RiskLevel::MediumRisk => "MEDIUM RISK",
            RiskLevel::HighRisk => "HIGH RISK",
            RiskLevel::VeryHighRisk => "VERY HIGH RISK",
        }
    }

    pub fn indicator(self) -> Indicator {
        match self {
            RiskLevel::VeryLowRisk => Indicator::Green,
            RiskLevel::LowRisk => Indicator::Yellow,
            RiskLevel::MediumRisk => Indicator::Orange,
            RiskLevel::HighRisk => Indicator::Red,
            RiskLevel::VeryHighRisk => Indicator::Black,
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Traffic-light style marker, one per [`RiskLevel`]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Indicator {
    Green,
    Yellow,
    Orange,
    Red,
    Black,
}

impl Indicator {
    pub fn symbol(self) -> &'static str {
        match self {
            Indicator::Green => "🟢",
            Indicator::Yellow => "🟡",
            Indicator::Orange => "🟠",
            Indicator::Red => "🔴",
            Indicator::Black => "⚫",
        }
    }
}

impl fmt::Display for Indicator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Map a score to its risk level. Each band includes its lower bound.
///
/// ```
/// use solar_risk::risk::{classify_level, RiskLevel};
///
/// assert_eq!(classify_level(4.5), RiskLevel::VeryLowRisk);
/// assert_eq!(classify_level(4.49), RiskLevel::LowRisk);
/// assert_eq!(classify_level(1.0), RiskLevel::VeryHighRisk);
/// ```
pub fn classify_level(score: f64) -> RiskLevel {
    RiskLevel::LADDER
        .iter()
        .find(|(floor, _)| reaches(score, *floor))
        .map(|(_, level)| *level)
        .unwrap_or(RiskLevel::VeryHighRisk)
}

/// Map a score to its indicator; always the indicator of [`classify_level`].
pub fn classify_indicator(score: f64) -> Indicator {
    classify_level(score).indicator()
}

/// `score >= threshold`, tolerating summation noise just below the cut point
pub(crate) fn reaches(score: f64, threshold: f64) -> bool {
    score >= threshold - SCORE_EPSILON
}
