pub mod classification;
pub mod engine;
pub mod insights;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

pub use classification::{classify_indicator, classify_level, Indicator, RiskLevel};
pub use engine::RiskEngine;
pub use insights::{advisories, interpret, recommend, Advisory, Interpretation};

/// Lowest rating on the factor scale (worst)
pub const MIN_RATING: i64 = 1;
/// Highest rating on the factor scale (best)
pub const MAX_RATING: i64 = 5;

/// Scores closer than this to a cut point count as reaching it
pub const SCORE_EPSILON: f64 = 1e-9;

/// Risk category a factor belongs to
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Operational,
    Technical,
    Climate,
}

impl Category {
    /// Every category, in reporting order
    pub const ALL: [Category; 3] = [Category::Operational, Category::Technical, Category::Climate];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Operational => "operational",
            Category::Technical => "technical",
            Category::Climate => "climate",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Category::Operational => "Operational",
            Category::Technical => "Technical",
            Category::Climate => "Climate",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ratings for one category, keyed by factor name.
///
/// Values are kept as plain integers so that out-of-scale input (0, 6, -1)
/// reaches validation instead of failing deserialization.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FactorRatings(BTreeMap<String, i64>);

impl FactorRatings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert
    pub fn with(mut self, factor: impl Into<String>, rating: i64) -> Self {
        self.insert(factor, rating);
        self
    }

    pub fn insert(&mut self, factor: impl Into<String>, rating: i64) -> Option<i64> {
        self.0.insert(factor.into(), rating)
    }

    pub fn get(&self, factor: &str) -> Option<i64> {
        self.0.get(factor).copied()
    }

    pub fn contains(&self, factor: &str) -> bool {
        self.0.contains_key(factor)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, i64)> {
        self.0.iter().map(|(k, v)| (k.as_str(), *v))
    }
}

impl<K: Into<String>> FromIterator<(K, i64)> for FactorRatings {
    fn from_iter<T: IntoIterator<Item = (K, i64)>>(iter: T) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

/// Result of one scoring computation.
///
/// Every field lies in [1, 5]: higher means lower risk.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct RiskScores {
    pub operational: f64,
    pub technical: f64,
    pub climate: f64,
    pub overall: f64,
}

impl RiskScores {
    /// Sub-score of one category
    pub fn category(&self, category: Category) -> f64 {
        match category {
            Category::Operational => self.operational,
            Category::Technical => self.technical,
            Category::Climate => self.climate,
        }
    }

    /// Category sub-scores in reporting order
    pub fn by_category(&self) -> impl Iterator<Item = (Category, f64)> + '_ {
        Category::ALL.into_iter().map(|c| (c, self.category(c)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ratings_deserialize_from_plain_map() {
        let ratings: FactorRatings =
            serde_json::from_str(r#"{"panel_tech": 4, "installation": 6}"#).unwrap();
        assert_eq!(ratings.get("panel_tech"), Some(4));
        assert_eq!(ratings.get("installation"), Some(6));
        assert_eq!(ratings.len(), 2);
    }

    #[test]
    fn category_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&Category::Climate).unwrap(),
            "\"climate\""
        );
    }

    #[test]
    fn scores_iterate_in_category_order() {
        let scores = RiskScores {
            operational: 1.0,
            technical: 2.0,
            climate: 3.0,
            overall: 2.1,
        };
        let order: Vec<_> = scores.by_category().collect();
        assert_eq!(
            order,
            vec![
                (Category::Operational, 1.0),
                (Category::Technical, 2.0),
                (Category::Climate, 3.0)
            ]
        );
    }
}
