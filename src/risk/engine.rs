//! Weighted aggregation of factor ratings into category and overall scores.
//!
//! The engine is immutable after construction and holds no per-call state,
//! so a single instance can be shared freely across threads.

use super::{Category, FactorRatings, RiskScores, MAX_RATING, MIN_RATING};
use crate::config::ScoringConfig;
use crate::errors::ValidationError;

#[derive(Debug, Clone, PartialEq)]
pub struct RiskEngine {
    config: ScoringConfig,
}

impl Default for RiskEngine {
    /// Engine with the reference weights
    fn default() -> Self {
        Self {
            config: ScoringConfig::default(),
        }
    }
}

impl RiskEngine {
    /// Build an engine from a weight configuration, rejecting weight sets
    /// that are out of range or do not sum to 1.0.
    pub fn new(config: ScoringConfig) -> Result<Self, ValidationError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    /// Check one category's ratings against its configured factor set.
    ///
    /// Configured factors are checked first (missing, then out of scale),
    /// followed by any factor the category does not define.
    pub fn validate_ratings(
        &self,
        category: Category,
        ratings: &FactorRatings,
    ) -> Result<(), ValidationError> {
        let config = self.config.category(category);

        for factor in config.factor_names() {
            let rating = ratings
                .get(factor)
                .ok_or_else(|| ValidationError::missing_factor(category.as_str(), factor))?;

            if !(MIN_RATING..=MAX_RATING).contains(&rating) {
                return Err(ValidationError::RatingOutOfRange {
                    category: category.as_str().to_string(),
                    factor: factor.to_string(),
                    rating,
                });
            }
        }

        match ratings
            .iter()
            .find(|(factor, _)| !config.factors.contains_key(*factor))
        {
            Some((factor, _)) => Err(ValidationError::unexpected_factor(
                category.as_str(),
                factor,
            )),
            None => Ok(()),
        }
    }

    /// Weighted sub-score of one category.
    pub fn category_score(
        &self,
        category: Category,
        ratings: &FactorRatings,
    ) -> Result<f64, ValidationError> {
        self.validate_ratings(category, ratings)?;
        self.weighted_ratings(category, ratings)
    }

    /// Score all three categories and combine them into the overall score.
    ///
    /// All inputs are validated before any arithmetic happens.
    ///
    /// # Examples
    ///
    /// ```
    /// use solar_risk::risk::{FactorRatings, RiskEngine};
    ///
    /// let engine = RiskEngine::default();
    /// let operational: FactorRatings = [
    ///     ("grid_connection", 5),
    ///     ("om_provider", 5),
    ///     ("regulatory", 5),
    ///     ("site_access", 5),
    /// ]
    /// .into_iter()
    /// .collect();
    /// let technical: FactorRatings = [
    ///     ("panel_tech", 1),
    ///     ("inverter_tech", 1),
    ///     ("system_design", 1),
    ///     ("installation", 1),
    /// ]
    /// .into_iter()
    /// .collect();
    /// let climate: FactorRatings = [
    ///     ("weather_variability", 5),
    ///     ("extreme_weather", 5),
    ///     ("resource_stability", 5),
    /// ]
    /// .into_iter()
    /// .collect();
    ///
    /// let scores = engine.compute_scores(&operational, &technical, &climate).unwrap();
    /// // 5.0 * 0.30 + 1.0 * 0.40 + 5.0 * 0.30
    /// assert!((scores.overall - 3.4).abs() < 1e-9);
    /// ```
    pub fn compute_scores(
        &self,
        operational: &FactorRatings,
        technical: &FactorRatings,
        climate: &FactorRatings,
    ) -> Result<RiskScores, ValidationError> {
        self.validate_ratings(Category::Operational, operational)?;
        self.validate_ratings(Category::Technical, technical)?;
        self.validate_ratings(Category::Climate, climate)?;

        let operational = self.weighted_ratings(Category::Operational, operational)?;
        let technical = self.weighted_ratings(Category::Technical, technical)?;
        let climate = self.weighted_ratings(Category::Climate, climate)?;

        let overall = clamp_to_scale(
            operational * self.config.operational.weight
                + technical * self.config.technical.weight
                + climate * self.config.climate.weight,
        );

        Ok(RiskScores {
            operational,
            technical,
            climate,
            overall,
        })
    }

    // A factor without a rating is an error here too, never a default score
    fn weighted_ratings(
        &self,
        category: Category,
        ratings: &FactorRatings,
    ) -> Result<f64, ValidationError> {
        let sum = self
            .config
            .category(category)
            .factors
            .iter()
            .map(|(factor, weight)| {
                ratings
                    .get(factor)
                    .map(|rating| rating as f64 * weight)
                    .ok_or_else(|| ValidationError::missing_factor(category.as_str(), factor))
            })
            .sum::<Result<f64, ValidationError>>()?;
        Ok(clamp_to_scale(sum))
    }
}

// Weights sum to 1.0 only within tolerance, so a weighted mean of in-scale
// ratings can land a few ulps outside the scale.
fn clamp_to_scale(score: f64) -> f64 {
    score.clamp(MIN_RATING as f64, MAX_RATING as f64)
}
