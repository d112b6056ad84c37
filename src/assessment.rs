//! Scoring a complete site assessment.

use crate::errors::ValidationError;
use crate::intake::{self, AssessmentInput, SiteInfo, UserProfile};
use crate::risk::{
    advisories, classify_level, interpret, recommend, Advisory, Indicator, Interpretation,
    RiskEngine, RiskLevel, RiskScores,
};
use serde::Serialize;

/// Score, level and indicator for one row of the results table
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreRow {
    pub name: &'static str,
    pub label: &'static str,
    pub score: f64,
    pub level: RiskLevel,
    pub indicator: Indicator,
}

impl ScoreRow {
    fn new(name: &'static str, label: &'static str, score: f64) -> Self {
        let level = classify_level(score);
        Self {
            name,
            label,
            score,
            level,
            indicator: level.indicator(),
        }
    }
}

/// Scored assessment with its interpretation and recommendations
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Assessment {
    pub user: UserProfile,
    pub site: SiteInfo,
    pub scores: RiskScores,
    pub interpretation: Interpretation,
    pub advisories: Vec<Advisory>,
    pub recommendations: String,
}

impl Assessment {
    /// Category rows followed by the overall row
    pub fn rows(&self) -> Vec<ScoreRow> {
        self.scores
            .by_category()
            .map(|(category, score)| ScoreRow::new(category.as_str(), category.label(), score))
            .chain(std::iter::once(ScoreRow::new(
                "overall",
                "Overall",
                self.scores.overall,
            )))
            .collect()
    }

    pub fn overall_level(&self) -> RiskLevel {
        classify_level(self.scores.overall)
    }
}

/// Validate every intake step, then score the ratings.
pub fn assess(engine: &RiskEngine, input: &AssessmentInput) -> Result<Assessment, ValidationError> {
    intake::validate(input, engine)?;
    let scores = engine.compute_scores(&input.operational, &input.technical, &input.climate)?;

    Ok(Assessment {
        user: input.user.clone(),
        site: input.site.clone(),
        scores,
        interpretation: interpret(scores.overall),
        advisories: advisories(&scores),
        recommendations: recommend(&scores),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::risk::{Category, FactorRatings};

    fn input_with(rating: i64) -> AssessmentInput {
        let engine = RiskEngine::default();
        let uniform = |category: Category| -> FactorRatings {
            engine
                .config()
                .category(category)
                .factor_names()
                .map(|f| (f, rating))
                .collect()
        };
        AssessmentInput {
            user: UserProfile {
                name: "Lee".into(),
                email: "lee@example.com".into(),
            },
            site: SiteInfo {
                site_name: "North Field".into(),
                location: "Fresno, CA".into(),
                capacity_mw: 4.0,
                cod_year: 2025,
            },
            operational: uniform(Category::Operational),
            technical: uniform(Category::Technical),
            climate: uniform(Category::Climate),
        }
    }

    #[test]
    fn rows_end_with_overall() {
        let assessment = assess(&RiskEngine::default(), &input_with(5)).unwrap();
        let rows = assessment.rows();
        assert_eq!(rows.len(), 4);
        assert_eq!(rows[3].name, "overall");
        assert!(rows
            .iter()
            .all(|r| r.level == RiskLevel::VeryLowRisk && r.indicator == Indicator::Green));
        assert_eq!(assessment.interpretation, Interpretation::Excellent);
    }

    #[test]
    fn low_ratings_get_every_advisory() {
        let assessment = assess(&RiskEngine::default(), &input_with(1)).unwrap();
        assert_eq!(assessment.advisories.len(), 3);
        assert_eq!(assessment.overall_level(), RiskLevel::VeryHighRisk);
        assert_eq!(assessment.interpretation, Interpretation::HighRisk);
    }

    #[test]
    fn incomplete_profile_is_rejected_before_scoring() {
        let mut input = input_with(3);
        input.user.name.clear();
        assert!(matches!(
            assess(&RiskEngine::default(), &input),
            Err(ValidationError::MissingField { .. })
        ));
    }
}
