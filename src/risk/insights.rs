use super::classification::reaches;
use super::{Category, RiskScores};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Sub-scores below this get a category advisory
pub const ADVISORY_THRESHOLD: f64 = 3.0;

/// Text emitted when no category needs an advisory
pub const NO_RECOMMENDATIONS: &str =
    "No specific recommendations. All sub-scores are at or above 3.0.";

/// Four-band reading of the overall score.
///
/// The cut points (4, 3, 2) differ from the five-band [`super::RiskLevel`]
/// ladder.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Interpretation {
    Excellent,
    Good,
    Moderate,
    HighRisk,
}

impl Interpretation {
    pub fn text(self) -> &'static str {
        match self {
            Interpretation::Excellent => "Excellent risk profile. Very attractive investment.",
            Interpretation::Good => "Good risk profile. Solid investment opportunity.",
            Interpretation::Moderate => "Moderate risk. Consider risk mitigation strategies.",
            Interpretation::HighRisk => "High risk profile. Significant concerns identified.",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Interpretation::Excellent | Interpretation::Good => "✅",
            Interpretation::Moderate => "⚠️",
            Interpretation::HighRisk => "❌",
        }
    }
}

impl fmt::Display for Interpretation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text())
    }
}

/// Interpret the overall score.
pub fn interpret(overall: f64) -> Interpretation {
    if reaches(overall, 4.0) {
        Interpretation::Excellent
    } else if reaches(overall, 3.0) {
        Interpretation::Good
    } else if reaches(overall, 2.0) {
        Interpretation::Moderate
    } else {
        Interpretation::HighRisk
    }
}

/// Remediation advice for one weak category
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Advisory {
    pub category: Category,
}

impl Advisory {
    pub fn text(self) -> &'static str {
        match self.category {
            Category::Operational => {
                "Operational: Consider upgrading O&M provider or improving grid connection."
            }
            Category::Technical => {
                "Technical: Review equipment selection and contractor experience."
            }
            Category::Climate => {
                "Climate: Evaluate insurance options and weather risk mitigation."
            }
        }
    }

    pub fn icon(self) -> &'static str {
        match self.category {
            Category::Operational => "🔧",
            Category::Technical => "⚙️",
            Category::Climate => "🌦️",
        }
    }
}

/// Advisories for every category scoring below [`ADVISORY_THRESHOLD`],
/// in category order.
pub fn advisories(scores: &RiskScores) -> Vec<Advisory> {
    scores
        .by_category()
        .filter(|(_, score)| !reaches(*score, ADVISORY_THRESHOLD))
        .map(|(category, _)| Advisory { category })
        .collect()
}

/// Recommendation text: one paragraph per advisory, or the fixed
/// no-recommendation sentence.
pub fn recommend(scores: &RiskScores) -> String {
    let advisories = advisories(scores);
    if advisories.is_empty() {
        return NO_RECOMMENDATIONS.to_string();
    }

    advisories
        .iter()
        .map(|a| a.text())
        .collect::<Vec<_>>()
        .join("\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn scores(operational: f64, technical: f64, climate: f64) -> RiskScores {
        RiskScores {
            operational,
            technical,
            climate,
            overall: operational * 0.3 + technical * 0.4 + climate * 0.3,
        }
    }

    #[test]
    fn interpretation_bands() {
        assert_eq!(interpret(4.0), Interpretation::Excellent);
        assert_eq!(interpret(3.99), Interpretation::Good);
        assert_eq!(interpret(3.0), Interpretation::Good);
        assert_eq!(interpret(2.0), Interpretation::Moderate);
        assert_eq!(interpret(1.99), Interpretation::HighRisk);
    }

    #[test]
    fn interpretation_differs_from_level_ladder_at_four() {
        // 4.2 is only LOW RISK on the five-band ladder but already excellent here
        assert_eq!(super::super::classify_level(4.2), super::super::RiskLevel::LowRisk);
        assert_eq!(interpret(4.2), Interpretation::Excellent);
    }

    #[test]
    fn no_weak_categories_yields_fixed_sentence() {
        assert_eq!(recommend(&scores(3.0, 4.0, 5.0)), NO_RECOMMENDATIONS);
    }

    #[test]
    fn exactly_three_is_not_weak() {
        assert!(advisories(&scores(3.0, 3.0, 2.9999999999999996)).is_empty());
    }

    #[test]
    fn advisories_follow_category_order() {
        let text = recommend(&scores(2.0, 4.0, 1.0));
        assert_eq!(
            text,
            "Operational: Consider upgrading O&M provider or improving grid connection.\n\n\
             Climate: Evaluate insurance options and weather risk mitigation."
        );
    }

    #[test]
    fn single_technical_advisory() {
        let advice = advisories(&scores(5.0, 1.0, 5.0));
        assert_eq!(
            advice,
            vec![Advisory {
                category: Category::Technical
            }]
        );
    }
}
