//! Assessment input and the ordered steps that collect it.
//!
//! Collection is a fixed sequence of steps. Each step validates only its own
//! fields, so a front end can gate progress one step at a time while batch
//! callers validate a whole [`AssessmentInput`] with [`validate`]. The input
//! record is owned by the caller; nothing here keeps session state.

use crate::errors::{Error, Result, ValidationError};
use crate::risk::{Category, FactorRatings, RiskEngine};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// Earliest accepted commercial operation year
pub const MIN_COD_YEAR: i32 = 1900;
/// Latest accepted commercial operation year
pub const MAX_COD_YEAR: i32 = 2100;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteInfo {
    pub site_name: String,
    pub location: String,
    #[serde(default)]
    pub capacity_mw: f64,
    #[serde(default = "default_cod_year")]
    pub cod_year: i32,
}

fn default_cod_year() -> i32 {
    2024
}

/// Everything needed to assess one site
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentInput {
    pub user: UserProfile,
    pub site: SiteInfo,
    pub operational: FactorRatings,
    pub technical: FactorRatings,
    pub climate: FactorRatings,
}

impl AssessmentInput {
    pub fn ratings(&self, category: Category) -> &FactorRatings {
        match category {
            Category::Operational => &self.operational,
            Category::Technical => &self.technical,
            Category::Climate => &self.climate,
        }
    }

    /// Parse input text, JSON when `json` is set and TOML otherwise
    pub fn parse(contents: &str, json: bool) -> Result<Self> {
        if json {
            Ok(serde_json::from_str(contents)?)
        } else {
            Ok(toml::from_str(contents)?)
        }
    }

    /// Read an input file; `.json` files are JSON, anything else TOML
    pub fn from_path(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| Error::file_system("Failed to read assessment input", path, e))?;
        let json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        Self::parse(&contents, json)
    }
}

/// One step of assessment collection, in order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum IntakeStep {
    Profile,
    Site,
    Operational,
    Technical,
    Climate,
    Results,
}

impl IntakeStep {
    pub const ALL: [IntakeStep; 6] = [
        IntakeStep::Profile,
        IntakeStep::Site,
        IntakeStep::Operational,
        IntakeStep::Technical,
        IntakeStep::Climate,
        IntakeStep::Results,
    ];

    pub const fn first() -> Self {
        IntakeStep::Profile
    }

    /// 1-based position, for "Step n of 6"
    pub fn number(self) -> usize {
        self as usize + 1
    }

    pub fn total() -> usize {
        Self::ALL.len()
    }

    /// The following step, `None` after results
    pub fn next(self) -> Option<Self> {
        Self::ALL.get(self.number()).copied()
    }

    pub fn title(self) -> &'static str {
        match self {
            IntakeStep::Profile => "User Profile",
            IntakeStep::Site => "Site Information",
            IntakeStep::Operational => "Operational Risk Factors",
            IntakeStep::Technical => "Technical Risk Factors",
            IntakeStep::Climate => "Climate Risk Factors",
            IntakeStep::Results => "Risk Assessment Results",
        }
    }

    /// Rating category collected by this step
    pub fn category(self) -> Option<Category> {
        match self {
            IntakeStep::Operational => Some(Category::Operational),
            IntakeStep::Technical => Some(Category::Technical),
            IntakeStep::Climate => Some(Category::Climate),
            _ => None,
        }
    }

    /// Validate the fields owned by this step only
    pub fn validate(
        self,
        input: &AssessmentInput,
        engine: &RiskEngine,
    ) -> std::result::Result<(), ValidationError> {
        match self {
            IntakeStep::Profile => validate_profile(&input.user),
            IntakeStep::Site => validate_site(&input.site),
            IntakeStep::Results => Ok(()),
            rating_step => rating_step.category().map_or(Ok(()), |category| {
                engine.validate_ratings(category, input.ratings(category))
            }),
        }
    }
}

impl fmt::Display for IntakeStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// Validate every step in order; the first failing step is reported.
pub fn validate(
    input: &AssessmentInput,
    engine: &RiskEngine,
) -> std::result::Result<(), ValidationError> {
    IntakeStep::ALL
        .iter()
        .try_for_each(|step| step.validate(input, engine))
}

/// Steps that still fail validation, in order
pub fn pending_steps(input: &AssessmentInput, engine: &RiskEngine) -> Vec<IntakeStep> {
    IntakeStep::ALL
        .into_iter()
        .filter(|step| step.validate(input, engine).is_err())
        .collect()
}

fn require(step: IntakeStep, field: &str, value: &str) -> std::result::Result<(), ValidationError> {
    if value.trim().is_empty() {
        Err(ValidationError::missing_field(step.title(), field))
    } else {
        Ok(())
    }
}

fn validate_profile(user: &UserProfile) -> std::result::Result<(), ValidationError> {
    require(IntakeStep::Profile, "name", &user.name)?;
    require(IntakeStep::Profile, "email", &user.email)
}

fn validate_site(site: &SiteInfo) -> std::result::Result<(), ValidationError> {
    let step = IntakeStep::Site;
    require(step, "site_name", &site.site_name)?;
    require(step, "location", &site.location)?;

    if !site.capacity_mw.is_finite() || site.capacity_mw < 0.0 {
        return Err(ValidationError::field_out_of_range(
            step.title(),
            "capacity_mw",
            "must be a non-negative number",
        ));
    }
    if !(MIN_COD_YEAR..=MAX_COD_YEAR).contains(&site.cod_year) {
        return Err(ValidationError::field_out_of_range(
            step.title(),
            "cod_year",
            format!("must be between {MIN_COD_YEAR} and {MAX_COD_YEAR}"),
        ));
    }
    Ok(())
}
