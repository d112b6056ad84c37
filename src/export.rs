//! JSON export of an assessment.
//!
//! The record shape is fixed for compatibility with previously exported
//! files: user, site_info, risk_scores and risk_levels, with scores rounded
//! to two decimal places.

use crate::assessment::Assessment;
use crate::errors::{Error, Result};
use crate::intake::UserProfile;
use crate::risk::{classify_level, RiskLevel, RiskScores};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportRecord {
    pub user: UserProfile,
    pub site_info: ExportSiteInfo,
    pub risk_scores: RiskScores,
    pub risk_levels: RiskLevels,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportSiteInfo {
    pub site_name: String,
    pub location: String,
    pub capacity_mw: f64,
    pub cod_year: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskLevels {
    pub operational: RiskLevel,
    pub technical: RiskLevel,
    pub climate: RiskLevel,
    pub overall: RiskLevel,
}

impl From<&Assessment> for ExportRecord {
    fn from(assessment: &Assessment) -> Self {
        let scores = assessment.scores;
        Self {
            user: assessment.user.clone(),
            site_info: ExportSiteInfo {
                site_name: assessment.site.site_name.clone(),
                location: assessment.site.location.clone(),
                capacity_mw: assessment.site.capacity_mw,
                cod_year: assessment.site.cod_year,
            },
            risk_scores: RiskScores {
                operational: round2(scores.operational),
                technical: round2(scores.technical),
                climate: round2(scores.climate),
                overall: round2(scores.overall),
            },
            // Levels come from the unrounded scores
            risk_levels: RiskLevels {
                operational: classify_level(scores.operational),
                technical: classify_level(scores.technical),
                climate: classify_level(scores.climate),
                overall: classify_level(scores.overall),
            },
        }
    }
}

impl ExportRecord {
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// `<site name>_risk_assessment.json`, with the site name reduced to a single
/// path component: whitespace and path separators become `_` and leading dots
/// are dropped.
///
/// ```
/// use solar_risk::export::export_file_name;
///
/// assert_eq!(export_file_name("Plant A/B"), "Plant_A_B_risk_assessment.json");
/// assert_eq!(export_file_name("../x"), "_x_risk_assessment.json");
/// ```
pub fn export_file_name(site_name: &str) -> String {
    let stem: String = site_name
        .trim()
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' => '_',
            c if c.is_whitespace() || c.is_control() => '_',
            c => c,
        })
        .collect();
    let stem = stem.trim_start_matches('.');
    let stem = if stem.is_empty() { "site" } else { stem };
    format!("{stem}_risk_assessment.json")
}

/// Write the export record into `dir`, returning the file path
pub fn write_export(assessment: &Assessment, dir: &Path) -> Result<PathBuf> {
    let record = ExportRecord::from(assessment);
    let path = dir.join(export_file_name(&record.site_info.site_name));
    std::fs::write(&path, record.to_json()?)
        .map_err(|e| Error::file_system("Failed to write export", &path, e))?;
    Ok(path)
}
