use std::fs;
use std::path::{Path, PathBuf};

use super::core::SolarRiskConfig;
use crate::errors::{Error, Result};

/// Name of the configuration file searched for in the working directory
/// and its ancestors
pub const CONFIG_FILE_NAME: &str = ".solar-risk.toml";

const MAX_TRAVERSAL_DEPTH: usize = 10;

/// Pure function to read config file contents
pub(crate) fn read_config_file(path: &Path) -> Result<String> {
    fs::read_to_string(path)
        .map_err(|e| Error::file_system("Failed to read config file", path, e))
}

/// Pure function to parse and validate config from TOML string
///
/// Invalid weights are an error. They are never replaced by defaults,
/// since scores computed with silently substituted weights would be wrong.
pub fn parse_and_validate_config(contents: &str) -> Result<SolarRiskConfig> {
    let config = toml::from_str::<SolarRiskConfig>(contents)?;
    config.scoring.validate()?;
    Ok(config)
}

/// Load and validate the configuration at an explicit path
pub fn load_config_from_path(config_path: &Path) -> Result<SolarRiskConfig> {
    let contents = read_config_file(config_path)?;
    let config = parse_and_validate_config(&contents)?;
    tracing::debug!("Loaded config from {}", config_path.display());
    Ok(config)
}

/// Pure function to generate directory ancestors up to a depth limit
pub fn directory_ancestors(start: PathBuf, max_depth: usize) -> impl Iterator<Item = PathBuf> {
    std::iter::successors(Some(start), |dir| {
        let mut parent = dir.clone();
        if parent.pop() {
            Some(parent)
        } else {
            None
        }
    })
    .take(max_depth)
}

/// Find the nearest config file starting at `start` and walking upwards
pub fn find_config_file(start: &Path) -> Option<PathBuf> {
    directory_ancestors(start.to_path_buf(), MAX_TRAVERSAL_DEPTH)
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .find(|path| path.is_file())
}

/// Resolve the configuration for a run.
///
/// An explicit path wins. Otherwise the nearest `.solar-risk.toml` above
/// `start` is used, and the reference weights apply when none exists.
pub fn resolve_config(explicit: Option<&Path>, start: &Path) -> Result<SolarRiskConfig> {
    if let Some(path) = explicit {
        return load_config_from_path(path);
    }

    match find_config_file(start) {
        Some(path) => load_config_from_path(&path),
        None => {
            tracing::debug!(
                "No config found after checking {} directories. Using default config.",
                MAX_TRAVERSAL_DEPTH
            );
            Ok(SolarRiskConfig::default())
        }
    }
}

/// Resolve the configuration relative to the current working directory
pub fn load_config(explicit: Option<&Path>) -> Result<SolarRiskConfig> {
    let current = std::env::current_dir()?;
    resolve_config(explicit, &current)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ValidationError;
    use indoc::indoc;

    #[test]
    fn empty_file_yields_reference_weights() {
        let config = parse_and_validate_config("").unwrap();
        assert_eq!(config, SolarRiskConfig::default());
    }

    #[test]
    fn partial_override_keeps_other_categories() {
        let config = parse_and_validate_config(indoc! {r#"
            [scoring.climate]
            weight = 0.30

            [scoring.climate.factors]
            weather_variability = 0.50
            extreme_weather = 0.50
        "#})
        .unwrap();

        assert_eq!(config.scoring.climate.factors.len(), 2);
        assert_eq!(config.scoring.operational.factors.len(), 4);
    }

    #[test]
    fn bad_weight_sum_is_validation_error() {
        let err = parse_and_validate_config(indoc! {r#"
            [scoring.technical]
            weight = 0.40

            [scoring.technical.factors]
            panel_tech = 0.5
            installation = 0.6
        "#})
        .unwrap_err();

        assert!(matches!(
            err,
            Error::Validation(ValidationError::WeightSumMismatch { .. })
        ));
    }

    #[test]
    fn malformed_toml_is_parse_error() {
        let err = parse_and_validate_config("[scoring.climate\nweight = ").unwrap_err();
        assert!(matches!(err, Error::Toml(_)));
    }

    #[test]
    fn ancestors_respect_depth_limit() {
        let dirs: Vec<_> = directory_ancestors(PathBuf::from("/a/b/c/d"), 2).collect();
        assert_eq!(dirs, vec![PathBuf::from("/a/b/c/d"), PathBuf::from("/a/b/c")]);
    }
}
