use crate::config::{find_config_file, load_config_from_path, SolarRiskConfig};
use crate::risk::Category;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Locate, load and validate a configuration file, printing a summary of
/// its weights.
pub fn validate_config(path: Option<PathBuf>) -> Result<()> {
    let path = match path {
        Some(path) => path,
        None => {
            let current = std::env::current_dir()?;
            find_config_file(&current).context("No .solar-risk.toml found")?
        }
    };

    let config = check_config(&path)?;
    println!("{} is valid", path.display());
    print!("{}", summarize(&config));
    Ok(())
}

pub fn check_config(path: &Path) -> Result<SolarRiskConfig> {
    load_config_from_path(path).with_context(|| format!("Invalid configuration {}", path.display()))
}

pub fn summarize(config: &SolarRiskConfig) -> String {
    let mut output = String::new();
    for category in Category::ALL {
        let weights = config.scoring.category(category);
        output.push_str(&format!("  {:<12} {:.2}\n", category.label(), weights.weight));
        for (factor, weight) in &weights.factors {
            output.push_str(&format!("    {factor:<20} {weight:.2}\n"));
        }
    }
    output
}
