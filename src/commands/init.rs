use crate::config::CONFIG_FILE_NAME;
use crate::io;
use anyhow::Result;
use std::path::{Path, PathBuf};

/// Reference weights; category and factor weights must each sum to 1.0
pub const DEFAULT_CONFIG: &str = r#"# Solar Risk Configuration

[scoring.operational]
weight = 0.30

[scoring.operational.factors]
grid_connection = 0.30
om_provider = 0.25
regulatory = 0.25
site_access = 0.20

[scoring.technical]
weight = 0.40

[scoring.technical.factors]
panel_tech = 0.25
inverter_tech = 0.25
system_design = 0.25
installation = 0.25

[scoring.climate]
weight = 0.30

[scoring.climate.factors]
weather_variability = 0.35
extreme_weather = 0.35
resource_stability = 0.30

[output]
default_format = "terminal"
"#;

pub fn init_config(force: bool) -> Result<()> {
    let config_path = PathBuf::from(CONFIG_FILE_NAME);
    init_config_at(&config_path, force)?;
    println!("Created {CONFIG_FILE_NAME} configuration file");
    Ok(())
}

pub fn init_config_at(config_path: &Path, force: bool) -> Result<()> {
    if config_path.exists() && !force {
        anyhow::bail!("Configuration file already exists. Use --force to overwrite.");
    }

    io::write_file(config_path, DEFAULT_CONFIG)?;
    tracing::info!("Wrote reference configuration to {}", config_path.display());
    Ok(())
}
