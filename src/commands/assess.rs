use crate::assessment::assess;
use crate::config::load_config;
use crate::export::write_export;
use crate::intake::AssessmentInput;
use crate::io::{create_writer, ensure_dir, OutputFormat};
use crate::risk::RiskEngine;
use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct AssessConfig {
    pub input: PathBuf,
    pub config: Option<PathBuf>,
    pub format: Option<OutputFormat>,
    pub output: Option<PathBuf>,
    pub export_dir: Option<PathBuf>,
    pub plain: bool,
}

pub fn handle_assess(config: AssessConfig) -> Result<()> {
    let settings = load_config(config.config.as_deref()).context("Failed to load configuration")?;
    let engine = RiskEngine::new(settings.scoring.clone()).context("Invalid scoring weights")?;

    let input = AssessmentInput::from_path(&config.input)
        .with_context(|| format!("Failed to load {}", config.input.display()))?;

    let assessment = assess(&engine, &input)
        .with_context(|| format!("Invalid assessment input in {}", config.input.display()))?;
    tracing::info!(
        site = %assessment.site.site_name,
        overall = assessment.scores.overall,
        "Scored assessment"
    );

    let use_color =
        !config.plain && config.output.is_none() && settings.output.use_color != Some(false);
    if !use_color {
        colored::control::set_override(false);
    }

    let format = config.format.unwrap_or_else(|| settings.default_format());
    let sink: Box<dyn Write> = match &config.output {
        Some(path) => Box::new(BufWriter::new(
            File::create(path).with_context(|| format!("Failed to create {}", path.display()))?,
        )),
        None => Box::new(std::io::stdout().lock()),
    };
    let mut writer = create_writer(format, sink);
    writer.write_assessment(&assessment)?;
    drop(writer);

    if let Some(dir) = &config.export_dir {
        ensure_dir(dir)?;
        let path = write_export(&assessment, dir)?;
        tracing::info!("Exported assessment to {}", path.display());
        eprintln!("Exported assessment to {}", path.display());
    }

    Ok(())
}
