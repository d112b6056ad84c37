use crate::assessment::{Assessment, ScoreRow};
use clap::ValueEnum;
use colored::*;
use serde::{Deserialize, Serialize};
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Json,
    Markdown,
    #[default]
    Terminal,
}

pub trait OutputWriter {
    fn write_assessment(&mut self, assessment: &Assessment) -> anyhow::Result<()>;
}

#[derive(Serialize)]
struct JsonReport<'a> {
    #[serde(flatten)]
    assessment: &'a Assessment,
    interpretation_text: &'static str,
    rows: Vec<ScoreRow>,
}

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for JsonWriter<W> {
    fn write_assessment(&mut self, assessment: &Assessment) -> anyhow::Result<()> {
        let report = JsonReport {
            assessment,
            interpretation_text: assessment.interpretation.text(),
            rows: assessment.rows(),
        };
        let json = serde_json::to_string_pretty(&report)?;
        self.writer.write_all(json.as_bytes())?;
        writeln!(self.writer)?;
        Ok(())
    }
}

pub struct MarkdownWriter<W: Write> {
    writer: W,
}

impl<W: Write> MarkdownWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for MarkdownWriter<W> {
    fn write_assessment(&mut self, assessment: &Assessment) -> anyhow::Result<()> {
        self.write_header(assessment)?;
        self.write_site_info(assessment)?;
        self.write_scores(assessment)?;
        self.write_interpretation(assessment)?;
        self.write_recommendations(assessment)?;
        Ok(())
    }
}

impl<W: Write> MarkdownWriter<W> {
    fn write_header(&mut self, assessment: &Assessment) -> anyhow::Result<()> {
        writeln!(
            self.writer,
            "# Solar Risk Assessment: {}",
            assessment.site.site_name
        )?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_site_info(&mut self, assessment: &Assessment) -> anyhow::Result<()> {
        let site = &assessment.site;
        writeln!(self.writer, "## User & Site Info")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "- **Name:** {}", assessment.user.name)?;
        writeln!(self.writer, "- **Email:** {}", assessment.user.email)?;
        writeln!(self.writer, "- **Site Name:** {}", site.site_name)?;
        writeln!(self.writer, "- **Location:** {}", site.location)?;
        writeln!(self.writer, "- **Capacity (MW):** {:.2}", site.capacity_mw)?;
        writeln!(self.writer, "- **COD Year:** {}", site.cod_year)?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_scores(&mut self, assessment: &Assessment) -> anyhow::Result<()> {
        writeln!(self.writer, "## Risk Scores")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Category | Score | Level | Indicator |")?;
        writeln!(self.writer, "|----------|-------|-------|-----------|")?;
        for row in assessment.rows() {
            writeln!(
                self.writer,
                "| {} | {:.2} | {} | {} |",
                row.label, row.score, row.level, row.indicator
            )?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_interpretation(&mut self, assessment: &Assessment) -> anyhow::Result<()> {
        writeln!(self.writer, "## Interpretation")?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "{} {}",
            assessment.interpretation.icon(),
            assessment.interpretation
        )?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_recommendations(&mut self, assessment: &Assessment) -> anyhow::Result<()> {
        writeln!(self.writer, "## Recommendations")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "{}", assessment.recommendations)?;
        Ok(())
    }
}

pub struct TerminalWriter<W: Write> {
    writer: W,
}

impl<W: Write> TerminalWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for TerminalWriter<W> {
    fn write_assessment(&mut self, assessment: &Assessment) -> anyhow::Result<()> {
        self.print_header()?;
        self.print_site_info(assessment)?;
        self.print_scores(assessment)?;
        self.print_interpretation(assessment)?;
        self.print_recommendations(assessment)?;
        Ok(())
    }
}

impl<W: Write> TerminalWriter<W> {
    fn print_header(&mut self) -> anyhow::Result<()> {
        writeln!(self.writer, "{}", "Solar Risk Assessment".bold().blue())?;
        writeln!(self.writer, "{}", "=====================".blue())?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn print_site_info(&mut self, assessment: &Assessment) -> anyhow::Result<()> {
        let site = &assessment.site;
        writeln!(self.writer, "{} User & Site Info:", "📝".bold())?;
        writeln!(self.writer, "  Name: {}", assessment.user.name)?;
        writeln!(self.writer, "  Email: {}", assessment.user.email)?;
        writeln!(self.writer, "  Site Name: {}", site.site_name)?;
        writeln!(self.writer, "  Location: {}", site.location)?;
        writeln!(self.writer, "  Capacity (MW): {:.2}", site.capacity_mw)?;
        writeln!(self.writer, "  COD Year: {}", site.cod_year)?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn print_scores(&mut self, assessment: &Assessment) -> anyhow::Result<()> {
        writeln!(self.writer, "{} Risk Scores:", "📈".bold())?;
        writeln!(
            self.writer,
            "  {:<12} {:>5}  {:<15} Indicator",
            "Category", "Score", "Level"
        )?;
        for row in assessment.rows() {
            let label = if row.name == "overall" {
                format!("{:<12}", row.label).bold()
            } else {
                format!("{:<12}", row.label).normal()
            };
            writeln!(
                self.writer,
                "  {} {:>5.2}  {}  {}",
                label,
                row.score,
                level_colored(&row),
                row.indicator
            )?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn print_interpretation(&mut self, assessment: &Assessment) -> anyhow::Result<()> {
        writeln!(self.writer, "{} Interpretation:", "🔍".bold())?;
        writeln!(
            self.writer,
            "  {} {}",
            assessment.interpretation.icon(),
            assessment.interpretation
        )?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn print_recommendations(&mut self, assessment: &Assessment) -> anyhow::Result<()> {
        writeln!(self.writer, "{} Recommendations:", "🛠️".bold())?;
        if assessment.advisories.is_empty() {
            writeln!(self.writer, "  {}", assessment.recommendations.green())?;
        } else {
            for advisory in &assessment.advisories {
                writeln!(self.writer, "  {} {}", advisory.icon(), advisory.text().yellow())?;
            }
        }
        Ok(())
    }
}

fn level_colored(row: &ScoreRow) -> ColoredString {
    use crate::risk::RiskLevel;

    let text = format!("{:<15}", row.level.label());
    match row.level {
        RiskLevel::VeryLowRisk => text.green(),
        RiskLevel::LowRisk => text.bright_green(),
        RiskLevel::MediumRisk => text.yellow(),
        RiskLevel::HighRisk => text.red(),
        RiskLevel::VeryHighRisk => text.red().bold(),
    }
}

pub fn create_writer<'a>(
    format: OutputFormat,
    writer: Box<dyn Write + 'a>,
) -> Box<dyn OutputWriter + 'a> {
    match format {
        OutputFormat::Json => Box::new(JsonWriter::new(writer)),
        OutputFormat::Markdown => Box::new(MarkdownWriter::new(writer)),
        OutputFormat::Terminal => Box::new(TerminalWriter::new(writer)),
    }
}
