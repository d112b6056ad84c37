use crate::io::output::OutputFormat;
use crate::risk::Category;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CategoryArg {
    Operational,
    Technical,
    Climate,
}

impl From<CategoryArg> for Category {
    fn from(arg: CategoryArg) -> Self {
        match arg {
            CategoryArg::Operational => Category::Operational,
            CategoryArg::Technical => Category::Technical,
            CategoryArg::Climate => Category::Climate,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "solar-risk")]
#[command(about = "Multi-factor risk scoring for solar energy sites", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Increase log verbosity (can be repeated: -v, -vv, -vvv)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbosity: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Score a site assessment
    Assess {
        /// Assessment input file (TOML, or JSON with a .json extension)
        input: PathBuf,

        /// Configuration file (defaults to the nearest .solar-risk.toml)
        #[arg(short, long, env = "SOLAR_RISK_CONFIG")]
        config: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Directory to write the JSON export record into
        #[arg(long = "export")]
        export_dir: Option<PathBuf>,

        /// Disable colored output
        #[arg(long)]
        plain: bool,
    },

    /// Write a .solar-risk.toml with the reference weights
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,
    },

    /// Describe the rating scale of every factor
    Factors {
        /// Only list factors of this category
        #[arg(long, value_enum)]
        category: Option<CategoryArg>,
    },

    /// Check that a configuration file loads and its weights are valid
    ValidateConfig {
        /// Configuration file (defaults to the nearest .solar-risk.toml)
        path: Option<PathBuf>,
    },
}

/// Parse CLI arguments using Clap
pub fn parse_args() -> Cli {
    Cli::parse()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_assess_with_format() {
        let cli = Cli::try_parse_from([
            "solar-risk",
            "-vv",
            "assess",
            "site.toml",
            "--format",
            "json",
            "--export",
            "out",
        ])
        .unwrap();

        assert_eq!(cli.verbosity, 2);
        match cli.command {
            Commands::Assess {
                input,
                format,
                export_dir,
                ..
            } => {
                assert_eq!(input, PathBuf::from("site.toml"));
                assert_eq!(format, Some(OutputFormat::Json));
                assert_eq!(export_dir, Some(PathBuf::from("out")));
            }
            other => panic!("unexpected command {other:?}"),
        }
    }
}
