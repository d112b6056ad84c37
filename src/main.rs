use anyhow::Result;
use solar_risk::cli::{Cli, Commands};
use solar_risk::commands::{self, AssessConfig};
use solar_risk::observability::init_logging;

// Main orchestrator function
fn main() -> Result<()> {
    let cli = solar_risk::cli::parse_args();
    init_logging(cli.verbosity);

    run(cli)
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Assess {
            input,
            config,
            format,
            output,
            export_dir,
            plain,
        } => commands::handle_assess(AssessConfig {
            input,
            config,
            format,
            output,
            export_dir,
            plain,
        }),
        Commands::Init { force } => commands::init_config(force),
        Commands::Factors { category } => commands::list_factors(category.map(Into::into)),
        Commands::ValidateConfig { path } => commands::validate_config(path),
    }
}
