use clap::Parser;
use deal_calc::cli::{Cli, Commands};
use deal_calc::config::Config;
use std::path::Path;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load configuration, falling back to defaults when no file exists
    let config_found = Path::new(&cli.config).exists();
    let config = if config_found {
        Config::load(&cli.config)
            .map_err(|e| anyhow::anyhow!("Invalid config {}: {}", cli.config, e))?
    } else {
        Config::default()
    };

    // Initialize telemetry
    deal_calc::telemetry::init_telemetry(&config.telemetry)?;
    if !config_found {
        tracing::debug!(path = %cli.config, "No config file, using defaults");
    }

    match cli.command {
        Commands::Calculate(args) => {
            tracing::debug!("Running calculation");
            args.execute(&config)?;
        }
        Commands::Boards(args) => {
            args.execute(&config)?;
        }
        Commands::Config => {
            println!("Current configuration:");
            println!(
                "  Engine: default_reveal={}, warn_combinations={}",
                config.engine.default_reveal_count, config.engine.warn_combinations
            );
            println!(
                "  Board: preset={}, million_cases={}",
                config.board.preset, config.board.million_cases
            );
            println!(
                "  Telemetry: level={}, format={:?}",
                config.telemetry.log_level, config.telemetry.log_format
            );
        }
    }

    Ok(())
}
