//! CLI interface for deal-calc
//!
//! Provides subcommands for:
//! - `calculate`: Evaluate a board for the next round
//! - `boards`: List the preset boards
//! - `config`: Show the effective configuration

mod boards;
mod calculate;

pub use boards::BoardsArgs;
pub use calculate::{CalculateArgs, CalculationReport};

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "deal-calc")]
#[command(about = "Fair offer, volatility and next-round projections for Deal or No Deal")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to configuration file
    #[arg(short, long, default_value = "config.toml")]
    pub config: String,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Evaluate the unopened cases for the next round
    Calculate(CalculateArgs),
    /// List the preset boards
    Boards(BoardsArgs),
    /// Show the effective configuration
    Config,
}

/// Output format for command results
#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable table
    #[default]
    Table,
    /// JSON document
    Json,
}
