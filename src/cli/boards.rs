//! Boards command implementation

use super::OutputFormat;
use crate::board::format::format_currency;
use crate::board::presets;
use crate::config::Config;
use clap::Args;
use std::fmt::Write;

#[derive(Args, Debug)]
pub struct BoardsArgs {
    /// Output format: table or json
    #[arg(long, value_enum, default_value = "table")]
    pub format: OutputFormat,
}

impl BoardsArgs {
    pub fn execute(&self, config: &Config) -> anyhow::Result<()> {
        let catalog = presets::catalog_with(config.board.million_cases)?;
        tracing::debug!(presets = catalog.len(), "Listing board presets");

        match self.format {
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&catalog)?),
            OutputFormat::Table => print!("{}", format_catalog(&catalog)),
        }
        Ok(())
    }
}

fn format_catalog(catalog: &[presets::BoardPreset]) -> String {
    let mut out = String::new();
    for preset in catalog {
        // Writing to a String cannot fail
        let _ = writeln!(
            out,
            "{:<24} {:<40} {:>2} cases  top {}",
            preset.id,
            preset.name,
            preset.case_count(),
            format_currency(preset.top_prize())
        );
    }
    out
}
