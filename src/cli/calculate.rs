//! Calculate command implementation

use super::OutputFormat;
use crate::board::format::{format_offer, format_percentage};
use crate::board::{parse_amount, presets, Board};
use crate::config::Config;
use crate::stats::{OfferCalculator, OfferResult, StatisticsEngine};
use clap::Args;
use rust_decimal::Decimal;
use serde::Serialize;

#[derive(Args, Debug)]
pub struct CalculateArgs {
    /// Preset board id (see `deal-calc boards`)
    #[arg(long, conflicts_with = "amounts")]
    pub preset: Option<String>,

    /// Number of $1,000,000 cases for the Million Dollar Mission board
    #[arg(long)]
    pub million_cases: Option<usize>,

    /// Custom case amounts instead of a preset
    #[arg(long, num_args = 1..)]
    pub amounts: Vec<String>,

    /// Board positions already opened, left column first (e.g. 0,5,25)
    #[arg(long, value_delimiter = ',')]
    pub opened: Vec<usize>,

    /// Cases to open next round
    #[arg(short, long)]
    pub reveal: Option<usize>,

    /// Output format: table or json
    #[arg(long, value_enum, default_value = "table")]
    pub format: OutputFormat,
}

/// Evaluation of one board, ready for display
#[derive(Debug, Clone, Serialize)]
pub struct CalculationReport {
    /// Board name
    pub board: String,
    /// Unopened amounts that were evaluated
    pub remaining: Vec<f64>,
    /// Engine output
    #[serde(flatten)]
    pub result: OfferResult,
}

impl CalculateArgs {
    pub fn execute(&self, config: &Config) -> anyhow::Result<()> {
        let report = self.run(config)?;
        match self.format {
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
            OutputFormat::Table => print!("{}", report.format_table()),
        }
        Ok(())
    }

    /// Build the board and evaluate it
    pub fn run(&self, config: &Config) -> anyhow::Result<CalculationReport> {
        let mut board = self.board(config)?;
        board.open_positions(&self.opened)?;

        let requested = self.reveal.unwrap_or(config.engine.default_reveal_count);
        let reveal_count = board.clamp_reveal_count(requested);
        if reveal_count != requested {
            tracing::info!(requested, reveal_count, "Clamped reveal count to board size");
        }

        let remaining = board.remaining_amounts();
        tracing::info!(
            board = board.name(),
            remaining = remaining.len(),
            reveal_count,
            "Calculating offer"
        );

        let engine = StatisticsEngine::new(&config.engine);
        let result = engine.calculate(&remaining, reveal_count)?;

        Ok(CalculationReport {
            board: board.name().to_string(),
            remaining,
            result,
        })
    }

    fn board(&self, config: &Config) -> anyhow::Result<Board> {
        if !self.amounts.is_empty() {
            let amounts = self
                .amounts
                .iter()
                .map(|text| parse_amount(text))
                .collect::<Result<Vec<Decimal>, _>>()?;
            return Ok(Board::from_amounts("Custom Board", &amounts, &[]));
        }

        let id = self.preset.as_deref().unwrap_or(&config.board.preset);
        let million_cases = self.million_cases.unwrap_or(config.board.million_cases);
        let preset = presets::find(id, million_cases)?;
        Ok(Board::from_preset(&preset))
    }
}

impl CalculationReport {
    /// Format as table for CLI output
    pub fn format_table(&self) -> String {
        let r = &self.result;
        let best = if r.best_offer != 0.0 {
            format!("{} (+{})", format_offer(r.best_offer), format_percentage(r.pct_increase))
        } else {
            "N/A".to_string()
        };
        let worst = if r.worst_offer != 0.0 {
            format!("{} (-{})", format_offer(r.worst_offer), format_percentage(r.pct_decrease))
        } else {
            "N/A".to_string()
        };

        format!(
            r#"
══════════════════════════════════════════════════════
               {}
══════════════════════════════════════════════════════

CURRENT
───────────────────────────────────────────────────────
Cases Remaining:  {}
Fair Offer:       {}
Volatility:       {}

NEXT ROUND ({} to open, {} scenarios)
───────────────────────────────────────────────────────
Best Case:        {}
Worst Case:       {}
══════════════════════════════════════════════════════
"#,
            self.board.to_uppercase(),
            r.remaining_count,
            format_offer(r.current_offer),
            format_percentage(r.volatility),
            r.reveal_count,
            r.scenarios,
            best,
            worst,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(amounts: &[&str], reveal: usize) -> CalculateArgs {
        CalculateArgs {
            preset: None,
            million_cases: None,
            amounts: amounts.iter().map(|s| s.to_string()).collect(),
            opened: Vec::new(),
            reveal: Some(reveal),
            format: OutputFormat::Table,
        }
    }

    #[test]
    fn test_run_custom_amounts() {
        let report = args(&["10", "20", "30", "40"], 1)
            .run(&Config::default())
            .unwrap();
        assert_eq!(report.board, "Custom Board");
        assert_eq!(report.result.current_offer, 25.0);
        assert_eq!(report.result.best_offer, 30.0);
        assert_eq!(report.result.worst_offer, 20.0);
    }

    #[test]
    fn test_run_invalid_reveal_count() {
        let err = args(&["1", "2", "3", "4", "5"], 5)
            .run(&Config::default())
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "You can't open 5 cases when only 5 cases remain."
        );
    }

    #[test]
    fn test_run_preset_with_opened() {
        let mut args = args(&[], 3);
        args.preset = Some("syndicated".to_string());
        args.opened = (0..16).collect();
        let report = args.run(&Config::default()).unwrap();
        assert_eq!(report.remaining.len(), 6);
        assert_eq!(report.result.scenarios, 20);
    }

    #[test]
    fn test_run_bad_amount() {
        assert!(args(&["10", "abc"], 1).run(&Config::default()).is_err());
    }

    #[test]
    fn test_format_table() {
        let report = args(&["10", "20", "30", "40"], 1)
            .run(&Config::default())
            .unwrap();
        let table = report.format_table();
        assert!(table.contains("CUSTOM BOARD"));
        assert!(table.contains("Fair Offer:       $25"));
        assert!(table.contains("Best Case:        $30 (+20.00%)"));
        assert!(table.contains("Worst Case:       $20 (-20.00%)"));
    }

    #[test]
    fn test_format_table_two_cases() {
        let report = args(&["10", "20"], 1).run(&Config::default()).unwrap();
        assert!(report.format_table().contains("Best Case:        N/A"));
    }

    #[test]
    fn test_report_json_flattens_result() {
        let report = args(&["10", "20", "30", "40"], 1)
            .run(&Config::default())
            .unwrap();
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["current_offer"], 25.0);
        assert_eq!(json["board"], "Custom Board");
    }
}
