//! deal-calc: Deal or No Deal offer calculator
//!
//! This library provides:
//! - Fair offer (mean) of the unopened cases
//! - Exhaustive enumeration of the cases that could be opened next round
//! - Volatility of the next fair offer and best/worst case projections
//! - Board state, preset boards and currency formatting
//! - CLI, configuration and telemetry

pub mod board;
pub mod cli;
pub mod config;
pub mod stats;
pub mod telemetry;
