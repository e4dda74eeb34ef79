//! Board types

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Column of the board a case sits in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    /// Low amounts
    Left,
    /// High amounts
    Right,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Left => write!(f, "left"),
            Side::Right => write!(f, "right"),
        }
    }
}

/// A single prize case
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Case {
    /// Amount concealed in the case
    pub amount: Decimal,
    /// Whether the case has been opened (removed from play)
    pub opened: bool,
}

impl Case {
    /// Create an unopened case
    pub fn new(amount: Decimal) -> Self {
        Self {
            amount,
            opened: false,
        }
    }
}

/// Board errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    /// Case index outside the column
    #[error("No case {index} on the {side} side ({len} cases)")]
    IndexOutOfRange {
        side: Side,
        index: usize,
        len: usize,
    },
    /// Board position outside the whole board
    #[error("No case at board position {position} ({total} cases)")]
    PositionOutOfRange { position: usize, total: usize },
    /// Amount text is not a non-negative number
    #[error("Invalid case amount: {0:?}")]
    InvalidAmount(String),
    /// Million Dollar Mission case count outside 1..=13
    #[error("Million Dollar Mission needs between 1 and {max} cases, got {count}")]
    InvalidMillionCases { count: usize, max: usize },
    /// No preset with this id
    #[error("Unknown board preset: {0}")]
    UnknownPreset(String),
}
