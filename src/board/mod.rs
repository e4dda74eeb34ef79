//! Game board module
//!
//! Two columns of prize cases, which of them are opened, and the preset
//! catalog they are loaded from

pub mod format;
pub mod presets;
mod types;

pub use presets::BoardPreset;
pub use types::{BoardError, Case, Side};

use rust_decimal::Decimal;
use std::str::FromStr;

/// Board of prize cases
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    name: String,
    left: Vec<Case>,
    right: Vec<Case>,
}

impl Board {
    /// Board with every case of `preset` unopened
    pub fn from_preset(preset: &BoardPreset) -> Self {
        Self::from_amounts(&preset.name, &preset.left, &preset.right)
    }

    /// Board built from explicit column amounts
    pub fn from_amounts(name: &str, left: &[Decimal], right: &[Decimal]) -> Self {
        Self {
            name: name.to_string(),
            left: left.iter().copied().map(Case::new).collect(),
            right: right.iter().copied().map(Case::new).collect(),
        }
    }

    /// The standard US board
    pub fn standard() -> Self {
        Self::from_preset(&presets::standard())
    }

    /// Name of the preset the board was loaded from
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Cases in one column
    pub fn cases(&self, side: Side) -> &[Case] {
        match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }

    fn case_mut(&mut self, side: Side, index: usize) -> Result<&mut Case, BoardError> {
        let column = match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        };
        let len = column.len();
        column
            .get_mut(index)
            .ok_or(BoardError::IndexOutOfRange { side, index, len })
    }

    /// Flip a case between opened and unopened, returning the new state
    pub fn toggle(&mut self, side: Side, index: usize) -> Result<bool, BoardError> {
        let case = self.case_mut(side, index)?;
        case.opened = !case.opened;
        Ok(case.opened)
    }

    /// Mark a case opened or unopened
    pub fn set_opened(&mut self, side: Side, index: usize, opened: bool) -> Result<(), BoardError> {
        self.case_mut(side, index)?.opened = opened;
        Ok(())
    }

    /// Open cases by board position, counting the left column first
    pub fn open_positions(&mut self, positions: &[usize]) -> Result<(), BoardError> {
        let total = self.total_cases();
        let left_len = self.left.len();
        for &position in positions {
            let (side, index) = match position {
                p if p < left_len => (Side::Left, p),
                p if p < total => (Side::Right, p - left_len),
                _ => return Err(BoardError::PositionOutOfRange { position, total }),
            };
            self.set_opened(side, index, true)?;
        }
        Ok(())
    }

    /// Mark every case opened
    pub fn select_all(&mut self) {
        for case in self.left.iter_mut().chain(self.right.iter_mut()) {
            case.opened = true;
        }
    }

    /// Restore the standard board with every case unopened
    pub fn reset(&mut self) {
        *self = Self::standard();
    }

    /// Replace a case amount from user text such as "1,000,000"
    pub fn set_amount(&mut self, side: Side, index: usize, text: &str) -> Result<Decimal, BoardError> {
        let amount = parse_amount(text)?;
        self.case_mut(side, index)?.amount = amount;
        tracing::debug!(%side, index, %amount, "Updated case amount");
        Ok(amount)
    }

    /// Total number of cases, opened or not
    pub fn total_cases(&self) -> usize {
        self.left.len() + self.right.len()
    }

    /// Number of unopened cases
    pub fn remaining_count(&self) -> usize {
        self.unopened().count()
    }

    /// Unopened amounts, left column first
    pub fn remaining_amounts(&self) -> Vec<f64> {
        self.unopened()
            .map(|case| f64::try_from(case.amount).unwrap_or(0.0))
            .collect()
    }

    /// Clamp a requested reveal count to 1..=total cases
    pub fn clamp_reveal_count(&self, requested: usize) -> usize {
        requested.clamp(1, self.total_cases().max(1))
    }

    fn unopened(&self) -> impl Iterator<Item = &Case> {
        self.left
            .iter()
            .chain(self.right.iter())
            .filter(|case| !case.opened)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::standard()
    }
}

/// Parse a non-negative amount, ignoring thousands separators and a leading `$`
pub fn parse_amount(text: &str) -> Result<Decimal, BoardError> {
    let cleaned: String = text
        .trim()
        .trim_start_matches('$')
        .chars()
        .filter(|&c| c != ',')
        .collect();

    match Decimal::from_str(&cleaned) {
        Ok(amount) if !amount.is_sign_negative() || amount.is_zero() => Ok(amount),
        _ => Err(BoardError::InvalidAmount(text.to_string())),
    }
}
