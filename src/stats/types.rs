//! Statistics engine types

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Statistics engine errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StatsError {
    /// No unopened cases were supplied
    #[error("No remaining cases to evaluate")]
    EmptyInput,
    /// Reveal count is zero or leaves no case to value
    #[error("{}", invalid_reveal_message(.requested, .remaining))]
    InvalidRevealCount { requested: usize, remaining: usize },
}

fn invalid_reveal_message(requested: &usize, remaining: &usize) -> String {
    if *requested == 0 {
        "Must open at least one case".to_string()
    } else {
        format!(
            "You can't open {} cases when only {} cases remain.",
            requested, remaining
        )
    }
}

/// Best and worst case fair offers for the next round
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Extremes {
    /// Mean after the k smallest amounts are revealed
    pub best_offer: f64,
    /// Mean after the k largest amounts are revealed
    pub worst_offer: f64,
    /// |best - current| / current
    pub pct_increase: f64,
    /// |worst - current| / current
    pub pct_decrease: f64,
}

/// Result of evaluating a board
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OfferResult {
    /// Mean of the unopened cases
    pub current_offer: f64,
    /// Coefficient of variation of the next-round fair offer
    pub volatility: f64,
    /// Best case next-round fair offer (0 when fewer than 3 cases remain)
    pub best_offer: f64,
    /// Worst case next-round fair offer (0 when fewer than 3 cases remain)
    pub worst_offer: f64,
    /// Relative move up to the best offer
    pub pct_increase: f64,
    /// Relative move down to the worst offer
    pub pct_decrease: f64,
    /// Number of unopened cases evaluated
    pub remaining_count: usize,
    /// Number of cases to open next round
    pub reveal_count: usize,
    /// Number of reveal scenarios enumerated
    pub scenarios: u64,
}

impl OfferResult {
    /// Best/worst projection half of the result
    pub fn extremes(&self) -> Extremes {
        Extremes {
            best_offer: self.best_offer,
            worst_offer: self.worst_offer,
            pct_increase: self.pct_increase,
            pct_decrease: self.pct_decrease,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_reveal_message() {
        let err = StatsError::InvalidRevealCount {
            requested: 5,
            remaining: 5,
        };
        assert_eq!(
            err.to_string(),
            "You can't open 5 cases when only 5 cases remain."
        );
    }

    #[test]
    fn test_zero_reveal_message() {
        let err = StatsError::InvalidRevealCount {
            requested: 0,
            remaining: 5,
        };
        assert_eq!(err.to_string(), "Must open at least one case");
    }

    #[test]
    fn test_offer_result_serializes() {
        let result = OfferResult {
            current_offer: 25.0,
            volatility: 0.1,
            best_offer: 30.0,
            worst_offer: 20.0,
            pct_increase: 0.2,
            pct_decrease: 0.2,
            remaining_count: 4,
            reveal_count: 1,
            scenarios: 4,
        };
        let json = serde_json::to_string(&result).unwrap();
        assert!(json.contains("\"current_offer\":25.0"));
        assert_eq!(result.extremes().best_offer, 30.0);
    }
}
