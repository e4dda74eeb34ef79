//! Fair offer calculation

use super::StatsError;

/// Mean of the unopened cases
pub fn current_offer(remaining: &[f64]) -> Result<f64, StatsError> {
    if remaining.is_empty() {
        return Err(StatsError::EmptyInput);
    }
    Ok(mean(remaining))
}

/// Check that `k` cases can be opened from `remaining`
pub fn validate(remaining: &[f64], k: usize) -> Result<(), StatsError> {
    if remaining.is_empty() {
        return Err(StatsError::EmptyInput);
    }
    if k < 1 || k >= remaining.len() {
        return Err(StatsError::InvalidRevealCount {
            requested: k,
            remaining: remaining.len(),
        });
    }
    Ok(())
}

/// Arithmetic mean; callers guarantee a non-empty slice
pub(crate) fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}
