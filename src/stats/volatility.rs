//! Next-offer volatility
//!
//! Coefficient of variation of the fair offer across every way of opening
//! k cases. Every scenario is enumerated, so the cost is C(n, k) * O(n):
//! fine for a 26 case board, not for much larger ones.

use super::reveals::enumerate_reveals;
use super::StatsError;

/// Volatility of the next fair offer when `k` cases are opened
///
/// Returns 0 when the mean of the scenario means is zero or the ratio is
/// not finite (e.g. a board of zeros).
pub fn volatility(remaining: &[f64], k: usize) -> Result<f64, StatsError> {
    let mut scenarios: u64 = 0;
    let mut sum = 0.0;
    let mut sum_of_squares = 0.0;

    for reveal in enumerate_reveals(remaining, k)? {
        let avg = reveal.remaining_mean();
        sum += avg;
        sum_of_squares += avg * avg;
        scenarios += 1;
    }

    let n = scenarios as f64;
    let mean_of_means = sum / n;
    // Rounding can push a zero variance slightly negative
    let variance = (sum_of_squares / n - mean_of_means * mean_of_means).max(0.0);
    let std_dev = variance.sqrt();

    Ok(coefficient_of_variation(std_dev, mean_of_means))
}

fn coefficient_of_variation(std_dev: f64, mean: f64) -> f64 {
    if mean == 0.0 {
        return 0.0;
    }
    let ratio = std_dev / mean;
    if ratio.is_finite() {
        ratio
    } else {
        0.0
    }
}
