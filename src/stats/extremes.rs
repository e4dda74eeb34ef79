//! Best and worst case next-round offers
//!
//! Rather than averaging over every scenario, the bounds take the single
//! most and least favourable ordering: the k smallest or the k largest
//! amounts revealed.

use super::offer::{mean, validate};
use super::{Extremes, StatsError};

/// Fewest remaining cases for which the bounds are reported
const MIN_CASES_FOR_EXTREMES: usize = 3;

/// Best and worst fair offers after opening `k` cases
///
/// All four values are 0 when fewer than three cases remain.
pub fn best_worst_offers(remaining: &[f64], k: usize) -> Result<Extremes, StatsError> {
    validate(remaining, k)?;
    if remaining.len() < MIN_CASES_FOR_EXTREMES {
        return Ok(Extremes::default());
    }

    let mut sorted = remaining.to_vec();
    sorted.sort_by(f64::total_cmp);

    let kept = sorted.len() - k;
    let worst_offer = mean(&sorted[..kept]);
    let best_offer = mean(&sorted[k..]);
    let current = mean(remaining);

    Ok(Extremes {
        best_offer,
        worst_offer,
        pct_increase: relative_change(best_offer, current),
        pct_decrease: relative_change(worst_offer, current),
    })
}

fn relative_change(offer: f64, current: f64) -> f64 {
    if current == 0.0 {
        return 0.0;
    }
    (offer - current).abs() / current
}
