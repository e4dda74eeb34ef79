//! Statistics engine

use super::extremes::best_worst_offers;
use super::offer::{current_offer, validate};
use super::reveals::combination_count;
use super::volatility::volatility;
use super::{OfferCalculator, OfferResult, StatsError};
use crate::config::EngineConfig;
use crate::telemetry::{
    increment_counter, record_latency, set_gauge, CounterMetric, GaugeMetric, LatencyMetric,
};
use std::time::Instant;

/// Exhaustive-enumeration offer calculator
#[derive(Debug, Clone)]
pub struct StatisticsEngine {
    /// Scenario count above which a slow evaluation is logged
    warn_combinations: u64,
}

impl StatisticsEngine {
    /// Create an engine from configuration
    pub fn new(config: &EngineConfig) -> Self {
        Self {
            warn_combinations: config.warn_combinations,
        }
    }
}

impl Default for StatisticsEngine {
    fn default() -> Self {
        Self::new(&EngineConfig::default())
    }
}

impl OfferCalculator for StatisticsEngine {
    fn calculate(&self, remaining: &[f64], reveal_count: usize) -> Result<OfferResult, StatsError> {
        if let Err(e) = validate(remaining, reveal_count) {
            increment_counter(CounterMetric::Rejected);
            tracing::debug!(
                remaining = remaining.len(),
                reveal_count,
                error = %e,
                "Rejected evaluation"
            );
            return Err(e);
        }

        // Saturate rather than fail: the count only feeds logs and metrics
        let scenarios = combination_count(remaining.len(), reveal_count).unwrap_or(u64::MAX);
        if scenarios > self.warn_combinations {
            tracing::warn!(
                remaining = remaining.len(),
                reveal_count,
                scenarios,
                "Large reveal enumeration, evaluation may be slow"
            );
        }

        let started = Instant::now();
        let current_offer = current_offer(remaining)?;
        let volatility = volatility(remaining, reveal_count)?;
        let extremes = best_worst_offers(remaining, reveal_count)?;
        let elapsed = started.elapsed();

        record_latency(LatencyMetric::Evaluation, elapsed);
        increment_counter(CounterMetric::Evaluations);
        set_gauge(GaugeMetric::Scenarios, scenarios as f64);
        set_gauge(GaugeMetric::Volatility, volatility);
        tracing::debug!(
            remaining = remaining.len(),
            reveal_count,
            scenarios,
            current_offer,
            volatility,
            elapsed_ms = elapsed.as_millis() as u64,
            "Evaluated board"
        );

        Ok(OfferResult {
            current_offer,
            volatility,
            best_offer: extremes.best_offer,
            worst_offer: extremes.worst_offer,
            pct_increase: extremes.pct_increase,
            pct_decrease: extremes.pct_decrease,
            remaining_count: remaining.len(),
            reveal_count,
            scenarios,
        })
    }
}
