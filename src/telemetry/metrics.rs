//! Engine metrics
//!
//! Recorded through the `metrics` facade. Nothing is exported unless the
//! embedding application installs a recorder.

use std::time::Duration;

/// Latency metric types
#[derive(Debug, Clone, Copy)]
pub enum LatencyMetric {
    /// Full board evaluation
    Evaluation,
}

/// Counter metric types
#[derive(Debug, Clone, Copy)]
pub enum CounterMetric {
    /// Successful evaluations
    Evaluations,
    /// Evaluations rejected during validation
    Rejected,
}

/// Gauge metric types
#[derive(Debug, Clone, Copy)]
pub enum GaugeMetric {
    /// Scenarios enumerated by the last evaluation
    Scenarios,
    /// Volatility reported by the last evaluation
    Volatility,
}

/// Record a latency measurement
pub fn record_latency(metric: LatencyMetric, duration: Duration) {
    let metric_name = match metric {
        LatencyMetric::Evaluation => "dealcalc_evaluation_latency_ms",
    };

    let value_ms = duration.as_secs_f64() * 1000.0;
    ::metrics::histogram!(metric_name).record(value_ms);
    tracing::trace!(metric = metric_name, value_ms, "Recording latency");
}

/// Increment a counter by one
pub fn increment_counter(metric: CounterMetric) {
    let metric_name = match metric {
        CounterMetric::Evaluations => "dealcalc_evaluations_total",
        CounterMetric::Rejected => "dealcalc_rejected_total",
    };

    ::metrics::counter!(metric_name).increment(1);
}

/// Set a gauge value
pub fn set_gauge(metric: GaugeMetric, value: f64) {
    let metric_name = match metric {
        GaugeMetric::Scenarios => "dealcalc_scenarios",
        GaugeMetric::Volatility => "dealcalc_volatility",
    };

    ::metrics::gauge!(metric_name).set(value);
    tracing::trace!(metric = metric_name, value, "Setting gauge");
}
