//! Offer statistics module
//!
//! Fair offer, next-offer volatility and best/worst projections for the
//! cases still in play

mod engine;
mod extremes;
mod offer;
mod reveals;
mod types;
mod volatility;

pub use engine::StatisticsEngine;
pub use extremes::best_worst_offers;
pub use offer::{current_offer, validate};
pub use reveals::{combination_count, enumerate_reveals, Reveal, Reveals};
pub use types::{Extremes, OfferResult, StatsError};
pub use volatility::volatility;

/// Trait for offer calculator implementations
pub trait OfferCalculator: Send + Sync {
    /// Evaluate the unopened amounts for a round opening `reveal_count` cases
    fn calculate(&self, remaining: &[f64], reveal_count: usize) -> Result<OfferResult, StatsError>;
}
