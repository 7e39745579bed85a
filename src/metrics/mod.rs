pub mod drawdown;
pub mod ratios;
pub mod regression;
pub(crate) mod stats;

pub use drawdown::DrawdownAnalyzer;
pub use ratios::RatioCalculator;
pub use regression::RegressionEstimator;

use crate::error::{Result, RiskbenchError};

/// Shared input contract: equal-length, index-aligned series with at least
/// `required` periods. Element i of both series refers to the same period.
pub(crate) fn check_aligned(strategy: &[f64], market: &[f64], required: usize) -> Result<()> {
    if strategy.len() != market.len() {
        return Err(RiskbenchError::ShapeMismatch {
            strategy: strategy.len(),
            market: market.len(),
        });
    }
    if strategy.len() < required {
        return Err(RiskbenchError::TooShort {
            required,
            actual: strategy.len(),
        });
    }
    Ok(())
}
