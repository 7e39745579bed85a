// src/metrics/ratios.rs
use crate::error::{Result, RiskbenchError};
use crate::metrics::stats;
use crate::metrics::RegressionEstimator;
use std::collections::HashMap;

/// Risk-adjusted performance ratios: Sharpe, Treynor, Sortino.
///
/// Annualization is deliberately asymmetric and fixed by convention:
/// Sharpe scales by the factor, Treynor by the factor squared, Sortino not
/// at all. Likewise Sortino's downside set is the raw strategy returns
/// below zero, not the excess returns.
pub struct RatioCalculator {
    risk_free_rate: f64,
    annualization_factor: f64,
}

impl Default for RatioCalculator {
    fn default() -> Self {
        // Daily returns annualized under i.i.d. assumptions.
        Self {
            risk_free_rate: 0.0,
            annualization_factor: (252.0f64).sqrt(),
        }
    }
}

impl RatioCalculator {
    pub fn new(risk_free_rate: f64, annualization_factor: f64) -> Self {
        Self {
            risk_free_rate,
            annualization_factor,
        }
    }

    /// Compute {sharpe, treynor, sortino} over the aligned series.
    ///
    /// Standard deviations are population (divide by n). Degenerate
    /// denominators surface as errors rather than defaulted values.
    pub fn calculate(&self, strategy: &[f64], market: &[f64]) -> Result<HashMap<String, f64>> {
        super::check_aligned(strategy, market, 2)?;

        let excess_returns: Vec<f64> = strategy
            .iter()
            .map(|&r| r - self.risk_free_rate)
            .collect();
        let mean_excess = stats::mean(&excess_returns);

        // Sharpe: excess return per unit of total volatility.
        let excess_std = stats::std_dev(&excess_returns);
        if excess_std == 0.0 {
            return Err(RiskbenchError::DegenerateInput(
                "excess returns have zero variance, Sharpe is undefined".to_string(),
            ));
        }
        let sharpe = self.annualization_factor * mean_excess / excess_std;

        // Treynor: excess return per unit of systematic risk. Uses the
        // rounded beta exactly as the estimator reports it.
        let fit = RegressionEstimator::estimate(strategy, market)?;
        if fit.beta == 0.0 {
            return Err(RiskbenchError::DegenerateInput(
                "beta is zero, Treynor is undefined".to_string(),
            ));
        }
        let treynor = self.annualization_factor.powi(2) * mean_excess / fit.beta;

        // Sortino: excess return per unit of downside volatility, where the
        // downside set is the raw strategy returns below zero.
        let downside_returns: Vec<f64> = strategy.iter().filter(|&&r| r < 0.0).copied().collect();
        if downside_returns.len() < 2 {
            return Err(RiskbenchError::DegenerateInput(format!(
                "need at least 2 downside observations for Sortino, got {}",
                downside_returns.len()
            )));
        }
        let downside_std = stats::std_dev(&downside_returns);
        if downside_std == 0.0 {
            return Err(RiskbenchError::DegenerateInput(
                "downside returns have zero variance, Sortino is undefined".to_string(),
            ));
        }
        let sortino = mean_excess / downside_std;

        let mut ratios = HashMap::new();
        ratios.insert("sharpe".to_string(), sharpe);
        ratios.insert("treynor".to_string(), treynor);
        ratios.insert("sortino".to_string(), sortino);

        Ok(ratios)
    }
}
