// src/metrics/regression.rs
use crate::error::{Result, RiskbenchError};
use crate::metrics::stats;
use crate::render::FitRenderer;
use crate::types::RegressionResult;

/// Ordinary-least-squares fit of strategy returns on market returns.
///
/// Fits `strategy ≈ beta * market + alpha` and reports alpha (intercept)
/// and beta (slope) rounded to 3 decimal places.
pub struct RegressionEstimator;

impl RegressionEstimator {
    /// Fit the degree-1 model. Requires equal-length series with at least
    /// 2 periods and non-constant market returns.
    pub fn estimate(strategy: &[f64], market: &[f64]) -> Result<RegressionResult> {
        super::check_aligned(strategy, market, 2)?;

        let market_var = stats::variance(market);
        if market_var == 0.0 {
            return Err(RiskbenchError::DegenerateInput(
                "market returns have zero variance, OLS slope is undefined".to_string(),
            ));
        }

        let market_mean = stats::mean(market);
        let strategy_mean = stats::mean(strategy);

        // Closed-form OLS: beta = cov(market, strategy) / var(market).
        // Population normalization on both, so the 1/n factors cancel.
        let covariance = market
            .iter()
            .zip(strategy.iter())
            .map(|(&m, &s)| (m - market_mean) * (s - strategy_mean))
            .sum::<f64>()
            / market.len() as f64;

        let beta = covariance / market_var;
        let alpha = strategy_mean - beta * market_mean;

        Ok(RegressionResult {
            alpha: round3(alpha),
            beta: round3(beta),
        })
    }

    /// Fit the model, then hand the points and fitted line to the injected
    /// renderer. The numeric result is final before rendering starts, and a
    /// renderer failure is logged and swallowed, never propagated.
    pub fn estimate_and_render(
        strategy: &[f64],
        market: &[f64],
        renderer: &dyn FitRenderer,
    ) -> Result<RegressionResult> {
        let fit = Self::estimate(strategy, market)?;

        if let Err(e) = renderer.render(market, strategy, &fit) {
            log::warn!("Fit plot rendering failed: {}", e);
        }

        Ok(fit)
    }
}

fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}
