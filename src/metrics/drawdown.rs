// src/metrics/drawdown.rs
use crate::error::{Result, RiskbenchError};
use crate::metrics::stats;
use std::collections::HashMap;

/// Episode scanner state. A drawdown episode is a maximal contiguous run of
/// strictly-negative drawdown values; recovery closes on an exact zero,
/// which is well defined because the drawdown is 0.0 whenever the
/// cumulative curve sits at its running maximum.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    AtPeak,
    InDrawdown,
}

/// Drawdown and tail-risk statistics over a strategy/market return pair.
pub struct DrawdownAnalyzer;

impl DrawdownAnalyzer {
    /// Compute {max_drawdown, max_drawdown_duration, var_95, cvar_95,
    /// down_beta}. Any degenerate statistic fails the whole mapping; no
    /// partial results.
    pub fn analyze(strategy: &[f64], market: &[f64]) -> Result<HashMap<String, f64>> {
        super::check_aligned(strategy, market, 1)?;

        let cumulative = Self::cumulative_returns(strategy);
        let drawdowns = Self::drawdown_curve(&cumulative);

        let max_drawdown = drawdowns.iter().copied().fold(f64::INFINITY, f64::min);
        let max_duration = Self::max_drawdown_duration(&drawdowns);

        // 5th percentile of the empirical return distribution.
        let var_95 = stats::percentile(strategy, 5.0);

        // Expected loss at or beyond the VaR cutoff. The cutoff itself is a
        // sample point under linear interpolation only at exact ranks, so
        // the tail is never empty for non-empty input.
        let tail: Vec<f64> = strategy.iter().filter(|&&r| r <= var_95).copied().collect();
        let cvar_95 = stats::mean(&tail);

        let down_beta = Self::downside_beta(strategy, market)?;

        let mut metrics = HashMap::new();
        metrics.insert("max_drawdown".to_string(), max_drawdown);
        metrics.insert("max_drawdown_duration".to_string(), max_duration as f64);
        metrics.insert("var_95".to_string(), var_95);
        metrics.insert("cvar_95".to_string(), cvar_95);
        metrics.insert("down_beta".to_string(), down_beta);

        Ok(metrics)
    }

    /// Cumulative product of (1 + r) per period.
    pub fn cumulative_returns(returns: &[f64]) -> Vec<f64> {
        let mut curve = Vec::with_capacity(returns.len());
        let mut acc = 1.0;
        for &r in returns {
            acc *= 1.0 + r;
            curve.push(acc);
        }
        curve
    }

    /// Fractional decline from the running maximum, one value per period.
    /// Every value is <= 0; exactly 0 when the curve is at a new high.
    pub fn drawdown_curve(cumulative: &[f64]) -> Vec<f64> {
        let mut curve = Vec::with_capacity(cumulative.len());
        let mut peak = f64::NEG_INFINITY;
        for &value in cumulative {
            if value > peak {
                peak = value;
            }
            curve.push((value - peak) / peak);
        }
        curve
    }

    /// Longest drawdown episode, in periods. The onset period counts; the
    /// period where the drawdown returns to zero does not. A series ending
    /// mid-drawdown contributes its open episode.
    fn max_drawdown_duration(drawdowns: &[f64]) -> usize {
        let mut state = ScanState::AtPeak;
        let mut current = 0usize;
        let mut durations = Vec::new();

        for &dd in drawdowns {
            match state {
                ScanState::AtPeak => {
                    if dd < 0.0 {
                        state = ScanState::InDrawdown;
                        current = 1;
                    }
                }
                ScanState::InDrawdown => {
                    if dd == 0.0 {
                        state = ScanState::AtPeak;
                        durations.push(current);
                        current = 0;
                    } else {
                        current += 1;
                    }
                }
            }
        }

        if state == ScanState::InDrawdown && current > 0 {
            durations.push(current);
        }

        durations.into_iter().max().unwrap_or(0)
    }

    /// Beta restricted to periods where the market declined:
    /// cov(strategy|down, market|down) / var(market|down).
    ///
    /// Covariance uses the n-1 normalization while variance uses n; the
    /// mixed normalization is a fixed convention of the reported metric.
    fn downside_beta(strategy: &[f64], market: &[f64]) -> Result<f64> {
        let mut down_strategy = Vec::new();
        let mut down_market = Vec::new();
        for (&s, &m) in strategy.iter().zip(market.iter()) {
            if m < 0.0 {
                down_strategy.push(s);
                down_market.push(m);
            }
        }

        if down_market.len() < 2 {
            return Err(RiskbenchError::DegenerateInput(format!(
                "need at least 2 down-market periods for downside beta, got {}",
                down_market.len()
            )));
        }

        let down_variance = stats::variance(&down_market);
        if down_variance == 0.0 {
            return Err(RiskbenchError::DegenerateInput(
                "down-market returns have zero variance, downside beta is undefined".to_string(),
            ));
        }

        Ok(stats::sample_covariance(&down_strategy, &down_market) / down_variance)
    }
}
