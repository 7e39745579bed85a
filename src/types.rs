use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Intercept and slope of the OLS fit of strategy returns on market returns.
///
/// Both values are rounded to 3 decimal places for reporting.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RegressionResult {
    pub alpha: f64,
    pub beta: f64,
}

/// Input document for the CLI: two aligned per-period return series.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReturnsInput {
    pub strategy: Vec<f64>,
    pub market: Vec<f64>,
}

/// Complete metrics report emitted by the CLI.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricsReport {
    pub regression: RegressionResult,
    pub ratios: HashMap<String, f64>,
    pub tail_risk: HashMap<String, f64>,
}
