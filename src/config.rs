use crate::error::{Result, RiskbenchError};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricsConfig {
    /// Per-period risk-free rate subtracted from strategy returns.
    pub risk_free_rate: f64,
    /// Scalar applied to Sharpe (power 1) and Treynor (power 2).
    pub annualization_factor: f64,
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self {
            risk_free_rate: 0.0,
            annualization_factor: (252.0f64).sqrt(),
        }
    }
}

impl MetricsConfig {
    pub fn validate(&self) -> Result<()> {
        if !self.risk_free_rate.is_finite() {
            return Err(RiskbenchError::Configuration(
                "Risk-free rate must be finite".to_string(),
            ));
        }
        if !(self.annualization_factor > 0.0) {
            return Err(RiskbenchError::Configuration(
                "Annualization factor must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderConfig {
    /// When true the regression fit is rendered as a side effect.
    pub render: bool,
    pub output_path: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            render: false,
            output_path: "regression_fit.svg".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    pub metrics: MetricsConfig,
    pub render: RenderConfig,
}

impl AppConfig {
    pub fn validate(&self) -> Result<()> {
        self.metrics.validate()
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| RiskbenchError::Configuration(format!("Failed to read config: {}", e)))?;

        let config: AppConfig = toml::from_str(&contents)
            .map_err(|e| RiskbenchError::Configuration(format!("Failed to parse config: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let toml_str = toml::to_string_pretty(self)
            .map_err(|e| RiskbenchError::Configuration(format!("Failed to serialize: {}", e)))?;

        std::fs::write(path, toml_str)
            .map_err(|e| RiskbenchError::Configuration(format!("Failed to write config: {}", e)))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_validate() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());
        assert!((config.metrics.annualization_factor - (252.0f64).sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_rejects_nonpositive_annualization() {
        let config = MetricsConfig {
            risk_free_rate: 0.0,
            annualization_factor: 0.0,
        };
        assert!(config.validate().is_err());
    }
}
