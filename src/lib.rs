pub mod config;
pub mod error;
pub mod metrics;
pub mod render;
pub mod types;

pub use config::{AppConfig, MetricsConfig, RenderConfig};
pub use error::{Result, RiskbenchError};
pub use metrics::{DrawdownAnalyzer, RatioCalculator, RegressionEstimator};
pub use render::{FitRenderer, SvgFitRenderer};
pub use types::{MetricsReport, RegressionResult, ReturnsInput};
