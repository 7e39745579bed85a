use thiserror::Error;

#[derive(Error, Debug)]
pub enum RiskbenchError {
    #[error("Series length mismatch: strategy has {strategy} periods, market has {market}")]
    ShapeMismatch { strategy: usize, market: usize },

    #[error("Series too short: need at least {required} periods, got {actual}")]
    TooShort { required: usize, actual: usize },

    #[error("Degenerate input: {0}")]
    DegenerateInput(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serde error: {0}")]
    Serde(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, RiskbenchError>;
