use thiserror::Error;

pub type SwapResult<T> = Result<T, SwapError>;

#[derive(Error, Debug)]
pub enum SwapError {
    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Quote rejected by aggregator: {0}")]
    UpstreamQuoteError(String),

    #[error("Transaction build rejected by aggregator: {0}")]
    UpstreamBuildError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    #[error("Output error: {0}")]
    OutputError(String),
}

impl SwapError {
    /// Transport-level failures are the only ones worth another attempt.
    pub fn is_retryable(&self) -> bool {
        matches!(self, SwapError::NetworkError(_))
    }
}

impl From<reqwest::Error> for SwapError {
    fn from(err: reqwest::Error) -> Self {
        SwapError::NetworkError(err.to_string())
    }
}

impl From<std::io::Error> for SwapError {
    fn from(err: std::io::Error) -> Self {
        SwapError::OutputError(err.to_string())
    }
}
