use crate::core::{constants::*, SwapResult};
use log::warn;
use std::future::Future;
use std::time::Duration;
use tokio::time::sleep;

/// Retry configuration for calls to the aggregator
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    /// Maximum number of retry attempts after the first try
    pub max_retries: u32,
    /// Base delay between retries (milliseconds)
    pub base_delay_ms: u64,
    /// Maximum delay between retries (milliseconds)
    pub max_delay_ms: u64,
    /// Exponential backoff multiplier
    pub backoff_multiplier: f64,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: MAX_HTTP_RETRIES,
            base_delay_ms: RETRY_BASE_DELAY_MS,
            max_delay_ms: RETRY_MAX_DELAY_MS,
            backoff_multiplier: RETRY_BACKOFF_MULTIPLIER,
        }
    }
}

impl RetryPolicy {
    pub fn with_max_retries(max_retries: u32) -> Self {
        Self {
            max_retries,
            ..Self::default()
        }
    }

    pub fn calculate_retry_delay(&self, attempt: u32) -> u64 {
        let delay = (self.base_delay_ms as f64
            * self.backoff_multiplier.powi(attempt as i32 - 1)) as u64;

        delay.min(self.max_delay_ms)
    }

    /// Run `operation` until it succeeds, fails with a non-retryable error,
    /// or the retry budget is spent. The last error is returned unchanged.
    pub async fn run<T, F, Fut>(&self, what: &str, mut operation: F) -> SwapResult<T>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = SwapResult<T>>,
    {
        let mut attempt = 0;
        loop {
            match operation().await {
                Ok(value) => return Ok(value),
                Err(e) if e.is_retryable() && attempt < self.max_retries => {
                    attempt += 1;
                    let delay = self.calculate_retry_delay(attempt);
                    warn!(
                        "{} failed: {}; retrying in {}ms (attempt {}/{})",
                        what, e, delay, attempt, self.max_retries
                    );
                    sleep(Duration::from_millis(delay)).await;
                }
                Err(e) => return Err(e),
            }
        }
    }
}
