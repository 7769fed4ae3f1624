//! Retry policy with linear backoff
//!
//! Wraps one logical request in a bounded retry loop: after a failed
//! attempt the loop sleeps `base_delay * retry_number` (1s, 2s, 3s for the
//! default cap) and tries again. Every error class is retried identically;
//! there is no jitter and no cross-call budget. When the cap is exhausted
//! the last error propagates unchanged.

use crate::errors::Result;
use std::time::Duration;
use tokio::time::sleep;

/// Retry attempts after the initial call
pub const MAX_RETRIES: u32 = 3;

/// Base delay between retries (1 second, grows linearly)
pub const BASE_DELAY_MS: u64 = 1000;

/// Linear-backoff retry policy
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    max_retries: u32,
    base_delay_ms: u64,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::new(MAX_RETRIES, BASE_DELAY_MS)
    }
}

impl RetryPolicy {
    /// Create a retry policy with explicit settings
    pub fn new(max_retries: u32, base_delay_ms: u64) -> Self {
        Self {
            max_retries,
            base_delay_ms,
        }
    }

    /// Execute an operation, retrying on any error up to the cap
    ///
    /// Attempts serialize: each one completes before the next is scheduled.
    /// A single slow attempt is bounded only by the transport timeout.
    pub async fn run<F, Fut, T>(&self, mut operation: F) -> Result<T>
    where
        F: FnMut() -> Fut,
        Fut: std::future::Future<Output = Result<T>>,
    {
        let mut retries = 0;

        loop {
            match operation().await {
                Ok(result) => return Ok(result),
                Err(e) => {
                    retries += 1;

                    if retries > self.max_retries {
                        return Err(e);
                    }

                    sleep(self.delay_for(retries)).await;
                }
            }
        }
    }

    /// Delay before retry number `retry` (1-based)
    pub fn delay_for(&self, retry: u32) -> Duration {
        Duration::from_millis(self.base_delay_ms * retry as u64)
    }

    /// Total attempts this policy will make (initial call included)
    pub fn max_attempts(&self) -> u32 {
        self.max_retries + 1
    }

    /// Total worst-case time spent sleeping between attempts
    pub fn max_total_delay(&self) -> Duration {
        let total: u64 = (1..=self.max_retries as u64)
            .map(|n| self.base_delay_ms * n)
            .sum();
        Duration::from_millis(total)
    }
}
