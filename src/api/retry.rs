//! Retry policy for rate-limited responses.
//!
//! The catalog API answers HTTP 429 when a client exceeds its request
//! quota. Retries are bounded: exponential backoff between attempts,
//! with a server-provided `Retry-After` hint taking precedence, and a
//! `RateLimited` error once the budget runs out.

use std::time::Duration;

/// Bounded retry policy for HTTP 429 responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Total number of attempts, including the first request.
    pub max_attempts: u32,

    /// Backoff before the first retry; doubles on every further retry.
    pub base_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            base_delay: Duration::from_millis(500),
        }
    }
}

impl RetryPolicy {
    /// Create a policy with the given attempt budget and base delay.
    pub fn new(max_attempts: u32, base_delay: Duration) -> Self {
        Self {
            max_attempts,
            base_delay,
        }
    }

    /// Delay to wait before the retry following attempt number
    /// `attempt` (0-indexed). A parsed `Retry-After` hint overrides the
    /// computed backoff.
    pub fn delay_for(&self, attempt: u32, retry_after: Option<Duration>) -> Duration {
        if let Some(hint) = retry_after {
            return hint;
        }
        // attempt is bounded by max_attempts, but keep the shift safe
        let factor = 1u32 << attempt.min(16);
        self.base_delay.saturating_mul(factor)
    }
}
