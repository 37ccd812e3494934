//! Retry Policy Module
//!
//! Bounded attempts with exponential backoff, no jitter.

use std::time::Duration;

// == Retry Policy ==
/// Backoff schedule for transient generation failures.
///
/// The delay before attempt n (n >= 2) is `min(base * 2^(n-2), max)`;
/// attempt 1 runs immediately. Defaults: 3 attempts, 1s base, 10s cap.
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    /// Maximum number of attempts (including the first)
    pub max_attempts: u32,
    /// Delay before the second attempt
    pub base_delay: Duration,
    /// Upper bound on any single delay
    pub max_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            base_delay: Duration::from_millis(1_000),
            max_delay: Duration::from_millis(10_000),
        }
    }
}

impl RetryPolicy {
    /// Creates a policy from raw configuration values.
    pub fn new(max_attempts: u32, base_delay_ms: u64, max_delay_ms: u64) -> Self {
        Self {
            max_attempts,
            base_delay: Duration::from_millis(base_delay_ms),
            max_delay: Duration::from_millis(max_delay_ms),
        }
    }

    // == Delay Before Attempt ==
    /// Returns the wait before the given 1-based attempt, or None for the
    /// first attempt.
    pub fn delay_before(&self, attempt: u32) -> Option<Duration> {
        if attempt <= 1 {
            return None;
        }
        let exponent = (attempt - 2).min(32);
        let factor = 1u64 << exponent;
        let delay_ms = (self.base_delay.as_millis() as u64)
            .saturating_mul(factor)
            .min(self.max_delay.as_millis() as u64);
        Some(Duration::from_millis(delay_ms))
    }
}
