//! Rate-limit detection and the bounded retry policy.
//!
//! When EDGAR throttles a client it still answers `200 OK`, but with an HTML
//! page instead of the directory. Any response whose first line opens with
//! an HTML doctype is treated as throttled and retried with exponential
//! backoff, up to `max_attempts` fetches in total.

use std::time::Duration;

use cik_core::config::RetryConfig;

const DOCTYPE_MARKER: &str = "<!doctype html";

/// Whether `text` is an HTML page rather than directory data.
pub fn is_rate_limit_page(text: &str) -> bool {
    let head = text.trim_start_matches('\u{feff}').trim_start();
    head.get(..DOCTYPE_MARKER.len())
        .is_some_and(|prefix| prefix.eq_ignore_ascii_case(DOCTYPE_MARKER))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Total fetches allowed, including the first. Never below 1.
    pub max_attempts: u32,
    pub initial_backoff: Duration,
    pub max_backoff: Duration,
}

impl RetryPolicy {
    pub fn new(max_attempts: u32, initial_backoff: Duration, max_backoff: Duration) -> Self {
        Self {
            max_attempts: max_attempts.max(1),
            initial_backoff,
            max_backoff,
        }
    }

    /// Retry immediately, without sleeping.
    pub fn immediate(max_attempts: u32) -> Self {
        Self::new(max_attempts, Duration::ZERO, Duration::ZERO)
    }

    /// Delay before fetch number `attempt + 1`, where `attempt` counts the
    /// fetches already made (starting at 1). Doubles each time, capped at
    /// `max_backoff`.
    pub fn backoff(&self, attempt: u32) -> Duration {
        let shift = attempt.saturating_sub(1).min(31);
        self.initial_backoff
            .saturating_mul(1u32 << shift)
            .min(self.max_backoff)
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::from(&RetryConfig::default())
    }
}

impl From<&RetryConfig> for RetryPolicy {
    fn from(cfg: &RetryConfig) -> Self {
        Self::new(
            cfg.max_attempts,
            Duration::from_millis(cfg.initial_backoff_ms),
            Duration::from_millis(cfg.max_backoff_ms),
        )
    }
}
