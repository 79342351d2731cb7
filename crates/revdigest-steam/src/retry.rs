//! Bounded retry with exponential back-off and jitter for store requests.
//!
//! [`retry_with_backoff`] wraps a fallible async operation and retries it on
//! transient errors. Once the attempt budget is spent the last error is
//! wrapped in [`SteamError::RetriesExhausted`] so callers can tell "the store
//! kept failing" apart from a hard failure.

use std::future::Future;
use std::time::Duration;

use crate::error::SteamError;

const MAX_DELAY_MS: u64 = 60_000;

/// How many times a failing page is retried and how long to wait in between.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Extra attempts after the first failure. `0` disables retries.
    pub max_retries: u32,
    /// Base delay: the n-th retry waits `backoff_base_ms * 2^(n-1)` ± 25 %.
    pub backoff_base_ms: u64,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: 5,
            backoff_base_ms: 1_000,
        }
    }
}

impl RetryPolicy {
    #[must_use]
    pub fn new(max_retries: u32, backoff_base_ms: u64) -> Self {
        Self {
            max_retries,
            backoff_base_ms,
        }
    }

    /// Un-jittered delay before retry number `attempt` (1-based), capped at 60 s.
    #[must_use]
    pub fn base_delay_ms(&self, attempt: u32) -> u64 {
        let exponent = attempt.saturating_sub(1).min(10);
        self.backoff_base_ms
            .saturating_mul(1u64 << exponent)
            .min(MAX_DELAY_MS)
    }
}

/// Returns `true` for errors that are worth retrying after a back-off delay.
///
/// **Retriable:** network failures, unparseable bodies, HTTP 429 and 5xx.
/// **Not retriable:** other 4xx statuses, a bad base URL, and an already
/// exhausted retry.
pub(crate) fn is_retriable(err: &SteamError) -> bool {
    match err {
        SteamError::Http(_) | SteamError::Deserialize { .. } | SteamError::RateLimited { .. } => {
            true
        }
        SteamError::UnexpectedStatus { status, .. } => *status >= 500,
        SteamError::InvalidBaseUrl { .. } | SteamError::RetriesExhausted { .. } => false,
    }
}

/// Jittered back-off before retry number `attempt`. A rate-limited response
/// waits at least its `Retry-After`; either way the delay is capped at 60 s.
pub(crate) fn retry_delay_ms(policy: &RetryPolicy, attempt: u32, err: &SteamError) -> u64 {
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::cast_precision_loss
    )]
    let jittered =
        (policy.base_delay_ms(attempt) as f64 * (rand::random::<f64>() * 0.5 + 0.75)) as u64;
    let floor_ms = match err {
        SteamError::RateLimited { retry_after_secs } => retry_after_secs.saturating_mul(1_000),
        _ => 0,
    };
    jittered.max(floor_ms).min(MAX_DELAY_MS)
}

/// Runs `operation`, retrying transient failures according to `policy`.
///
/// With `max_retries = 3` the operation runs at most 4 times.
///
/// # Errors
///
/// Non-retriable errors are returned unchanged on first occurrence. A
/// retriable error that survives every attempt is returned as
/// [`SteamError::RetriesExhausted`].
pub async fn retry_with_backoff<T, F, Fut>(
    policy: &RetryPolicy,
    mut operation: F,
) -> Result<T, SteamError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, SteamError>>,
{
    let mut attempt = 0u32;
    loop {
        match operation().await {
            Ok(value) => return Ok(value),
            Err(err) => {
                if !is_retriable(&err) {
                    return Err(err);
                }
                if attempt >= policy.max_retries {
                    return Err(SteamError::RetriesExhausted {
                        attempts: attempt + 1,
                        last_error: Box::new(err),
                    });
                }
                attempt += 1;
                let delay_ms = retry_delay_ms(policy, attempt, &err);
                tracing::warn!(
                    attempt,
                    max_retries = policy.max_retries,
                    delay_ms,
                    error = %err,
                    "store request failed; retrying after back-off"
                );
                tokio::time::sleep(Duration::from_millis(delay_ms)).await;
            }
        }
    }
}
