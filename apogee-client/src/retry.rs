//! Retry policy with capped exponential backoff.

use std::sync::Arc;
use std::time::Duration;

use crate::transport::TransportError;

/// Ceiling on any single backoff delay.
const MAX_DELAY: Duration = Duration::from_millis(10_000);

/// Caller-supplied retry condition.
pub type RetryCondition = dyn Fn(&TransportError) -> bool + Send + Sync;

/// Policy for retrying failed requests.
///
/// Immutable; the pipeline holds a process-wide default and callers may
/// pass a per-request override. `max_retries` bounds the total retries for
/// one logical call, not per error kind.
#[derive(Clone)]
pub struct RetryPolicy {
    /// Maximum number of retry attempts after the original request.
    pub max_retries: u32,
    /// Base delay before the first retry.
    pub base_delay: Duration,
    /// Custom retry condition; the default retries transient failures.
    condition: Option<Arc<RetryCondition>>,
}

impl RetryPolicy {
    /// Creates a policy with the given retry budget.
    pub fn new(max_retries: u32) -> Self {
        Self {
            max_retries,
            base_delay: Duration::from_millis(1000),
            condition: None,
        }
    }

    /// Disables retries.
    pub fn no_retry() -> Self {
        Self::new(0)
    }

    /// Sets the base delay.
    pub fn with_base_delay(mut self, delay: Duration) -> Self {
        self.base_delay = delay;
        self
    }

    /// Replaces the default retry condition.
    pub fn with_condition(
        mut self,
        condition: impl Fn(&TransportError) -> bool + Send + Sync + 'static,
    ) -> Self {
        self.condition = Some(Arc::new(condition));
        self
    }

    /// Decides whether a failed attempt is worth retrying.
    ///
    /// The default condition retries when no response arrived, the request
    /// timed out, or the response was a 5xx. 4xx responses never retry.
    pub fn should_retry(&self, error: &TransportError) -> bool {
        match &self.condition {
            Some(condition) => condition(error),
            None => error.is_transient(),
        }
    }

    /// Calculates the backoff delay for a retry.
    ///
    /// `attempt` is 0 for the first retry; delays double from `base_delay`
    /// and are capped at 10 seconds.
    pub fn delay_for_attempt(&self, attempt: u32) -> Duration {
        let base_ms = u64::try_from(self.base_delay.as_millis()).unwrap_or(u64::MAX);
        let delay_ms = 2u64
            .checked_pow(attempt)
            .and_then(|factor| base_ms.checked_mul(factor))
            .unwrap_or(u64::MAX);

        Duration::from_millis(delay_ms).min(MAX_DELAY)
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::new(3)
    }
}

impl std::fmt::Debug for RetryPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RetryPolicy")
            .field("max_retries", &self.max_retries)
            .field("base_delay", &self.base_delay)
            .field("custom_condition", &self.condition.is_some())
            .finish()
    }
}

// ============================================================================
// Tests
// ============================================================================
