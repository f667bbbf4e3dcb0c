//! Backoff policy for delivering contact requests to the webhook.
//!
//! A visitor is watching the "Sending..." button while this runs, so the
//! policy is short: a few attempts with doubling waits under a low cap.

use crate::contact::TransportError;
use std::future::Future;
use std::num::NonZeroU32;
use std::time::Duration;
use tokio::time::sleep;
use tracing::{debug, warn};

/// How many times a delivery is attempted and how long to wait in between.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    attempts: NonZeroU32,
    first_backoff: Duration,
    max_backoff: Duration,
}

impl RetryPolicy {
    /// Waits start at `first_backoff` and double, capped at four times it.
    pub fn new(attempts: NonZeroU32, first_backoff: Duration) -> Self {
        Self {
            attempts,
            first_backoff,
            max_backoff: first_backoff.saturating_mul(4),
        }
    }

    /// Single attempt, no waiting.
    pub fn once() -> Self {
        Self::new(NonZeroU32::MIN, Duration::ZERO)
    }

    /// Three attempts, 500ms then 1s apart.
    pub fn webhook() -> Self {
        Self::new(NonZeroU32::MIN.saturating_add(2), Duration::from_millis(500))
    }

    pub fn attempts(&self) -> u32 {
        self.attempts.get()
    }

    /// Wait after the `failed`-th failed attempt (1-based).
    fn backoff_after(&self, failed: u32) -> Duration {
        let factor = 1u32.checked_shl(failed.saturating_sub(1)).unwrap_or(u32::MAX);
        self.first_backoff
            .saturating_mul(factor)
            .min(self.max_backoff)
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::webhook()
    }
}

/// Run `post` until it delivers, fails for good, or runs out of attempts.
///
/// Only errors for which [`TransportError::is_retryable`] holds are tried
/// again; a rejection by the endpoint is returned at once.
pub async fn deliver_with_retry<F, Fut>(
    policy: &RetryPolicy,
    mut post: F,
) -> Result<(), TransportError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<(), TransportError>>,
{
    let mut attempt = 1;

    loop {
        match post().await {
            Ok(()) => {
                if attempt > 1 {
                    debug!("Contact webhook accepted attempt {}", attempt);
                }
                return Ok(());
            }
            Err(e) if !e.is_retryable() => {
                debug!("Contact webhook refused the request: {}", e);
                return Err(e);
            }
            Err(e) if attempt >= policy.attempts() => {
                warn!("Contact webhook gave up after {} attempts: {}", attempt, e);
                return Err(e);
            }
            Err(e) => {
                let wait = policy.backoff_after(attempt);
                warn!(
                    "Contact webhook attempt {}/{} failed ({}), retrying in {:?}",
                    attempt,
                    policy.attempts(),
                    e,
                    wait
                );
                sleep(wait).await;
                attempt += 1;
            }
        }
    }
}
