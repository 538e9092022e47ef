//! Retry with exponential backoff for VIES requests.
//!
//! Only transport failures (connection errors, timeouts) are retried.
//! A response with any status code is returned to the caller as-is.

use std::future::Future;
use std::time::Duration;

/// Delay before the first retry; doubles on every further attempt.
const BASE_DELAY_MS: u64 = 200;

/// Call `f` up to `max_retries + 1` times until it yields a response.
pub(crate) async fn retry_send<F, Fut>(
    max_retries: u32,
    f: F,
) -> Result<reqwest::Response, reqwest::Error>
where
    F: Fn() -> Fut,
    Fut: Future<Output = Result<reqwest::Response, reqwest::Error>>,
{
    for attempt in 0..max_retries {
        match f().await {
            Ok(resp) => return Ok(resp),
            Err(e) => {
                let delay = backoff(attempt);
                tracing::warn!(
                    attempt = attempt + 1,
                    max_retries,
                    "VIES request failed, retrying in {delay:?}: {e}"
                );
                tokio::time::sleep(delay).await;
            }
        }
    }
    f().await
}

fn backoff(attempt: u32) -> Duration {
    Duration::from_millis(BASE_DELAY_MS.saturating_mul(2u64.saturating_pow(attempt)))
}
