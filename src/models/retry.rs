//! Bounded retry with jittered backoff for inference calls.
//!
//! Only transient failures are retried (rate limits, model cold starts,
//! connect/timeout errors); everything else surfaces immediately so the
//! pipeline's per-chunk fallback can take over.

use std::future::Future;
use std::time::Duration;

use rand::Rng;
use tracing::debug;

use crate::error::ModelError;

/// Attempts per call, including the first.
const MAX_ATTEMPTS: u32 = 3;
/// Schedule base; doubles per attempt, plus uniform jitter.
const BASE_DELAY: Duration = Duration::from_millis(500);
/// Ceiling for any single wait, hinted or scheduled.
const MAX_DELAY: Duration = Duration::from_secs(15);

pub(crate) async fn with_retries<T, F, Fut>(model: &str, mut op: F) -> Result<T, ModelError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, ModelError>>,
{
    let mut attempt = 1;
    loop {
        match op().await {
            Ok(value) => return Ok(value),
            Err(e) if attempt < MAX_ATTEMPTS && e.is_retryable() => {
                let delay = backoff_delay(attempt, &e);
                debug!(
                    model,
                    attempt,
                    delay_ms = delay.as_millis() as u64,
                    error = %e,
                    "retrying inference call"
                );
                tokio::time::sleep(delay).await;
                attempt += 1;
            }
            Err(e) => return Err(e),
        }
    }
}

fn backoff_delay(attempt: u32, error: &ModelError) -> Duration {
    // A server-provided wait takes precedence over the schedule.
    let hinted = match error {
        ModelError::RateLimited {
            retry_after: Some(d),
            ..
        } => Some(*d),
        ModelError::Loading {
            estimated: Some(d), ..
        } => Some(*d),
        _ => None,
    };
    let base = hinted.unwrap_or_else(|| BASE_DELAY * 2u32.pow(attempt - 1));
    let jitter: u64 = rand::thread_rng().gen_range(0..=250);
    (base + Duration::from_millis(jitter)).min(MAX_DELAY)
}
