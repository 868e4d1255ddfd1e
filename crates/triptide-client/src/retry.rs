//! Optional retry with exponential back-off and jitter.
//!
//! Clients are built with `max_retries = 0` unless configured otherwise.
//! With retries enabled only transient failures are repeated.

use std::future::Future;
use std::time::Duration;

use crate::error::ClientError;

/// Returns `true` for errors that are worth retrying after a back-off delay.
///
/// **Retriable:** network timeouts, connection failures, HTTP 5xx.
///
/// **Not retriable:** 4xx statuses, malformed bodies, invalid URLs.
pub(crate) fn is_retriable(err: &ClientError) -> bool {
    match err {
        ClientError::Http(e) => {
            e.is_timeout() || e.is_connect() || e.status().is_some_and(|s| s.is_server_error())
        }
        ClientError::UnexpectedStatus { status, .. } => *status >= 500,
        ClientError::Deserialize { .. } | ClientError::InvalidUrl { .. } => false,
    }
}

/// Delay before retry number `retry` (1-based): `base × 2^(retry-1)`, capped
/// at 30 s, then scaled by a random factor in `[0.75, 1.25)`.
fn backoff_delay(base_ms: u64, retry: u32) -> Duration {
    const CAP_MS: u64 = 30_000;
    let exponent = retry.saturating_sub(1).min(10);
    let nominal = base_ms.saturating_mul(1 << exponent).min(CAP_MS);
    let jitter = rand::random_range(0.75..1.25);
    Duration::from_secs_f64(Duration::from_millis(nominal).as_secs_f64() * jitter)
}

/// Runs `operation`, repeating it up to `max_retries` more times while it
/// fails with a retriable error.
///
/// Only idempotent requests may go through here.
pub(crate) async fn retry_with_backoff<T, F, Fut>(
    max_retries: u32,
    backoff_base_ms: u64,
    mut operation: F,
) -> Result<T, ClientError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, ClientError>>,
{
    let mut retry = 0;
    loop {
        let err = match operation().await {
            Ok(value) => return Ok(value),
            Err(err) if retry < max_retries && is_retriable(&err) => err,
            Err(err) => return Err(err),
        };
        retry += 1;
        let delay = backoff_delay(backoff_base_ms, retry);
        tracing::warn!(
            retry,
            max_retries,
            ?delay,
            error = %err,
            "transient backend failure, retrying"
        );
        tokio::time::sleep(delay).await;
    }
}
