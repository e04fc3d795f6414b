//! Resilient Invoker Module
//!
//! Bounded fixed-delay retry for fallible asynchronous operations.

use std::future::Future;
use std::time::Duration;

use tracing::debug;

// == Public Constants ==
/// Default number of attempts (including the first call)
pub const DEFAULT_RETRY_ATTEMPTS: u32 = 3;

/// Default delay between attempts in milliseconds
pub const DEFAULT_RETRY_DELAY_MS: u64 = 1000;

// == Retry Async ==
/// Runs `operation` up to `attempts` times with a fixed `delay` between
/// attempts.
///
/// The first success is returned immediately; no further attempts are made.
/// After the final attempt fails, only the last error is returned, earlier
/// errors are discarded. The delay is linear (no backoff, no jitter) and
/// there is no cancellation: once started, the sequence runs until success
/// or exhaustion.
///
/// `attempts` is clamped to at least 1 so the operation always runs once.
pub async fn retry_async<T, E, F, Fut>(
    mut operation: F,
    attempts: u32,
    delay: Duration,
) -> Result<T, E>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
{
    let attempts = attempts.max(1);
    let mut last_error = None;

    for attempt in 1..=attempts {
        match operation().await {
            Ok(value) => return Ok(value),
            Err(err) => {
                debug!(attempt, attempts, "operation failed");
                last_error = Some(err);

                if attempt < attempts {
                    tokio::time::sleep(delay).await;
                }
            }
        }
    }

    // attempts >= 1 guarantees at least one stored error
    Err(last_error.expect("retry_async ran zero attempts"))
}
