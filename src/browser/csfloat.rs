use std::time::Duration;

use bytes::Bytes;
use tracing::debug;

use crate::{browser::net::Fetch, error::NetResult};

/// One inspection request. The inspect link travels as the `url` query parameter.
pub async fn fetch_iteminfo(fetch: &dyn Fetch, api_url: &str, inspect_link: &str) -> NetResult<Bytes> {
    fetch.get_bytes(api_url, &[("url", inspect_link)]).await
}

/// Pause before the retry following `attempt`, grows linearly and caps at `u64::MAX`.
pub fn backoff_millis(pause_time_millis: u64, attempt: u8) -> u64 {
    pause_time_millis.saturating_mul(attempt as u64)
}

/// Retries retryable failures, pausing a little longer after every attempt.
pub async fn fetch_iteminfo_persistent(
    fetch: &dyn Fetch,
    api_url: &str,
    inspect_link: &str,
    max_attempts: u8,
    pause_time_millis: u64,
) -> NetResult<Bytes> {
    let mut attempt: u8 = 1;

    loop {
        match fetch_iteminfo(fetch, api_url, inspect_link).await {
            Ok(bytes) => break Ok(bytes),
            Err(e) => {
                if attempt >= max_attempts || !e.is_retryable() { break Err(e) }

                let wait_time = backoff_millis(pause_time_millis, attempt);
                debug!(inspect_link, attempt, wait_time, error = %e, "Retrying iteminfo request");

                tokio::time::sleep(Duration::from_millis(wait_time)).await;
                attempt += 1;
            }
        }
    }
}
