use std::sync::Arc;

use tokio::sync::{mpsc, Semaphore};
use tracing::{debug, warn};

use crate::{
    browser::{csfloat, net::Fetch},
    models::{config::EnrichConfig, inventory::InspectionResult},
};

/// Starts one inspection request per link, never more than `config.concurrency` at once,
/// and returns the channel every outcome is reported on.
///
/// The channel closes once every request has finished, which is the barrier callers wait on.
/// Dropping the receiver early does not cancel anything, in flight requests still run to completion.
pub fn spawn_inspections(
    fetch: Arc<dyn Fetch>,
    config: &EnrichConfig,
    links: Vec<String>,
) -> mpsc::Receiver<InspectionResult> {
    let limit = config.concurrency.max(1);
    let (tx, rx) = mpsc::channel::<InspectionResult>(limit);
    let semaphore = Arc::new(Semaphore::new(limit));
    let api_url: Arc<str> = Arc::from(config.inspect_api_url.as_str());

    for link in links {
        let fetch = Arc::clone(&fetch);
        let semaphore = Arc::clone(&semaphore);
        let api_url = Arc::clone(&api_url);
        let tx = tx.clone();
        let (max_attempts, pause_ms) = (config.max_attempts.max(1), config.retry_pause_ms);

        tokio::spawn(async move {
            let result = {
                let _permit = match semaphore.acquire_owned().await {
                    Ok(p) => p,
                    Err(e) => {
                        warn!(inspect_link = %link, "Failed to acquire semaphore: {}", e);
                        return;
                    }
                };
                inspect(fetch.as_ref(), &api_url, link, max_attempts, pause_ms).await
            };

            if tx.send(result).await.is_err() {
                debug!("Inspection finished after the receiver went away");
            }
        });
    }

    rx
}

async fn inspect(fetch: &dyn Fetch, api_url: &str, link: String, max_attempts: u8, pause_ms: u64) -> InspectionResult {
    let bytes = match csfloat::fetch_iteminfo_persistent(fetch, api_url, &link, max_attempts, pause_ms).await {
        Ok(bytes) => bytes,
        Err(e) => {
            warn!(inspect_link = %link, error = %e, "Inspection request failed");
            return InspectionResult::failure(link);
        }
    };

    match serde_json::from_slice(&bytes) {
        Ok(payload) => InspectionResult::success(link, payload),
        Err(e) => {
            warn!(inspect_link = %link, error = %e, "Inspection response is not JSON");
            InspectionResult::failure(link)
        }
    }
}
