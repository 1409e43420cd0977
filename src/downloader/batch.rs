//! Batch orchestrator — bounded-concurrency fan-out over the requested URLs.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::{Mutex, Semaphore};

use super::{ImageDownloader, worker};
use crate::types::{DownloadReport, DownloadRequest};

impl ImageDownloader {
    /// Download every URL in the request, bounding concurrent fetches
    ///
    /// URLs are handed to workers in input order, but workers run and finish
    /// independently: at most the clamped `max_download_at_once` are fetching
    /// or persisting at any moment, and neither start nor completion order is
    /// guaranteed beyond that bound.
    ///
    /// Per-URL failures are isolated: a failed fetch shows up as an
    /// `"Error: ..."` entry for that URL and leaves `success` true. The
    /// report's `success` is false only for an empty URL list or an
    /// orchestration-level fault (admission gate closed, worker task
    /// aborted), in which case the map still carries whatever results had
    /// already landed.
    ///
    /// Duplicate URLs each run as their own worker with their own generated
    /// key, so storage never collides; the report map, being keyed by URL,
    /// retains a single entry per duplicate (last writer wins).
    pub async fn download_batch(&self, request: DownloadRequest) -> DownloadReport {
        if request.image_urls.is_empty() {
            tracing::warn!("Batch download request with no image URLs");
            return DownloadReport::no_urls();
        }

        // Never zero or negative admission capacity; a batch also never
        // needs more slots than it has URLs
        let limit = usize::try_from(request.max_download_at_once)
            .unwrap_or(0)
            .clamp(1, request.image_urls.len());

        tracing::info!(
            urls = request.image_urls.len(),
            limit,
            "Starting batch download"
        );

        let semaphore = Arc::new(Semaphore::new(limit));
        let results: Arc<Mutex<HashMap<String, String>>> =
            Arc::new(Mutex::new(HashMap::new()));
        let mut tasks = Vec::with_capacity(request.image_urls.len());
        let mut fault: Option<String> = None;

        for url in request.image_urls {
            // Wait for a free slot before spawning. First-available-slot
            // semantics: fairness across URLs is not guaranteed, only the
            // concurrency bound.
            let permit = match semaphore.clone().acquire_owned().await {
                Ok(permit) => permit,
                Err(e) => {
                    fault = Some(format!("admission gate closed: {e}"));
                    break;
                }
            };

            let downloader = self.clone();
            let results = Arc::clone(&results);
            tasks.push(tokio::spawn(async move {
                // Slot is held for the worker's whole active duration and
                // released on every exit path when the permit drops
                let _permit = permit;
                let outcome = worker::fetch_one(
                    downloader.source.as_ref(),
                    &downloader.store,
                    &url,
                    &downloader.config.storage.default_extension,
                )
                .await;
                results.lock().await.insert(url, outcome.into_entry());
            }));
        }

        // Wait for every spawned worker, success or failure
        for result in futures::future::join_all(tasks).await {
            if let Err(e) = result {
                tracing::error!(error = %e, "Download worker aborted");
                fault.get_or_insert_with(|| format!("download worker aborted: {e}"));
            }
        }

        let url_and_names = results.lock().await.clone();

        match fault {
            Some(reason) => {
                tracing::error!(reason = %reason, "Error in image download process");
                DownloadReport::faulted(&reason, url_and_names)
            }
            None => {
                tracing::info!(results = url_and_names.len(), "Batch download complete");
                DownloadReport::completed(url_and_names)
            }
        }
    }
}
