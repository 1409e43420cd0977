//! Shared test helpers for creating ImageDownloader instances in tests.

use crate::config::Config;
use crate::downloader::{ImageDownloader, ImageSource};
use crate::error::FetchError;
use async_trait::async_trait;
use bytes::Bytes;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use tempfile::{TempDir, tempdir};

/// Bytes served by [`RecordingSource`] for successful fetches
pub(crate) const TEST_IMAGE_BYTES: &[u8] = b"\x89PNG test image bytes";

/// Config pointing storage into the given temp dir
pub(crate) fn test_config(temp_dir: &TempDir) -> Config {
    let mut config = Config::default();
    config.storage.storage_dir = temp_dir.path().join("images");
    config
}

/// Helper to create a test ImageDownloader over an injected source.
/// Returns the downloader and the tempdir (which must be kept alive).
pub(crate) fn create_test_downloader(
    source: Arc<dyn ImageSource>,
) -> (ImageDownloader, TempDir) {
    let temp_dir = tempdir().unwrap();
    let config = test_config(&temp_dir);
    let downloader = ImageDownloader::with_source(config, source).unwrap();
    (downloader, temp_dir)
}

/// Instrumented in-memory image source
///
/// Counts every fetch call, tracks the concurrent-call high-water mark, and
/// fails any URL containing "bad" with a 500 status. The artificial delay
/// keeps workers overlapping so the high-water mark is meaningful.
pub(crate) struct RecordingSource {
    delay: Duration,
    calls: AtomicUsize,
    active: AtomicUsize,
    high_water: AtomicUsize,
}

impl RecordingSource {
    pub(crate) fn new(delay: Duration) -> Arc<Self> {
        Arc::new(Self {
            delay,
            calls: AtomicUsize::new(0),
            active: AtomicUsize::new(0),
            high_water: AtomicUsize::new(0),
        })
    }

    /// Total number of fetch invocations
    pub(crate) fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Highest number of fetches observed in flight at once
    pub(crate) fn high_water(&self) -> usize {
        self.high_water.load(Ordering::SeqCst)
    }
}

/// Source that panics inside the worker task for URLs containing "panic"
/// and serves the test bytes for everything else
///
/// The panic aborts the spawned worker, surfacing at the orchestrator's
/// wait-for-all barrier as a `JoinError`.
pub(crate) struct PanickingSource;

#[async_trait]
impl ImageSource for PanickingSource {
    async fn fetch(&self, url: &str) -> Result<Bytes, FetchError> {
        if url.contains("panic") {
            panic!("injected worker panic for {url}");
        }
        Ok(Bytes::from_static(TEST_IMAGE_BYTES))
    }
}

#[async_trait]
impl ImageSource for RecordingSource {
    async fn fetch(&self, url: &str) -> Result<Bytes, FetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let now_active = self.active.fetch_add(1, Ordering::SeqCst) + 1;
        self.high_water.fetch_max(now_active, Ordering::SeqCst);

        tokio::time::sleep(self.delay).await;

        self.active.fetch_sub(1, Ordering::SeqCst);

        if url.contains("bad") {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: 500,
            });
        }

        Ok(Bytes::from_static(TEST_IMAGE_BYTES))
    }
}
