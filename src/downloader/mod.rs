//! Core downloader implementation split into focused submodules.
//!
//! The `ImageDownloader` struct and its methods are organized by concern:
//! - [`batch`] - Bounded-concurrency batch orchestration
//! - [`worker`] - Per-URL fetch-and-persist unit of work
//! - [`source`] - Byte-level retrieval seam ([`ImageSource`])
//! - [`store`] - Flat on-disk blob store ([`ImageStore`])

mod batch;
mod source;
mod store;
mod worker;

// unwrap/expect are acceptable in tests for concise failure-on-error assertions
#[allow(clippy::unwrap_used, clippy::expect_used)]
#[cfg(test)]
pub(crate) mod test_helpers;
#[allow(clippy::unwrap_used, clippy::expect_used)]
#[cfg(test)]
mod tests;

pub use source::{HttpImageSource, ImageSource};
pub use store::ImageStore;

use crate::config::Config;
use crate::error::{Error, Result};
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use std::sync::Arc;

/// Main downloader instance (cloneable - all fields are Arc-wrapped)
///
/// Owns the shared HTTP client, the fetch seam, and the image store. One
/// instance serves any number of concurrent batch calls; each batch brings
/// its own admission gate.
#[derive(Clone)]
pub struct ImageDownloader {
    /// Configuration (wrapped in Arc for sharing across tasks)
    pub(crate) config: Arc<Config>,
    /// Byte-level retrieval of remote images (pluggable for tests)
    pub(crate) source: Arc<dyn ImageSource>,
    /// Flat blob store holding fetched images
    pub(crate) store: ImageStore,
}

impl ImageDownloader {
    /// Create a downloader with the production HTTP image source
    ///
    /// Builds one shared `reqwest::Client` with the configured request
    /// timeout and ensures the storage directory exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage directory cannot be created or the
    /// HTTP client cannot be built.
    pub fn new(config: Config) -> Result<Self> {
        let mut builder =
            reqwest::Client::builder().timeout(config.fetch.request_timeout);
        if let Some(user_agent) = &config.fetch.user_agent {
            builder = builder.user_agent(user_agent.clone());
        }
        let client = builder.build().map_err(Error::Network)?;

        Self::with_source(config, Arc::new(HttpImageSource::new(client)))
    }

    /// Create a downloader with a custom image source
    ///
    /// Used by tests to inject instrumented or failing sources, and by
    /// embedders with non-HTTP transports.
    pub fn with_source(config: Config, source: Arc<dyn ImageSource>) -> Result<Self> {
        let store = ImageStore::new(config.storage_dir())?;

        Ok(Self {
            config: Arc::new(config),
            source,
            store,
        })
    }

    /// Read a stored image back and return its bytes base64-encoded
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] for an empty name,
    /// [`Error::NotFound`] when no blob exists under `name`, and an I/O
    /// error for any other read failure.
    pub async fn image_base64(&self, name: &str) -> Result<String> {
        if name.is_empty() {
            return Err(Error::Validation("Image name cannot be empty".to_string()));
        }

        let bytes = self.store.read(name).await?;
        Ok(BASE64.encode(bytes))
    }

    /// The store this downloader persists into
    pub fn store(&self) -> &ImageStore {
        &self.store
    }
}
