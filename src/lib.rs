//! # image-dl
//!
//! Embeddable backend library for batch image downloading.
//!
//! Give it a list of image URLs and a concurrency budget; it fetches every
//! URL with at most that many requests in flight, stores each image under a
//! generated unique key, and returns a report mapping every URL to its key
//! or to an error description. One failing URL never aborts the batch.
//!
//! ## Design Philosophy
//!
//! - **Bounded concurrency** - A semaphore admits at most the requested
//!   number of simultaneous fetches
//! - **Isolated failures** - Per-URL errors become per-URL report entries,
//!   never batch aborts
//! - **Library-first** - No CLI or UI; embed it and mount the REST API
//! - **Explicit configuration** - Storage location and timeouts are
//!   configuration values, not ambient process state
//!
//! ## Quick Start
//!
//! ```no_run
//! use image_dl::{Config, DownloadRequest, ImageDownloader};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let downloader = ImageDownloader::new(Config::default())?;
//!
//!     let report = downloader
//!         .download_batch(DownloadRequest::new(
//!             ["https://example.com/a.png", "https://example.com/b.png"],
//!             2,
//!         ))
//!         .await;
//!
//!     for (url, name) in &report.url_and_names {
//!         println!("{url} -> {name}");
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! To serve the REST API instead, wrap the downloader and config in `Arc`
//! and call [`api::start_api_server`].

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]

/// REST API module
pub mod api;
/// Configuration types
pub mod config;
/// Core downloader implementation (decomposed into focused submodules)
pub mod downloader;
/// Error types
pub mod error;
/// Core types
pub mod types;
/// Utility functions
pub mod utils;

// Re-export commonly used types
pub use config::{ApiConfig, Config, FetchConfig, StorageConfig};
pub use downloader::{HttpImageSource, ImageDownloader, ImageSource, ImageStore};
pub use error::{ApiError, Error, ErrorDetail, FetchError, Result, ToHttpStatus};
pub use types::{DownloadReport, DownloadRequest, Outcome};
