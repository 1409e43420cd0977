//! Application state for the API server

use crate::{Config, ImageDownloader};
use std::sync::Arc;

/// Shared application state accessible to all route handlers
///
/// Cloned for each request (cheap Arc clone).
#[derive(Clone)]
pub struct AppState {
    /// The main ImageDownloader instance
    pub downloader: Arc<ImageDownloader>,

    /// Configuration (read access for route handlers)
    pub config: Arc<Config>,
}

impl AppState {
    /// Create a new AppState
    pub fn new(downloader: Arc<ImageDownloader>, config: Arc<Config>) -> Self {
        Self { downloader, config }
    }
}
