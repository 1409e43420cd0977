//! Core types for image-dl

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use utoipa::ToSchema;

/// A batch download request
///
/// The URL list may contain duplicates; each occurrence is fetched
/// independently under its own generated key, but the report map keeps one
/// entry per URL string (see [`ImageDownloader::download_batch`]).
///
/// [`ImageDownloader::download_batch`]: crate::ImageDownloader::download_batch
#[derive(Clone, Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct DownloadRequest {
    /// Image URLs to fetch
    #[serde(rename = "imageUrls", default)]
    pub image_urls: Vec<String>,

    /// Maximum number of fetches in flight at once; values <= 0 are treated as 1
    #[serde(rename = "maxDownloadAtOnce", default)]
    pub max_download_at_once: i64,
}

impl DownloadRequest {
    /// Create a request from anything iterable as URLs
    pub fn new<I, S>(urls: I, max_download_at_once: i64) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            image_urls: urls.into_iter().map(Into::into).collect(),
            max_download_at_once,
        }
    }
}

/// Consolidated report for one batch download
///
/// `success` reflects the batch as a whole: it is false only for an empty
/// request or an orchestration-level fault. Individual fetch failures do not
/// flip it; they are visible per URL inside `url_and_names`.
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct DownloadReport {
    /// Whether the batch ran to completion
    pub success: bool,

    /// Human-readable summary of the batch
    pub message: String,

    /// Per-URL outcome: the generated local key on success, or an
    /// "Error: ..." description on failure
    #[serde(rename = "urlAndNames")]
    pub url_and_names: HashMap<String, String>,
}

impl DownloadReport {
    /// Report for a request that carried no URLs
    pub(crate) fn no_urls() -> Self {
        Self {
            success: false,
            message: "No image URLs provided".to_string(),
            url_and_names: HashMap::new(),
        }
    }

    /// Report for a batch where every worker ran to completion
    pub(crate) fn completed(url_and_names: HashMap<String, String>) -> Self {
        Self {
            success: true,
            message: "Images downloaded successfully".to_string(),
            url_and_names,
        }
    }

    /// Report for an orchestration-level fault, keeping whatever results had
    /// already landed
    pub(crate) fn faulted(reason: &str, url_and_names: HashMap<String, String>) -> Self {
        Self {
            success: false,
            message: format!("Error in download process: {reason}"),
            url_and_names,
        }
    }
}

/// Outcome of one fetch worker
///
/// Workers never raise errors past their boundary; every exit path produces
/// one of these, which the orchestrator folds into the report map.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// The image was fetched and persisted under this local key
    StoredAs(String),

    /// The fetch or persist step failed with this reason
    Failed(String),
}

impl Outcome {
    /// Render the outcome as the external per-URL report entry
    pub fn into_entry(self) -> String {
        match self {
            Outcome::StoredAs(key) => key,
            Outcome::Failed(reason) => format!("Error: {reason}"),
        }
    }

    /// True for a successful store
    pub fn is_stored(&self) -> bool {
        matches!(self, Outcome::StoredAs(_))
    }
}
