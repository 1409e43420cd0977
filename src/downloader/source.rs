//! Byte-level retrieval of remote images.
//!
//! The [`ImageSource`] trait is the seam between the batch machinery and the
//! network: production code goes through [`HttpImageSource`], tests plug in
//! instrumented implementations.

use crate::error::FetchError;
use async_trait::async_trait;
use bytes::Bytes;

/// Fetches the raw bytes of a remote image
#[async_trait]
pub trait ImageSource: Send + Sync {
    /// Fetch the bytes at `url`
    ///
    /// Implementations report every failure mode (connect, timeout, bad
    /// status, body read) as a [`FetchError`]; callers decide whether that
    /// becomes a per-item outcome or a hard error.
    async fn fetch(&self, url: &str) -> Result<Bytes, FetchError>;
}

/// Production image source over a shared `reqwest` client
///
/// The client is built once by the downloader; request timeouts and the
/// User-Agent header come from [`FetchConfig`](crate::config::FetchConfig).
pub struct HttpImageSource {
    client: reqwest::Client,
}

impl HttpImageSource {
    /// Wrap an already-configured client
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ImageSource for HttpImageSource {
    async fn fetch(&self, url: &str) -> Result<Bytes, FetchError> {
        let response = self.client.get(url).send().await.map_err(|e| {
            let reason = if e.is_timeout() {
                format!("request timed out: {e}")
            } else if e.is_connect() {
                format!("connection failed: {e}")
            } else {
                e.to_string()
            };
            FetchError::Request {
                url: url.to_string(),
                reason,
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        response.bytes().await.map_err(|e| FetchError::Body {
            url: url.to_string(),
            reason: e.to_string(),
        })
    }
}
