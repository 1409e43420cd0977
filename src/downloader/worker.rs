//! Per-URL fetch worker: fetch, persist, report an outcome.

use super::source::ImageSource;
use super::store::ImageStore;
use crate::error::FetchError;
use crate::types::Outcome;
use crate::utils::generate_image_key;

/// Fetch one image and persist it under a freshly generated key
///
/// Every failure is converted into [`Outcome::Failed`]; nothing escapes the
/// worker boundary as an error. The caller owns admission control — this
/// function assumes it already holds a slot.
pub(crate) async fn fetch_one(
    source: &dyn ImageSource,
    store: &ImageStore,
    url: &str,
    default_extension: &str,
) -> Outcome {
    let key = generate_image_key(url, default_extension);

    let bytes = match source.fetch(url).await {
        Ok(bytes) => bytes,
        Err(e) => {
            tracing::warn!(url = %url, error = %e, "Image fetch failed");
            return Outcome::Failed(e.to_string());
        }
    };

    match store.save(&key, &bytes).await {
        Ok(()) => {
            tracing::info!(url = %url, key = %key, bytes = bytes.len(), "Stored image");
            Outcome::StoredAs(key)
        }
        Err(e) => {
            let e = FetchError::Store {
                key,
                reason: e.to_string(),
            };
            tracing::warn!(url = %url, error = %e, "Image persist failed");
            Outcome::Failed(e.to_string())
        }
    }
}
