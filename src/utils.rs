//! Utility functions for local key generation and extension inference

use uuid::Uuid;

/// Infer a file extension from a URL's trailing path segment
///
/// Parses the URL, takes the last path segment, and returns the part after
/// its final dot (lowercased). Returns `None` when the URL does not parse,
/// has no path segments, ends in a slash, or the segment carries no
/// extension — callers fall back to a configured default.
///
/// # Examples
///
/// ```
/// use image_dl::utils::infer_extension;
///
/// assert_eq!(infer_extension("http://x/a.png"), Some("png".to_string()));
/// assert_eq!(infer_extension("http://x/archive"), None);
/// assert_eq!(infer_extension("not a url"), None);
/// ```
pub fn infer_extension(url: &str) -> Option<String> {
    let parsed = url::Url::parse(url).ok()?;
    let mut segments = parsed.path_segments()?;
    let last_segment = segments.next_back()?;
    if last_segment.is_empty() {
        return None;
    }

    let extension = std::path::Path::new(last_segment)
        .extension()
        .and_then(|e| e.to_str())?;
    if extension.is_empty() {
        return None;
    }

    Some(extension.to_ascii_lowercase())
}

/// Generate a fresh local key for an image fetched from `url`
///
/// The key is a UUID v4 plus the extension inferred from the URL (or
/// `default_extension` when none can be inferred). Keys are independent of
/// the source URL, so duplicate URLs in one batch still get distinct keys.
pub fn generate_image_key(url: &str, default_extension: &str) -> String {
    let extension =
        infer_extension(url).unwrap_or_else(|| default_extension.to_ascii_lowercase());
    format!("{}.{}", Uuid::new_v4(), extension)
}
