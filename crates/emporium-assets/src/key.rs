//! Asset key derivation from durable URLs.

/// Recovers the upload key from a durable asset URL: the last path
/// segment, minus any extension. Returns `None` for URLs with no usable
/// final segment.
#[must_use]
pub fn asset_key_from_url(url: &str) -> Option<&str> {
    let segment = url.rsplit('/').next()?;
    let key = segment.split('.').next().unwrap_or(segment);
    if key.is_empty() {
        None
    } else {
        Some(key)
    }
}
