//! Image path resolution for listing and destination artwork.

/// Shown when a record carries no image at all.
pub const PLACEHOLDER_IMAGE: &str = "/static/img/placeholder.jpg";

/// Local directory that relative image paths are served from.
pub const IMAGE_BASE_PATH: &str = "/static/images/";

/// `onerror` fallback used by destination cards.
pub const DESTINATION_FALLBACK_IMAGE: &str = "/static/images/placeholder.jpg";

/// Maps a possibly-empty, relative, or absolute image path to a displayable URL.
///
/// Absolute `http(s)` URLs pass through untouched; everything else is served
/// from [`IMAGE_BASE_PATH`].
#[must_use]
pub fn resolve_image(path: Option<&str>) -> String {
    match path {
        None | Some("") => PLACEHOLDER_IMAGE.to_string(),
        Some(p) if p.starts_with("http://") || p.starts_with("https://") => p.to_string(),
        Some(p) => format!("{IMAGE_BASE_PATH}{p}"),
    }
}

/// Resolves a destination card image by keeping only its file name.
///
/// The destinations asset stores paths like `"static/images/goa.jpg"`; cards
/// always load from [`IMAGE_BASE_PATH`] regardless of the stored directory.
#[must_use]
pub fn destination_image(path: &str) -> String {
    let file = path.rsplit('/').next().unwrap_or_default();
    format!("{IMAGE_BASE_PATH}{file}")
}
