//! Image modality renderer: optimistic rendering with best-effort
//! removal of items that fail to load client-side.

use crate::types::ImageResult;
use serde::Serialize;

/// A display-ready image result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImageItem {
    /// URL of the image to display.
    pub image_url: String,
}

/// Render image results into display items.
///
/// Rendering is optimistic: every item is emitted whether or not its URL
/// will actually load. The shell reports load failures back through
/// [`prune_failed`].
pub fn render_results(results: &[ImageResult]) -> Vec<ImageItem> {
    results
        .iter()
        .map(|result| ImageItem {
            image_url: result.image_url.clone(),
        })
        .collect()
}

/// Remove the item(s) whose URL failed to load.
///
/// Best-effort: only the failed URL's entries disappear, the rest of the
/// gallery is untouched, and an unknown URL is a no-op rather than an
/// error.
pub fn prune_failed(items: &mut Vec<ImageItem>, failed_url: &str) {
    let before = items.len();
    items.retain(|item| item.image_url != failed_url);
    let removed = before - items.len();
    if removed > 0 {
        tracing::debug!(failed_url, removed, "pruned unloadable image");
    }
}
