//! Video modality renderer: fixed fallbacks for missing metadata and a
//! generated placeholder thumbnail.

use super::{truncate, TITLE_LIMIT};
use crate::types::VideoResult;
use serde::Serialize;

/// Shown when a video has no title.
pub const FALLBACK_TITLE: &str = "Untitled Video";

/// Shown when a video has no uploader.
pub const FALLBACK_UPLOADER: &str = "Unknown Creator";

/// Shown when a video has no publisher.
pub const FALLBACK_PUBLISHER: &str = "Unknown Platform";

/// Inline SVG used when the provider supplies no thumbnail.
const PLACEHOLDER_SVG: &str = "<svg xmlns='http://www.w3.org/2000/svg' width='320' height='180'><rect width='100%' height='100%' fill='#2b2b33'/><polygon points='135,60 135,120 195,90' fill='#8c8c99'/></svg>";

/// A display-ready video result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VideoItem {
    /// Title, truncated, falling back to [`FALLBACK_TITLE`].
    pub title: String,
    /// Uploader, falling back to [`FALLBACK_UPLOADER`].
    pub uploader: String,
    /// Publisher, falling back to [`FALLBACK_PUBLISHER`].
    pub publisher: String,
    /// Thumbnail URL; a generated placeholder when none was supplied.
    pub thumbnail_url: String,
    /// Watch-page URL, when the provider supplied one.
    pub content_url: Option<String>,
}

/// Render video results into display items.
pub fn render_results(results: &[VideoResult]) -> Vec<VideoItem> {
    results.iter().map(render_item).collect()
}

fn render_item(result: &VideoResult) -> VideoItem {
    let title = match &result.title {
        Some(title) => truncate(title, TITLE_LIMIT),
        None => FALLBACK_TITLE.to_string(),
    };

    VideoItem {
        title,
        uploader: result
            .uploader
            .clone()
            .unwrap_or_else(|| FALLBACK_UPLOADER.to_string()),
        publisher: result
            .publisher
            .clone()
            .unwrap_or_else(|| FALLBACK_PUBLISHER.to_string()),
        thumbnail_url: result
            .thumbnail_url
            .clone()
            .unwrap_or_else(placeholder_thumbnail),
        content_url: result.content_url.clone(),
    }
}

/// A data: URI carrying the placeholder thumbnail SVG.
pub(crate) fn placeholder_thumbnail() -> String {
    format!("data:image/svg+xml,{}", urlencoding::encode(PLACEHOLDER_SVG))
}
