//! Result renderers: modality-specific transformation of backend items
//! into normalized, truncated, display-ready values.
//!
//! Rendering never fails the page. A malformed individual item (an href
//! that does not parse, a broken image) is a render fault: the item is
//! dropped with a warning and everything else still displays.

pub mod image;
pub mod video;
pub mod web;

pub use image::{prune_failed, ImageItem};
pub use video::VideoItem;
pub use web::WebItem;

/// Display width limit for titles.
pub const TITLE_LIMIT: usize = 60;

/// Display width limit for snippets and bodies.
pub const BODY_LIMIT: usize = 300;

/// Appended when a field exceeds its limit.
pub const ELLIPSIS: char = '…';

/// Truncate `text` to at most `limit` characters, appending an ellipsis
/// only when the limit is exceeded.
///
/// Limits count `char`s, not bytes, so multi-byte text never splits
/// inside a code point.
pub fn truncate(text: &str, limit: usize) -> String {
    match text.char_indices().nth(limit) {
        None => text.to_string(),
        Some((byte_index, _)) => {
            let mut truncated = text[..byte_index].to_string();
            truncated.push(ELLIPSIS);
            truncated
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_text_unmodified() {
        assert_eq!(truncate("hello", 60), "hello");
    }

    #[test]
    fn text_at_limit_unmodified() {
        let text = "a".repeat(60);
        assert_eq!(truncate(&text, TITLE_LIMIT), text);
    }

    #[test]
    fn text_over_limit_truncated_with_ellipsis() {
        let text = "a".repeat(61);
        let truncated = truncate(&text, TITLE_LIMIT);
        assert_eq!(truncated.chars().count(), 61);
        assert_eq!(truncated, format!("{}…", "a".repeat(60)));
    }

    #[test]
    fn body_limit_boundary() {
        let exactly = "b".repeat(300);
        assert_eq!(truncate(&exactly, BODY_LIMIT), exactly);

        let over = "b".repeat(301);
        assert_eq!(truncate(&over, BODY_LIMIT), format!("{}…", "b".repeat(300)));
    }

    #[test]
    fn limit_counts_characters_not_bytes() {
        // 61 two-byte characters: must keep 60 of them, not split bytes.
        let text = "é".repeat(61);
        let truncated = truncate(&text, TITLE_LIMIT);
        assert_eq!(truncated, format!("{}…", "é".repeat(60)));
    }

    #[test]
    fn empty_text_unmodified() {
        assert_eq!(truncate("", TITLE_LIMIT), "");
    }
}
