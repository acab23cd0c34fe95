//! Pagination controller: a fixed-width page-index strip.
//!
//! The backend does not report a total-results count, so the strip is a
//! fixed constant rather than response-derived. Every link preserves the
//! full current request state and overrides only the page index.

use crate::params::PageParams;
use serde::Serialize;

/// Highest navigable page index. The strip always shows indices
/// `0..=TOTAL_PAGES`, i.e. `TOTAL_PAGES + 1` links.
pub const TOTAL_PAGES: u32 = 9;

/// One link in the pagination strip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageLink {
    /// Zero-based page index this link navigates to.
    pub index: u32,
    /// Relative navigation target (leading `?`, same path).
    pub href: String,
    /// Whether this link is the current page.
    pub active: bool,
}

/// Render the pagination strip for the current request state.
///
/// Always emits exactly `TOTAL_PAGES + 1` links; the link whose index
/// equals `current_page` is marked active.
pub fn render(params: &PageParams, current_page: u32) -> Vec<PageLink> {
    (0..=TOTAL_PAGES)
        .map(|index| PageLink {
            index,
            href: format!("?{}", params.with_page(index).to_query_string()),
            active: index == current_page,
        })
        .collect()
}
