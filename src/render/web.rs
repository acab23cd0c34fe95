//! Web modality renderer: truncated title/snippet plus a favicon derived
//! from the result's hostname.

use super::{truncate, BODY_LIMIT, TITLE_LIMIT};
use crate::types::WebResult;
use serde::Serialize;
use url::Url;

/// External icon service keyed by hostname.
const FAVICON_SERVICE: &str = "https://icons.duckduckgo.com/ip3";

/// A display-ready web result.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WebItem {
    /// Title, truncated to the display limit.
    pub title: String,
    /// Absolute URL of the hit, untouched.
    pub href: String,
    /// Snippet, truncated to the display limit.
    pub body: String,
    /// Favicon URL derived from the hit's hostname.
    pub favicon_url: String,
    /// Page age as reported by the provider, if any.
    pub page_age: Option<String>,
}

/// Render web results into display items.
///
/// An item whose href cannot be parsed (and therefore has no hostname
/// for the favicon) is a render fault: it is dropped with a warning and
/// the rest of the list renders normally.
pub fn render_results(results: &[WebResult]) -> Vec<WebItem> {
    results.iter().filter_map(render_item).collect()
}

fn render_item(result: &WebResult) -> Option<WebItem> {
    let Some(favicon_url) = favicon_for(&result.href) else {
        tracing::warn!(href = %result.href, "dropping result with unparseable URL");
        return None;
    };

    Some(WebItem {
        title: truncate(&result.title, TITLE_LIMIT),
        href: result.href.clone(),
        body: truncate(&result.body, BODY_LIMIT),
        favicon_url,
        page_age: result.page_age.clone(),
    })
}

/// Favicon URL for a result href, or `None` when no hostname can be
/// extracted.
pub(crate) fn favicon_for(href: &str) -> Option<String> {
    let parsed = Url::parse(href).ok()?;
    let host = parsed.host_str()?;
    Some(format!("{FAVICON_SERVICE}/{host}.ico"))
}
