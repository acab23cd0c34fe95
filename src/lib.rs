//! # nilch-dispatch
//!
//! Query dispatch core for the nilch meta-search frontend.
//!
//! For each user-entered query this crate decides whether to short-circuit
//! navigation to a third-party site (a `!bang` command) or to dispatch a
//! search against the backend aggregation API, then turns the response
//! into display-ready values: three result modalities (web, image, video),
//! a small closed set of infobox widgets, a fixed pagination strip, and
//! typed failure notices.
//!
//! ## Design
//!
//! - Bang resolution is pure and synchronous over a static table; no
//!   network is touched for a recognised trigger
//! - Exactly one backend round trip per page load — no retries at the
//!   transport layer, no caching, no request deduplication
//! - The backend's sentinel bodies (`noquery`, `noresults`) are compared
//!   verbatim before any JSON parsing
//! - A one-shot retry-then-fallback policy for empty web result sets,
//!   carried through the navigation target rather than in-memory state
//! - Rendering never fails a page: malformed items are dropped
//!   individually, unknown infobox tags render nothing
//!
//! ## Security
//!
//! - Queries are logged only at trace level
//! - Provider-supplied fragments are escaped at the render boundary
//! - No network listeners — this is a library, not a server

pub mod bang;
pub mod client;
pub mod config;
pub mod error;
pub mod failure;
pub mod http;
pub mod infobox;
pub mod page;
pub mod pagination;
pub mod params;
pub mod render;
pub mod types;

pub use config::DispatchConfig;
pub use error::{DispatchError, Result};
pub use page::{PageAction, PageView, RenderedItems};
pub use params::PageParams;
pub use types::{Modality, SafeMode};

/// Load one page: resolve bangs, dispatch the backend request, classify
/// the outcome, and assemble the view.
///
/// # Errors
///
/// Returns [`DispatchError::Config`] for an invalid configuration.
/// Every other failure terminates in a [`PageView::Notice`] or a
/// controlled re-navigation rather than an `Err`.
///
/// # Examples
///
/// ```no_run
/// # async fn example() -> nilch_dispatch::Result<()> {
/// use nilch_dispatch::{DispatchConfig, Modality, PageAction, PageParams};
///
/// let config = DispatchConfig::default();
/// let params = PageParams::for_query("rust tutorials", &config);
/// match nilch_dispatch::load_page(params, Modality::Web, &config).await? {
///     PageAction::Redirect { url } => println!("go to {url}"),
///     PageAction::Navigate { target } => println!("reload with ?{}", target.to_query_string()),
///     PageAction::View(view) => println!("render {view:?}"),
/// }
/// # Ok(())
/// # }
/// ```
pub async fn load_page(
    params: PageParams,
    modality: Modality,
    config: &DispatchConfig,
) -> Result<PageAction> {
    page::load_page(params, modality, config).await
}

/// Load one page with default configuration.
///
/// Convenience wrapper around [`load_page`] using
/// [`DispatchConfig::default()`].
///
/// # Errors
///
/// Same as [`load_page`].
pub async fn load_page_default(params: PageParams, modality: Modality) -> Result<PageAction> {
    load_page(params, modality, &DispatchConfig::default()).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn load_page_validates_config() {
        let config = DispatchConfig {
            timeout_seconds: 0,
            ..Default::default()
        };
        let params = PageParams::for_query("rust", &config);
        let result = load_page(params, Modality::Web, &config).await;
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("timeout"));
    }

    #[tokio::test]
    async fn bang_redirect_reachable_from_crate_root() {
        let config = DispatchConfig::default();
        let params = PageParams::for_query("!w rust", &config);
        let action = load_page(params, Modality::Web, &config)
            .await
            .expect("load");
        assert_eq!(
            action,
            PageAction::Redirect {
                url: "https://en.wikipedia.org/wiki/Special:Search?search=rust".into()
            }
        );
    }
}
