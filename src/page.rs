//! Page controller: one page load, from navigation parameters to a
//! typed action.
//!
//! # Pipeline
//!
//! 1. Bang short-circuit — a recognised `!trigger` query redirects
//!    without touching the network
//! 2. Build the backend request from the navigation parameters
//! 3. Dispatch it (exactly one round trip)
//! 4. Run the outcome through the failure policy
//! 5. On a populated payload, assemble the result view: rendered items,
//!    infobox, pagination strip
//!
//! Navigation is returned as a value ([`PageAction`]); executing it —
//! and owning the DOM containers the views land in — is the shell's job.

use crate::bang::{self, BangOutcome};
use crate::client::SearchClient;
use crate::config::DispatchConfig;
use crate::error::Result;
use crate::failure::{self, FailureAction, FailureNotice};
use crate::infobox::{self, InfoboxView};
use crate::pagination::{self, PageLink};
use crate::params::PageParams;
use crate::render::{self, ImageItem, VideoItem, WebItem};
use crate::types::{Modality, ResultList, SearchPayload};

/// What the shell should do after a page load.
#[derive(Debug, Clone, PartialEq)]
pub enum PageAction {
    /// Navigate the browser to an external URL (bang redirect).
    Redirect {
        /// Absolute target URL.
        url: String,
    },
    /// Re-navigate to the same page with the given parameters (one-shot
    /// retry, or the video modality's unconditional reload).
    Navigate {
        /// The navigation target, carrying any markers.
        target: PageParams,
    },
    /// Populate the page with this view.
    View(PageView),
}

/// A fully assembled page view.
#[derive(Debug, Clone, PartialEq)]
pub enum PageView {
    /// Results arrived: items, optional infobox, pagination strip.
    Results {
        /// Display-ready items for the requested modality.
        items: RenderedItems,
        /// Rendered infobox, when the backend resolved one.
        infobox: Option<InfoboxView>,
        /// The page-index navigation strip.
        pagination: Vec<PageLink>,
    },
    /// A terminal failure notice in place of results.
    Notice(FailureNotice),
}

/// Display-ready items, shaped by modality.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderedItems {
    /// Web results.
    Web(Vec<WebItem>),
    /// Image results.
    Image(Vec<ImageItem>),
    /// Video results.
    Video(Vec<VideoItem>),
}

impl RenderedItems {
    /// Number of display items.
    pub fn len(&self) -> usize {
        match self {
            Self::Web(items) => items.len(),
            Self::Image(items) => items.len(),
            Self::Video(items) => items.len(),
        }
    }

    /// Whether no items rendered.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Load one page: dispatch the query and decide what the shell does next.
///
/// # Errors
///
/// Returns `Err` only for an invalid configuration. Transport and parse
/// failures terminate in a [`PageView::Notice`] — nothing in this layer
/// is fatal to the process.
pub async fn load_page(
    params: PageParams,
    modality: Modality,
    config: &DispatchConfig,
) -> Result<PageAction> {
    // 1. Bang short-circuit: bypass the network call entirely.
    if let Some(query) = params.query.as_deref() {
        if let BangOutcome::Redirect(url) = bang::resolve(query) {
            tracing::debug!(%url, "bang redirect");
            return Ok(PageAction::Redirect { url });
        }
    }

    // 2–3. Build and dispatch the backend request.
    let client = SearchClient::new(config.clone())?;
    let request = client.build_request(&params, modality);
    let outcome = client.dispatch(&request).await;

    // 4. Failure policy.
    match failure::advance(modality, &params, outcome, config) {
        FailureAction::Proceed(payload) => {
            // 5. Assemble the result view.
            Ok(PageAction::View(assemble_view(payload, &params)))
        }
        FailureAction::Retry { target } | FailureAction::Reload { target } => {
            Ok(PageAction::Navigate { target })
        }
        FailureAction::Notice(notice) => Ok(PageAction::View(PageView::Notice(notice))),
    }
}

/// Assemble the result view for a populated payload.
fn assemble_view(payload: SearchPayload, params: &PageParams) -> PageView {
    let SearchPayload { results, infobox } = payload;

    let items = match results {
        ResultList::Web(results) => RenderedItems::Web(render::web::render_results(&results)),
        ResultList::Image(results) => {
            RenderedItems::Image(render::image::render_results(&results))
        }
        ResultList::Video(results) => {
            RenderedItems::Video(render::video::render_results(&results))
        }
    };

    let infobox = infobox.as_ref().and_then(infobox::render);
    let pagination = pagination::render(params, params.page);

    tracing::debug!(
        count = items.len(),
        has_infobox = infobox.is_some(),
        "page view assembled"
    );

    PageView::Results {
        items,
        infobox,
        pagination,
    }
}
