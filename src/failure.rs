//! Failure handler: classifies dispatch outcomes and drives the one-shot
//! retry-then-fallback policy.
//!
//! The retry tier exists only for the web modality. Its state is not kept
//! in memory: the `failed` marker travels inside the re-navigation target
//! itself, so ordering between the two attempts is enforced by full page
//! reloads.
//!
//! # State Machine (web modality)
//!
//! ```text
//! ┌─────────┐  noresults, marker unset   ┌──────────────┐
//! │ Initial ├───────────────────────────►│ RetryPending │  (re-navigate,
//! └─────────┘                            └──────┬───────┘   marker set)
//!                                               │ noresults again
//!                                               ▼
//!                                        ┌───────────┐
//!                                        │ Exhausted │  (rate-limit notice,
//!                                        └───────────┘   no navigation)
//! ```
//!
//! Images have no retry tier: `noresults` renders an empty state
//! directly. Video reloads the page on *every* `noresults` with no
//! exhaustion marker — kept as the original behaved, but the asymmetry
//! is almost certainly a bug in the original rather than intent; the web
//! policy is the authoritative one (see DESIGN.md).

use crate::config::DispatchConfig;
use crate::error::DispatchError;
use crate::params::PageParams;
use crate::types::{Modality, SearchPayload, SearchResponse};

/// Retry tier state, reconstructed from the navigation marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RetryState {
    /// First attempt; the one-shot retry is still available.
    Initial,
    /// The marker is set: this page load *is* the retry.
    RetryPending,
    /// The retry was spent and failed again. Terminal.
    Exhausted,
}

impl RetryState {
    /// Reconstruct the state from the one-shot navigation marker.
    pub fn from_marker(failed: bool) -> Self {
        if failed {
            Self::RetryPending
        } else {
            Self::Initial
        }
    }

    /// The state after observing an empty result set in this state.
    pub fn after_empty(self) -> Self {
        match self {
            Self::Initial => Self::RetryPending,
            Self::RetryPending | Self::Exhausted => Self::Exhausted,
        }
    }
}

/// What the page should do after a dispatch outcome.
#[derive(Debug, Clone, PartialEq)]
pub enum FailureAction {
    /// A payload with items arrived; render it.
    Proceed(SearchPayload),
    /// Re-navigate once to the same page with the retry marker set.
    /// No user-visible message.
    Retry {
        /// Navigation target carrying the marker.
        target: PageParams,
    },
    /// Reload the page unconditionally (video empty-result behaviour).
    Reload {
        /// Navigation target, unchanged.
        target: PageParams,
    },
    /// Terminal: render a notice instead of results.
    Notice(FailureNotice),
}

/// A terminal, user-visible failure state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureNotice {
    /// The backend saw no query parameter.
    MissingQuery,
    /// The payload arrived but held zero items.
    Empty,
    /// The retry was spent; offer the query on an alternate engine.
    RateLimited {
        /// Outbound link carrying the same query elsewhere.
        fallback_url: String,
    },
    /// Transport or parse failure, surfaced verbatim.
    Failed {
        /// The underlying error detail.
        detail: String,
    },
}

impl FailureNotice {
    /// The message shown in place of results.
    pub fn message(&self) -> String {
        match self {
            Self::MissingQuery => "Please enter a search query.".into(),
            Self::Empty => {
                "No results found for this search. Try a different engine.".into()
            }
            Self::RateLimited { .. } => {
                "The search backend looks rate limited right now. Try the same search on another engine:"
                    .into()
            }
            Self::Failed { detail } => format!("Something went wrong while searching: {detail}"),
        }
    }
}

/// Classify a dispatch outcome into the page's next action.
///
/// Pure: the only inputs are the modality, the current navigation state,
/// the outcome, and the config (for the fallback link). Every branch is
/// terminal except `Retry` and `Reload`, which hand a navigation target
/// back to the shell.
pub fn advance(
    modality: Modality,
    params: &PageParams,
    outcome: Result<SearchResponse, DispatchError>,
    config: &DispatchConfig,
) -> FailureAction {
    match outcome {
        Err(err) => FailureAction::Notice(FailureNotice::Failed {
            detail: err.to_string(),
        }),
        Ok(SearchResponse::NoQuery) => FailureAction::Notice(FailureNotice::MissingQuery),
        Ok(SearchResponse::NoResults) => match modality {
            Modality::Image => FailureAction::Notice(FailureNotice::Empty),
            // Unconditional reload, no exhaustion marker. Original
            // behaviour preserved; the web tier below is authoritative.
            Modality::Video => FailureAction::Reload {
                target: params.clone(),
            },
            Modality::Web => match RetryState::from_marker(params.failed).after_empty() {
                RetryState::RetryPending => {
                    tracing::warn!("empty result set, scheduling one-shot retry");
                    FailureAction::Retry {
                        target: params.with_retry_marker(),
                    }
                }
                _ => FailureAction::Notice(FailureNotice::RateLimited {
                    fallback_url: fallback_url(params, config),
                }),
            },
        },
        Ok(SearchResponse::Payload(payload)) if payload.results.is_empty() => {
            FailureAction::Notice(FailureNotice::Empty)
        }
        Ok(SearchResponse::Payload(payload)) => FailureAction::Proceed(payload),
    }
}

/// Build the alternate-engine link offered when the retry tier is spent.
fn fallback_url(params: &PageParams, config: &DispatchConfig) -> String {
    let query = params.query.as_deref().unwrap_or_default();
    format!(
        "{}{}",
        config.fallback_engine_url,
        urlencoding::encode(query)
    )
}
