//! Core wire and data types for backend dispatch.
//!
//! The wire field names follow the backend aggregation API exactly
//! (`href`/`body` for web hits, `equ`/`result` for calculator infoboxes,
//! `infotype: "wikipedia"` for encyclopedia summaries, and so on), so the
//! serde renames here are the single source of truth for the contract.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// The three result kinds, each with its own request shape and renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Modality {
    /// Ranked web results with snippets and an optional infobox.
    Web,
    /// Image thumbnails, rendered optimistically.
    Image,
    /// Video results with uploader/publisher metadata.
    Video,
}

impl Modality {
    /// Returns the human-readable name of this modality.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Web => "web",
            Self::Image => "image",
            Self::Video => "video",
        }
    }

    /// Returns the backend path this modality dispatches to.
    ///
    /// Web and image use distinct paths; video reuses the web path and
    /// is distinguished by the `videos=true` request flag.
    pub fn api_path(&self) -> &'static str {
        match self {
            Self::Web | Self::Video => "/api/search",
            Self::Image => "/api/images",
        }
    }

    /// Returns all modality variants.
    pub fn all() -> &'static [Modality] {
        &[Self::Web, Self::Image, Self::Video]
    }
}

impl fmt::Display for Modality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Safe-search filtering mode, as sent on the wire.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SafeMode {
    /// Strict filtering (the backend default).
    #[default]
    Strict,
    /// Filtering disabled.
    Off,
}

impl SafeMode {
    /// Returns the wire value for this mode.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Strict => "strict",
            Self::Off => "off",
        }
    }

    /// Parses a navigation parameter value; anything other than `off`
    /// keeps the strict default.
    pub fn from_param(value: &str) -> Self {
        if value == "off" {
            Self::Off
        } else {
            Self::Strict
        }
    }
}

impl fmt::Display for SafeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A backend request, built fresh per navigation and never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    /// The user's query string.
    pub query: String,
    /// Safe-search mode.
    pub safe: SafeMode,
    /// Zero-based page index.
    pub page: u32,
    /// Locale tag, e.g. `en-GB`.
    pub language: String,
    /// Provider identifier the backend should aggregate from.
    pub engine: String,
    /// Which result kind is being requested.
    pub modality: Modality,
}

/// A single web search hit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WebResult {
    /// Page title.
    pub title: String,
    /// Absolute URL of the hit.
    pub href: String,
    /// Text snippet summarising the page.
    #[serde(default)]
    pub body: String,
    /// Page age as an ISO-8601 timestamp, when the provider reports one.
    #[serde(default)]
    pub page_age: Option<String>,
}

/// A single image search hit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageResult {
    /// URL of the full-size image.
    #[serde(rename = "image")]
    pub image_url: String,
}

/// A single video search hit. Every field is optional on the wire; the
/// renderer substitutes fixed fallbacks for missing text fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VideoResult {
    /// Video title.
    #[serde(default)]
    pub title: Option<String>,
    /// Channel or account that uploaded the video.
    #[serde(default)]
    pub uploader: Option<String>,
    /// Hosting platform name.
    #[serde(default)]
    pub publisher: Option<String>,
    /// Thumbnail image URL.
    #[serde(default, rename = "thumbnail")]
    pub thumbnail_url: Option<String>,
    /// URL of the watch page.
    #[serde(default, rename = "content")]
    pub content_url: Option<String>,
}

/// Instant-answer infobox, discriminated by the wire tag `infotype`.
///
/// This is a closed union: tags the frontend does not recognise map to
/// [`Infobox::Unrecognized`], which renders nothing. Matching stays
/// exhaustive, so adding a variant is a compile-visible change.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "infotype")]
pub enum Infobox {
    /// Solved arithmetic expression.
    #[serde(rename = "calc")]
    Calc {
        /// The normalised equation that was evaluated.
        #[serde(rename = "equ")]
        equation: String,
        /// The evaluation result, already stringified by the backend.
        result: String,
    },
    /// Dictionary definition.
    #[serde(rename = "definition")]
    Definition {
        /// The word that was defined.
        word: String,
        /// Part of speech, e.g. `noun`.
        #[serde(default, rename = "type")]
        part_of_speech: Option<String>,
        /// Definition body. May contain provider markup; escaped at render.
        #[serde(default, rename = "definition")]
        definition_html: Option<String>,
        /// Link to the full dictionary entry.
        #[serde(rename = "url")]
        source_url: String,
    },
    /// Encyclopedia article summary.
    #[serde(rename = "wikipedia")]
    Encyclopedia {
        /// Article title.
        title: String,
        /// Summary extract. May contain provider markup; escaped at render.
        #[serde(default, rename = "info")]
        summary_html: Option<String>,
        /// Link to the full article.
        #[serde(default, rename = "url")]
        source_url: Option<String>,
    },
    /// Any `infotype` this frontend does not know. Renders nothing.
    #[serde(other)]
    Unrecognized,
}

/// A classified backend response.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchResponse {
    /// The backend reported that the query parameter was empty or absent.
    NoQuery,
    /// The backend reported an empty upstream result set.
    NoResults,
    /// A structured payload was returned.
    Payload(SearchPayload),
}

/// The structured payload carried by a successful response.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchPayload {
    /// The result items, shaped by the requested modality.
    pub results: ResultList,
    /// The infobox, if the backend resolved one for this query.
    pub infobox: Option<Infobox>,
}

/// Modality-shaped result items.
#[derive(Debug, Clone, PartialEq)]
pub enum ResultList {
    /// Web hits.
    Web(Vec<WebResult>),
    /// Image hits.
    Image(Vec<ImageResult>),
    /// Video hits.
    Video(Vec<VideoResult>),
}

impl ResultList {
    /// Number of items in the list.
    pub fn len(&self) -> usize {
        match self {
            Self::Web(items) => items.len(),
            Self::Image(items) => items.len(),
            Self::Video(items) => items.len(),
        }
    }

    /// Whether the list holds no items.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Deserialize the payload `infobox` field.
///
/// The backend uses the literal string `"null"` as an alternate null
/// representation, in addition to JSON `null` and plain absence; all
/// three decode to `None`.
pub(crate) fn deserialize_infobox<'de, D>(deserializer: D) -> Result<Option<Infobox>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Null => Ok(None),
        serde_json::Value::String(_) => Ok(None),
        other => Infobox::deserialize(other)
            .map(Some)
            .map_err(serde::de::Error::custom),
    }
}
