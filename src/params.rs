//! Navigation-parameter state.
//!
//! [`PageParams`] is the explicit, serializable value behind the page's
//! URL parameters (`q`, `safe`, `page`, `lang`, `engine`, `failed`). It
//! is constructed at page load, discarded at navigation, and round-trips
//! through [`PageParams::to_query_string`] so that re-navigation targets
//! and pagination links are derived rather than concatenated ad hoc.
//!
//! The one-shot `failed` marker is how the retry tier survives a full
//! page reload: the marker travels in the navigation target itself, not
//! in process memory.

use crate::config::DispatchConfig;
use crate::types::SafeMode;

/// The request state carried by a page's navigation parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageParams {
    /// The raw query string, if one was entered.
    pub query: Option<String>,
    /// Safe-search mode (`strict` unless explicitly `off`).
    pub safe: SafeMode,
    /// Zero-based page index.
    pub page: u32,
    /// Locale tag, e.g. `en-GB`.
    pub language: String,
    /// Provider identifier.
    pub engine: String,
    /// One-shot retry marker set by the failure handler before its single
    /// re-navigation.
    pub failed: bool,
}

impl PageParams {
    /// Build params for a fresh query with configured defaults.
    pub fn for_query(query: impl Into<String>, config: &DispatchConfig) -> Self {
        Self {
            query: Some(query.into()),
            safe: SafeMode::Strict,
            page: 0,
            language: config.default_language.clone(),
            engine: config.default_engine.clone(),
            failed: false,
        }
    }

    /// Parse navigation parameters from `(key, value)` pairs.
    ///
    /// Unknown keys are ignored. Missing keys fall back to the backend's
    /// historical defaults: `safe=strict`, the configured language and
    /// engine, page 0. A `page` value that does not parse as a
    /// non-negative integer also falls back to 0.
    pub fn from_pairs<I, K, V>(pairs: I, config: &DispatchConfig) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut params = Self {
            query: None,
            safe: SafeMode::Strict,
            page: 0,
            language: config.default_language.clone(),
            engine: config.default_engine.clone(),
            failed: false,
        };

        for (key, value) in pairs {
            let value = value.as_ref();
            match key.as_ref() {
                "q" => params.query = Some(value.to_string()),
                "safe" => params.safe = SafeMode::from_param(value),
                "page" => params.page = value.parse().unwrap_or(0),
                "lang" => params.language = value.to_string(),
                "engine" => params.engine = value.to_string(),
                "failed" => params.failed = value == "true",
                _ => {}
            }
        }

        params
    }

    /// Parse navigation parameters from a full page URL.
    pub fn from_url(url: &url::Url, config: &DispatchConfig) -> Self {
        Self::from_pairs(url.query_pairs(), config)
    }

    /// Serialize back to a canonical query string.
    ///
    /// Every parameter is emitted explicitly (the `failed` marker only
    /// when set), so links built from this string preserve the complete
    /// request state.
    pub fn to_query_string(&self) -> String {
        let mut parts: Vec<String> = Vec::with_capacity(6);
        if let Some(query) = &self.query {
            parts.push(format!("q={}", urlencoding::encode(query)));
        }
        parts.push(format!("safe={}", self.safe.as_str()));
        parts.push(format!("page={}", self.page));
        parts.push(format!("lang={}", urlencoding::encode(&self.language)));
        parts.push(format!("engine={}", urlencoding::encode(&self.engine)));
        if self.failed {
            parts.push("failed=true".into());
        }
        parts.join("&")
    }

    /// The same state with a different page index.
    pub fn with_page(&self, page: u32) -> Self {
        Self {
            page,
            ..self.clone()
        }
    }

    /// The same state with the one-shot retry marker set.
    pub fn with_retry_marker(&self) -> Self {
        Self {
            failed: true,
            ..self.clone()
        }
    }
}
