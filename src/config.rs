//! Dispatch configuration with sensible defaults.
//!
//! [`DispatchConfig`] controls where the backend aggregation API lives,
//! the defaults applied to incoming navigation parameters, and transport
//! behaviour. The defaults match a local nilch backend on port 5000.

use crate::error::DispatchError;
use url::Url;

/// Configuration for page-load dispatch.
///
/// Use [`Default::default()`] for sensible defaults, or construct with
/// field overrides for custom behaviour.
#[derive(Debug, Clone)]
pub struct DispatchConfig {
    /// Base URL of the backend aggregation API (no trailing path).
    pub api_base_url: String,
    /// Language tag applied when the navigation parameters carry none.
    pub default_language: String,
    /// Provider identifier applied when the navigation parameters carry none.
    pub default_engine: String,
    /// Base URL for the rate-limit fallback link; the percent-encoded query
    /// is appended verbatim.
    pub fallback_engine_url: String,
    /// HTTP request timeout in seconds.
    pub timeout_seconds: u64,
    /// Custom User-Agent string. If `None`, the fixed `nilch/1.0` agent
    /// is used.
    pub user_agent: Option<String>,
}

impl Default for DispatchConfig {
    fn default() -> Self {
        Self {
            api_base_url: "http://127.0.0.1:5000".into(),
            default_language: "en-GB".into(),
            default_engine: "bing".into(),
            fallback_engine_url: "https://duckduckgo.com/?q=".into(),
            timeout_seconds: 10,
            user_agent: None,
        }
    }
}

impl DispatchConfig {
    /// Validates this configuration, returning an error if any field is invalid.
    ///
    /// Checks:
    /// - `api_base_url` must be a parseable absolute URL
    /// - `fallback_engine_url` must not be empty
    /// - `default_language` and `default_engine` must not be empty
    /// - `timeout_seconds` must be greater than 0
    pub fn validate(&self) -> Result<(), DispatchError> {
        if Url::parse(&self.api_base_url).is_err() {
            return Err(DispatchError::Config(
                "api_base_url must be an absolute URL".into(),
            ));
        }
        if self.fallback_engine_url.is_empty() {
            return Err(DispatchError::Config(
                "fallback_engine_url must not be empty".into(),
            ));
        }
        if self.default_language.is_empty() {
            return Err(DispatchError::Config(
                "default_language must not be empty".into(),
            ));
        }
        if self.default_engine.is_empty() {
            return Err(DispatchError::Config(
                "default_engine must not be empty".into(),
            ));
        }
        if self.timeout_seconds == 0 {
            return Err(DispatchError::Config(
                "timeout_seconds must be greater than 0".into(),
            ));
        }
        Ok(())
    }
}
