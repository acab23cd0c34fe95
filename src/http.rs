//! Shared HTTP client construction for backend requests.
//!
//! Provides a configured [`reqwest::Client`] with the nilch User-Agent,
//! the configured timeout, and transparent response decompression. The
//! backend is first-party, so no scraping countermeasures (cookie jars,
//! User-Agent rotation) are needed.

use crate::config::DispatchConfig;
use crate::error::DispatchError;
use std::time::Duration;

/// User-Agent sent when the config does not override it.
pub const DEFAULT_USER_AGENT: &str = "nilch/1.0";

/// Build a [`reqwest::Client`] configured for backend dispatch.
///
/// # Errors
///
/// Returns [`DispatchError::Http`] if the client cannot be constructed.
pub fn build_client(config: &DispatchConfig) -> Result<reqwest::Client, DispatchError> {
    let ua = config
        .user_agent
        .clone()
        .unwrap_or_else(|| DEFAULT_USER_AGENT.to_owned());

    reqwest::Client::builder()
        .timeout(Duration::from_secs(config.timeout_seconds))
        .user_agent(ua)
        .redirect(reqwest::redirect::Policy::limited(10))
        .build()
        .map_err(|e| DispatchError::Http(format!("failed to build HTTP client: {e}")))
}
