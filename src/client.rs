//! Query router: builds backend requests, dispatches them, and
//! classifies the raw response.
//!
//! The backend replies with plain text: either one of two reserved
//! sentinel strings or a JSON payload. Classification compares the body
//! verbatim against the sentinels *before* attempting to parse, so the
//! sentinels can never be shadowed by a JSON document. Exactly one
//! network round trip happens per [`SearchClient::dispatch`] call — no
//! retries, no caching, no deduplication at this layer.

use crate::config::DispatchConfig;
use crate::error::{DispatchError, Result};
use crate::http;
use crate::params::PageParams;
use crate::types::{
    deserialize_infobox, Infobox, Modality, ResultList, SearchPayload, SearchRequest,
    SearchResponse,
};
use serde::Deserialize;

/// Reserved body signalling that the query parameter was empty or absent.
const SENTINEL_NO_QUERY: &str = "noquery";

/// Reserved body signalling an empty upstream result set.
const SENTINEL_NO_RESULTS: &str = "noresults";

/// The raw payload envelope, before results are shaped by modality.
#[derive(Debug, Deserialize)]
struct RawEnvelope {
    results: serde_json::Value,
    #[serde(default, deserialize_with = "deserialize_infobox")]
    infobox: Option<Infobox>,
}

/// HTTP client for the backend aggregation API.
pub struct SearchClient {
    client: reqwest::Client,
    config: DispatchConfig,
}

impl SearchClient {
    /// Create a client for the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`DispatchError::Config`] if the configuration is invalid,
    /// or [`DispatchError::Http`] if the HTTP client cannot be built.
    pub fn new(config: DispatchConfig) -> Result<Self> {
        config.validate()?;
        let client = http::build_client(&config)?;
        Ok(Self { client, config })
    }

    /// The configuration this client was built with.
    pub fn config(&self) -> &DispatchConfig {
        &self.config
    }

    /// Build a backend request from the current navigation parameters.
    ///
    /// Built fresh per navigation; nothing is persisted between calls.
    pub fn build_request(&self, params: &PageParams, modality: Modality) -> SearchRequest {
        SearchRequest {
            query: params.query.clone().unwrap_or_default(),
            safe: params.safe,
            page: params.page,
            language: params.language.clone(),
            engine: params.engine.clone(),
            modality,
        }
    }

    /// Issue the request and classify the response body.
    ///
    /// Sends a single GET to the modality's path with `q`, `safe`,
    /// `page`, `language`, `engine`, and — for video — the `videos=true`
    /// flag. The `q` parameter is omitted when no query was entered, so
    /// the backend answers with its `noquery` sentinel.
    ///
    /// # Errors
    ///
    /// Returns [`DispatchError::Http`] on transport failure and
    /// [`DispatchError::Parse`] if the body is neither a sentinel nor a
    /// well-formed payload. Neither is retried here; the failure handler
    /// decides what the page does next.
    pub async fn dispatch(&self, request: &SearchRequest) -> Result<SearchResponse> {
        let url = format!(
            "{}{}",
            self.config.api_base_url.trim_end_matches('/'),
            request.modality.api_path()
        );

        let mut query: Vec<(&str, String)> = Vec::with_capacity(6);
        if !request.query.is_empty() {
            query.push(("q", request.query.clone()));
        }
        query.push(("safe", request.safe.as_str().to_owned()));
        query.push(("page", request.page.to_string()));
        query.push(("language", request.language.clone()));
        query.push(("engine", request.engine.clone()));
        if request.modality == Modality::Video {
            query.push(("videos", "true".to_owned()));
        }

        tracing::trace!(modality = %request.modality, page = request.page, "dispatching backend request");

        let response = self
            .client
            .get(&url)
            .query(&query)
            .send()
            .await
            .map_err(|e| DispatchError::Http(format!("backend request failed: {e}")))?;

        let body = response
            .text()
            .await
            .map_err(|e| DispatchError::Http(format!("backend response read failed: {e}")))?;

        tracing::debug!(bytes = body.len(), "backend response received");

        classify_response(&body, request.modality)
    }
}

/// Classify a raw response body.
///
/// The two sentinel strings are compared verbatim against the whole body
/// before any parsing; only a non-sentinel body is treated as JSON. A
/// body that is neither is a transport-class [`DispatchError::Parse`].
pub fn classify_response(body: &str, modality: Modality) -> Result<SearchResponse> {
    match body {
        SENTINEL_NO_QUERY => Ok(SearchResponse::NoQuery),
        SENTINEL_NO_RESULTS => Ok(SearchResponse::NoResults),
        _ => parse_payload(body, modality),
    }
}

/// Parse a structured payload, shaping the results by modality.
fn parse_payload(body: &str, modality: Modality) -> Result<SearchResponse> {
    let envelope: RawEnvelope = serde_json::from_str(body)
        .map_err(|e| DispatchError::Parse(format!("malformed backend payload: {e}")))?;

    let results = match modality {
        Modality::Web => ResultList::Web(
            serde_json::from_value(envelope.results)
                .map_err(|e| DispatchError::Parse(format!("malformed web results: {e}")))?,
        ),
        Modality::Image => ResultList::Image(
            serde_json::from_value(envelope.results)
                .map_err(|e| DispatchError::Parse(format!("malformed image results: {e}")))?,
        ),
        Modality::Video => ResultList::Video(
            serde_json::from_value(envelope.results)
                .map_err(|e| DispatchError::Parse(format!("malformed video results: {e}")))?,
        ),
    };

    // Image responses carry no infobox on this contract; drop anything
    // the envelope happens to hold so the image page never renders one.
    let infobox = match modality {
        Modality::Image => None,
        Modality::Web | Modality::Video => envelope.infobox,
    };

    Ok(SearchResponse::Payload(SearchPayload { results, infobox }))
}

#[cfg(test)]
mod tests {
    use super::*;

    const WEB_PAYLOAD: &str = r#"{
        "results": [
            {"title": "Rust Programming Language", "href": "https://www.rust-lang.org/", "body": "Reliable and efficient software."},
            {"title": "The Book", "href": "https://doc.rust-lang.org/book/", "body": "An introduction to Rust."}
        ],
        "infobox": "null"
    }"#;

    const CALC_PAYLOAD: &str = r#"{
        "results": [{"title": "T", "href": "https://a.com", "body": ""}],
        "infobox": {"infotype": "calc", "equ": "2+2", "result": "4"}
    }"#;

    #[test]
    fn sentinel_noquery_classified() {
        let response = classify_response("noquery", Modality::Web).expect("classify");
        assert_eq!(response, SearchResponse::NoQuery);
    }

    #[test]
    fn sentinel_noresults_classified() {
        let response = classify_response("noresults", Modality::Web).expect("classify");
        assert_eq!(response, SearchResponse::NoResults);
    }

    #[test]
    fn sentinels_apply_to_every_modality() {
        for modality in Modality::all() {
            assert_eq!(
                classify_response("noquery", *modality).expect("classify"),
                SearchResponse::NoQuery
            );
            assert_eq!(
                classify_response("noresults", *modality).expect("classify"),
                SearchResponse::NoResults
            );
        }
    }

    #[test]
    fn sentinel_comparison_is_verbatim() {
        // Whitespace or casing variants are not sentinels; they fall
        // through to JSON parsing and fail there.
        assert!(classify_response(" noresults", Modality::Web).is_err());
        assert!(classify_response("NORESULTS", Modality::Web).is_err());
    }

    #[test]
    fn web_payload_parsed() {
        let response = classify_response(WEB_PAYLOAD, Modality::Web).expect("classify");
        let SearchResponse::Payload(payload) = response else {
            panic!("expected payload");
        };
        assert!(payload.infobox.is_none());
        let ResultList::Web(items) = payload.results else {
            panic!("expected web results");
        };
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].title, "Rust Programming Language");
    }

    #[test]
    fn string_null_infobox_is_none() {
        let response = classify_response(WEB_PAYLOAD, Modality::Web).expect("classify");
        let SearchResponse::Payload(payload) = response else {
            panic!("expected payload");
        };
        assert!(payload.infobox.is_none());
    }

    #[test]
    fn json_null_infobox_is_none() {
        let body = r#"{"results": [], "infobox": null}"#;
        let SearchResponse::Payload(payload) =
            classify_response(body, Modality::Web).expect("classify")
        else {
            panic!("expected payload");
        };
        assert!(payload.infobox.is_none());
    }

    #[test]
    fn absent_infobox_is_none() {
        let body = r#"{"results": []}"#;
        let SearchResponse::Payload(payload) =
            classify_response(body, Modality::Web).expect("classify")
        else {
            panic!("expected payload");
        };
        assert!(payload.infobox.is_none());
    }

    #[test]
    fn calc_infobox_parsed() {
        let SearchResponse::Payload(payload) =
            classify_response(CALC_PAYLOAD, Modality::Web).expect("classify")
        else {
            panic!("expected payload");
        };
        assert_eq!(
            payload.infobox,
            Some(Infobox::Calc {
                equation: "2+2".into(),
                result: "4".into()
            })
        );
    }

    #[test]
    fn unknown_infobox_tag_is_unrecognized() {
        let body = r#"{"results": [], "infobox": {"infotype": "stocks", "symbol": "RST"}}"#;
        let SearchResponse::Payload(payload) =
            classify_response(body, Modality::Web).expect("classify")
        else {
            panic!("expected payload");
        };
        assert_eq!(payload.infobox, Some(Infobox::Unrecognized));
    }

    #[test]
    fn image_payload_parsed_and_infobox_dropped() {
        let body = r#"{
            "results": [{"image": "https://cdn.example.com/a.jpg"}, {"image": "https://cdn.example.com/b.jpg"}],
            "infobox": {"infotype": "calc", "equ": "1", "result": "1"}
        }"#;
        let SearchResponse::Payload(payload) =
            classify_response(body, Modality::Image).expect("classify")
        else {
            panic!("expected payload");
        };
        assert!(payload.infobox.is_none());
        let ResultList::Image(items) = payload.results else {
            panic!("expected image results");
        };
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].image_url, "https://cdn.example.com/a.jpg");
    }

    #[test]
    fn video_payload_parsed() {
        let body = r#"{
            "results": [{"title": "Talk", "uploader": "conf", "publisher": "VideoSite",
                         "thumbnail": "https://i.example.com/t.jpg", "content": "https://v.example.com/1"}],
            "infobox": "null"
        }"#;
        let SearchResponse::Payload(payload) =
            classify_response(body, Modality::Video).expect("classify")
        else {
            panic!("expected payload");
        };
        let ResultList::Video(items) = payload.results else {
            panic!("expected video results");
        };
        assert_eq!(items[0].title.as_deref(), Some("Talk"));
    }

    #[test]
    fn malformed_body_is_parse_error() {
        let err = classify_response("<html>502 Bad Gateway</html>", Modality::Web).unwrap_err();
        assert!(err.to_string().starts_with("parse error"));
    }

    #[test]
    fn wrongly_shaped_results_is_parse_error() {
        // Image items where web items were requested.
        let body = r#"{"results": [{"image": "https://cdn.example.com/a.jpg"}], "infobox": "null"}"#;
        let err = classify_response(body, Modality::Web).unwrap_err();
        assert!(err.to_string().contains("web results"));
    }

    #[test]
    fn missing_results_key_is_parse_error() {
        let err = classify_response(r#"{"infobox": "null"}"#, Modality::Web).unwrap_err();
        assert!(err.to_string().starts_with("parse error"));
    }

    #[test]
    fn build_request_copies_params() {
        let config = DispatchConfig::default();
        let client = SearchClient::new(config.clone()).expect("client");
        let params = PageParams::from_pairs(
            [("q", "cats"), ("safe", "off"), ("page", "2"), ("engine", "brave")],
            &config,
        );
        let request = client.build_request(&params, Modality::Video);
        assert_eq!(request.query, "cats");
        assert_eq!(request.safe, crate::types::SafeMode::Off);
        assert_eq!(request.page, 2);
        assert_eq!(request.engine, "brave");
        assert_eq!(request.modality, Modality::Video);
    }

    #[test]
    fn invalid_config_rejected() {
        let config = DispatchConfig {
            api_base_url: String::new(),
            ..Default::default()
        };
        assert!(SearchClient::new(config).is_err());
    }

    // ── Transport tests against a local mock backend ────────────────────

    fn config_for(server: &mockito::ServerGuard) -> DispatchConfig {
        DispatchConfig {
            api_base_url: server.url(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn dispatch_parses_web_payload() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/api/search")
            .match_query(mockito::Matcher::UrlEncoded("q".into(), "rust".into()))
            .with_body(WEB_PAYLOAD)
            .create_async()
            .await;

        let config = config_for(&server);
        let client = SearchClient::new(config.clone()).expect("client");
        let params = PageParams::for_query("rust", &config);
        let request = client.build_request(&params, Modality::Web);

        let response = client.dispatch(&request).await.expect("dispatch");
        let SearchResponse::Payload(payload) = response else {
            panic!("expected payload");
        };
        assert_eq!(payload.results.len(), 2);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn dispatch_classifies_sentinel_body() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/api/search")
            .match_query(mockito::Matcher::Any)
            .with_body("noresults")
            .create_async()
            .await;

        let config = config_for(&server);
        let client = SearchClient::new(config.clone()).expect("client");
        let params = PageParams::for_query("rust", &config);
        let request = client.build_request(&params, Modality::Web);

        let response = client.dispatch(&request).await.expect("dispatch");
        assert_eq!(response, SearchResponse::NoResults);
    }

    #[tokio::test]
    async fn dispatch_sends_video_flag() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/api/search")
            .match_query(mockito::Matcher::UrlEncoded("videos".into(), "true".into()))
            .with_body(r#"{"results": [], "infobox": "null"}"#)
            .create_async()
            .await;

        let config = config_for(&server);
        let client = SearchClient::new(config.clone()).expect("client");
        let params = PageParams::for_query("rust talks", &config);
        let request = client.build_request(&params, Modality::Video);

        client.dispatch(&request).await.expect("dispatch");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn dispatch_uses_image_path() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/api/images")
            .match_query(mockito::Matcher::Any)
            .with_body(r#"{"results": [], "infobox": "null"}"#)
            .create_async()
            .await;

        let config = config_for(&server);
        let client = SearchClient::new(config.clone()).expect("client");
        let params = PageParams::for_query("cats", &config);
        let request = client.build_request(&params, Modality::Image);

        client.dispatch(&request).await.expect("dispatch");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn dispatch_without_query_classifies_noquery() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/api/search")
            .match_query(mockito::Matcher::Any)
            .with_body("noquery")
            .create_async()
            .await;

        let config = config_for(&server);
        let client = SearchClient::new(config.clone()).expect("client");
        let params = PageParams::from_pairs::<_, &str, &str>([], &config);
        let request = client.build_request(&params, Modality::Web);

        let response = client.dispatch(&request).await.expect("dispatch");
        assert_eq!(response, SearchResponse::NoQuery);
    }
}
