//! Fitbit API call executor.
//!
//! Every tool funnels through [`FitbitApi::call`]: fetch the credential from
//! the injected provider, issue one authenticated GET against the Fitbit Web
//! API, and wrap the raw JSON body into the uniform response envelope. The
//! remote payload is passed through verbatim - no reshaping, no validation.
//!
//! A single failed attempt is terminal: there are no retries, no backoff and
//! no caching. Failures propagate to the caller as [`ToolError`] values.

use std::sync::Arc;

use reqwest::StatusCode;
use rmcp::model::{CallToolResult, Content};
use tracing::{debug, warn};

use super::error::ToolError;
use crate::core::config::ApiConfig;
use crate::domains::auth::AccessTokenProvider;

/// Maximum number of remote error body characters carried into messages.
const ERROR_BODY_SNIPPET_LEN: usize = 200;

/// Executor for authenticated Fitbit Web API calls.
///
/// One instance is shared by every registered tool. It owns the HTTP client
/// and the injected token provider; per-call state (endpoint, error context)
/// is constructed fresh by each tool invocation and discarded afterwards.
pub struct FitbitApi {
    client: reqwest::Client,
    base_url: String,
    tokens: Arc<dyn AccessTokenProvider>,
}

impl FitbitApi {
    /// Create a new executor against the configured API base.
    pub fn new(config: &ApiConfig, tokens: Arc<dyn AccessTokenProvider>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            tokens,
        }
    }

    /// Absolute URL for a relative resource endpoint.
    ///
    /// The endpoint is treated as an opaque path built by the calling tool,
    /// e.g. `hrv/date/2023-01-15.json`.
    pub fn endpoint_url(&self, endpoint: &str) -> String {
        format!("{}/{}", self.base_url, endpoint.trim_start_matches('/'))
    }

    /// Perform one authenticated call and normalize the outcome.
    ///
    /// `error_context` is a human-readable label for the logical operation
    /// (e.g. "HRV data for 2023-01-15"); it appears in every failure message
    /// so callers can identify what failed without inspecting the endpoint.
    pub async fn call(
        &self,
        endpoint: &str,
        error_context: &str,
    ) -> Result<CallToolResult, ToolError> {
        let Some(token) = self.tokens.fetch_token().await else {
            warn!("Rejecting call to {}: no access token", endpoint);
            return Err(ToolError::NoCredential);
        };

        let url = self.endpoint_url(endpoint);
        debug!("GET {}", url);

        let response = self
            .client
            .get(&url)
            .bearer_auth(&token)
            .send()
            .await
            .map_err(|e| ToolError::api(error_context, e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!("Fitbit API returned {} for {}", status, url);
            return Err(ToolError::api(error_context, http_failure_reason(status, &body)));
        }

        let payload: serde_json::Value =
            response
                .json()
                .await
                .map_err(|source| ToolError::MalformedResponse {
                    context: error_context.to_string(),
                    source,
                })?;

        response_envelope(&payload)
    }
}

/// Wrap a raw remote payload into the uniform response envelope.
///
/// The envelope always carries exactly one text element holding the compact
/// serialization of the payload.
pub fn response_envelope(payload: &serde_json::Value) -> Result<CallToolResult, ToolError> {
    let text = serde_json::to_string(payload).map_err(|e| ToolError::internal(e.to_string()))?;
    Ok(CallToolResult::success(vec![Content::text(text)]))
}

/// Human-readable reason for a non-2xx response.
fn http_failure_reason(status: StatusCode, body: &str) -> String {
    let body = body.trim();
    if body.is_empty() {
        format!("Fitbit API returned HTTP {}", status.as_u16())
    } else {
        let snippet: String = body.chars().take(ERROR_BODY_SNIPPET_LEN).collect();
        format!("Fitbit API returned HTTP {}: {}", status.as_u16(), snippet)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::auth::StaticTokenProvider;
    use rmcp::model::RawContent;
    use std::thread;
    use tiny_http::{Header, Response, Server};

    fn api_config(base_url: &str) -> ApiConfig {
        ApiConfig {
            base_url: base_url.to_string(),
        }
    }

    fn api_with_token(base_url: &str, token: &str) -> FitbitApi {
        FitbitApi::new(
            &api_config(base_url),
            Arc::new(StaticTokenProvider::new(token)),
        )
    }

    /// Serve exactly one request with the given status and body.
    fn serve_once(status: u16, body: &'static str) -> String {
        let server = Server::http("127.0.0.1:0").expect("http server");
        let addr = server.server_addr().to_ip().expect("ip addr");

        thread::spawn(move || {
            if let Ok(request) = server.recv() {
                let has_bearer = request.headers().iter().any(|h| {
                    h.field.equiv("Authorization") && h.value.as_str().starts_with("Bearer ")
                });
                let (status, body) = if has_bearer {
                    (status, body)
                } else {
                    (401, r#"{"errors":[{"errorType":"invalid_token"}]}"#)
                };
                let response = Response::from_string(body)
                    .with_status_code(status)
                    .with_header(
                        Header::from_bytes("Content-Type", "application/json").unwrap(),
                    );
                let _ = request.respond(response);
            }
        });

        format!("http://{}", addr)
    }

    fn envelope_text(result: &CallToolResult) -> &str {
        assert_eq!(result.content.len(), 1);
        match &result.content[0].raw {
            RawContent::Text(text) => &text.text,
            other => panic!("expected text content, got {:?}", other),
        }
    }

    #[test]
    fn test_endpoint_url_joins_relative_paths() {
        let api = api_with_token("https://api.fitbit.com/1/user/-", "t");
        assert_eq!(
            api.endpoint_url("hrv/date/2023-01-15.json"),
            "https://api.fitbit.com/1/user/-/hrv/date/2023-01-15.json"
        );
        assert_eq!(
            api.endpoint_url("/profile.json"),
            "https://api.fitbit.com/1/user/-/profile.json"
        );
    }

    #[tokio::test]
    async fn test_missing_token_rejects_without_network() {
        // Unroutable base: any network attempt would surface as an Api error,
        // so observing NoCredential proves the remote was never contacted.
        let api = FitbitApi::new(
            &api_config("http://127.0.0.1:1"),
            Arc::new(StaticTokenProvider::empty()),
        );

        let err = api
            .call("hrv/date/2023-01-15.json", "HRV data for 2023-01-15")
            .await
            .unwrap_err();

        assert!(matches!(err, ToolError::NoCredential));
        assert_eq!(err.to_string(), "No access token available");
    }

    #[tokio::test]
    async fn test_success_passes_payload_through_verbatim() {
        let raw =
            r#"{"hrv":[{"dateTime":"2023-01-15","value":{"dailyRmssd":35.2,"deepRmssd":42.1}}]}"#;
        let base = serve_once(200, raw);
        let api = api_with_token(&base, "test-token");

        let result = api
            .call("hrv/date/2023-01-15.json", "HRV data for 2023-01-15")
            .await
            .unwrap();

        let expected: serde_json::Value = serde_json::from_str(raw).unwrap();
        assert_eq!(
            envelope_text(&result),
            serde_json::to_string(&expected).unwrap()
        );
    }

    #[tokio::test]
    async fn test_http_error_embeds_context() {
        let base = serve_once(500, r#"{"errors":[{"errorType":"server_error"}]}"#);
        let api = api_with_token(&base, "test-token");

        let err = api
            .call(
                "hrv/date/2023-01-01/2023-01-07.json",
                "HRV data from 2023-01-01 to 2023-01-07",
            )
            .await
            .unwrap_err();

        assert!(matches!(err, ToolError::Api { .. }));
        assert!(
            err.to_string()
                .contains("HRV data from 2023-01-01 to 2023-01-07")
        );
    }

    #[tokio::test]
    async fn test_malformed_body_is_rejected() {
        let base = serve_once(200, "<html>not json</html>");
        let api = api_with_token(&base, "test-token");

        let err = api
            .call("profile.json", "user profile")
            .await
            .unwrap_err();

        assert!(matches!(err, ToolError::MalformedResponse { .. }));
        assert!(err.to_string().contains("user profile"));
    }

    #[tokio::test]
    async fn test_transport_failure_embeds_context() {
        // Nothing listens here; the connect error becomes the reason.
        let api = api_with_token("http://127.0.0.1:1", "test-token");

        let err = api
            .call("sleep/date/2023-01-15.json", "sleep data for 2023-01-15")
            .await
            .unwrap_err();

        assert!(matches!(err, ToolError::Api { .. }));
        assert!(err.to_string().starts_with("Failed to fetch sleep data for 2023-01-15:"));
    }

    #[test]
    fn test_envelope_is_single_compact_text_element() {
        let payload = serde_json::json!({"weight": [{"date": "2023-01-15", "weight": 70.5}]});
        let result = response_envelope(&payload).unwrap();
        assert_eq!(
            envelope_text(&result),
            r#"{"weight":[{"date":"2023-01-15","weight":70.5}]}"#
        );
    }
}
