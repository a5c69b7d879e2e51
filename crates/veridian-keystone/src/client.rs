// SPDX-FileCopyrightText: 2026 Veridian Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP client for the Keystone v2.0 identity API.
//!
//! Wraps the two calls the token adapter needs: token authentication and
//! tenant enumeration. The client keeps no state between calls and never
//! retries; retry policy belongs to the surrounding service.

use std::time::Duration;

use thiserror::Error;
use tracing::debug;

use veridian_core::VeridianError;

use crate::types::{AuthResult, Tenant, TenantsResponse, TokensRequest, TokensResponse};

/// Request timeout for both backend calls.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// A failure talking to the Keystone backend.
#[derive(Debug, Error)]
pub enum KeystoneError {
    /// The backend rejected the submitted token.
    #[error("invalid credentials")]
    InvalidCredentials,

    /// Transport-level failure: connection refused, timeout, broken body.
    #[error("cannot reach keystone: {source}")]
    Transport {
        #[source]
        source: reqwest::Error,
    },

    /// The backend answered, but not in the expected shape.
    #[error("invalid keystone response: {message}")]
    Protocol { message: String },
}

/// HTTP client for one configured Keystone backend.
#[derive(Debug, Clone)]
pub struct KeystoneClient {
    http: reqwest::Client,
    base_url: String,
}

impl KeystoneClient {
    /// Creates a client for the given backend base URL.
    pub fn new(base_url: &str) -> Result<Self, VeridianError> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| VeridianError::Provider {
                message: format!("failed to build HTTP client: {e}"),
                source: Some(Box::new(e)),
            })?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Authenticates an opaque token with `POST /v2.0/tokens`.
    ///
    /// A 401 or 403 from the backend means the token was rejected; any
    /// other non-success status or unparsable body is a protocol error.
    pub async fn authenticate(&self, token_id: &str) -> Result<AuthResult, KeystoneError> {
        let url = format!("{}/v2.0/tokens", self.base_url);
        let response = self
            .http
            .post(&url)
            .json(&TokensRequest::new(token_id))
            .send()
            .await
            .map_err(|source| KeystoneError::Transport { source })?;

        let status = response.status();
        debug!(status = %status, "keystone tokens response");

        if status == reqwest::StatusCode::UNAUTHORIZED
            || status == reqwest::StatusCode::FORBIDDEN
        {
            return Err(KeystoneError::InvalidCredentials);
        }
        let body = read_success_body(response, status).await?;
        let parsed: TokensResponse =
            serde_json::from_str(&body).map_err(|e| KeystoneError::Protocol {
                message: format!("cannot parse tokens response: {e}"),
            })?;
        parsed.into_auth_result()
    }

    /// Enumerates tenants visible to an authenticated session with
    /// `GET /v2.0/tenants`.
    ///
    /// An empty tenant list is a valid result, not an error.
    pub async fn list_tenants(&self, auth_token: &str) -> Result<Vec<Tenant>, KeystoneError> {
        let url = format!("{}/v2.0/tenants", self.base_url);
        let response = self
            .http
            .get(&url)
            .header("X-Auth-Token", auth_token)
            .send()
            .await
            .map_err(|source| KeystoneError::Transport { source })?;

        let status = response.status();
        debug!(status = %status, "keystone tenants response");

        if status == reqwest::StatusCode::UNAUTHORIZED
            || status == reqwest::StatusCode::FORBIDDEN
        {
            return Err(KeystoneError::InvalidCredentials);
        }
        let body = read_success_body(response, status).await?;
        let parsed: TenantsResponse =
            serde_json::from_str(&body).map_err(|e| KeystoneError::Protocol {
                message: format!("cannot parse tenants response: {e}"),
            })?;
        Ok(parsed.tenants.unwrap_or_default())
    }
}

/// Reads the body of a response, mapping non-success statuses to protocol
/// errors carrying the status and body text.
async fn read_success_body(
    response: reqwest::Response,
    status: reqwest::StatusCode,
) -> Result<String, KeystoneError> {
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(KeystoneError::Protocol {
            message: format!("keystone returned {status}: {body}"),
        });
    }
    response
        .text()
        .await
        .map_err(|source| KeystoneError::Transport { source })
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn access_body() -> serde_json::Value {
        serde_json::json!({
            "access": {
                "token": {"id": "s-789"},
                "user": {"id": "abc", "username": "testuser"},
            },
        })
    }

    #[tokio::test]
    async fn authenticate_success() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v2.0/tokens"))
            .and(body_json(
                serde_json::json!({"auth": {"token": {"id": "789"}}}),
            ))
            .respond_with(ResponseTemplate::new(200).set_body_json(access_body()))
            .mount(&server)
            .await;

        let client = KeystoneClient::new(&server.uri()).unwrap();
        let auth = client.authenticate("789").await.unwrap();
        assert_eq!(auth.token, "s-789");
        assert_eq!(auth.user_id, "abc");
        assert_eq!(auth.username, "testuser");
    }

    #[tokio::test]
    async fn authenticate_rejected_token_is_invalid_credentials() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v2.0/tokens"))
            .respond_with(ResponseTemplate::new(401))
            .mount(&server)
            .await;

        let client = KeystoneClient::new(&server.uri()).unwrap();
        let err = client.authenticate("012").await.unwrap_err();
        assert!(matches!(err, KeystoneError::InvalidCredentials));
        assert_eq!(err.to_string(), "invalid credentials");
    }

    #[tokio::test]
    async fn authenticate_unexpected_status_is_protocol_error() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v2.0/tokens"))
            .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
            .mount(&server)
            .await;

        let client = KeystoneClient::new(&server.uri()).unwrap();
        let err = client.authenticate("789").await.unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("500") && msg.contains("boom"), "got: {msg}");
    }

    #[tokio::test]
    async fn authenticate_malformed_body_is_protocol_error() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v2.0/tokens"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let client = KeystoneClient::new(&server.uri()).unwrap();
        let err = client.authenticate("789").await.unwrap_err();
        assert!(
            err.to_string().contains("cannot parse tokens response"),
            "got: {err}"
        );
    }

    #[tokio::test]
    async fn authenticate_unreachable_backend_is_transport_error() {
        // Nothing listens on port 1.
        let client = KeystoneClient::new("http://127.0.0.1:1").unwrap();
        let err = client.authenticate("789").await.unwrap_err();
        assert!(matches!(err, KeystoneError::Transport { .. }), "got: {err}");
        assert!(err.to_string().starts_with("cannot reach keystone:"));
    }

    #[tokio::test]
    async fn list_tenants_sends_session_token() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v2.0/tenants"))
            .and(header("X-Auth-Token", "s-789"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "tenants": [
                    {"id": "abc", "name": "abc_project"},
                    {"id": "def", "name": "def_project"},
                ],
            })))
            .mount(&server)
            .await;

        let client = KeystoneClient::new(&server.uri()).unwrap();
        let tenants = client.list_tenants("s-789").await.unwrap();
        assert_eq!(tenants.len(), 2);
        assert_eq!(tenants[0].name, "abc_project");
    }

    #[tokio::test]
    async fn list_tenants_empty_is_valid() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v2.0/tenants"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({"tenants": []})),
            )
            .mount(&server)
            .await;

        let client = KeystoneClient::new(&server.uri()).unwrap();
        let tenants = client.list_tenants("s-789").await.unwrap();
        assert!(tenants.is_empty());
    }

    #[tokio::test]
    async fn list_tenants_expired_session_is_invalid_credentials() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v2.0/tenants"))
            .respond_with(ResponseTemplate::new(401))
            .mount(&server)
            .await;

        let client = KeystoneClient::new(&server.uri()).unwrap();
        let err = client.list_tenants("stale").await.unwrap_err();
        assert!(matches!(err, KeystoneError::InvalidCredentials));
    }

    #[test]
    fn base_url_trailing_slash_is_trimmed() {
        let client = KeystoneClient::new("https://keystone.example.com/").unwrap();
        assert_eq!(client.base_url, "https://keystone.example.com");
    }
}
