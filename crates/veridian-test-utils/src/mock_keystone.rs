// SPDX-FileCopyrightText: 2026 Veridian Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Wiremock-backed fake Keystone backend.
//!
//! Serves the two v2.0 endpoints the token adapter exercises: token
//! authentication and tenant enumeration. Known tokens are configured as a
//! table of users; anything else is rejected with 401 the way a real
//! Keystone rejects an invalid token.

use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// One user the fake backend will authenticate.
#[derive(Debug, Clone)]
pub struct MockUser {
    /// The opaque token id submitted by the caller.
    pub token_id: String,
    /// The session token issued on successful authentication.
    pub session_token: String,
    /// Backend user identifier.
    pub user_id: String,
    /// Backend login name.
    pub username: String,
}

/// One tenant visible to every authenticated session.
#[derive(Debug, Clone)]
pub struct MockTenant {
    pub id: String,
    pub name: String,
}

impl MockTenant {
    pub fn new(id: &str, name: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
        }
    }
}

/// An in-process fake Keystone server.
pub struct MockKeystone {
    server: MockServer,
}

impl MockKeystone {
    /// Start a fake backend that authenticates `users` and reports `tenants`
    /// for every authenticated session.
    pub async fn start(users: &[MockUser], tenants: &[MockTenant]) -> Self {
        let server = MockServer::start().await;

        let tenant_body = json!({
            "tenants": tenants
                .iter()
                .map(|t| json!({"id": t.id, "name": t.name}))
                .collect::<Vec<_>>(),
        });

        for user in users {
            Mock::given(method("POST"))
                .and(path("/v2.0/tokens"))
                .and(body_json(json!({
                    "auth": {"token": {"id": user.token_id}},
                })))
                .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                    "access": {
                        "token": {"id": user.session_token},
                        "user": {"id": user.user_id, "username": user.username},
                    },
                })))
                .mount(&server)
                .await;

            Mock::given(method("GET"))
                .and(path("/v2.0/tenants"))
                .and(header("X-Auth-Token", user.session_token.as_str()))
                .respond_with(ResponseTemplate::new(200).set_body_json(&tenant_body))
                .mount(&server)
                .await;
        }

        // Unknown token or session token: rejected. Mounted last so the
        // per-user mocks above match first.
        Mock::given(method("POST"))
            .and(path("/v2.0/tokens"))
            .respond_with(ResponseTemplate::new(401).set_body_json(json!({
                "error": {"code": 401, "title": "Unauthorized", "message": "The request you have made requires authentication."},
            })))
            .mount(&server)
            .await;

        Mock::given(method("GET"))
            .and(path("/v2.0/tenants"))
            .respond_with(ResponseTemplate::new(401).set_body_json(json!({
                "error": {"code": 401, "title": "Unauthorized", "message": "The request you have made requires authentication."},
            })))
            .mount(&server)
            .await;

        Self { server }
    }

    /// Base URL of the fake backend.
    pub fn uri(&self) -> String {
        self.server.uri()
    }

    /// Number of requests received so far.
    pub async fn request_count(&self) -> usize {
        self.server
            .received_requests()
            .await
            .map(|requests| requests.len())
            .unwrap_or(0)
    }
}
