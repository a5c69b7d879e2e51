// SPDX-FileCopyrightText: 2026 Veridian Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Wire shapes for the non-interactive login body and the Keystone v2.0
//! identity API.
//!
//! Keystone's JSON is loosely typed: optional fields and nested objects.
//! Responses are decoded into explicit intermediate structs and validated
//! once at the boundary, so a shape violation surfaces as a protocol error
//! rather than propagating partial data.

use serde::{Deserialize, Serialize};

use crate::client::KeystoneError;

/// Inbound login request body: `{"login": {"id": "<token>"}}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoginBody {
    pub login: LoginToken,
}

/// The opaque token submitted by the caller.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoginToken {
    pub id: String,
}

/// Verified result of a token-authentication call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthResult {
    /// Backend-issued session token for follow-up calls.
    pub token: String,
    /// Stable backend user identifier.
    pub user_id: String,
    /// Backend login name.
    pub username: String,
}

/// One tenant membership returned for an authenticated session.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Tenant {
    pub id: String,
    pub name: String,
}

// --- Keystone v2.0 request/response intermediates ---

/// Body of `POST /v2.0/tokens`: `{"auth": {"token": {"id": "<token>"}}}`.
#[derive(Debug, Serialize)]
pub(crate) struct TokensRequest<'a> {
    pub auth: AuthPayload<'a>,
}

#[derive(Debug, Serialize)]
pub(crate) struct AuthPayload<'a> {
    pub token: TokenRef<'a>,
}

#[derive(Debug, Serialize)]
pub(crate) struct TokenRef<'a> {
    pub id: &'a str,
}

impl<'a> TokensRequest<'a> {
    pub fn new(token_id: &'a str) -> Self {
        Self {
            auth: AuthPayload {
                token: TokenRef { id: token_id },
            },
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct TokensResponse {
    pub access: Option<Access>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Access {
    pub token: Option<AccessToken>,
    pub user: Option<AccessUser>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct AccessToken {
    pub id: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct AccessUser {
    pub id: Option<String>,
    pub username: Option<String>,
}

impl TokensResponse {
    /// Validates the loosely-typed response into an [`AuthResult`].
    pub fn into_auth_result(self) -> Result<AuthResult, KeystoneError> {
        let access = self.access.ok_or_else(|| missing("access"))?;
        let token = access
            .token
            .and_then(|t| t.id)
            .filter(|id| !id.is_empty())
            .ok_or_else(|| missing("access.token.id"))?;
        let user = access.user.ok_or_else(|| missing("access.user"))?;
        let user_id = user
            .id
            .filter(|id| !id.is_empty())
            .ok_or_else(|| missing("access.user.id"))?;
        let username = user
            .username
            .filter(|name| !name.is_empty())
            .ok_or_else(|| missing("access.user.username"))?;
        Ok(AuthResult {
            token,
            user_id,
            username,
        })
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct TenantsResponse {
    pub tenants: Option<Vec<Tenant>>,
}

fn missing(field: &str) -> KeystoneError {
    KeystoneError::Protocol {
        message: format!("missing {field} in keystone response"),
    }
}
