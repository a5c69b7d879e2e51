// SPDX-FileCopyrightText: 2026 Veridian Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The per-request login contract between provider adapters and the host.
//!
//! A login attempt terminates in exactly one of three outcomes: success,
//! credential failure, or request failure. [`LoginError`] carries the two
//! failure shapes with stable, matchable messages; [`LoginContext`] is the
//! host's completion callback pair.

use async_trait::async_trait;
use thiserror::Error;

use crate::identity::NormalizedIdentity;

/// Caller-visible category of a failed login.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginFailureKind {
    /// The backend explicitly rejected the submitted credentials.
    Credential,
    /// The request was malformed, or the backend could not be reached or
    /// answered with an unexpected shape.
    Request,
}

/// A failed login attempt.
///
/// Messages are part of the contract: callers pattern-match on them in logs
/// and tests, so the `cannot unmarshal login request:` and `cannot log in:`
/// prefixes and the literal phrase `invalid credentials` must stay stable.
#[derive(Debug, Error)]
pub enum LoginError {
    /// The inbound request body could not be decoded, or the token field was
    /// missing. Raised before any network call is made.
    #[error("cannot unmarshal login request: {message}")]
    Decode { message: String },

    /// The backend rejected the submitted token.
    #[error("cannot log in: {message}")]
    InvalidCredentials { message: String },

    /// The backend could not be reached, timed out, or returned a response
    /// that does not match the expected shape.
    #[error("cannot log in: {message}")]
    Backend { message: String },
}

impl LoginError {
    /// The failure category reported to the host's failure callback.
    pub fn kind(&self) -> LoginFailureKind {
        match self {
            LoginError::InvalidCredentials { .. } => LoginFailureKind::Credential,
            LoginError::Decode { .. } | LoginError::Backend { .. } => LoginFailureKind::Request,
        }
    }
}

/// The host's login-completion callbacks.
///
/// A provider invokes exactly one of these per handled request. The identity
/// passed to [`login_success`](Self::login_success) is moved to the host;
/// the provider retains nothing.
#[async_trait]
pub trait LoginContext: Send + Sync {
    /// The login succeeded with the given normalized identity.
    async fn login_success(&self, identity: NormalizedIdentity);

    /// The login failed. The error's [`LoginError::kind`] distinguishes
    /// credential rejection from request-level failure.
    async fn login_failure(&self, error: &LoginError);
}
