// SPDX-FileCopyrightText: 2026 Veridian Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the Veridian identity broker.

use thiserror::Error;

/// The primary error type used across Veridian framework operations.
///
/// These are construction-time and framework-level errors. Per-request login
/// failures have their own taxonomy in [`crate::login::LoginError`].
#[derive(Debug, Error)]
pub enum VeridianError {
    /// Configuration errors (invalid TOML, missing required fields, type mismatches).
    #[error("configuration error: {0}")]
    Config(String),

    /// No factory is registered for the requested provider type tag.
    #[error("unknown identity provider type: {type_tag}")]
    UnknownProviderType { type_tag: String },

    /// Provider construction or operation errors.
    #[error("provider error: {message}")]
    Provider {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Internal or unexpected errors.
    #[error("internal error: {0}")]
    Internal(String),
}
