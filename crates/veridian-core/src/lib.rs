// SPDX-FileCopyrightText: 2026 Veridian Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for the Veridian identity broker.
//!
//! This crate provides the trait definitions, error types, and identity
//! record types shared across the Veridian workspace. All provider adapters
//! implement traits defined here.

pub mod error;
pub mod identity;
pub mod login;
pub mod provider;

// Re-export key items at crate root for ergonomic imports.
pub use error::VeridianError;
pub use identity::{GROUPS_KEY, NormalizedIdentity, ProviderIdentity};
pub use login::{LoginContext, LoginError, LoginFailureKind};
pub use provider::IdentityProvider;
