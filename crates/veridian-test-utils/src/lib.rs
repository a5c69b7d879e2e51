// SPDX-FileCopyrightText: 2026 Veridian Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Test utilities for Veridian integration tests.
//!
//! Provides fixtures for fast, deterministic, CI-runnable tests without
//! external services.
//!
//! # Components
//!
//! - [`LoginRecorder`] - `LoginContext` implementation capturing the login outcome
//! - [`MockKeystone`] - in-process fake Keystone backend over wiremock

pub mod mock_keystone;
pub mod recorder;

pub use mock_keystone::{MockKeystone, MockTenant, MockUser};
pub use recorder::{LoginOutcome, LoginRecorder};
