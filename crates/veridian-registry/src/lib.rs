// SPDX-FileCopyrightText: 2026 Veridian Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Identity-provider registry for the Veridian identity broker.
//!
//! Provider implementations are compiled in and discovered by the `type`
//! tag of each declarative configuration entry. Each implementation
//! contributes a [`ProviderFactory`]; the host registers the factories it
//! ships and builds one [`veridian_core::IdentityProvider`] instance per
//! entry.

pub mod registry;

pub use registry::{ProviderFactory, ProviderRegistry, ProviderSpec};
