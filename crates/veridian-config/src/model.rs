// SPDX-FileCopyrightText: 2026 Veridian Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration model structs for the Veridian identity broker.
//!
//! The top-level struct uses `#[serde(deny_unknown_fields)]` to reject
//! unrecognized config keys at startup. Identity-provider entries are the
//! exception: their adapter-specific keys are collected by the generic
//! [`ProviderSpec`] for the matching factory to interpret.

use serde::{Deserialize, Serialize};

use veridian_registry::ProviderSpec;

/// Top-level Veridian configuration.
///
/// Loaded from TOML files following the XDG hierarchy, with environment
/// variable overrides.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct VeridianConfig {
    /// Host service listener settings.
    #[serde(default)]
    pub listen: ListenConfig,

    /// Declarative identity-provider entries, one instance each.
    #[serde(default, rename = "identity_provider")]
    pub identity_providers: Vec<ProviderSpec>,
}

/// Host service listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ListenConfig {
    /// Address the host login service binds to.
    #[serde(default = "default_listen_address")]
    pub address: String,
}

impl Default for ListenConfig {
    fn default() -> Self {
        Self {
            address: default_listen_address(),
        }
    }
}

fn default_listen_address() -> String {
    "127.0.0.1:8081".to_string()
}
