// SPDX-FileCopyrightText: 2026 Veridian Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Registry of compiled-in identity-provider types.
//!
//! The host discovers provider implementations by the `type` tag of each
//! configuration entry. The `ProviderRegistry` maps type tags to
//! `ProviderFactory` instances and constructs one polymorphic
//! [`IdentityProvider`] per entry.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use veridian_core::{IdentityProvider, VeridianError};

/// One declarative identity-provider entry, as written in configuration.
///
/// The generic fields every provider shares live here; adapter-specific keys
/// are collected in `extra` for the factory to interpret.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProviderSpec {
    /// Provider type tag (e.g. "keystone_token") selecting the factory.
    #[serde(rename = "type")]
    pub type_tag: String,

    /// Unique instance name.
    pub name: String,

    /// Display label. Defaults to the instance name when absent.
    #[serde(default)]
    pub description: Option<String>,

    /// Identifier suffix for identities sourced from this instance.
    #[serde(default)]
    pub domain: Option<String>,

    /// Base URL of the external backend, for providers that have one.
    #[serde(default)]
    pub url: Option<String>,

    /// Adapter-specific keys not recognized by the generic mechanism.
    #[serde(flatten)]
    pub extra: toml::Table,
}

/// Factory for creating provider instances of one type tag.
pub trait ProviderFactory: Send + Sync {
    /// The configuration `type` tag this factory handles.
    fn type_tag(&self) -> &'static str;

    /// Create a provider instance from the given declarative entry.
    fn create(&self, spec: &ProviderSpec) -> Result<Arc<dyn IdentityProvider>, VeridianError>;
}

/// Registry of provider factories keyed by type tag.
pub struct ProviderRegistry {
    factories: HashMap<&'static str, Box<dyn ProviderFactory>>,
}

impl ProviderRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            factories: HashMap::new(),
        }
    }

    /// Register a factory under its type tag, replacing any previous one.
    pub fn register(&mut self, factory: Box<dyn ProviderFactory>) {
        self.factories.insert(factory.type_tag(), factory);
    }

    /// Get the factory for a type tag.
    pub fn get(&self, type_tag: &str) -> Option<&dyn ProviderFactory> {
        self.factories.get(type_tag).map(Box::as_ref)
    }

    /// Construct one provider instance per entry, in entry order.
    ///
    /// Fails on an unregistered type tag or a duplicate instance name.
    pub fn build(
        &self,
        specs: &[ProviderSpec],
    ) -> Result<Vec<Arc<dyn IdentityProvider>>, VeridianError> {
        let mut providers = Vec::with_capacity(specs.len());
        let mut names = HashSet::new();
        for spec in specs {
            if !names.insert(spec.name.as_str()) {
                return Err(VeridianError::Config(format!(
                    "duplicate identity provider name: {}",
                    spec.name
                )));
            }
            let factory =
                self.get(&spec.type_tag)
                    .ok_or_else(|| VeridianError::UnknownProviderType {
                        type_tag: spec.type_tag.clone(),
                    })?;
            providers.push(factory.create(spec)?);
        }
        Ok(providers)
    }

    /// Returns the number of registered factories.
    pub fn len(&self) -> usize {
        self.factories.len()
    }

    /// Returns true if no factories are registered.
    pub fn is_empty(&self) -> bool {
        self.factories.is_empty()
    }
}

impl Default for ProviderRegistry {
    fn default() -> Self {
        Self::new()
    }
}
