// SPDX-FileCopyrightText: 2026 Veridian Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Identity record types shared between provider adapters and the host.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Key under which group membership is stored in
/// [`NormalizedIdentity::provider_info`].
pub const GROUPS_KEY: &str = "groups";

/// Stable, provider-scoped identifier for an identity.
///
/// The wrapped string is the key the host's identity store uses to recognize
/// the same user across repeated logins, so providers must derive it from a
/// backend identifier that never changes (a user id, not a display name).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProviderIdentity(pub String);

impl ProviderIdentity {
    /// Builds the store form `<provider>:<key>`, scoping `key` to the named
    /// provider instance so identities from different providers can never
    /// collide in the host's identity store.
    pub fn make(provider: &str, key: &str) -> Self {
        Self(format!("{provider}:{key}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ProviderIdentity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The normalized identity record a provider adapter hands to the host on a
/// successful login.
///
/// Constructed once per login and consumed exactly once by the host's
/// login-completion callback; adapters hold no reference to it afterward.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedIdentity {
    /// Stable identifier, qualified with the adapter's configured domain.
    pub provider_id: ProviderIdentity,
    /// Domain-qualified username presented to the rest of the system.
    pub username: String,
    /// Provider-specific metadata. [`GROUPS_KEY`] holds the normalized,
    /// canonically ordered group list.
    pub provider_info: BTreeMap<String, Vec<String>>,
}

impl NormalizedIdentity {
    /// Returns the normalized group list, empty if the provider set none.
    pub fn groups(&self) -> &[String] {
        self.provider_info
            .get(GROUPS_KEY)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}
