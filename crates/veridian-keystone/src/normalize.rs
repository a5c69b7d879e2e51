// SPDX-FileCopyrightText: 2026 Veridian Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Maps the backend's raw user and tenant payload into the host's
//! normalized identity record.

use std::collections::BTreeMap;

use veridian_core::{GROUPS_KEY, NormalizedIdentity, ProviderIdentity};

use crate::types::{AuthResult, Tenant};

/// Builds the normalized identity for an authenticated user.
///
/// Pure and deterministic: groups are sorted and deduplicated, so identical
/// inputs produce byte-identical output regardless of the order tenants
/// arrived in on the wire. The domain suffix is applied consistently to the
/// username, the provider identifier, and every group entry; an empty
/// domain leaves the names bare.
pub fn normalize(domain: &str, auth: &AuthResult, tenants: &[Tenant]) -> NormalizedIdentity {
    let mut groups: Vec<String> = tenants.iter().map(|t| qualify(&t.name, domain)).collect();
    groups.sort();
    groups.dedup();

    let mut provider_info = BTreeMap::new();
    provider_info.insert(GROUPS_KEY.to_string(), groups);

    NormalizedIdentity {
        provider_id: ProviderIdentity(qualify(&auth.user_id, domain)),
        username: qualify(&auth.username, domain),
        provider_info,
    }
}

fn qualify(name: &str, domain: &str) -> String {
    if domain.is_empty() {
        name.to_string()
    } else {
        format!("{name}@{domain}")
    }
}
