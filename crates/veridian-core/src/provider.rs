// SPDX-FileCopyrightText: 2026 Veridian Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The identity-provider trait all adapter plugins implement.

use async_trait::async_trait;

use crate::login::LoginContext;

/// An identity-provider adapter instance.
///
/// One instance is constructed per configuration entry. Instances are
/// immutable after construction and hold no cross-request state, so a single
/// instance may handle independent requests concurrently without locking.
#[async_trait]
pub trait IdentityProvider: Send + Sync + 'static {
    /// The configured instance name (e.g. "openstack3").
    fn name(&self) -> &str;

    /// Human-readable display label.
    fn description(&self) -> &str;

    /// The identifier suffix distinguishing identities sourced from this
    /// instance from identities of other providers. May be empty.
    fn domain(&self) -> &str;

    /// Whether this provider drives a browser-redirect flow.
    ///
    /// Non-interactive providers only process a direct POST carrying an
    /// embedded credential and never redirect.
    fn interactive(&self) -> bool;

    /// Handles one login request.
    ///
    /// `body` is the raw request body as received by the host's routing
    /// layer. Exactly one of the [`LoginContext`] callbacks is invoked per
    /// call. The call is idempotent and touches only request-scoped state.
    async fn handle(&self, ctx: &dyn LoginContext, body: &[u8]);
}

impl std::fmt::Debug for dyn IdentityProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IdentityProvider")
            .field("name", &self.name())
            .finish_non_exhaustive()
    }
}
