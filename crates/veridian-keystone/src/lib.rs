// SPDX-FileCopyrightText: 2026 Veridian Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! OpenStack Keystone token identity-provider adapter.
//!
//! Non-interactive: the caller has already obtained a Keystone token out of
//! band and submits it in a direct POST as `{"login": {"id": "<token>"}}`.
//! The adapter exchanges the token with the backend for a verified user and
//! tenant list, normalizes the result into the host's identity record, and
//! commits it through the host's login-completion callback.

pub mod client;
pub mod normalize;
pub mod types;

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, warn};

use veridian_core::{
    IdentityProvider, LoginContext, LoginError, NormalizedIdentity, ProviderIdentity,
    VeridianError,
};
use veridian_registry::{ProviderFactory, ProviderSpec};

use crate::client::{KeystoneClient, KeystoneError};
use crate::normalize::normalize;
use crate::types::LoginBody;

pub use crate::types::{AuthResult, LoginToken, Tenant};

/// Configuration `type` tag selecting this adapter.
pub const PROVIDER_TYPE: &str = "keystone_token";

/// Construction parameters for one adapter instance.
#[derive(Debug, Clone)]
pub struct Params {
    /// Provider instance name.
    pub name: String,
    /// Display label. Empty defaults to the name.
    pub description: String,
    /// Identifier suffix. Empty leaves identities unqualified.
    pub domain: String,
    /// Base URL of the Keystone backend.
    pub url: String,
}

/// The Keystone token identity provider.
///
/// Immutable after construction; each handled request only touches
/// request-scoped state, so independent requests may run concurrently.
pub struct KeystoneTokenProvider {
    params: Params,
    client: KeystoneClient,
}

impl KeystoneTokenProvider {
    /// Creates an adapter instance for the given parameters.
    pub fn new(mut params: Params) -> Result<Self, VeridianError> {
        if params.description.is_empty() {
            params.description = params.name.clone();
        }
        let client = KeystoneClient::new(&params.url)?;
        Ok(Self { params, client })
    }

    /// Drives one login attempt to its terminal outcome.
    ///
    /// Decode failures halt before any network call. The two backend calls
    /// are strictly sequential and never retried here.
    async fn login(&self, body: &[u8]) -> Result<NormalizedIdentity, LoginError> {
        let request: LoginBody =
            serde_json::from_slice(body).map_err(|e| LoginError::Decode {
                message: e.to_string(),
            })?;
        if request.login.id.is_empty() {
            return Err(LoginError::Decode {
                message: "login token not specified".into(),
            });
        }

        let auth = self
            .client
            .authenticate(&request.login.id)
            .await
            .map_err(login_error)?;
        let tenants = self
            .client
            .list_tenants(&auth.token)
            .await
            .map_err(login_error)?;

        let mut identity = normalize(&self.params.domain, &auth, &tenants);
        // The store form scopes the domain-qualified key to this instance.
        let scoped = ProviderIdentity::make(&self.params.name, identity.provider_id.as_str());
        identity.provider_id = scoped;
        Ok(identity)
    }
}

#[async_trait]
impl IdentityProvider for KeystoneTokenProvider {
    fn name(&self) -> &str {
        &self.params.name
    }

    fn description(&self) -> &str {
        &self.params.description
    }

    fn domain(&self) -> &str {
        &self.params.domain
    }

    fn interactive(&self) -> bool {
        false
    }

    async fn handle(&self, ctx: &dyn LoginContext, body: &[u8]) {
        match self.login(body).await {
            Ok(identity) => {
                debug!(
                    provider = %self.params.name,
                    username = %identity.username,
                    "login succeeded"
                );
                ctx.login_success(identity).await;
            }
            Err(error) => {
                warn!(provider = %self.params.name, %error, "login failed");
                ctx.login_failure(&error).await;
            }
        }
    }
}

/// Maps a backend failure into the caller-visible login taxonomy.
fn login_error(err: KeystoneError) -> LoginError {
    match err {
        KeystoneError::InvalidCredentials => LoginError::InvalidCredentials {
            message: err.to_string(),
        },
        KeystoneError::Transport { .. } | KeystoneError::Protocol { .. } => LoginError::Backend {
            message: err.to_string(),
        },
    }
}

/// Factory registering the `keystone_token` provider type.
#[derive(Debug, Default)]
pub struct KeystoneTokenFactory;

impl ProviderFactory for KeystoneTokenFactory {
    fn type_tag(&self) -> &'static str {
        PROVIDER_TYPE
    }

    fn create(&self, spec: &ProviderSpec) -> Result<Arc<dyn IdentityProvider>, VeridianError> {
        let url = spec.url.clone().ok_or_else(|| {
            VeridianError::Config(format!(
                "identity provider {}: url is required",
                spec.name
            ))
        })?;
        let provider = KeystoneTokenProvider::new(Params {
            name: spec.name.clone(),
            description: spec.description.clone().unwrap_or_default(),
            domain: spec.domain.clone().unwrap_or_default(),
            url,
        })?;
        Ok(Arc::new(provider))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params() -> Params {
        Params {
            name: "openstack".into(),
            description: String::new(),
            domain: "openstack".into(),
            url: "https://keystone.example.com".into(),
        }
    }

    #[test]
    fn description_defaults_to_name() {
        let provider = KeystoneTokenProvider::new(params()).unwrap();
        assert_eq!(provider.description(), "openstack");
        assert_eq!(provider.name(), "openstack");
        assert_eq!(provider.domain(), "openstack");
    }

    #[test]
    fn provider_is_never_interactive() {
        let provider = KeystoneTokenProvider::new(params()).unwrap();
        assert!(!provider.interactive());
    }

    #[test]
    fn factory_requires_url() {
        let spec = ProviderSpec {
            type_tag: PROVIDER_TYPE.to_string(),
            name: "openstack".to_string(),
            ..ProviderSpec::default()
        };
        let err = KeystoneTokenFactory.create(&spec).unwrap_err();
        assert!(matches!(
            err,
            VeridianError::Config(msg) if msg.contains("url is required")
        ));
    }

    #[test]
    fn login_error_mapping_preserves_category() {
        let credentials = login_error(KeystoneError::InvalidCredentials);
        assert_eq!(
            credentials.kind(),
            veridian_core::LoginFailureKind::Credential
        );
        assert_eq!(credentials.to_string(), "cannot log in: invalid credentials");

        let protocol = login_error(KeystoneError::Protocol {
            message: "keystone returned 500".into(),
        });
        assert_eq!(protocol.kind(), veridian_core::LoginFailureKind::Request);
        assert!(protocol.to_string().contains("keystone returned 500"));
    }
}
