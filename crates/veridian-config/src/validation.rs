// SPDX-FileCopyrightText: 2026 Veridian Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Post-deserialization validation for configuration values.
//!
//! Validates semantic constraints that cannot be expressed via serde
//! attributes: unique provider instance names, well-formed backend URLs,
//! non-empty listener addresses.

use std::collections::HashSet;

use thiserror::Error;

use crate::model::VeridianConfig;

/// A configuration error surfaced at load time.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration failed to parse or merge.
    #[error("cannot parse configuration: {0}")]
    Parse(#[from] Box<figment::Error>),

    /// The configuration parsed but violates a semantic constraint.
    #[error("invalid configuration: {message}")]
    Validation { message: String },
}

/// Validate a deserialized configuration for semantic correctness.
///
/// Returns `Ok(())` if all validations pass, or all collected validation
/// errors (does not fail fast).
pub fn validate_config(config: &VeridianConfig) -> Result<(), Vec<ConfigError>> {
    let mut errors = Vec::new();

    if config.listen.address.trim().is_empty() {
        errors.push(ConfigError::Validation {
            message: "listen.address must not be empty".to_string(),
        });
    }

    let mut names = HashSet::new();
    for (index, spec) in config.identity_providers.iter().enumerate() {
        if spec.type_tag.trim().is_empty() {
            errors.push(ConfigError::Validation {
                message: format!("identity_provider[{index}]: type must not be empty"),
            });
        }

        if spec.name.trim().is_empty() {
            errors.push(ConfigError::Validation {
                message: format!("identity_provider[{index}]: name must not be empty"),
            });
        } else if !names.insert(spec.name.as_str()) {
            errors.push(ConfigError::Validation {
                message: format!(
                    "identity_provider[{index}]: duplicate name `{}`",
                    spec.name
                ),
            });
        }

        if let Some(raw) = &spec.url {
            match url::Url::parse(raw) {
                Ok(parsed) if parsed.scheme() == "http" || parsed.scheme() == "https" => {}
                Ok(parsed) => {
                    errors.push(ConfigError::Validation {
                        message: format!(
                            "identity_provider[{index}]: url scheme `{}` is not http or https",
                            parsed.scheme()
                        ),
                    });
                }
                Err(err) => {
                    errors.push(ConfigError::Validation {
                        message: format!("identity_provider[{index}]: invalid url `{raw}`: {err}"),
                    });
                }
            }
        }
    }

    if errors.is_empty() { Ok(()) } else { Err(errors) }
}
