// SPDX-FileCopyrightText: 2026 Veridian Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration system for the Veridian identity broker.
//!
//! Provides TOML configuration parsing with strict validation
//! (`deny_unknown_fields` outside provider entries), XDG file hierarchy
//! lookup, and environment variable overrides.
//!
//! # Usage
//!
//! ```no_run
//! use veridian_config::load_and_validate;
//!
//! let config = load_and_validate().expect("config errors");
//! for spec in &config.identity_providers {
//!     println!("provider {} ({})", spec.name, spec.type_tag);
//! }
//! ```

pub mod loader;
pub mod model;
pub mod validation;

pub use loader::{load_config, load_config_from_path, load_config_from_str};
pub use model::VeridianConfig;
pub use validation::{ConfigError, validate_config};

/// Load configuration from the XDG hierarchy and validate it.
///
/// Returns either a valid [`VeridianConfig`] or the list of collected
/// errors.
pub fn load_and_validate() -> Result<VeridianConfig, Vec<ConfigError>> {
    match loader::load_config() {
        Ok(config) => {
            validation::validate_config(&config)?;
            Ok(config)
        }
        Err(err) => Err(vec![ConfigError::Parse(Box::new(err))]),
    }
}

/// Load configuration from a TOML string and validate it.
///
/// Useful for testing and explicit configuration.
pub fn load_and_validate_str(toml_content: &str) -> Result<VeridianConfig, Vec<ConfigError>> {
    match loader::load_config_from_str(toml_content) {
        Ok(config) => {
            validation::validate_config(&config)?;
            Ok(config)
        }
        Err(err) => Err(vec![ConfigError::Parse(Box::new(err))]),
    }
}
