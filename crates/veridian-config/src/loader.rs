// SPDX-FileCopyrightText: 2026 Veridian Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration loader using Figment for layered config merging.
//!
//! Supports XDG hierarchy: `./veridian.toml` > `~/.config/veridian/veridian.toml`
//! > `/etc/veridian/veridian.toml` with environment variable overrides via
//! the `VERIDIAN_` prefix.

#![allow(clippy::result_large_err)] // figment::Error is external and cannot be boxed without wrapper

use std::path::Path;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};

use crate::model::VeridianConfig;

/// Load configuration from the standard XDG hierarchy with env var overrides.
///
/// Merge order (later overrides earlier):
/// 1. Compiled defaults
/// 2. `/etc/veridian/veridian.toml` (system-wide)
/// 3. `~/.config/veridian/veridian.toml` (user XDG config)
/// 4. `./veridian.toml` (local directory)
/// 5. `VERIDIAN_*` environment variables
pub fn load_config() -> Result<VeridianConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(VeridianConfig::default()))
        .merge(Toml::file("/etc/veridian/veridian.toml"))
        .merge(Toml::file(
            dirs::config_dir()
                .map(|d| d.join("veridian/veridian.toml"))
                .unwrap_or_default(),
        ))
        .merge(Toml::file("veridian.toml"))
        .merge(env_provider())
        .extract()
}

/// Load configuration from a TOML string only (no XDG lookup, no env).
///
/// Used for testing and explicit config specification.
pub fn load_config_from_str(toml_content: &str) -> Result<VeridianConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(VeridianConfig::default()))
        .merge(Toml::string(toml_content))
        .extract()
}

/// Load configuration from a specific file path with env var overrides.
pub fn load_config_from_path(path: &Path) -> Result<VeridianConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(VeridianConfig::default()))
        .merge(Toml::file(path))
        .merge(env_provider())
        .extract()
}

/// Create the environment variable provider using explicit `map()` for
/// section-to-dot mapping.
///
/// Uses `Env::map()` rather than `Env::split("_")` so key names containing
/// underscores stay unambiguous: `VERIDIAN_LISTEN_ADDRESS` maps to
/// `listen.address`. Identity-provider entries are array-valued and cannot
/// be set from the environment.
fn env_provider() -> Env {
    Env::prefixed("VERIDIAN_").map(|key| {
        let mapped = key.as_str().replacen("listen_", "listen.", 1);
        mapped.into()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    /// VERIDIAN_LISTEN_ADDRESS must map to `listen.address`, not be split
    /// on every underscore.
    #[test]
    fn env_var_maps_to_listen_address() {
        figment::Jail::expect_with(|jail| {
            jail.set_env("VERIDIAN_LISTEN_ADDRESS", "0.0.0.0:9999");

            let config: VeridianConfig = Figment::new()
                .merge(Serialized::defaults(VeridianConfig::default()))
                .merge(env_provider())
                .extract()?;

            assert_eq!(config.listen.address, "0.0.0.0:9999");
            Ok(())
        });
    }

    /// Environment variables override values from TOML sources.
    #[test]
    fn env_var_overrides_toml_value() {
        figment::Jail::expect_with(|jail| {
            jail.set_env("VERIDIAN_LISTEN_ADDRESS", "0.0.0.0:9999");

            let toml_content = r#"
[listen]
address = "127.0.0.1:7000"
"#;
            let config: VeridianConfig = Figment::new()
                .merge(Serialized::defaults(VeridianConfig::default()))
                .merge(Toml::string(toml_content))
                .merge(env_provider())
                .extract()?;

            assert_eq!(config.listen.address, "0.0.0.0:9999");
            Ok(())
        });
    }

    /// Unprefixed environment variables are ignored by the provider.
    #[test]
    fn unprefixed_env_var_is_ignored() {
        figment::Jail::expect_with(|jail| {
            jail.set_env("LISTEN_ADDRESS", "0.0.0.0:9999");

            let config: VeridianConfig = Figment::new()
                .merge(Serialized::defaults(VeridianConfig::default()))
                .merge(env_provider())
                .extract()?;

            assert_eq!(config.listen.address, "127.0.0.1:8081");
            Ok(())
        });
    }
}
