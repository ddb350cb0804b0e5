// SPDX-FileCopyrightText: 2026 Vendra Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration loader using Figment for layered config merging.
//!
//! Supports XDG hierarchy: `./vendra.toml` > `~/.config/vendra/vendra.toml` > `/etc/vendra/vendra.toml`
//! with environment variable overrides via `VENDRA_` prefix.

#![allow(clippy::result_large_err)] // figment::Error is external and cannot be boxed without wrapper

use std::path::Path;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};

use crate::model::VendraConfig;

/// Load configuration from the standard XDG hierarchy with env var overrides.
///
/// Merge order (later overrides earlier):
/// 1. Compiled defaults
/// 2. `/etc/vendra/vendra.toml` (system-wide)
/// 3. `~/.config/vendra/vendra.toml` (user XDG config)
/// 4. `./vendra.toml` (local directory)
/// 5. `VENDRA_*` environment variables
pub fn load_config() -> Result<VendraConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(VendraConfig::default()))
        .merge(Toml::file("/etc/vendra/vendra.toml"))
        .merge(Toml::file(
            dirs::config_dir()
                .map(|d| d.join("vendra/vendra.toml"))
                .unwrap_or_default(),
        ))
        .merge(Toml::file("vendra.toml"))
        .merge(env_provider())
        .extract()
}

/// Load configuration from a TOML string only (no XDG lookup).
///
/// Used for testing and explicit config specification.
pub fn load_config_from_str(toml_content: &str) -> Result<VendraConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(VendraConfig::default()))
        .merge(Toml::string(toml_content))
        .extract()
}

/// Load configuration from a specific file path with env var overrides.
pub fn load_config_from_path(path: &Path) -> Result<VendraConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(VendraConfig::default()))
        .merge(Toml::file(path))
        .merge(env_provider())
        .extract()
}

/// Create the environment variable provider using explicit `map()` for
/// section-to-dot mapping.
///
/// Uses `Env::map()` NOT `Env::split("_")` to avoid ambiguity with
/// underscore-containing key names. For example,
/// `VENDRA_PAYMENT_ACTIVE_SYSTEM_NAMES` must map to
/// `payment.active_system_names`, not `payment.active.system.names`.
fn env_provider() -> Env {
    Env::prefixed("VENDRA_").map(|key| {
        // `key` is the lowercased env var name with prefix stripped.
        // Example: VENDRA_STORE_STORE_ID -> "store_store_id"
        let key_str = key.as_str();
        let mapped = key_str
            .replacen("runtime_", "runtime.", 1)
            .replacen("store_", "store.", 1)
            .replacen("payment_", "payment.", 1)
            .replacen("shipping_", "shipping.", 1)
            .replacen("tax_", "tax.", 1);
        mapped.into()
    })
}
