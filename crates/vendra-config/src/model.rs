// SPDX-FileCopyrightText: 2026 Vendra Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration model structs for the Vendra framework.
//!
//! All structs use `#[serde(deny_unknown_fields)]` to reject unrecognized
//! config keys at startup, providing actionable error messages.

use serde::{Deserialize, Serialize};

/// Top-level Vendra configuration.
///
/// Loaded from TOML files following XDG hierarchy, with environment variable
/// overrides. All sections are optional and default to sensible values.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct VendraConfig {
    /// Process-level runtime settings.
    #[serde(default)]
    pub runtime: RuntimeConfig,

    /// Store context settings.
    #[serde(default)]
    pub store: StoreConfig,

    /// Payment provider selection settings.
    #[serde(default)]
    pub payment: PaymentConfig,

    /// Shipping provider selection settings.
    #[serde(default)]
    pub shipping: ShippingConfig,

    /// Tax provider selection settings.
    #[serde(default)]
    pub tax: TaxConfig,
}

/// Process-level runtime configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct RuntimeConfig {
    /// Logging level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Store context configuration.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct StoreConfig {
    /// Store identifier lookups run under; 0 means "all stores".
    #[serde(default)]
    pub store_id: u64,
}

/// Payment provider selection configuration.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct PaymentConfig {
    /// System names of the payment methods offered at checkout.
    #[serde(default)]
    pub active_system_names: Vec<String>,

    /// Preselected payment method, when configured.
    #[serde(default)]
    pub default_system_name: Option<String>,
}

/// Shipping provider selection configuration.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ShippingConfig {
    /// System names of the shipping rate computation methods in use.
    #[serde(default)]
    pub active_system_names: Vec<String>,
}

/// Tax provider selection configuration.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct TaxConfig {
    /// The single active tax provider, when configured.
    #[serde(default)]
    pub active_system_name: Option<String>,
}
