// SPDX-FileCopyrightText: 2026 Vendra Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Plugin descriptors and `[provider]` manifest parsing.
//!
//! A descriptor is static metadata about a provider plugin (identity,
//! restrictions), distinct from the live instance a factory produces.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use vendra_core::VendraError;
use vendra_core::types::{CustomerRoleId, ProviderKind, StoreId};

/// Static metadata describing a provider plugin.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PluginDescriptor {
    /// Unique name of the plugin (e.g., "payments.manual"). Matched
    /// case-insensitively.
    pub system_name: String,
    /// Human-readable display name.
    pub friendly_name: String,
    /// Semantic version string.
    pub version: String,
    /// Provider group this plugin belongs to.
    pub group: ProviderKind,
    /// Optional author identifier.
    pub author: Option<String>,
    /// Ordering weight within the catalogue; lower sorts first.
    pub display_order: i32,
    /// Customer roles the plugin is limited to; empty = unrestricted.
    pub limited_to_customer_roles: Vec<CustomerRoleId>,
    /// Stores the plugin is limited to; empty = unrestricted.
    pub limited_to_stores: Vec<StoreId>,
}

impl PluginDescriptor {
    /// Case-insensitive identity match on the system name.
    pub fn matches_system_name(&self, system_name: &str) -> bool {
        self.system_name.eq_ignore_ascii_case(system_name)
    }
}

/// Intermediate TOML deserialization struct for provider manifests.
#[derive(Debug, Deserialize)]
struct ProviderManifestFile {
    provider: ProviderSection,
}

/// The `[provider]` section of a provider manifest.
#[derive(Debug, Deserialize)]
struct ProviderSection {
    system_name: String,
    friendly_name: String,
    version: String,
    group: String,
    author: Option<String>,
    #[serde(default)]
    display_order: i32,
    #[serde(default)]
    limited_to_customer_roles: Vec<u64>,
    #[serde(default)]
    limited_to_stores: Vec<u64>,
}

/// Parse a provider manifest from TOML content.
///
/// Validates that `system_name` is non-empty, `version` parses as a semantic
/// version, and `group` is a valid [`ProviderKind`] variant.
pub fn parse_provider_manifest(toml_content: &str) -> Result<PluginDescriptor, VendraError> {
    let file: ProviderManifestFile = toml::from_str(toml_content)
        .map_err(|e| VendraError::Config(format!("invalid provider manifest: {e}")))?;

    let section = file.provider;

    if section.system_name.is_empty() {
        return Err(VendraError::Config(
            "provider manifest: system_name must not be empty".to_string(),
        ));
    }

    if section.version.is_empty() {
        return Err(VendraError::Config(
            "provider manifest: version must not be empty".to_string(),
        ));
    }

    semver::Version::parse(&section.version).map_err(|e| {
        VendraError::Config(format!(
            "provider manifest: invalid version '{}': {e}",
            section.version
        ))
    })?;

    let group = ProviderKind::from_str(&section.group).map_err(|_| {
        VendraError::Config(format!(
            "provider manifest: invalid group '{}'. Expected one of: Payment, Shipping, Tax, ExternalAuth, Widget, Misc",
            section.group
        ))
    })?;

    Ok(PluginDescriptor {
        system_name: section.system_name,
        friendly_name: section.friendly_name,
        version: section.version,
        group,
        author: section.author,
        display_order: section.display_order,
        limited_to_customer_roles: section
            .limited_to_customer_roles
            .into_iter()
            .map(CustomerRoleId)
            .collect(),
        limited_to_stores: section.limited_to_stores.into_iter().map(StoreId).collect(),
    })
}
