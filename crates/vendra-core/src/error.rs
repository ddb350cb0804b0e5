// SPDX-FileCopyrightText: 2026 Vendra Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the Vendra provider framework.

use thiserror::Error;

/// The primary error type used across Vendra registries and configuration.
#[derive(Debug, Error)]
pub enum VendraError {
    /// Configuration errors (invalid TOML, missing required fields, bad values).
    #[error("configuration error: {0}")]
    Config(String),

    /// A provider factory failed to produce an instance.
    #[error("activation failed for provider '{system_name}': {source}")]
    Activation {
        system_name: String,
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// No registry has been registered for the requested contract type.
    #[error("no provider registry for contract {contract}")]
    ContractNotRegistered { contract: &'static str },

    /// A registry for the contract type is already present in the manager.
    #[error("provider registry for contract {contract} already registered")]
    ContractAlreadyRegistered { contract: &'static str },

    /// Internal or unexpected errors.
    #[error("internal error: {0}")]
    Internal(String),
}
