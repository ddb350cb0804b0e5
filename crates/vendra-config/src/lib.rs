// SPDX-FileCopyrightText: 2026 Vendra Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration system for the Vendra framework.
//!
//! Provides TOML configuration parsing with strict validation
//! (`deny_unknown_fields`), XDG file hierarchy lookup, and environment
//! variable overrides.
//!
//! # Usage
//!
//! ```no_run
//! use vendra_config::load_and_validate;
//!
//! let config = load_and_validate().expect("config errors");
//! println!("store: {}", config.store.store_id);
//! ```

pub mod loader;
pub mod model;
pub mod validation;

pub use loader::{load_config, load_config_from_path, load_config_from_str};
pub use model::VendraConfig;
pub use validation::validate_config;

use tracing::debug;
use vendra_core::VendraError;

/// Load configuration from the XDG hierarchy and validate it.
///
/// This is the high-level entry point: loads config from TOML files plus env
/// vars via Figment, then runs post-deserialization validation.
pub fn load_and_validate() -> Result<VendraConfig, VendraError> {
    let config = loader::load_config().map_err(|e| VendraError::Config(e.to_string()))?;
    validation::validate_config(&config)?;
    debug!(log_level = %config.runtime.log_level, store_id = config.store.store_id, "configuration loaded");
    Ok(config)
}

/// Load configuration from a TOML string and validate it.
///
/// Useful for testing and explicit configuration.
pub fn load_and_validate_str(toml_content: &str) -> Result<VendraConfig, VendraError> {
    let config =
        loader::load_config_from_str(toml_content).map_err(|e| VendraError::Config(e.to_string()))?;
    validation::validate_config(&config)?;
    Ok(config)
}
