// SPDX-FileCopyrightText: 2026 Vendra Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Post-deserialization validation of the configuration.
//!
//! Figment catches structural problems (unknown fields, type mismatches);
//! the checks here cover value-level rules that deserialization cannot.

use vendra_core::VendraError;

use crate::model::VendraConfig;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Validate a deserialized configuration.
pub fn validate_config(config: &VendraConfig) -> Result<(), VendraError> {
    if !LOG_LEVELS.contains(&config.runtime.log_level.as_str()) {
        return Err(VendraError::Config(format!(
            "runtime.log_level: unknown level '{}'. Expected one of: trace, debug, info, warn, error",
            config.runtime.log_level
        )));
    }

    validate_system_names(
        "payment.active_system_names",
        &config.payment.active_system_names,
    )?;
    validate_system_names(
        "shipping.active_system_names",
        &config.shipping.active_system_names,
    )?;

    if let Some(default) = &config.payment.default_system_name {
        if default.trim().is_empty() {
            return Err(VendraError::Config(
                "payment.default_system_name must not be empty".to_string(),
            ));
        }
        let listed = config
            .payment
            .active_system_names
            .iter()
            .any(|name| name.eq_ignore_ascii_case(default));
        if !listed {
            return Err(VendraError::Config(format!(
                "payment.default_system_name '{default}' is not in payment.active_system_names"
            )));
        }
    }

    if let Some(name) = &config.tax.active_system_name {
        if name.trim().is_empty() {
            return Err(VendraError::Config(
                "tax.active_system_name must not be empty".to_string(),
            ));
        }
    }

    Ok(())
}

/// A system-name list must be free of empty entries and case-insensitive
/// duplicates.
fn validate_system_names(key: &str, names: &[String]) -> Result<(), VendraError> {
    for name in names {
        if name.trim().is_empty() {
            return Err(VendraError::Config(format!(
                "{key} must not contain empty entries"
            )));
        }
    }

    for (i, name) in names.iter().enumerate() {
        if names[..i].iter().any(|seen| seen.eq_ignore_ascii_case(name)) {
            return Err(VendraError::Config(format!(
                "{key}: duplicate entry '{name}'"
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::VendraConfig;

    #[test]
    fn default_config_is_valid() {
        validate_config(&VendraConfig::default()).unwrap();
    }

    #[test]
    fn unknown_log_level_is_rejected() {
        let mut config = VendraConfig::default();
        config.runtime.log_level = "verbose".to_string();

        let err = validate_config(&config).unwrap_err().to_string();
        assert!(err.contains("unknown level 'verbose'"), "got: {err}");
    }

    #[test]
    fn empty_system_name_entry_is_rejected() {
        let mut config = VendraConfig::default();
        config.payment.active_system_names = vec!["payments.manual".into(), "  ".into()];

        let err = validate_config(&config).unwrap_err().to_string();
        assert!(err.contains("must not contain empty entries"), "got: {err}");
    }

    #[test]
    fn duplicate_system_names_are_rejected_case_insensitively() {
        let mut config = VendraConfig::default();
        config.shipping.active_system_names =
            vec!["shipping.pickup".into(), "Shipping.Pickup".into()];

        let err = validate_config(&config).unwrap_err().to_string();
        assert!(err.contains("duplicate entry"), "got: {err}");
    }

    #[test]
    fn payment_default_must_be_listed_as_active() {
        let mut config = VendraConfig::default();
        config.payment.active_system_names = vec!["payments.manual".into()];
        config.payment.default_system_name = Some("payments.invoice".into());

        let err = validate_config(&config).unwrap_err().to_string();
        assert!(err.contains("is not in payment.active_system_names"), "got: {err}");
    }

    #[test]
    fn payment_default_listing_is_case_insensitive() {
        let mut config = VendraConfig::default();
        config.payment.active_system_names = vec!["payments.manual".into()];
        config.payment.default_system_name = Some("Payments.Manual".into());

        validate_config(&config).unwrap();
    }
}
