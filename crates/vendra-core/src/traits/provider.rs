// SPDX-FileCopyrightText: 2026 Vendra Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Base provider trait that all concrete provider contracts extend.

use crate::types::ProviderKind;

/// The base trait for all Vendra providers.
///
/// A provider is a pluggable implementation of a fixed contract (a payment
/// method, a shipping rate computation method, a tax provider...). Contract
/// traits extend this trait, and the registry hands out shared instances of
/// those contract objects.
pub trait Provider: Send + Sync + 'static {
    /// The unique system name this provider is registered under.
    fn system_name(&self) -> &str;

    /// The provider group this implementation belongs to.
    fn kind(&self) -> ProviderKind;
}
