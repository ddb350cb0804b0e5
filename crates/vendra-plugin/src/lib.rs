// SPDX-FileCopyrightText: 2026 Vendra Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Provider plugin system for the Vendra framework.
//!
//! Provider plugins (payment methods, shipping rate computation methods, tax
//! providers...) are resolved through a registry pattern: a
//! [`DescriptorSource`] supplies the full plugin catalogue once, and
//! [`ProviderRegistry`] filters it per customer/store context and lazily
//! activates and caches instances. [`ProviderManager`] keys one registry per
//! provider contract type.

pub mod descriptor;
pub mod manager;
pub mod registry;
pub mod source;

pub use descriptor::{PluginDescriptor, parse_provider_manifest};
pub use manager::ProviderManager;
pub use registry::{ProviderRegistry, filter_by_customer, filter_by_store};
pub use source::{DescriptorSource, ProviderEntry, ProviderFactory, StaticDescriptorSource};
