// SPDX-FileCopyrightText: 2026 Vendra Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Descriptor sources and provider activation factories.
//!
//! A [`DescriptorSource`] supplies the complete plugin catalogue for one
//! provider contract; each [`ProviderEntry`] pairs a descriptor with the
//! [`ProviderFactory`] that activates it.

use std::fmt;
use std::sync::Arc;

use vendra_core::VendraError;

use crate::descriptor::PluginDescriptor;

/// Factory capability that turns a descriptor entry into a live provider
/// instance.
///
/// Factories may be called repeatedly; the registry performs its own
/// memoization, so implementations are free to build a fresh instance or
/// hand out a shared one on every call.
pub trait ProviderFactory<P: ?Sized>: Send + Sync {
    /// Create a provider instance.
    fn create(&self) -> Result<Arc<P>, VendraError>;
}

impl<P: ?Sized, F> ProviderFactory<P> for F
where
    F: Fn() -> Result<Arc<P>, VendraError> + Send + Sync,
{
    fn create(&self) -> Result<Arc<P>, VendraError> {
        (self)()
    }
}

/// A descriptor paired with the factory that activates it for contract `P`.
pub struct ProviderEntry<P: ?Sized> {
    /// Plugin metadata consumed by the visibility filters.
    pub descriptor: PluginDescriptor,
    factory: Arc<dyn ProviderFactory<P>>,
}

impl<P: ?Sized> ProviderEntry<P> {
    /// Pair a descriptor with an activation factory.
    pub fn new(descriptor: PluginDescriptor, factory: impl ProviderFactory<P> + 'static) -> Self {
        Self {
            descriptor,
            factory: Arc::new(factory),
        }
    }

    /// Pair a descriptor with an already-built shared instance.
    pub fn from_instance(descriptor: PluginDescriptor, instance: Arc<P>) -> Self
    where
        P: Send + Sync + 'static,
    {
        Self::new(descriptor, move || Ok(Arc::clone(&instance)))
    }

    /// Activate this entry.
    pub fn activate(&self) -> Result<Arc<P>, VendraError> {
        self.factory.create()
    }
}

impl<P: ?Sized> Clone for ProviderEntry<P> {
    fn clone(&self) -> Self {
        Self {
            descriptor: self.descriptor.clone(),
            factory: Arc::clone(&self.factory),
        }
    }
}

impl<P: ?Sized> fmt::Debug for ProviderEntry<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderEntry")
            .field("descriptor", &self.descriptor)
            .field("factory", &"<opaque>")
            .finish()
    }
}

/// Supplies the complete, ordered plugin catalogue for contract `P`.
///
/// Called once per registry construction; must be side-effect-free so a new
/// registry can be built from the same source later.
pub trait DescriptorSource<P: ?Sized>: Send + Sync {
    /// The full entry list for this contract, in catalogue order.
    fn descriptors(&self) -> Result<Vec<ProviderEntry<P>>, VendraError>;
}

/// In-memory descriptor source over a fixed entry list.
///
/// Entries are ordered once at construction, by display order and then
/// friendly name (case-insensitive).
pub struct StaticDescriptorSource<P: ?Sized> {
    entries: Vec<ProviderEntry<P>>,
}

impl<P: ?Sized> StaticDescriptorSource<P> {
    /// Build a source from the given entries.
    pub fn new(mut entries: Vec<ProviderEntry<P>>) -> Self {
        entries.sort_by(|a, b| {
            a.descriptor
                .display_order
                .cmp(&b.descriptor.display_order)
                .then_with(|| {
                    a.descriptor
                        .friendly_name
                        .to_lowercase()
                        .cmp(&b.descriptor.friendly_name.to_lowercase())
                })
        });
        Self { entries }
    }

    /// Number of entries in the catalogue.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the catalogue is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<P: ?Sized> fmt::Debug for StaticDescriptorSource<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StaticDescriptorSource")
            .field("entries", &self.entries)
            .finish()
    }
}

impl<P: ?Sized> DescriptorSource<P> for StaticDescriptorSource<P> {
    fn descriptors(&self) -> Result<Vec<ProviderEntry<P>>, VendraError> {
        Ok(self.entries.clone())
    }
}
