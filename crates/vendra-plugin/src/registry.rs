// SPDX-FileCopyrightText: 2026 Vendra Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Generic provider registry with visibility filtering and activation caching.
//!
//! [`ProviderRegistry`] owns the plugin catalogue for one provider contract,
//! filters it per customer/store context, and lazily activates and caches
//! instances. A registry is built once per logical scope and discarded
//! together with its cached instances.

use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, Mutex};

use tracing::debug;
use vendra_core::VendraError;
use vendra_core::types::{Customer, StoreId};

use crate::descriptor::PluginDescriptor;
use crate::source::{DescriptorSource, ProviderEntry};

/// Check whether a plugin is visible to the given customer.
///
/// Passes when no customer is supplied, when the descriptor declares no role
/// restriction, or when the restriction intersects the customer's active
/// roles.
pub fn filter_by_customer(descriptor: &PluginDescriptor, customer: Option<&Customer>) -> bool {
    let Some(customer) = customer else {
        return true;
    };

    if descriptor.limited_to_customer_roles.is_empty() {
        return true;
    }

    customer
        .active_role_ids()
        .any(|id| descriptor.limited_to_customer_roles.contains(&id))
}

/// Check whether a plugin is visible in the given store.
///
/// Passes for [`StoreId::ALL`], when the descriptor declares no store
/// restriction, or when the store is in the restriction list.
pub fn filter_by_store(descriptor: &PluginDescriptor, store_id: StoreId) -> bool {
    if store_id.is_all() {
        return true;
    }

    if descriptor.limited_to_stores.is_empty() {
        return true;
    }

    descriptor.limited_to_stores.contains(&store_id)
}

/// The activated all-providers sequence plus the aligned descriptor names.
struct ActivatedProviders<P: ?Sized> {
    instances: Arc<[Arc<P>]>,
    system_names: Vec<String>,
}

/// Resolves, filters, and caches provider instances for one contract type.
///
/// The descriptor catalogue is pulled eagerly at construction and is
/// immutable for the registry's lifetime. Instances are activated lazily:
///
/// - the all-providers sequence is populated at most once per registry
///   instance and returned verbatim afterwards, whatever arguments later
///   calls pass;
/// - by-name lookups are cached per exact name string, including "no match"
///   outcomes.
pub struct ProviderRegistry<P: ?Sized> {
    entries: Vec<ProviderEntry<P>>,
    all_providers: Mutex<Option<ActivatedProviders<P>>>,
    by_system_name: Mutex<HashMap<String, Option<Arc<P>>>>,
}

impl<P: ?Sized> ProviderRegistry<P> {
    /// Build a registry from the full plugin catalogue of `source`.
    ///
    /// Fails if the source itself fails; the error propagates unchanged and
    /// no registry is constructed.
    pub fn new(source: &dyn DescriptorSource<P>) -> Result<Self, VendraError> {
        let entries = source.descriptors()?;
        debug!(count = entries.len(), "provider registry constructed");
        Ok(Self {
            entries,
            all_providers: Mutex::new(None),
            by_system_name: Mutex::new(HashMap::new()),
        })
    }

    /// Number of descriptors in the catalogue, visible or not.
    pub fn descriptor_count(&self) -> usize {
        self.entries.len()
    }

    /// Descriptors in catalogue order.
    pub fn descriptors(&self) -> impl Iterator<Item = &PluginDescriptor> {
        self.entries.iter().map(|entry| &entry.descriptor)
    }

    /// Returns all providers visible to `customer` in `store_id`.
    ///
    /// The first call filters the catalogue with both predicates, activates
    /// every surviving descriptor in catalogue order, and caches the
    /// sequence. Every later call returns the cached sequence verbatim,
    /// regardless of its arguments. Pass `None` / [`StoreId::ALL`] to skip
    /// the respective filter. An empty result is normal, never an error.
    pub fn load_all_providers(
        &self,
        customer: Option<&Customer>,
        store_id: StoreId,
    ) -> Result<Arc<[Arc<P>]>, VendraError> {
        let mut cache = self
            .all_providers
            .lock()
            .expect("all-providers cache lock poisoned");

        if let Some(activated) = cache.as_ref() {
            return Ok(Arc::clone(&activated.instances));
        }

        let mut instances = Vec::new();
        let mut system_names = Vec::new();
        for entry in &self.entries {
            if !filter_by_customer(&entry.descriptor, customer)
                || !filter_by_store(&entry.descriptor, store_id)
            {
                continue;
            }
            instances.push(entry.activate()?);
            system_names.push(entry.descriptor.system_name.clone());
        }

        debug!(count = instances.len(), "all-providers cache populated");
        let activated = ActivatedProviders {
            instances: instances.into(),
            system_names,
        };
        let shared = Arc::clone(&activated.instances);
        *cache = Some(activated);
        Ok(shared)
    }

    /// Returns the provider registered under `system_name`, if any.
    ///
    /// Matching is case-insensitive; the cache key is the exact string
    /// passed, so differently-cased lookups for the same logical name each
    /// populate their own entry. Only the customer filter applies to this
    /// lookup. A "no match" outcome is cached like a hit; an activation
    /// error propagates and is not cached.
    pub fn load_provider_by_system_name(
        &self,
        system_name: &str,
        customer: Option<&Customer>,
    ) -> Result<Option<Arc<P>>, VendraError> {
        let mut cache = self
            .by_system_name
            .lock()
            .expect("by-name cache lock poisoned");

        if let Some(outcome) = cache.get(system_name) {
            return Ok(outcome.clone());
        }

        let matched = self
            .entries
            .iter()
            .filter(|entry| filter_by_customer(&entry.descriptor, customer))
            .find(|entry| entry.descriptor.matches_system_name(system_name));

        let outcome = match matched {
            Some(entry) => Some(entry.activate()?),
            None => None,
        };

        cache.insert(system_name.to_owned(), outcome.clone());
        Ok(outcome)
    }

    /// Returns the provider named `system_name` when present and visible,
    /// falling back to the first provider of
    /// [`Self::load_all_providers`], or `None` when both come up empty.
    ///
    /// Callers always get some provider when at least one is configured,
    /// even if the requested name is stale.
    pub fn load_active_provider(
        &self,
        system_name: &str,
        customer: Option<&Customer>,
        store_id: StoreId,
    ) -> Result<Option<Arc<P>>, VendraError> {
        if let Some(provider) = self.load_provider_by_system_name(system_name, customer)? {
            return Ok(Some(provider));
        }

        Ok(self.load_all_providers(customer, store_id)?.first().cloned())
    }

    /// Returns the visible providers whose system name appears in
    /// `system_names`.
    ///
    /// The result preserves the order of [`Self::load_all_providers`], not
    /// the order of `system_names`; membership is case-insensitive.
    pub fn load_active_providers<S: AsRef<str>>(
        &self,
        system_names: &[S],
        customer: Option<&Customer>,
        store_id: StoreId,
    ) -> Result<Vec<Arc<P>>, VendraError> {
        self.load_all_providers(customer, store_id)?;

        let cache = self
            .all_providers
            .lock()
            .expect("all-providers cache lock poisoned");
        let activated = cache
            .as_ref()
            .expect("cache populated by load_all_providers");

        Ok(activated
            .system_names
            .iter()
            .zip(activated.instances.iter())
            .filter(|(name, _)| {
                system_names
                    .iter()
                    .any(|wanted| wanted.as_ref().eq_ignore_ascii_case(name))
            })
            .map(|(_, instance)| Arc::clone(instance))
            .collect())
    }
}

impl<P: ?Sized> fmt::Debug for ProviderRegistry<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderRegistry")
            .field("descriptors", &self.entries.len())
            .finish()
    }
}
