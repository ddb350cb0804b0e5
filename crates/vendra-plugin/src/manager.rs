// SPDX-FileCopyrightText: 2026 Vendra Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Contract-keyed collection of provider registries.
//!
//! [`ProviderManager`] holds one [`ProviderRegistry`] per provider contract
//! type, keyed by the contract's `TypeId`. Registries are registered once
//! during wiring and resolved read-only afterwards.

use std::any::{Any, TypeId, type_name};
use std::collections::HashMap;
use std::fmt;

use tracing::info;
use vendra_core::VendraError;

use crate::registry::ProviderRegistry;

/// Holds one [`ProviderRegistry`] per provider contract type.
///
/// The contract type `P` is usually a `dyn` contract trait object (e.g.,
/// `dyn PaymentMethod`).
pub struct ProviderManager {
    registries: HashMap<TypeId, Box<dyn Any + Send + Sync>>,
}

impl ProviderManager {
    /// Create an empty manager.
    pub fn new() -> Self {
        Self {
            registries: HashMap::new(),
        }
    }

    /// Register the registry for contract `P`.
    ///
    /// Fails if a registry for `P` is already present.
    pub fn register<P>(&mut self, registry: ProviderRegistry<P>) -> Result<(), VendraError>
    where
        P: ?Sized + Send + Sync + 'static,
    {
        let type_id = TypeId::of::<P>();
        if self.registries.contains_key(&type_id) {
            return Err(VendraError::ContractAlreadyRegistered {
                contract: type_name::<P>(),
            });
        }

        self.registries.insert(type_id, Box::new(registry));
        info!(contract = type_name::<P>(), "provider registry registered");
        Ok(())
    }

    /// Resolve the registry for contract `P`.
    pub fn registry<P>(&self) -> Result<&ProviderRegistry<P>, VendraError>
    where
        P: ?Sized + Send + Sync + 'static,
    {
        let registry = self
            .registries
            .get(&TypeId::of::<P>())
            .ok_or(VendraError::ContractNotRegistered {
                contract: type_name::<P>(),
            })?;

        registry
            .downcast_ref::<ProviderRegistry<P>>()
            .ok_or_else(|| {
                VendraError::Internal(format!("registry type mismatch for {}", type_name::<P>()))
            })
    }

    /// Whether a registry for contract `P` is present.
    pub fn has<P>(&self) -> bool
    where
        P: ?Sized + 'static,
    {
        self.registries.contains_key(&TypeId::of::<P>())
    }

    /// Number of registered contracts.
    pub fn len(&self) -> usize {
        self.registries.len()
    }

    /// Returns true if no contracts are registered.
    pub fn is_empty(&self) -> bool {
        self.registries.is_empty()
    }
}

impl Default for ProviderManager {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ProviderManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderManager")
            .field("contracts", &self.registries.len())
            .finish()
    }
}
