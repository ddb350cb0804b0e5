// SPDX-FileCopyrightText: 2026 Vendra Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Common types used across the provider registry and configuration.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Unique identifier for a customer role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CustomerRoleId(pub u64);

/// Unique identifier for a store in a multi-store deployment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StoreId(pub u64);

impl StoreId {
    /// Sentinel meaning "no store filtering" in lookup operations.
    pub const ALL: StoreId = StoreId(0);

    /// Returns true if this is the unfiltered sentinel.
    pub fn is_all(self) -> bool {
        self == StoreId::ALL
    }
}

/// A role held by a customer.
///
/// Only active roles participate in provider visibility filtering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerRole {
    /// Role identifier, matched against descriptor role restrictions.
    pub id: CustomerRoleId,
    /// Stable name of the role (e.g., "Registered", "Administrators").
    pub system_name: String,
    /// Whether the role currently applies to the customer.
    pub active: bool,
}

/// A customer with their assigned roles.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Customer {
    /// Customer identifier.
    pub id: u64,
    /// Roles assigned to the customer, active or not.
    pub roles: Vec<CustomerRole>,
}

impl Customer {
    /// Identifiers of the customer's active roles.
    pub fn active_role_ids(&self) -> impl Iterator<Item = CustomerRoleId> + '_ {
        self.roles
            .iter()
            .filter(|role| role.active)
            .map(|role| role.id)
    }
}

/// Identifies the group a provider plugin belongs to.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
pub enum ProviderKind {
    Payment,
    Shipping,
    Tax,
    ExternalAuth,
    Widget,
    Misc,
}
