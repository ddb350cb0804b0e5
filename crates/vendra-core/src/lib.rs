// SPDX-FileCopyrightText: 2026 Vendra Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for the Vendra provider framework.
//!
//! This crate provides the error type, common domain types, and the base
//! provider trait used throughout the Vendra workspace. Provider plugins
//! implement contract traits that extend [`Provider`].

pub mod error;
pub mod traits;
pub mod types;

// Re-export key items at crate root for ergonomic imports.
pub use error::VendraError;
pub use traits::Provider;
pub use types::{Customer, CustomerRole, CustomerRoleId, ProviderKind, StoreId};
