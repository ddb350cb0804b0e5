// SPDX-FileCopyrightText: 2026 Vendra Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Provider contract definitions for the Vendra plugin architecture.
//!
//! Concrete contracts (payment, shipping, tax...) extend the [`Provider`]
//! base trait defined here.

pub mod provider;

pub use provider::Provider;
