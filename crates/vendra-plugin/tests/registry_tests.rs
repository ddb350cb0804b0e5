// SPDX-FileCopyrightText: 2026 Vendra Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Integration tests for the Vendra provider plugin system.
//!
//! Exercises the full path: provider manifests are parsed into descriptors,
//! a static source feeds a registry per contract, the manager keys the
//! registries, and configuration drives active-provider selection.

use std::sync::Arc;

use vendra_config::load_and_validate_str;
use vendra_core::Provider;
use vendra_core::types::{Customer, CustomerRole, CustomerRoleId, ProviderKind, StoreId};
use vendra_plugin::{
    ProviderEntry, ProviderManager, ProviderRegistry, StaticDescriptorSource,
    parse_provider_manifest,
};

trait PaymentMethod: Provider {
    /// Whether the method needs manual capture by a store operator.
    fn requires_manual_capture(&self) -> bool;
}

struct ManualPayment;

impl Provider for ManualPayment {
    fn system_name(&self) -> &str {
        "payments.manual"
    }

    fn kind(&self) -> ProviderKind {
        ProviderKind::Payment
    }
}

impl PaymentMethod for ManualPayment {
    fn requires_manual_capture(&self) -> bool {
        true
    }
}

struct InvoicePayment;

impl Provider for InvoicePayment {
    fn system_name(&self) -> &str {
        "payments.invoice"
    }

    fn kind(&self) -> ProviderKind {
        ProviderKind::Payment
    }
}

impl PaymentMethod for InvoicePayment {
    fn requires_manual_capture(&self) -> bool {
        false
    }
}

struct WholesalePayment;

impl Provider for WholesalePayment {
    fn system_name(&self) -> &str {
        "payments.wholesale"
    }

    fn kind(&self) -> ProviderKind {
        ProviderKind::Payment
    }
}

impl PaymentMethod for WholesalePayment {
    fn requires_manual_capture(&self) -> bool {
        false
    }
}

const MANUAL_MANIFEST: &str = r#"
[provider]
system_name = "payments.manual"
friendly_name = "Manual payment"
version = "0.1.0"
group = "Payment"
display_order = 1
"#;

const INVOICE_MANIFEST: &str = r#"
[provider]
system_name = "payments.invoice"
friendly_name = "Pay by invoice"
version = "0.2.0"
group = "Payment"
display_order = 2
limited_to_stores = [5]
"#;

const WHOLESALE_MANIFEST: &str = r#"
[provider]
system_name = "payments.wholesale"
friendly_name = "Wholesale terms"
version = "0.1.0"
group = "Payment"
display_order = 3
limited_to_customer_roles = [7]
"#;

fn payment_registry() -> ProviderRegistry<dyn PaymentMethod> {
    let entries = vec![
        ProviderEntry::from_instance(
            parse_provider_manifest(MANUAL_MANIFEST).unwrap(),
            Arc::new(ManualPayment) as Arc<dyn PaymentMethod>,
        ),
        ProviderEntry::from_instance(
            parse_provider_manifest(INVOICE_MANIFEST).unwrap(),
            Arc::new(InvoicePayment) as Arc<dyn PaymentMethod>,
        ),
        ProviderEntry::from_instance(
            parse_provider_manifest(WHOLESALE_MANIFEST).unwrap(),
            Arc::new(WholesalePayment) as Arc<dyn PaymentMethod>,
        ),
    ];
    ProviderRegistry::new(&StaticDescriptorSource::new(entries)).unwrap()
}

fn wholesale_customer() -> Customer {
    Customer {
        id: 42,
        roles: vec![CustomerRole {
            id: CustomerRoleId(7),
            system_name: "Wholesale".into(),
            active: true,
        }],
    }
}

fn retail_customer() -> Customer {
    Customer {
        id: 43,
        roles: vec![CustomerRole {
            id: CustomerRoleId(1),
            system_name: "Registered".into(),
            active: true,
        }],
    }
}

/// Config-selected payment methods come back in catalogue order, restricted
/// to what the customer and store may see.
#[test]
fn config_drives_active_payment_selection() {
    let config = load_and_validate_str(
        r#"
[store]
store_id = 5

[payment]
active_system_names = ["payments.wholesale", "payments.invoice", "payments.manual"]
default_system_name = "payments.invoice"
"#,
    )
    .expect("config should load");

    let registry = payment_registry();
    let store_id = StoreId(config.store.store_id);
    let customer = wholesale_customer();

    let offered = registry
        .load_active_providers(&config.payment.active_system_names, Some(&customer), store_id)
        .unwrap();
    let names: Vec<&str> = offered.iter().map(|p| p.system_name()).collect();
    assert_eq!(
        names,
        vec!["payments.manual", "payments.invoice", "payments.wholesale"]
    );

    let default = registry
        .load_active_provider(
            config.payment.default_system_name.as_deref().unwrap(),
            Some(&customer),
            store_id,
        )
        .unwrap()
        .expect("default payment method resolves");
    assert_eq!(default.system_name(), "payments.invoice");
    assert!(!default.requires_manual_capture());
}

/// A retail customer never sees the wholesale-only method; a registry built
/// for their scope reflects that in every lookup.
#[test]
fn role_restricted_methods_stay_hidden_from_other_customers() {
    let registry = payment_registry();
    let customer = retail_customer();

    let all = registry
        .load_all_providers(Some(&customer), StoreId::ALL)
        .unwrap();
    let names: Vec<&str> = all.iter().map(|p| p.system_name()).collect();
    assert_eq!(names, vec!["payments.manual", "payments.invoice"]);

    assert!(
        registry
            .load_provider_by_system_name("payments.wholesale", Some(&customer))
            .unwrap()
            .is_none()
    );
}

/// A stale configured default falls back to the first visible method.
#[test]
fn stale_default_falls_back_to_first_visible_method() {
    let registry = payment_registry();

    let active = registry
        .load_active_provider("payments.retired", None, StoreId::ALL)
        .unwrap()
        .expect("fallback yields the first catalogue entry");
    assert_eq!(active.system_name(), "payments.manual");
    assert!(active.requires_manual_capture());
}

/// Registries for distinct contracts coexist in the manager and resolve
/// independently.
#[test]
fn manager_routes_lookups_to_the_right_contract() {
    let mut manager = ProviderManager::new();
    manager.register(payment_registry()).unwrap();

    let registry = manager.registry::<dyn PaymentMethod>().unwrap();
    let provider = registry
        .load_active_provider("payments.manual", None, StoreId::ALL)
        .unwrap()
        .expect("manual payment resolves through the manager");
    assert_eq!(provider.kind(), ProviderKind::Payment);
}
