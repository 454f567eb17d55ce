use resource_mapping::config::MappingConfig;
use resource_mapping::domain::{self, AuditEntry, Category, LedgerEntry, Order, Person, Product, User};
use resource_mapping::lifecycle::bootstrap;
use resource_mapping::mapping::{CollectionResourceMapping, TypeMapping};
use resource_mapping::model::ResourceType;
use resource_mapping::registry::ResourceMappings;
use std::sync::Arc;
use std::thread;

/// Full bootstrap of the sample domain with default configuration.
#[test]
fn test_sample_domain_by_convention_and_annotation() {
    let mappings = bootstrap(&MappingConfig::default(), domain::descriptors().unwrap()).unwrap();

    let user = mappings.mapping_for("User").expect("User not registered");
    assert_eq!(user.path().to_string(), "/user");
    assert_eq!(user.rel(), "users");
    assert_eq!(user.single_resource_rel(), "user");

    let person = mappings.mapping_for("Person").unwrap();
    assert_eq!(person.path().as_str(), "people");
    assert_eq!(person.rel(), "people");

    let product = mappings.mapping_for("Product").unwrap();
    assert_eq!(product.path().as_str(), "catalog");
    assert_eq!(product.rel(), "products");

    let category = mappings.mapping_for("Category").unwrap();
    assert_eq!(category.rel(), "categories");

    let order = mappings.mapping_for("Order").unwrap();
    assert_eq!(order.path().as_str(), "order");
    assert_eq!(order.rel(), "purchases");
    assert_eq!(order.single_resource_rel(), "order");

    assert!(!mappings.exports_mapping_for("AuditEntry"));
    assert!(!mappings.exports_mapping_for("LedgerEntry"));

    let exported: Vec<_> = mappings
        .exported()
        .map(|m| m.resource_type().simple_name().to_string())
        .collect();
    assert_eq!(exported, vec!["User", "Person", "Product", "Category", "Order"]);
}

/// Config entries override annotations declared in code.
#[test]
fn test_config_overrides_declared_annotations() {
    let config = MappingConfig::parse(
        r#"
        rel_provider = "default"

        [resources.Order]
        path = "purchases"

        [resources.AuditEntry]
        exported = true
        rel = "audit"
        "#,
    )
    .unwrap();

    let mappings = bootstrap(&config, domain::descriptors().unwrap()).unwrap();

    // The config entry replaces Order's declared rel override.
    let order = mappings.mapping_for("Order").unwrap();
    assert_eq!(order.path().as_str(), "purchases");
    assert_eq!(order.rel(), "orderList");

    let audit = mappings.mapping_for("AuditEntry").unwrap();
    assert!(audit.is_exported());
    assert_eq!(audit.rel(), "audit");
    assert_eq!(audit.single_resource_rel(), "auditEntry");

    assert!(mappings.exports_top_level_resource_for("/purchases"));
    assert!(mappings.exports_top_level_resource_for("/auditEntry/"));
    assert!(!mappings.exports_top_level_resource_for("/order"));
}

/// Registering Rust types directly, one by one.
#[test]
fn test_register_rust_types() {
    let mut mappings = ResourceMappings::default();
    mappings.register_type::<User>().unwrap();
    mappings.register_type::<Product>().unwrap();
    mappings.register_type::<Category>().unwrap();
    mappings.register_type::<User>().unwrap();

    assert_eq!(mappings.len(), 3);
    assert!(mappings.exports_top_level_resource_for("/catalog"));
    assert!(!mappings.exports_top_level_resource_for("/product"));
}

#[test]
fn test_type_mapping_for_rust_types() {
    let person = TypeMapping::for_type::<Person>().unwrap();
    assert_eq!(person.rel(), "people");

    let audit = TypeMapping::for_type::<AuditEntry>().unwrap();
    assert!(!audit.is_exported());

    let ledger = TypeMapping::for_type::<LedgerEntry>().unwrap();
    assert!(!ledger.is_exported());
    assert_eq!(ledger.path().as_str(), "ledgerEntry");

    assert_eq!(Order::descriptor().unwrap().simple_name(), "Order");
}

/// A finished registry is read concurrently without locks.
#[test]
fn test_concurrent_reads() {
    let mappings = Arc::new(bootstrap(&MappingConfig::default(), domain::descriptors().unwrap()).unwrap());

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let mappings = Arc::clone(&mappings);
            thread::spawn(move || {
                (0..100)
                    .map(|_| mappings.mapping_for("Person").unwrap().rel().to_string())
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    for handle in handles {
        let rels = handle.join().unwrap();
        assert!(rels.iter().all(|rel| rel == "people"));
    }
}
