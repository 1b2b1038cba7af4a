//! Composition Invariant Tests
//!
//! Tests for nested-object composition:
//! - Continue-marked composites splice child descriptors immediately after
//!   their own entry, namespaced under the parent field path
//! - Unmarked composites do not descend
//! - Self-referential models terminate; revisits resolve as restricted

use formguard::descriptor::DescriptorBuilder;
use formguard::model::{
    CompositionMark, FieldDecl, TargetModel, TargetRegistry, TriggerMode,
};
use formguard::overrides::OverrideStore;
use formguard::rules::{RuleId, RuleRegistry};

// =============================================================================
// Helper Functions
// =============================================================================

/// A parent with two identical composite fields, only one marked continue,
/// plus the child model they reference.
fn composite_fixture() -> (RuleRegistry, TargetRegistry, OverrideStore) {
    let rules = RuleRegistry::with_stock_rules();

    let mut targets = TargetRegistry::new();
    targets
        .register(TargetModel::new(
            "CustomerRecord",
            vec![
                FieldDecl::scalar("Id"),
                FieldDecl::composite("Contact", "ContactDetails")
                    .with_composition(CompositionMark::Continue),
                FieldDecl::composite("BillingContact", "ContactDetails"),
            ],
        ))
        .unwrap();
    targets
        .register(TargetModel::new(
            "ContactDetails",
            vec![
                FieldDecl::scalar("Email").with_rule(RuleId::email(), None),
                FieldDecl::scalar("Name").with_rule(RuleId::required(), None),
            ],
        ))
        .unwrap();

    (rules, targets, OverrideStore::new())
}

fn field_paths(
    builder: &DescriptorBuilder<'_>,
    target: &str,
) -> Vec<String> {
    builder
        .build(target)
        .unwrap()
        .fields
        .iter()
        .map(|f| f.field.clone())
        .collect()
}

// =============================================================================
// Continue vs Restricted
// =============================================================================

/// Children splice in immediately after the continue-marked parent entry;
/// the unmarked composite stays opaque.
#[test]
fn test_children_spliced_only_for_continue_field() {
    let (rules, targets, overrides) = composite_fixture();
    let builder = DescriptorBuilder::new(&rules, &targets, &overrides);

    assert_eq!(
        field_paths(&builder, "CustomerRecord"),
        vec![
            "Id",
            "Contact",
            "Contact.Email",
            "Contact.Name",
            "BillingContact",
        ]
    );
}

/// Spliced child entries carry the child's resolved rules.
#[test]
fn test_spliced_children_keep_their_rules() {
    let (rules, targets, overrides) = composite_fixture();
    let builder = DescriptorBuilder::new(&rules, &targets, &overrides);

    let descriptor = builder.build("CustomerRecord").unwrap();
    let email = descriptor.field("Contact.Email").unwrap();
    assert_eq!(email.rules.len(), 1);
    assert_eq!(email.rules[0].rule, "email");
    assert_eq!(email.rules[0].mode, TriggerMode::Live);
}

/// An explicit restricted mark behaves like the composite default.
#[test]
fn test_explicit_restricted_mark_suppresses_descent() {
    let rules = RuleRegistry::with_stock_rules();
    let mut targets = TargetRegistry::new();
    targets
        .register(TargetModel::new(
            "Wrapper",
            vec![FieldDecl::composite("Inner", "Leaf")
                .with_composition(CompositionMark::Restricted)],
        ))
        .unwrap();
    targets
        .register(TargetModel::new("Leaf", vec![FieldDecl::scalar("Value")]))
        .unwrap();

    let overrides = OverrideStore::new();
    let builder = DescriptorBuilder::new(&rules, &targets, &overrides);

    assert_eq!(field_paths(&builder, "Wrapper"), vec!["Inner"]);
}

// =============================================================================
// Nesting Depth & Namespacing
// =============================================================================

/// Two levels of continue composition namespace grandchildren under the full
/// parent path.
#[test]
fn test_nested_continue_namespacing() {
    let rules = RuleRegistry::with_stock_rules();
    let mut targets = TargetRegistry::new();
    targets
        .register(TargetModel::new(
            "Order",
            vec![FieldDecl::composite("Buyer", "Person")
                .with_composition(CompositionMark::Continue)],
        ))
        .unwrap();
    targets
        .register(TargetModel::new(
            "Person",
            vec![
                FieldDecl::scalar("Name"),
                FieldDecl::composite("Home", "Address")
                    .with_composition(CompositionMark::Continue),
            ],
        ))
        .unwrap();
    targets
        .register(TargetModel::new(
            "Address",
            vec![FieldDecl::scalar("City")],
        ))
        .unwrap();

    let overrides = OverrideStore::new();
    let builder = DescriptorBuilder::new(&rules, &targets, &overrides);

    assert_eq!(
        field_paths(&builder, "Order"),
        vec!["Buyer", "Buyer.Name", "Buyer.Home", "Buyer.Home.City"]
    );
}

// =============================================================================
// Recursion Guard
// =============================================================================

/// A self-referential model terminates; the second occurrence of the type on
/// the path resolves as restricted and produces no spliced children.
#[test]
fn test_self_referential_model_terminates() {
    let rules = RuleRegistry::with_stock_rules();
    let mut targets = TargetRegistry::new();
    targets
        .register(TargetModel::new(
            "TreeNode",
            vec![
                FieldDecl::scalar("Value"),
                FieldDecl::composite("Parent", "TreeNode")
                    .with_composition(CompositionMark::Continue),
            ],
        ))
        .unwrap();

    let overrides = OverrideStore::new();
    let builder = DescriptorBuilder::new(&rules, &targets, &overrides);

    assert_eq!(field_paths(&builder, "TreeNode"), vec!["Value", "Parent"]);
}

/// Mutually recursive models terminate the same way.
#[test]
fn test_mutual_recursion_terminates() {
    let rules = RuleRegistry::with_stock_rules();
    let mut targets = TargetRegistry::new();
    targets
        .register(TargetModel::new(
            "Employee",
            vec![
                FieldDecl::scalar("Name"),
                FieldDecl::composite("Team", "Department")
                    .with_composition(CompositionMark::Continue),
            ],
        ))
        .unwrap();
    targets
        .register(TargetModel::new(
            "Department",
            vec![
                FieldDecl::scalar("Title"),
                FieldDecl::composite("Lead", "Employee")
                    .with_composition(CompositionMark::Continue),
            ],
        ))
        .unwrap();

    let overrides = OverrideStore::new();
    let builder = DescriptorBuilder::new(&rules, &targets, &overrides);

    // Employee -> Team splices Department; Department.Lead revisits Employee
    // and is guarded.
    assert_eq!(
        field_paths(&builder, "Employee"),
        vec!["Name", "Team", "Team.Title", "Team.Lead"]
    );
}

/// The same child type is allowed on sibling branches; only the current path
/// counts for the guard.
#[test]
fn test_revisit_allowed_across_sibling_branches() {
    let rules = RuleRegistry::with_stock_rules();
    let mut targets = TargetRegistry::new();
    targets
        .register(TargetModel::new(
            "Shipment",
            vec![
                FieldDecl::composite("Origin", "Address")
                    .with_composition(CompositionMark::Continue),
                FieldDecl::composite("Destination", "Address")
                    .with_composition(CompositionMark::Continue),
            ],
        ))
        .unwrap();
    targets
        .register(TargetModel::new(
            "Address",
            vec![FieldDecl::scalar("City")],
        ))
        .unwrap();

    let overrides = OverrideStore::new();
    let builder = DescriptorBuilder::new(&rules, &targets, &overrides);

    assert_eq!(
        field_paths(&builder, "Shipment"),
        vec![
            "Origin",
            "Origin.City",
            "Destination",
            "Destination.City",
        ]
    );
}
