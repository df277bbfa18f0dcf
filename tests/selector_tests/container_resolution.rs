//! Container resolution, identity and equality

use super::test_utils::*;
use pretty_assertions::assert_eq;
use selector_resolver::error::ResolutionError;
use selector_resolver::symbols::ContainerKind;
use std::collections::HashSet;

#[test]
fn test_resolve_container_by_name() {
    let selector = discovery_factory().select_container(LOCAL_TEST_CASE).unwrap();
    let container = selector.resolve().unwrap();
    assert_eq!(container.name(), LOCAL_TEST_CASE);
    assert_eq!(
        container.supertype_names(),
        &[
            "org.example.AbstractTestCase".to_string(),
            "org.example.TestInterface".to_string()
        ]
    );
}

#[test]
fn test_repeated_resolution_yields_identical_symbol() {
    let factory = discovery_factory();
    let first = factory.select_container(LOCAL_TEST_CASE).unwrap();
    let second = factory.select_container(LOCAL_TEST_CASE).unwrap();

    let a = first.resolve().unwrap();
    assert!(a.ptr_eq(first.resolve().unwrap()));
    assert!(a.ptr_eq(second.resolve().unwrap()));
}

#[test]
fn test_interface_kind() {
    let selector = discovery_factory()
        .select_container("org.example.TestInterface")
        .unwrap();
    assert_eq!(selector.resolve().unwrap().kind(), ContainerKind::Interface);
}

#[test]
fn test_missing_container_fails_on_access_only() {
    let selector = discovery_factory()
        .select_container("org.example.DoesNotExist")
        .unwrap();
    assert_eq!(selector.container_name(), "org.example.DoesNotExist");
    assert!(!selector.is_resolved());

    let err = selector.resolve().unwrap_err();
    assert_eq!(err, ResolutionError::container_not_found("org.example.DoesNotExist"));
    assert_eq!(selector.resolve().unwrap_err(), err);
}

#[test]
fn test_load_failure_is_distinct_from_absence() {
    let selector = discovery_factory().select_container("org.example.Broken").unwrap();
    assert!(matches!(
        selector.resolve(),
        Err(ResolutionError::ContainerLoadFailed { .. })
    ));
}

#[test]
fn test_by_reference_equals_by_name() {
    let factory = discovery_factory();
    let symbol = factory.locator().locate_container(LOCAL_TEST_CASE).unwrap();

    let by_reference = factory.select_container_symbol(symbol.clone());
    let by_name = factory.select_container(LOCAL_TEST_CASE).unwrap();
    assert_eq!(by_reference, by_name);
    assert!(by_reference.resolve().unwrap().ptr_eq(&symbol));

    let unique: HashSet<_> = [by_reference, by_name].into_iter().collect();
    assert_eq!(unique.len(), 1);
}
