//! Memoization under concurrent first access

use super::test_utils::*;
use selector_resolver::identifier::ParameterSignature;
use selector_resolver::SymbolSpace;
use std::sync::Arc;
use std::thread;

const THREADS: usize = 8;

#[test]
fn test_selectors_are_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<selector_resolver::DiscoverySelector>();
    assert_send_sync::<selector_resolver::SelectorFactory>();
}

#[test]
fn test_concurrent_first_access_resolves_once() {
    let (space, factory) = counting_factory();

    let baseline = factory
        .select_member("org.example.LocalTestCase#test4(java.lang.String)")
        .unwrap();
    baseline.resolve().unwrap();
    let loads_per_resolution = space.loads();
    assert!(loads_per_resolution > 0);
    space.reset();

    let selector = Arc::new(
        factory
            .select_member("org.example.LocalTestCase#test4(java.lang.String)")
            .unwrap(),
    );
    let members: Vec<_> = thread::scope(|scope| {
        let handles: Vec<_> = (0..THREADS)
            .map(|_| {
                let selector = Arc::clone(&selector);
                scope.spawn(move || selector.member().unwrap().clone())
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    assert_eq!(space.loads(), loads_per_resolution);
    assert!(members.iter().all(|m| m.ptr_eq(&members[0])));
    assert!(members[0].ptr_eq(selector.member().unwrap()));
}

#[test]
fn test_concurrent_failures_are_cached_once() {
    let (space, factory) = counting_factory();
    let selector = factory.select_container("org.example.Missing").unwrap();

    let errors: Vec<_> = thread::scope(|scope| {
        let handles: Vec<_> = (0..THREADS)
            .map(|_| scope.spawn(|| selector.resolve().unwrap_err()))
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    assert_eq!(space.loads(), 1);
    assert!(errors.iter().all(|e| e == &errors[0]));
}

#[test]
fn test_by_reference_selectors_never_touch_the_locator() {
    let (space, factory) = counting_factory();
    let container = space.container(LOCAL_TEST_CASE);
    let member = space
        .table()
        .find_member(&container, "test4", Some(&ParameterSignature::empty()))
        .unwrap();
    assert_eq!(space.loads(), 0);

    let container_selector = factory.select_container_symbol(container.clone());
    let member_selector = factory.select_member_symbol(container.clone(), member.clone());

    assert!(container_selector.resolve().unwrap().ptr_eq(&container));
    assert!(member_selector.member().unwrap().ptr_eq(&member));
    assert!(member_selector.container().unwrap().ptr_eq(&container));
    assert_eq!(space.loads(), 0);
}

#[test]
fn test_construction_and_display_are_lazy() {
    let (space, factory) = counting_factory();
    let container = factory.select_container(LOCAL_TEST_CASE).unwrap();
    let member = factory.select_member("org.example.LocalTestCase#test1").unwrap();

    let _ = container.to_string();
    let _ = member.to_string();
    assert_eq!(container, factory.select_container(LOCAL_TEST_CASE).unwrap());
    assert_eq!(space.loads(), 0);

    member.resolve().unwrap();
    assert!(space.loads() > 0);
}
