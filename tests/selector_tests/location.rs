//! File, directory, URI and classpath resource selectors

use super::test_utils::*;
use crate::fixtures::{get_test_fixture_path, resource_path};
use pretty_assertions::assert_eq;
use selector_resolver::error::{Error, PreconditionViolation};
use selector_resolver::ResolvedSelector;
use url::Url;

#[test]
fn test_file_selector_from_string_and_path_share_canonical_path() {
    let factory = discovery_factory();
    let path = resource_path("do_not_delete_me.txt");
    let raw = path.to_str().unwrap();

    let from_string = factory.select_file(raw).unwrap();
    let from_path = factory.select_file_path(&path).unwrap();

    assert_eq!(from_string.raw_path(), raw);
    assert_eq!(from_string.path(), from_path.path());
    assert_eq!(from_string.path(), path.canonicalize().unwrap());
    assert_eq!(from_path.raw_path(), from_path.path().display().to_string());
    assert_eq!(from_string, from_path);
}

#[test]
fn test_relative_and_absolute_file_paths_are_equal() {
    let factory = discovery_factory();
    let absolute = resource_path("nested/spec.xml");
    let dotted = get_test_fixture_path("resources", Some("nested/../nested/spec.xml"));

    let a = factory.select_file_path(&absolute).unwrap();
    let b = factory.select_file(dotted.to_str().unwrap()).unwrap();
    assert_eq!(a, b);
    assert_ne!(a.raw_path(), b.raw_path());
}

#[test]
fn test_missing_file_is_a_precondition_violation() {
    let factory = discovery_factory();
    let missing = resource_path("missing.txt");
    assert!(matches!(
        factory.select_file(missing.to_str().unwrap()),
        Err(Error::Precondition(PreconditionViolation::FileNotFound { .. }))
    ));
    assert!(matches!(
        factory.select_file_path(&get_test_fixture_path("resources", None)),
        Err(Error::Precondition(PreconditionViolation::FileNotFound { .. }))
    ));
}

#[test]
fn test_directory_selector() {
    let factory = discovery_factory();
    let directory = get_test_fixture_path("resources", None);

    let selector = factory.select_directory_path(&directory).unwrap();
    assert_eq!(selector.path(), directory.canonicalize().unwrap());
    assert!(matches!(
        factory.select_directory(resource_path("do_not_delete_me.txt").to_str().unwrap()),
        Err(Error::Precondition(PreconditionViolation::DirectoryNotFound { .. }))
    ));
}

#[test]
fn test_uri_selectors() {
    let factory = discovery_factory();

    let selector = factory.select_uri("https://junit.org/junit5").unwrap();
    assert_eq!(selector.raw(), "https://junit.org/junit5");
    assert_eq!(selector.uri().host_str(), Some("junit.org"));

    let from_url = factory.select_url(Url::parse("https://junit.org/junit5").unwrap());
    assert_eq!(selector, from_url);

    assert!(matches!(
        factory.select_uri("foo:"),
        Err(Error::Precondition(PreconditionViolation::InvalidUri { .. }))
    ));
}

#[test]
fn test_classpath_resource_leading_slash() {
    let factory = discovery_factory();
    let with_slash = factory.select_classpath_resource("/nested/spec.xml").unwrap();
    let without = factory.select_classpath_resource("nested/spec.xml").unwrap();
    assert_eq!(with_slash.resource_name(), "nested/spec.xml");
    assert_eq!(with_slash, without);
}

#[test]
fn test_location_selectors_are_deferred() {
    let factory = discovery_factory();
    let selector = factory
        .build(&format!("file:{}", resource_path("do_not_delete_me.txt").display()))
        .unwrap();
    assert_eq!(selector.resolve(), Ok(ResolvedSelector::Deferred));
}
