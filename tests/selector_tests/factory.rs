//! Factory entry points: `build`, prefixes, ambiguous names and unique ids

use super::test_utils::*;
use crate::fixtures::{get_test_fixture_path, resource_path};
use pretty_assertions::assert_eq;
use selector_resolver::error::{Error, PreconditionViolation};
use selector_resolver::selector::UniqueId;
use selector_resolver::{DiscoverySelector, SelectorKind};
use std::path::Path;

fn kinds(selectors: &[DiscoverySelector]) -> Vec<SelectorKind> {
    selectors.iter().map(DiscoverySelector::kind).collect()
}

#[test]
#[allow(deprecated)]
fn test_ambiguous_names_decision_table() {
    let selectors = discovery_factory()
        .build_from_ambiguous_names([
            "org.example.LocalTestCase",
            "org.example.LocalTestCase#test1",
            "org.example.pkg",
        ])
        .unwrap();

    assert_eq!(
        kinds(&selectors),
        vec![SelectorKind::Container, SelectorKind::Member, SelectorKind::Package]
    );
}

#[test]
#[allow(deprecated)]
fn test_ambiguous_names_preserve_order_and_count() {
    let names = [
        "org.example.pkg",
        "org.example.LocalTestCase.test4(java.lang.String)",
        "org.example.Broken",
        "org.example.TestInterface",
        "org.example.pkg",
    ];
    let selectors = discovery_factory().build_from_ambiguous_names(names).unwrap();

    assert_eq!(selectors.len(), names.len());
    assert_eq!(
        kinds(&selectors),
        vec![
            SelectorKind::Package,
            SelectorKind::Member,
            SelectorKind::Package,
            SelectorKind::Container,
            SelectorKind::Package,
        ]
    );
    let member = selectors[1].as_member().unwrap();
    assert_eq!(member.container_name(), "org.example.LocalTestCase");
    assert!(member.resolve().is_ok());
}

#[test]
#[allow(deprecated)]
fn test_ambiguous_names_reject_blank() {
    let err = discovery_factory()
        .build_from_ambiguous_names(["org.example.LocalTestCase", "  "])
        .unwrap_err();
    assert!(matches!(err, Error::Precondition(PreconditionViolation::Blank { .. })));
}

#[test]
fn test_blank_input_fails_at_every_entry_point() {
    let factory = discovery_factory();
    let container = factory.locator().locate_container(LOCAL_TEST_CASE).unwrap();

    let outcomes: Vec<(&str, Result<(), Error>)> = vec![
        ("unique id", factory.select_unique_id(" ").map(drop)),
        ("package", factory.select_package("").map(drop)),
        ("container", factory.select_container("\t").map(drop)),
        ("member", factory.select_member(" ").map(drop)),
        ("member in: container", factory.select_member_in("", "test1").map(drop)),
        ("member in: member", factory.select_member_in(LOCAL_TEST_CASE, " ").map(drop)),
        (
            "member with parameters",
            factory.select_member_with_parameters(LOCAL_TEST_CASE, "", "int").map(drop),
        ),
        ("member of", factory.select_member_of(container, "").map(drop)),
        ("file", factory.select_file(" ").map(drop)),
        ("file path", factory.select_file_path(Path::new("")).map(drop)),
        ("directory", factory.select_directory("").map(drop)),
        ("directory path", factory.select_directory_path(Path::new("")).map(drop)),
        ("uri", factory.select_uri("  ").map(drop)),
        ("classpath resource", factory.select_classpath_resource("").map(drop)),
        ("build", factory.build("   ").map(drop)),
        ("build with prefix", factory.build("class:").map(drop)),
    ];

    for (entry_point, outcome) in outcomes {
        assert!(
            matches!(outcome, Err(Error::Precondition(PreconditionViolation::Blank { .. }))),
            "{entry_point} should reject blank input, got {outcome:?}"
        );
    }
}

#[test]
fn test_select_member_without_separator_is_rejected() {
    let err = discovery_factory().select_member("org.example.LocalTestCase").unwrap_err();
    assert!(matches!(
        err,
        Error::Precondition(PreconditionViolation::InvalidArgument { .. })
    ));
}

#[test]
fn test_malformed_member_text_is_a_parse_error() {
    let factory = discovery_factory();
    for bad in [
        "org.example.LocalTestCase#test4(int",
        "org.example.LocalTestCase#test4(int))",
        "org.example.LocalTestCase#test4(a,,b)",
        "org.example.LocalTestCase#(int)",
        "#test4",
    ] {
        assert!(
            matches!(factory.select_member(bad), Err(Error::Parse(_))),
            "expected parse error for {bad}"
        );
    }
}

#[test]
fn test_build_with_kind_prefixes() {
    let factory = discovery_factory();
    let directory = get_test_fixture_path("resources", None);
    let file = resource_path("do_not_delete_me.txt");

    let cases = vec![
        (
            "uid:[engine:junit-jupiter]/[class:org.example.LocalTestCase]".to_string(),
            SelectorKind::UniqueId,
        ),
        ("package:org.example".to_string(), SelectorKind::Package),
        ("class:org.example.pkg".to_string(), SelectorKind::Container),
        ("container:org.example.LocalTestCase".to_string(), SelectorKind::Container),
        ("method:org.example.LocalTestCase#test1()".to_string(), SelectorKind::Member),
        ("member:org.example.LocalTestCase#test1".to_string(), SelectorKind::Member),
        (format!("file:{}", file.display()), SelectorKind::File),
        (format!("directory:{}", directory.display()), SelectorKind::Directory),
        ("uri:https://junit.org".to_string(), SelectorKind::Uri),
        ("resource:/do_not_delete_me.txt".to_string(), SelectorKind::ClasspathResource),
        ("classpath:nested/spec.xml".to_string(), SelectorKind::ClasspathResource),
    ];

    for (raw, expected) in cases {
        let selector = factory.build(&raw).unwrap();
        assert_eq!(selector.kind(), expected, "kind of {raw}");
    }
}

#[test]
fn test_build_unprefixed_text_is_classified() {
    let factory = discovery_factory();
    assert_eq!(
        factory.build("org.example.LocalTestCase").unwrap().kind(),
        SelectorKind::Container
    );
    assert_eq!(
        factory.build("org.example.LocalTestCase#test1").unwrap().kind(),
        SelectorKind::Member
    );
    assert_eq!(factory.build("org.example").unwrap().kind(), SelectorKind::Package);
}

#[test]
fn test_build_surfaces_precondition_failures() {
    let factory = discovery_factory();
    assert!(matches!(
        factory.build("uri:foo:"),
        Err(Error::Precondition(PreconditionViolation::InvalidUri { .. }))
    ));
    assert!(matches!(
        factory.build("file:/definitely/not/here.txt"),
        Err(Error::Precondition(PreconditionViolation::FileNotFound { .. }))
    ));
    assert!(matches!(
        factory.build("uid:engine:x"),
        Err(Error::Parse(_))
    ));
}

#[test]
fn test_unique_id_disambiguates_overloads() {
    let factory = discovery_factory();
    let id = UniqueId::for_member("junit-jupiter", LOCAL_TEST_CASE, "test4(org.example.TestInfo)");

    let selector = factory.select_from_unique_id(&id).unwrap();
    let member = selector.as_member().unwrap();
    assert_eq!(
        member.member().unwrap().parameter_types(),
        &["org.example.TestInfo".to_string()]
    );

    let container_id = factory
        .select_unique_id("[engine:junit-jupiter]/[class:org.example.LocalTestCase]")
        .unwrap();
    let container = factory.select_from_unique_id(&container_id).unwrap();
    assert_eq!(container.kind(), SelectorKind::Container);
    assert!(container.resolve().is_ok());
}

#[test]
fn test_select_unique_id_round_trips_text() {
    let raw = "[engine:junit-jupiter]/[class:org.example.LocalTestCase]/[method:test4()]";
    let id = discovery_factory().select_unique_id(raw).unwrap();
    assert_eq!(id.to_string(), raw);
    assert_eq!(id.member_text(), Some("test4()"));
}
