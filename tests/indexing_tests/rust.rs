//! Rust source indexing

use crate::fixtures::get_test_fixture_path;
use pretty_assertions::assert_eq;
use selector_resolver::cli::Language;
use selector_resolver::symbols::languages::detect_language;
use selector_resolver::symbols::ContainerKind;
use selector_resolver::{load_symbol_space, SelectorFactory, SymbolSpace, SymbolTable};

fn calculator_path() -> std::path::PathBuf {
    get_test_fixture_path("rust", Some("calculator"))
}

fn calculator() -> SymbolTable {
    load_symbol_space(&calculator_path(), None).expect("Failed to index Rust fixture")
}

#[test]
fn test_detects_rust_project() {
    assert_eq!(detect_language(&calculator_path()), Some(Language::Rust));
}

#[test]
fn test_indexed_containers() {
    assert_eq!(
        calculator().container_names(),
        vec![
            "crate",
            "crate::Calculator",
            "crate::Check",
            "crate::Scale",
            "crate::ops",
            "crate::ops::Matrix",
            "crate::tests",
        ]
    );
}

#[test]
fn test_trait_impls_become_supertypes() {
    let table = calculator();
    let calculator = table.load_container("crate::Calculator").unwrap().unwrap();
    assert_eq!(calculator.kind(), ContainerKind::Class);
    assert_eq!(
        calculator.supertype_names(),
        &["crate::Check".to_string(), "crate::Scale".to_string()]
    );

    let check = table.load_container("crate::Check").unwrap().unwrap();
    assert_eq!(check.kind(), ContainerKind::Interface);
}

#[test]
fn test_resolve_members() {
    let factory = SelectorFactory::for_space(calculator());

    let add_all = factory.select_member("crate::Calculator#add_all(&[i64])").unwrap();
    assert_eq!(add_all.member().unwrap().descriptor(), "add_all(&[i64])");

    let free_fn = factory.select_member("crate::ops#div(i64, i64)").unwrap();
    assert!(free_fn.resolve().is_ok());

    let generic_impl = factory.select_member("crate::ops::Matrix#get").unwrap();
    assert_eq!(
        generic_impl.member().unwrap().parameter_types(),
        &["usize".to_string(), "usize".to_string()]
    );

    let test_fn = factory.select_member("crate::tests#adds_numbers()").unwrap();
    assert!(test_fn.resolve().is_ok());
}

#[test]
fn test_trait_default_method_is_inherited() {
    let factory = SelectorFactory::for_space(calculator());
    let describe = factory.select_member("crate::Calculator#describe").unwrap();
    let member = describe.member().unwrap();
    assert!(member.is_default());
    assert_eq!(member.declaring_container(), "crate::Check");

    let verify = factory.select_member("crate::Calculator#verify()").unwrap();
    assert_eq!(verify.member().unwrap().declaring_container(), "crate::Calculator");
}

#[test]
fn test_inherent_and_trait_methods_with_same_name_are_ambiguous() {
    let factory = SelectorFactory::for_space(calculator());

    let err = factory
        .select_member("crate::Calculator#scale")
        .unwrap()
        .resolve()
        .unwrap_err();
    assert!(err.is_ambiguous());

    let by_float = factory.select_member("crate::Calculator#scale(f64)").unwrap();
    assert!(by_float.resolve().is_ok());
}

#[test]
fn test_build_rust_path_selectors() {
    let factory = SelectorFactory::for_space(calculator());
    let container = factory.build("crate::ops::Matrix").unwrap();
    assert!(container.as_container().is_some());
    assert!(container.resolve().is_ok());

    let member = factory.build("crate::Calculator::add(i64)").unwrap();
    assert_eq!(member.as_member().unwrap().container_name(), "crate::Calculator");
    assert!(member.resolve().is_ok());
}
