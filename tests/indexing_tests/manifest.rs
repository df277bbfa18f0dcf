//! Manifest-backed symbol spaces

use crate::fixtures::manifest_path;
use pretty_assertions::assert_eq;
use selector_resolver::error::SymbolSourceError;
use selector_resolver::{load_symbol_space, SelectorFactory};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_yaml_manifest_lists_every_container() {
    let table = load_symbol_space(&manifest_path("discovery.yaml"), None).unwrap();
    assert_eq!(
        table.container_names(),
        vec![
            "org.example.AbstractTestCase",
            "org.example.Broken",
            "org.example.CalculatorSpec",
            "org.example.LocalTestCase",
            "org.example.TestCaseWithDefaultMethod",
            "org.example.TestInterface",
        ]
    );
}

#[test]
fn test_json_manifest() {
    let factory =
        SelectorFactory::for_space(load_symbol_space(&manifest_path("discovery.json"), None).unwrap());

    assert!(factory.select_member("pkg.Suite#run").unwrap().resolve().unwrap_err().is_ambiguous());
    assert!(factory.select_member("pkg.Suite#run()").unwrap().resolve().is_ok());
    assert!(factory.select_member("pkg.Suite#run(int)").unwrap().resolve().is_ok());
}

#[test]
fn test_missing_symbol_source() {
    let err = load_symbol_space(&manifest_path("missing.yaml"), None).unwrap_err();
    assert!(matches!(err, SymbolSourceError::NotFound { .. }));
}

#[test]
fn test_manifest_with_unknown_field_is_rejected() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("symbols.yaml");
    fs::write(&path, "containers:\n  - name: a.B\n    methods: []\n").unwrap();

    let err = load_symbol_space(&path, None).unwrap_err();
    assert!(matches!(err, SymbolSourceError::ManifestParseError { .. }));
}

#[test]
fn test_manifest_with_duplicate_container_is_rejected() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("symbols.json");
    fs::write(&path, r#"{"containers": [{"name": "a.B"}, {"name": "a.B"}]}"#).unwrap();

    let err = load_symbol_space(&path, None).unwrap_err();
    assert!(matches!(err, SymbolSourceError::InvalidManifest { .. }));
}
