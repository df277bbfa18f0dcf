use std::path::PathBuf;

pub fn get_test_fixture_path(kind: &str, fixture_name: Option<&str>) -> PathBuf {
    let base = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(kind);
    match fixture_name {
        Some(fixture_name) => base.join(fixture_name),
        None => base,
    }
}

pub fn manifest_path(name: &str) -> PathBuf {
    get_test_fixture_path("manifests", Some(name))
}

pub fn resource_path(name: &str) -> PathBuf {
    get_test_fixture_path("resources", Some(name))
}
