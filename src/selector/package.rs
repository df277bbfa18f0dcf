use std::fmt;

/// Selects every container below a namespace. Resolution belongs to the
/// consuming engine.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PackageSelector {
    package_name: String,
}

impl PackageSelector {
    pub(crate) fn new(package_name: impl Into<String>) -> Self {
        Self {
            package_name: package_name.into(),
        }
    }

    pub fn package_name(&self) -> &str {
        &self.package_name
    }
}

impl fmt::Display for PackageSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PackageSelector [package_name = '{}']", self.package_name)
    }
}
