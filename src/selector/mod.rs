//! Selector value types.
//!
//! Container and member selectors resolve lazily through a single
//! initialization slot; every other kind is validated when built and is
//! handed to the consuming engine as-is.
mod container;
mod location;
mod member;
mod package;
mod unique_id;

pub use container::ContainerSelector;
pub use location::{ClasspathResourceSelector, DirectorySelector, FileSelector, UriSelector};
pub use member::{MemberSelector, ResolvedMember};
pub use package::PackageSelector;
pub use unique_id::{Segment, UniqueId};

use serde::Serialize;
use std::fmt;

use crate::error::ResolutionError;
use crate::symbols::ContainerSymbol;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectorKind {
    UniqueId,
    Package,
    Container,
    Member,
    File,
    Directory,
    Uri,
    ClasspathResource,
}

impl SelectorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::UniqueId => "unique_id",
            Self::Package => "package",
            Self::Container => "container",
            Self::Member => "member",
            Self::File => "file",
            Self::Directory => "directory",
            Self::Uri => "uri",
            Self::ClasspathResource => "classpath_resource",
        }
    }
}

impl fmt::Display for SelectorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DiscoverySelector {
    UniqueId(UniqueId),
    Package(PackageSelector),
    Container(ContainerSelector),
    Member(MemberSelector),
    File(FileSelector),
    Directory(DirectorySelector),
    Uri(UriSelector),
    ClasspathResource(ClasspathResourceSelector),
}

/// Outcome of [`DiscoverySelector::resolve`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolvedSelector<'a> {
    Container(&'a ContainerSymbol),
    Member(&'a ResolvedMember),
    /// Kinds the symbol space cannot resolve; left to the engine.
    Deferred,
}

impl DiscoverySelector {
    pub fn kind(&self) -> SelectorKind {
        match self {
            Self::UniqueId(_) => SelectorKind::UniqueId,
            Self::Package(_) => SelectorKind::Package,
            Self::Container(_) => SelectorKind::Container,
            Self::Member(_) => SelectorKind::Member,
            Self::File(_) => SelectorKind::File,
            Self::Directory(_) => SelectorKind::Directory,
            Self::Uri(_) => SelectorKind::Uri,
            Self::ClasspathResource(_) => SelectorKind::ClasspathResource,
        }
    }

    pub fn resolve(&self) -> Result<ResolvedSelector<'_>, ResolutionError> {
        match self {
            Self::Container(selector) => selector.resolve().map(ResolvedSelector::Container),
            Self::Member(selector) => selector.resolve().map(ResolvedSelector::Member),
            _ => Ok(ResolvedSelector::Deferred),
        }
    }

    pub fn as_container(&self) -> Option<&ContainerSelector> {
        match self {
            Self::Container(selector) => Some(selector),
            _ => None,
        }
    }

    pub fn as_member(&self) -> Option<&MemberSelector> {
        match self {
            Self::Member(selector) => Some(selector),
            _ => None,
        }
    }
}

impl fmt::Display for DiscoverySelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UniqueId(id) => write!(f, "UniqueIdSelector [unique_id = '{id}']"),
            Self::Package(selector) => selector.fmt(f),
            Self::Container(selector) => selector.fmt(f),
            Self::Member(selector) => selector.fmt(f),
            Self::File(selector) => selector.fmt(f),
            Self::Directory(selector) => selector.fmt(f),
            Self::Uri(selector) => selector.fmt(f),
            Self::ClasspathResource(selector) => selector.fmt(f),
        }
    }
}

macro_rules! impl_from_selector {
    ($($variant:ident($ty:ty)),* $(,)?) => {
        $(
            impl From<$ty> for DiscoverySelector {
                fn from(selector: $ty) -> Self {
                    Self::$variant(selector)
                }
            }
        )*
    };
}

impl_from_selector!(
    UniqueId(UniqueId),
    Package(PackageSelector),
    Container(ContainerSelector),
    Member(MemberSelector),
    File(FileSelector),
    Directory(DirectorySelector),
    Uri(UriSelector),
    ClasspathResource(ClasspathResourceSelector),
);

/// Resolves every selector, pairing each with its own outcome. One failure
/// never stops the others.
pub fn resolve_all(
    selectors: &[DiscoverySelector],
) -> Vec<(&DiscoverySelector, Result<ResolvedSelector<'_>, ResolutionError>)> {
    selectors
        .iter()
        .map(|selector| (selector, selector.resolve()))
        .collect()
}
