//! Public entry point for building selectors.
//!
//! Typed `select_*` constructors validate their arguments immediately and
//! fail with [`PreconditionViolation`] or [`ParseError`]. Symbol lookups are
//! left to the returned selectors.
mod classify;

pub use classify::{classify, NameClass};

use std::path::Path;
use std::sync::Arc;
use tracing::debug;
use url::Url;

use crate::error::{require_not_blank, ParseError, PreconditionViolation, Result};
use crate::identifier::{self, MemberName, ParameterSignature, ParsedIdentifier};
use crate::locator::SymbolLocator;
use crate::selector::{
    ClasspathResourceSelector, ContainerSelector, DirectorySelector, DiscoverySelector,
    FileSelector, MemberSelector, PackageSelector, SelectorKind, UniqueId, UriSelector,
};
use crate::symbols::{ContainerSymbol, MemberSymbol, SymbolSpace};
use crate::utils::{extract_last_segment, namespace_of};

/// Kind prefixes accepted by [`SelectorFactory::build`].
const KIND_PREFIXES: &[(&str, SelectorKind)] = &[
    ("uid", SelectorKind::UniqueId),
    ("unique-id", SelectorKind::UniqueId),
    ("package", SelectorKind::Package),
    ("class", SelectorKind::Container),
    ("container", SelectorKind::Container),
    ("method", SelectorKind::Member),
    ("member", SelectorKind::Member),
    ("file", SelectorKind::File),
    ("directory", SelectorKind::Directory),
    ("uri", SelectorKind::Uri),
    ("resource", SelectorKind::ClasspathResource),
    ("classpath", SelectorKind::ClasspathResource),
];

#[derive(Debug, Clone)]
pub struct SelectorFactory {
    locator: Arc<SymbolLocator>,
}

impl SelectorFactory {
    pub fn new(locator: Arc<SymbolLocator>) -> Self {
        Self { locator }
    }

    pub fn for_space<S: SymbolSpace + 'static>(space: S) -> Self {
        Self::new(Arc::new(SymbolLocator::new(space)))
    }

    pub fn locator(&self) -> &Arc<SymbolLocator> {
        &self.locator
    }

    pub fn select_unique_id(&self, unique_id: &str) -> Result<UniqueId> {
        require_not_blank(unique_id, "unique id")?;
        Ok(UniqueId::parse(unique_id)?)
    }

    pub fn select_package(&self, package_name: &str) -> Result<PackageSelector> {
        let package_name = required_name(package_name, "package name")?;
        Ok(PackageSelector::new(package_name))
    }

    pub fn select_container(&self, container_name: &str) -> Result<ContainerSelector> {
        let container_name = required_name(container_name, "container name")?;
        Ok(ContainerSelector::by_name(
            container_name,
            self.locator.clone(),
        ))
    }

    pub fn select_container_symbol(&self, container: ContainerSymbol) -> ContainerSelector {
        ContainerSelector::by_symbol(container)
    }

    /// `container#member` or `container#member(T1, T2)`. Text without a `#`
    /// is rejected.
    pub fn select_member(&self, fully_qualified_name: &str) -> Result<MemberSelector> {
        require_not_blank(fully_qualified_name, "fully qualified member name")?;
        match identifier::parse(fully_qualified_name)? {
            ParsedIdentifier::Member { container, member } => Ok(MemberSelector::by_name(
                container.trim(),
                member,
                self.locator.clone(),
            )),
            ParsedIdentifier::Container { .. } | ParsedIdentifier::MemberSignature(_) => {
                Err(PreconditionViolation::invalid_argument(
                    "fully qualified member name",
                    format!(
                        "'{fully_qualified_name}' must be of the form 'container#member(parameter types)'"
                    ),
                )
                .into())
            }
        }
    }

    /// `member` may carry a parameter list: `test4(java.lang.String)`.
    pub fn select_member_in(&self, container_name: &str, member: &str) -> Result<MemberSelector> {
        let container_name = required_name(container_name, "container name")?;
        let member = parse_member_argument(member)?;
        Ok(MemberSelector::by_name(
            container_name,
            member,
            self.locator.clone(),
        ))
    }

    /// `parameter_types` is a comma separated list; empty selects the
    /// zero-arity overload.
    pub fn select_member_with_parameters(
        &self,
        container_name: &str,
        member_name: &str,
        parameter_types: &str,
    ) -> Result<MemberSelector> {
        let container_name = required_name(container_name, "container name")?;
        let member_name = required_name(member_name, "member name")?;
        let signature = ParameterSignature::parse(parameter_types)?;
        Ok(MemberSelector::by_name(
            container_name,
            MemberName::new(member_name, Some(signature)),
            self.locator.clone(),
        ))
    }

    pub fn select_member_of(
        &self,
        container: ContainerSymbol,
        member: &str,
    ) -> Result<MemberSelector> {
        let member = parse_member_argument(member)?;
        Ok(MemberSelector::in_container(
            container,
            member,
            self.locator.clone(),
        ))
    }

    pub fn select_member_symbol(
        &self,
        container: ContainerSymbol,
        member: MemberSymbol,
    ) -> MemberSelector {
        MemberSelector::by_symbol(container, member)
    }

    pub fn select_file(&self, path: &str) -> Result<FileSelector> {
        Ok(FileSelector::from_raw(path)?)
    }

    pub fn select_file_path(&self, path: &Path) -> Result<FileSelector> {
        Ok(FileSelector::from_path(path)?)
    }

    pub fn select_directory(&self, path: &str) -> Result<DirectorySelector> {
        Ok(DirectorySelector::from_raw(path)?)
    }

    pub fn select_directory_path(&self, path: &Path) -> Result<DirectorySelector> {
        Ok(DirectorySelector::from_path(path)?)
    }

    pub fn select_uri(&self, uri: &str) -> Result<UriSelector> {
        Ok(UriSelector::parse(uri)?)
    }

    pub fn select_url(&self, url: Url) -> UriSelector {
        UriSelector::from_url(url)
    }

    pub fn select_classpath_resource(&self, resource_name: &str) -> Result<ClasspathResourceSelector> {
        Ok(ClasspathResourceSelector::new(resource_name)?)
    }

    /// Turns a unique id into the container or member selector it addresses.
    /// The member segment carries the full signature, which is how callers
    /// pick one overload out of several.
    pub fn select_from_unique_id(&self, unique_id: &UniqueId) -> Result<DiscoverySelector> {
        let container = unique_id.container_name().ok_or_else(|| {
            PreconditionViolation::invalid_argument(
                "unique id",
                format!("'{unique_id}' has no class or container segment"),
            )
        })?;

        match unique_id.member_text() {
            Some(member) => Ok(self.select_member_in(container, member)?.into()),
            None => Ok(self.select_container(container)?.into()),
        }
    }

    /// Builds a selector from raw text, optionally prefixed with its kind
    /// (`class:a.b.C`, `method:a.b.C#m()`, `uri:https://...`). Unprefixed
    /// text is classified like [`build_from_ambiguous_names`](Self::build_from_ambiguous_names).
    pub fn build(&self, raw: &str) -> Result<DiscoverySelector> {
        let raw = require_not_blank(raw, "selector")?.trim();
        match split_kind_prefix(raw) {
            Some((kind, value)) => {
                debug!(input = raw, %kind, "building prefixed selector");
                self.build_kind(kind, value)
            }
            None => self.build_unprefixed(raw),
        }
    }

    /// Classifies each name as a member, a loadable container or a package,
    /// keeping input order.
    #[deprecated(note = "use `build` or the typed `select_*` constructors")]
    pub fn build_from_ambiguous_names<I, S>(&self, names: I) -> Result<Vec<DiscoverySelector>>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        names
            .into_iter()
            .map(|name| {
                let name = require_not_blank(name.as_ref(), "name")?;
                self.build_unprefixed(name)
            })
            .collect()
    }

    fn build_kind(&self, kind: SelectorKind, value: &str) -> Result<DiscoverySelector> {
        let selector: DiscoverySelector = match kind {
            SelectorKind::UniqueId => self.select_unique_id(value)?.into(),
            SelectorKind::Package => self.select_package(value)?.into(),
            SelectorKind::Container => self.select_container(value)?.into(),
            SelectorKind::Member => self.select_member(value)?.into(),
            SelectorKind::File => self.select_file(value)?.into(),
            SelectorKind::Directory => self.select_directory(value)?.into(),
            SelectorKind::Uri => self.select_uri(value)?.into(),
            SelectorKind::ClasspathResource => self.select_classpath_resource(value)?.into(),
        };
        Ok(selector)
    }

    fn build_unprefixed(&self, name: &str) -> Result<DiscoverySelector> {
        let class = classify(name, &self.locator);
        debug!(input = name, ?class, "building unprefixed selector");
        let selector: DiscoverySelector = match class {
            NameClass::Member if name.contains(identifier::MEMBER_SEPARATOR) => {
                self.select_member(name)?.into()
            }
            NameClass::Member => self.select_dotted_member(name)?.into(),
            NameClass::Container => self.select_container(name)?.into(),
            NameClass::Package => self.select_package(name)?.into(),
        };
        Ok(selector)
    }

    /// `a.b.C.m(int)` or `crate::a::C::m()`: the container is everything
    /// before the last path segment of the text preceding `(`.
    fn select_dotted_member(&self, name: &str) -> Result<MemberSelector> {
        let (path, parameters) = name.split_at(name.find('(').unwrap_or(name.len()));
        let container = namespace_of(path).ok_or_else(|| {
            ParseError::malformed(name, "member signature has no container name")
        })?;
        let member = format!("{}{parameters}", extract_last_segment(path));
        self.select_member_in(container, &member)
    }
}

/// Non-blank argument with surrounding whitespace removed.
fn required_name<'a>(value: &'a str, argument: &'static str) -> Result<&'a str> {
    Ok(require_not_blank(value, argument)?.trim())
}

fn parse_member_argument(member: &str) -> Result<MemberName> {
    let member = required_name(member, "member name")?;
    Ok(identifier::parse_member(member)?)
}

/// Splits `kind:value` for known kinds. A value starting with `:` means the
/// text is a `::` path, not a prefix.
fn split_kind_prefix(raw: &str) -> Option<(SelectorKind, &str)> {
    let (prefix, value) = raw.split_once(':')?;
    if value.starts_with(':') {
        return None;
    }
    KIND_PREFIXES
        .iter()
        .find(|(name, _)| *name == prefix)
        .map(|(_, kind)| (*kind, value))
}
