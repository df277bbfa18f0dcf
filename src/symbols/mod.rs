//! The host symbol space consulted by the locator.
//!
//! A [`SymbolSpace`] only has to know how to load a container by its
//! qualified name. Member lookup across supertypes is provided on top of that
//! primitive, so every backend (the in-memory [`SymbolTable`], a manifest, or
//! an indexed source tree) searches hierarchies the same way.
pub mod languages;
pub mod manifest;
mod table;

pub use table::{ContainerSpec, MemberSpec, SymbolTable, SymbolTableBuilder};

use serde::{Deserialize, Serialize};
use std::collections::{HashSet, VecDeque};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::path::Path;
use std::sync::Arc;
use tracing::trace;

use crate::cli::Language;
use crate::error::SymbolSourceError;
use crate::identifier::ParameterSignature;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContainerKind {
    #[default]
    Class,
    Interface,
    Module,
}

impl ContainerKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Class => "class",
            Self::Interface => "interface",
            Self::Module => "module",
        }
    }
}

#[derive(Debug)]
struct ContainerDecl {
    name: String,
    kind: ContainerKind,
    supertypes: Vec<String>,
    members: Vec<MemberSymbol>,
}

#[derive(Debug)]
struct MemberDecl {
    name: String,
    declaring_container: String,
    parameter_types: Vec<String>,
    is_default: bool,
}

/// Handle to a loaded container. Equality is declaration identity.
#[derive(Debug, Clone)]
pub struct ContainerSymbol(Arc<ContainerDecl>);

/// Handle to a declared member. Equality is declaration identity.
#[derive(Debug, Clone)]
pub struct MemberSymbol(Arc<MemberDecl>);

impl ContainerSymbol {
    pub(crate) fn new(
        name: String,
        kind: ContainerKind,
        supertypes: Vec<String>,
        members: Vec<MemberSymbol>,
    ) -> Self {
        Self(Arc::new(ContainerDecl {
            name,
            kind,
            supertypes,
            members,
        }))
    }

    pub fn name(&self) -> &str {
        &self.0.name
    }

    pub fn kind(&self) -> ContainerKind {
        self.0.kind
    }

    /// Supertype names in declaration order.
    pub fn supertype_names(&self) -> &[String] {
        &self.0.supertypes
    }

    pub fn declared_members(&self) -> &[MemberSymbol] {
        &self.0.members
    }

    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl PartialEq for ContainerSymbol {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl Eq for ContainerSymbol {}

impl Hash for ContainerSymbol {
    fn hash<H: Hasher>(&self, state: &mut H) {
        Arc::as_ptr(&self.0).hash(state);
    }
}

impl fmt::Display for ContainerSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.name)
    }
}

impl MemberSymbol {
    pub(crate) fn new(
        name: String,
        declaring_container: String,
        parameter_types: Vec<String>,
        is_default: bool,
    ) -> Self {
        Self(Arc::new(MemberDecl {
            name,
            declaring_container,
            parameter_types,
            is_default,
        }))
    }

    pub fn name(&self) -> &str {
        &self.0.name
    }

    pub fn declaring_container(&self) -> &str {
        &self.0.declaring_container
    }

    pub fn parameter_types(&self) -> &[String] {
        &self.0.parameter_types
    }

    pub fn signature(&self) -> ParameterSignature {
        ParameterSignature::new(self.0.parameter_types.iter().cloned())
    }

    /// Whether the member is an implementation provided by an interface.
    pub fn is_default(&self) -> bool {
        self.0.is_default
    }

    /// `name(T1, T2)`
    pub fn descriptor(&self) -> String {
        format!("{}({})", self.0.name, self.0.parameter_types.join(", "))
    }

    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl PartialEq for MemberSymbol {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl Eq for MemberSymbol {}

impl Hash for MemberSymbol {
    fn hash<H: Hasher>(&self, state: &mut H) {
        Arc::as_ptr(&self.0).hash(state);
    }
}

impl fmt::Display for MemberSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}", self.0.declaring_container, self.descriptor())
    }
}

/// A container exists but could not be loaded.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("failed to load '{name}': {message}")]
pub struct LoadFailure {
    pub name: String,
    pub message: String,
}

impl LoadFailure {
    pub fn new(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            message: message.into(),
        }
    }
}

pub trait SymbolSpace: Send + Sync {
    /// `Ok(None)` when no container has this name, `Err` when one exists but
    /// fails to load.
    fn load_container(&self, qualified_name: &str) -> Result<Option<ContainerSymbol>, LoadFailure>;

    /// Directly declared supertypes that can be loaded, in declaration order.
    fn supertypes(&self, container: &ContainerSymbol) -> Vec<ContainerSymbol> {
        container
            .supertype_names()
            .iter()
            .filter_map(|name| match self.load_container(name) {
                Ok(Some(supertype)) => Some(supertype),
                Ok(None) => {
                    trace!(container = %container, supertype = %name, "supertype not in symbol space");
                    None
                }
                Err(e) => {
                    trace!(container = %container, error = %e, "supertype failed to load");
                    None
                }
            })
            .collect()
    }

    /// `container` followed by every reachable supertype, breadth first.
    fn hierarchy(&self, container: &ContainerSymbol) -> Vec<ContainerSymbol> {
        let mut visited = HashSet::new();
        let mut queue = VecDeque::from([container.clone()]);
        let mut order = Vec::new();

        while let Some(current) = queue.pop_front() {
            if !visited.insert(current.name().to_string()) {
                continue;
            }
            queue.extend(self.supertypes(&current));
            order.push(current);
        }
        order
    }

    /// Members named `name` reachable from `container`. A declaration hides
    /// any same-signature declaration further up the hierarchy.
    fn list_members(&self, container: &ContainerSymbol, name: &str) -> Vec<MemberSymbol> {
        let mut found: Vec<MemberSymbol> = Vec::new();
        for current in self.hierarchy(container) {
            for member in current.declared_members() {
                if member.name() != name {
                    continue;
                }
                let hidden = found
                    .iter()
                    .any(|m| m.parameter_types() == member.parameter_types());
                if !hidden {
                    found.push(member.clone());
                }
            }
        }
        found
    }

    /// With a signature the match is exact. Without one the name must be
    /// unique across the hierarchy; overloaded names give `None`.
    fn find_member(
        &self,
        container: &ContainerSymbol,
        name: &str,
        signature: Option<&ParameterSignature>,
    ) -> Option<MemberSymbol> {
        let mut members = self.list_members(container, name);
        match signature {
            Some(sig) => members
                .into_iter()
                .find(|m| sig.matches(m.parameter_types())),
            None if members.len() == 1 => members.pop(),
            None => None,
        }
    }
}

impl<S: SymbolSpace + ?Sized> SymbolSpace for Arc<S> {
    fn load_container(&self, qualified_name: &str) -> Result<Option<ContainerSymbol>, LoadFailure> {
        (**self).load_container(qualified_name)
    }

    fn supertypes(&self, container: &ContainerSymbol) -> Vec<ContainerSymbol> {
        (**self).supertypes(container)
    }

    fn hierarchy(&self, container: &ContainerSymbol) -> Vec<ContainerSymbol> {
        (**self).hierarchy(container)
    }

    fn list_members(&self, container: &ContainerSymbol, name: &str) -> Vec<MemberSymbol> {
        (**self).list_members(container, name)
    }

    fn find_member(
        &self,
        container: &ContainerSymbol,
        name: &str,
        signature: Option<&ParameterSignature>,
    ) -> Option<MemberSymbol> {
        (**self).find_member(container, name, signature)
    }
}

const MANIFEST_EXTENSIONS: &[&str] = &["json", "yaml", "yml"];

/// Builds a symbol table from a manifest file or by indexing source code.
pub fn load_symbol_space(
    path: &Path,
    language: Option<Language>,
) -> Result<SymbolTable, SymbolSourceError> {
    if !path.exists() {
        return Err(SymbolSourceError::not_found(path));
    }

    let is_manifest = path.is_file()
        && path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| MANIFEST_EXTENSIONS.contains(&ext));

    if is_manifest {
        return manifest::load_manifest(path);
    }

    let language = match language {
        Some(language) => language,
        None => languages::detect_language(path)
            .ok_or_else(|| SymbolSourceError::UndetectedLanguage {
                path: path.to_path_buf(),
            })?,
    };
    languages::index_source(path, language)
}
