use std::collections::HashMap;
use tracing::debug;

use super::{ContainerKind, ContainerSymbol, LoadFailure, MemberSymbol, SymbolSpace};
use crate::utils::namespace_of;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberSpec {
    pub name: String,
    pub parameter_types: Vec<String>,
    pub is_default: bool,
}

impl MemberSpec {
    pub fn new<S: Into<String>>(name: impl Into<String>, parameter_types: impl IntoIterator<Item = S>) -> Self {
        Self {
            name: name.into(),
            parameter_types: parameter_types.into_iter().map(Into::into).collect(),
            is_default: false,
        }
    }

    pub fn provided(mut self) -> Self {
        self.is_default = true;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContainerSpec {
    pub name: String,
    pub kind: ContainerKind,
    pub supertypes: Vec<String>,
    pub members: Vec<MemberSpec>,
    pub load_error: Option<String>,
}

impl ContainerSpec {
    pub fn new(name: impl Into<String>, kind: ContainerKind) -> Self {
        Self {
            name: name.into(),
            kind,
            supertypes: Vec::new(),
            members: Vec::new(),
            load_error: None,
        }
    }

    pub fn extends(mut self, supertype: impl Into<String>) -> Self {
        self.add_supertype(supertype);
        self
    }

    pub fn member(mut self, name: &str, parameter_types: &[&str]) -> Self {
        self.add_member(MemberSpec::new(name, parameter_types.iter().copied()));
        self
    }

    pub fn default_member(mut self, name: &str, parameter_types: &[&str]) -> Self {
        self.add_member(MemberSpec::new(name, parameter_types.iter().copied()).provided());
        self
    }

    pub fn add_supertype(&mut self, supertype: impl Into<String>) {
        let supertype = supertype.into();
        if supertype != self.name && !self.supertypes.contains(&supertype) {
            self.supertypes.push(supertype);
        }
    }

    pub fn add_member(&mut self, member: MemberSpec) {
        self.members.push(member);
    }

    /// Adds `member`, dropping earlier members with the same name.
    pub fn replace_member(&mut self, member: MemberSpec) {
        self.members.retain(|m| m.name != member.name);
        self.members.push(member);
    }

    fn separator(&self) -> &'static str {
        if self.name.contains("::") {
            "::"
        } else {
            "."
        }
    }
}

#[derive(Debug, Default)]
pub struct SymbolTableBuilder {
    containers: Vec<ContainerSpec>,
    index: HashMap<String, usize>,
}

impl SymbolTableBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn class(self, name: &str, f: impl FnOnce(ContainerSpec) -> ContainerSpec) -> Self {
        self.with_container(f(ContainerSpec::new(name, ContainerKind::Class)))
    }

    pub fn interface(self, name: &str, f: impl FnOnce(ContainerSpec) -> ContainerSpec) -> Self {
        self.with_container(f(ContainerSpec::new(name, ContainerKind::Interface)))
    }

    /// A container that exists but fails to load with `message`.
    pub fn failing(self, name: &str, message: &str) -> Self {
        let mut spec = ContainerSpec::new(name, ContainerKind::Class);
        spec.load_error = Some(message.to_string());
        self.with_container(spec)
    }

    /// Inserts `spec`, replacing any container with the same name.
    pub fn with_container(mut self, spec: ContainerSpec) -> Self {
        self.insert(spec);
        self
    }

    pub fn insert(&mut self, spec: ContainerSpec) {
        match self.index.get(&spec.name) {
            Some(&i) => self.containers[i] = spec,
            None => {
                self.index.insert(spec.name.clone(), self.containers.len());
                self.containers.push(spec);
            }
        }
    }

    /// Returns the container named `name`, creating it with `kind` if absent.
    pub fn container_mut(&mut self, name: &str, kind: ContainerKind) -> &mut ContainerSpec {
        let i = match self.index.get(name) {
            Some(&i) => i,
            None => {
                self.index.insert(name.to_string(), self.containers.len());
                self.containers.push(ContainerSpec::new(name, kind));
                self.containers.len() - 1
            }
        };
        &mut self.containers[i]
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.containers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.containers.is_empty()
    }

    /// Resolves a possibly unqualified container reference seen from
    /// `namespace`: exact name, then a sibling in `namespace`, then the unique
    /// container whose qualified name ends with `name`.
    pub fn resolve_name(&self, namespace: Option<&str>, name: &str, separator: &str) -> Option<String> {
        if self.contains(name) {
            return Some(name.to_string());
        }

        if let Some(ns) = namespace {
            let sibling = format!("{ns}{separator}{name}");
            if self.contains(&sibling) {
                return Some(sibling);
            }
        }

        let suffix = format!("{separator}{name}");
        let mut matches = self.containers.iter().filter(|c| c.name.ends_with(&suffix));
        match (matches.next(), matches.next()) {
            (Some(only), None) => Some(only.name.clone()),
            _ => None,
        }
    }

    pub fn build(self) -> SymbolTable {
        let mut entries = HashMap::with_capacity(self.containers.len());

        for spec in &self.containers {
            if let Some(message) = &spec.load_error {
                entries.insert(spec.name.clone(), TableEntry::Failed(message.clone()));
                continue;
            }

            let separator = spec.separator();
            let namespace = namespace_of(&spec.name);
            let supertypes = spec
                .supertypes
                .iter()
                .map(|s| match self.resolve_name(namespace, s, separator) {
                    Some(resolved) => resolved,
                    None => {
                        debug!(container = %spec.name, supertype = %s, "unresolved supertype kept verbatim");
                        s.clone()
                    }
                })
                .collect();

            let members = spec
                .members
                .iter()
                .map(|m| {
                    MemberSymbol::new(
                        m.name.clone(),
                        spec.name.clone(),
                        m.parameter_types.clone(),
                        m.is_default,
                    )
                })
                .collect();

            let symbol = ContainerSymbol::new(spec.name.clone(), spec.kind, supertypes, members);
            entries.insert(spec.name.clone(), TableEntry::Loaded(symbol));
        }

        debug!(containers = entries.len(), "built symbol table");
        SymbolTable { entries }
    }
}

#[derive(Debug, Clone)]
enum TableEntry {
    Loaded(ContainerSymbol),
    Failed(String),
}

/// In-memory symbol space. Loading the same name always yields the same
/// [`ContainerSymbol`].
#[derive(Debug, Default)]
pub struct SymbolTable {
    entries: HashMap<String, TableEntry>,
}

impl SymbolTable {
    pub fn builder() -> SymbolTableBuilder {
        SymbolTableBuilder::new()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Container names in lexical order.
    pub fn container_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl SymbolSpace for SymbolTable {
    fn load_container(&self, qualified_name: &str) -> Result<Option<ContainerSymbol>, LoadFailure> {
        match self.entries.get(qualified_name) {
            Some(TableEntry::Loaded(symbol)) => Ok(Some(symbol.clone())),
            Some(TableEntry::Failed(message)) => Err(LoadFailure::new(qualified_name, message.clone())),
            None => Ok(None),
        }
    }
}
