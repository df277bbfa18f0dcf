use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::{Arc, OnceLock};
use tracing::trace;

use crate::error::ResolutionError;
use crate::identifier::{MemberName, ParameterSignature};
use crate::locator::SymbolLocator;
use crate::symbols::{ContainerSymbol, MemberSymbol};

/// A member together with the container it was selected through, which may
/// be a subtype of the member's declaring container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedMember {
    container: ContainerSymbol,
    member: MemberSymbol,
}

impl ResolvedMember {
    pub fn container(&self) -> &ContainerSymbol {
        &self.container
    }

    pub fn member(&self) -> &MemberSymbol {
        &self.member
    }
}

impl fmt::Display for ResolvedMember {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}", self.container.name(), self.member.descriptor())
    }
}

#[derive(Debug, Clone)]
enum Pending {
    ByName(Arc<SymbolLocator>),
    InContainer(ContainerSymbol, Arc<SymbolLocator>),
}

/// Selects one member of a container.
///
/// Built by name, the container and member are looked up on the first
/// [`resolve`](Self::resolve). Built from symbols, the memo slot starts
/// filled and the locator is never consulted.
///
/// Equality and hashing use the container name, member name and rendered
/// parameter types, so selectors built either way compare equal when they
/// name the same declaration with the same signature.
#[derive(Debug)]
pub struct MemberSelector {
    container_name: String,
    member_name: String,
    parameter_types: Option<ParameterSignature>,
    pending: Option<Pending>,
    resolved: OnceLock<Result<ResolvedMember, ResolutionError>>,
}

impl MemberSelector {
    pub(crate) fn by_name(
        container_name: impl Into<String>,
        member: MemberName,
        locator: Arc<SymbolLocator>,
    ) -> Self {
        let (member_name, parameter_types) = member.into_parts();
        Self {
            container_name: container_name.into(),
            member_name,
            parameter_types,
            pending: Some(Pending::ByName(locator)),
            resolved: OnceLock::new(),
        }
    }

    pub(crate) fn in_container(
        container: ContainerSymbol,
        member: MemberName,
        locator: Arc<SymbolLocator>,
    ) -> Self {
        let (member_name, parameter_types) = member.into_parts();
        Self {
            container_name: container.name().to_string(),
            member_name,
            parameter_types,
            pending: Some(Pending::InContainer(container, locator)),
            resolved: OnceLock::new(),
        }
    }

    pub(crate) fn by_symbol(container: ContainerSymbol, member: MemberSymbol) -> Self {
        Self {
            container_name: container.name().to_string(),
            member_name: member.name().to_string(),
            parameter_types: Some(member.signature()),
            pending: None,
            resolved: OnceLock::from(Ok(ResolvedMember { container, member })),
        }
    }

    pub fn container_name(&self) -> &str {
        &self.container_name
    }

    pub fn member_name(&self) -> &str {
        &self.member_name
    }

    /// The signature given at construction; `None` selects by name only.
    pub fn parameter_types(&self) -> Option<&ParameterSignature> {
        self.parameter_types.as_ref()
    }

    pub fn is_resolved(&self) -> bool {
        self.resolved.get().is_some()
    }

    pub fn resolve(&self) -> Result<&ResolvedMember, ResolutionError> {
        self.resolved
            .get_or_init(|| self.lookup())
            .as_ref()
            .map_err(Clone::clone)
    }

    pub fn container(&self) -> Result<&ContainerSymbol, ResolutionError> {
        self.resolve().map(ResolvedMember::container)
    }

    pub fn member(&self) -> Result<&MemberSymbol, ResolutionError> {
        self.resolve().map(ResolvedMember::member)
    }

    fn lookup(&self) -> Result<ResolvedMember, ResolutionError> {
        trace!(
            container = %self.container_name,
            member = %self.member_name,
            "resolving member selector"
        );
        let (container, locator) = match &self.pending {
            Some(Pending::ByName(locator)) => {
                (locator.locate_container(&self.container_name)?, locator)
            }
            Some(Pending::InContainer(container, locator)) => (container.clone(), locator),
            None => {
                return Err(ResolutionError::member_not_found(
                    &self.container_name,
                    &self.member_name,
                    self.parameter_types.as_ref().map(ToString::to_string),
                ))
            }
        };
        let member =
            locator.locate_member(&container, &self.member_name, self.parameter_types.as_ref())?;
        Ok(ResolvedMember { container, member })
    }

    fn parameter_types_text(&self) -> Option<String> {
        self.parameter_types.as_ref().map(ToString::to_string)
    }
}

impl Clone for MemberSelector {
    fn clone(&self) -> Self {
        Self {
            container_name: self.container_name.clone(),
            member_name: self.member_name.clone(),
            parameter_types: self.parameter_types.clone(),
            pending: self.pending.clone(),
            resolved: self.resolved.clone(),
        }
    }
}

impl PartialEq for MemberSelector {
    fn eq(&self, other: &Self) -> bool {
        self.container_name == other.container_name
            && self.member_name == other.member_name
            && self.parameter_types_text() == other.parameter_types_text()
    }
}

impl Eq for MemberSelector {}

impl Hash for MemberSelector {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.container_name.hash(state);
        self.member_name.hash(state);
        self.parameter_types_text().hash(state);
    }
}

impl fmt::Display for MemberSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "MemberSelector [container_name = '{}', member_name = '{}', parameter_types = '{}']",
            self.container_name,
            self.member_name,
            self.parameter_types_text().unwrap_or_default()
        )
    }
}
