//! Container and member lookup against a [`SymbolSpace`].
//!
//! Name-only member lookup never picks among overloads: more than one
//! reachable signature is reported as [`ResolutionError::AmbiguousMember`].
use std::fmt;
use std::sync::Arc;
use tracing::{debug, trace};

use crate::error::ResolutionError;
use crate::identifier::ParameterSignature;
use crate::symbols::{ContainerSymbol, MemberSymbol, SymbolSpace};

pub struct SymbolLocator {
    space: Arc<dyn SymbolSpace>,
}

impl SymbolLocator {
    pub fn new<S: SymbolSpace + 'static>(space: S) -> Self {
        Self {
            space: Arc::new(space),
        }
    }

    pub fn from_shared(space: Arc<dyn SymbolSpace>) -> Self {
        Self { space }
    }

    pub fn space(&self) -> &dyn SymbolSpace {
        self.space.as_ref()
    }

    pub fn locate_container(&self, name: &str) -> Result<ContainerSymbol, ResolutionError> {
        trace!(container = %name, "locating container");
        match self.space.load_container(name) {
            Ok(Some(container)) => Ok(container),
            Ok(None) => {
                debug!(container = %name, "container not found");
                Err(ResolutionError::container_not_found(name))
            }
            Err(failure) => {
                debug!(container = %name, error = %failure.message, "container failed to load");
                Err(ResolutionError::container_load_failed(name, failure.message))
            }
        }
    }

    /// Whether `name` loads successfully. Load failures count as absent.
    pub fn contains_container(&self, name: &str) -> bool {
        matches!(self.space.load_container(name), Ok(Some(_)))
    }

    pub fn locate_member(
        &self,
        container: &ContainerSymbol,
        name: &str,
        signature: Option<&ParameterSignature>,
    ) -> Result<MemberSymbol, ResolutionError> {
        trace!(container = %container, member = %name, signature = ?signature.map(ToString::to_string), "locating member");

        if let Some(signature) = signature {
            return self
                .space
                .find_member(container, name, Some(signature))
                .ok_or_else(|| {
                    ResolutionError::member_not_found(
                        container.name(),
                        name,
                        Some(signature.to_string()),
                    )
                });
        }

        let mut candidates = self.space.list_members(container, name);
        match candidates.len() {
            0 => Err(ResolutionError::member_not_found(container.name(), name, None)),
            1 => Ok(candidates.remove(0)),
            n => {
                debug!(container = %container, member = %name, candidates = n, "ambiguous member name");
                Err(ResolutionError::ambiguous_member(
                    container.name(),
                    name,
                    candidates.iter().map(MemberSymbol::descriptor).collect(),
                ))
            }
        }
    }
}

impl fmt::Debug for SymbolLocator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SymbolLocator").finish_non_exhaustive()
    }
}
