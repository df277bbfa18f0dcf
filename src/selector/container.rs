use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::{Arc, OnceLock};
use tracing::trace;

use crate::error::ResolutionError;
use crate::locator::SymbolLocator;
use crate::symbols::ContainerSymbol;

/// Selects a container by name or by an already loaded symbol.
#[derive(Debug)]
pub struct ContainerSelector {
    container_name: String,
    locator: Option<Arc<SymbolLocator>>,
    resolved: OnceLock<Result<ContainerSymbol, ResolutionError>>,
}

impl ContainerSelector {
    pub(crate) fn by_name(container_name: impl Into<String>, locator: Arc<SymbolLocator>) -> Self {
        Self {
            container_name: container_name.into(),
            locator: Some(locator),
            resolved: OnceLock::new(),
        }
    }

    pub(crate) fn by_symbol(container: ContainerSymbol) -> Self {
        Self {
            container_name: container.name().to_string(),
            locator: None,
            resolved: OnceLock::from(Ok(container)),
        }
    }

    pub fn container_name(&self) -> &str {
        &self.container_name
    }

    pub fn is_resolved(&self) -> bool {
        self.resolved.get().is_some()
    }

    /// Loads the container on first call; later calls return the cached
    /// symbol or the cached failure.
    pub fn resolve(&self) -> Result<&ContainerSymbol, ResolutionError> {
        self.resolved
            .get_or_init(|| {
                trace!(container = %self.container_name, "resolving container selector");
                match &self.locator {
                    Some(locator) => locator.locate_container(&self.container_name),
                    None => Err(ResolutionError::container_not_found(&self.container_name)),
                }
            })
            .as_ref()
            .map_err(Clone::clone)
    }
}

impl Clone for ContainerSelector {
    fn clone(&self) -> Self {
        Self {
            container_name: self.container_name.clone(),
            locator: self.locator.clone(),
            resolved: self.resolved.clone(),
        }
    }
}

impl PartialEq for ContainerSelector {
    fn eq(&self, other: &Self) -> bool {
        self.container_name == other.container_name
    }
}

impl Eq for ContainerSelector {}

impl Hash for ContainerSelector {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.container_name.hash(state);
    }
}

impl fmt::Display for ContainerSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ContainerSelector [container_name = '{}']", self.container_name)
    }
}
