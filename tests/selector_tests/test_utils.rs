//! Shared test utilities for selector tests

use crate::fixtures::manifest_path;
use selector_resolver::symbols::{load_symbol_space, ContainerSymbol, LoadFailure};
use selector_resolver::{SelectorFactory, SymbolSpace, SymbolTable};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

pub const LOCAL_TEST_CASE: &str = "org.example.LocalTestCase";

pub fn discovery_table() -> SymbolTable {
    load_symbol_space(&manifest_path("discovery.yaml"), None)
        .expect("Failed to load discovery manifest")
}

pub fn discovery_factory() -> SelectorFactory {
    SelectorFactory::for_space(discovery_table())
}

/// Symbol space that counts every container load.
#[derive(Debug)]
pub struct CountingSpace {
    inner: SymbolTable,
    loads: AtomicUsize,
}

impl CountingSpace {
    pub fn new(inner: SymbolTable) -> Arc<Self> {
        Arc::new(Self {
            inner,
            loads: AtomicUsize::new(0),
        })
    }

    pub fn loads(&self) -> usize {
        self.loads.load(Ordering::SeqCst)
    }

    pub fn reset(&self) {
        self.loads.store(0, Ordering::SeqCst);
    }

    /// Loads through the wrapped table without counting.
    pub fn container(&self, name: &str) -> ContainerSymbol {
        self.inner
            .load_container(name)
            .expect("container failed to load")
            .expect("container not found")
    }

    pub fn table(&self) -> &SymbolTable {
        &self.inner
    }
}

impl SymbolSpace for CountingSpace {
    fn load_container(&self, qualified_name: &str) -> Result<Option<ContainerSymbol>, LoadFailure> {
        self.loads.fetch_add(1, Ordering::SeqCst);
        self.inner.load_container(qualified_name)
    }
}

pub fn counting_factory() -> (Arc<CountingSpace>, SelectorFactory) {
    let space = CountingSpace::new(discovery_table());
    let factory = SelectorFactory::for_space(space.clone());
    (space, factory)
}
