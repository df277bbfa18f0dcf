//! Selector Resolver
//!
//! Parses test selector text, builds lazily resolving selectors and resolves
//! them against a symbol space loaded from a manifest or indexed from Rust or
//! Python sources with Tree-sitter.
pub mod cli;
pub mod error;
pub mod factory;
pub mod identifier;
pub mod locator;
pub mod logging;
pub mod output;
pub mod selector;
pub mod symbols;
pub mod utils;

pub use error::{Error, Result};
pub use factory::SelectorFactory;
pub use locator::SymbolLocator;
pub use selector::{DiscoverySelector, ResolvedSelector, SelectorKind};
pub use symbols::{load_symbol_space, ContainerSymbol, MemberSymbol, SymbolSpace, SymbolTable};
