//! ## Structure
//! - `manifest` - JSON and YAML manifests
//! - `rust` - Rust sources indexed with tree-sitter-rust
//! - `python` - Python sources indexed with tree-sitter-python

pub mod manifest;
pub mod rust;
