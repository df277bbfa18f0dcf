use std::path::Path;
use tracing::trace;
use tree_sitter::{Node, Tree};

use super::{module_segments, node_text, normalized_text, SourceIndexer};
use crate::cli::Language;
use crate::error::SymbolSourceError;
use crate::symbols::{ContainerKind, MemberSpec, SymbolTableBuilder};
use crate::utils::namespace_of;

const CRATE_ROOT: &str = "crate";
const SEPARATOR: &str = Language::Rust.path_separator();

#[derive(Debug)]
struct PendingImpl {
    module: String,
    self_type: String,
    trait_type: Option<String>,
    members: Vec<MemberSpec>,
}

/// Indexes structs, enums and traits as containers, modules as containers of
/// their free functions, and attaches `impl` blocks once every file is seen.
#[derive(Debug, Default)]
pub struct RustIndexer {
    builder: SymbolTableBuilder,
    impls: Vec<PendingImpl>,
}

impl RustIndexer {
    pub fn new() -> Self {
        Self::default()
    }

    fn index_items(&mut self, module: &str, items: Node, source: &str) {
        self.builder.container_mut(module, ContainerKind::Module);

        let mut cursor = items.walk();
        for item in items.named_children(&mut cursor) {
            match item.kind() {
                "struct_item" | "enum_item" | "union_item" => {
                    if let Some(name) = item.child_by_field_name("name") {
                        let qualified = join(module, node_text(&name, source));
                        self.builder.container_mut(&qualified, ContainerKind::Class);
                    }
                }
                "trait_item" => self.index_trait(module, item, source),
                "impl_item" => self.collect_impl(module, item, source),
                "function_item" => {
                    if let Some(member) = function_member(item, source) {
                        self.builder
                            .container_mut(module, ContainerKind::Module)
                            .add_member(member);
                    }
                }
                "mod_item" => {
                    if let (Some(name), Some(body)) = (
                        item.child_by_field_name("name"),
                        item.child_by_field_name("body"),
                    ) {
                        let nested = join(module, node_text(&name, source));
                        self.index_items(&nested, body, source);
                    }
                }
                _ => {}
            }
        }
    }

    fn index_trait(&mut self, module: &str, item: Node, source: &str) {
        let Some(name) = item.child_by_field_name("name") else {
            return;
        };
        let qualified = join(module, node_text(&name, source));
        let spec = self
            .builder
            .container_mut(&qualified, ContainerKind::Interface);
        spec.kind = ContainerKind::Interface;

        if let Some(bounds) = item.child_by_field_name("bounds") {
            let mut cursor = bounds.walk();
            for bound in bounds.named_children(&mut cursor) {
                if let Some(bound_name) = type_name(bound, source) {
                    spec.add_supertype(absolute_path(module, &bound_name));
                }
            }
        }

        let Some(body) = item.child_by_field_name("body") else {
            return;
        };
        let mut cursor = body.walk();
        for child in body.named_children(&mut cursor) {
            let member = match child.kind() {
                "function_item" => function_member(child, source).map(MemberSpec::provided),
                "function_signature_item" => function_member(child, source),
                _ => None,
            };
            if let Some(member) = member {
                spec.add_member(member);
            }
        }
    }

    fn collect_impl(&mut self, module: &str, item: Node, source: &str) {
        let Some(self_type) = item
            .child_by_field_name("type")
            .and_then(|t| type_name(t, source))
        else {
            return;
        };
        let trait_type = item
            .child_by_field_name("trait")
            .and_then(|t| type_name(t, source));

        let mut members = Vec::new();
        if let Some(body) = item.child_by_field_name("body") {
            let mut cursor = body.walk();
            for child in body.named_children(&mut cursor) {
                if child.kind() == "function_item" {
                    members.extend(function_member(child, source));
                }
            }
        }

        self.impls.push(PendingImpl {
            module: module.to_string(),
            self_type,
            trait_type,
            members,
        });
    }
}

impl SourceIndexer for RustIndexer {
    fn language(&self) -> Language {
        Language::Rust
    }

    fn module_path(&self, root: &Path, file: &Path) -> String {
        let mut segments = module_segments(root, file);
        if matches!(
            segments.last().map(String::as_str),
            Some("lib" | "main" | "mod")
        ) {
            segments.pop();
        }
        std::iter::once(CRATE_ROOT.to_string())
            .chain(segments)
            .collect::<Vec<_>>()
            .join(SEPARATOR)
    }

    fn index_file(
        &mut self,
        module: &str,
        source: &str,
        tree: &Tree,
    ) -> Result<(), SymbolSourceError> {
        self.index_items(module, tree.root_node(), source);
        Ok(())
    }

    fn finish(mut self: Box<Self>) -> SymbolTableBuilder {
        let impls = std::mem::take(&mut self.impls);
        for pending in impls {
            let self_type = absolute_path(&pending.module, &pending.self_type);
            let Some(target) = self
                .builder
                .resolve_name(Some(&pending.module), &self_type, SEPARATOR)
            else {
                trace!(module = %pending.module, self_type = %pending.self_type, "impl target outside indexed source");
                continue;
            };

            let trait_name = pending.trait_type.map(|t| {
                let t = absolute_path(&pending.module, &t);
                self.builder
                    .resolve_name(Some(&pending.module), &t, SEPARATOR)
                    .unwrap_or(t)
            });

            let spec = self.builder.container_mut(&target, ContainerKind::Class);
            if let Some(trait_name) = trait_name {
                spec.add_supertype(trait_name);
            }
            for member in pending.members {
                spec.add_member(member);
            }
        }
        self.builder
    }
}

fn join(module: &str, name: &str) -> String {
    format!("{module}{SEPARATOR}{name}")
}

/// Rewrites `self::` and `super::` paths against `module`.
fn absolute_path(module: &str, path: &str) -> String {
    if let Some(rest) = path.strip_prefix("self::") {
        return join(module, rest);
    }
    let mut base = module;
    let mut rest = path;
    while let Some(stripped) = rest.strip_prefix("super::") {
        base = namespace_of(base).unwrap_or(CRATE_ROOT);
        rest = stripped;
    }
    if rest.len() == path.len() {
        path.to_string()
    } else {
        join(base, rest)
    }
}

/// Path of a type or trait reference without generic arguments.
fn type_name(node: Node, source: &str) -> Option<String> {
    match node.kind() {
        "type_identifier" | "scoped_type_identifier" | "identifier" | "scoped_identifier" => {
            Some(normalized_text(&node, source))
        }
        "generic_type" => node
            .child_by_field_name("type")
            .and_then(|t| type_name(t, source)),
        _ => None,
    }
}

fn function_member(item: Node, source: &str) -> Option<MemberSpec> {
    let name = node_text(&item.child_by_field_name("name")?, source);
    let mut parameter_types = Vec::new();

    if let Some(parameters) = item.child_by_field_name("parameters") {
        let mut cursor = parameters.walk();
        for parameter in parameters.named_children(&mut cursor) {
            if parameter.kind() != "parameter" {
                continue;
            }
            if let Some(ty) = parameter.child_by_field_name("type") {
                parameter_types.push(normalized_text(&ty, source));
            }
        }
    }

    Some(MemberSpec::new(name, parameter_types))
}
