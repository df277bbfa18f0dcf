use std::path::Path;
use tree_sitter::{Node, Tree};

use super::{module_segments, node_text, normalized_text, SourceIndexer};
use crate::cli::Language;
use crate::error::SymbolSourceError;
use crate::symbols::{ContainerKind, MemberSpec, SymbolTableBuilder};

const UNTYPED: &str = "Any";
const RECEIVER_NAMES: &[&str] = &["self", "cls"];

/// Indexes modules and classes. A later `def` with the same name replaces an
/// earlier one, as it does at runtime.
#[derive(Debug, Default)]
pub struct PythonIndexer {
    builder: SymbolTableBuilder,
}

impl PythonIndexer {
    pub fn new() -> Self {
        Self::default()
    }

    fn index_block(&mut self, container: &str, kind: ContainerKind, block: Node, source: &str) {
        self.builder.container_mut(container, kind);

        let mut cursor = block.walk();
        for child in block.named_children(&mut cursor) {
            let definition = if child.kind() == "decorated_definition" {
                match child.child_by_field_name("definition") {
                    Some(def) => def,
                    None => continue,
                }
            } else {
                child
            };

            match definition.kind() {
                "class_definition" => self.index_class(container, definition, source),
                "function_definition" => {
                    let skip_receiver = kind == ContainerKind::Class;
                    if let Some(member) = function_member(definition, source, skip_receiver) {
                        self.builder
                            .container_mut(container, kind)
                            .replace_member(member);
                    }
                }
                _ => {}
            }
        }
    }

    fn index_class(&mut self, namespace: &str, class: Node, source: &str) {
        let Some(name) = class.child_by_field_name("name") else {
            return;
        };
        let qualified = format!("{namespace}.{}", node_text(&name, source));

        if let Some(superclasses) = class.child_by_field_name("superclasses") {
            let spec = self.builder.container_mut(&qualified, ContainerKind::Class);
            let mut cursor = superclasses.walk();
            for base in superclasses.named_children(&mut cursor) {
                if matches!(base.kind(), "identifier" | "attribute") {
                    let base = normalized_text(&base, source);
                    if base != "object" {
                        spec.add_supertype(base);
                    }
                }
            }
        }

        if let Some(body) = class.child_by_field_name("body") {
            self.index_block(&qualified, ContainerKind::Class, body, source);
        } else {
            self.builder.container_mut(&qualified, ContainerKind::Class);
        }
    }
}

impl SourceIndexer for PythonIndexer {
    fn language(&self) -> Language {
        Language::Python
    }

    fn module_path(&self, root: &Path, file: &Path) -> String {
        let mut segments = module_segments(root, file);
        if segments.len() > 1 && segments.last().map(String::as_str) == Some("__init__") {
            segments.pop();
        }
        segments.join(Language::Python.path_separator())
    }

    fn index_file(
        &mut self,
        module: &str,
        source: &str,
        tree: &Tree,
    ) -> Result<(), SymbolSourceError> {
        self.index_block(module, ContainerKind::Module, tree.root_node(), source);
        Ok(())
    }

    fn finish(self: Box<Self>) -> SymbolTableBuilder {
        self.builder
    }
}

fn function_member(function: Node, source: &str, skip_receiver: bool) -> Option<MemberSpec> {
    let name = node_text(&function.child_by_field_name("name")?, source);
    let mut parameter_types = Vec::new();

    if let Some(parameters) = function.child_by_field_name("parameters") {
        let mut cursor = parameters.walk();
        for (i, parameter) in parameters.named_children(&mut cursor).enumerate() {
            let Some((param_name, param_type)) = parameter_info(parameter, source) else {
                continue;
            };
            if i == 0 && skip_receiver && RECEIVER_NAMES.contains(&param_name.as_str()) {
                continue;
            }
            parameter_types.push(param_type);
        }
    }

    Some(MemberSpec::new(name, parameter_types))
}

/// Name and declared type of one parameter node.
fn parameter_info(parameter: Node, source: &str) -> Option<(String, String)> {
    let annotation = |node: &Node| {
        node.child_by_field_name("type")
            .map(|t| normalized_text(&t, source))
            .unwrap_or_else(|| UNTYPED.to_string())
    };

    match parameter.kind() {
        "identifier" => Some((node_text(&parameter, source).to_string(), UNTYPED.to_string())),
        "typed_parameter" => {
            let target = parameter.named_child(0)?;
            let ty = annotation(&parameter);
            let ty = match target.kind() {
                "list_splat_pattern" => format!("*{ty}"),
                "dictionary_splat_pattern" => format!("**{ty}"),
                _ => ty,
            };
            Some((normalized_text(&target, source), ty))
        }
        "default_parameter" | "typed_default_parameter" => {
            let name = parameter.child_by_field_name("name")?;
            Some((normalized_text(&name, source), annotation(&parameter)))
        }
        "list_splat_pattern" => Some((normalized_text(&parameter, source), format!("*{UNTYPED}"))),
        "dictionary_splat_pattern" => {
            Some((normalized_text(&parameter, source), format!("**{UNTYPED}")))
        }
        _ => None,
    }
}
