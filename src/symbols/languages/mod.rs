//! Builds symbol tables by indexing source trees with tree-sitter.
mod python;
mod rust;

pub use python::PythonIndexer;
pub use rust::RustIndexer;

use std::fs;
use std::path::{Component, Path, PathBuf};
use tracing::{debug, trace};
use tree_sitter::{Node, Tree};
use walkdir::WalkDir;

use super::{SymbolTable, SymbolTableBuilder};
use crate::cli::Language;
use crate::error::SymbolSourceError;

pub const EXCLUDED_DIRS: &[&str] = &[
    "target",
    ".git",
    "__pycache__",
    "node_modules",
    "venv",
    ".venv",
];

pub trait SourceIndexer {
    fn language(&self) -> Language;

    /// Qualified module name of `file`, relative to the indexed `root`.
    fn module_path(&self, root: &Path, file: &Path) -> String;

    fn index_file(
        &mut self,
        module: &str,
        source: &str,
        tree: &Tree,
    ) -> Result<(), SymbolSourceError>;

    fn finish(self: Box<Self>) -> SymbolTableBuilder;
}

pub fn indexer_for(language: Language) -> Box<dyn SourceIndexer> {
    match language {
        Language::Rust => Box::new(RustIndexer::new()),
        Language::Python => Box::new(PythonIndexer::new()),
    }
}

/// Indexes a single file or every matching file below a directory.
pub fn index_source(path: &Path, language: Language) -> Result<SymbolTable, SymbolSourceError> {
    let (root, files) = if path.is_dir() {
        let files = walk_source_files(path, language.extension())?;
        (path.to_path_buf(), files)
    } else {
        let root = path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."));
        (root, vec![path.to_path_buf()])
    };

    debug!(root = %root.display(), files = files.len(), language = language.as_str(), "indexing source");

    let mut indexer = indexer_for(language);
    for file in &files {
        let source =
            fs::read_to_string(file).map_err(|e| SymbolSourceError::read_error(file, e))?;
        let tree = parse_source(indexer.language(), &source, file)?;
        if tree.root_node().has_error() {
            debug!(path = %file.display(), "source contains syntax errors; indexing what parsed");
        }
        let module = indexer.module_path(&root, file);
        trace!(path = %file.display(), module = %module, "indexing file");
        indexer.index_file(&module, &source, &tree)?;
    }

    Ok(indexer.finish().build())
}

pub fn parse_source(
    language: Language,
    source: &str,
    path: &Path,
) -> Result<Tree, SymbolSourceError> {
    let ts_language: tree_sitter::Language = match language {
        Language::Rust => tree_sitter_rust::LANGUAGE.into(),
        Language::Python => tree_sitter_python::LANGUAGE.into(),
    };

    let mut parser = tree_sitter::Parser::new();
    parser
        .set_language(&ts_language)
        .map_err(|_| SymbolSourceError::language_setup_failed(language.as_str()))?;
    parser
        .parse(source, None)
        .ok_or_else(|| SymbolSourceError::parse_failed(path))
}

pub fn walk_source_files(root: &Path, extension: &str) -> Result<Vec<PathBuf>, SymbolSourceError> {
    let mut files = Vec::new();

    for entry in WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| {
            if e.depth() == 0 || !e.file_type().is_dir() {
                return true;
            }
            let name = e.file_name().to_string_lossy();
            !name.starts_with('.') && !EXCLUDED_DIRS.contains(&name.as_ref())
        })
    {
        let entry = entry.map_err(|e| SymbolSourceError::DirectoryScanError {
            path: root.to_path_buf(),
            source: e,
        })?;

        if entry.file_type().is_file()
            && entry.path().extension().is_some_and(|ext| ext == extension)
        {
            files.push(entry.path().to_path_buf());
        }
    }

    Ok(files)
}

/// Picks the indexing language for `path` from its extension, or for a
/// directory from project markers and then file counts.
pub fn detect_language(path: &Path) -> Option<Language> {
    if path.is_file() {
        return crate::cli::detect_language(path);
    }

    if path.join("Cargo.toml").exists() {
        return Some(Language::Rust);
    }
    if ["pyproject.toml", "setup.py", "requirements.txt"]
        .iter()
        .any(|marker| path.join(marker).exists())
    {
        return Some(Language::Python);
    }

    let rust_files = walk_source_files(path, Language::Rust.extension()).ok()?.len();
    let python_files = walk_source_files(path, Language::Python.extension()).ok()?.len();
    match (rust_files, python_files) {
        (0, 0) => None,
        (r, p) if r >= p => Some(Language::Rust),
        _ => Some(Language::Python),
    }
}

/// Path components of `file` below `root` without the extension, dropping a
/// leading `src` directory.
pub(crate) fn module_segments(root: &Path, file: &Path) -> Vec<String> {
    let relative = file.strip_prefix(root).unwrap_or(file);
    let mut segments: Vec<String> = relative
        .with_extension("")
        .components()
        .filter_map(|c| match c {
            Component::Normal(name) => Some(name.to_string_lossy().into_owned()),
            _ => None,
        })
        .collect();

    if segments.len() > 1 && segments[0] == "src" {
        segments.remove(0);
    }
    segments
}

pub(crate) fn node_text<'a>(node: &Node, source: &'a str) -> &'a str {
    node.utf8_text(source.as_bytes()).unwrap_or_default()
}

/// Node text with whitespace runs collapsed to single spaces.
pub(crate) fn normalized_text(node: &Node, source: &str) -> String {
    node_text(node, source)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}
