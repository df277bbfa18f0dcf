use anyhow::{Context as AnyhowContext, Result};
use clap::{Parser, ValueEnum};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Text,
}

/// Source languages that can be indexed into a symbol space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum Language {
    Rust,
    Python,
}

#[derive(Parser, Debug)]
#[command(name = "selector-resolver")]
#[command(about = "Resolve test selectors against a symbol space", long_about = None)]
pub struct Args {
    /// Symbol source: a JSON/YAML manifest, a source file, or a source directory
    #[arg(long, value_name = "PATH")]
    pub symbols: PathBuf,

    /// Selector text, optionally prefixed with its kind (class:, method:, uri:, ...).
    /// Can be specified multiple times.
    #[arg(short = 's', long = "select", value_name = "TEXT")]
    pub selectors: Vec<String>,

    /// Names classified as member, container or package. Can be specified multiple times.
    #[arg(short = 'n', long, value_name = "NAME")]
    pub names: Vec<String>,

    /// Output file path (prints to stdout if not specified)
    #[arg(short = 'O', long, value_name = "FILE")]
    pub output_file: Option<PathBuf>,

    /// Output format (json, text)
    #[arg(short = 'f', long, default_value = "json")]
    pub format: OutputFormat,

    /// Source language (auto-detected if not specified; ignored for manifests)
    #[arg(short, long)]
    pub language: Option<Language>,

    /// Increase verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long)]
    pub quiet: bool,
}

impl Args {
    pub fn validate(&self) -> Result<()> {
        validate_path(&self.symbols)?;
        if self.selectors.is_empty() && self.names.is_empty() {
            anyhow::bail!("Nothing to resolve: pass at least one --select or --names");
        }
        if let Some(blank) = self
            .selectors
            .iter()
            .chain(&self.names)
            .position(|s| s.trim().is_empty())
        {
            anyhow::bail!("Selector #{} is blank", blank + 1);
        }
        Ok(())
    }
}

pub fn detect_language(file_path: &Path) -> Option<Language> {
    file_path.extension()?.to_str().and_then(|ext| match ext {
        "rs" => Some(Language::Rust),
        "py" | "pyi" => Some(Language::Python),
        _ => None,
    })
}

pub fn validate_path(path: &Path) -> Result<()> {
    if !path.exists() {
        anyhow::bail!("Path does not exist: {}", path.display());
    }

    if path.is_file() {
        std::fs::metadata(path).with_context(|| format!("Cannot read file: {}", path.display()))?;
    } else if path.is_dir() {
        std::fs::metadata(path)
            .with_context(|| format!("Cannot read directory: {}", path.display()))?;
    } else {
        anyhow::bail!("Path is neither a file nor a directory: {}", path.display());
    }

    Ok(())
}

impl Language {
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::Rust => "rust",
            Language::Python => "python",
        }
    }

    /// File extension of indexed source files.
    pub fn extension(&self) -> &'static str {
        match self {
            Language::Rust => "rs",
            Language::Python => "py",
        }
    }

    /// Separator between segments of a qualified name.
    pub const fn path_separator(&self) -> &'static str {
        match self {
            Language::Rust => "::",
            Language::Python => ".",
        }
    }
}

impl OutputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Text => "text",
        }
    }
}
