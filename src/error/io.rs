use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while building a symbol space from a manifest or source tree.
#[derive(Error, Debug)]
pub enum SymbolSourceError {
    #[error("path does not exist: {path}")]
    NotFound { path: PathBuf },

    #[error("failed to read '{path}': {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to scan directory at {path}: {source}")]
    DirectoryScanError {
        path: PathBuf,
        source: walkdir::Error,
    },

    #[error("failed to parse manifest '{path}': {message}")]
    ManifestParseError { path: PathBuf, message: String },

    #[error("unsupported manifest format: {format} (expected json or yaml)")]
    UnsupportedFormat { format: String },

    #[error("invalid manifest: {message}")]
    InvalidManifest { message: String },

    #[error("failed to set parser language: {language}")]
    LanguageSetupFailed { language: String },

    #[error("failed to parse source code in {path}")]
    ParseFailed { path: PathBuf },

    #[error("could not detect a source language under {path}")]
    UndetectedLanguage { path: PathBuf },
}

impl SymbolSourceError {
    pub fn not_found(path: impl Into<PathBuf>) -> Self {
        Self::NotFound { path: path.into() }
    }

    pub fn read_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ReadError {
            path: path.into(),
            source,
        }
    }

    pub fn manifest_parse_error(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::ManifestParseError {
            path: path.into(),
            message: message.into(),
        }
    }

    pub fn unsupported_format(format: impl Into<String>) -> Self {
        Self::UnsupportedFormat {
            format: format.into(),
        }
    }

    pub fn invalid_manifest(message: impl Into<String>) -> Self {
        Self::InvalidManifest {
            message: message.into(),
        }
    }

    pub fn language_setup_failed(language: impl Into<String>) -> Self {
        Self::LanguageSetupFailed {
            language: language.into(),
        }
    }

    pub fn parse_failed(path: impl Into<PathBuf>) -> Self {
        Self::ParseFailed { path: path.into() }
    }
}
