use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PreconditionViolation {
    #[error("{argument} must not be null or blank")]
    Blank { argument: &'static str },

    #[error("file does not exist: {path}")]
    FileNotFound { path: PathBuf },

    #[error("directory does not exist: {path}")]
    DirectoryNotFound { path: PathBuf },

    #[error("failed to canonicalize '{path}': {message}")]
    Canonicalize { path: PathBuf, message: String },

    #[error("failed to create URI from '{input}': {message}")]
    InvalidUri { input: String, message: String },

    #[error("{argument} is invalid: {message}")]
    InvalidArgument {
        argument: &'static str,
        message: String,
    },
}

impl PreconditionViolation {
    pub fn blank(argument: &'static str) -> Self {
        Self::Blank { argument }
    }

    pub fn file_not_found(path: impl Into<PathBuf>) -> Self {
        Self::FileNotFound { path: path.into() }
    }

    pub fn directory_not_found(path: impl Into<PathBuf>) -> Self {
        Self::DirectoryNotFound { path: path.into() }
    }

    pub fn canonicalize(path: impl Into<PathBuf>, source: &std::io::Error) -> Self {
        Self::Canonicalize {
            path: path.into(),
            message: source.to_string(),
        }
    }

    pub fn invalid_uri(input: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidUri {
            input: input.into(),
            message: message.into(),
        }
    }

    pub fn invalid_argument(argument: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            argument,
            message: message.into(),
        }
    }
}

/// Fails with [`PreconditionViolation::Blank`] when `value` is empty or whitespace.
pub fn require_not_blank<'a>(
    value: &'a str,
    argument: &'static str,
) -> Result<&'a str, PreconditionViolation> {
    if value.trim().is_empty() {
        Err(PreconditionViolation::blank(argument))
    } else {
        Ok(value)
    }
}
