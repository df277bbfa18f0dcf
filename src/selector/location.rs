//! Location selectors. All of them validate eagerly and never resolve
//! against the symbol space.
use std::fmt;
use std::hash::{Hash, Hasher};
use std::path::{Path, PathBuf};
use url::Url;

use crate::error::{require_not_blank, PreconditionViolation};

fn canonicalize(path: &Path) -> Result<PathBuf, PreconditionViolation> {
    path.canonicalize()
        .map_err(|e| PreconditionViolation::canonicalize(path, &e))
}

/// A regular file. Two selectors are equal when their canonical paths are.
#[derive(Debug, Clone)]
pub struct FileSelector {
    raw_path: String,
    path: PathBuf,
}

impl FileSelector {
    pub(crate) fn from_raw(raw_path: &str) -> Result<Self, PreconditionViolation> {
        require_not_blank(raw_path, "file path")?;
        let candidate = Path::new(raw_path);
        if !candidate.is_file() {
            return Err(PreconditionViolation::file_not_found(candidate));
        }
        Ok(Self {
            raw_path: raw_path.to_string(),
            path: canonicalize(candidate)?,
        })
    }

    /// Built from a path handle, the raw path is the canonical path.
    pub(crate) fn from_path(path: &Path) -> Result<Self, PreconditionViolation> {
        if path.as_os_str().is_empty() {
            return Err(PreconditionViolation::blank("file"));
        }
        if !path.is_file() {
            return Err(PreconditionViolation::file_not_found(path));
        }
        let path = canonicalize(path)?;
        Ok(Self {
            raw_path: path.display().to_string(),
            path,
        })
    }

    pub fn raw_path(&self) -> &str {
        &self.raw_path
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl PartialEq for FileSelector {
    fn eq(&self, other: &Self) -> bool {
        self.path == other.path
    }
}

impl Eq for FileSelector {}

impl Hash for FileSelector {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.path.hash(state);
    }
}

impl fmt::Display for FileSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FileSelector [path = '{}']", self.raw_path)
    }
}

#[derive(Debug, Clone)]
pub struct DirectorySelector {
    raw_path: String,
    path: PathBuf,
}

impl DirectorySelector {
    pub(crate) fn from_raw(raw_path: &str) -> Result<Self, PreconditionViolation> {
        require_not_blank(raw_path, "directory path")?;
        let candidate = Path::new(raw_path);
        if !candidate.is_dir() {
            return Err(PreconditionViolation::directory_not_found(candidate));
        }
        Ok(Self {
            raw_path: raw_path.to_string(),
            path: canonicalize(candidate)?,
        })
    }

    pub(crate) fn from_path(path: &Path) -> Result<Self, PreconditionViolation> {
        if path.as_os_str().is_empty() {
            return Err(PreconditionViolation::blank("directory"));
        }
        if !path.is_dir() {
            return Err(PreconditionViolation::directory_not_found(path));
        }
        let path = canonicalize(path)?;
        Ok(Self {
            raw_path: path.display().to_string(),
            path,
        })
    }

    pub fn raw_path(&self) -> &str {
        &self.raw_path
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl PartialEq for DirectorySelector {
    fn eq(&self, other: &Self) -> bool {
        self.path == other.path
    }
}

impl Eq for DirectorySelector {}

impl Hash for DirectorySelector {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.path.hash(state);
    }
}

impl fmt::Display for DirectorySelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DirectorySelector [path = '{}']", self.raw_path)
    }
}

/// Keeps the text as given next to the parsed [`Url`], since parsing
/// normalizes (`http://junit.org` becomes `http://junit.org/`).
#[derive(Debug, Clone)]
pub struct UriSelector {
    raw: String,
    uri: Url,
}

impl UriSelector {
    pub(crate) fn parse(raw: &str) -> Result<Self, PreconditionViolation> {
        require_not_blank(raw, "URI")?;
        let uri = Url::parse(raw).map_err(|e| PreconditionViolation::invalid_uri(raw, e.to_string()))?;
        // `foo:` parses as an opaque URL with nothing after the scheme
        if uri.cannot_be_a_base() && uri.path().is_empty() {
            return Err(PreconditionViolation::invalid_uri(
                raw,
                "scheme-specific part is empty",
            ));
        }
        Ok(Self {
            raw: raw.to_string(),
            uri,
        })
    }

    pub(crate) fn from_url(uri: Url) -> Self {
        Self {
            raw: uri.to_string(),
            uri,
        }
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn uri(&self) -> &Url {
        &self.uri
    }
}

impl PartialEq for UriSelector {
    fn eq(&self, other: &Self) -> bool {
        self.uri == other.uri
    }
}

impl Eq for UriSelector {}

impl Hash for UriSelector {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.uri.hash(state);
    }
}

impl fmt::Display for UriSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "UriSelector [uri = '{}']", self.raw)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ClasspathResourceSelector {
    resource_name: String,
}

impl ClasspathResourceSelector {
    /// One leading `/` is stripped: `/a/b.txt` and `a/b.txt` select the same
    /// resource.
    pub(crate) fn new(resource_name: &str) -> Result<Self, PreconditionViolation> {
        require_not_blank(resource_name, "classpath resource name")?;
        let stripped = resource_name.strip_prefix('/').unwrap_or(resource_name);
        require_not_blank(stripped, "classpath resource name")?;
        Ok(Self {
            resource_name: stripped.to_string(),
        })
    }

    pub fn resource_name(&self) -> &str {
        &self.resource_name
    }
}

impl fmt::Display for ClasspathResourceSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ClasspathResourceSelector [resource_name = '{}']",
            self.resource_name
        )
    }
}
