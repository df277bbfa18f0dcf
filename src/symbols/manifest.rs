//! Declarative symbol spaces.
//!
//! ```yaml
//! containers:
//!   - name: org.example.LocalTestCase
//!     kind: class
//!     supertypes: [org.example.TestInterface]
//!     members:
//!       - name: test4
//!       - name: test4
//!         parameters: [org.example.TestInfo]
//!   - name: org.example.Broken
//!     load_error: static initializer failed
//! ```
use serde::Deserialize;
use std::fs;
use std::path::Path;
use tracing::{debug, trace};

use super::{ContainerKind, ContainerSpec, MemberSpec, SymbolTable, SymbolTableBuilder};
use crate::error::SymbolSourceError;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    #[serde(default)]
    pub containers: Vec<ManifestContainer>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ManifestContainer {
    pub name: String,
    #[serde(default)]
    pub kind: ContainerKind,
    #[serde(default)]
    pub supertypes: Vec<String>,
    #[serde(default)]
    pub members: Vec<ManifestMember>,
    #[serde(default)]
    pub load_error: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ManifestMember {
    pub name: String,
    #[serde(default)]
    pub parameters: Vec<String>,
    #[serde(default)]
    pub default: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ManifestFormat {
    Json,
    Yaml,
}

impl ManifestFormat {
    pub fn from_path(path: &Path) -> Result<Self, SymbolSourceError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or_default();
        match ext {
            "json" => Ok(Self::Json),
            "yaml" | "yml" => Ok(Self::Yaml),
            other => Err(SymbolSourceError::unsupported_format(other)),
        }
    }
}

pub fn load_manifest(path: &Path) -> Result<SymbolTable, SymbolSourceError> {
    trace!(path = %path.display(), "loading symbol manifest");
    let format = ManifestFormat::from_path(path)?;
    let content =
        fs::read_to_string(path).map_err(|e| SymbolSourceError::read_error(path, e))?;

    let manifest = parse_manifest(&content, format)
        .map_err(|message| SymbolSourceError::manifest_parse_error(path, message))?;

    let table = manifest.into_table()?;
    debug!(path = %path.display(), containers = table.len(), "loaded symbol manifest");
    Ok(table)
}

pub fn parse_manifest(content: &str, format: ManifestFormat) -> Result<Manifest, String> {
    match format {
        ManifestFormat::Json => serde_json::from_str(content).map_err(|e| e.to_string()),
        ManifestFormat::Yaml => serde_yaml::from_str(content).map_err(|e| e.to_string()),
    }
}

impl Manifest {
    pub fn into_table(self) -> Result<SymbolTable, SymbolSourceError> {
        let mut builder = SymbolTableBuilder::new();

        for container in self.containers {
            if container.name.trim().is_empty() {
                return Err(SymbolSourceError::invalid_manifest(
                    "container name must not be blank",
                ));
            }
            if builder.contains(&container.name) {
                return Err(SymbolSourceError::invalid_manifest(format!(
                    "duplicate container '{}'",
                    container.name
                )));
            }

            let mut spec = ContainerSpec::new(&container.name, container.kind);
            spec.load_error = container.load_error;
            for supertype in container.supertypes {
                spec.add_supertype(supertype);
            }
            for member in container.members {
                if member.name.trim().is_empty() {
                    return Err(SymbolSourceError::invalid_manifest(format!(
                        "blank member name in container '{}'",
                        container.name
                    )));
                }
                let mut member_spec = MemberSpec::new(member.name, member.parameters);
                member_spec.is_default = member.default;
                spec.add_member(member_spec);
            }
            builder.insert(spec);
        }

        Ok(builder.build())
    }
}
