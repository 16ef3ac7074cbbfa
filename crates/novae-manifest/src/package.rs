use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use novae_error::{NovaeError, Result};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum PackageKind {
    Extension,
    Script,
}

impl PackageKind {
    pub const ALL: [Self; 2] = [Self::Extension, Self::Script];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Extension => "extension",
            Self::Script => "script",
        }
    }
}

impl fmt::Display for PackageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PackageKind {
    type Err = NovaeError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "extension" => Ok(Self::Extension),
            "script" => Ok(Self::Script),
            other => Err(NovaeError::InvalidPackageKind(other.to_string())),
        }
    }
}

/// A single installed package as recorded in the manifest and in its descriptor.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Package {
    pub name: String,
    pub version: String,
    #[serde(rename = "type")]
    pub kind: PackageKind,
}

impl Package {
    pub fn new(name: impl Into<String>, version: impl Into<String>, kind: PackageKind) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            kind,
        }
    }

    /// Name and version end up in a file name, so both must be usable as one.
    pub fn validate(&self) -> Result<()> {
        validate_component("name", &self.name)?;
        validate_component("version", &self.version)
    }

    #[must_use]
    pub fn is_same_release(&self, other: &Self) -> bool {
        self.name == other.name && self.version == other.version
    }

    #[must_use]
    pub fn matches(&self, name: &str, version: Option<&str>) -> bool {
        self.name == name && version.is_none_or(|v| self.version == v)
    }

    /// `{name}-{version}`, the stem of the descriptor file.
    #[must_use]
    pub fn file_stem(&self) -> String {
        format!("{}-{}", self.name, self.version)
    }
}

impl fmt::Display for Package {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{} ({})", self.name, self.version, self.kind)
    }
}

fn validate_component(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(NovaeError::InvalidPackageSpec(format!(
            "{field} must not be empty"
        )));
    }
    if value == "." || value == ".." || value.contains(['/', '\\', '\0']) {
        return Err(NovaeError::InvalidPackageSpec(format!(
            "{field} '{value}' is not a valid file name component"
        )));
    }
    Ok(())
}
