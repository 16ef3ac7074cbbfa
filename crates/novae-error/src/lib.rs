use std::fmt;
use std::io;
use std::path::PathBuf;

#[derive(Debug)]
pub enum NovaeError {
    HomeDirNotFound,
    InvalidPackageSpec(String),
    InvalidPackageKind(String),
    ManifestParse(PathBuf, String),
    ManifestWrite(PathBuf, String),
    DescriptorWrite(PathBuf, String),
    DescriptorRemove(PathBuf, String),
    DirectoryCreate(PathBuf, String),
    Serialization(String),
    IoError(String),
}

impl fmt::Display for NovaeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::HomeDirNotFound => {
                write!(f, "Could not determine the home directory")
            }
            Self::InvalidPackageSpec(reason) => {
                write!(f, "Invalid package specification: {reason}")
            }
            Self::InvalidPackageKind(kind) => {
                write!(
                    f,
                    "Invalid package type '{kind}': expected 'extension' or 'script'"
                )
            }
            Self::ManifestParse(path, reason) => {
                write!(f, "Failed to parse manifest at {}: {reason}", path.display())
            }
            Self::ManifestWrite(path, reason) => {
                write!(f, "Failed to write manifest at {}: {reason}", path.display())
            }
            Self::DescriptorWrite(path, reason) => {
                write!(
                    f,
                    "Failed to write descriptor {}: {reason}",
                    path.display()
                )
            }
            Self::DescriptorRemove(path, reason) => {
                write!(
                    f,
                    "Failed to remove descriptor {}: {reason}",
                    path.display()
                )
            }
            Self::DirectoryCreate(path, reason) => {
                write!(
                    f,
                    "Failed to create directory {}: {reason}",
                    path.display()
                )
            }
            Self::Serialization(msg) => {
                write!(f, "Serialization error: {msg}")
            }
            Self::IoError(msg) => {
                write!(f, "IO error: {msg}")
            }
        }
    }
}

impl std::error::Error for NovaeError {}

impl From<io::Error> for NovaeError {
    fn from(err: io::Error) -> Self {
        Self::IoError(err.to_string())
    }
}

impl From<serde_json::Error> for NovaeError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, NovaeError>;
