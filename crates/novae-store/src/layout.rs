use std::fs;
use std::path::{Path, PathBuf};

use novae_constants::{
    CONFIG_DIR, DATA_DIR, DESCRIPTOR_EXTENSION, EXTENSIONS_DIR, MANIFEST_FILE, SCRIPTS_DIR,
};
use novae_error::{NovaeError, Result};
use novae_manifest::{Package, PackageKind};

/// Where novae keeps its files, relative to a home directory.
///
/// ```text
/// <home>/.config/novae/config.json
/// <home>/.novae/extensions/<name>-<version>.json
/// <home>/.novae/scripts/<name>-<version>.json
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreLayout {
    home: PathBuf,
}

impl StoreLayout {
    pub fn new(home: impl Into<PathBuf>) -> Self {
        Self { home: home.into() }
    }

    pub fn from_home_dir() -> Result<Self> {
        dirs::home_dir()
            .map(Self::new)
            .ok_or(NovaeError::HomeDirNotFound)
    }

    #[must_use]
    pub fn config_dir(&self) -> PathBuf {
        CONFIG_DIR
            .iter()
            .fold(self.home.clone(), |path, part| path.join(part))
    }

    #[must_use]
    pub fn manifest_path(&self) -> PathBuf {
        self.config_dir().join(MANIFEST_FILE)
    }

    #[must_use]
    pub fn data_dir(&self) -> PathBuf {
        self.home.join(DATA_DIR)
    }

    #[must_use]
    pub fn kind_dir(&self, kind: PackageKind) -> PathBuf {
        let dir = match kind {
            PackageKind::Extension => EXTENSIONS_DIR,
            PackageKind::Script => SCRIPTS_DIR,
        };
        self.data_dir().join(dir)
    }

    #[must_use]
    pub fn descriptor_path(&self, package: &Package) -> PathBuf {
        self.kind_dir(package.kind)
            .join(format!("{}.{DESCRIPTOR_EXTENSION}", package.file_stem()))
    }

    /// Creates the config directory and both kind directories. Safe to call
    /// repeatedly.
    pub fn ensure_directories(&self) -> Result<()> {
        let dirs = std::iter::once(self.config_dir())
            .chain(PackageKind::ALL.iter().map(|kind| self.kind_dir(*kind)));
        for dir in dirs {
            ensure_dir_exists(&dir)?;
        }
        Ok(())
    }
}

fn ensure_dir_exists(path: &Path) -> Result<()> {
    if !path.is_dir() {
        fs::create_dir_all(path)
            .map_err(|e| NovaeError::DirectoryCreate(path.to_path_buf(), e.to_string()))?;
    }
    Ok(())
}
