use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::Path;

use novae_error::{NovaeError, Result};

use crate::package::Package;

/// The ordered list of installed packages, stored on disk as a bare JSON array.
#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(transparent)]
pub struct Manifest {
    packages: Vec<Package>,
}

impl Manifest {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            packages: Vec::new(),
        }
    }

    /// Reads the manifest at `path`. A missing file yields an empty manifest,
    /// which is written back immediately.
    pub fn load(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = fs::read_to_string(path)?;
            serde_json::from_str(&content)
                .map_err(|e| NovaeError::ManifestParse(path.to_path_buf(), e.to_string()))
        } else {
            let manifest = Self::new();
            manifest.save(path)?;
            Ok(manifest)
        }
    }

    /// Replaces the manifest at `path` through a temp file + rename, so a
    /// reader never sees a truncated file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let write_err = |e: std::io::Error| NovaeError::ManifestWrite(path.to_path_buf(), e.to_string());

        let parent = path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        fs::create_dir_all(parent).map_err(write_err)?;

        let content = serde_json::to_string_pretty(self)?;
        let mut tmp = tempfile::NamedTempFile::new_in(parent).map_err(write_err)?;
        tmp.write_all(content.as_bytes()).map_err(write_err)?;
        tmp.flush().map_err(write_err)?;
        // Temp files are created 0600; keep whatever mode the manifest had.
        if let Ok(metadata) = fs::metadata(path) {
            tmp.as_file()
                .set_permissions(metadata.permissions())
                .map_err(write_err)?;
        }
        tmp.as_file().sync_all().map_err(write_err)?;
        tmp.persist(path).map_err(|e| write_err(e.error))?;
        Ok(())
    }

    #[must_use]
    pub fn packages(&self) -> &[Package] {
        &self.packages
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.packages.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.packages.is_empty()
    }

    /// Adds `package` at the end, or replaces the record with the same name and
    /// version in place. Returns the replaced record, if any.
    pub fn insert(&mut self, package: Package) -> Option<Package> {
        match self.packages.iter_mut().find(|p| p.is_same_release(&package)) {
            Some(existing) => Some(std::mem::replace(existing, package)),
            None => {
                self.packages.push(package);
                None
            }
        }
    }

    /// Removes every record named `name` (restricted to `version` when given),
    /// keeping the order of what remains. Returns the removed records.
    pub fn remove_matching(&mut self, name: &str, version: Option<&str>) -> Vec<Package> {
        let (removed, kept): (Vec<_>, Vec<_>) = std::mem::take(&mut self.packages)
            .into_iter()
            .partition(|p| p.matches(name, version));
        self.packages = kept;
        removed
    }
}
