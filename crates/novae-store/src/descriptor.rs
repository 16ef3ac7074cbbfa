use std::fs;
use std::io;
use std::path::PathBuf;

use novae_error::{NovaeError, Result};
use novae_manifest::Package;

use crate::layout::StoreLayout;

/// Per-package descriptor files mirroring manifest entries.
pub struct DescriptorStore<'a> {
    layout: &'a StoreLayout,
}

impl<'a> DescriptorStore<'a> {
    #[must_use]
    pub const fn new(layout: &'a StoreLayout) -> Self {
        Self { layout }
    }

    /// Writes the descriptor for `package`, overwriting an existing one.
    pub fn write(&self, package: &Package) -> Result<PathBuf> {
        let path = self.layout.descriptor_path(package);
        let content = serde_json::to_string_pretty(package)?;
        fs::write(&path, content)
            .map_err(|e| NovaeError::DescriptorWrite(path.clone(), e.to_string()))?;
        Ok(path)
    }

    /// Deletes the descriptor for `package`. Returns `false` when there was
    /// nothing to delete.
    pub fn remove(&self, package: &Package) -> Result<bool> {
        let path = self.layout.descriptor_path(package);
        match fs::remove_file(&path) {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(NovaeError::DescriptorRemove(path, e.to_string())),
        }
    }
}
