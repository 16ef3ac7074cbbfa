use std::path::PathBuf;

use novae_error::Result;
use novae_manifest::{Manifest, Package};
use novae_store::{DescriptorStore, StoreLayout};

/// The installed-package state: the manifest on disk, its in-memory copy and
/// the descriptor directories. Every mutation reloads from disk first.
pub struct ManifestStore {
    layout: StoreLayout,
    manifest: Manifest,
}

impl ManifestStore {
    /// Bootstraps the directories and loads the manifest under `layout`.
    pub fn open(layout: StoreLayout) -> Result<Self> {
        let mut store = Self {
            layout,
            manifest: Manifest::new(),
        };
        store.ensure_directories()?;
        store.load()?;
        Ok(store)
    }

    /// Opens the store rooted at the current user's home directory.
    pub fn open_default() -> Result<Self> {
        Self::open(StoreLayout::from_home_dir()?)
    }

    pub fn ensure_directories(&self) -> Result<()> {
        self.layout.ensure_directories()
    }

    pub fn load(&mut self) -> Result<()> {
        self.manifest = Manifest::load(&self.layout.manifest_path())?;
        Ok(())
    }

    pub fn save(&self) -> Result<()> {
        self.manifest.save(&self.layout.manifest_path())
    }

    #[must_use]
    pub const fn manifest(&self) -> &Manifest {
        &self.manifest
    }

    #[must_use]
    pub fn packages(&self) -> &[Package] {
        self.manifest.packages()
    }

    #[must_use]
    pub fn manifest_path(&self) -> PathBuf {
        self.layout.manifest_path()
    }

    pub(crate) const fn manifest_mut(&mut self) -> &mut Manifest {
        &mut self.manifest
    }

    pub(crate) const fn descriptors(&self) -> DescriptorStore<'_> {
        DescriptorStore::new(&self.layout)
    }
}
