use std::path::PathBuf;

use novae_error::Result;
use novae_logger;
use novae_manifest::Package;

use crate::store::ManifestStore;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallOutcome {
    pub package: Package,
    pub descriptor: PathBuf,
    /// The record this install replaced, when the same name and version was
    /// already installed.
    pub replaced: Option<Package>,
}

pub struct InstallManager;

impl InstallManager {
    pub fn install(
        &self,
        store: &mut ManifestStore,
        package: Package,
        debug: bool,
    ) -> Result<InstallOutcome> {
        package.validate()?;

        store.ensure_directories()?;
        store.load()?;
        novae_logger::debug(
            &format!(
                "Loaded {} package(s) from {}",
                store.manifest().len(),
                store.manifest_path().display()
            ),
            debug,
        );

        let replaced = store.manifest_mut().insert(package.clone());
        if let Some(previous) = &replaced {
            novae_logger::debug(&format!("Replacing existing record {previous}"), debug);
        }
        store.save()?;

        // A kind change moves the descriptor to another directory; nothing in
        // the manifest points at the old file anymore.
        if let Some(previous) = replaced.as_ref().filter(|p| p.kind != package.kind) {
            novae_logger::warn(&format!(
                "{}@{} changes type from {} to {}",
                package.name, package.version, previous.kind, package.kind
            ));
            store.descriptors().remove(previous)?;
        }

        let descriptor = store.descriptors().write(&package)?;
        novae_logger::debug(&format!("Wrote {}", descriptor.display()), debug);

        Ok(InstallOutcome {
            package,
            descriptor,
            replaced,
        })
    }
}
