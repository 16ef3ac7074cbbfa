use novae_error::Result;
use novae_logger;
use novae_manifest::Package;

use crate::store::ManifestStore;

pub struct UninstallManager;

impl UninstallManager {
    /// Removes every record named `name`, or only `name@version` when a
    /// version is given, together with their descriptors. Returns the removed
    /// records; an empty result means nothing matched and nothing was touched.
    pub fn uninstall(
        &self,
        store: &mut ManifestStore,
        name: &str,
        version: Option<&str>,
        debug: bool,
    ) -> Result<Vec<Package>> {
        store.load()?;

        let removed = store.manifest_mut().remove_matching(name, version);
        if removed.is_empty() {
            novae_logger::debug(&format!("No installed package matches '{name}'"), debug);
            return Ok(removed);
        }
        store.save()?;

        let descriptors = store.descriptors();
        for package in &removed {
            if descriptors.remove(package)? {
                novae_logger::debug(&format!("Deleted descriptor for {package}"), debug);
            } else {
                novae_logger::debug(
                    &format!("Descriptor for {package} was already gone"),
                    debug,
                );
            }
        }

        Ok(removed)
    }
}
