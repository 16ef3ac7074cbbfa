use novae_manifest::Package;

use crate::store::ManifestStore;

pub struct ListManager;

impl ListManager {
    #[must_use]
    pub fn list_packages<'a>(&self, store: &'a ManifestStore) -> &'a [Package] {
        store.packages()
    }

    /// The lines printed under the list header, in manifest order.
    #[must_use]
    pub fn render_lines(&self, store: &ManifestStore) -> Vec<String> {
        self.list_packages(store)
            .iter()
            .map(ToString::to_string)
            .collect()
    }
}
