pub mod install;
pub mod list;
pub mod store;
pub mod uninstall;

pub use install::{InstallManager, InstallOutcome};
pub use list::ListManager;
pub use store::ManifestStore;
pub use uninstall::UninstallManager;

pub use novae_manifest::{Package, PackageKind};
pub use novae_store::StoreLayout;

pub fn open_store() -> anyhow::Result<ManifestStore> {
    ManifestStore::open_default().map_err(|e| anyhow::anyhow!(e))
}

pub fn install_package(
    store: &mut ManifestStore,
    package: Package,
    debug: bool,
) -> anyhow::Result<InstallOutcome> {
    let manager = InstallManager;
    manager
        .install(store, package, debug)
        .map_err(|e| anyhow::anyhow!(e))
}

pub fn uninstall_package(
    store: &mut ManifestStore,
    name: &str,
    version: Option<&str>,
    debug: bool,
) -> anyhow::Result<Vec<Package>> {
    let manager = UninstallManager;
    manager
        .uninstall(store, name, version, debug)
        .map_err(|e| anyhow::anyhow!(e))
}

#[must_use]
pub fn list_packages(store: &ManifestStore) -> Vec<String> {
    let manager = ListManager;
    manager.render_lines(store)
}
