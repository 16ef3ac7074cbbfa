use anyhow::Result;

use novae_constants::{INSTALL_USAGE, INVALID_KIND};
use novae_core::{ManifestStore, Package, PackageKind};
use novae_logger;

use super::CommandStatus;

pub struct InstallHandler;

impl InstallHandler {
    pub fn handle_install(
        name: Option<&str>,
        version: Option<&str>,
        kind: Option<&str>,
        debug: bool,
    ) -> Result<CommandStatus> {
        let Some(package) = Self::parse_package(name, version, kind)? else {
            return Ok(CommandStatus::UsageError);
        };

        let mut store = novae_core::open_store()?;
        Self::install(&mut store, package, debug)?;
        Ok(CommandStatus::Done)
    }

    fn install(store: &mut ManifestStore, package: Package, debug: bool) -> Result<()> {
        let outcome = novae_core::install_package(store, package, debug)?;
        if outcome.replaced.is_some() {
            novae_logger::debug("Same version was already installed; record refreshed", debug);
        }
        novae_logger::confirm(&format!(
            "Installed {}@{}",
            outcome.package.name, outcome.package.version
        ));
        Ok(())
    }

    /// Reports usage problems itself and returns `None` for them.
    fn parse_package(
        name: Option<&str>,
        version: Option<&str>,
        kind: Option<&str>,
    ) -> Result<Option<Package>> {
        let (Some(name), Some(version), Some(kind)) = (name, version, kind) else {
            novae_logger::usage(INSTALL_USAGE);
            return Ok(None);
        };

        let Ok(kind) = kind.parse::<PackageKind>() else {
            novae_logger::usage(INVALID_KIND);
            return Ok(None);
        };

        let package = Package::new(name, version, kind);
        if let Err(e) = package.validate() {
            novae_logger::usage(&e.to_string());
            return Ok(None);
        }
        Ok(Some(package))
    }
}
