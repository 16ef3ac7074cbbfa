use anyhow::Result;

use novae_constants::UNINSTALL_USAGE;
use novae_logger;

use super::CommandStatus;

pub struct UninstallHandler;

impl UninstallHandler {
    pub fn handle_uninstall(
        name: Option<&str>,
        version: Option<&str>,
        debug: bool,
    ) -> Result<CommandStatus> {
        let Some(name) = name else {
            novae_logger::usage(UNINSTALL_USAGE);
            return Ok(CommandStatus::UsageError);
        };

        let mut store = novae_core::open_store()?;
        let removed = novae_core::uninstall_package(&mut store, name, version, debug)?;
        if !removed.is_empty() {
            novae_logger::confirm(&format!("Uninstalled {name}"));
        }
        Ok(CommandStatus::Done)
    }
}
