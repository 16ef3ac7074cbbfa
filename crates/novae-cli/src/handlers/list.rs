use anyhow::Result;

use novae_constants::LIST_HEADER;

use super::CommandStatus;

pub struct ListHandler;

impl ListHandler {
    pub fn handle_list() -> Result<CommandStatus> {
        let store = novae_core::open_store()?;
        println!("{LIST_HEADER}");
        for line in novae_core::list_packages(&store) {
            println!("{line}");
        }
        Ok(CommandStatus::Done)
    }
}
