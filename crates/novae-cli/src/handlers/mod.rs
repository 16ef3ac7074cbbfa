pub mod help;
pub mod install;
pub mod list;
pub mod uninstall;

pub use help::HelpHandler;
pub use install::InstallHandler;
pub use list::ListHandler;
pub use uninstall::UninstallHandler;

/// How a command ended, short of an I/O failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandStatus {
    Done,
    UsageError,
}
