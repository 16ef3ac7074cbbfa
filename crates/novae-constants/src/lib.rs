pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const DESCRIPTION: &str = "A tiny local registry for novae extensions and scripts";
pub const BIN_NAME: &str = "novae";
pub const COMMANDS: &[(&str, &str, &[&str])] = &[
    (
        "install",
        "Registers a package and writes its descriptor",
        &["i"],
    ),
    (
        "uninstall",
        "Removes every installed version of a package (or just one)",
        &["remove", "rm"],
    ),
    ("list", "Lists installed packages", &["ls"]),
    (
        "help",
        "Shows help information for novae or a specific command",
        &[],
    ),
];
pub const EXAMPLES: &[(&str, &str)] = &[
    ("novae install foo 1.0.0 script", "Install a script"),
    ("novae install bar 0.3.1 extension", "Install an extension"),
    ("novae uninstall foo", "Remove every version of foo"),
    ("novae uninstall foo 1.0.0", "Remove a single version"),
    ("novae list", "List installed packages"),
];

/// Directory under `$HOME` holding the manifest.
pub const CONFIG_DIR: &[&str] = &[".config", "novae"];
pub const MANIFEST_FILE: &str = "config.json";
/// Directory under `$HOME` holding the per-kind descriptor directories.
pub const DATA_DIR: &str = ".novae";
pub const EXTENSIONS_DIR: &str = "extensions";
pub const SCRIPTS_DIR: &str = "scripts";
pub const DESCRIPTOR_EXTENSION: &str = "json";

pub const LIST_HEADER: &str = "Installed packages:";
pub const UNKNOWN_COMMAND: &str = "Unknown command. Use 'install', 'uninstall', or 'list'.";
pub const INSTALL_USAGE: &str = "Usage: novae install <name> <version> <type>";
pub const UNINSTALL_USAGE: &str = "Usage: novae uninstall <name> [version]";
pub const INVALID_KIND: &str = "Type must be either 'extension' or 'script'";
