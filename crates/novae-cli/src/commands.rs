use clap::{Parser, Subcommand};

use novae_constants::VERSION;

#[derive(Parser)]
#[command(name = "novae")]
#[command(version = VERSION)]
#[command(propagate_version = true)]
#[command(about = "A tiny local registry for novae extensions and scripts", long_about = None)]
#[command(disable_help_flag = true)]
#[command(disable_help_subcommand = true)]
pub struct Cli {
    /// Enable debug mode for verbose output
    #[arg(long, global = true)]
    pub debug: bool,
    /// Suppress confirmation messages
    #[arg(short = 'q', long = "quiet", global = true)]
    pub quiet: bool,
    #[command(subcommand)]
    pub command: Option<Commands>,
}

// Positionals are optional so missing arguments get our own usage lines
// instead of clap's error output. Surplus positionals are accepted and
// ignored. The version positionals carry their own id because
// `propagate_version` already registers a `version` flag on every subcommand.
#[derive(Subcommand)]
pub enum Commands {
    /// Registers a package and writes its descriptor
    #[command(alias = "i")]
    Install {
        /// Package name
        name: Option<String>,
        /// Package version (opaque string)
        #[arg(id = "pkg_version", value_name = "VERSION")]
        version: Option<String>,
        /// Package type: extension or script
        #[arg(value_name = "TYPE")]
        kind: Option<String>,
        #[arg(hide = true)]
        rest: Vec<String>,
    },
    /// Removes every installed version of a package (or just one)
    #[command(aliases = ["remove", "rm"])]
    Uninstall {
        /// Package name
        name: Option<String>,
        /// Only remove this version
        #[arg(id = "pkg_version", value_name = "VERSION")]
        version: Option<String>,
        #[arg(hide = true)]
        rest: Vec<String>,
    },
    /// Lists installed packages
    #[command(alias = "ls")]
    List {
        #[arg(hide = true)]
        rest: Vec<String>,
    },
    /// Shows help information for novae or a specific command
    Help {
        /// The command to show help for (optional)
        #[arg()]
        command: Option<String>,
    },
    #[command(external_subcommand)]
    Unknown(Vec<String>),
}
