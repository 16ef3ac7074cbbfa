pub mod commands;
pub mod handlers;

use std::process::ExitCode;

use clap::Parser;

use commands::{Cli, Commands};
use handlers::{
    CommandStatus, HelpHandler, InstallHandler, ListHandler, UninstallHandler,
};
use novae_constants::UNKNOWN_COMMAND;

/// Exit code for argument problems, matching clap's own.
const USAGE_EXIT_CODE: u8 = 2;

pub fn run_cli() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    novae_logger::init_logger(cli.quiet);

    let status = dispatch(cli.command, cli.debug)?;
    Ok(match status {
        CommandStatus::Done => ExitCode::SUCCESS,
        CommandStatus::UsageError => ExitCode::from(USAGE_EXIT_CODE),
    })
}

fn dispatch(command: Option<Commands>, debug: bool) -> anyhow::Result<CommandStatus> {
    match command {
        Some(Commands::Install {
            name,
            version,
            kind,
            ..
        }) => InstallHandler::handle_install(
            name.as_deref(),
            version.as_deref(),
            kind.as_deref(),
            debug,
        ),
        Some(Commands::Uninstall { name, version, .. }) => {
            UninstallHandler::handle_uninstall(name.as_deref(), version.as_deref(), debug)
        }
        Some(Commands::List { .. }) => ListHandler::handle_list(),
        Some(Commands::Help { command }) => HelpHandler::handle_help(command.as_deref()),
        Some(Commands::Unknown(args)) => {
            novae_logger::debug(&format!("Unrecognized arguments: {args:?}"), debug);
            novae_logger::usage(UNKNOWN_COMMAND);
            Ok(CommandStatus::UsageError)
        }
        None => {
            novae_logger::usage(UNKNOWN_COMMAND);
            Ok(CommandStatus::UsageError)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("novae").chain(args.iter().copied()))
            .expect("arguments should parse")
    }

    #[test]
    fn install_takes_three_positionals() {
        let cli = parse(&["install", "foo", "1.0.0", "script"]);
        assert!(matches!(
            cli.command,
            Some(Commands::Install { name: Some(ref n), version: Some(ref v), kind: Some(ref k), .. })
                if n == "foo" && v == "1.0.0" && k == "script"
        ));
    }

    #[test]
    fn install_with_missing_arguments_still_parses() {
        let cli = parse(&["i", "foo"]);
        assert!(matches!(
            cli.command,
            Some(Commands::Install { name: Some(_), version: None, kind: None, .. })
        ));
    }

    #[test]
    fn uninstall_aliases_and_optional_version() {
        let cli = parse(&["rm", "foo", "2.0.0"]);
        assert!(matches!(
            cli.command,
            Some(Commands::Uninstall { name: Some(ref n), version: Some(ref v), .. })
                if n == "foo" && v == "2.0.0"
        ));
    }

    #[test]
    fn unknown_commands_are_captured() {
        let cli = parse(&["frobnicate", "x"]);
        assert!(matches!(cli.command, Some(Commands::Unknown(ref args)) if args.len() == 2));
    }

    #[test]
    fn no_command_is_allowed() {
        assert!(parse(&[]).command.is_none());
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = parse(&["list", "--debug", "-q"]);
        assert!(cli.debug);
        assert!(cli.quiet);
        assert!(matches!(cli.command, Some(Commands::List { .. })));
    }

    #[test]
    fn unknown_command_is_a_usage_error() {
        let status = dispatch(None, false).expect("dispatch should not fail");
        assert_eq!(status, CommandStatus::UsageError);
    }
}
