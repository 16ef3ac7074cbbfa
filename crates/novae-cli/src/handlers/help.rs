use anyhow::Result;
use clap::CommandFactory;
use owo_colors::OwoColorize;

use crate::commands::Cli;
use novae_constants::{BIN_NAME, COMMANDS, DESCRIPTION, EXAMPLES, VERSION};

use super::CommandStatus;

pub struct HelpHandler;

impl HelpHandler {
    pub fn handle_help(command: Option<&str>) -> Result<CommandStatus> {
        match command {
            Some(cmd) => Self::show_command_help(cmd)?,
            None => Self::show_custom_help(),
        }
        Ok(CommandStatus::Done)
    }

    fn show_command_help(command: &str) -> Result<()> {
        let mut cmd = Cli::command();

        if let Some(subcommand) = cmd.find_subcommand_mut(command) {
            subcommand.print_help()?;
        } else {
            println!(
                "{}: Unknown command '{}'",
                "Error".bright_red().bold(),
                command
            );
            println!();
            Self::show_custom_help();
        }

        println!();
        Ok(())
    }

    fn show_custom_help() {
        println!("{}", DESCRIPTION.bright_white().bold());
        println!(
            "{} {}",
            "Version:".bright_white().bold(),
            VERSION.bright_black().bold()
        );
        println!();

        println!("{}", "Usage:".bright_magenta().bold());
        println!(
            "  {} {} {} {}",
            BIN_NAME.bright_cyan().bold(),
            "<COMMAND>".bright_white(),
            "<OPTIONS>".bright_black().bold(),
            "[ARGS]".bright_black().bold()
        );
        println!();

        println!("{}", "Commands:".bright_magenta().bold());
        let max_cmd_width = COMMANDS
            .iter()
            .map(|(cmd, _, aliases)| cmd.len() + Self::alias_suffix(aliases).len())
            .max()
            .unwrap_or(0);

        for (cmd, desc, aliases) in COMMANDS {
            let alias_str = Self::alias_suffix(aliases);
            let plain_cmd = format!("{cmd}{alias_str}");
            let colored_cmd = format!(
                "{}{}",
                cmd.bright_cyan().bold(),
                alias_str.bright_black().bold()
            );
            println!(
                "  {:width$}  # {}",
                colored_cmd,
                desc.bright_black().bold(),
                width = max_cmd_width + (colored_cmd.len() - plain_cmd.len())
            );
        }
        println!();

        println!("{}", "Options:".bright_magenta().bold());
        for (flag, desc) in [
            ("-V, --version", "Print version"),
            ("-q, --quiet  ", "Suppress confirmation messages"),
            ("    --debug  ", "Enable verbose output"),
        ] {
            println!(
                "  {}  # {}",
                flag.bright_cyan().bold(),
                desc.bright_black().bold()
            );
        }
        println!();

        Self::show_examples();
    }

    fn show_examples() {
        println!("{}", "Examples:".bright_magenta().bold());

        let max_example_width = EXAMPLES.iter().map(|(cmd, _)| cmd.len()).max().unwrap_or(0);

        for (cmd, desc) in EXAMPLES {
            let formatted_cmd = cmd
                .split_whitespace()
                .enumerate()
                .map(|(i, part)| {
                    if i == 0 {
                        part.bright_cyan().bold().to_string()
                    } else {
                        part.bright_white().to_string()
                    }
                })
                .collect::<Vec<_>>()
                .join(" ");

            let visual_width_diff = formatted_cmd.len() - cmd.len();

            println!(
                "  {:width$}  # {}",
                formatted_cmd,
                desc.bright_black().bold(),
                width = max_example_width + visual_width_diff
            );
        }

        println!();
        println!(
            "{}",
            "For more information about a specific command, use:".bright_magenta()
        );
        println!(
            "  {} {} {}",
            BIN_NAME.bright_cyan().bold(),
            "help".bright_white(),
            "<command>".bright_black().bold()
        );
    }

    fn alias_suffix(aliases: &[&str]) -> String {
        if aliases.is_empty() {
            String::new()
        } else {
            format!(" [{}]", aliases.join(", "))
        }
    }
}
