//! Command tree and global options of the demo program

use crate::cli::commands;
use crate::config::Config;
use crate::core::{Argument, Command, CommandOption};
use clap::builder::{BoolishValueParser, TypedValueParser};
use std::ffi::OsStr;

/// Name of the global flag enabling debug logging
pub const DEBUG_OPTION: &str = "debug";

/// Build the demo command tree
pub fn build_command_tree() -> Command {
    Command::new()
        .with_short_description("nested subcommand demo")
        .with_description(
            "Every command accepts --help. Run a subcommand with --debug to see\n\
             how the argument vector is resolved.",
        )
        .with_subcommand("greet", greet_command())
        .with_subcommand("sum", sum_command())
        .with_subcommand("remote", remote_command())
}

fn greet_command() -> Command {
    Command::new()
        .with_short_description("Greet someone")
        .with_option(CommandOption::string("greeting", "Hello").with_description("Greeting to use"))
        .with_option(CommandOption::bool("s", false).with_description("Shout the greeting"))
        .with_argument(Argument::new("name").with_description("Who to greet"))
        .with_run(commands::greet)
}

fn sum_command() -> Command {
    Command::new()
        .with_short_description("Add integers")
        .with_option(CommandOption::int("start", 0).with_description("Initial value"))
        .with_argument(
            Argument::new("number")
                .multiple()
                .with_description("Integers to add"),
        )
        .with_run(commands::sum)
}

fn remote_command() -> Command {
    Command::new()
        .with_short_description("Manage remotes")
        .with_subcommand(
            "add",
            Command::new()
                .with_short_description("Add a remote")
                .with_argument(Argument::new("name").with_description("Remote name"))
                .with_argument(Argument::new("url").with_description("Remote URL"))
                .with_run(commands::remote_add),
        )
        .with_subcommand(
            "show",
            Command::new()
                .with_short_description("Show a remote")
                .with_argument(Argument::new("name").with_description("Remote name"))
                .with_argument(
                    Argument::new("branch")
                        .optional()
                        .with_description("Tracked branch"),
                )
                .with_run(commands::remote_show),
        )
}

/// Global options of the demo: `help` plus `debug`
pub fn config() -> Config {
    Config::default().with_global_option(
        CommandOption::bool(DEBUG_OPTION, false).with_description("Enable debug output"),
    )
}

/// Whether `--debug` is set before any `--` separator.
///
/// Accepts the bare flag and `--debug=<value>` with the same boolish
/// spellings the option parser takes; the last occurrence wins.
pub fn debug_requested<S: AsRef<str>>(argv: &[S]) -> bool {
    let flag = format!("--{DEBUG_OPTION}");
    let parser = BoolishValueParser::new();
    let command = clap::Command::new(DEBUG_OPTION);

    argv.iter()
        .skip(1)
        .map(|token| token.as_ref())
        .take_while(|token| *token != "--")
        .filter_map(|token| match token.strip_prefix(flag.as_str()) {
            Some("") => Some(true),
            Some(rest) => rest
                .strip_prefix('=')
                .map(|value| parser.parse_ref(&command, None, OsStr::new(value)).unwrap_or(false)),
            None => None,
        })
        .last()
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::resolve;

    #[test]
    fn test_tree_resolves_nested_commands() {
        let root = build_command_tree();
        let resolved = resolve(&root, &["demo", "remote", "show", "origin"]);
        assert_eq!(resolved.name, "demo remote show");
        assert_eq!(resolved.command.short_description, "Show a remote");
        assert_eq!(resolved.args, vec!["origin"]);
    }

    #[test]
    fn test_config_is_valid() {
        let config = config();
        assert!(config.validate().is_ok());
        assert_eq!(config.global_options.len(), 2);
    }

    #[test]
    fn test_debug_requested() {
        assert!(debug_requested(&["demo", "sum", "--debug", "1"]));
        assert!(!debug_requested(&["demo", "sum", "--", "--debug"]));
        assert!(!debug_requested(&["--debug"]));
    }

    #[test]
    fn test_debug_requested_inline_values() {
        assert!(debug_requested(&["demo", "--debug=true", "sum"]));
        assert!(debug_requested(&["demo", "--debug=yes"]));
        assert!(!debug_requested(&["demo", "--debug=false"]));
        assert!(!debug_requested(&["demo", "--debug", "--debug=off"]));
        assert!(!debug_requested(&["demo", "--debugger"]));
    }
}
