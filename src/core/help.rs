//! Help text rendering
//!
//! Pure functions of a command and the display name it was resolved under.

use crate::core::command::Command;
use crate::core::schema::CommandOption;
use std::fmt::Write;

/// Width of the name column in the option, argument and subcommand lists
const NAME_COLUMN: usize = 20;

/// Short syntax line, e.g. `prog remote add [<options>] <name> <url>`
pub fn usage(command: &Command, name: &str) -> String {
    let mut out = String::from(name);
    if !command.subcommands.is_empty() {
        out.push_str(" [<subcommand>]");
    }
    out.push_str(" [<options>]");
    for argument in &command.arguments {
        let _ = write!(out, " {argument}");
    }
    out
}

/// Full help text for `command`.
///
/// `extra_options` are listed after the command's own options; this is how
/// injected global options show up without being written into the tree.
pub fn render_help(command: &Command, name: &str, extra_options: &[CommandOption]) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "\n    {} - {}",
        usage(command, name),
        command.short_description
    );

    let options: Vec<&CommandOption> = command.options.iter().chain(extra_options).collect();
    if !options.is_empty() {
        out.push_str("\nOPTIONS:\n");
        for option in options {
            let _ = writeln!(out, "    {:<NAME_COLUMN$} {}", option, option.description);
        }
    }

    if !command.arguments.is_empty() {
        out.push_str("\nARGUMENTS:\n");
        for argument in &command.arguments {
            let _ = writeln!(out, "    {:<NAME_COLUMN$} {}", argument, argument.description);
        }
    }

    if !command.subcommands.is_empty() {
        out.push_str("\nSUBCOMMANDS:\n");
        for (sub_name, sub) in &command.subcommands {
            let _ = writeln!(out, "    {:<NAME_COLUMN$} {}", sub_name, sub.short_description);
        }
        let _ = writeln!(out, "\n    Try '{name} <subcommand> --help'");
    }

    if !command.description.is_empty() {
        out.push_str("\nDESCRIPTION:\n");
        for line in command.description.trim_matches('\n').split('\n') {
            let _ = writeln!(out, "    {line}");
        }
    }

    out
}
