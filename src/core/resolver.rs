//! Command-tree resolution
//!
//! Walks the tree from the root, consuming leading tokens for as long as
//! they name a subcommand of the current node.

use crate::core::command::Command;
use tracing::{debug, instrument};

/// Outcome of resolving an argument vector against a command tree
#[derive(Debug)]
pub struct Resolved<'a> {
    /// Deepest command reached
    pub command: &'a Command,
    /// Program name and every consumed subcommand name, joined with spaces
    pub name: String,
    /// Tokens left for the command itself
    pub args: Vec<String>,
}

/// Locate the command to execute.
///
/// `argv` is the full argument vector with the program name first. Matching
/// is positional: the first token must name a child of the root, the second a
/// child of that child, and so on. Resolution stops at the first token that
/// names no child of the current node.
#[instrument(skip(root, argv))]
pub fn resolve<'a, S: AsRef<str>>(root: &'a Command, argv: &[S]) -> Resolved<'a> {
    let Some((program, rest)) = argv.split_first() else {
        debug!("Empty argument vector, resolving to root");
        return Resolved {
            command: root,
            name: String::new(),
            args: Vec::new(),
        };
    };

    let mut command = root;
    let mut name = program.as_ref().to_string();
    let mut consumed = 0;

    for token in rest {
        let token = token.as_ref();
        match command.subcommand(token) {
            Some(child) => {
                command = child;
                name.push(' ');
                name.push_str(token);
                consumed += 1;
            }
            None => break,
        }
    }

    let args: Vec<String> = rest[consumed..]
        .iter()
        .map(|s| s.as_ref().to_string())
        .collect();

    debug!("Resolved '{}' with {} remaining argument(s)", name, args.len());
    Resolved { command, name, args }
}
