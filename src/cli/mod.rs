//! Demo command-line interface
//!
//! Builds the command tree of the `cmdtree-demo` binary and its handlers.

pub mod args;
pub mod commands;

pub use args::{build_command_tree, config, debug_requested};
