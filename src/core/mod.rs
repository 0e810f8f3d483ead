//! Core functionality for command dispatch
//!
//! Contains the schema types, the option parser, the command-tree resolver,
//! the executor and the help formatter.

pub mod command;
pub mod context;
pub mod help;
pub mod parser;
pub mod resolver;
pub mod runner;
pub mod schema;

pub use command::{Command, CommandFunction, HELP_OPTION};
pub use context::Context;
pub use parser::{OptionParser, parse_options};
pub use resolver::{Resolved, resolve};
pub use runner::{run, run_from, run_with_config};
pub use schema::{Argument, CommandOption, OptionValue, ValueType};
