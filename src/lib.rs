//! # cmdtree
//!
//! Declare a tree of named subcommands, each with typed options and
//! positional arguments, and dispatch an argument vector to the right
//! handler.
//!
//! ## Features
//!
//! - Positional subcommand resolution (`prog remote add ...`)
//! - String, bool and integer options with defaults
//! - Arity checking for required, optional and variadic arguments
//! - A `--help` flag on every command and generated help text
//!
//! ## Example
//!
//! ```no_run
//! use cmdtree::{Argument, Command, CommandOption};
//!
//! let root = Command::new()
//!     .with_short_description("example program")
//!     .with_subcommand(
//!         "greet",
//!         Command::new()
//!             .with_short_description("Greet someone")
//!             .with_option(CommandOption::int("times", 1).with_description("Repetitions"))
//!             .with_argument(Argument::new("name"))
//!             .with_run(|ctx| {
//!                 for _ in 0..ctx.int("times")? {
//!                     println!("Hello, {}!", ctx.arguments[0]);
//!                 }
//!                 Ok(())
//!             }),
//!     );
//!
//! if let Err(err) = cmdtree::run(&root) {
//!     eprintln!("{err}");
//! }
//! ```

pub mod cli;
pub mod config;
pub mod core;
pub mod error;

pub use crate::config::Config;
pub use crate::core::{
    Argument, Command, CommandFunction, CommandOption, Context, OptionValue, Resolved, ValueType,
    parse_options, resolve, run, run_from, run_with_config,
};
pub use crate::error::{CliError, Result};

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize logging with appropriate verbosity.
///
/// Log lines go to stderr so help text on stdout is left untouched.
pub fn setup_logging(debug: bool) -> anyhow::Result<()> {
    let filter = if debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_level(true)
                .compact(),
        )
        .with(filter)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    Ok(())
}
