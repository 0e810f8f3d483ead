//! Entry points tying resolution and execution together

use crate::config::Config;
use crate::core::command::Command;
use crate::core::resolver::resolve;
use crate::error::Result;
use std::io::{self, Write};
use tracing::{debug, instrument};

/// Resolve and execute `root` against the process arguments.
///
/// Every resolved command gains a `--help` flag. The returned error is left
/// for the caller to report, together with the choice of exit code.
pub fn run(root: &Command) -> Result<()> {
    let argv: Vec<String> = std::env::args_os()
        .map(|arg| arg.to_string_lossy().into_owned())
        .collect();
    run_from(root, &argv)
}

/// Like [`run`], with an explicit argument vector (program name first)
pub fn run_from<S: AsRef<str>>(root: &Command, argv: &[S]) -> Result<()> {
    run_with_config(root, argv, &Config::default(), &mut io::stdout().lock())
}

/// Resolve `argv`, inject the configured global options and execute.
///
/// Help text is written to `out`. The tree is only read; global options are
/// handed to the executor rather than appended to the resolved node.
#[instrument(skip(root, argv, config, out))]
pub fn run_with_config<S, W>(root: &Command, argv: &[S], config: &Config, out: &mut W) -> Result<()>
where
    S: AsRef<str>,
    W: Write,
{
    config.validate()?;

    let resolved = resolve(root, argv);
    let globals = config.globals_for(&resolved.command.options);
    debug!(
        "Executing '{}' with {} global option(s)",
        resolved.name,
        globals.len()
    );

    resolved
        .command
        .execute_with(&resolved.name, &resolved.args, &globals, out)
}
