//! Command tree nodes and their execution
//!
//! A [`Command`] owns its subcommands. Executing a command binds the
//! remaining arguments into a [`Context`], checks the positional count
//! against the declared arguments and either prints help or calls the
//! handler.

use crate::core::context::Context;
use crate::core::help;
use crate::core::parser::OptionParser;
use crate::core::schema::{
    Argument, CommandOption, OptionValue, validate_arguments, validate_options,
};
use crate::error::{CliError, Result};
use std::collections::BTreeMap;
use std::fmt;
use std::io::{self, Write};
use tracing::{debug, instrument};

/// Name of the option that short-circuits execution into help display
pub const HELP_OPTION: &str = "help";

/// Handler invoked with the bound options and arguments
pub type CommandFunction = Box<dyn Fn(&Context) -> Result<()>>;

/// A single command which can be executed by the program.
///
/// A command without a handler is a group node: executing it prints help.
#[derive(Default)]
pub struct Command {
    pub run: Option<CommandFunction>,
    pub subcommands: BTreeMap<String, Command>,
    pub options: Vec<CommandOption>,
    pub arguments: Vec<Argument>,
    pub short_description: String,
    pub description: String,
}

impl fmt::Debug for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Command")
            .field("run", &self.run.as_ref().map(|_| "<handler>"))
            .field("subcommands", &self.subcommands)
            .field("options", &self.options)
            .field("arguments", &self.arguments)
            .field("short_description", &self.short_description)
            .field("description", &self.description)
            .finish()
    }
}

impl Command {
    /// Create an empty group command
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_run<F>(mut self, run: F) -> Self
    where
        F: Fn(&Context) -> Result<()> + 'static,
    {
        self.run = Some(Box::new(run));
        self
    }

    /// Add a child command; a later child with the same name replaces the earlier one
    #[must_use]
    pub fn with_subcommand(mut self, name: impl Into<String>, command: Command) -> Self {
        self.subcommands.insert(name.into(), command);
        self
    }

    #[must_use]
    pub fn with_option(mut self, option: CommandOption) -> Self {
        self.options.push(option);
        self
    }

    #[must_use]
    pub fn with_argument(mut self, argument: Argument) -> Self {
        self.arguments.push(argument);
        self
    }

    #[must_use]
    pub fn with_short_description(mut self, description: impl Into<String>) -> Self {
        self.short_description = description.into();
        self
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Direct child named `name`
    pub fn subcommand(&self, name: &str) -> Option<&Command> {
        self.subcommands.get(name)
    }

    /// Short syntax line for this command under the display name `name`
    pub fn usage(&self, name: &str) -> String {
        help::usage(self, name)
    }

    /// Full help text listing this command's own options
    pub fn help(&self, name: &str) -> String {
        help::render_help(self, name, &[])
    }

    /// Print the help text to standard output
    pub fn print_help(&self, name: &str) -> Result<()> {
        self.write_help(name, &[], &mut io::stdout().lock())
    }

    fn write_help<W: Write>(&self, name: &str, globals: &[CommandOption], out: &mut W) -> Result<()> {
        out.write_all(help::render_help(self, name, globals).as_bytes())
            .and_then(|()| out.flush())
            .map_err(|e| CliError::io("write help", e))
    }

    /// Minimum and maximum number of positional tokens accepted.
    ///
    /// A trailing optional or multiple argument may be left out entirely;
    /// a trailing multiple argument lifts the upper bound.
    pub fn arity(&self) -> (usize, Option<usize>) {
        let declared = self.arguments.len();
        match self.arguments.last() {
            None => (0, Some(0)),
            Some(last) => {
                let min = if last.optional || last.multiple {
                    declared - 1
                } else {
                    declared
                };
                let max = if last.multiple { None } else { Some(declared) };
                (min, max)
            }
        }
    }

    /// Check a positional token count against the declared arguments
    pub fn check_arity(&self, count: usize) -> Result<()> {
        let (min, max) = self.arity();
        if count < min || max.is_some_and(|max| count > max) {
            debug!("Got {} positional argument(s), expected {}..{:?}", count, min, max);
            return Err(CliError::InvalidParameters);
        }
        Ok(())
    }

    /// Run the command, printing help to standard output where needed.
    ///
    /// The handler is never called with fewer arguments than the command
    /// requires, so handlers need not check that themselves.
    pub fn execute(&self, name: &str, args: &[String]) -> Result<()> {
        self.execute_with(name, args, &[], &mut io::stdout().lock())
    }

    /// Run the command with `globals` appended to its option list.
    ///
    /// Help text goes to `out`. The command itself is left untouched.
    #[instrument(skip(self, globals, out))]
    pub fn execute_with<W: Write>(
        &self,
        name: &str,
        args: &[String],
        globals: &[CommandOption],
        out: &mut W,
    ) -> Result<()> {
        validate_options(self.options.iter().chain(globals))?;
        validate_arguments(&self.arguments)?;

        let parser = OptionParser::new(self.options.iter().chain(globals)).with_usage(self.usage(name));
        let context = match parser.parse(args) {
            Ok(context) => context,
            Err(err) => {
                debug!("Option parsing failed: {}", err);
                self.write_help(name, globals, out)?;
                return Err(err);
            }
        };

        // Help wins over arity so `--help` works without the required arguments
        if matches!(context.options.get(HELP_OPTION), Some(OptionValue::Bool(true))) {
            debug!("Help requested");
            return self.write_help(name, globals, out);
        }

        if let Err(err) = self.check_arity(context.arguments.len()) {
            self.write_help(name, globals, out)?;
            return Err(err);
        }

        let Some(run) = &self.run else {
            debug!("Group command without handler, showing help");
            return self.write_help(name, globals, out);
        };

        let result = run(&context);
        if let Err(err) = &result {
            if err.is_invalid_parameters() {
                self.write_help(name, globals, out)?;
            }
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    fn args(tokens: &[&str]) -> Vec<String> {
        tokens.iter().map(|s| s.to_string()).collect()
    }

    fn run(cmd: &Command, tokens: &[&str]) -> (Result<()>, String) {
        let mut out = Vec::new();
        let result = cmd.execute_with("program", &args(tokens), &[], &mut out);
        (result, String::from_utf8(out).unwrap())
    }

    fn help_option() -> CommandOption {
        CommandOption::bool("help", false).with_description("Display help")
    }

    fn two_args(second: Argument) -> Command {
        Command::new()
            .with_run(|_| Ok(()))
            .with_argument(Argument::new("arg1"))
            .with_argument(second)
    }

    #[test]
    fn test_too_few_arguments() {
        let cmd = two_args(Argument::new("arg2"));
        let (result, out) = run(&cmd, &["a"]);
        assert!(result.unwrap_err().is_invalid_parameters());
        assert!(out.contains("ARGUMENTS:"));
    }

    #[test]
    fn test_too_many_arguments() {
        let cmd = two_args(Argument::new("arg2"));
        let (result, _) = run(&cmd, &["a", "b", "c"]);
        assert!(result.unwrap_err().is_invalid_parameters());
    }

    #[test]
    fn test_exact_arguments() {
        let cmd = two_args(Argument::new("arg2"));
        let (result, out) = run(&cmd, &["a", "b"]);
        assert!(result.is_ok());
        assert!(out.is_empty());
    }

    #[test]
    fn test_optional_arguments() {
        let cmd = two_args(Argument::new("arg2").optional());
        assert!(run(&cmd, &["a"]).0.is_ok());
        assert!(run(&cmd, &["a", "b"]).0.is_ok());
        assert!(run(&cmd, &[]).0.unwrap_err().is_invalid_parameters());
        assert!(run(&cmd, &["a", "b", "c"]).0.unwrap_err().is_invalid_parameters());
    }

    #[test]
    fn test_multiple_arguments() {
        let cmd = two_args(Argument::new("arg2").multiple());
        assert!(run(&cmd, &["a"]).0.is_ok());
        assert!(run(&cmd, &["a", "b"]).0.is_ok());
        assert!(run(&cmd, &["a", "b", "c", "d"]).0.is_ok());
        assert!(run(&cmd, &[]).0.unwrap_err().is_invalid_parameters());
    }

    #[test]
    fn test_optional_multiple_accepts_zero() {
        let cmd = Command::new()
            .with_run(|_| Ok(()))
            .with_argument(Argument::new("files").multiple().optional());
        assert_eq!(cmd.arity(), (0, None));
        assert!(run(&cmd, &[]).0.is_ok());
        assert!(run(&cmd, &["x", "y"]).0.is_ok());
    }

    #[test]
    fn test_no_arguments_declared_rejects_positionals() {
        let cmd = Command::new().with_run(|_| Ok(()));
        assert!(run(&cmd, &[]).0.is_ok());
        assert!(run(&cmd, &["stray"]).0.unwrap_err().is_invalid_parameters());
    }

    #[test]
    fn test_help_flag_skips_handler() {
        let called = Rc::new(Cell::new(false));
        let flag = Rc::clone(&called);
        let cmd = Command::new()
            .with_run(move |_| {
                flag.set(true);
                Ok(())
            })
            .with_option(help_option())
            .with_argument(Argument::new("arg"));

        let mut out = Vec::new();
        let result = cmd.execute_with("prog sub", &args(&["--help"]), &[], &mut out);

        assert!(result.is_ok());
        assert!(!called.get());
        assert!(String::from_utf8(out).unwrap().starts_with("\n    prog sub [<options>] <arg>"));
    }

    #[test]
    fn test_help_flag_without_required_arguments() {
        let cmd = two_args(Argument::new("arg2"));
        let mut out = Vec::new();
        let result = cmd.execute_with("program", &args(&["--help"]), &[help_option()], &mut out);

        assert!(result.is_ok());
        assert!(String::from_utf8(out).unwrap().contains("<arg1> <arg2>"));
    }

    #[test]
    fn test_help_flag_with_too_many_arguments() {
        let cmd = two_args(Argument::new("arg2"));
        let mut out = Vec::new();
        let result = cmd.execute_with(
            "program",
            &args(&["a", "b", "c", "--help"]),
            &[help_option()],
            &mut out,
        );
        assert!(result.is_ok());
    }

    #[test]
    fn test_help_renders_own_options_only() {
        let cmd = Command::new()
            .with_short_description("greets")
            .with_option(CommandOption::bool("s", false).with_description("Shout"))
            .with_argument(Argument::new("name"));

        assert_eq!(cmd.help("prog"), help::render_help(&cmd, "prog", &[]));
        assert!(cmd.help("prog").contains("    -s                   Shout\n"));
        assert!(!cmd.help("prog").contains("--help"));
        assert_eq!(cmd.usage("prog"), "prog [<options>] <name>");
    }

    #[test]
    fn test_print_help_to_stdout() {
        let cmd = Command::new().with_short_description("prints");
        assert!(cmd.print_help("prog").is_ok());
    }

    #[test]
    fn test_execute_uses_own_options() {
        let seen = Rc::new(Cell::new(false));
        let sink = Rc::clone(&seen);
        let cmd = Command::new()
            .with_option(CommandOption::bool("v", false))
            .with_argument(Argument::new("file"))
            .with_run(move |ctx| {
                sink.set(ctx.bool("v")?);
                Ok(())
            });

        assert!(cmd.execute("prog", &args(&["-v", "a.txt"])).is_ok());
        assert!(seen.get());
        assert!(matches!(
            cmd.execute("prog", &args(&["--help", "a.txt"])),
            Err(CliError::Parse(_))
        ));
    }

    #[test]
    fn test_global_options_are_not_written_back() {
        let cmd = Command::new().with_run(|_| Ok(()));
        let globals = [help_option()];

        let mut out = Vec::new();
        cmd.execute_with("program", &args(&["--help"]), &globals, &mut out)
            .unwrap();

        assert!(cmd.options.is_empty());
        assert!(String::from_utf8(out).unwrap().contains("--help"));
    }

    #[test]
    fn test_group_without_handler_prints_help() {
        let cmd = Command::new().with_short_description("nothing here");
        let (result, out) = run(&cmd, &[]);
        assert!(result.is_ok());
        assert_eq!(out, "\n    program [<options>] - nothing here\n");
    }

    #[test]
    fn test_handler_receives_context() {
        let seen = Rc::new(Cell::new(0));
        let sink = Rc::clone(&seen);
        let cmd = Command::new()
            .with_option(CommandOption::int("times", 1))
            .with_argument(Argument::new("word"))
            .with_run(move |ctx| {
                assert_eq!(ctx.argument(0), Some("hey"));
                sink.set(ctx.int("times")?);
                Ok(())
            });

        assert!(run(&cmd, &["--times", "4", "hey"]).0.is_ok());
        assert_eq!(seen.get(), 4);
    }

    #[test]
    fn test_handler_invalid_parameters_prints_help() {
        let cmd = Command::new()
            .with_short_description("fails")
            .with_run(|_| Err(CliError::InvalidParameters));
        let (result, out) = run(&cmd, &[]);
        assert!(result.unwrap_err().is_invalid_parameters());
        assert!(out.contains("fails"));
    }

    #[test]
    fn test_handler_error_passes_through_silently() {
        let cmd = Command::new().with_run(|_| Err(anyhow::anyhow!("boom").into()));
        let (result, out) = run(&cmd, &[]);
        assert!(matches!(result, Err(CliError::Handler(_))));
        assert!(out.is_empty());
    }

    #[test]
    fn test_parse_failure_prints_help() {
        let cmd = Command::new().with_run(|_| Ok(()));
        let (result, out) = run(&cmd, &["--unknown"]);
        assert!(matches!(result, Err(CliError::Parse(_))));
        assert!(!out.is_empty());
    }

    #[test]
    fn test_invalid_schema_is_reported() {
        let cmd = Command::new()
            .with_run(|_| Ok(()))
            .with_argument(Argument::new("rest").multiple())
            .with_argument(Argument::new("last"));
        let (result, out) = run(&cmd, &["a", "b"]);
        assert!(matches!(result, Err(CliError::Schema { .. })));
        assert!(out.is_empty());
    }
}
