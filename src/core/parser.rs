//! Option-value parsing
//!
//! Separates declared flags from positional tokens, coercing every flag to
//! its declared type. The token-level work is delegated to clap: a
//! throw-away `clap::Command` is built from the option schemas for each
//! parse.

use crate::core::context::Context;
use crate::core::schema::{CommandOption, OptionValue, ValueType};
use crate::error::{CliError, Result};
use clap::builder::BoolishValueParser;
use clap::{Arg, ArgAction, ArgMatches, value_parser};
use std::collections::HashMap;
use tracing::{debug, instrument, trace};

/// Id of the catch-all positional; option names never contain whitespace
const POSITIONAL_ID: &str = "positional arguments";

/// Parser for one command's option list
#[derive(Debug)]
pub struct OptionParser<'a> {
    options: Vec<&'a CommandOption>,
    usage: Option<String>,
}

impl<'a> OptionParser<'a> {
    /// Create a parser for the given option schemas
    pub fn new<I>(options: I) -> Self
    where
        I: IntoIterator<Item = &'a CommandOption>,
    {
        Self {
            options: options.into_iter().collect(),
            usage: None,
        }
    }

    /// Usage line quoted in parse error messages
    #[must_use]
    pub fn with_usage(mut self, usage: impl Into<String>) -> Self {
        self.usage = Some(usage.into());
        self
    }

    /// Parse `args` into option values and positional arguments
    #[instrument(skip(self))]
    pub fn parse(&self, args: &[String]) -> Result<Context> {
        let matches = self.build().try_get_matches_from(args)?;

        let mut options = HashMap::with_capacity(self.options.len());
        for option in &self.options {
            let value = read_value(&matches, option)?.unwrap_or_else(|| option.default_value());
            trace!("Option {} = {:?}", option.name, value);
            options.insert(option.name.clone(), value);
        }

        let arguments: Vec<String> = matches
            .try_get_many::<String>(POSITIONAL_ID)
            .map_err(|e| CliError::schema(e.to_string()))?
            .map(|values| values.cloned().collect())
            .unwrap_or_default();

        debug!(
            "Parsed {} option(s) and {} positional argument(s)",
            options.len(),
            arguments.len()
        );

        Ok(Context { options, arguments })
    }

    fn build(&self) -> clap::Command {
        let mut command = clap::Command::new("command")
            .no_binary_name(true)
            .disable_help_flag(true)
            .disable_version_flag(true)
            .disable_help_subcommand(true)
            .args_override_self(true)
            .arg(
                Arg::new(POSITIONAL_ID)
                    .action(ArgAction::Append)
                    .num_args(1..)
                    .value_parser(value_parser!(String)),
            );

        if let Some(usage) = &self.usage {
            command = command.override_usage(usage.clone());
        }

        for option in &self.options {
            command = command.arg(to_arg(option));
        }

        command
    }
}

/// Parse `args` against `options` without a custom usage line
pub fn parse_options<'a, I>(options: I, args: &[String]) -> Result<Context>
where
    I: IntoIterator<Item = &'a CommandOption>,
{
    OptionParser::new(options).parse(args)
}

fn to_arg(option: &CommandOption) -> Arg {
    let arg = Arg::new(option.name.clone()).action(ArgAction::Set);
    let arg = match option.name.chars().next() {
        Some(short) if option.is_short() => arg.short(short),
        _ => arg.long(option.name.clone()),
    };

    match option.value_type {
        ValueType::String => arg
            .num_args(1)
            .allow_hyphen_values(true)
            .value_parser(value_parser!(String)),
        ValueType::Int => arg
            .num_args(1)
            .allow_negative_numbers(true)
            .value_parser(value_parser!(i64)),
        // A bare flag means true; an explicit value must be attached with `=`
        ValueType::Bool => arg
            .num_args(0..=1)
            .require_equals(true)
            .default_missing_value("true")
            .value_parser(BoolishValueParser::new()),
    }
}

fn read_value(matches: &ArgMatches, option: &CommandOption) -> Result<Option<OptionValue>> {
    let name = option.name.as_str();
    let value = match option.value_type {
        ValueType::String => matches
            .try_get_one::<String>(name)
            .map(|v| v.cloned().map(OptionValue::String)),
        ValueType::Bool => matches
            .try_get_one::<bool>(name)
            .map(|v| v.copied().map(OptionValue::Bool)),
        ValueType::Int => matches
            .try_get_one::<i64>(name)
            .map(|v| v.copied().map(OptionValue::Int)),
    };
    value.map_err(|e| CliError::schema(format!("option '{name}': {e}")))
}
