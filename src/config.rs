//! Run-time configuration for command dispatch
//!
//! Centralizes the global options injected into every resolved command and
//! provides validation.

use crate::core::command::HELP_OPTION;
use crate::core::schema::{CommandOption, validate_options};
use crate::error::Result;

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Options every resolved command accepts without declaring them
    pub global_options: Vec<CommandOption>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            global_options: vec![
                CommandOption::bool(HELP_OPTION, false).with_description("Display help"),
            ],
        }
    }
}

impl Config {
    /// Configuration without any global option, not even `help`
    pub fn empty() -> Self {
        Self {
            global_options: Vec::new(),
        }
    }

    /// Add another global option
    #[must_use]
    pub fn with_global_option(mut self, option: CommandOption) -> Self {
        self.global_options.push(option);
        self
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        validate_options(&self.global_options)
    }

    /// Global options not already declared by a command with `declared` options.
    ///
    /// A command's own declaration of an option name wins over the global one.
    pub fn globals_for(&self, declared: &[CommandOption]) -> Vec<CommandOption> {
        self.global_options
            .iter()
            .filter(|global| !declared.iter().any(|own| own.name == global.name))
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::schema::ValueType;

    #[test]
    fn test_default_has_help_option() {
        let config = Config::default();
        assert_eq!(config.global_options.len(), 1);

        let help = &config.global_options[0];
        assert_eq!(help.name, "help");
        assert_eq!(help.value_type, ValueType::Bool);
        assert_eq!(help.description, "Display help");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_duplicate_global_rejected() {
        let config = Config::default().with_global_option(CommandOption::bool("help", true));
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_globals_for_skips_declared_names() {
        let config = Config::default().with_global_option(CommandOption::bool("debug", false));
        let declared = [CommandOption::bool("help", false).with_description("Own help")];

        let globals = config.globals_for(&declared);
        assert_eq!(globals.len(), 1);
        assert_eq!(globals[0].name, "debug");
    }
}
