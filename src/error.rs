//! Error types for command dispatch
//!
//! Provides structured error handling with context and proper error chains.

use crate::core::schema::ValueType;
use thiserror::Error;

/// Main error type for resolving and executing commands
#[derive(Error, Debug)]
pub enum CliError {
    /// The flag-token parser rejected the input (unknown flag, bad value)
    #[error("{0}")]
    Parse(#[from] clap::Error),

    /// Wrong number of positional arguments, or a handler asking for help.
    ///
    /// Handlers return this variant to have the help text of their command
    /// printed before the error reaches the caller.
    #[error("invalid parameters")]
    InvalidParameters,

    /// An option value was read through an accessor of another type
    #[error("Option type error: '{name}' holds a {actual} value, not {expected}")]
    OptionType {
        name: String,
        expected: ValueType,
        actual: ValueType,
    },

    /// An accessor was asked for an option the command never declared
    #[error("Unknown option: '{name}'")]
    UnknownOption { name: String },

    /// A declared option or argument list breaks its contract
    #[error("Schema error: {message}")]
    Schema { message: String },

    /// Writing help text failed
    #[error("I/O error: {operation} failed")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    /// Any other error returned by a command handler
    #[error(transparent)]
    Handler(#[from] anyhow::Error),
}

impl CliError {
    /// Create a new option type error
    pub fn option_type(name: impl Into<String>, expected: ValueType, actual: ValueType) -> Self {
        Self::OptionType {
            name: name.into(),
            expected,
            actual,
        }
    }

    /// Create a new unknown option error
    pub fn unknown_option(name: impl Into<String>) -> Self {
        Self::UnknownOption { name: name.into() }
    }

    /// Create a new schema error
    pub fn schema(message: impl Into<String>) -> Self {
        Self::Schema {
            message: message.into(),
        }
    }

    /// Create a new I/O error
    pub fn io(operation: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            operation: operation.into(),
            source,
        }
    }

    /// Whether this is the sentinel that requests help display
    pub fn is_invalid_parameters(&self) -> bool {
        matches!(self, Self::InvalidParameters)
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, CliError>;
