//! Declarative option and argument descriptors
//!
//! These types carry no behavior beyond validation and display formatting.

use crate::error::{CliError, Result};
use std::collections::HashSet;
use std::fmt;

/// Primitive type of an option value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueType {
    String,
    Bool,
    Int,
}

impl ValueType {
    /// Value used when an option declares no default
    pub fn zero(self) -> OptionValue {
        match self {
            Self::String => OptionValue::String(String::new()),
            Self::Bool => OptionValue::Bool(false),
            Self::Int => OptionValue::Int(0),
        }
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::String => "string",
            Self::Bool => "bool",
            Self::Int => "int",
        };
        f.write_str(name)
    }
}

/// A parsed, type-tagged option value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptionValue {
    String(String),
    Bool(bool),
    Int(i64),
}

impl OptionValue {
    /// Declared type of the value
    pub fn value_type(&self) -> ValueType {
        match self {
            Self::String(_) => ValueType::String,
            Self::Bool(_) => ValueType::Bool,
            Self::Int(_) => ValueType::Int,
        }
    }

    /// Borrow the value as a string.
    ///
    /// `name` only labels the error when the value is not a string.
    pub fn as_str(&self, name: &str) -> Result<&str> {
        match self {
            Self::String(value) => Ok(value),
            other => Err(CliError::option_type(name, ValueType::String, other.value_type())),
        }
    }

    /// Read the value as a bool
    pub fn as_bool(&self, name: &str) -> Result<bool> {
        match self {
            Self::Bool(value) => Ok(*value),
            other => Err(CliError::option_type(name, ValueType::Bool, other.value_type())),
        }
    }

    /// Read the value as an integer
    pub fn as_int(&self, name: &str) -> Result<i64> {
        match self {
            Self::Int(value) => Ok(*value),
            other => Err(CliError::option_type(name, ValueType::Int, other.value_type())),
        }
    }
}

impl From<&str> for OptionValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for OptionValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<bool> for OptionValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for OptionValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

/// A named, typed flag.
///
/// Single-character names are written with one dash (`-o`), longer names
/// with two (`--option`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOption {
    /// Flag identifier without dashes
    pub name: String,
    /// Declared primitive type
    pub value_type: ValueType,
    /// Default value; the type's zero value when absent
    pub default: Option<OptionValue>,
    /// One-line description shown in help
    pub description: String,
}

impl CommandOption {
    /// Create an option without default or description
    pub fn new(name: impl Into<String>, value_type: ValueType) -> Self {
        Self {
            name: name.into(),
            value_type,
            default: None,
            description: String::new(),
        }
    }

    /// Create a string option
    pub fn string(name: impl Into<String>, default: impl Into<String>) -> Self {
        Self::new(name, ValueType::String).with_default(OptionValue::String(default.into()))
    }

    /// Create a bool option
    pub fn bool(name: impl Into<String>, default: bool) -> Self {
        Self::new(name, ValueType::Bool).with_default(OptionValue::Bool(default))
    }

    /// Create an integer option
    pub fn int(name: impl Into<String>, default: i64) -> Self {
        Self::new(name, ValueType::Int).with_default(OptionValue::Int(default))
    }

    #[must_use]
    pub fn with_default(mut self, default: impl Into<OptionValue>) -> Self {
        self.default = Some(default.into());
        self
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Whether the flag is written with a single dash
    pub fn is_short(&self) -> bool {
        self.name.chars().count() == 1
    }

    /// The declared default, or the zero value of the declared type
    pub fn default_value(&self) -> OptionValue {
        self.default
            .clone()
            .unwrap_or_else(|| self.value_type.zero())
    }

    /// Check the name and the type of the default value
    pub fn validate(&self) -> Result<()> {
        if self.name.is_empty() {
            return Err(CliError::schema("option name must not be empty"));
        }

        if self.name.starts_with('-') || self.name.contains(char::is_whitespace) {
            return Err(CliError::schema(format!(
                "option name '{}' must not start with a dash or contain whitespace",
                self.name
            )));
        }

        if let Some(default) = &self.default {
            if default.value_type() != self.value_type {
                return Err(CliError::schema(format!(
                    "option '{}' is declared as {} but its default is a {} value",
                    self.name,
                    self.value_type,
                    default.value_type()
                )));
            }
        }

        Ok(())
    }
}

impl fmt::Display for CommandOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let prefix = if self.is_short() { "-" } else { "--" };
        f.pad(&format!("{prefix}{}", self.name))
    }
}

/// A positional parameter
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Argument {
    pub name: String,
    /// Consumes all remaining positional tokens
    pub multiple: bool,
    /// May be absent from the input
    pub optional: bool,
    pub description: String,
}

impl Argument {
    /// Create a required, single-valued argument
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn multiple(mut self) -> Self {
        self.multiple = true;
        self
    }

    #[must_use]
    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

impl fmt::Display for Argument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ellipsis = if self.multiple { "..." } else { "" };
        let rendered = if self.optional {
            format!("[<{}>{ellipsis}]", self.name)
        } else {
            format!("<{}>{ellipsis}", self.name)
        };
        f.pad(&rendered)
    }
}

/// Check a list of options: every option valid, names unique
pub fn validate_options<'a, I>(options: I) -> Result<()>
where
    I: IntoIterator<Item = &'a CommandOption>,
{
    let mut seen = HashSet::new();
    for option in options {
        option.validate()?;
        if !seen.insert(option.name.as_str()) {
            return Err(CliError::schema(format!(
                "option '{}' is declared more than once",
                option.name
            )));
        }
    }
    Ok(())
}

/// Check a list of arguments: only the last one may be `multiple`
pub fn validate_arguments(arguments: &[Argument]) -> Result<()> {
    let last = arguments.len().saturating_sub(1);
    for (index, argument) in arguments.iter().enumerate() {
        if argument.name.is_empty() {
            return Err(CliError::schema("argument name must not be empty"));
        }
        if argument.multiple && index != last {
            return Err(CliError::schema(format!(
                "argument '{}' accepts multiple values but is not the last argument",
                argument.name
            )));
        }
    }
    Ok(())
}
