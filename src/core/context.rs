//! Bound option and argument values for one invocation

use crate::core::schema::OptionValue;
use crate::error::{CliError, Result};
use std::collections::HashMap;

/// Options and arguments provided by the user.
///
/// Every declared option is present, holding either the parsed value or its
/// default. Arguments keep the order in which they were given.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Context {
    pub options: HashMap<String, OptionValue>,
    pub arguments: Vec<String>,
}

impl Context {
    /// Look up the value of a declared option
    pub fn option(&self, name: &str) -> Result<&OptionValue> {
        self.options
            .get(name)
            .ok_or_else(|| CliError::unknown_option(name))
    }

    /// Value of a string option
    pub fn string(&self, name: &str) -> Result<&str> {
        self.option(name)?.as_str(name)
    }

    /// Value of a bool option
    pub fn bool(&self, name: &str) -> Result<bool> {
        self.option(name)?.as_bool(name)
    }

    /// Value of an integer option
    pub fn int(&self, name: &str) -> Result<i64> {
        self.option(name)?.as_int(name)
    }

    /// Positional argument at `index`, if given
    pub fn argument(&self, index: usize) -> Option<&str> {
        self.arguments.get(index).map(String::as_str)
    }

    pub fn arguments(&self) -> &[String] {
        &self.arguments
    }
}
