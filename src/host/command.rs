use std::collections::{BTreeMap, BTreeSet};

use super::{Console, Container, Output};
use crate::error::MakeError;

/// Arguments, valued options and flags passed to a command
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandInput {
    arguments: BTreeMap<String, String>,
    options: BTreeMap<String, String>,
    flags: BTreeSet<String>,
}

impl CommandInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_argument(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.arguments.insert(name.into(), value.into());
        self
    }

    pub fn with_option(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.options.insert(name.into(), value.into());
        self
    }

    /// Set `--name` when `value` is `Some`.
    pub fn with_option_opt(self, name: impl Into<String>, value: Option<impl Into<String>>) -> Self {
        match value {
            Some(value) => self.with_option(name, value),
            None => self,
        }
    }

    /// Set the boolean flag `--name` when `on` is true.
    pub fn with_flag(mut self, name: impl Into<String>, on: bool) -> Self {
        if on {
            self.flags.insert(name.into());
        }
        self
    }

    pub fn argument(&self, name: &str) -> Option<&str> {
        self.arguments.get(name).map(String::as_str)
    }

    pub fn option(&self, name: &str) -> Option<&str> {
        self.options.get(name).map(String::as_str)
    }

    pub fn flag(&self, name: &str) -> bool {
        self.flags.contains(name)
    }
}

/// What a running command can reach: the console (to call other commands),
/// the container and the output.
pub struct CommandContext<'a> {
    pub console: &'a Console,
    pub container: &'a mut Container,
    pub output: &'a mut Output,
}

impl CommandContext<'_> {
    /// Run another command with the same container and output.
    ///
    /// # Errors
    ///
    /// Whatever the called command fails with, or
    /// [`MakeError::CommandNotFound`].
    pub fn call(&mut self, name: &str, input: &CommandInput) -> Result<(), MakeError> {
        self.console.call(name, input, self.container, self.output)
    }
}

/// A console command
pub trait Command {
    /// Name the command is registered under (`make:livewire`)
    fn name(&self) -> &'static str;

    /// Additional names resolving to this command
    fn aliases(&self) -> &'static [&'static str] {
        &[]
    }

    /// Valued options and flags this command understands, without `--`
    fn options(&self) -> &'static [&'static str] {
        &[]
    }

    fn accepts_option(&self, option: &str) -> bool {
        self.options().contains(&option)
    }

    /// Execute the command.
    ///
    /// # Errors
    ///
    /// Any [`MakeError`]; the console maps it to an exit status.
    fn handle(&self, input: &CommandInput, ctx: &mut CommandContext<'_>) -> Result<(), MakeError>;
}
