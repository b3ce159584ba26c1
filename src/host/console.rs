use std::collections::BTreeMap;
use std::rc::Rc;

use super::{Command, CommandContext, CommandInput, Container, Output};
use crate::error::MakeError;

/// Command table: names and aliases mapped to command instances
///
/// Adding a command whose name is already taken shadows the earlier one;
/// the last registration wins.
#[derive(Default)]
pub struct Console {
    commands: BTreeMap<String, Rc<dyn Command>>,
}

impl Console {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `command` under its name and aliases.
    pub fn add(&mut self, command: Box<dyn Command>) {
        let command: Rc<dyn Command> = Rc::from(command);
        for alias in command.aliases() {
            self.commands.insert(alias.to_string(), Rc::clone(&command));
        }
        tracing::debug!(command = command.name(), "registered console command");
        self.commands.insert(command.name().to_string(), command);
    }

    /// Build each bound key from `container` and register it.
    ///
    /// Keys nothing is bound to are skipped.
    pub fn resolve_commands(&mut self, container: &Container, keys: &[&str]) {
        for key in keys {
            match container.make(key) {
                Some(command) => self.add(command),
                None => tracing::warn!(key, "no command bound; skipping"),
            }
        }
    }

    pub fn find(&self, name: &str) -> Option<&dyn Command> {
        self.commands.get(name).map(|c| &**c)
    }

    pub fn has(&self, name: &str) -> bool {
        self.commands.contains_key(name)
    }

    /// Registered names and aliases, sorted
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.commands.keys().map(String::as_str)
    }

    /// Run the command registered under `name`.
    ///
    /// # Errors
    ///
    /// [`MakeError::CommandNotFound`] for an unknown name, otherwise whatever
    /// the command fails with.
    pub fn call(
        &self,
        name: &str,
        input: &CommandInput,
        container: &mut Container,
        output: &mut Output,
    ) -> Result<(), MakeError> {
        let command = self
            .find(name)
            .ok_or_else(|| MakeError::CommandNotFound {
                name: name.to_string(),
            })?;
        tracing::debug!(command = name, ?input, "dispatching");
        let mut ctx = CommandContext {
            console: self,
            container,
            output,
        };
        command.handle(input, &mut ctx)
    }
}
