//! # Host Module
//!
//! A small model of the console application the generator plugs into:
//! commands are bound in a [`Container`], resolved into a [`Console`]
//! command table when the console starts, and dispatched with a
//! [`CommandInput`].
//!
//! ## Lifecycle
//!
//! ```text
//! Host::new → providers register hooks → Host::boot (booted hooks)
//!           → Host::start_console (starting hooks, in order) → Kernel::run
//! ```
//!
//! `starting` hooks run in registration order, so a hook registered from a
//! `booted` hook runs after every hook registered during provider setup.
//! That ordering is what lets a plugin shadow a command registered by
//! another provider, whatever order the providers were set up in.

mod command;
mod console;
mod container;
mod output;

pub use command::{Command, CommandContext, CommandInput};
pub use console::Console;
pub use container::{CommandExtender, CommandFactory, Container, Services};
pub use output::Output;

use crate::error::{MakeError, SUCCESS};

/// Runs once the host has finished booting
pub type BootedHook = Box<dyn FnOnce(&mut Host)>;
/// Runs every time a console is started
pub type StartingHook = Box<dyn Fn(&mut Console, &mut Container)>;

/// The application before its console starts
pub struct Host {
    container: Container,
    booted_hooks: Vec<BootedHook>,
    starting_hooks: Vec<StartingHook>,
    booted: bool,
}

impl Host {
    pub fn new(container: Container) -> Self {
        Self {
            container,
            booted_hooks: Vec::new(),
            starting_hooks: Vec::new(),
            booted: false,
        }
    }

    pub fn container(&self) -> &Container {
        &self.container
    }

    pub fn container_mut(&mut self) -> &mut Container {
        &mut self.container
    }

    /// Run `hook` once booting finishes, or right away if already booted.
    pub fn booted(&mut self, hook: BootedHook) {
        if self.booted {
            hook(self);
        } else {
            self.booted_hooks.push(hook);
        }
    }

    /// Run `hook` whenever a console is started.
    pub fn starting(&mut self, hook: StartingHook) {
        self.starting_hooks.push(hook);
    }

    pub fn is_booted(&self) -> bool {
        self.booted
    }

    /// Finish booting and run the queued `booted` hooks.
    pub fn boot(&mut self) {
        if self.booted {
            return;
        }
        self.booted = true;
        for hook in std::mem::take(&mut self.booted_hooks) {
            hook(self);
        }
    }

    /// Build the console, running every `starting` hook in order.
    pub fn start_console(mut self) -> Kernel {
        let mut console = Console::new();
        for hook in &self.starting_hooks {
            hook(&mut console, &mut self.container);
        }
        Kernel {
            console,
            container: self.container,
        }
    }
}

/// A started console ready to dispatch commands
pub struct Kernel {
    pub console: Console,
    pub container: Container,
}

impl Kernel {
    /// Dispatch `name`.
    ///
    /// # Errors
    ///
    /// See [`Console::call`].
    pub fn call(
        &mut self,
        name: &str,
        input: &CommandInput,
        output: &mut Output,
    ) -> Result<(), MakeError> {
        self.console
            .call(name, input, &mut self.container, output)
    }

    /// Dispatch `name`, report any failure on `output` and return the exit status.
    pub fn run(&mut self, name: &str, input: &CommandInput, output: &mut Output) -> u8 {
        match self.call(name, input, output) {
            Ok(()) => SUCCESS,
            Err(err) => {
                tracing::debug!(command = name, error = %err, "command failed");
                output.error(err.to_string());
                err.exit_code()
            }
        }
    }
}
