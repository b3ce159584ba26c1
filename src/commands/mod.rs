//! # Console Commands
//!
//! - [`MakeLivewireCommand`] - the application's own `make:livewire`, writing
//!   into `app/Livewire` and `resources/views/livewire`
//! - [`ModularMakeLivewireCommand`] - the same command with a `--module`
//!   option; installed over the default one by [`crate::plugin`]
//! - [`MakeLivewireTestCommand`] - `make:livewire-test`, the feature test for
//!   a component, called by `make:livewire --test`
//!
//! Commands are bound in the container under the keys below and resolved
//! into the console when it starts.

mod make;
mod make_test;
mod modular;

pub use make::MakeLivewireCommand;
pub use make_test::MakeLivewireTestCommand;
pub use modular::{forward_module, ModularMakeLivewireCommand};

use std::path::Path;
use std::rc::Rc;

use crate::error::MakeError;
use crate::generator::{Generator, StubSet};
use crate::host::{Command, CommandContext, CommandInput, Console, Container, Host};

/// Container key of the application's default `make:livewire`
pub const LIVEWIRE_MAKE: &str = "livewire.make-command";
/// Container key of the module-aware `make:livewire`
pub const MODULAR_MAKE: &str = "modular-livewire.make-command";
/// Container key of `make:livewire-test`
pub const MAKE_TEST: &str = "livewire.make-test-command";

/// Name of the component generator command
pub const MAKE_LIVEWIRE: &str = "make:livewire";
/// Name of the feature test generator command
pub const MAKE_LIVEWIRE_TEST: &str = "make:livewire-test";

/// Whether Livewire is installed in the application at `base_path`
///
/// True when `vendor/livewire/livewire` exists or the application's
/// `composer.json` requires `livewire/livewire`.
pub fn livewire_installed(base_path: &Path) -> bool {
    if base_path.join("vendor/livewire/livewire").is_dir() {
        return true;
    }
    let Ok(raw) = std::fs::read_to_string(base_path.join("composer.json")) else {
        return false;
    };
    serde_json::from_str::<serde_json::Value>(&raw)
        .ok()
        .and_then(|manifest| manifest.get("require").cloned())
        .is_some_and(|require| require.get("livewire/livewire").is_some())
}

/// Register Livewire's own commands with the host.
///
/// Mirrors the package provider: container bindings plus a `starting` hook
/// that resolves them into the console.
pub fn register_livewire(host: &mut Host) {
    let container = host.container_mut();
    container.bind(
        LIVEWIRE_MAKE,
        Rc::new(|_: &Container| Box::new(MakeLivewireCommand) as Box<dyn Command>),
    );
    container.bind(
        MAKE_TEST,
        Rc::new(|_: &Container| Box::new(MakeLivewireTestCommand) as Box<dyn Command>),
    );
    host.starting(Box::new(|console: &mut Console, container: &mut Container| {
        console.resolve_commands(container, &[LIVEWIRE_MAKE, MAKE_TEST]);
    }));
}

/// Generate `name` with `generator` and report the class file.
fn make_component(
    generator: &dyn Generator,
    name: &str,
    stubs: &StubSet,
    ctx: &mut CommandContext<'_>,
) -> Result<(), MakeError> {
    let written = generator.generate(name, stubs)?;
    ctx.output.info(written.message());
    Ok(())
}

/// Component name argument, or [`MakeError::EmptyName`].
fn name_argument(input: &CommandInput) -> Result<&str, MakeError> {
    input.argument("name").ok_or(MakeError::EmptyName)
}
