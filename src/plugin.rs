//! # Plugin Registration
//!
//! Installs the module-aware `make:livewire` over Livewire's own command.
//!
//! ```rust,ignore
//! let mut host = Host::new(container);
//! commands::register_livewire(&mut host);
//! plugin::register(&mut host);
//! host.boot();
//! let mut kernel = host.start_console();
//! ```
//!
//! The override is queued from a `booted` hook, so its `starting` hook runs
//! after every provider's own and its `make:livewire` is the last one added
//! to the console. When Livewire is not installed nothing is bound under
//! [`LIVEWIRE_MAKE`] and the plugin stays inactive.

use std::rc::Rc;

use crate::commands::{ModularMakeLivewireCommand, LIVEWIRE_MAKE, MODULAR_MAKE};
use crate::host::{Command, Console, Container, Host};

/// Register the plugin with `host`.
pub fn register(host: &mut Host) {
    host.booted(Box::new(|host: &mut Host| {
        host.starting(Box::new(|console: &mut Console, container: &mut Container| {
            install_override(console, container);
        }));
    }));
}

/// Shadow `make:livewire` with the module-aware command.
///
/// Binds and resolves the modular command into `console`, then extends the
/// default binding so anything resolving it from `container` later also gets
/// the modular command. Running it twice registers everything again.
pub fn install_override(console: &mut Console, container: &mut Container) {
    if !container.bound(LIVEWIRE_MAKE) {
        tracing::debug!("livewire is not installed; make:livewire override skipped");
        return;
    }

    container.bind(
        MODULAR_MAKE,
        Rc::new(|_: &Container| Box::new(ModularMakeLivewireCommand) as Box<dyn Command>),
    );
    console.resolve_commands(container, &[MODULAR_MAKE]);

    container.extend(
        LIVEWIRE_MAKE,
        Rc::new(|_default: Box<dyn Command>, _: &Container| {
            Box::new(ModularMakeLivewireCommand) as Box<dyn Command>
        }),
    );
    tracing::debug!("make:livewire override installed");
}
