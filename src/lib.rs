//! # modular-livewire
//!
//! **modular-livewire** makes `make:livewire` module-aware for modular Laravel
//! applications: `make:livewire users.profile-card --module=crm` scaffolds the
//! component class and Blade view inside the `crm` module instead of the
//! application's `app/` and `resources/views` directories.
//!
//! ## Architecture
//!
//! - **[`modules`]** - Module descriptors, discovery and `--module` resolution
//! - **[`generator`]** - Name/path computation, stubs and file scaffolding
//! - **[`host`]** - Container, console command table and boot lifecycle
//! - **[`commands`]** - `make:livewire`, its module-aware override and
//!   `make:livewire-test`
//! - **[`plugin`]** - Installs the override over Livewire's own command
//! - **[`cli`]** - The `modular-livewire` binary's argument parsing
//! - **[`config`]** / **[`logging`]** - Project configuration and tracing setup
//!
//! ### Generation Flow
//!
//! ```mermaid
//! sequenceDiagram
//!     participant User
//!     participant CLI as CLI<br/>(modular-livewire)
//!     participant Console as host::Console
//!     participant Cmd as ModularMakeLivewireCommand
//!     participant Modules as modules::resolve_module
//!     participant Gen as generator::select
//!     participant FS as File System
//!
//!     User->>CLI: make:livewire users.profile-card --module=crm
//!     CLI->>Console: run("make:livewire", input)
//!     Console->>Cmd: handle(input)
//!     Cmd->>Modules: resolve_module(registry, "crm")
//!     Modules-->>Cmd: Some(&ModuleDescriptor)
//!     Cmd->>Gen: select(Some(module), &default)
//!     Gen-->>Cmd: ModuleGenerator
//!     Cmd->>FS: src/Livewire/Users/ProfileCard.php
//!     Cmd->>FS: resources/views/livewire/users/profile-card.blade.php
//!     Cmd-->>User: INFO  Livewire component [...] created successfully.
//! ```
//!
//! Without `--module` the same command hands the request to the default
//! generator unchanged.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod generator;
pub mod host;
pub mod logging;
pub mod modules;
pub mod plugin;

pub use error::MakeError;
pub use host::{Host, Kernel};
pub use modules::{ModuleDescriptor, ModuleLookup, ModuleRegistry};
