//! # CLI Module
//!
//! Command-line front end of the `modular-livewire` binary: parses the
//! arguments with `clap`, boots a host for the application at
//! `--base-path`, and dispatches to the console commands.
//!
//! ## Commands
//!
//! ### `make:livewire` (alias `livewire:make`)
//!
//! ```bash
//! modular-livewire make:livewire users.profile-card --module=crm
//! ```
//!
//! Options:
//! - `--module <NAME>` - Generate inside a module instead of `app/`
//! - `--force` - Overwrite an existing application component
//! - `--test` - Also generate a feature test
//!
//! ### `make:livewire-test`
//!
//! ```bash
//! modular-livewire make:livewire-test users.profile-card --module=crm
//! ```
//!
//! ### `modules`
//!
//! Lists the modules found under the modules directory.
//!
//! ## Usage from Code
//!
//! ```rust,ignore
//! use modular_livewire::cli::{run_cli, Cli};
//! use clap::Parser;
//!
//! let status = run_cli(Cli::parse())?;
//! ```

mod commands;


pub use commands::{bootstrap, run_cli, Cli, Commands};
