use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};

use crate::commands::{livewire_installed, register_livewire, MAKE_LIVEWIRE, MAKE_LIVEWIRE_TEST};
use crate::config::ProjectConfig;
use crate::error::SUCCESS;
use crate::generator::StubSet;
use crate::host::{CommandInput, Container, Host, Kernel, Output, Services};
use crate::modules::ModuleRegistry;
use crate::plugin;

/// Command-line interface for modular-livewire
///
/// Scaffolds Livewire components into the modules of a modular Laravel
/// application.
#[derive(Parser)]
#[command(name = "modular-livewire", version)]
#[command(about = "Module-aware make:livewire", long_about = None)]
pub struct Cli {
    /// Root of the Laravel application
    #[arg(long, global = true, default_value = ".", env = "MLW_BASE_PATH")]
    pub base_path: PathBuf,

    /// The subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Create a new Livewire component
    #[command(name = "make:livewire", visible_alias = "livewire:make")]
    MakeLivewire {
        /// Dotted component name (e.g. users.profile-card)
        name: String,

        /// Module to generate the component in
        #[arg(long)]
        module: Option<String>,

        /// Overwrite an existing application component
        #[arg(short, long, default_value_t = false)]
        force: bool,

        /// Also create a feature test for the component
        #[arg(long, default_value_t = false)]
        test: bool,
    },
    /// Create a feature test for a Livewire component
    #[command(name = "make:livewire-test")]
    MakeLivewireTest {
        /// Dotted component name
        name: String,

        /// Module the component lives in
        #[arg(long)]
        module: Option<String>,
    },
    /// List the application's modules
    Modules,
}

/// Boot a host for the application at `base_path` and start its console.
///
/// Livewire's commands are registered only when Livewire is installed; the
/// plugin is always registered and stays inactive without them.
///
/// # Errors
///
/// Returns an error if the configuration, a module manifest or a custom stub
/// cannot be read.
pub fn bootstrap(base_path: &Path) -> anyhow::Result<Kernel> {
    let config = ProjectConfig::load(base_path)?;
    let modules = ModuleRegistry::discover(base_path, &config.modules)?;
    let stubs = StubSet::load(base_path).context("Failed to load stubs")?;
    tracing::debug!(
        base_path = %base_path.display(),
        modules = modules.len(),
        "bootstrapping console"
    );

    let mut host = Host::new(Container::new(Services {
        base_path: base_path.to_path_buf(),
        config,
        modules,
        stubs,
    }));
    if livewire_installed(base_path) {
        register_livewire(&mut host);
    } else {
        tracing::debug!("livewire/livewire not found; its commands are unavailable");
    }
    plugin::register(&mut host);
    host.boot();
    Ok(host.start_console())
}

/// Run the parsed command line and return the process exit status.
///
/// # Errors
///
/// Returns an error if the application cannot be bootstrapped. Command
/// failures are reported on the console and reflected in the status.
pub fn run_cli(cli: Cli) -> anyhow::Result<u8> {
    let mut kernel = bootstrap(&cli.base_path)?;
    let mut output = Output::stdio();

    let status = match cli.command {
        Commands::MakeLivewire {
            name,
            module,
            force,
            test,
        } => {
            let input = CommandInput::new()
                .with_argument("name", name)
                .with_option_opt("module", module)
                .with_flag("force", force)
                .with_flag("test", test);
            kernel.run(MAKE_LIVEWIRE, &input, &mut output)
        }
        Commands::MakeLivewireTest { name, module } => {
            let input = CommandInput::new()
                .with_argument("name", name)
                .with_option_opt("module", module);
            kernel.run(MAKE_LIVEWIRE_TEST, &input, &mut output)
        }
        Commands::Modules => {
            let modules = &kernel.container.services().modules;
            if modules.is_empty() {
                output.info("No modules found.");
            }
            for module in modules.modules() {
                output.line(format!(
                    "{}  {}  {}",
                    module.name(),
                    module.namespace(),
                    module.root_path().display()
                ));
            }
            SUCCESS
        }
    };
    Ok(status)
}
