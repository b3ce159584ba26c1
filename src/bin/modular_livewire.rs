use std::process::ExitCode;

use clap::Parser;
use modular_livewire::cli::{run_cli, Cli};
use modular_livewire::logging::{init_logging, LogConfig};

fn main() -> ExitCode {
    if let Err(err) = init_logging(&LogConfig::from_env()) {
        eprintln!("failed to initialise logging: {err}");
    }

    let cli = Cli::parse();
    match run_cli(cli) {
        Ok(status) => ExitCode::from(status),
        Err(err) => {
            eprintln!("\n  ERROR  {err:#}\n");
            ExitCode::FAILURE
        }
    }
}
