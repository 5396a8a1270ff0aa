mod app;
mod categories;
mod cleaner;
mod cli;
mod command;
mod config;
mod disk_info;
mod error;
mod output;
mod prompt;
mod run_log;
mod utils;

#[cfg(test)]
mod test_support;

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::Cli;
use command::SystemRunner;
use config::{Layout, RunConfig};
use error::StartupError;
use prompt::TerminalPrompter;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = RunConfig::from(&cli);
    let layout = match Layout::detect().ok_or(StartupError::NoHome) {
        Ok(layout) => layout,
        Err(e) => {
            output::print_error(&e.to_string());
            return ExitCode::from(e.exit_code());
        }
    };

    let runner = SystemRunner::from_env();
    app::run(&config, &layout, &TerminalPrompter, &runner);
    ExitCode::SUCCESS
}

/// Diagnostics go to stderr. `RUST_LOG` wins over `--verbose`.
fn init_tracing(verbose: bool) {
    let default = if verbose { "devsweep=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
