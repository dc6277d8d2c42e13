//! Command-line front end for FNOL claim routing
//!
//! Loads layered configuration, builds a [`ClaimIntake`](domain_claims::ClaimIntake)
//! from it, and renders intake reports as text or JSON.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod output;

use domain_claims::ClaimIntake;

pub use cli::{Cli, Command, DemoArgs, ProcessArgs};
pub use config::{CliConfig, OutputFormat};
pub use error::{CliError, Result};
pub use output::Formatter;

/// Executes a parsed command line against loaded configuration
///
/// Returns the rendered output for stdout.
pub fn run(cli: &Cli, config: &CliConfig) -> Result<String> {
    let intake = ClaimIntake::with_policy(config.routing_policy())?;
    let formatter = Formatter::new(cli.format.unwrap_or(config.output_format), config.currency);

    match &cli.command {
        Command::Process(args) => commands::execute_process(&intake, &args.paths, &formatter),
        Command::Demo(args) => commands::execute_demo(&intake, &args.dir, &formatter),
    }
}
