//! CLI command definitions and argument parsing.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::OutputFormat;

/// fnol-router - Extract fields from FNOL documents and route each claim.
#[derive(Debug, Parser)]
#[command(name = "fnol-router")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format (overrides the configured format)
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<OutputFormat>,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Route one or more FNOL text files
    Process(ProcessArgs),

    /// Write the bundled sample documents to a directory and route them
    Demo(DemoArgs),
}

/// Arguments for the process command.
#[derive(Debug, Parser)]
pub struct ProcessArgs {
    /// FNOL text files
    #[arg(required = true)]
    pub paths: Vec<PathBuf>,
}

/// Arguments for the demo command.
#[derive(Debug, Parser)]
pub struct DemoArgs {
    /// Directory the sample documents are written to
    #[arg(short, long, default_value = "fnol_samples")]
    pub dir: PathBuf,
}
