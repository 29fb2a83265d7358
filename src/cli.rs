//! CLI argument definitions.
//!
//! This module contains the top-level CLI structure and shared types.
//! Individual command definitions are in the `commands` module.

use clap::Parser;
use std::path::PathBuf;

use crate::commands::Command;
use crate::output::OutputFormat;

#[derive(Parser, Debug)]
#[command(author, version, about = "Cycloidal drive geometry helper", long_about = None)]
pub struct Args {
    /// Path to a JSON config file with default drive parameters
    ///
    /// If not specified, searches for a config in:
    ///   1. .cycloid/config.json (project-local)
    ///   2. ./cycloid.json (current directory)
    ///   3. ~/.cycloid/config.json (user-global)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short = 'o', long, value_enum, default_value_t = OutputFormat::Table, global = true)]
    pub format: OutputFormat,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}
