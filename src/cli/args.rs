//! Defines the command-line arguments and subcommands for the tagline CLI.
//!
//! This module uses the `clap` crate with its "derive" feature to create a
//! declarative and type-safe argument parsing structure.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// The main CLI argument structure.
#[derive(Debug, Parser)]
#[command(
    name = "tagline",
    version,
    about = "Re-emits test runner results as the tagged line protocol used by grading displays."
)]
pub struct TaglineArgs {
    #[command(subcommand)]
    pub command: Command,
}

/// An enumeration of all available CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Emit the tagged protocol for a runner JSON report.
    Emit {
        /// The path to the runner's JSON report file.
        #[arg(required = true)]
        report: PathBuf,
        /// Workspace root stripped from console call-site origins.
        #[arg(long, default_value = "")]
        root_dir: String,
    },
    /// Print a colored per-test summary of a runner JSON report.
    Summary {
        /// The path to the runner's JSON report file.
        #[arg(required = true)]
        report: PathBuf,
    },
}
