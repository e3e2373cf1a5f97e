//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Top-level CLI parser for `scopemark`.
#[derive(Debug, Parser)]
#[command(name = "scopemark", version, about = "Mark files for a code-audit scope and estimate them")]
pub struct Cli {
    /// The command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported top-level subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Bring a file into the audit scope and count its lines.
    Mark {
        /// Path to the file to mark.
        file: PathBuf,
    },
    /// Attach a day estimate to a scoped file.
    Estimate {
        /// Stable index of the record, as printed by `show`.
        index: usize,
        /// Estimate in days (floating point works); prompted for when omitted.
        #[arg(allow_hyphen_values = true)]
        days: Option<String>,
    },
    /// Remove every file from the scope.
    Clear,
    /// Print the current scope with line and estimate totals.
    Show,
}
