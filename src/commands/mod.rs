//! Command dispatch and handlers.

pub mod clear;
pub mod estimate;
pub mod mark;
pub mod show;

use std::env;
use std::path::PathBuf;

use crate::cli::Command;
use crate::context::ServiceContext;
use crate::view::Row;

/// Env var overriding the store root directory.
pub const STORE_ENV: &str = "SCOPEMARK_STORE";

/// Dispatch a parsed command to its handler.
///
/// # Errors
///
/// Returns an error string if the selected command handler fails.
pub fn dispatch(command: &Command) -> Result<(), String> {
    let ctx = ServiceContext::live();
    dispatch_with_context(command, &ctx)
}

/// Dispatch a command with the given service context.
fn dispatch_with_context(command: &Command, ctx: &ServiceContext) -> Result<(), String> {
    let root = store_root();
    match command {
        Command::Mark { file } => mark::run_with_context(ctx, &root, file),
        Command::Estimate { index, days } => {
            estimate::run_with_context(ctx, &root, *index, days.as_deref())
        }
        Command::Clear => clear::run_with_context(ctx, &root),
        Command::Show => show::run_with_context(ctx, &root),
    }
}

/// Store root for the current workspace: `SCOPEMARK_STORE` when set,
/// otherwise `.scopemark` in the working directory.
fn store_root() -> PathBuf {
    env::var(STORE_ENV).map_or_else(|_| PathBuf::from(".scopemark"), PathBuf::from)
}

/// Prints the projected rows, file rows prefixed with their index handle.
pub(crate) fn print_rows(rows: &[Row]) {
    for row in rows {
        match row {
            Row::File { index, .. } => println!("{index:>3}  {}", row.label()),
            Row::Divider | Row::Totals { .. } => println!("     {}", row.label()),
        }
    }
}
