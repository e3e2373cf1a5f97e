//! `scopemark mark` command.

use std::path::Path;

use crate::commands::print_rows;
use crate::context::ServiceContext;
use crate::scope::ScopeRegistry;
use crate::view;

/// Execute the `mark` command.
///
/// Counts the file's lines, appends it to the scope, and prints the
/// refreshed projection.
///
/// # Errors
///
/// Returns an error string if line counting or persistence fails.
pub fn run_with_context(ctx: &ServiceContext, root: &Path, file: &Path) -> Result<(), String> {
    let registry = ScopeRegistry::new(ctx, root);
    registry.mark(file)?;
    print_rows(&view::project(&registry.files()?));
    Ok(())
}
