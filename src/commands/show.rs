//! `scopemark show` command.

use std::path::Path;

use crate::commands::print_rows;
use crate::context::ServiceContext;
use crate::scope::ScopeRegistry;
use crate::view;

/// Execute the `show` command.
///
/// Prints the current projection without mutating anything.
///
/// # Errors
///
/// Returns an error string if the persisted snapshot cannot be read.
pub fn run_with_context(ctx: &ServiceContext, root: &Path) -> Result<(), String> {
    let registry = ScopeRegistry::new(ctx, root);
    print_rows(&view::project(&registry.files()?));
    Ok(())
}
