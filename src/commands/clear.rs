//! `scopemark clear` command.

use std::path::Path;

use crate::commands::print_rows;
use crate::context::ServiceContext;
use crate::scope::ScopeRegistry;
use crate::view;

/// Execute the `clear` command.
///
/// Empties the registry and prints the refreshed (zero) projection.
///
/// # Errors
///
/// Returns an error string if persistence fails.
pub fn run_with_context(ctx: &ServiceContext, root: &Path) -> Result<(), String> {
    let registry = ScopeRegistry::new(ctx, root);
    registry.reset()?;
    print_rows(&view::project(&registry.files()?));
    Ok(())
}
