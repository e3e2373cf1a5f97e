//! `scopemark estimate` command.

use std::path::Path;

use dialoguer::Input;
use tracing::debug;

use crate::commands::print_rows;
use crate::context::ServiceContext;
use crate::scope::ScopeRegistry;
use crate::view;

/// Execute the `estimate` command.
///
/// When `days` is omitted the user is prompted interactively; a cancelled
/// or empty prompt is a complete no-op. Non-numeric input flows to the
/// registry as NaN, which ignores it, but the projection is still
/// reprinted.
///
/// # Errors
///
/// Returns an error string if persistence fails.
pub fn run_with_context(
    ctx: &ServiceContext,
    root: &Path,
    index: usize,
    days: Option<&str>,
) -> Result<(), String> {
    let input = match days {
        Some(text) => text.to_string(),
        None => match prompt_for_days() {
            Some(text) => text,
            None => return Ok(()),
        },
    };

    let days = input.trim().parse::<f64>().unwrap_or(f64::NAN);

    let registry = ScopeRegistry::new(ctx, root);
    registry.estimate(index, days)?;
    print_rows(&view::project(&registry.files()?));
    Ok(())
}

/// Prompts for an estimate; `None` means the user declined.
fn prompt_for_days() -> Option<String> {
    let result = Input::<String>::new()
        .with_prompt("Enter your estimate in days (floating point works)")
        .allow_empty(true)
        .interact_text();
    match result {
        Ok(text) if !text.trim().is_empty() => Some(text),
        Ok(_) => None,
        Err(err) => {
            debug!("estimate prompt cancelled: {err}");
            None
        }
    }
}
