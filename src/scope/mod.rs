//! Scoped-file records and the registry operations over them.
//!
//! The registry is an append-only ordered sequence of records persisted
//! as one snapshot per mutation. Records are addressed by the `index`
//! handle assigned at mark time, never by live position.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::context::ServiceContext;
use crate::store::ScopeStore;

/// One file marked for inclusion in the audit scope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScopedFile {
    /// Workspace-relative path of the file.
    pub path: String,
    /// Line count measured once at mark time.
    pub loc: u64,
    /// User-supplied estimate in days; `None` until explicitly set.
    #[serde(default)]
    pub estimate_days: Option<f64>,
    /// Handle assigned at mark time. Equal to the record's position at
    /// append and never renumbered afterwards.
    pub index: usize,
}

/// Ordered collection of scoped files backed by the snapshot store.
///
/// Every mutating operation is read-modify-persist over the full
/// snapshot; a failed operation leaves the previously persisted state
/// untouched.
pub struct ScopeRegistry<'a> {
    ctx: &'a ServiceContext,
    store: ScopeStore<'a>,
}

impl<'a> ScopeRegistry<'a> {
    /// Creates a registry persisting under the given store root.
    #[must_use]
    pub fn new(ctx: &'a ServiceContext, root: &Path) -> Self {
        Self { ctx, store: ScopeStore::new(ctx, root) }
    }

    /// Returns the current ordered sequence of scoped files.
    ///
    /// # Errors
    ///
    /// Returns an error if the persisted snapshot cannot be read or parsed.
    pub fn files(&self) -> Result<Vec<ScopedFile>, String> {
        self.store.load()
    }

    /// Replaces the registry with an empty sequence and persists it.
    ///
    /// # Errors
    ///
    /// Returns an error if the snapshot cannot be written.
    pub fn reset(&self) -> Result<(), String> {
        self.store.save(&[])
    }

    /// Counts the file's lines and appends a new record for it.
    ///
    /// Marking the same path twice yields two independent records. The
    /// stored path is relativized against the current workspace when the
    /// file lies under it.
    ///
    /// # Errors
    ///
    /// Returns an error if line counting fails or the snapshot cannot be
    /// read or written.
    pub fn mark(&self, path: &Path) -> Result<(), String> {
        let loc = self
            .ctx
            .counter
            .count_lines(path)
            .map_err(|e| format!("Failed to count lines for {}: {e}", path.display()))?;

        let workspace = std::env::current_dir().unwrap_or_default();
        let stored = workspace_relative(path, &workspace);

        let mut files = self.store.load()?;
        let index = files.len();
        files.push(ScopedFile { path: stored.clone(), loc, estimate_days: None, index });
        self.store.save(&files)?;

        info!("marked {stored} ({loc} lines) at index {index}");
        Ok(())
    }

    /// Sets the estimate on the record whose stored `index` matches.
    ///
    /// A non-finite `days` value is silently ignored, as is an index with
    /// no matching record.
    ///
    /// # Errors
    ///
    /// Returns an error if the snapshot cannot be read or written.
    pub fn estimate(&self, index: usize, days: f64) -> Result<(), String> {
        if !days.is_finite() {
            debug!("ignoring non-finite estimate for index {index}");
            return Ok(());
        }

        let mut files = self.store.load()?;
        // Scan for the stored handle rather than indexing positionally.
        let Some(file) = files.iter_mut().find(|f| f.index == index) else {
            warn!("no scoped file with index {index}");
            return Ok(());
        };
        file.estimate_days = Some(days);
        self.store.save(&files)
    }
}

/// Strips the workspace prefix from a marked path, when present.
pub(crate) fn workspace_relative(path: &Path, workspace: &Path) -> String {
    path.strip_prefix(workspace)
        .unwrap_or(path)
        .display()
        .to_string()
}
