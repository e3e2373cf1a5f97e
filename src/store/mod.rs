//! Scope store — persistence layer for the registry snapshot.
//!
//! The whole registry is written as one YAML snapshot under a single
//! fixed key; there is no delta persistence. All I/O goes through the
//! `FileSystem` port so the store works with live and in-memory adapters.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::context::ServiceContext;
use crate::scope::ScopedFile;

/// Fixed key the registry snapshot is persisted under.
pub const SCOPE_STATE_KEY: &str = "scope";

/// A persisted registry snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScopeSnapshot {
    /// When this snapshot was written.
    pub saved_at: DateTime<Utc>,
    /// Ordered sequence of scoped files.
    pub files: Vec<ScopedFile>,
}

/// Persistence layer for the scope registry.
pub struct ScopeStore<'a> {
    ctx: &'a ServiceContext,
    root: PathBuf,
}

impl<'a> ScopeStore<'a> {
    /// Creates a new store rooted at the given path.
    #[must_use]
    pub fn new(ctx: &'a ServiceContext, root: &Path) -> Self {
        Self { ctx, root: root.to_path_buf() }
    }

    /// Loads the persisted registry, or the empty registry when no
    /// snapshot has been written yet.
    ///
    /// # Errors
    ///
    /// Returns an error if an existing snapshot cannot be read or parsed.
    pub fn load(&self) -> Result<Vec<ScopedFile>, String> {
        let path = self.state_path();
        if !self.ctx.fs.exists(&path) {
            return Ok(Vec::new());
        }
        let contents = self
            .ctx
            .fs
            .read_to_string(&path)
            .map_err(|e| format!("Failed to read scope state: {e}"))?;
        let snapshot: ScopeSnapshot = serde_yaml::from_str(&contents)
            .map_err(|e| format!("Failed to parse scope state: {e}"))?;
        Ok(snapshot.files)
    }

    /// Writes the full registry as a fresh snapshot.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or file writing fails.
    pub fn save(&self, files: &[ScopedFile]) -> Result<(), String> {
        let snapshot = ScopeSnapshot { saved_at: self.ctx.clock.now(), files: files.to_vec() };
        let yaml = serde_yaml::to_string(&snapshot)
            .map_err(|e| format!("Failed to serialize scope state: {e}"))?;
        let path = self.state_path();
        self.ctx
            .fs
            .write(&path, &yaml)
            .map_err(|e| format!("Failed to write scope state: {e}"))?;
        debug!("persisted {} scoped file(s) to {}", files.len(), path.display());
        Ok(())
    }

    fn state_path(&self) -> PathBuf {
        self.root.join(format!("{SCOPE_STATE_KEY}.yaml"))
    }
}
