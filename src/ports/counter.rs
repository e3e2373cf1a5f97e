//! Line counter port for measuring a file's size in source lines.

use std::path::Path;

/// Counts the source lines of a single regular file.
///
/// Every assumption about the external counting utility's report format
/// stays behind this boundary; callers only ever see an integer count.
pub trait LineCounter: Send + Sync {
    /// Returns the number of source lines in the file at `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the count cannot be produced (utility missing,
    /// path unreadable, or an unrecognized report layout).
    fn count_lines(&self, path: &Path) -> Result<u64, Box<dyn std::error::Error + Send + Sync>>;
}
