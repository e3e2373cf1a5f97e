//! In-memory fakes shared by unit tests.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use chrono::{DateTime, TimeZone, Utc};

use crate::context::ServiceContext;
use crate::ports::clock::Clock;
use crate::ports::counter::LineCounter;
use crate::ports::filesystem::FileSystem;

/// Clock pinned to a fixed instant.
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// In-memory filesystem keyed by full path.
pub struct MemFs {
    files: Mutex<HashMap<PathBuf, String>>,
}

impl MemFs {
    pub fn new() -> Self {
        Self { files: Mutex::new(HashMap::new()) }
    }
}

impl FileSystem for MemFs {
    fn read_to_string(
        &self,
        path: &Path,
    ) -> Result<String, Box<dyn std::error::Error + Send + Sync>> {
        let files = self.files.lock().unwrap();
        files
            .get(path)
            .cloned()
            .ok_or_else(|| format!("File not found: {}", path.display()).into())
    }

    fn write(
        &self,
        path: &Path,
        contents: &str,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let mut files = self.files.lock().unwrap();
        files.insert(path.to_path_buf(), contents.to_string());
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        let files = self.files.lock().unwrap();
        files.contains_key(path)
    }
}

/// Counter returning canned counts per path; unknown paths error.
pub struct StubLineCounter {
    counts: HashMap<PathBuf, u64>,
}

impl StubLineCounter {
    pub fn with_counts<const N: usize>(counts: [(&str, u64); N]) -> Self {
        Self {
            counts: counts.into_iter().map(|(p, n)| (PathBuf::from(p), n)).collect(),
        }
    }
}

impl LineCounter for StubLineCounter {
    fn count_lines(&self, path: &Path) -> Result<u64, Box<dyn std::error::Error + Send + Sync>> {
        self.counts
            .get(path)
            .copied()
            .ok_or_else(|| format!("no canned count for {}", path.display()).into())
    }
}

/// Builds a context from in-memory fakes with a fixed clock.
pub fn context(fs: MemFs, counter: StubLineCounter) -> ServiceContext {
    ServiceContext {
        clock: Box::new(FixedClock(Utc.with_ymd_and_hms(2024, 6, 15, 10, 30, 0).unwrap())),
        fs: Box::new(fs),
        counter: Box::new(counter),
    }
}
