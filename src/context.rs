//! Service context bundling all port trait objects.

use crate::ports::clock::Clock;
use crate::ports::counter::LineCounter;
use crate::ports::filesystem::FileSystem;

/// Bundles all port trait objects into a single context.
///
/// Each field provides access to one external boundary. Handlers receive
/// the context explicitly; there is no process-wide accessor.
pub struct ServiceContext {
    /// Clock for stamping persisted snapshots.
    pub clock: Box<dyn Clock>,
    /// Filesystem for snapshot I/O.
    pub fs: Box<dyn FileSystem>,
    /// Line counter for measuring marked files.
    pub counter: Box<dyn LineCounter>,
}

impl ServiceContext {
    /// Creates a live context with real adapters for every port.
    #[must_use]
    pub fn live() -> Self {
        use crate::adapters::live::clock::LiveClock;
        use crate::adapters::live::counter::ClocLineCounter;
        use crate::adapters::live::filesystem::LiveFileSystem;

        Self {
            clock: Box::new(LiveClock),
            fs: Box::new(LiveFileSystem),
            counter: Box::new(ClocLineCounter::new()),
        }
    }
}
