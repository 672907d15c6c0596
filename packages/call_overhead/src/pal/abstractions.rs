//! Platform abstraction trait definitions.

use std::fmt::Debug;
use std::time::Duration;

/// Provides clock readings and blocking delays.
///
/// Every clock reading is a [`Duration`] measured from a clock-specific origin. Only the
/// difference between two readings of the same clock is meaningful.
pub(crate) trait Platform: Debug + Send + Sync + 'static {
    /// Gets the processor time consumed by the current thread.
    fn thread_time(&self) -> Duration;

    /// Gets the processor time consumed by the current process.
    fn process_time(&self) -> Duration;

    /// Gets the monotonic wall time elapsed since the platform was created.
    fn wall_time(&self) -> Duration;

    /// Blocks the current thread for the given duration.
    fn sleep(&self, duration: Duration);
}
