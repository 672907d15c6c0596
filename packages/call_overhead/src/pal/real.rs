//! Real platform implementation using system calls.

use std::thread;
use std::time::{Duration, Instant};

use cpu_time::{ProcessTime, ThreadTime};

use crate::pal::abstractions::Platform;

/// Real implementation of the platform abstraction.
///
/// Processor time comes from the `cpu_time` package, wall time from [`Instant`].
#[derive(Debug, Clone)]
pub(crate) struct RealPlatform {
    origin: Instant,
}

impl RealPlatform {
    pub(crate) fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Platform for RealPlatform {
    fn thread_time(&self) -> Duration {
        ThreadTime::now().as_duration()
    }

    fn process_time(&self) -> Duration {
        ProcessTime::now().as_duration()
    }

    fn wall_time(&self) -> Duration {
        self.origin.elapsed()
    }

    #[cfg_attr(test, mutants::skip)] // Removing the sleep only makes things faster, not wrong.
    fn sleep(&self, duration: Duration) {
        if !duration.is_zero() {
            thread::sleep(duration);
        }
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use std::hint::black_box;

    use super::*;

    #[test]
    #[cfg_attr(miri, ignore)] // Miri cannot use the real operating system APIs.
    fn wall_time_is_monotonic() {
        let platform = RealPlatform::new();

        let first = platform.wall_time();
        let second = platform.wall_time();

        assert!(second >= first);
    }

    #[test]
    #[cfg_attr(miri, ignore)] // Miri cannot use the real operating system APIs.
    fn thread_time_does_not_go_backwards() {
        let platform = RealPlatform::new();

        let before = platform.thread_time();
        let mut sum = 0_u64;
        for i in 0..100_000_u64 {
            sum = black_box(sum.wrapping_add(i));
        }
        black_box(sum);
        let after = platform.thread_time();

        assert!(after >= before);
    }

    #[test]
    #[cfg_attr(miri, ignore)] // Miri cannot use the real operating system APIs.
    fn sleep_advances_wall_time() {
        let platform = RealPlatform::new();

        let before = platform.wall_time();
        platform.sleep(Duration::from_millis(5));
        let after = platform.wall_time();

        assert!(after.saturating_sub(before) >= Duration::from_millis(5));
    }
}
