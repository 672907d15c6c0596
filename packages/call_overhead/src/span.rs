//! Measurement of a single timed region.

use std::time::Duration;

use crate::ClockKind;
use crate::pal::{Platform, PlatformFacade};

/// A timed region that starts when created and ends when [`stop()`](Self::stop) is called.
///
/// The span reads one clock at both ends. Nothing else touches the platform between the two
/// readings, so the measured interval contains only the work the caller does in between.
#[derive(Debug)]
#[must_use = "Measurements are taken between creation and stop()"]
pub(crate) struct Span<'a> {
    platform: &'a PlatformFacade,
    clock: ClockKind,
    start_time: Duration,
}

impl<'a> Span<'a> {
    /// Starts a new span by taking the first reading of `clock`.
    pub(crate) fn start(platform: &'a PlatformFacade, clock: ClockKind) -> Self {
        let start_time = read(platform, clock);

        Self {
            platform,
            clock,
            start_time,
        }
    }

    /// Ends the span and returns the time that passed on its clock.
    ///
    /// Clocks that appear to go backwards produce a zero duration.
    #[must_use]
    pub(crate) fn stop(self) -> Duration {
        let end_time = read(self.platform, self.clock);
        end_time.saturating_sub(self.start_time)
    }
}

fn read(platform: &PlatformFacade, clock: ClockKind) -> Duration {
    match clock {
        ClockKind::Thread => platform.thread_time(),
        ClockKind::Process => platform.process_time(),
        ClockKind::Wall => platform.wall_time(),
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use crate::pal::{FakeEvent, FakePlatform};

    #[test]
    fn measures_difference_between_readings() {
        let fake = FakePlatform::with_tick(Duration::from_millis(7));
        let platform = PlatformFacade::fake(fake);

        let span = Span::start(&platform, ClockKind::Thread);

        assert_eq!(span.stop(), Duration::from_millis(7));
    }

    #[test]
    fn reads_only_the_selected_clock() {
        let fake = FakePlatform::new();
        let platform = PlatformFacade::fake(fake.clone());

        _ = Span::start(&platform, ClockKind::Process).stop();
        _ = Span::start(&platform, ClockKind::Wall).stop();

        assert_eq!(
            fake.events(),
            vec![
                FakeEvent::ProcessTimeRead,
                FakeEvent::ProcessTimeRead,
                FakeEvent::WallTimeRead,
                FakeEvent::WallTimeRead,
            ]
        );
    }

    #[test]
    fn clock_going_backwards_yields_zero() {
        let fake = FakePlatform::new();
        fake.set_thread_time(Duration::from_secs(10));
        let platform = PlatformFacade::fake(fake.clone());

        let span = Span::start(&platform, ClockKind::Thread);
        fake.set_thread_time(Duration::from_secs(3));

        assert_eq!(span.stop(), Duration::ZERO);
    }
}
