//! Fake platform implementation for testing.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::pal::abstractions::Platform;

/// Something that happened on a [`FakePlatform`], in the order it happened.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum FakeEvent {
    ThreadTimeRead,
    ProcessTimeRead,
    WallTimeRead,
    Slept(Duration),
}

/// Internal state for the fake platform that can be shared between clones.
#[derive(Debug)]
struct FakePlatformState {
    thread_time: Duration,
    process_time: Duration,
    wall_time: Duration,

    /// Added to a clock every time that clock is read.
    tick: Duration,

    events: Vec<FakeEvent>,
}

/// Fake implementation of the platform abstraction for testing.
///
/// Clocks only move when a test tells them to, either by setting them directly or by
/// configuring a tick that is added on every read. Sleeping returns immediately and advances
/// the wall clock instead. Everything is recorded in an event log, so tests can check where
/// sleeps happen relative to clock reads.
///
/// Multiple clones of the same `FakePlatform` share the same underlying state.
#[derive(Clone, Debug)]
pub(crate) struct FakePlatform {
    state: Arc<Mutex<FakePlatformState>>,
}

impl FakePlatform {
    /// Creates a new fake platform with zero time values and no tick.
    pub(crate) fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(FakePlatformState {
                thread_time: Duration::ZERO,
                process_time: Duration::ZERO,
                wall_time: Duration::ZERO,
                tick: Duration::ZERO,
                events: Vec::new(),
            })),
        }
    }

    /// Creates a new fake platform whose clocks advance by `tick` on every read.
    pub(crate) fn with_tick(tick: Duration) -> Self {
        let platform = Self::new();
        platform.set_tick(tick);
        platform
    }

    pub(crate) fn set_tick(&self, tick: Duration) {
        self.with_state(|state| state.tick = tick);
    }

    pub(crate) fn set_thread_time(&self, time: Duration) {
        self.with_state(|state| state.thread_time = time);
    }

    pub(crate) fn set_process_time(&self, time: Duration) {
        self.with_state(|state| state.process_time = time);
    }

    /// Returns a copy of every event recorded so far.
    pub(crate) fn events(&self) -> Vec<FakeEvent> {
        self.with_state(|state| state.events.clone())
    }

    /// Returns the durations of all sleeps recorded so far, in order.
    pub(crate) fn sleeps(&self) -> Vec<Duration> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                FakeEvent::Slept(duration) => Some(duration),
                _ => None,
            })
            .collect()
    }

    fn with_state<R>(&self, f: impl FnOnce(&mut FakePlatformState) -> R) -> R {
        let mut state = self
            .state
            .lock()
            .expect("FakePlatform state lock should not be poisoned");
        f(&mut state)
    }
}

/// Reads a clock, then advances it by one tick.
fn read_and_tick(clock: &mut Duration, tick: Duration) -> Duration {
    let value = *clock;
    *clock = clock.saturating_add(tick);
    value
}

impl Platform for FakePlatform {
    fn thread_time(&self) -> Duration {
        self.with_state(|state| {
            state.events.push(FakeEvent::ThreadTimeRead);
            read_and_tick(&mut state.thread_time, state.tick)
        })
    }

    fn process_time(&self) -> Duration {
        self.with_state(|state| {
            state.events.push(FakeEvent::ProcessTimeRead);
            read_and_tick(&mut state.process_time, state.tick)
        })
    }

    fn wall_time(&self) -> Duration {
        self.with_state(|state| {
            state.events.push(FakeEvent::WallTimeRead);
            read_and_tick(&mut state.wall_time, state.tick)
        })
    }

    fn sleep(&self, duration: Duration) {
        self.with_state(|state| {
            state.events.push(FakeEvent::Slept(duration));
            state.wall_time = state.wall_time.saturating_add(duration);
        });
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn initializes_with_zero_time() {
        let platform = FakePlatform::new();

        assert_eq!(platform.thread_time(), Duration::ZERO);
        assert_eq!(platform.process_time(), Duration::ZERO);
        assert_eq!(platform.wall_time(), Duration::ZERO);
    }

    #[test]
    fn sets_thread_and_process_time() {
        let platform = FakePlatform::new();
        platform.set_thread_time(Duration::from_millis(150));
        platform.set_process_time(Duration::from_millis(250));

        assert_eq!(platform.thread_time(), Duration::from_millis(150));
        assert_eq!(platform.process_time(), Duration::from_millis(250));
    }

    #[test]
    fn tick_advances_each_clock_independently() {
        let platform = FakePlatform::with_tick(Duration::from_millis(10));

        assert_eq!(platform.thread_time(), Duration::ZERO);
        assert_eq!(platform.thread_time(), Duration::from_millis(10));
        assert_eq!(platform.process_time(), Duration::ZERO);
        assert_eq!(platform.thread_time(), Duration::from_millis(20));
    }

    #[test]
    fn sleep_advances_wall_time_only() {
        let platform = FakePlatform::new();
        platform.sleep(Duration::from_secs(5));

        assert_eq!(platform.wall_time(), Duration::from_secs(5));
        assert_eq!(platform.thread_time(), Duration::ZERO);
        assert_eq!(platform.sleeps(), vec![Duration::from_secs(5)]);
    }

    #[test]
    fn records_events_in_order() {
        let platform = FakePlatform::new();

        _ = platform.thread_time();
        platform.sleep(Duration::from_secs(1));
        _ = platform.wall_time();

        assert_eq!(
            platform.events(),
            vec![
                FakeEvent::ThreadTimeRead,
                FakeEvent::Slept(Duration::from_secs(1)),
                FakeEvent::WallTimeRead,
            ]
        );
    }

    #[test]
    fn shared_state_between_clones() {
        let platform1 = FakePlatform::new();
        let platform2 = platform1.clone();

        platform1.set_thread_time(Duration::from_millis(100));
        assert_eq!(platform2.thread_time(), Duration::from_millis(100));

        platform2.sleep(Duration::from_millis(1));
        assert_eq!(platform1.sleeps(), vec![Duration::from_millis(1)]);
    }
}
