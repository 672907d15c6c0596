//! Platform abstraction layer for reading clocks and sleeping.
//!
//! The benchmark talks to the platform through the [`Platform`] trait so that tests can swap
//! the real clocks (thread and process processor time via the `cpu_time` package, wall time
//! via [`std::time::Instant`]) for a fake that is fully under test control.

mod abstractions;
mod facade;
#[cfg(test)]
mod fake;
mod real;

pub(crate) use abstractions::Platform;
pub(crate) use facade::PlatformFacade;
#[cfg(test)]
pub(crate) use fake::{FakeEvent, FakePlatform};
