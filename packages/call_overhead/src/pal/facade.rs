//! Platform facade for switching between real and fake implementations.

use std::time::Duration;

use crate::pal::abstractions::Platform;
#[cfg(test)]
use crate::pal::fake::FakePlatform;
use crate::pal::real::RealPlatform;

/// Facade that allows switching between real and fake platform implementations.
#[derive(Debug, Clone)]
pub(crate) enum PlatformFacade {
    /// Real platform implementation using system calls.
    Real(RealPlatform),

    /// Fake platform implementation for testing.
    #[cfg(test)]
    Fake(FakePlatform),
}

impl PlatformFacade {
    /// Creates a new platform facade using the real implementation.
    pub(crate) fn real() -> Self {
        Self::Real(RealPlatform::new())
    }

    /// Creates a new platform facade using the fake implementation.
    #[cfg(test)]
    pub(crate) fn fake(fake_platform: FakePlatform) -> Self {
        Self::Fake(fake_platform)
    }
}

impl Platform for PlatformFacade {
    fn thread_time(&self) -> Duration {
        match self {
            Self::Real(platform) => platform.thread_time(),
            #[cfg(test)]
            Self::Fake(platform) => platform.thread_time(),
        }
    }

    fn process_time(&self) -> Duration {
        match self {
            Self::Real(platform) => platform.process_time(),
            #[cfg(test)]
            Self::Fake(platform) => platform.process_time(),
        }
    }

    fn wall_time(&self) -> Duration {
        match self {
            Self::Real(platform) => platform.wall_time(),
            #[cfg(test)]
            Self::Fake(platform) => platform.wall_time(),
        }
    }

    fn sleep(&self, duration: Duration) {
        match self {
            Self::Real(platform) => platform.sleep(duration),
            #[cfg(test)]
            Self::Fake(platform) => platform.sleep(duration),
        }
    }
}
