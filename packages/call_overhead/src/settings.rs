//! Settings that control how a benchmark runs.

use std::fmt;
use std::num::NonZero;
use std::str::FromStr;
use std::time::Duration;

/// Number of terms summed by every warm-up pass, unless configured otherwise.
pub const DEFAULT_WARMUP_TERMS: NonZero<u32> = NonZero::new(1000).expect("literal is non-zero");

/// Largest per-repetition workload of a repeated comparison, unless configured otherwise.
pub const DEFAULT_REPETITION_LIMIT: NonZero<u32> =
    NonZero::new(10_000).expect("literal is non-zero");

/// Delay between measured phases, unless configured otherwise.
pub const DEFAULT_COOLDOWN: Duration = Duration::from_secs(5);

/// The clock used to measure each phase.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
#[non_exhaustive]
pub enum ClockKind {
    /// Processor time consumed by the benchmarking thread.
    #[default]
    Thread,

    /// Processor time consumed by the whole process.
    Process,

    /// Monotonic wall clock time.
    Wall,
}

impl ClockKind {
    /// The short name used on the command line and in timing reports.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Thread => "thread",
            Self::Process => "process",
            Self::Wall => "wall",
        }
    }
}

impl fmt::Display for ClockKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ClockKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "thread" => Ok(Self::Thread),
            "process" => Ok(Self::Process),
            "wall" => Ok(Self::Wall),
            _ => Err(format!(
                "Invalid clock: '{s}'. Valid options are: thread, process, wall"
            )),
        }
    }
}

/// What happens to the sum accumulated during a warm-up pass.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
#[non_exhaustive]
pub enum WarmupAccumulation {
    /// The warm-up sum is thrown away and every timed phase starts from zero.
    #[default]
    Discard,

    /// The warm-up sum stays in the accumulator and is included in the timed sum of a single
    /// comparison. This reproduces the numbers of the legacy benchmark, whose estimates are
    /// inflated by the warm-up terms.
    ///
    /// Repeated comparisons reset the accumulator on every repetition, so they are not
    /// affected.
    CarryOver,
}

/// Settings that control how a [`Benchmark`](crate::Benchmark) runs.
///
/// The defaults match the established benchmark: 1000 warm-up terms, a repetition limit of
/// 10000 terms, a 5 second cooldown and thread processor time as the clock.
///
/// # Examples
///
/// ```
/// use std::num::NonZero;
/// use std::time::Duration;
///
/// use call_overhead::{BenchmarkConfig, ClockKind};
///
/// let config = BenchmarkConfig::default()
///     .with_cooldown(Duration::from_millis(100))
///     .with_warmup_terms(NonZero::new(500).unwrap())
///     .with_clock(ClockKind::Process);
///
/// assert_eq!(config.cooldown(), Duration::from_millis(100));
/// ```
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BenchmarkConfig {
    warmup_terms: NonZero<u32>,
    repetition_limit: NonZero<u32>,
    cooldown: Duration,
    clock: ClockKind,
    warmup_accumulation: WarmupAccumulation,
}

impl BenchmarkConfig {
    /// Sets the number of terms summed by each warm-up pass.
    ///
    /// The same value is used as the series length `n` of the warm-up terms.
    #[must_use]
    pub fn with_warmup_terms(mut self, warmup_terms: NonZero<u32>) -> Self {
        self.warmup_terms = warmup_terms;
        self
    }

    /// Sets the largest per-repetition workload of a repeated comparison.
    #[must_use]
    pub fn with_repetition_limit(mut self, repetition_limit: NonZero<u32>) -> Self {
        self.repetition_limit = repetition_limit;
        self
    }

    /// Sets the delay between measured phases. Zero disables the delay.
    #[must_use]
    pub fn with_cooldown(mut self, cooldown: Duration) -> Self {
        self.cooldown = cooldown;
        self
    }

    /// Sets the clock used to measure each phase.
    #[must_use]
    pub fn with_clock(mut self, clock: ClockKind) -> Self {
        self.clock = clock;
        self
    }

    /// Sets what happens to the warm-up sum.
    #[must_use]
    pub fn with_warmup_accumulation(mut self, warmup_accumulation: WarmupAccumulation) -> Self {
        self.warmup_accumulation = warmup_accumulation;
        self
    }

    /// Number of terms summed by each warm-up pass.
    #[must_use]
    pub fn warmup_terms(&self) -> NonZero<u32> {
        self.warmup_terms
    }

    /// Largest per-repetition workload of a repeated comparison.
    #[must_use]
    pub fn repetition_limit(&self) -> NonZero<u32> {
        self.repetition_limit
    }

    /// Delay between measured phases.
    #[must_use]
    pub fn cooldown(&self) -> Duration {
        self.cooldown
    }

    /// Clock used to measure each phase.
    #[must_use]
    pub fn clock(&self) -> ClockKind {
        self.clock
    }

    /// What happens to the warm-up sum.
    #[must_use]
    pub fn warmup_accumulation(&self) -> WarmupAccumulation {
        self.warmup_accumulation
    }
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self {
            warmup_terms: DEFAULT_WARMUP_TERMS,
            repetition_limit: DEFAULT_REPETITION_LIMIT,
            cooldown: DEFAULT_COOLDOWN,
            clock: ClockKind::default(),
            warmup_accumulation: WarmupAccumulation::default(),
        }
    }
}
