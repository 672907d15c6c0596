//! Results of benchmark runs and their textual form.

use std::f64::consts::PI;
use std::fmt;
use std::io::{self, Write};
use std::num::NonZero;
use std::time::Duration;

use crate::{ClockKind, Workload};

/// One measured way of summing the series.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[non_exhaustive]
pub enum Phase {
    /// The term expression is written out in the loop body.
    NoFunctionCalls,

    /// Every term is calculated by calling [`term()`](crate::term).
    FunctionCalls,

    /// The whole sum is calculated by [`recursive_sum()`](crate::recursive_sum).
    RecursiveFunctionCalls,
}

impl Phase {
    /// The label that identifies the phase in timing reports.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::NoFunctionCalls => "No Function Calls",
            Self::FunctionCalls => "Function Calls",
            Self::RecursiveFunctionCalls => "Recursive Function Calls",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// An approximation of π and how far off it is.
///
/// Displays as `pi = 3.141593, % error = 0.000008`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Estimate {
    value: f64,
    percent_error: f64,
}

impl Estimate {
    /// Turns the sum of the first `n` series terms into an estimate of π.
    #[must_use]
    pub fn from_sum(sum: f64, n: NonZero<u32>) -> Self {
        let value = sum * 4.0 / f64::from(n.get());
        let percent_error = (100.0 * (value - PI) / PI).abs();

        Self {
            value,
            percent_error,
        }
    }

    /// The estimated value of π.
    #[must_use]
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Absolute deviation from π, in percent.
    #[must_use]
    pub fn percent_error(&self) -> f64 {
        self.percent_error
    }
}

impl fmt::Display for Estimate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "pi = {:.6}, % error = {:.6}",
            self.value, self.percent_error
        )
    }
}

/// Timing line for one phase, e.g. `Function Calls: 0.000123456 s (thread)`.
#[derive(Clone, Copy, Debug)]
struct TimingLine {
    phase: Phase,
    elapsed: Duration,
    clock: ClockKind,
}

impl fmt::Display for TimingLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {}.{:09} s ({})",
            self.phase,
            self.elapsed.as_secs(),
            self.elapsed.subsec_nanos(),
            self.clock
        )
    }
}

/// The measurement and numerical result of one phase.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PhaseOutcome {
    phase: Phase,
    elapsed: Duration,
    estimate: Estimate,
}

impl PhaseOutcome {
    pub(crate) fn new(phase: Phase, elapsed: Duration, estimate: Estimate) -> Self {
        Self {
            phase,
            elapsed,
            estimate,
        }
    }

    /// Which phase this is.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Time spent in the timed region of the phase, including all repetitions.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// The estimate of π produced by the final repetition.
    #[must_use]
    pub fn estimate(&self) -> Estimate {
        self.estimate
    }

    /// Writes the timing line followed by the result line.
    pub(crate) fn write_to(&self, out: &mut impl Write, clock: ClockKind) -> io::Result<()> {
        let timing = TimingLine {
            phase: self.phase,
            elapsed: self.elapsed,
            clock,
        };

        writeln!(out, "{timing}")?;
        writeln!(out, "{}", self.estimate)
    }
}

/// Everything one comparison run measured, in the order the phases ran.
#[derive(Clone, Debug, PartialEq)]
pub struct Comparison {
    workload: Workload,
    clock: ClockKind,
    outcomes: Vec<PhaseOutcome>,
}

impl Comparison {
    pub(crate) fn new(workload: Workload, clock: ClockKind) -> Self {
        Self {
            workload,
            clock,
            outcomes: Vec::new(),
        }
    }

    pub(crate) fn push(&mut self, outcome: PhaseOutcome) {
        self.outcomes.push(outcome);
    }

    /// The workload every phase of the comparison summed.
    #[must_use]
    pub fn workload(&self) -> Workload {
        self.workload
    }

    /// The clock the phases were measured with.
    #[must_use]
    pub fn clock(&self) -> ClockKind {
        self.clock
    }

    /// The outcome of every phase, in the order the phases ran.
    #[must_use]
    pub fn outcomes(&self) -> &[PhaseOutcome] {
        &self.outcomes
    }

    /// The outcome of a specific phase, if the comparison included it.
    #[must_use]
    pub fn outcome(&self, phase: Phase) -> Option<&PhaseOutcome> {
        self.outcomes.iter().find(|outcome| outcome.phase == phase)
    }

    /// How many times longer `phase` took than the inline phase.
    ///
    /// Returns `None` if either phase is missing or the inline phase measured no time at all.
    #[must_use]
    pub fn call_overhead(&self, phase: Phase) -> Option<f64> {
        let baseline = self.outcome(Phase::NoFunctionCalls)?.elapsed;
        let measured = self.outcome(phase)?.elapsed;

        if baseline.is_zero() {
            return None;
        }

        Some(measured.as_secs_f64() / baseline.as_secs_f64())
    }
}
