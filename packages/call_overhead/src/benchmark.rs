//! The benchmark driver that times inline, called and recursive summation of the series.

use std::hint::black_box;
use std::io::Write;
use std::num::NonZero;
use std::time::Duration;

use tracing::{debug, info, instrument};

use crate::error::Result;
use crate::pal::{Platform, PlatformFacade};
use crate::span::Span;
use crate::{
    BenchmarkConfig, Comparison, Error, Estimate, MAX_RECURSION_DEPTH, Phase, PhaseOutcome,
    WarmupAccumulation, Workload, recursive_sum, term,
};

/// Runs the function call overhead comparisons and reports on them.
///
/// Every comparison sums the same series several ways and measures each way with the
/// configured clock. The report for each phase is written to the caller-provided output
/// as soon as the phase completes: a timing line followed by the estimate of π.
///
/// Phases are separated by a cooldown delay. The delay never falls inside a timed region.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
///
/// use call_overhead::{Benchmark, BenchmarkConfig, Phase};
///
/// let benchmark = Benchmark::new(BenchmarkConfig::default().with_cooldown(Duration::ZERO));
///
/// let mut output = Vec::new();
/// let comparison = benchmark.run_single_compare(1000, &mut output).unwrap();
///
/// let calls = comparison.outcome(Phase::FunctionCalls).unwrap();
/// assert!(calls.estimate().percent_error() < 1.0);
/// ```
#[derive(Debug)]
pub struct Benchmark {
    config: BenchmarkConfig,
    platform: PlatformFacade,
}

impl Benchmark {
    /// Creates a benchmark that measures with the real operating system clocks.
    #[must_use]
    pub fn new(config: BenchmarkConfig) -> Self {
        Self {
            config,
            platform: PlatformFacade::real(),
        }
    }

    #[cfg(test)]
    pub(crate) fn with_platform(config: BenchmarkConfig, platform: PlatformFacade) -> Self {
        Self { config, platform }
    }

    /// The configuration the benchmark runs with.
    #[must_use]
    pub fn config(&self) -> &BenchmarkConfig {
        &self.config
    }

    /// Times one inline pass over `n` terms against one pass that calls [`term()`] per term.
    ///
    /// Writes the "No Function Calls" report followed by the "Function Calls" report.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyWorkload`] if `n` is zero and [`Error::Output`] if writing the
    /// report fails.
    #[instrument(skip(self, out))]
    pub fn run_single_compare(&self, n: u32, out: &mut impl Write) -> Result<Comparison> {
        let n = NonZero::new(n).ok_or(Error::EmptyWorkload)?;
        let workload = Workload::single(n);
        let mut comparison = Comparison::new(workload, self.config.clock());

        let terms = n.get();
        let nn = f64::from(terms);

        let mut pi = self.initial_accumulator(self.warm_up_inline());

        let span = Span::start(&self.platform, self.config.clock());

        for index in (1..=terms).rev() {
            let idx = f64::from(index);
            pi += 1.0 / (1.0 + (idx - 0.5) / nn * (idx - 0.5) / nn);
        }

        let elapsed = span.stop();
        self.finish_phase(Phase::NoFunctionCalls, elapsed, pi, n, &mut comparison, out)?;

        self.cool_down();

        let mut pi = self.initial_accumulator(self.warm_up_calls());

        let span = Span::start(&self.platform, self.config.clock());

        for index in (1..=terms).rev() {
            pi += term(index, terms);
        }

        let elapsed = span.stop();
        self.finish_phase(Phase::FunctionCalls, elapsed, pi, n, &mut comparison, out)?;

        log_overheads(&comparison);

        Ok(comparison)
    }

    /// Times repeated inline, called and recursive summation of the series.
    ///
    /// Requests larger than the configured repetition limit are split into repetitions of at
    /// most that many terms (see [`Workload::repeated()`]). Every phase reports the estimate
    /// produced by its final repetition.
    ///
    /// Writes the "No Function Calls", "Function Calls" and "Recursive Function Calls" reports,
    /// in that order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyWorkload`] if `n` is zero, [`Error::RecursionTooDeep`] if the
    /// recursive phase or its warm-up would exceed [`MAX_RECURSION_DEPTH`] and
    /// [`Error::Output`] if writing the report fails. Validation happens before any work is
    /// done, so nothing is written when the request is invalid.
    #[instrument(skip(self, out))]
    pub fn run_repeated_compare(&self, n: u32, out: &mut impl Write) -> Result<Comparison> {
        let n = NonZero::new(n).ok_or(Error::EmptyWorkload)?;
        let workload = Workload::repeated(n, self.config.repetition_limit());
        self.check_recursion_depth(workload)?;

        debug!(
            repetitions = workload.repetitions().get(),
            terms = workload.terms().get(),
            "workload determined"
        );

        let mut comparison = Comparison::new(workload, self.config.clock());
        let repetitions = workload.repetitions().get();

        black_box(self.warm_up_inline());

        let span = Span::start(&self.platform, self.config.clock());

        let mut pi = 0.0;
        for _ in 0..repetitions {
            // Hides the loop-invariant bound so each repetition really sums the series.
            let terms = black_box(workload.terms().get());
            let nn = f64::from(terms);

            let mut sum = 0.0;
            for index in (1..=terms).rev() {
                let idx = f64::from(index);
                sum += 1.0 / (1.0 + (idx - 0.5) / nn * (idx - 0.5) / nn);
            }

            pi = black_box(sum);
        }

        let elapsed = span.stop();
        self.finish_phase(
            Phase::NoFunctionCalls,
            elapsed,
            pi,
            workload.terms(),
            &mut comparison,
            out,
        )?;

        self.cool_down();

        black_box(self.warm_up_calls());

        let span = Span::start(&self.platform, self.config.clock());

        let mut pi = 0.0;
        for _ in 0..repetitions {
            let terms = black_box(workload.terms().get());

            let mut sum = 0.0;
            for index in (1..=terms).rev() {
                sum += term(index, terms);
            }

            pi = black_box(sum);
        }

        let elapsed = span.stop();
        self.finish_phase(
            Phase::FunctionCalls,
            elapsed,
            pi,
            workload.terms(),
            &mut comparison,
            out,
        )?;

        self.cool_down();

        let warmup_depth = self.config.warmup_terms().get();
        black_box(recursive_sum(
            black_box(warmup_depth),
            workload.terms().get(),
        ));
        debug!(depth = warmup_depth, "recursive warm-up complete");

        let span = Span::start(&self.platform, self.config.clock());

        let mut pi = 0.0;
        for _ in 0..repetitions {
            // The depth stays the same for every repetition.
            let terms = black_box(workload.terms().get());
            pi = black_box(recursive_sum(terms, terms));
        }

        let elapsed = span.stop();
        self.finish_phase(
            Phase::RecursiveFunctionCalls,
            elapsed,
            pi,
            workload.terms(),
            &mut comparison,
            out,
        )?;

        log_overheads(&comparison);

        Ok(comparison)
    }

    /// Runs [`run_single_compare()`](Self::run_single_compare) and then, after a cooldown,
    /// [`run_repeated_compare()`](Self::run_repeated_compare) with the same `n`.
    ///
    /// # Errors
    ///
    /// Returns any error either comparison returns. The repeated comparison is validated
    /// before the single comparison starts, so an invalid request writes nothing.
    pub fn run_all(&self, n: u32, out: &mut impl Write) -> Result<(Comparison, Comparison)> {
        let requested = NonZero::new(n).ok_or(Error::EmptyWorkload)?;
        self.check_recursion_depth(Workload::repeated(
            requested,
            self.config.repetition_limit(),
        ))?;

        let single = self.run_single_compare(n, out)?;

        self.cool_down();

        let repeated = self.run_repeated_compare(n, out)?;

        Ok((single, repeated))
    }

    /// Sums the warm-up series with the term expression written out inline.
    fn warm_up_inline(&self) -> f64 {
        let terms = self.config.warmup_terms().get();
        let nn = f64::from(terms);

        let mut sum = 0.0;
        for index in 1..=terms {
            let idx = f64::from(index);
            sum += 1.0 / (1.0 + (idx - 0.5) / nn * (idx - 0.5) / nn);
        }

        debug!(terms, sum, "inline warm-up complete");
        sum
    }

    /// Sums the warm-up series by calling [`term()`] for every term.
    fn warm_up_calls(&self) -> f64 {
        let terms = self.config.warmup_terms().get();

        let mut sum = 0.0;
        for index in 1..=terms {
            sum += term(index, terms);
        }

        debug!(terms, sum, "function call warm-up complete");
        sum
    }

    /// The value a timed accumulator starts from, given the sum of the preceding warm-up.
    fn initial_accumulator(&self, warmup_sum: f64) -> f64 {
        match self.config.warmup_accumulation() {
            WarmupAccumulation::Discard => {
                black_box(warmup_sum);
                0.0
            }
            WarmupAccumulation::CarryOver => warmup_sum,
        }
    }

    fn check_recursion_depth(&self, workload: Workload) -> Result<()> {
        let requested = workload
            .terms()
            .get()
            .max(self.config.warmup_terms().get());

        if requested > MAX_RECURSION_DEPTH {
            return Err(Error::RecursionTooDeep {
                requested,
                limit: MAX_RECURSION_DEPTH,
            });
        }

        Ok(())
    }

    fn finish_phase(
        &self,
        phase: Phase,
        elapsed: Duration,
        sum: f64,
        n: NonZero<u32>,
        comparison: &mut Comparison,
        out: &mut impl Write,
    ) -> Result<()> {
        let outcome = PhaseOutcome::new(phase, elapsed, Estimate::from_sum(sum, n));

        outcome.write_to(out, self.config.clock())?;
        // Make the report visible before the cooldown blocks the thread.
        out.flush()?;

        info!(
            %phase,
            ?elapsed,
            estimate = outcome.estimate().value(),
            percent_error = outcome.estimate().percent_error(),
            "phase complete"
        );

        comparison.push(outcome);
        Ok(())
    }

    fn cool_down(&self) {
        let cooldown = self.config.cooldown();

        debug!(?cooldown, "cooling down between phases");
        self.platform.sleep(cooldown);
    }
}

fn log_overheads(comparison: &Comparison) {
    for outcome in comparison.outcomes() {
        if outcome.phase() == Phase::NoFunctionCalls {
            continue;
        }

        if let Some(ratio) = comparison.call_overhead(outcome.phase()) {
            info!(phase = %outcome.phase(), ratio, "time relative to inline summation");
        }
    }
}
