#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
#![cfg_attr(coverage_nightly, coverage(off))]

//! Binary entry point for the call overhead benchmark.
//!
//! This module is excluded from mutation testing because testing process entry/exit behavior
//! is impractical - it requires spawning subprocesses and checking exit codes.

use std::io;
use std::num::NonZero;
use std::process::ExitCode;
use std::str::FromStr;
use std::time::Duration;

use argh::FromArgs;
use call_overhead::{
    Benchmark, BenchmarkConfig, ClockKind, DEFAULT_REPETITION_LIMIT, DEFAULT_WARMUP_TERMS,
    Error, WarmupAccumulation,
};
use tracing_subscriber::EnvFilter;

/// Measures the processor time overhead of function calls by approximating pi.
#[derive(FromArgs)]
struct Args {
    /// number of series terms to sum
    #[argh(positional)]
    terms: u32,

    /// which comparison to run (single, repeated, all)
    #[argh(option, default = "Mode::Repeated")]
    mode: Mode,

    /// clock that measures each phase (thread, process, wall)
    #[argh(option, default = "ClockKind::Thread")]
    clock: ClockKind,

    /// number of terms summed by each warm-up pass
    #[argh(option, default = "DEFAULT_WARMUP_TERMS.get()")]
    warmup_terms: u32,

    /// largest number of terms summed per repetition before the work is split up
    #[argh(option, default = "DEFAULT_REPETITION_LIMIT.get()")]
    repetition_limit: u32,

    /// pause between measured phases, in milliseconds
    #[argh(option, default = "5000")]
    cooldown_ms: u64,

    /// keep the warm-up sum in the timed sum, reproducing legacy results
    #[argh(switch)]
    carry_warmup: bool,
}

/// Which comparison the binary runs.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Mode {
    Single,
    Repeated,
    All,
}

impl FromStr for Mode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "single" => Ok(Self::Single),
            "repeated" => Ok(Self::Repeated),
            "all" => Ok(Self::All),
            _ => Err(format!(
                "Invalid mode: '{s}'. Valid options are: single, repeated, all"
            )),
        }
    }
}

impl Args {
    fn to_config(&self) -> Result<BenchmarkConfig, Error> {
        let warmup_terms = NonZero::new(self.warmup_terms).ok_or(Error::ZeroSetting {
            setting: "warm-up terms",
        })?;
        let repetition_limit = NonZero::new(self.repetition_limit).ok_or(Error::ZeroSetting {
            setting: "repetition limit",
        })?;

        let warmup_accumulation = if self.carry_warmup {
            WarmupAccumulation::CarryOver
        } else {
            WarmupAccumulation::Discard
        };

        Ok(BenchmarkConfig::default()
            .with_warmup_terms(warmup_terms)
            .with_repetition_limit(repetition_limit)
            .with_cooldown(Duration::from_millis(self.cooldown_ms))
            .with_clock(self.clock)
            .with_warmup_accumulation(warmup_accumulation))
    }
}

fn run(args: &Args) -> Result<(), Error> {
    let benchmark = Benchmark::new(args.to_config()?);
    let mut stdout = io::stdout().lock();

    match args.mode {
        Mode::Single => {
            benchmark.run_single_compare(args.terms, &mut stdout)?;
        }
        Mode::Repeated => {
            benchmark.run_repeated_compare(args.terms, &mut stdout)?;
        }
        Mode::All => {
            benchmark.run_all(args.terms, &mut stdout)?;
        }
    }

    Ok(())
}

// Binary entry point - mutations would require subprocess testing which is impractical.
#[cfg_attr(test, mutants::skip)]
fn main() -> ExitCode {
    // Diagnostics go to stderr so that stdout carries only the report.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args: Args = argh::from_env();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
