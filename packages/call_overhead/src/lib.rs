#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Measures how much processor time function calls add on top of the same computation written
//! out inline.
//!
//! The payload is a Riemann-sum approximation of π: summing `1 / (1 + ((i - 0.5) / n)^2)` for
//! `i = 1..=n` and multiplying by `4 / n`. The same series is summed with the term expression
//! written out in the loop body, by calling [`term()`] for every term and by the recursive
//! [`recursive_sum()`], and each way is timed separately.
//!
//! The core functionality includes:
//! - [`term()`] and [`recursive_sum()`] - the out-of-line kernels being measured
//! - [`Benchmark`] - runs the comparisons and writes the report
//! - [`BenchmarkConfig`] - warm-up length, repetition limit, cooldown and clock selection
//! - [`Comparison`] - the measurements of one run, for programmatic inspection
//!
//! This package is a development tool for studying call overhead, not a general purpose
//! benchmark harness.
//!
//! # Example
//!
//! ```
//! use std::time::Duration;
//!
//! use call_overhead::{Benchmark, BenchmarkConfig};
//!
//! let benchmark = Benchmark::new(BenchmarkConfig::default().with_cooldown(Duration::ZERO));
//!
//! // Prints a timing line and an estimate line for each phase.
//! let mut stdout = std::io::stdout().lock();
//! let comparison = benchmark.run_repeated_compare(500, &mut stdout).unwrap();
//!
//! for outcome in comparison.outcomes() {
//!     println!("{}: {:?}", outcome.phase(), outcome.elapsed());
//! }
//! ```
//!
//! # Report format
//!
//! Each phase writes two lines:
//!
//! ```text
//! Function Calls: 0.000031250 s (thread)
//! pi = 3.141593, % error = 0.000008
//! ```
//!
//! Diagnostics such as warm-up and cooldown progress are emitted as `tracing` events and are
//! never written to the report output.
//!
//! # Threading
//!
//! Everything runs on the calling thread. The cooldown between phases blocks that thread.
//! Processor time of the calling thread is the default clock, so running other work on the
//! same thread during a benchmark distorts the results.

mod benchmark;
mod error;
mod kernel;
mod pal;
mod report;
mod settings;
mod span;
mod workload;

pub use benchmark::*;
pub use error::*;
pub use kernel::*;
pub use report::*;
pub use settings::*;
pub use workload::*;
