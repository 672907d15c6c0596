//! Series terms of the Riemann-sum approximation of π/4.
//!
//! The functions here are deliberately kept out of line: the cost of calling them is what
//! the benchmark measures. Callers that want the inline variant write the expression out in
//! their own loop body instead of calling [`term`].

use std::hint::black_box;

/// Deepest recursion [`recursive_sum`] is permitted to perform on behalf of the benchmark.
///
/// Each frame of [`recursive_sum`] is small but not free. This limit keeps the recursion inside
/// the default 2 MiB stack of a spawned thread, including in unoptimized builds, with room to
/// spare. The main thread has a larger stack. The benchmark refuses to run configurations that
/// would recurse deeper than this.
pub const MAX_RECURSION_DEPTH: u32 = 20_000;

/// Calculates one term of the series, `1 / (1 + ((index - 0.5) / n)^2)`.
///
/// Summing this over `index = 1..=n` and multiplying by `4 / n` approximates π.
///
/// `n` must be non-zero. This is not checked: with `n == 0` the result degenerates according
/// to IEEE 754 rules instead of panicking.
///
/// # Examples
///
/// ```
/// let first = call_overhead::term(1, 10);
/// let last = call_overhead::term(10, 10);
///
/// assert!(first <= 1.0);
/// assert!(last > 0.0);
/// ```
#[inline(never)]
#[must_use]
pub fn term(index: u32, n: u32) -> f64 {
    let idx = f64::from(index);
    let nn = f64::from(n);

    1.0 / (1.0 + (idx - 0.5) / nn * (idx - 0.5) / nn)
}

/// Sums [`term`] for every index from `index` down to 1, one stack frame per index.
///
/// The recursion depth equals `index`, so large values exhaust the stack. See
/// [`MAX_RECURSION_DEPTH`] for the limit the benchmark enforces. An `index` of zero is the
/// empty sum and yields zero.
///
/// # Examples
///
/// ```
/// use call_overhead::{recursive_sum, term};
///
/// let expected = term(3, 10) + term(2, 10) + term(1, 10);
/// assert!((recursive_sum(3, 10) - expected).abs() < 1e-12);
/// ```
#[inline(never)]
#[must_use]
pub fn recursive_sum(index: u32, n: u32) -> f64 {
    match index {
        0 => 0.0,
        1 => term(1, n),
        _ => {
            let approx = term(index, n);

            // The barrier prevents the recursion from being folded into a loop.
            approx
                + black_box(recursive_sum(
                    index.checked_sub(1).expect("guarded by match arm"),
                    n,
                ))
        }
    }
}
