use std::num::NonZero;

/// Shape of a repeated comparison: how many times the series is summed and how long it is.
///
/// Requests larger than the repetition limit are split into `n / limit` repetitions of
/// `limit` terms each, which keeps the recursion depth bounded while the total amount of work
/// still scales with the request. Smaller requests are summed `n` times over `n` terms.
///
/// # Examples
///
/// ```
/// use std::num::NonZero;
///
/// use call_overhead::Workload;
///
/// let limit = NonZero::new(10_000).unwrap();
///
/// let large = Workload::repeated(NonZero::new(50_000).unwrap(), limit);
/// assert_eq!(large.repetitions().get(), 5);
/// assert_eq!(large.terms().get(), 10_000);
///
/// let small = Workload::repeated(NonZero::new(500).unwrap(), limit);
/// assert_eq!(small.repetitions().get(), 500);
/// assert_eq!(small.terms().get(), 500);
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Workload {
    repetitions: NonZero<u32>,
    terms: NonZero<u32>,
}

impl Workload {
    /// A workload that sums `terms` terms exactly once.
    #[must_use]
    pub fn single(terms: NonZero<u32>) -> Self {
        Self {
            repetitions: NonZero::<u32>::MIN,
            terms,
        }
    }

    /// The workload of a repeated comparison over `n` requested terms.
    #[must_use]
    pub fn repeated(n: NonZero<u32>, limit: NonZero<u32>) -> Self {
        if n > limit {
            #[expect(
                clippy::integer_division,
                reason = "leftover terms that do not fill a repetition are dropped"
            )]
            let repetitions = NonZero::new(n.get() / limit)
                .expect("n exceeds the limit, so the quotient is at least one");

            Self {
                repetitions,
                terms: limit,
            }
        } else {
            Self {
                repetitions: n,
                terms: n,
            }
        }
    }

    /// How many times the series is summed inside the timed region.
    #[must_use]
    pub fn repetitions(&self) -> NonZero<u32> {
        self.repetitions
    }

    /// The number of terms in each sum, which is also the series length `n`.
    #[must_use]
    pub fn terms(&self) -> NonZero<u32> {
        self.terms
    }
}
