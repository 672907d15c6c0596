use std::io;

use thiserror::Error;

/// Errors that can occur when running a benchmark.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// The caller asked for a benchmark over zero terms, which has no meaningful estimate.
    #[error("the number of series terms must be greater than zero")]
    EmptyWorkload,

    /// A setting that counts something was given as zero.
    #[error("the {setting} setting must be greater than zero")]
    ZeroSetting {
        /// Name of the offending setting.
        setting: &'static str,
    },

    /// The recursive phase would have recursed deeper than is safe.
    #[error(
        "recursing {requested} levels deep exceeds the supported maximum of {limit}; lower the repetition limit or the warm-up length"
    )]
    RecursionTooDeep {
        /// The recursion depth the configuration would have required.
        requested: u32,

        /// The deepest recursion that is permitted.
        limit: u32,
    },

    /// Writing the benchmark report failed.
    #[error("failed to write benchmark report")]
    Output(#[from] io::Error),
}

/// A specialized `Result` type for benchmark operations, returning the crate's
/// [`Error`] type as the error value.
pub(crate) type Result<T> = std::result::Result<T, Error>;
