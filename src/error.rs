//! Error type shared by every stage of the experiment.

use thiserror::Error;

/// Errors produced while computing, benchmarking or rendering.
#[derive(Debug, Error)]
pub enum Error {
    /// Input outside the accepted range while validation is enabled.
    #[error("n = {n} violates constraint: {min} <= n <= {max}")]
    OutOfRange {
        /// The rejected input.
        n: u64,
        /// Smallest accepted input.
        min: u64,
        /// Largest accepted input.
        max: u64,
    },

    /// The benchmark runner was given no values, so no mean exists.
    #[error("cannot average timings over an empty sequence of inputs")]
    EmptyInput,

    /// Drawing or encoding the chart failed.
    #[error("chart rendering failed: {0}")]
    Chart(String),

    /// Writing console output failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_range_message() {
        let err = Error::OutOfRange {
            n: 0,
            min: 1,
            max: 2_147_483_647,
        };
        assert_eq!(
            err.to_string(),
            "n = 0 violates constraint: 1 <= n <= 2147483647"
        );
    }
}
