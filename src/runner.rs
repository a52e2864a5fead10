//! Mean execution time of both methods over a sequence of inputs.
//!
//! Each method is timed once per value. All arithmetic samples are collected
//! first, then all textual samples, and each series is reduced to its mean.

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::digits::{DigitSquareSum, Method};
use crate::error::{Error, Result};
use crate::measurement::{black_box, Timer};

/// Mean per-call time of each method, in nanoseconds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AverageTimes {
    /// Mean time of [`Method::Arithmetic`].
    pub arithmetic_ns: f64,
    /// Mean time of [`Method::Textual`].
    pub textual_ns: f64,
    /// Number of samples behind each mean.
    pub samples: usize,
}

impl AverageTimes {
    /// Mean time of the given method.
    pub fn for_method(&self, method: Method) -> f64 {
        match method {
            Method::Arithmetic => self.arithmetic_ns,
            Method::Textual => self.textual_ns,
        }
    }
}

/// Times both digit-square-sum methods over a batch of inputs.
#[derive(Debug, Clone, Copy, Default)]
pub struct BenchmarkRunner {
    sums: DigitSquareSum,
    timer: Timer,
    warmup: usize,
}

impl BenchmarkRunner {
    /// Create a runner with validation enabled and no warmup.
    pub fn new() -> Self {
        Self::default()
    }

    /// Use the given calculator (and its validation setting).
    pub fn with_sums(mut self, sums: DigitSquareSum) -> Self {
        self.sums = sums;
        self
    }

    /// Call each method `n` times on the first value before timing anything.
    pub fn warmup(mut self, n: usize) -> Self {
        self.warmup = n;
        self
    }

    /// The calculator being timed.
    pub fn sums(&self) -> &DigitSquareSum {
        &self.sums
    }

    /// Time both methods on every value and return the mean of each series.
    ///
    /// # Errors
    ///
    /// - [`Error::EmptyInput`] if `values` yields nothing.
    /// - [`Error::OutOfRange`] as soon as any value fails validation.
    pub fn compute_average_times<I>(&self, values: I) -> Result<AverageTimes>
    where
        I: IntoIterator<Item = u64>,
    {
        let values: Vec<u64> = values.into_iter().collect();
        let first = *values.first().ok_or(Error::EmptyInput)?;

        for _ in 0..self.warmup {
            for method in Method::ALL {
                black_box(self.sums.compute(method, first)?);
            }
        }

        let arithmetic = self.collect(Method::Arithmetic, &values)?;
        let textual = self.collect(Method::Textual, &values)?;

        Ok(AverageTimes {
            arithmetic_ns: mean(&arithmetic),
            textual_ns: mean(&textual),
            samples: values.len(),
        })
    }

    /// One timing sample per value for a single method.
    fn collect(&self, method: Method, values: &[u64]) -> Result<Vec<u64>> {
        let mut samples = Vec::with_capacity(values.len());
        for &n in values {
            let timed = self.timer.measure(|| self.sums.compute(method, n));
            timed.value?;
            samples.push(timed.elapsed_ns);
        }
        trace!(?method, samples = samples.len(), "collected timing samples");
        Ok(samples)
    }
}

/// Arithmetic mean of nanosecond samples. The caller guarantees a non-empty slice.
fn mean(samples: &[u64]) -> f64 {
    let total: f64 = samples.iter().map(|&ns| ns as f64).sum();
    total / samples.len() as f64
}

/// Time both methods over `values` with a default runner.
///
/// Shorthand for `BenchmarkRunner::new().compute_average_times(values)`.
pub fn compute_average_times<I>(values: I) -> Result<AverageTimes>
where
    I: IntoIterator<Item = u64>,
{
    BenchmarkRunner::new().compute_average_times(values)
}
