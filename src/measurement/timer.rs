//! Wall-clock timing of a single invocation.
//!
//! Uses `std::time::Instant`, which is monotonic on every supported platform.

use std::hint::black_box as std_black_box;
use std::time::Instant;

/// Wrapper around `std::hint::black_box` for preventing compiler optimizations.
///
/// Use this to wrap function calls being measured to prevent the compiler
/// from optimizing away the computation or reordering it relative to timing calls.
#[inline]
pub fn black_box<T>(x: T) -> T {
    std_black_box(x)
}

/// The return value of a timed operation together with its duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timed<T> {
    /// Whatever the operation returned, untouched.
    pub value: T,
    /// Elapsed wall-clock time in nanoseconds.
    pub elapsed_ns: u64,
}

impl<T> Timed<T> {
    /// Discard the duration and keep the value.
    pub fn into_value(self) -> T {
        self.value
    }
}

/// Timer for measuring one execution of a closure.
#[derive(Debug, Clone, Copy, Default)]
pub struct Timer;

impl Timer {
    /// Create a new timer.
    pub fn new() -> Self {
        Timer
    }

    /// Run `f` exactly once and report how long it took.
    ///
    /// The closure's return value is handed back as-is, so an `Err` from the
    /// measured operation reaches the caller unmodified.
    #[inline]
    pub fn measure<F, T>(&self, f: F) -> Timed<T>
    where
        F: FnOnce() -> T,
    {
        let start = Instant::now();
        let value = black_box(f());
        let elapsed = start.elapsed();
        Timed {
            value,
            elapsed_ns: u64::try_from(elapsed.as_nanos()).unwrap_or(u64::MAX),
        }
    }

    /// Measure the execution time of a function in nanoseconds.
    #[inline]
    pub fn measure_ns<F, T>(&self, f: F) -> u64
    where
        F: FnOnce() -> T,
    {
        self.measure(f).elapsed_ns
    }
}
