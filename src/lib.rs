//! # digit-square-bench
//!
//! Compare two ways of computing the sum of the squares of an integer's
//! decimal digits, and how their cost grows with the size of the integer.
//!
//! - [`DigitSquareSum::by_arithmetic`]: `% 10` and `/ 10` until the number is zero
//! - [`DigitSquareSum::by_textual`]: format as decimal text, square each digit
//!
//! An [`Experiment`] times both methods on 10,001 consecutive inputs starting at
//! 1, 100K, 1M, 10M, 100M and 1B, reports the mean time per call for each
//! method, and draws a grouped bar chart.
//!
//! ## Quick Start
//!
//! ```no_run
//! use digit_square_bench::Experiment;
//!
//! let experiment = Experiment::new();
//! let report = experiment.drive(&mut std::io::stdout()).unwrap();
//! println!("{} categories in {:.2}s", report.rows.len(), report.runtime_secs);
//! ```
//!
//! Timing a single batch:
//!
//! ```
//! use digit_square_bench::runner::compute_average_times;
//!
//! let times = compute_average_times(1..=100).unwrap();
//! assert!(times.arithmetic_ns >= 0.0);
//! assert_eq!(times.samples, 100);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

// Core modules
mod config;
mod digits;
mod error;
mod experiment;
mod result;

// Functional modules
pub mod measurement;
pub mod output;
pub mod runner;

// Re-exports for public API
pub use config::{Category, Config, DEFAULT_CHART_PATH, DEFAULT_CHART_SIZE, DEFAULT_SPAN};
pub use digits::{DigitSquareSum, Method, MAX_N, MIN_N};
pub use error::{Error, Result};
pub use experiment::Experiment;
pub use measurement::{Timed, Timer};
pub use result::{CategoryResult, ExperimentReport};
pub use runner::{AverageTimes, BenchmarkRunner};
