//! Configuration for a benchmark experiment.

use std::ops::RangeInclusive;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Number of values tested after each category's starting value.
pub const DEFAULT_SPAN: u64 = 10_000;

/// File the chart is written to when no other path is configured.
pub const DEFAULT_CHART_PATH: &str = "SumDigitsSquaredGraph.png";

/// Chart size in pixels: 8x6 inches at 300 dpi.
pub const DEFAULT_CHART_SIZE: (u32, u32) = (2400, 1800);

/// An order-of-magnitude bucket of inputs.
///
/// A category covers `start` through `start + span` inclusive, where `span`
/// comes from the experiment configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Short label used on the chart axis ("1", "100K", ...).
    pub label: String,
    /// First value of the range.
    pub start: u64,
}

impl Category {
    /// Create a category.
    pub fn new(label: impl Into<String>, start: u64) -> Self {
        Self {
            label: label.into(),
            start,
        }
    }

    /// The six fixed categories: 1, 100K, 1M, 10M, 100M and 1B.
    pub fn defaults() -> Vec<Category> {
        vec![
            Category::new("1", 1),
            Category::new("100K", 100_000),
            Category::new("1M", 1_000_000),
            Category::new("10M", 10_000_000),
            Category::new("100M", 100_000_000),
            Category::new("1B", 1_000_000_000),
        ]
    }

    /// Inputs covered by this category for the given span.
    pub fn values(&self, span: u64) -> RangeInclusive<u64> {
        self.start..=self.start.saturating_add(span)
    }
}

/// Configuration options for [`Experiment`](crate::Experiment).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Reject inputs outside `[1, 2^31 - 1]` (default: true).
    pub validate: bool,

    /// Values tested after each category start (default: 10,000).
    ///
    /// Each category therefore times `span + 1` consecutive inputs.
    pub span: u64,

    /// Untimed calls of each method before measuring a category (default: 0).
    pub warmup: usize,

    /// Categories to benchmark, in chart order (default: [`Category::defaults`]).
    pub categories: Vec<Category>,

    /// Where the PNG chart is written (default: `SumDigitsSquaredGraph.png`).
    pub chart_path: PathBuf,

    /// Chart size in pixels (default: 2400x1800).
    pub chart_size: (u32, u32),
}

impl Default for Config {
    fn default() -> Self {
        Self {
            validate: true,
            span: DEFAULT_SPAN,
            warmup: 0,
            categories: Category::defaults(),
            chart_path: PathBuf::from(DEFAULT_CHART_PATH),
            chart_size: DEFAULT_CHART_SIZE,
        }
    }
}
