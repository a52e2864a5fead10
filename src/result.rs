//! Experiment result types.

use serde::{Deserialize, Serialize};

use crate::config::Category;
use crate::digits::Method;
use crate::runner::AverageTimes;

/// Measured means for one category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryResult {
    /// The category that was benchmarked.
    pub category: Category,

    /// Mean time per method over the category's inputs.
    pub average: AverageTimes,
}

/// Complete result of an experiment run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperimentReport {
    /// Values tested after each category start.
    pub span: u64,

    /// Whether inputs were range checked.
    pub validate: bool,

    /// One entry per category, in configuration order.
    pub rows: Vec<CategoryResult>,

    /// Wall-clock duration of the whole run in seconds.
    pub runtime_secs: f64,
}

impl ExperimentReport {
    /// Mean times of one method across all categories, in row order.
    pub fn series(&self, method: Method) -> Vec<f64> {
        self.rows
            .iter()
            .map(|row| row.average.for_method(method))
            .collect()
    }

    /// Largest mean time of either method, or 0.0 for an empty report.
    pub fn max_mean_ns(&self) -> f64 {
        self.rows
            .iter()
            .flat_map(|row| Method::ALL.map(|m| row.average.for_method(m)))
            .fold(0.0, f64::max)
    }

    /// Category labels in row order.
    pub fn labels(&self) -> Vec<&str> {
        self.rows.iter().map(|row| row.category.label.as_str()).collect()
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    /// A report with hand-picked means, for formatting tests.
    pub fn sample_report() -> ExperimentReport {
        let rows = [("1", 1, 40.0, 95.0), ("1B", 1_000_000_000, 120.0, 310.0)]
            .into_iter()
            .map(|(label, start, arithmetic_ns, textual_ns)| CategoryResult {
                category: Category::new(label, start),
                average: AverageTimes {
                    arithmetic_ns,
                    textual_ns,
                    samples: 10_001,
                },
            })
            .collect();
        ExperimentReport {
            span: 10_000,
            validate: true,
            rows,
            runtime_secs: 0.25,
        }
    }
}
