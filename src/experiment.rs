//! Main `Experiment` entry point and builder.

use std::io::Write;
use std::path::PathBuf;
use std::time::Instant;

use tracing::{debug, info};

use crate::config::{Category, Config};
use crate::digits::DigitSquareSum;
use crate::error::Result;
use crate::output::{chart, terminal};
use crate::result::{CategoryResult, ExperimentReport};
use crate::runner::BenchmarkRunner;

/// Benchmarks both digit-square-sum methods across a set of categories.
///
/// Use the builder pattern to configure and run the experiment.
///
/// # Example
///
/// ```no_run
/// use digit_square_bench::Experiment;
///
/// let experiment = Experiment::new().warmup(100);
/// let report = experiment.run().unwrap();
/// experiment.render_chart(&report).unwrap();
/// ```
#[derive(Debug, Clone, Default)]
pub struct Experiment {
    config: Config,
}

impl Experiment {
    /// Create with the default configuration: six categories of 10,001 values.
    pub fn new() -> Self {
        Self {
            config: Config::default(),
        }
    }

    /// Create with a short span for tests and smoke runs.
    ///
    /// Settings:
    /// - 1,000 values after each category start (vs 10,000 default)
    /// - 800x600 chart (vs 2400x1800 default)
    pub fn quick() -> Self {
        Self {
            config: Config {
                span: 1_000,
                chart_size: (800, 600),
                ..Config::default()
            },
        }
    }

    /// Create from an explicit configuration.
    pub fn with_config(config: Config) -> Self {
        Self { config }
    }

    /// Enable or disable input range validation.
    pub fn validation(mut self, enabled: bool) -> Self {
        self.config.validate = enabled;
        self
    }

    /// Set the number of values tested after each category start.
    pub fn span(mut self, span: u64) -> Self {
        self.config.span = span;
        self
    }

    /// Set the untimed warmup calls per method and category.
    pub fn warmup(mut self, n: usize) -> Self {
        self.config.warmup = n;
        self
    }

    /// Replace the categories.
    pub fn categories(mut self, categories: Vec<Category>) -> Self {
        self.config.categories = categories;
        self
    }

    /// Set where the PNG chart is written.
    pub fn chart_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.chart_path = path.into();
        self
    }

    /// Set the chart size in pixels.
    pub fn chart_size(mut self, width: u32, height: u32) -> Self {
        self.config.chart_size = (width, height);
        self
    }

    /// Get the current configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Run every category and collect the results.
    pub fn run(&self) -> Result<ExperimentReport> {
        self.run_with(|_| {})
    }

    /// Run every category, calling `on_row` as soon as each one finishes.
    ///
    /// # Errors
    ///
    /// Stops at the first category whose inputs fail validation.
    pub fn run_with<F>(&self, mut on_row: F) -> Result<ExperimentReport>
    where
        F: FnMut(&CategoryResult),
    {
        let start_time = Instant::now();
        let runner = BenchmarkRunner::new()
            .with_sums(DigitSquareSum::new().with_validation(self.config.validate))
            .warmup(self.config.warmup);

        let mut rows = Vec::with_capacity(self.config.categories.len());
        for category in &self.config.categories {
            let values = category.values(self.config.span);
            debug!(
                label = %category.label,
                first = *values.start(),
                last = *values.end(),
                "benchmarking category"
            );

            let average = runner.compute_average_times(values)?;
            info!(
                label = %category.label,
                arithmetic_ns = average.arithmetic_ns,
                textual_ns = average.textual_ns,
                "category done"
            );

            let row = CategoryResult {
                category: category.clone(),
                average,
            };
            on_row(&row);
            rows.push(row);
        }

        Ok(ExperimentReport {
            span: self.config.span,
            validate: self.config.validate,
            rows,
            runtime_secs: start_time.elapsed().as_secs_f64(),
        })
    }

    /// Write the report's bar chart to the configured path.
    ///
    /// Returns the path the chart was written to.
    pub fn render_chart(&self, report: &ExperimentReport) -> Result<PathBuf> {
        let path = self.config.chart_path.clone();
        chart::render_png(report, &path, self.config.chart_size)?;
        info!(path = %path.display(), "chart written");
        Ok(path)
    }

    /// Run the whole experiment the way the command line tool does.
    ///
    /// Prints the intro, one row per category as it completes, writes the PNG
    /// chart, then prints the terminal rendition of the chart to `out`.
    pub fn drive<W: Write>(&self, out: &mut W) -> Result<ExperimentReport> {
        writeln!(out, "{}", terminal::format_intro(self.config.span))?;
        writeln!(out, "{}", terminal::format_results_header())?;

        let mut write_result = Ok(());
        let report = self.run_with(|row| {
            if write_result.is_ok() {
                write_result = writeln!(out, "{}", terminal::format_row(row));
            }
        })?;
        write_result?;

        let path = self.render_chart(&report)?;
        writeln!(out)?;
        write!(out, "{}", terminal::format_bar_chart(&report))?;
        writeln!(out, "Chart saved to {}", path.display())?;

        Ok(report)
    }
}
