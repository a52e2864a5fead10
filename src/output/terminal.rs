//! Terminal output: the results table and a bar chart drawn with block characters.

use colored::Colorize;
use num_format::{Locale, ToFormattedString};

use crate::digits::Method;
use crate::result::{CategoryResult, ExperimentReport};

/// Width of the longest bar in [`format_bar_chart`], in characters.
const BAR_COLUMNS: usize = 48;

/// Round a nanosecond mean and group its digits with commas.
pub fn format_ns(ns: f64) -> String {
    let rounded = if ns.is_finite() && ns > 0.0 {
        ns.round() as u64
    } else {
        0
    };
    rounded.to_formatted_string(&Locale::en)
}

/// The line announcing how many values each category covers.
pub fn format_intro(span: u64) -> String {
    format!("For each value of n, values n through n + {} will be tested.\n", span)
}

/// Heading printed above the per-category rows.
pub fn format_results_header() -> String {
    format!("Results\n{}", "-".repeat(70))
}

/// One results row: the category start and both means.
pub fn format_row(row: &CategoryResult) -> String {
    format!(
        "n = {:<15} {}: {:<8} ns      {}: {:<8} ns",
        row.category.start,
        Method::Arithmetic.label(),
        format_ns(row.average.arithmetic_ns),
        Method::Textual.label(),
        format_ns(row.average.textual_ns),
    )
}

/// Header followed by every row of the report.
pub fn format_report(report: &ExperimentReport) -> String {
    let mut output = format_results_header();
    output.push('\n');
    for row in &report.rows {
        output.push_str(&format_row(row));
        output.push('\n');
    }
    output
}

/// Grouped horizontal bar chart of the report, one bar pair per category.
///
/// Bars are scaled to the largest mean in the report.
pub fn format_bar_chart(report: &ExperimentReport) -> String {
    let mut output = String::new();
    let sep = "\u{2500}".repeat(62);

    output.push_str("Average Execution Time (ns)\n");
    output.push_str(&sep);
    output.push('\n');

    let max = report.max_mean_ns();
    let label_width = report
        .labels()
        .iter()
        .map(|label| label.len())
        .max()
        .unwrap_or(0);

    for row in &report.rows {
        for (i, method) in Method::ALL.into_iter().enumerate() {
            let ns = row.average.for_method(method);
            let label = if i == 0 { row.category.label.as_str() } else { "" };
            output.push_str(&format!(
                "  {:>width$}  {:<6} {} {} ns\n",
                label,
                method.label(),
                paint(method, &bar(ns, max)),
                format_ns(ns),
                width = label_width,
            ));
        }
    }

    output.push_str(&sep);
    output.push('\n');
    output.push_str(&format!(
        "{} Math Method   {} String Method\n",
        paint(Method::Arithmetic, "\u{2588}"),
        paint(Method::Textual, "\u{2588}"),
    ));

    output
}

/// Bar of full blocks proportional to `ns / max`. Non-zero values get at least one block.
fn bar(ns: f64, max: f64) -> String {
    let positive = |v: f64| v.is_finite() && v > 0.0;
    if !positive(max) || !positive(ns) {
        return String::new();
    }
    let columns = ((ns / max) * BAR_COLUMNS as f64).round() as usize;
    "\u{2588}".repeat(columns.clamp(1, BAR_COLUMNS))
}

/// Color a string in the method's chart color.
fn paint(method: Method, text: &str) -> String {
    match method {
        Method::Arithmetic => text.truecolor(31, 119, 180).to_string(),
        Method::Textual => text.truecolor(255, 127, 14).to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::result::fixtures::sample_report;

    #[test]
    fn test_format_ns() {
        assert_eq!(format_ns(0.0), "0");
        assert_eq!(format_ns(41.6), "42");
        assert_eq!(format_ns(1_234_567.2), "1,234,567");
        assert_eq!(format_ns(f64::NAN), "0");
    }

    #[test]
    fn test_format_row() {
        let report = sample_report();
        let row = format_row(&report.rows[1]);
        assert!(row.starts_with("n = 1000000000      Math: 120"));
        assert!(row.contains("String: 310"));
        assert!(row.ends_with(" ns"));
    }

    #[test]
    fn test_format_report() {
        let report = sample_report();
        let output = format_report(&report);
        assert!(output.starts_with("Results\n"));
        assert!(output.contains(&"-".repeat(70)));
        assert_eq!(output.lines().filter(|l| l.starts_with("n = ")).count(), 2);
    }

    #[test]
    fn test_intro() {
        assert_eq!(
            format_intro(10_000),
            "For each value of n, values n through n + 10000 will be tested.\n"
        );
    }

    #[test]
    fn test_bar_scaling() {
        assert_eq!(bar(310.0, 310.0).chars().count(), BAR_COLUMNS);
        assert_eq!(bar(0.001, 310.0).chars().count(), 1);
        assert!(bar(0.0, 310.0).is_empty());
        assert!(bar(5.0, 0.0).is_empty());
    }

    #[test]
    fn test_format_bar_chart() {
        let report = sample_report();
        let output = format_bar_chart(&report);
        assert!(output.contains("Average Execution Time (ns)"));
        assert!(output.contains("1B"));
        assert!(output.contains("310 ns"));
        assert!(output.contains("Math Method"));
        assert!(output.contains("String Method"));
    }
}
