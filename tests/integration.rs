//! End-to-end integration tests.

use digit_square_bench::output::json;
use digit_square_bench::{Category, Experiment, Method, DEFAULT_CHART_PATH, DEFAULT_SPAN};

/// The full six-category experiment, as the binary runs it.
#[test]
fn full_experiment_prints_six_rows_and_writes_chart() {
    let dir = tempfile::tempdir().expect("tempdir");
    let chart = dir.path().join(DEFAULT_CHART_PATH);

    let experiment = Experiment::new().chart_path(&chart);
    let mut out = Vec::new();
    let report = experiment.drive(&mut out).expect("experiment should succeed");

    let text = String::from_utf8(out).expect("utf-8 output");
    assert!(text.starts_with("For each value of n, values n through n + 10000 will be tested."));
    assert!(text.contains("Results\n"));

    let rows: Vec<&str> = text.lines().filter(|l| l.starts_with("n = ")).collect();
    assert_eq!(rows.len(), 6, "output:\n{text}");
    for (row, start) in rows.iter().zip(["1", "100000", "1000000", "10000000", "100000000", "1000000000"]) {
        assert!(row.starts_with(&format!("n = {start} ")), "row: {row}");
        assert!(row.contains("Math: ") && row.contains("String: "), "row: {row}");
    }

    let metadata = std::fs::metadata(&chart).expect("chart file exists");
    assert!(metadata.len() > 0);

    assert_eq!(report.span, DEFAULT_SPAN);
    assert_eq!(report.rows.len(), 6);
    for method in Method::ALL {
        assert!(report
            .series(method)
            .iter()
            .all(|ns| ns.is_finite() && *ns >= 0.0));
    }
}

/// Smoke test of the quick preset with custom categories.
#[test]
fn quick_experiment_with_custom_categories() {
    let dir = tempfile::tempdir().expect("tempdir");
    let experiment = Experiment::quick()
        .categories(vec![Category::new("10", 10), Category::new("10K", 10_000)])
        .chart_path(dir.path().join("quick.png"));

    let report = experiment.run().expect("run");
    assert_eq!(report.labels(), vec!["10", "10K"]);
    assert!(report.rows.iter().all(|row| row.average.samples == 1_001));

    let path = experiment.render_chart(&report).expect("chart");
    assert!(std::fs::read(path).expect("read chart").starts_with(b"\x89PNG"));
}

/// Test report serialization.
#[test]
fn report_serialization() {
    let report = Experiment::quick()
        .span(10)
        .run()
        .expect("run");

    let json = json::to_json(&report).expect("Should serialize");
    assert!(json.contains("\"rows\""));
    assert!(json.contains("\"textual_ns\""));
    assert!(json.contains("\"label\":\"100M\""));
}
