//! PNG grouped bar chart of an experiment report.
//!
//! Category `i` is centered on `x = i`. Its arithmetic bar spans `[i - 0.4, i]`
//! and its textual bar `[i, i + 0.4]`.

use std::path::Path;

use plotters::coord::Shift;
use plotters::prelude::*;

use crate::digits::Method;
use crate::error::{Error, Result};
use crate::result::ExperimentReport;

/// Chart title.
pub const TITLE: &str = "Average Execution Time for SumDigitsSquared Methods";

/// X axis description.
pub const X_DESC: &str = "Value of n";

/// Y axis description.
pub const Y_DESC: &str = "Average Execution Time (ns) for n Through n + 10K";

/// Width of one bar as a fraction of a category slot.
const BAR_WIDTH: f64 = 0.4;

/// Reference height the font and margin sizes are tuned for.
const BASE_HEIGHT: f64 = 600.0;

const TAB_BLUE: RGBColor = RGBColor(31, 119, 180);
const TAB_ORANGE: RGBColor = RGBColor(255, 127, 14);

fn method_color(method: Method) -> RGBColor {
    match method {
        Method::Arithmetic => TAB_BLUE,
        Method::Textual => TAB_ORANGE,
    }
}

/// Left edge of a method's bar relative to the category index.
fn bar_offset(method: Method) -> f64 {
    match method {
        Method::Arithmetic => -BAR_WIDTH,
        Method::Textual => 0.0,
    }
}

/// Render the report as a PNG at `path`.
///
/// # Errors
///
/// Returns [`Error::Chart`] if the report has no rows, or if drawing or
/// encoding the image fails.
pub fn render_png(report: &ExperimentReport, path: &Path, size: (u32, u32)) -> Result<()> {
    if report.rows.is_empty() {
        return Err(Error::Chart("no categories to plot".to_string()));
    }

    let root = BitMapBackend::new(path, size).into_drawing_area();
    draw(&root, report).map_err(|e| Error::Chart(e.to_string()))?;
    root.present().map_err(|e| Error::Chart(e.to_string()))?;
    Ok(())
}

fn draw<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    report: &ExperimentReport,
) -> DrawResult<(), DB> {
    root.fill(&WHITE)?;

    let (_, height) = root.dim_in_pixel();
    let unit = (f64::from(height) / BASE_HEIGHT).max(1.0);
    let px = |v: f64| (v * unit).round() as u32;

    let labels = report.labels();
    let slots = labels.len();
    let y_max = match report.max_mean_ns() {
        max if max > 0.0 => max * 1.1,
        _ => 1.0,
    };

    let mut chart = ChartBuilder::on(root)
        .caption(TITLE, ("sans-serif", px(20.0)))
        .margin(px(12.0))
        .x_label_area_size(px(45.0))
        .y_label_area_size(px(75.0))
        .build_cartesian_2d(-0.5f64..(slots as f64 - 0.5), 0f64..y_max)?;

    // With slots + 1 requested labels the key points land on every integer.
    let x_formatter = |x: &f64| slot_label(&labels, *x);
    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(slots + 1)
        .x_label_formatter(&x_formatter)
        .x_desc(X_DESC)
        .y_desc(Y_DESC)
        .axis_desc_style(("sans-serif", px(15.0)))
        .label_style(("sans-serif", px(13.0)))
        .draw()?;

    let half = px(6.0) as i32;
    for method in Method::ALL {
        let color = method_color(method);
        let offset = bar_offset(method);
        chart
            .draw_series(report.rows.iter().enumerate().map(|(i, row)| {
                let left = i as f64 + offset;
                Rectangle::new(
                    [(left, 0.0), (left + BAR_WIDTH, row.average.for_method(method))],
                    color.filled(),
                )
            }))?
            .label(format!("{} Method", method.label()))
            .legend(move |(x, y)| {
                Rectangle::new([(x, y - half), (x + 2 * half, y + half)], color.filled())
            });
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperLeft)
        .label_font(("sans-serif", px(14.0)))
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;

    Ok(())
}

/// Category label for an x key point, empty between slots.
fn slot_label(labels: &[&str], x: f64) -> String {
    let slot = x.round();
    if (x - slot).abs() > 1e-6 || slot < 0.0 {
        return String::new();
    }
    labels
        .get(slot as usize)
        .map(|label| label.to_string())
        .unwrap_or_default()
}
