//! Run the six-category experiment, print the table and write the chart.

use std::io;
use std::process::ExitCode;

use tracing::error;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

use digit_square_bench::Experiment;

fn init_logging() {
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> ExitCode {
    init_logging();

    let experiment = Experiment::new();
    match experiment.drive(&mut io::stdout().lock()) {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            error!(%err, "experiment failed");
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
