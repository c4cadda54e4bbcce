//! Driver that turns the tracker's fixed sensor packages into summaries.

use std::io::Write;

use fitness_tracker::{Training, read_package};

pub mod config;

/// Packages received from the tracker: workout code and raw readings.
pub const DEFAULT_PACKAGES: &[(&str, &[f64])] = &[
    ("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0]),
    ("RUN", &[15000.0, 1.0, 75.0]),
    ("WLK", &[9000.0, 1.0, 75.0, 180.0]),
];

/// Summarize each package and write one line per package to `out`.
///
/// Stops at the first package that cannot be read.
pub fn run<W: Write>(packages: &[(&str, &[f64])], out: &mut W) -> anyhow::Result<()> {
    for (code, data) in packages {
        let workout = read_package(code, data)?;
        let summary = workout.summarize();
        tracing::debug!(code, calories = summary.calories, "summarized workout");
        writeln!(out, "{}", summary)?;
    }
    tracing::info!("fitness_tracker: summarized {} packages", packages.len());
    Ok(())
}
