//! Eval command implementation
//!
//! Evaluates the interpolating polynomial at each query value.

use tracing::info;

use super::load_interpolator;
use crate::config::AppConfig;
use crate::report::Report;
use crate::Result;

/// Run the eval command
pub fn run(config: &AppConfig, xs: &[f64]) -> Result<Report> {
    let interp = load_interpolator(config)?;

    let mut report = Report::new(format!(
        "Newton interpolation of {}",
        config.data_path.display()
    ));
    for (&x, y) in xs.iter().zip(interp.evaluate_many(xs)?) {
        report.push(x, y);
    }

    info!(queries = xs.len(), "Evaluation complete");
    Ok(report)
}
