//! Table command implementation
//!
//! Evaluates the interpolating polynomial over an evenly spaced range.

use interp_core::math::interpolators::Interpolator;
use tracing::{info, warn};

use super::load_interpolator;
use crate::config::AppConfig;
use crate::report::Report;
use crate::{CliError, Result};

/// Upper bound on generated rows
pub const MAX_ROWS: usize = 1_000_000;

/// Query values `start, start + step, ...` strictly below `end`
pub fn range_points(start: f64, end: f64, step: f64) -> Result<Vec<f64>> {
    if !(start.is_finite() && end.is_finite() && step.is_finite()) {
        return Err(CliError::InvalidArgument(
            "start, end and step must be finite".to_string(),
        ));
    }
    if step <= 0.0 {
        return Err(CliError::InvalidArgument(format!(
            "step must be positive, got {}",
            step
        )));
    }
    if end <= start {
        return Err(CliError::InvalidArgument(format!(
            "end ({}) must be greater than start ({})",
            end, start
        )));
    }

    if start + step == start {
        return Err(CliError::InvalidArgument(format!(
            "step {} is below the resolution of start {}",
            step, start
        )));
    }

    let count = ((end - start) / step).ceil() as usize;
    if count > MAX_ROWS {
        return Err(CliError::InvalidArgument(format!(
            "range yields {} rows, limit is {}",
            count, MAX_ROWS
        )));
    }

    // Multiply rather than accumulate so the last row does not drift past `end`
    let xs: Vec<f64> = (0..count)
        .map(|k| start + k as f64 * step)
        .filter(|&x| x < end)
        .collect();
    if xs.windows(2).any(|w| w[1] <= w[0]) {
        return Err(CliError::InvalidArgument(format!(
            "step {} is too fine to separate values between {} and {}",
            step, start, end
        )));
    }
    Ok(xs)
}

/// Returns true if any query value lies outside `[lo, hi]`
fn extrapolates(xs: &[f64], lo: f64, hi: f64) -> bool {
    xs.iter().any(|&x| x < lo || x > hi)
}

/// Run the table command
pub fn run(config: &AppConfig, start: f64, end: f64, step: f64) -> Result<Report> {
    let xs = range_points(start, end, step)?;
    let interp = load_interpolator(config)?;

    let (lo, hi) = interp.domain();
    if extrapolates(&xs, lo, hi) {
        warn!(
            data_min = lo,
            data_max = hi,
            "Range extends beyond the sample data; values are extrapolated"
        );
    }

    let mut report = Report::new(format!(
        "Newton interpolation of {} over [{}, {})",
        config.data_path.display(),
        start,
        end
    ));
    for (&x, y) in xs.iter().zip(interp.evaluate_many(&xs)?) {
        report.push(x, y);
    }

    info!(rows = report.rows.len(), "Table complete");
    Ok(report)
}
