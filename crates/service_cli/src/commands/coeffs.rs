//! Coeffs command implementation
//!
//! Lists the divided-difference coefficients `f[x_0, ..., x_k]`.

use interp_core::types::InterpolationError;

use super::load_interpolator;
use crate::config::AppConfig;
use crate::report::Report;
use crate::Result;

/// Run the coeffs command
pub fn run(config: &AppConfig) -> Result<Report> {
    let interp = load_interpolator(config)?;
    let coefficients = interp
        .coefficients()
        .ok_or(InterpolationError::NotBuilt)?;

    let mut report = Report::new(format!(
        "Divided differences of {}",
        config.data_path.display()
    ))
    .with_labels("order", "coefficient");
    for (k, &c) in coefficients.iter().enumerate() {
        report.push(k as f64, c);
    }
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::config_with_data;

    #[test]
    fn test_coeffs_quadratic() {
        let (config, _file) = config_with_data("0 1\n1 2\n2 5\n");
        let report = run(&config).unwrap();

        assert_eq!(report.x_label, "order");
        let orders: Vec<f64> = report.rows.iter().map(|r| r.x).collect();
        let values: Vec<f64> = report.rows.iter().map(|r| r.y).collect();
        assert_eq!(orders, vec![0.0, 1.0, 2.0]);
        assert_eq!(values, vec![1.0, 1.0, 1.0]);
    }
}
