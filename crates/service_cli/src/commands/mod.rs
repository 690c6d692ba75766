//! CLI command implementations
//!
//! Each submodule implements a specific CLI command and returns the
//! [`Report`](crate::report::Report) it produced.

pub mod coeffs;
pub mod eval;
pub mod table;

use adapter_loader::{FileSource, PointSource};
use interp_core::math::interpolators::NewtonInterpolator;
use tracing::info;

use crate::config::AppConfig;
use crate::Result;

/// Load the configured data file and build its interpolating polynomial
pub fn load_interpolator(config: &AppConfig) -> Result<NewtonInterpolator<f64>> {
    let points = FileSource::new(&config.data_path).load::<f64>()?;
    info!(
        path = %config.data_path.display(),
        points = points.len(),
        "Sample points loaded"
    );

    let mut interp = NewtonInterpolator::new(points);
    interp.build()?;
    info!(degree = ?interp.degree(), "Newton polynomial built");
    Ok(interp)
}


#[cfg(test)]
mod tests {
    use super::test_support::config_with_data;
    use super::*;
    use crate::CliError;
    use interp_core::types::InterpolationError;

    #[test]
    fn test_load_interpolator_builds() {
        let (config, _file) = config_with_data("0 1\n1 2\n2 5\n");
        let interp = load_interpolator(&config).unwrap();
        assert!(interp.is_built());
        assert_eq!(interp.degree(), Some(2));
    }

    #[test]
    fn test_load_interpolator_empty_file() {
        let (config, _file) = config_with_data("# nothing yet\n");
        assert!(matches!(
            load_interpolator(&config),
            Err(CliError::Interpolation(InterpolationError::EmptyDataset))
        ));
    }

    #[test]
    fn test_load_interpolator_missing_file() {
        let config = AppConfig {
            data_path: "no/such/points.txt".into(),
            ..Default::default()
        };
        assert!(matches!(load_interpolator(&config), Err(CliError::Load(_))));
    }
}
