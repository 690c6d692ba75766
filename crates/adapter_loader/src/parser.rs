//! Whitespace-separated point parser.

use crate::error::LoadError;
use interp_core::math::interpolators::PointSet;
use interp_core::types::Scalar;
use std::io::BufRead;
use std::str::FromStr;

/// Parse `x y` pairs from a text stream until it is exhausted.
///
/// Tokens are taken two at a time regardless of line breaks; `#` starts a
/// comment running to the end of the line. End of input is checked before a
/// pair is started, so trailing whitespace never yields a spurious point.
///
/// # Errors
///
/// * `LoadError::Io` - The reader failed
/// * `LoadError::InvalidNumber` - A token does not parse as `T`
/// * `LoadError::DanglingValue` - The input holds an odd number of values
///
/// # Example
///
/// ```
/// use adapter_loader::parse_points;
///
/// let points = parse_points::<f64, _>("1 2 # first\n3 4\n\n".as_bytes()).unwrap();
/// assert_eq!(points.xs(), &[1.0, 3.0]);
/// assert_eq!(points.ys(), &[2.0, 4.0]);
///
/// assert!(parse_points::<f64, _>("1 2 3".as_bytes()).is_err());
/// ```
pub fn parse_points<T, R>(reader: R) -> Result<PointSet<T>, LoadError>
where
    T: Scalar + FromStr,
    R: BufRead,
{
    let mut points = PointSet::new();
    // x waiting for its y, with where it came from
    let mut pending: Option<(T, usize, String)> = None;

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let line_no = index + 1;
        let content = match line.split_once('#') {
            Some((before, _)) => before,
            None => line.as_str(),
        };

        for token in content.split_whitespace() {
            let value = parse_token::<T>(token, line_no)?;
            match pending.take() {
                Some((x, _, _)) => points.push(x, value),
                None => pending = Some((value, line_no, token.to_string())),
            }
        }
    }

    if let Some((_, line, token)) = pending {
        return Err(LoadError::DanglingValue { line, token });
    }

    Ok(points)
}

fn parse_token<T: FromStr>(token: &str, line: usize) -> Result<T, LoadError> {
    token.parse::<T>().map_err(|_| LoadError::InvalidNumber {
        line,
        token: token.to_string(),
    })
}
