use nalgebra::Point2;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("Invalid point '{0}'. Expected 'x,y' (e.g., '1.5,-2.0').")]
    InvalidPoint(String),

    #[error("Invalid resolution '{0}'. Expected 'nx' or 'nx,ny' with integers >= 2.")]
    InvalidResolution(String),
}

/// Parses a `x,y` pair into a point.
pub fn parse_point(input: &str) -> Result<Point2<f64>, ParseError> {
    let invalid = || ParseError::InvalidPoint(input.to_string());
    let (x, y) = input.split_once(',').ok_or_else(invalid)?;
    let x: f64 = x.trim().parse().map_err(|_| invalid())?;
    let y: f64 = y.trim().parse().map_err(|_| invalid())?;
    Ok(Point2::new(x, y))
}

/// Parses `nx` or `nx,ny` into a per-axis resolution; a single value applies
/// to both axes.
pub fn parse_resolution(input: &str) -> Result<(usize, usize), ParseError> {
    let invalid = || ParseError::InvalidResolution(input.to_string());
    let parse_axis = |s: &str| -> Result<usize, ParseError> {
        let n: usize = s.trim().parse().map_err(|_| invalid())?;
        if n < 2 {
            return Err(invalid());
        }
        Ok(n)
    };
    match input.split_once(',') {
        Some((nx, ny)) => Ok((parse_axis(nx)?, parse_axis(ny)?)),
        None => {
            let n = parse_axis(input)?;
            Ok((n, n))
        }
    }
}
