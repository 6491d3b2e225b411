//! Input checks for caller-supplied point sets.
//!
//! The geometric core assumes finite coordinates; hosts that read points from
//! files or user input run `validate_points` first.

use std::fmt;

use super::types::Point;

/// Rejection reasons for a point set.
#[derive(Debug, Clone, PartialEq)]
pub enum PointSetError {
    /// Point at `index` has a NaN or infinite coordinate.
    NonFinite { index: usize, x: f64, y: f64 },
}

impl fmt::Display for PointSetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PointSetError::NonFinite { index, x, y } => {
                write!(f, "point {index} has non-finite coordinates ({x}, {y})")
            }
        }
    }
}

impl std::error::Error for PointSetError {}

/// Ok if every coordinate is finite; otherwise reports the first offender.
pub fn validate_points(points: &[Point]) -> Result<(), PointSetError> {
    match points
        .iter()
        .position(|p| !(p.x.is_finite() && p.y.is_finite()))
    {
        Some(index) => Err(PointSetError::NonFinite {
            index,
            x: points[index].x,
            y: points[index].y,
        }),
        None => Ok(()),
    }
}
