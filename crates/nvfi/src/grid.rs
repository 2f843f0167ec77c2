//! Construction and validation of state grids.

use ndarray::{Array1, ArrayView1};
use thiserror::Error;

/// Errors for malformed grids.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum GridError {
    #[error("grid needs at least {min} points, got {len}")]
    TooShort { len: usize, min: usize },

    #[error("grid value {value} at index {index} is not finite")]
    NonFinite { index: usize, value: f64 },

    #[error("grid is not strictly increasing at index {index}")]
    NotIncreasing { index: usize },

    #[error("grid bounds must satisfy min < max, got [{min}, {max}]")]
    Bounds { min: f64, max: f64 },

    #[error("grid curvature must be finite and at least 1, got {0}")]
    Curvature(f64),
}

/// Builds a grid of `n` points on `[min, max]` that is denser near `min`.
///
/// Each step covers `1 / (n - i)^phi` of the remaining distance to `max`, so
/// `phi = 1` gives an evenly spaced grid and larger `phi` concentrates points
/// near the lower bound. The last point is exactly `max`.
///
/// # Errors
///
/// Returns an error if `n < 2`, `min >= max`, a bound is not finite, or
/// `phi < 1`.
pub fn nonlinspace(min: f64, max: f64, n: usize, phi: f64) -> Result<Array1<f64>, GridError> {
    if n < 2 {
        return Err(GridError::TooShort { len: n, min: 2 });
    }
    if !(min.is_finite() && max.is_finite() && min < max) {
        return Err(GridError::Bounds { min, max });
    }
    if !phi.is_finite() || phi < 1.0 {
        return Err(GridError::Curvature(phi));
    }

    let mut grid = Array1::zeros(n);
    grid[0] = min;
    for i in 1..n {
        #[allow(clippy::cast_precision_loss)]
        let remaining = (n - i) as f64;
        grid[i] = grid[i - 1] + (max - grid[i - 1]) / remaining.powf(phi);
    }
    grid[n - 1] = max;
    Ok(grid)
}

/// Checks that `grid` is finite, strictly increasing, and has at least
/// `min_len` points.
///
/// # Errors
///
/// Returns the first violation found.
pub fn check_increasing(grid: ArrayView1<'_, f64>, min_len: usize) -> Result<(), GridError> {
    if grid.len() < min_len {
        return Err(GridError::TooShort {
            len: grid.len(),
            min: min_len,
        });
    }
    if let Some((index, &value)) = grid.iter().enumerate().find(|(_, v)| !v.is_finite()) {
        return Err(GridError::NonFinite { index, value });
    }
    if let Some(index) = (1..grid.len()).find(|&i| grid[i] <= grid[i - 1]) {
        return Err(GridError::NotIncreasing { index });
    }
    Ok(())
}
