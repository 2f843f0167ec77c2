use bufferstock_solvers::interpolation::InterpError;
use thiserror::Error;

/// Errors detected at the boundary of a solve, before any grid point is
/// computed.
///
/// Numerical trouble inside the grid loop is never an error; it shows up as
/// non-finite entries in the solution arrays.
#[derive(Debug, Error)]
pub enum SolveError {
    #[error("period {t} is outside the solution horizon of {periods} periods")]
    PeriodOutOfRange { t: usize, periods: usize },

    #[error("`{array}` has shape {found:?}, expected {expected:?}")]
    Shape {
        array: &'static str,
        expected: Vec<usize>,
        found: Vec<usize>,
    },

    #[error("failed to build continuation interpolant")]
    Continuation(#[from] InterpError),
}
