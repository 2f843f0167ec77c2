//! Piecewise-linear interpolation on a strictly increasing grid.
//!
//! [`LinearInterp`] validates its grid once at construction and then
//! evaluates with a binary search per query. Queries outside the grid are
//! linearly extrapolated from the nearest edge segment.

mod error;
mod linear;

pub use error::InterpError;
pub use linear::LinearInterp;
