//! Numerical routines consumed by the buffer-stock kernels.
//!
//! - [`optimization`]: bracketed scalar search over any
//!   [`OptimizationProblem`](bufferstock_core::OptimizationProblem)
//! - [`interpolation`]: piecewise-linear interpolation with edge extrapolation

pub mod interpolation;
pub mod optimization;
