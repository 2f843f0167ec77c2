//! Core traits for the buffer-stock solution kernels.
//!
//! These are the capability contracts that the generic solvers consume and the
//! domain crates implement:
//!
//! - [`Model`]: a callable that maps a typed input to a typed output
//! - [`Snapshot`]: a captured input/output pair from a model call
//! - [`OptimizationProblem`]: adapts solver variables to model inputs and
//!   extracts a scalar objective from model outputs

mod model;
mod problems;

pub use model::{Model, Snapshot};
pub use problems::OptimizationProblem;
