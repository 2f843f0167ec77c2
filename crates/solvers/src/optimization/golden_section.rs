//! Golden section search for single-variable optimization.
//!
//! # Algorithm
//!
//! The bracket `[left, right]` carries two interior probes at fractions
//! `1 - 1/φ` and `1/φ` of its width. Whichever probe has the larger objective
//! loses its side of the bracket; the surviving probe lands exactly on one of
//! the new probe positions, so each shrink needs one new evaluation.
//!
//! The search stops once the outer bracket width is within
//! `x_abs_tol + x_rel_tol * |midpoint|` (see [`Config`]) and reports the best
//! point it evaluated.
//!
//! # Scope
//!
//! Problems must be [`OptimizationProblem<1>`]. On an objective with several
//! local optima the search settles on one of them without warning.
//!
//! # Degenerate brackets
//!
//! A bracket with equal bounds collapses both interior points onto the single
//! admissible point. That point is evaluated and returned immediately as
//! [`Status::Converged`] with `iters == 0`.
//!
//! # Non-finite objectives
//!
//! A NaN objective never wins a comparison. The search keeps shrinking
//! deterministically and the best point stays the last finite improvement (or
//! the first interior point if none is finite), so the result always lies
//! inside the bracket.

mod bracket;
mod config;
mod error;
mod point;
mod search;
mod solution;
mod state;

#[cfg(test)]
mod tests;

pub use config::{Config, ConfigError};
pub use error::Error;
pub use point::Point;
pub use solution::{Solution, Status};

use bufferstock_core::{Model, OptimizationProblem};

use search::search;

/// Finds the minimum of the objective using golden section search.
///
/// Bounds given in reverse order are swapped.
///
/// # Errors
///
/// Returns an error if the model or problem fails during evaluation.
pub fn minimize<M, P>(
    model: &M,
    problem: &P,
    bracket: [f64; 2],
    config: &Config,
) -> Result<Solution<M::Input, M::Output>, Error>
where
    M: Model,
    P: OptimizationProblem<1, Input = M::Input, Output = M::Output>,
{
    search(model, problem, bracket, config, |v| v)
}

/// Finds the maximum of the objective using golden section search.
///
/// The reported `objective` is the untransformed value at the maximizer.
///
/// # Errors
///
/// Returns an error if the model or problem fails during evaluation.
pub fn maximize<M, P>(
    model: &M,
    problem: &P,
    bracket: [f64; 2],
    config: &Config,
) -> Result<Solution<M::Input, M::Output>, Error>
where
    M: Model,
    P: OptimizationProblem<1, Input = M::Input, Output = M::Output>,
{
    search(model, problem, bracket, config, |v| -v)
}
