//! One-period Bellman step solved by nonlinear value function iteration.
//!
//! For every `(p, m)` grid point the consumption choice maximizes
//!
//! ```text
//! u(c) + w(m - c)    over    c in [min(m/2, 1e-8), m]
//! ```
//!
//! where `w` is the continuation value interpolated over the asset grid. The
//! search minimizes the negated value with golden section search; the value
//! array stores the sign-corrected result.

mod objective;
mod solve;


pub use objective::{BellmanObjective, ChoiceValue, bellman_objective, value_of_choice};
pub use solve::{MIN_CONSUMPTION, consumption_bracket, solve_bellman};
