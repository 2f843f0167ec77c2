//! Nonlinear value function iteration (NVFI) for the buffer-stock
//! consumption-savings model.
//!
//! The state is permanent income `p` and cash-on-hand `m`. For one period,
//! [`solve_bellman`] finds at every grid point the consumption level that
//! maximizes period utility plus the continuation value of the assets left
//! over, searching `c` with golden section search and evaluating the
//! continuation value by linear interpolation on the asset grid.
//!
//! # Usage
//!
//! ```
//! use bufferstock_nvfi::{Calibration, Solution, solve_bellman};
//! use ndarray::Axis;
//!
//! let calibration = Calibration { np: 4, nm: 20, na: 30, ..Calibration::default() };
//! let par = calibration.params()?;
//! let mut sol = Solution::for_params(&par, calibration.periods);
//!
//! // Continuation value of each asset level, one row per permanent income.
//! for (mut row, p) in sol.w.axis_iter_mut(Axis(0)).zip(par.grid_p()) {
//!     row.assign(&par.grid_a().mapv(|a| -1.0 / (a + p)));
//! }
//!
//! solve_bellman(0, &mut sol, &par)?;
//! assert!(sol.c.index_axis(Axis(0), 0).iter().all(|c| c.is_finite()));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # Modules
//!
//! - [`bellman`]: the one-period objective and solver
//! - [`horizon`]: terminal period and backward induction
//! - [`grid`]: grid construction and validation
//! - [`config`]: calibration loaded from TOML

pub mod bellman;
pub mod config;
mod error;
pub mod grid;
pub mod horizon;
mod params;
mod solution;
mod utility;

pub use bellman::{bellman_objective, solve_bellman};
pub use config::{Calibration, ConfigError};
pub use error::SolveError;
pub use horizon::{solve, solve_last_period};
pub use params::{DEFAULT_MAX_ITERS, Params, ParamsError};
pub use solution::Solution;
pub use utility::{Crra, Utility};
