use bufferstock_solvers::optimization::golden_section;
use ndarray::{ArrayView1, ArrayViewMut1, Axis, parallel::prelude::*};
use tracing::{debug, instrument, warn};

use crate::{Params, Solution, SolveError, Utility};

use super::objective::{BellmanObjective, bellman_objective};

/// Floor of the consumption bracket.
pub const MIN_CONSUMPTION: f64 = 1e-8;

/// Consumption bracket at cash-on-hand `m`: `[min(m/2, 1e-8), m]`.
///
/// The lower bound is `1e-8` unless `m` itself is below `2e-8`.
#[must_use]
pub fn consumption_bracket(m: f64) -> [f64; 2] {
    [(m / 2.0).min(MIN_CONSUMPTION), m]
}

/// Solves the Bellman equation for period `t`, writing `sol.c[t]` and `sol.v[t]`.
///
/// `sol.w` must hold the continuation values for period `t`. Rows of
/// permanent income are solved in parallel on the current rayon pool; each
/// row writes only its own slice of `c[t]` and `v[t]`, so the result does
/// not depend on the number of threads.
///
/// Grid points where the objective is not finite are written as NaN or
/// infinite values rather than reported as errors; a warning with their count
/// is logged after the sweep.
///
/// # Errors
///
/// Returns an error if `t` is outside the horizon, if the solution arrays do
/// not match the grids, or if a continuation interpolant cannot be built.
#[instrument(level = "debug", skip(sol, par))]
pub fn solve_bellman<U>(t: usize, sol: &mut Solution, par: &Params<U>) -> Result<(), SolveError>
where
    U: Utility + Sync,
{
    sol.check_period(t)?;
    sol.check_shape(par)?;

    let Solution { c, v, w } = sol;
    let mut c_t = c.index_axis_mut(Axis(0), t);
    let mut v_t = v.index_axis_mut(Axis(0), t);

    c_t.axis_iter_mut(Axis(0))
        .into_par_iter()
        .zip(v_t.axis_iter_mut(Axis(0)))
        .zip(w.axis_iter(Axis(0)))
        .try_for_each(|((c_row, v_row), w_row)| solve_row(c_row, v_row, w_row, par))?;

    let non_finite = c_t
        .iter()
        .chain(v_t.iter())
        .filter(|x| !x.is_finite())
        .count();
    if non_finite > 0 {
        warn!(t, non_finite, "solution contains non-finite entries");
    }
    debug!(t, np = par.np(), nm = par.nm(), "solved bellman equation");

    Ok(())
}

/// Solves every cash-on-hand point of one permanent-income row.
fn solve_row<U: Utility>(
    mut c: ArrayViewMut1<'_, f64>,
    mut v: ArrayViewMut1<'_, f64>,
    w: ArrayView1<'_, f64>,
    par: &Params<U>,
) -> Result<(), SolveError> {
    let w = par.continuation(w)?;

    for ((c, v), &m) in c.iter_mut().zip(v.iter_mut()).zip(par.grid_m()) {
        let objective = BellmanObjective::new(m, &w, par);
        let choice = golden_section::minimize(
            &objective,
            &objective,
            consumption_bracket(m),
            par.golden_config(),
        )
        .map_or(f64::NAN, |solution| solution.x);

        *c = choice;
        *v = -bellman_objective(choice, m, &w, par);
    }

    Ok(())
}
