//! Backward induction over the full horizon.

use ndarray::{Array2, ArrayView2, Axis, Zip};
use tracing::{debug, instrument};

use crate::{Params, Solution, SolveError, Utility, bellman::solve_bellman};

/// Solves the last period, where everything is consumed: `c = m`, `v = u(m)`.
///
/// # Errors
///
/// Returns an error if the horizon is empty or the arrays do not match the
/// grids.
pub fn solve_last_period<U: Utility>(sol: &mut Solution, par: &Params<U>) -> Result<(), SolveError> {
    let periods = sol.periods();
    let t = periods
        .checked_sub(1)
        .ok_or(SolveError::PeriodOutOfRange { t: 0, periods })?;
    sol.check_shape(par)?;

    let utility = par.utility();
    Zip::from(sol.c.index_axis_mut(Axis(0), t))
        .and(sol.v.index_axis_mut(Axis(0), t))
        .and_broadcast(par.grid_m())
        .for_each(|c, v, &m| {
            *c = m;
            *v = utility.utility(m);
        });

    debug!(t, "solved last period");
    Ok(())
}

/// Solves every period from the last one backwards.
///
/// Before period `t` is solved, `continuation(t, v[t + 1], w)` must fill `w`
/// (shape `(Np, Na)`) with the continuation value on the asset grid.
///
/// # Errors
///
/// Returns the first error from [`solve_last_period`] or [`solve_bellman`].
#[instrument(level = "debug", skip_all, fields(periods = sol.periods()))]
pub fn solve<U, F>(sol: &mut Solution, par: &Params<U>, mut continuation: F) -> Result<(), SolveError>
where
    U: Utility + Sync,
    F: FnMut(usize, ArrayView2<'_, f64>, &mut Array2<f64>),
{
    solve_last_period(sol, par)?;

    for t in (0..sol.periods() - 1).rev() {
        {
            let Solution { v, w, .. } = &mut *sol;
            continuation(t, v.index_axis(Axis(0), t + 1), w);
        }
        solve_bellman(t, sol, par)?;
    }

    Ok(())
}
