use ndarray::{Array2, Array3};

use crate::{Params, SolveError};

/// Policy and value arrays for the full horizon.
///
/// `c` and `v` are indexed `[t, ip, im]` over periods, permanent income, and
/// cash-on-hand. `w` is the continuation value on the asset grid, indexed
/// `[ip, ia]`, for the period currently being solved; the caller refreshes it
/// from `v[t + 1]` before solving period `t`.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    pub c: Array3<f64>,
    pub v: Array3<f64>,
    pub w: Array2<f64>,
}

impl Solution {
    /// Allocates NaN-filled arrays.
    #[must_use]
    pub fn new(periods: usize, np: usize, nm: usize, na: usize) -> Self {
        Self {
            c: Array3::from_elem((periods, np, nm), f64::NAN),
            v: Array3::from_elem((periods, np, nm), f64::NAN),
            w: Array2::from_elem((np, na), f64::NAN),
        }
    }

    /// Allocates arrays sized to the grids in `par`.
    #[must_use]
    pub fn for_params<U>(par: &Params<U>, periods: usize) -> Self {
        Self::new(periods, par.np(), par.nm(), par.na())
    }

    /// Number of periods in the horizon.
    #[must_use]
    pub fn periods(&self) -> usize {
        self.c.len_of(ndarray::Axis(0))
    }

    /// Checks that the arrays match the grids in `par`.
    pub(crate) fn check_shape<U>(&self, par: &Params<U>) -> Result<(), SolveError> {
        let periods = self.periods();
        let policy = [periods, par.np(), par.nm()];
        check("c", self.c.shape(), &policy)?;
        check("v", self.v.shape(), &policy)?;
        check("w", self.w.shape(), &[par.np(), par.na()])
    }

    /// Checks that `t` is a period of the horizon.
    pub(crate) fn check_period(&self, t: usize) -> Result<(), SolveError> {
        let periods = self.periods();
        if t < periods {
            Ok(())
        } else {
            Err(SolveError::PeriodOutOfRange { t, periods })
        }
    }
}

fn check(array: &'static str, found: &[usize], expected: &[usize]) -> Result<(), SolveError> {
    if found == expected {
        Ok(())
    } else {
        Err(SolveError::Shape {
            array,
            expected: expected.to_vec(),
            found: found.to_vec(),
        })
    }
}
