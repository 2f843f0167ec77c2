use bufferstock_solvers::{
    interpolation::{InterpError, LinearInterp},
    optimization::golden_section,
};
use ndarray::{Array1, ArrayView1};
use thiserror::Error;

use crate::{
    grid::{GridError, check_increasing},
    utility::Crra,
};

/// Shrink budget for the consumption search unless overridden.
///
/// Enough for a bracket of width 10 to reach 1e-12.
pub const DEFAULT_MAX_ITERS: usize = 100;

/// Errors for an invalid parameter set.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum ParamsError {
    #[error("invalid {name}")]
    Grid {
        name: &'static str,
        #[source]
        source: GridError,
    },

    #[error("invalid optimizer tolerance")]
    Tolerance(#[from] golden_section::ConfigError),

    #[error("risk aversion must be finite and non-negative, got {0}")]
    RiskAversion(f64),
}

/// Grids, optimizer settings, and the utility function for one model.
///
/// All validation happens in [`Params::new`]; the solvers assume a valid
/// parameter set and do not re-check it.
#[derive(Debug, Clone)]
pub struct Params<U = Crra> {
    grid_p: Array1<f64>,
    grid_m: Array1<f64>,
    grid_a: Array1<f64>,
    config: golden_section::Config,
    utility: U,
}

impl<U> Params<U> {
    /// Creates a parameter set.
    ///
    /// `tol` bounds the width of the final consumption bracket at each grid
    /// point.
    ///
    /// # Errors
    ///
    /// Returns an error if a grid is empty, non-finite, or not strictly
    /// increasing, if `grid_a` has fewer than two points, or if `tol` is
    /// negative or non-finite.
    pub fn new(
        grid_p: Array1<f64>,
        grid_m: Array1<f64>,
        grid_a: Array1<f64>,
        tol: f64,
        utility: U,
    ) -> Result<Self, ParamsError> {
        let check = |name, grid: &Array1<f64>, min_len| {
            check_increasing(grid.view(), min_len).map_err(|source| ParamsError::Grid { name, source })
        };
        check("grid_p", &grid_p, 1)?;
        check("grid_m", &grid_m, 1)?;
        check("grid_a", &grid_a, 2)?;

        Ok(Self {
            grid_p,
            grid_m,
            grid_a,
            config: golden_section::Config::absolute(DEFAULT_MAX_ITERS, tol)?,
            utility,
        })
    }

    /// Replaces the consumption search configuration.
    #[must_use]
    pub fn with_config(mut self, config: golden_section::Config) -> Self {
        self.config = config;
        self
    }

    /// Permanent-income grid.
    pub fn grid_p(&self) -> ArrayView1<'_, f64> {
        self.grid_p.view()
    }

    /// Cash-on-hand grid.
    pub fn grid_m(&self) -> ArrayView1<'_, f64> {
        self.grid_m.view()
    }

    /// End-of-period asset grid.
    pub fn grid_a(&self) -> ArrayView1<'_, f64> {
        self.grid_a.view()
    }

    #[must_use]
    pub fn np(&self) -> usize {
        self.grid_p.len()
    }

    #[must_use]
    pub fn nm(&self) -> usize {
        self.grid_m.len()
    }

    #[must_use]
    pub fn na(&self) -> usize {
        self.grid_a.len()
    }

    /// Absolute tolerance on the consumption bracket.
    #[must_use]
    pub fn tol(&self) -> f64 {
        self.config.x_abs_tol()
    }

    #[must_use]
    pub fn golden_config(&self) -> &golden_section::Config {
        &self.config
    }

    pub fn utility(&self) -> &U {
        &self.utility
    }

    /// Builds the continuation-value interpolant for one row of `w`.
    ///
    /// # Errors
    ///
    /// Returns an error if `w_row` does not match the asset grid.
    pub fn continuation(&self, w_row: ArrayView1<'_, f64>) -> Result<LinearInterp, InterpError> {
        LinearInterp::from_views(self.grid_a.view(), w_row)
    }
}

#[cfg(test)]
mod tests {
    use ndarray::array;

    use super::*;

    fn crra() -> Crra {
        Crra::new(2.0).unwrap()
    }

    #[test]
    fn accepts_valid_grids() {
        let par = Params::new(array![1.0], array![0.5, 1.0], array![0.0, 1.0], 1e-8, crra()).unwrap();

        assert_eq!((par.np(), par.nm(), par.na()), (1, 2, 2));
        assert_eq!(par.tol(), 1e-8);
        assert_eq!(par.golden_config().max_iters(), DEFAULT_MAX_ITERS);
    }

    #[test]
    fn names_the_offending_grid() {
        let err = Params::new(array![1.0], array![2.0, 1.0], array![0.0, 1.0], 1e-8, crra()).unwrap_err();

        assert_eq!(
            err,
            ParamsError::Grid {
                name: "grid_m",
                source: GridError::NotIncreasing { index: 1 },
            }
        );
    }

    #[test]
    fn asset_grid_needs_a_segment() {
        let err = Params::new(array![1.0], array![1.0], array![0.0], 1e-8, crra()).unwrap_err();

        assert!(matches!(err, ParamsError::Grid { name: "grid_a", .. }));
    }

    #[test]
    fn rejects_negative_tolerance() {
        let err = Params::new(array![1.0], array![1.0], array![0.0, 1.0], -1.0, crra()).unwrap_err();

        assert!(matches!(err, ParamsError::Tolerance(_)));
    }

    #[test]
    fn continuation_interpolates_over_asset_grid() {
        let par = Params::new(array![1.0], array![1.0], array![0.0, 2.0], 1e-8, crra()).unwrap();
        let w = array![[1.0, 5.0]];

        let interp = par.continuation(w.row(0)).unwrap();

        assert_eq!(interp.eval(1.0), 3.0);
    }
}
