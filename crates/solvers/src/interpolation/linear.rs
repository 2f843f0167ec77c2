use bufferstock_core::Model;
use ndarray::{Array1, ArrayView1};
use ninterp::{
    interpolator::Extrapolate,
    prelude::{Interp1DOwned, Interpolator},
    strategy::Linear,
};

use super::error::InterpError;

/// Linear interpolant with linear extrapolation beyond the grid.
pub struct LinearInterp(Interp1DOwned<f64, Linear>);

impl LinearInterp {
    /// Creates an interpolant of `f_x` sampled at `x`.
    ///
    /// # Errors
    ///
    /// Returns an error if `x` is not strictly increasing, has fewer than two
    /// points, or if `x` and `f_x` differ in length.
    pub fn new(x: Array1<f64>, f_x: Array1<f64>) -> Result<Self, InterpError> {
        Ok(Self(Interp1DOwned::new(x, f_x, Linear, Extrapolate::Enable)?))
    }

    /// Creates an interpolant from borrowed views, copying the data.
    ///
    /// # Errors
    ///
    /// See [`LinearInterp::new`].
    pub fn from_views(x: ArrayView1<'_, f64>, f_x: ArrayView1<'_, f64>) -> Result<Self, InterpError> {
        Self::new(x.to_owned(), f_x.to_owned())
    }

    /// Evaluates the interpolant at `x`.
    ///
    /// # Errors
    ///
    /// Returns an error if the query cannot be evaluated (for example, a NaN
    /// query point).
    pub fn try_eval(&self, x: f64) -> Result<f64, InterpError> {
        self.0.interpolate(&[x]).map_err(Into::into)
    }

    /// Evaluates the interpolant at `x`, yielding NaN where evaluation fails.
    #[must_use]
    pub fn eval(&self, x: f64) -> f64 {
        self.try_eval(x).unwrap_or(f64::NAN)
    }
}

impl Model for LinearInterp {
    type Input = f64;
    type Output = f64;
    type Error = InterpError;

    fn call(&self, input: &f64) -> Result<f64, Self::Error> {
        self.try_eval(*input)
    }
}
