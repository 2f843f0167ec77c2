use std::convert::Infallible;

use bufferstock_core::{Model, OptimizationProblem};
use bufferstock_solvers::interpolation::LinearInterp;

use crate::{Params, Utility};

/// The parts of the value of one consumption choice.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChoiceValue {
    /// End-of-period assets, `m - c`.
    pub assets: f64,

    /// Period utility of consumption.
    pub utility: f64,

    /// Continuation value at `assets`.
    pub continuation: f64,
}

impl ChoiceValue {
    #[must_use]
    pub fn total(&self) -> f64 {
        self.utility + self.continuation
    }
}

/// Evaluates utility plus continuation value of consuming `c` out of `m`.
///
/// `w` interpolates the continuation values of the current permanent-income
/// row over the asset grid (see [`Params::continuation`]).
pub fn value_of_choice<U: Utility>(c: f64, m: f64, w: &LinearInterp, par: &Params<U>) -> ChoiceValue {
    let assets = m - c;
    ChoiceValue {
        assets,
        utility: par.utility().utility(c),
        continuation: w.eval(assets),
    }
}

/// Negated value of consuming `c` out of `m`; the quantity the search minimizes.
pub fn bellman_objective<U: Utility>(c: f64, m: f64, w: &LinearInterp, par: &Params<U>) -> f64 {
    -value_of_choice(c, m, w, par).total()
}

/// The consumption choice at one cash-on-hand level as a searchable problem.
///
/// Serves as both the [`Model`] (consumption to [`ChoiceValue`]) and the
/// [`OptimizationProblem`] (negated total value) for golden section search.
pub struct BellmanObjective<'a, U> {
    m: f64,
    w: &'a LinearInterp,
    par: &'a Params<U>,
}

impl<'a, U> BellmanObjective<'a, U> {
    #[must_use]
    pub fn new(m: f64, w: &'a LinearInterp, par: &'a Params<U>) -> Self {
        Self { m, w, par }
    }
}

impl<U: Utility> Model for BellmanObjective<'_, U> {
    type Input = f64;
    type Output = ChoiceValue;
    type Error = Infallible;

    fn call(&self, c: &f64) -> Result<ChoiceValue, Self::Error> {
        Ok(value_of_choice(*c, self.m, self.w, self.par))
    }
}

impl<U: Utility> OptimizationProblem<1> for BellmanObjective<'_, U> {
    type Input = f64;
    type Output = ChoiceValue;
    type Error = Infallible;

    fn input(&self, x: &[f64; 1]) -> Result<f64, Self::Error> {
        Ok(x[0])
    }

    fn objective(&self, _c: &f64, value: &ChoiceValue) -> Result<f64, Self::Error> {
        Ok(-value.total())
    }
}
