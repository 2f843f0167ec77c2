/// Defines an optimization problem over `N` solver variables.
///
/// A problem maps solver variables to a model input, then computes an
/// objective value from the model input and output. Whether the solver
/// minimizes or maximizes that objective is chosen by the solver entry point,
/// not by the problem.
///
/// Any fixed data the objective needs (grids, parameters, the current state)
/// belongs on the implementing type, so one search routine serves every
/// objective without modification.
pub trait OptimizationProblem<const N: usize> {
    type Input;
    type Output;
    type Error: std::error::Error + Send + Sync + 'static;

    /// Maps solver variables (`x`) into a model input.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if the input cannot be constructed from `x`.
    fn input(&self, x: &[f64; N]) -> Result<Self::Input, Self::Error>;

    /// Computes an objective value from model input/output.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if the objective cannot be computed.
    fn objective(&self, input: &Self::Input, output: &Self::Output) -> Result<f64, Self::Error>;
}
