use bufferstock_core::{Model, OptimizationProblem};

use crate::optimization::evaluate::evaluate;

use super::{Config, Error, Solution, Status, bracket::GoldenBracket, state::State};

/// Core golden section search implementation.
///
/// The `transform` function is applied to objective values before
/// comparison, allowing the same algorithm to handle both minimization
/// (transform = identity) and maximization (transform = negation).
pub(super) fn search<M, P, F>(
    model: &M,
    problem: &P,
    bounds: [f64; 2],
    config: &Config,
    transform: F,
) -> Result<Solution<M::Input, M::Output>, Error>
where
    M: Model,
    P: OptimizationProblem<1, Input = M::Input, Output = M::Output>,
    F: Fn(f64) -> f64,
{
    let mut state = State::init(model, problem, GoldenBracket::new(bounds), &transform)?;

    for iter in 0..config.max_iters() {
        if state.is_converged(config) {
            return Ok(state.into_solution(Status::Converged, iter));
        }

        let direction = state.next_shrink(&transform);
        let x = state.shrink(direction);
        let eval = evaluate(model, problem, [x])?;
        state.record(direction, eval, &transform);
    }

    let status = if state.is_converged(config) {
        Status::Converged
    } else {
        Status::MaxIters
    };
    Ok(state.into_solution(status, config.max_iters()))
}
