use bufferstock_core::{Model, OptimizationProblem, Snapshot};

use crate::optimization::evaluate::{Evaluation, evaluate};

use super::bracket::GoldenBracket;
use super::{Config, Error, Point, Solution, Status};

/// Which side of the bracket to discard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Shrink {
    /// Discard `[left, inner_left)`; the next probe is the new `inner_right`.
    Left,

    /// Discard `(inner_right, right]`; the next probe is the new `inner_left`.
    Right,
}

/// Search state: the bracket, its two evaluated interior points, and the best
/// evaluation seen so far.
pub(super) struct State<I, O> {
    bracket: GoldenBracket,
    left: Point,
    right: Point,
    best: Point,
    best_snapshot: Snapshot<I, O>,
}

impl<I, O> State<I, O> {
    /// Evaluates both interior points of `bracket`.
    pub(super) fn init<M, P, F>(
        model: &M,
        problem: &P,
        bracket: GoldenBracket,
        transform: &F,
    ) -> Result<Self, Error>
    where
        M: Model<Input = I, Output = O>,
        P: OptimizationProblem<1, Input = I, Output = O>,
        F: Fn(f64) -> f64,
    {
        let left_eval = evaluate(model, problem, [bracket.inner_left])?;
        let right_eval = evaluate(model, problem, [bracket.inner_right])?;

        let left = Point::from(&left_eval);
        let right = Point::from(&right_eval);

        let (best, best_snapshot) = if improves(right.objective, left.objective, transform) {
            (right, right_eval.snapshot)
        } else {
            (left, left_eval.snapshot)
        };

        Ok(Self {
            bracket,
            left,
            right,
            best,
            best_snapshot,
        })
    }

    /// Pure query: which side to discard given the interior objectives.
    ///
    /// Ties discard the right side, as does a NaN on both sides.
    pub(super) fn next_shrink<F: Fn(f64) -> f64>(&self, transform: &F) -> Shrink {
        if improves(self.right.objective, self.left.objective, transform) {
            Shrink::Left
        } else {
            Shrink::Right
        }
    }

    /// Shrinks the bracket and returns the x that must be evaluated next.
    pub(super) fn shrink(&mut self, direction: Shrink) -> f64 {
        match direction {
            Shrink::Right => {
                self.bracket.shrink_right();
                self.right = self.left;
                self.bracket.inner_left
            }
            Shrink::Left => {
                self.bracket.shrink_left();
                self.left = self.right;
                self.bracket.inner_right
            }
        }
    }

    /// Stores the evaluation of the probe created by `direction`.
    pub(super) fn record<F: Fn(f64) -> f64>(
        &mut self,
        direction: Shrink,
        eval: Evaluation<I, O, 1>,
        transform: &F,
    ) {
        let point = Point::from(&eval);
        match direction {
            Shrink::Right => self.left = point,
            Shrink::Left => self.right = point,
        }

        if improves(point.objective, self.best.objective, transform) {
            self.best = point;
            self.best_snapshot = eval.snapshot;
        }
    }

    pub(super) fn is_converged(&self, config: &Config) -> bool {
        config.is_within_tolerance(self.bracket.width(), self.bracket.midpoint())
    }

    pub(super) fn into_solution(self, status: Status, iters: usize) -> Solution<I, O> {
        Solution {
            status,
            x: self.best.x,
            objective: self.best.objective,
            snapshot: self.best_snapshot,
            iters,
        }
    }
}

/// Whether `candidate` is strictly better than `incumbent`.
///
/// A NaN candidate never improves; a NaN incumbent loses to anything else.
fn improves<F: Fn(f64) -> f64>(candidate: f64, incumbent: f64, transform: &F) -> bool {
    let (candidate, incumbent) = (transform(candidate), transform(incumbent));
    candidate < incumbent || (incumbent.is_nan() && !candidate.is_nan())
}
