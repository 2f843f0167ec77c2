//! Scalar objective minimization and maximization.
//!
//! An [`OptimizationProblem`] maps solver variables `x: [f64; N]` to model
//! inputs, and extracts a scalar objective from the model's input and output.
//! Solvers in this module search for the `x` that minimizes or maximizes that
//! objective.
//!
//! # Solvers
//!
//! - [`golden_section`]: derivative-free search over a bracketed interval for
//!   unimodal functions
//!
//! [`OptimizationProblem`]: bufferstock_core::OptimizationProblem

mod evaluate;

pub use evaluate::{EvalError, EvaluateResult, Evaluation, evaluate};

pub mod golden_section;
