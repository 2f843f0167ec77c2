/// A callable model that maps a typed input to a typed output.
///
/// Models must be deterministic: the same input always produces the same
/// output. The solvers rely on this to reuse evaluations, and the parallel
/// kernels rely on it to produce identical results for any thread count.
pub trait Model {
    type Input;
    type Output;
    type Error: std::error::Error + Send + Sync + 'static;

    /// Calls the model with the given input.
    ///
    /// # Errors
    ///
    /// Each model defines its own `Error` type. Models that cannot fail use
    /// [`std::convert::Infallible`].
    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error>;
}

/// A captured input/output pair from a model call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Snapshot<I, O> {
    pub input: I,
    pub output: O,
}

impl<I, O> Snapshot<I, O> {
    /// Creates a new snapshot from input and output values.
    pub fn new(input: I, output: O) -> Self {
        Self { input, output }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::convert::Infallible;

    struct Square;

    impl Model for Square {
        type Input = f64;
        type Output = f64;
        type Error = Infallible;

        fn call(&self, x: &f64) -> Result<f64, Self::Error> {
            Ok(x * x)
        }
    }

    #[test]
    fn snapshot_captures_call() {
        let input = 3.0;
        let output = Square.call(&input).unwrap();
        let snap = Snapshot::new(input, output);

        assert_eq!(snap, Snapshot { input: 3.0, output: 9.0 });
    }
}
