//! Period utility functions.

use crate::ParamsError;

/// Utility of a consumption level.
///
/// Implementations carry their own parameters. Behaviour for `c <= 0` is up
/// to the implementation and usually non-finite.
pub trait Utility {
    fn utility(&self, c: f64) -> f64;
}

/// Any `Fn(f64) -> f64` is a utility function.
impl<F> Utility for F
where
    F: Fn(f64) -> f64,
{
    fn utility(&self, c: f64) -> f64 {
        self(c)
    }
}

/// Constant relative risk aversion utility, `c^(1-ρ) / (1-ρ)`.
///
/// The `ρ = 1` limit is `ln c`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Crra {
    rho: f64,
}

impl Crra {
    /// Creates a CRRA utility with risk aversion `rho`.
    ///
    /// # Errors
    ///
    /// Returns an error if `rho` is negative or non-finite.
    pub fn new(rho: f64) -> Result<Self, ParamsError> {
        if !rho.is_finite() || rho < 0.0 {
            return Err(ParamsError::RiskAversion(rho));
        }
        Ok(Self { rho })
    }

    #[must_use]
    pub fn rho(&self) -> f64 {
        self.rho
    }
}

impl Utility for Crra {
    #[inline]
    fn utility(&self, c: f64) -> f64 {
        if self.rho == 1.0 {
            c.ln()
        } else {
            c.powf(1.0 - self.rho) / (1.0 - self.rho)
        }
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn crra_with_rho_two_is_negative_reciprocal() {
        let u = Crra::new(2.0).unwrap();

        assert_relative_eq!(u.utility(2.0), -0.5);
        assert_relative_eq!(u.utility(0.25), -4.0);
    }

    #[test]
    fn crra_with_rho_one_is_log() {
        let u = Crra::new(1.0).unwrap();

        assert_relative_eq!(u.utility(std::f64::consts::E), 1.0);
    }

    #[test]
    fn crra_at_zero_consumption_is_not_finite() {
        let u = Crra::new(2.0).unwrap();

        assert_eq!(u.utility(0.0), f64::NEG_INFINITY);
    }

    #[test]
    fn rejects_invalid_risk_aversion() {
        assert!(matches!(Crra::new(-1.0), Err(ParamsError::RiskAversion(_))));
        assert!(Crra::new(f64::NAN).is_err());
    }

    #[test]
    fn closures_are_utilities() {
        let linear = |c: f64| 3.0 * c;

        assert_relative_eq!(linear.utility(2.0), 6.0);
    }
}
