use thiserror::Error;

/// Configuration for the golden section solver.
///
/// The search stops once the outer bracket width is at most
/// `x_abs_tol + x_rel_tol * |midpoint|`, or after `max_iters` shrinks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    max_iters: usize,
    x_abs_tol: f64,
    x_rel_tol: f64,
}

/// Errors that can occur when validating a golden section solver config.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum ConfigError {
    #[error("x_abs_tol must be finite and non-negative, got {0}")]
    XAbs(f64),

    #[error("x_rel_tol must be finite and non-negative, got {0}")]
    XRel(f64),
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_iters: 100,
            x_abs_tol: 1e-12,
            x_rel_tol: 1e-12,
        }
    }
}

impl Config {
    /// Creates a new config with validated tolerances.
    ///
    /// # Errors
    ///
    /// Returns an error if any tolerance is negative or non-finite.
    pub fn new(max_iters: usize, x_abs_tol: f64, x_rel_tol: f64) -> Result<Self, ConfigError> {
        if !x_abs_tol.is_finite() || x_abs_tol < 0.0 {
            return Err(ConfigError::XAbs(x_abs_tol));
        }
        if !x_rel_tol.is_finite() || x_rel_tol < 0.0 {
            return Err(ConfigError::XRel(x_rel_tol));
        }

        Ok(Self {
            max_iters,
            x_abs_tol,
            x_rel_tol,
        })
    }

    /// Creates a config that stops on an absolute bracket width only.
    ///
    /// # Errors
    ///
    /// Returns an error if `tol` is negative or non-finite.
    pub fn absolute(max_iters: usize, tol: f64) -> Result<Self, ConfigError> {
        Self::new(max_iters, tol, 0.0)
    }

    /// Returns the maximum number of shrink iterations.
    #[must_use]
    pub fn max_iters(&self) -> usize {
        self.max_iters
    }

    /// Returns the absolute tolerance on the bracket width.
    #[must_use]
    pub fn x_abs_tol(&self) -> f64 {
        self.x_abs_tol
    }

    /// Returns the relative tolerance on the bracket width.
    #[must_use]
    pub fn x_rel_tol(&self) -> f64 {
        self.x_rel_tol
    }

    /// Returns true if a bracket of `width` centred on `mid` is narrow enough.
    pub(super) fn is_within_tolerance(&self, width: f64, mid: f64) -> bool {
        width <= self.x_abs_tol + self.x_rel_tol * mid.abs()
    }
}
