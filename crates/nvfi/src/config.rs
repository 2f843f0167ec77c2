//! Model calibration loaded from TOML.

use bufferstock_solvers::optimization::golden_section;
use serde::Deserialize;
use thiserror::Error;

use crate::{
    Crra, Params, ParamsError, Solution,
    grid::{GridError, nonlinspace},
};

/// Errors that can occur when loading a calibration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse calibration")]
    Parse(#[from] toml::de::Error),

    #[error("invalid {name} grid bounds")]
    Grid {
        name: &'static str,
        #[source]
        source: GridError,
    },

    #[error(transparent)]
    Params(#[from] ParamsError),
}

/// Horizon, preferences, and grid layout of the buffer-stock model.
///
/// Missing fields take the values of [`Calibration::default`].
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Calibration {
    /// Number of periods.
    pub periods: usize,

    /// Relative risk aversion.
    pub rho: f64,

    pub np: usize,
    pub p_min: f64,
    pub p_max: f64,

    pub nm: usize,
    pub m_min: f64,
    pub m_max: f64,

    /// The asset grid starts at zero.
    pub na: usize,
    pub a_max: f64,

    /// Curvature of every grid (see [`nonlinspace`]).
    pub phi: f64,

    /// Width of the final consumption bracket.
    pub tol: f64,

    /// Shrink budget for each consumption search.
    pub max_iters: usize,
}

impl Default for Calibration {
    fn default() -> Self {
        Self {
            periods: 5,
            rho: 2.0,
            np: 50,
            p_min: 1e-4,
            p_max: 3.0,
            nm: 100,
            m_min: 1e-6,
            m_max: 10.0,
            na: 100,
            a_max: 11.0,
            phi: 1.1,
            tol: 1e-8,
            max_iters: crate::params::DEFAULT_MAX_ITERS,
        }
    }
}

impl Calibration {
    /// Parses a calibration from TOML.
    ///
    /// # Errors
    ///
    /// Returns an error for malformed TOML or unknown keys.
    pub fn from_toml(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Builds the grids and utility described by this calibration.
    ///
    /// # Errors
    ///
    /// Returns an error if any grid cannot be built or the parameters are
    /// invalid.
    pub fn params(&self) -> Result<Params<Crra>, ConfigError> {
        let grid = |name, min, max, n| {
            nonlinspace(min, max, n, self.phi).map_err(|source| ConfigError::Grid { name, source })
        };

        let config = golden_section::Config::absolute(self.max_iters, self.tol).map_err(ParamsError::from)?;
        let params = Params::new(
            grid("grid_p", self.p_min, self.p_max, self.np)?,
            grid("grid_m", self.m_min, self.m_max, self.nm)?,
            grid("grid_a", 0.0, self.a_max, self.na)?,
            self.tol,
            Crra::new(self.rho)?,
        )?;

        Ok(params.with_config(config))
    }

    /// Allocates a solution for this calibration's horizon and grids.
    #[must_use]
    pub fn solution(&self) -> Solution {
        Solution::new(self.periods, self.np, self.nm, self.na)
    }
}
