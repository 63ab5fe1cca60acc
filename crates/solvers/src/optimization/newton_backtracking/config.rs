use thiserror::Error;

use crate::optimization::line_search::Backtracking;

/// Configuration for Newton's method with backtracking.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    alpha: f64,
    beta: f64,
    tolerance: f64,
    max_iters: usize,
    max_backtracks: usize,
    pivot_tolerance: f64,
}

/// Errors that can occur when validating a Newton config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("alpha must lie strictly between 0 and 1")]
    Alpha,

    #[error("beta must lie strictly between 0 and 1")]
    Beta,

    #[error("tolerance must be finite and positive")]
    Tolerance,

    #[error("pivot tolerance must lie in [0, 1)")]
    PivotTolerance,
}

impl Default for Config {
    fn default() -> Self {
        // Known-good values, unwrap is safe
        Self::new(0.25, 0.5, 1e-8).unwrap()
    }
}

impl Config {
    /// Default cap on outer iterations.
    pub const DEFAULT_MAX_ITERS: usize = 10_000;

    /// Default cap on step reductions per line search.
    pub const DEFAULT_MAX_BACKTRACKS: usize = 1000;

    /// Default relative pivot tolerance for rejecting near-singular Hessians.
    pub const DEFAULT_PIVOT_TOLERANCE: f64 = 1e-12;

    /// Creates a new config with validated parameters.
    ///
    /// - `alpha` is the sufficient-decrease fraction of the Armijo rule.
    /// - `beta` is the factor applied to the step at each backtrack.
    /// - `tolerance` stops the solver once `‖∇f(x)‖ <= tolerance`.
    ///
    /// The outer iteration cap starts at [`Self::DEFAULT_MAX_ITERS`].
    ///
    /// # Errors
    ///
    /// Returns an error if any parameter is out of range or non-finite.
    pub fn new(alpha: f64, beta: f64, tolerance: f64) -> Result<Self, ConfigError> {
        if !(alpha > 0.0 && alpha < 1.0) {
            return Err(ConfigError::Alpha);
        }
        if !(beta > 0.0 && beta < 1.0) {
            return Err(ConfigError::Beta);
        }
        if !tolerance.is_finite() || tolerance <= 0.0 {
            return Err(ConfigError::Tolerance);
        }

        Ok(Self {
            alpha,
            beta,
            tolerance,
            max_iters: Self::DEFAULT_MAX_ITERS,
            max_backtracks: Self::DEFAULT_MAX_BACKTRACKS,
            pivot_tolerance: Self::DEFAULT_PIVOT_TOLERANCE,
        })
    }

    /// Sets the maximum number of outer iterations.
    #[must_use]
    pub fn with_max_iters(mut self, max_iters: usize) -> Self {
        self.max_iters = max_iters;
        self
    }

    /// Sets the maximum number of step reductions per line search.
    #[must_use]
    pub fn with_max_backtracks(mut self, max_backtracks: usize) -> Self {
        self.max_backtracks = max_backtracks;
        self
    }

    /// Sets the relative pivot tolerance of the Hessian factorization.
    ///
    /// A Hessian whose smallest LU pivot magnitude is at most
    /// `pivot_tolerance` times its largest is treated as singular. Zero only
    /// rejects exactly singular factorizations.
    ///
    /// # Errors
    ///
    /// Returns an error unless `0 <= pivot_tolerance < 1`.
    pub fn with_pivot_tolerance(mut self, pivot_tolerance: f64) -> Result<Self, ConfigError> {
        if !(0.0..1.0).contains(&pivot_tolerance) {
            return Err(ConfigError::PivotTolerance);
        }
        self.pivot_tolerance = pivot_tolerance;
        Ok(self)
    }

    /// Returns the Armijo sufficient-decrease fraction.
    #[must_use]
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Returns the step reduction factor.
    #[must_use]
    pub fn beta(&self) -> f64 {
        self.beta
    }

    /// Returns the gradient-norm tolerance.
    #[must_use]
    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// Returns the maximum number of outer iterations.
    #[must_use]
    pub fn max_iters(&self) -> usize {
        self.max_iters
    }

    /// Returns the maximum number of step reductions per line search.
    #[must_use]
    pub fn max_backtracks(&self) -> usize {
        self.max_backtracks
    }

    /// Returns the relative pivot tolerance of the Hessian factorization.
    #[must_use]
    pub fn pivot_tolerance(&self) -> f64 {
        self.pivot_tolerance
    }

    pub(super) fn backtracking(&self) -> Backtracking {
        Backtracking {
            alpha: self.alpha,
            beta: self.beta,
            max_backtracks: self.max_backtracks,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn default_caps_iterations_at_ten_thousand() {
        let config = Config::default();
        assert_eq!(config.max_iters(), 10_000);
        assert_eq!(config.max_backtracks(), Config::DEFAULT_MAX_BACKTRACKS);
    }

    #[test]
    fn rejects_out_of_range_parameters() {
        assert_eq!(Config::new(-0.1, 0.5, 1e-8), Err(ConfigError::Alpha));
        assert_eq!(Config::new(0.25, 0.0, 1e-8), Err(ConfigError::Beta));
        assert_eq!(Config::new(0.25, 0.5, -1.0), Err(ConfigError::Tolerance));
        assert_eq!(
            Config::new(0.25, 0.5, f64::INFINITY),
            Err(ConfigError::Tolerance)
        );
    }

    #[test]
    fn pivot_tolerance_must_be_a_fraction() {
        let config = Config::default();
        assert_relative_eq!(config.pivot_tolerance(), 1e-12);
        assert_eq!(
            config.with_pivot_tolerance(-1e-3),
            Err(ConfigError::PivotTolerance)
        );
        assert_eq!(
            config.with_pivot_tolerance(1.0),
            Err(ConfigError::PivotTolerance)
        );
        assert_eq!(
            config.with_pivot_tolerance(f64::NAN),
            Err(ConfigError::PivotTolerance)
        );
        assert_relative_eq!(
            config.with_pivot_tolerance(0.0).unwrap().pivot_tolerance(),
            0.0
        );
    }

    #[test]
    fn builders_override_caps() {
        let config = Config::default().with_max_iters(5).with_max_backtracks(3);
        assert_eq!(config.max_iters(), 5);
        assert_eq!(config.backtracking().max_backtracks, 3);
    }
}
