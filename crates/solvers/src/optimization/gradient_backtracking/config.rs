use thiserror::Error;

use crate::optimization::line_search::Backtracking;

/// Configuration for gradient descent with backtracking.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    initial_step: f64,
    alpha: f64,
    beta: f64,
    tolerance: f64,
    max_backtracks: usize,
}

/// Errors that can occur when validating a backtracking gradient config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("initial_step must be finite and positive")]
    InitialStep,

    #[error("alpha must lie strictly between 0 and 1")]
    Alpha,

    #[error("beta must lie strictly between 0 and 1")]
    Beta,

    #[error("tolerance must be finite and positive")]
    Tolerance,
}

impl Default for Config {
    fn default() -> Self {
        // Known-good values, unwrap is safe
        Self::new(2.0, 0.25, 0.5, 1e-5).unwrap()
    }
}

impl Config {
    /// Default cap on step reductions per line search.
    pub const DEFAULT_MAX_BACKTRACKS: usize = 1000;

    /// Creates a new config with validated parameters.
    ///
    /// - `initial_step` (`s`) is the first trial step of every line search.
    /// - `alpha` is the sufficient-decrease fraction of the Armijo rule.
    /// - `beta` is the factor applied to the step at each backtrack.
    /// - `tolerance` (`epsilon`) stops the solver once `‖∇f(x)‖ <= tolerance`.
    ///
    /// # Errors
    ///
    /// Returns an error if any parameter is out of range or non-finite.
    pub fn new(
        initial_step: f64,
        alpha: f64,
        beta: f64,
        tolerance: f64,
    ) -> Result<Self, ConfigError> {
        if !initial_step.is_finite() || initial_step <= 0.0 {
            return Err(ConfigError::InitialStep);
        }
        if !is_unit_open(alpha) {
            return Err(ConfigError::Alpha);
        }
        if !is_unit_open(beta) {
            return Err(ConfigError::Beta);
        }
        if !tolerance.is_finite() || tolerance <= 0.0 {
            return Err(ConfigError::Tolerance);
        }

        Ok(Self {
            initial_step,
            alpha,
            beta,
            tolerance,
            max_backtracks: Self::DEFAULT_MAX_BACKTRACKS,
        })
    }

    /// Sets the maximum number of step reductions per line search.
    #[must_use]
    pub fn with_max_backtracks(mut self, max_backtracks: usize) -> Self {
        self.max_backtracks = max_backtracks;
        self
    }

    /// Returns the initial trial step.
    #[must_use]
    pub fn initial_step(&self) -> f64 {
        self.initial_step
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

    /// Returns the maximum number of step reductions per line search.
    #[must_use]
    pub fn max_backtracks(&self) -> usize {
        self.max_backtracks
    }

    pub(super) fn backtracking(&self) -> Backtracking {
        Backtracking {
            alpha: self.alpha,
            beta: self.beta,
            max_backtracks: self.max_backtracks,
        }
    }
}

fn is_unit_open(value: f64) -> bool {
    value > 0.0 && value < 1.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        let config = Config::default();
        assert_eq!(config.max_backtracks(), Config::DEFAULT_MAX_BACKTRACKS);
        assert!(config.tolerance() > 0.0);
    }

    #[test]
    fn rejects_out_of_range_parameters() {
        assert_eq!(
            Config::new(0.0, 0.1, 0.5, 1e-6),
            Err(ConfigError::InitialStep)
        );
        assert_eq!(
            Config::new(f64::INFINITY, 0.1, 0.5, 1e-6),
            Err(ConfigError::InitialStep)
        );
        assert_eq!(Config::new(1.0, 0.0, 0.5, 1e-6), Err(ConfigError::Alpha));
        assert_eq!(Config::new(1.0, 1.0, 0.5, 1e-6), Err(ConfigError::Alpha));
        assert_eq!(Config::new(1.0, 0.1, 1.0, 1e-6), Err(ConfigError::Beta));
        assert_eq!(Config::new(1.0, 0.1, f64::NAN, 1e-6), Err(ConfigError::Beta));
        assert_eq!(Config::new(1.0, 0.1, 0.5, 0.0), Err(ConfigError::Tolerance));
        assert_eq!(
            Config::new(1.0, 0.1, 0.5, f64::NAN),
            Err(ConfigError::Tolerance)
        );
    }

    #[test]
    fn with_max_backtracks_overrides_default() {
        let config = Config::new(1.0, 0.1, 0.5, 1e-6)
            .unwrap()
            .with_max_backtracks(7);

        assert_eq!(config.max_backtracks(), 7);
        assert_eq!(config.backtracking().max_backtracks, 7);
    }
}
