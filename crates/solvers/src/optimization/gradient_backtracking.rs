//! Gradient descent with a backtracking line search.
//!
//! # Algorithm
//!
//! From the current iterate `x`, the solver steps along the negative
//! gradient. Each step starts at the configured initial step `s` and is
//! multiplied by `beta` until the Armijo sufficient-decrease rule holds:
//!
//! ```text
//! f(x) - f(x - t·∇f(x)) >= alpha · t · ‖∇f(x)‖²
//! ```
//!
//! The iterate is replaced by `x - t·∇f(x)` and the loop repeats until
//! `‖∇f(x)‖ <= tolerance`.
//!
//! # Termination
//!
//! There is no cap on outer iterations. On an objective that is unbounded
//! below, or whose gradient never shrinks, the solver keeps iterating until an
//! observer returns [`Action::StopEarly`]. Each line search is capped at
//! [`Config::max_backtracks`] reductions and fails with
//! [`Error::LineSearch`] beyond that.
//!
//! # Observer Events
//!
//! The solver emits one [`Event`] per iteration, after the update.

mod config;
mod error;


pub use config::{Config, ConfigError};
pub use error::Error;

use descent_core::{DifferentiableProblem, Observer};
use nalgebra::DVector;
use tracing::debug;

use super::{
    Action, Evaluation, Event, Solution, Status, evaluate::evaluate, line_search::backtrack,
};

/// Minimizes the objective using gradient descent with backtracking.
///
/// The observer receives an [`Event`] after every iteration.
///
/// # Errors
///
/// Returns an error if the problem fails to evaluate at any point, or if a
/// line search exhausts its backtracking budget.
pub fn minimize<P, Obs>(
    problem: &P,
    x0: DVector<f64>,
    config: &Config,
    mut observer: Obs,
) -> Result<Solution, Error>
where
    P: DifferentiableProblem,
    Obs: for<'a> Observer<Event<'a>, Action>,
{
    let backtracking = config.backtracking();
    let mut current = evaluate(problem, x0).map_err(Error::problem)?;
    let mut iters = 0;

    while !current.is_stationary(config.tolerance()) {
        iters += 1;

        let slope = current.gradient.norm_squared();
        let accepted = backtrack(
            problem,
            &current.x,
            &current.gradient,
            current.objective,
            slope,
            config.initial_step(),
            &backtracking,
        )?;

        let gradient = problem.gradient(&accepted.x).map_err(Error::problem)?;
        current = Evaluation {
            x: accepted.x,
            objective: accepted.objective,
            gradient,
        };

        let gradient_norm = current.gradient_norm();
        debug!(
            iter = iters,
            step_size = accepted.step_size,
            backtracks = accepted.backtracks,
            gradient_norm,
            objective = current.objective,
            "gradient step accepted"
        );

        let event = Event {
            iter: iters,
            x: &current.x,
            objective: current.objective,
            gradient_norm,
            step_size: accepted.step_size,
        };
        if let Some(Action::StopEarly) = observer.observe(&event) {
            return Ok(Solution::from_evaluation(
                Status::StoppedByObserver,
                current,
                iters,
            ));
        }
    }

    Ok(Solution::from_evaluation(Status::Converged, current, iters))
}

/// Minimizes the objective without observer support.
///
/// This is a convenience wrapper around [`minimize`] that uses a no-op observer.
///
/// # Errors
///
/// Returns an error if the problem fails to evaluate at any point, or if a
/// line search exhausts its backtracking budget.
pub fn minimize_unobserved<P>(
    problem: &P,
    x0: DVector<f64>,
    config: &Config,
) -> Result<Solution, Error>
where
    P: DifferentiableProblem,
{
    minimize(problem, x0, config, ())
}
