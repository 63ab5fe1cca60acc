//! Newton's method with a backtracking line search.
//!
//! # Algorithm
//!
//! At each iterate `x` the solver factorizes the Hessian and solves
//! `H(x)·d = ∇f(x)` for the Newton direction `d`. A backtracking line search
//! starting from the full step `t = 1` shrinks the step by `beta` until
//!
//! ```text
//! f(x - t·d) <= f(x) - alpha · t · ∇f(x)ᵀd
//! ```
//!
//! and the iterate becomes `x - t·d`.
//!
//! On a strictly convex quadratic the full Newton step lands on the minimizer,
//! so the solver converges in a single iteration when `alpha <= 0.5`.
//!
//! # Termination
//!
//! - Converged once `‖∇f(x)‖ <= tolerance`.
//! - [`Status::MaxIters`] once [`Config::max_iters`] iterations have run with
//!   the tolerance unmet.
//! - [`Error::SingularHessian`] if the Hessian is singular or near-singular,
//!   meaning its smallest LU pivot magnitude is at most
//!   [`Config::pivot_tolerance`] times its largest.

mod config;
mod direction;
mod error;


pub use config::{Config, ConfigError};
pub use error::Error;

use descent_core::{Observer, TwiceDifferentiableProblem};
use nalgebra::DVector;
use tracing::{debug, warn};

use super::{
    Action, Evaluation, Event, Solution, Status, evaluate::evaluate, line_search::backtrack,
};
use direction::newton_direction;

/// Minimizes the objective using Newton's method with backtracking.
///
/// The observer receives an [`Event`] after every iteration.
///
/// # Errors
///
/// Returns an error if the problem fails to evaluate, if the Hessian is
/// singular at some iterate, or if a line search exhausts its budget.
pub fn minimize<P, Obs>(
    problem: &P,
    x0: DVector<f64>,
    config: &Config,
    mut observer: Obs,
) -> Result<Solution, Error>
where
    P: TwiceDifferentiableProblem,
    Obs: for<'a> Observer<Event<'a>, Action>,
{
    let backtracking = config.backtracking();
    let mut current = evaluate(problem, x0).map_err(Error::problem)?;
    let mut iters = 0;

    while !current.is_stationary(config.tolerance()) {
        if iters == config.max_iters() {
            warn!(
                iters,
                gradient_norm = current.gradient_norm(),
                objective = current.objective,
                "newton did not converge"
            );
            return Ok(Solution::from_evaluation(Status::MaxIters, current, iters));
        }
        iters += 1;

        let hessian = problem.hessian(&current.x).map_err(Error::problem)?;
        let direction = newton_direction(hessian, &current.gradient, config.pivot_tolerance())
            .ok_or(Error::SingularHessian { iter: iters })?;

        let slope = current.gradient.dot(&direction);
        let accepted = backtrack(
            problem,
            &current.x,
            &direction,
            current.objective,
            slope,
            1.0,
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
            "newton step accepted"
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
/// Returns an error if the problem fails to evaluate, if the Hessian is
/// singular at some iterate, or if a line search exhausts its budget.
pub fn minimize_unobserved<P>(
    problem: &P,
    x0: DVector<f64>,
    config: &Config,
) -> Result<Solution, Error>
where
    P: TwiceDifferentiableProblem,
{
    minimize(problem, x0, config, ())
}
