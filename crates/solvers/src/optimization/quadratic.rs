//! Gradient descent with an exact line search for quadratic objectives.
//!
//! # Algorithm
//!
//! For `f(x) = xᵀAx + 2bᵀx` with `A` symmetric positive definite, the gradient
//! is `2(Ax + b)` and the minimum of `f` along any direction has a closed form.
//! Each iteration picks a direction `d`, takes the exact step
//!
//! ```text
//! t = ∇f(x)ᵀd / (2·dᵀAd)
//! ```
//!
//! and updates `x ← x - t·d`, until `‖∇f(x)‖ <= tolerance`.
//!
//! - [`minimize`] uses `d = ∇f(x)`, so `t = ‖∇f‖² / (2·∇fᵀA∇f)`.
//! - [`minimize_scaled`] uses `d = D·∇f(x)` for a caller-supplied scaling
//!   matrix `D`. With `D = A⁻¹` a single step reaches the minimizer.
//!
//! # Domain Checks
//!
//! Positive definiteness is never checked up front. Instead each step checks
//! the curvature `dᵀAd` and the slope `∇fᵀd`, failing with
//! [`Error::NotPositiveDefinite`] or [`Error::NotDescentDirection`] rather
//! than dividing by a non-positive number.
//!
//! # Observer Events
//!
//! The solver emits one [`Event`] per iteration, after the update.

mod config;
mod error;
mod step;


pub use config::{Config, ConfigError};
pub use error::Error;

use descent_core::{Observer, QuadraticForm};
use nalgebra::{DMatrix, DVector};
use tracing::debug;

use super::{Action, Evaluation, Event, Solution, Status};

use step::exact_step;

/// Minimizes `xᵀAx + 2bᵀx` by steepest descent with exact steps.
///
/// The observer receives an [`Event`] after every iteration.
///
/// # Errors
///
/// Returns [`Error::NotPositiveDefinite`] if the curvature along a gradient
/// is not strictly positive, or [`Error::NotDescentDirection`] if the slope
/// `‖∇f‖²` is NaN because the form produced a NaN gradient.
pub fn minimize<Obs>(
    form: &QuadraticForm,
    x0: DVector<f64>,
    config: &Config,
    observer: Obs,
) -> Result<Solution, Error>
where
    Obs: for<'a> Observer<Event<'a>, Action>,
{
    descend(form, x0, config, observer, DVector::clone)
}

/// Minimizes `xᵀAx + 2bᵀx` without observer support.
///
/// This is a convenience wrapper around [`minimize`] that uses a no-op observer.
///
/// # Errors
///
/// Returns [`Error::NotPositiveDefinite`] if the curvature along a gradient
/// is not strictly positive, or [`Error::NotDescentDirection`] if the slope
/// `‖∇f‖²` is NaN because the form produced a NaN gradient.
pub fn minimize_unobserved(
    form: &QuadraticForm,
    x0: DVector<f64>,
    config: &Config,
) -> Result<Solution, Error> {
    minimize(form, x0, config, ())
}

/// Minimizes `xᵀAx + 2bᵀx` by descent along `D·∇f(x)` with exact steps.
///
/// `scaling` is the `n × n` matrix `D`. It is not validated; a `D` that is not
/// positive definite surfaces as an error from the first step it breaks.
///
/// # Errors
///
/// Returns [`Error::NotDescentDirection`] if `∇fᵀD∇f` is not strictly
/// positive, or [`Error::NotPositiveDefinite`] if the curvature along `D·∇f`
/// is not strictly positive.
pub fn minimize_scaled<Obs>(
    form: &QuadraticForm,
    scaling: &DMatrix<f64>,
    x0: DVector<f64>,
    config: &Config,
    observer: Obs,
) -> Result<Solution, Error>
where
    Obs: for<'a> Observer<Event<'a>, Action>,
{
    descend(form, x0, config, observer, |gradient| scaling * gradient)
}

/// Minimizes `xᵀAx + 2bᵀx` along `D·∇f(x)` without observer support.
///
/// This is a convenience wrapper around [`minimize_scaled`] that uses a no-op
/// observer.
///
/// # Errors
///
/// Returns [`Error::NotDescentDirection`] or [`Error::NotPositiveDefinite`]
/// as described for [`minimize_scaled`].
pub fn minimize_scaled_unobserved(
    form: &QuadraticForm,
    scaling: &DMatrix<f64>,
    x0: DVector<f64>,
    config: &Config,
) -> Result<Solution, Error> {
    minimize_scaled(form, scaling, x0, config, ())
}

/// Core exact-step descent loop.
///
/// The `direction` function maps the gradient to the search direction,
/// letting the same loop serve plain and scaled descent.
fn descend<Obs, D>(
    form: &QuadraticForm,
    x0: DVector<f64>,
    config: &Config,
    mut observer: Obs,
    direction: D,
) -> Result<Solution, Error>
where
    Obs: for<'a> Observer<Event<'a>, Action>,
    D: Fn(&DVector<f64>) -> DVector<f64>,
{
    let mut current = evaluate(form, x0);
    let mut iters = 0;

    while !current.is_stationary(config.tolerance()) {
        iters += 1;

        let d = direction(&current.gradient);
        let step_size = exact_step(form, &current.gradient, &d)?;

        current = evaluate(form, &current.x - step_size * d);

        let gradient_norm = current.gradient_norm();
        debug!(
            iter = iters,
            step_size,
            gradient_norm,
            objective = current.objective,
            "exact step taken"
        );

        let event = Event {
            iter: iters,
            x: &current.x,
            objective: current.objective,
            gradient_norm,
            step_size,
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

fn evaluate(form: &QuadraticForm, x: DVector<f64>) -> Evaluation {
    Evaluation {
        objective: form.value(&x),
        gradient: form.gradient(&x),
        x,
    }
}
