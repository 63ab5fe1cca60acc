//! Solvers for unconstrained minimization of smooth objectives.
//!
//! A [`DifferentiableProblem`] supplies `f(x)` and `∇f(x)` at `nalgebra`
//! vectors; a [`TwiceDifferentiableProblem`] adds the Hessian. The quadratic
//! solvers work on a [`QuadraticForm`] directly.
//!
//! # Solvers
//!
//! - [`gradient_backtracking`] — gradient descent with an Armijo backtracking
//!   line search
//! - [`quadratic`] — gradient descent with the exact step for `xᵀAx + 2bᵀx`,
//!   plain ([`quadratic::minimize`]) or scaled by a matrix `D`
//!   ([`quadratic::minimize_scaled`])
//! - [`newton_backtracking`] — Newton's method with an Armijo backtracking
//!   line search and an outer iteration cap
//!
//! # Observer Events
//!
//! Every solver emits one [`Event`] per outer iteration, after the iterate has
//! been updated. Events carry the iteration number, the new iterate, its
//! objective and gradient norm, and the accepted step size. Observers can
//! return [`Action::StopEarly`] to halt immediately with
//! [`Status::StoppedByObserver`].
//!
//! [`DifferentiableProblem`]: descent_core::DifferentiableProblem
//! [`TwiceDifferentiableProblem`]: descent_core::TwiceDifferentiableProblem
//! [`QuadraticForm`]: descent_core::QuadraticForm

mod action;
mod evaluate;
mod event;
mod line_search;
mod solution;

pub use action::Action;
pub use evaluate::{Evaluation, evaluate};
pub use event::Event;
pub use line_search::LineSearchFailure;
pub use solution::{Solution, Status};

pub mod gradient_backtracking;
pub mod newton_backtracking;
pub mod quadratic;
