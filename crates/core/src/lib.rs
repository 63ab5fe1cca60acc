//! Core traits and types for the descent solvers.
//!
//! This crate defines the shared abstractions that solvers and observers
//! build on:
//!
//! - [`Observer`] — receives solver events and optionally returns control actions
//! - [`DifferentiableProblem`], [`TwiceDifferentiableProblem`] — objectives with
//!   first (and second) derivatives, evaluated at `nalgebra` vectors
//! - [`FnProblem`] — adapts plain closures into a problem
//! - [`QuadraticForm`] — the analytic objective `xᵀAx + 2bᵀx`

mod observer;
mod problems;
mod quadratic;

pub use observer::Observer;
pub use problems::{
    DifferentiableProblem, FnProblem, FnProblemWithHessian, TwiceDifferentiableProblem,
};
pub use quadratic::QuadraticForm;
