//! Capability traits for cross-solver observers.
//!
//! Observers in this crate are written against these traits rather than a
//! concrete event type, so the same observer works with any solver whose
//! events and actions implement them. All four descent solvers share
//! [`Event`] and [`Action`], which implement every trait here.
//!
//! # Event traits
//!
//! - [`HasIteration`] — events tagged with a 1-based iteration number
//! - [`HasObjective`] — events that carry an objective value
//! - [`HasGradientNorm`] — events that carry a gradient norm
//! - [`HasStepSize`] — events that carry the accepted step size
//!
//! # Action traits
//!
//! - [`CanStopEarly`] — actions that can signal early termination
//!
//! # Example
//!
//! ```rust
//! use descent_core::Observer;
//! use descent_observers::traits::{CanStopEarly, HasGradientNorm};
//!
//! /// Stops once the gradient norm stalls between iterations.
//! struct Stalled {
//!     previous: f64,
//! }
//!
//! impl<E: HasGradientNorm, A: CanStopEarly> Observer<E, A> for Stalled {
//!     fn observe(&mut self, event: &E) -> Option<A> {
//!         let norm = event.gradient_norm();
//!         let stalled = (self.previous - norm).abs() < 1e-12;
//!         self.previous = norm;
//!         stalled.then(A::stop_early)
//!     }
//! }
//! ```
//!
//! [`Event`]: descent_solvers::optimization::Event
//! [`Action`]: descent_solvers::optimization::Action

use descent_solvers::optimization::{Action, Event};

/// An event tagged with the iteration that produced it.
pub trait HasIteration {
    /// Returns the 1-based iteration number.
    fn iteration(&self) -> usize;
}

/// An event that carries an objective value.
pub trait HasObjective {
    /// Returns the objective at the event's iterate.
    fn objective(&self) -> f64;
}

/// An event that carries a gradient norm.
pub trait HasGradientNorm {
    /// Returns the Euclidean norm of the gradient at the event's iterate.
    fn gradient_norm(&self) -> f64;
}

/// An event that carries the step size used to reach its iterate.
pub trait HasStepSize {
    fn step_size(&self) -> f64;
}

/// An action type that can signal early termination.
pub trait CanStopEarly {
    /// Returns the action that stops the solver early.
    fn stop_early() -> Self;
}

impl HasIteration for Event<'_> {
    fn iteration(&self) -> usize {
        self.iter
    }
}

impl HasObjective for Event<'_> {
    fn objective(&self) -> f64 {
        self.objective
    }
}

impl HasGradientNorm for Event<'_> {
    fn gradient_norm(&self) -> f64 {
        self.gradient_norm
    }
}

impl HasStepSize for Event<'_> {
    fn step_size(&self) -> f64 {
        self.step_size
    }
}

impl CanStopEarly for Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}
