//! An observer that bounds the number of iterations.

use descent_core::Observer;

use crate::traits::{CanStopEarly, HasIteration};

/// Stops a solver once a fixed number of iterations have completed.
///
/// The gradient-descent solvers have no outer iteration cap, so on problems
/// that are unbounded below they only stop when an observer says so.
///
/// # Example
///
/// ```rust
/// use descent_core::FnProblem;
/// use descent_observers::StopAfter;
/// use descent_solvers::optimization::{Status, gradient_backtracking};
/// use nalgebra::{DVector, dvector};
///
/// // Unbounded below: f(x) = x.
/// let problem = FnProblem::new(|x: &DVector<f64>| x[0], |_: &DVector<f64>| dvector![1.0]);
/// let config = gradient_backtracking::Config::default();
///
/// let solution =
///     gradient_backtracking::minimize(&problem, dvector![0.0], &config, StopAfter::new(50))
///         .unwrap();
///
/// assert_eq!(solution.status, Status::StoppedByObserver);
/// assert_eq!(solution.iters, 50);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StopAfter {
    max_iters: usize,
}

impl StopAfter {
    /// Creates an observer that stops the solver after `max_iters` iterations.
    #[must_use]
    pub fn new(max_iters: usize) -> Self {
        Self { max_iters }
    }

    /// Returns the iteration limit.
    #[must_use]
    pub fn max_iters(&self) -> usize {
        self.max_iters
    }
}

impl<E, A> Observer<E, A> for StopAfter
where
    E: HasIteration,
    A: CanStopEarly,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        (event.iteration() >= self.max_iters).then(A::stop_early)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Iter(usize);

    impl HasIteration for Iter {
        fn iteration(&self) -> usize {
            self.0
        }
    }

    #[derive(Debug, PartialEq)]
    struct Stop;

    impl CanStopEarly for Stop {
        fn stop_early() -> Self {
            Stop
        }
    }

    #[test]
    fn stops_at_the_limit() {
        let mut observer = StopAfter::new(3);

        let actions: Vec<Option<Stop>> = (1..=4).map(|k| observer.observe(&Iter(k))).collect();

        assert_eq!(actions, vec![None, None, Some(Stop), Some(Stop)]);
    }
}
