use nalgebra::DVector;

use super::Evaluation;

/// Indicates how the solver terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// The gradient norm met the configured tolerance.
    Converged,

    /// Reached the iteration limit without meeting the tolerance.
    MaxIters,

    /// Stopped early due to an observer decision.
    StoppedByObserver,
}

/// The result of a descent solve.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    /// Final solver status.
    pub status: Status,

    /// The final iterate.
    pub x: DVector<f64>,

    /// Objective value at `x`.
    pub objective: f64,

    /// Gradient norm at `x`.
    pub gradient_norm: f64,

    /// Number of outer iterations performed.
    pub iters: usize,
}

impl Solution {
    pub(crate) fn from_evaluation(status: Status, eval: Evaluation, iters: usize) -> Self {
        let gradient_norm = eval.gradient_norm();
        Self {
            status,
            x: eval.x,
            objective: eval.objective,
            gradient_norm,
            iters,
        }
    }

    /// Returns true if the solver stopped because the tolerance was met.
    #[must_use]
    pub fn is_converged(&self) -> bool {
        self.status == Status::Converged
    }
}
