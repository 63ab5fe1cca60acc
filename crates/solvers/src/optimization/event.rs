use nalgebra::DVector;

/// Event emitted by the descent solvers once per outer iteration.
///
/// The event describes the state after the update: `x` is the new iterate,
/// and `objective` and `gradient_norm` are evaluated there. `step_size` is the
/// step accepted along the search direction to reach it.
#[derive(Debug, Clone, Copy)]
pub struct Event<'a> {
    /// The iteration number, starting at 1.
    pub iter: usize,

    /// The iterate after this iteration's update.
    pub x: &'a DVector<f64>,

    /// The objective value at `x`.
    pub objective: f64,

    /// The Euclidean norm of the gradient at `x`.
    pub gradient_norm: f64,

    /// The accepted step size.
    pub step_size: f64,
}
