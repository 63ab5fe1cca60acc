use nalgebra::DVector;

use descent_core::DifferentiableProblem;

/// The objective and gradient of a problem at a given `x`.
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    pub x: DVector<f64>,

    pub objective: f64,

    pub gradient: DVector<f64>,
}

impl Evaluation {
    /// Returns the Euclidean norm of the gradient.
    #[must_use]
    pub fn gradient_norm(&self) -> f64 {
        self.gradient.norm()
    }

    /// Returns true if the gradient norm is at most `tolerance`.
    ///
    /// A non-finite gradient is never stationary.
    #[must_use]
    pub fn is_stationary(&self, tolerance: f64) -> bool {
        self.gradient_norm() <= tolerance
    }
}

/// Evaluates the objective and gradient of a problem at `x`.
///
/// # Errors
///
/// Returns the problem's error if the objective or gradient fails.
pub fn evaluate<P>(problem: &P, x: DVector<f64>) -> Result<Evaluation, P::Error>
where
    P: DifferentiableProblem,
{
    let objective = problem.objective(&x)?;
    let gradient = problem.gradient(&x)?;

    Ok(Evaluation {
        x,
        objective,
        gradient,
    })
}
