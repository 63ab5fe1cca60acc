use nalgebra::{DMatrix, DVector};

/// Defines a smooth minimization problem with a first derivative.
///
/// Solvers call [`objective`](Self::objective) and
/// [`gradient`](Self::gradient) repeatedly at trial points and rely on both
/// being pure: the same `x` must always produce the same result.
///
/// The dimension of `x` is fixed by the starting point handed to the solver.
/// Implementations may assume every `x` they receive has that dimension.
pub trait DifferentiableProblem {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Evaluates the objective `f(x)`.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if the objective cannot be computed at `x`.
    fn objective(&self, x: &DVector<f64>) -> Result<f64, Self::Error>;

    /// Evaluates the gradient `∇f(x)`, a vector with the same dimension as `x`.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if the gradient cannot be computed at `x`.
    fn gradient(&self, x: &DVector<f64>) -> Result<DVector<f64>, Self::Error>;
}

/// Defines a smooth minimization problem with first and second derivatives.
///
/// Newton-type solvers need the Hessian to build a search direction. The
/// returned matrix is expected to be square, symmetric, and positive definite
/// near the iterates for the Newton direction to be a descent direction.
pub trait TwiceDifferentiableProblem: DifferentiableProblem {
    /// Evaluates the Hessian `∇²f(x)`, an `n × n` matrix.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if the Hessian cannot be computed at `x`.
    fn hessian(&self, x: &DVector<f64>) -> Result<DMatrix<f64>, Self::Error>;
}
