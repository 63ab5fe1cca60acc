use std::convert::Infallible;

use nalgebra::{DMatrix, DVector};

use crate::{DifferentiableProblem, TwiceDifferentiableProblem};

/// The quadratic objective `f(x) = xᵀAx + 2bᵀx`.
///
/// `A` is an `n × n` matrix, expected to be symmetric positive definite, and
/// `b` an `n`-vector. The gradient `2(Ax + b)` and Hessian `2A` are analytic,
/// so no callables are needed.
///
/// Positive definiteness is not checked on construction. Solvers that depend
/// on it check the curvature along each search direction instead.
#[derive(Debug, Clone, PartialEq)]
pub struct QuadraticForm {
    a: DMatrix<f64>,
    b: DVector<f64>,
}

impl QuadraticForm {
    /// Creates the quadratic form `xᵀAx + 2bᵀx`.
    ///
    /// # Panics
    ///
    /// Panics if `a` is not square or if `b` does not match its dimension.
    #[must_use]
    pub fn new(a: DMatrix<f64>, b: DVector<f64>) -> Self {
        assert!(a.is_square(), "quadratic matrix must be square");
        assert_eq!(a.nrows(), b.len(), "linear term must match matrix dimension");
        Self { a, b }
    }

    /// Returns the quadratic coefficient matrix `A`.
    #[must_use]
    pub fn a(&self) -> &DMatrix<f64> {
        &self.a
    }

    /// Returns the linear coefficient vector `b`.
    #[must_use]
    pub fn b(&self) -> &DVector<f64> {
        &self.b
    }

    /// Returns the dimension `n` of the form.
    #[must_use]
    pub fn dim(&self) -> usize {
        self.b.len()
    }

    /// Evaluates `xᵀAx + 2bᵀx`.
    #[must_use]
    pub fn value(&self, x: &DVector<f64>) -> f64 {
        x.dot(&(&self.a * x)) + 2.0 * self.b.dot(x)
    }

    /// Evaluates the gradient `2(Ax + b)`.
    #[must_use]
    pub fn gradient(&self, x: &DVector<f64>) -> DVector<f64> {
        2.0 * (&self.a * x + &self.b)
    }

    /// Returns the curvature `dᵀAd` along direction `d`.
    ///
    /// This is strictly positive for every nonzero `d` exactly when `A` is
    /// positive definite.
    #[must_use]
    pub fn curvature(&self, d: &DVector<f64>) -> f64 {
        d.dot(&(&self.a * d))
    }
}

impl DifferentiableProblem for QuadraticForm {
    type Error = Infallible;

    fn objective(&self, x: &DVector<f64>) -> Result<f64, Self::Error> {
        Ok(self.value(x))
    }

    fn gradient(&self, x: &DVector<f64>) -> Result<DVector<f64>, Self::Error> {
        Ok(QuadraticForm::gradient(self, x))
    }
}

impl TwiceDifferentiableProblem for QuadraticForm {
    fn hessian(&self, _x: &DVector<f64>) -> Result<DMatrix<f64>, Self::Error> {
        Ok(2.0 * &self.a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use nalgebra::{dmatrix, dvector};

    fn form() -> QuadraticForm {
        QuadraticForm::new(dmatrix![2.0, 1.0; 1.0, 3.0], dvector![1.0, -1.0])
    }

    #[test]
    fn value_matches_expanded_expression() {
        let q = form();
        let x = dvector![1.0, 2.0];

        // xᵀAx = 2 + 2 + 2 + 12 = 18, 2bᵀx = 2(1 - 2) = -2
        assert_relative_eq!(q.value(&x), 16.0);
    }

    #[test]
    fn gradient_is_twice_affine_term() {
        let q = form();
        let x = dvector![1.0, 2.0];

        // Ax + b = [4 + 1, 7 - 1]
        assert_relative_eq!(QuadraticForm::gradient(&q, &x), dvector![10.0, 12.0]);
    }

    #[test]
    fn curvature_detects_indefinite_matrix() {
        let q = QuadraticForm::new(dmatrix![1.0, 0.0; 0.0, -1.0], dvector![0.0, 0.0]);

        assert!(q.curvature(&dvector![1.0, 0.0]) > 0.0);
        assert!(q.curvature(&dvector![0.0, 1.0]) < 0.0);
    }

    #[test]
    fn problem_impl_uses_analytic_derivatives() {
        let q = form();
        let x = dvector![-0.5, 0.25];

        assert_relative_eq!(q.objective(&x).unwrap(), q.value(&x));
        assert_relative_eq!(q.hessian(&x).unwrap(), dmatrix![4.0, 2.0; 2.0, 6.0]);
    }

    #[test]
    #[should_panic(expected = "linear term must match matrix dimension")]
    fn rejects_mismatched_dimensions() {
        let _ = QuadraticForm::new(DMatrix::identity(2, 2), dvector![1.0, 2.0, 3.0]);
    }
}
