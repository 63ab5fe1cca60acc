use std::convert::Infallible;

use nalgebra::{DMatrix, DVector};

use super::{DifferentiableProblem, TwiceDifferentiableProblem};

/// Adapts plain closures into a [`DifferentiableProblem`].
///
/// The closures are assumed infallible, so the problem's error type is
/// [`Infallible`]. Add a Hessian with [`FnProblem::with_hessian`] to get a
/// [`TwiceDifferentiableProblem`].
///
/// # Example
///
/// ```
/// use descent_core::{DifferentiableProblem, FnProblem};
/// use nalgebra::{DVector, dvector};
///
/// let problem = FnProblem::new(|x: &DVector<f64>| x.dot(x), |x: &DVector<f64>| 2.0 * x);
/// let x = dvector![1.0, 2.0];
///
/// assert_eq!(problem.objective(&x).unwrap(), 5.0);
/// assert_eq!(problem.gradient(&x).unwrap(), dvector![2.0, 4.0]);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct FnProblem<F, G> {
    objective: F,
    gradient: G,
}

impl<F, G> FnProblem<F, G>
where
    F: Fn(&DVector<f64>) -> f64,
    G: Fn(&DVector<f64>) -> DVector<f64>,
{
    /// Creates a problem from an objective and its gradient.
    pub fn new(objective: F, gradient: G) -> Self {
        Self {
            objective,
            gradient,
        }
    }

    /// Adds a Hessian closure, producing a twice-differentiable problem.
    pub fn with_hessian<H>(self, hessian: H) -> FnProblemWithHessian<F, G, H>
    where
        H: Fn(&DVector<f64>) -> DMatrix<f64>,
    {
        FnProblemWithHessian {
            inner: self,
            hessian,
        }
    }
}

impl<F, G> DifferentiableProblem for FnProblem<F, G>
where
    F: Fn(&DVector<f64>) -> f64,
    G: Fn(&DVector<f64>) -> DVector<f64>,
{
    type Error = Infallible;

    fn objective(&self, x: &DVector<f64>) -> Result<f64, Self::Error> {
        Ok((self.objective)(x))
    }

    fn gradient(&self, x: &DVector<f64>) -> Result<DVector<f64>, Self::Error> {
        Ok((self.gradient)(x))
    }
}

/// A [`FnProblem`] with an attached Hessian closure.
///
/// Built with [`FnProblem::with_hessian`].
#[derive(Debug, Clone, Copy)]
pub struct FnProblemWithHessian<F, G, H> {
    inner: FnProblem<F, G>,
    hessian: H,
}

impl<F, G, H> DifferentiableProblem for FnProblemWithHessian<F, G, H>
where
    F: Fn(&DVector<f64>) -> f64,
    G: Fn(&DVector<f64>) -> DVector<f64>,
    H: Fn(&DVector<f64>) -> DMatrix<f64>,
{
    type Error = Infallible;

    fn objective(&self, x: &DVector<f64>) -> Result<f64, Self::Error> {
        self.inner.objective(x)
    }

    fn gradient(&self, x: &DVector<f64>) -> Result<DVector<f64>, Self::Error> {
        self.inner.gradient(x)
    }
}

impl<F, G, H> TwiceDifferentiableProblem for FnProblemWithHessian<F, G, H>
where
    F: Fn(&DVector<f64>) -> f64,
    G: Fn(&DVector<f64>) -> DVector<f64>,
    H: Fn(&DVector<f64>) -> DMatrix<f64>,
{
    fn hessian(&self, x: &DVector<f64>) -> Result<DMatrix<f64>, Self::Error> {
        Ok((self.hessian)(x))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use nalgebra::dvector;

    fn rosenbrock(x: &DVector<f64>) -> f64 {
        (1.0 - x[0]).powi(2) + 100.0 * (x[1] - x[0].powi(2)).powi(2)
    }

    fn rosenbrock_gradient(x: &DVector<f64>) -> DVector<f64> {
        dvector![
            -2.0 * (1.0 - x[0]) - 400.0 * x[0] * (x[1] - x[0].powi(2)),
            200.0 * (x[1] - x[0].powi(2)),
        ]
    }

    #[test]
    fn forwards_objective_and_gradient() {
        let problem = FnProblem::new(rosenbrock, rosenbrock_gradient);
        let x = dvector![-1.2, 1.0];

        assert_relative_eq!(problem.objective(&x).unwrap(), 24.2, epsilon = 1e-12);
        assert_relative_eq!(
            problem.gradient(&x).unwrap(),
            dvector![-215.6, -88.0],
            epsilon = 1e-12
        );
    }

    #[test]
    fn with_hessian_keeps_first_derivatives() {
        let problem = FnProblem::new(rosenbrock, rosenbrock_gradient).with_hessian(|x: &DVector<f64>| {
            DMatrix::from_row_slice(
                2,
                2,
                &[
                    2.0 - 400.0 * x[1] + 1200.0 * x[0].powi(2),
                    -400.0 * x[0],
                    -400.0 * x[0],
                    200.0,
                ],
            )
        });
        let x = dvector![1.0, 1.0];

        assert_relative_eq!(problem.objective(&x).unwrap(), 0.0);
        assert_relative_eq!(problem.gradient(&x).unwrap(), dvector![0.0, 0.0]);
        assert_relative_eq!(
            problem.hessian(&x).unwrap(),
            DMatrix::from_row_slice(2, 2, &[802.0, -400.0, -400.0, 200.0])
        );
    }
}
