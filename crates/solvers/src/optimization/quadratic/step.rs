use descent_core::QuadraticForm;
use nalgebra::DVector;

use super::Error;

/// Returns the exact minimizing step along `-direction` for a quadratic form.
///
/// For `f(x) = xᵀAx + 2bᵀx` and a direction `d`, `f(x - t·d)` is minimized at
///
/// ```text
/// t = ∇f(x)ᵀd / (2·dᵀAd)
/// ```
///
/// Both the slope `∇f(x)ᵀd` and the curvature `dᵀAd` must be strictly
/// positive for `t` to be a finite descent step.
pub(super) fn exact_step(
    form: &QuadraticForm,
    gradient: &DVector<f64>,
    direction: &DVector<f64>,
) -> Result<f64, Error> {
    let slope = gradient.dot(direction);
    if slope.is_nan() || slope <= 0.0 {
        return Err(Error::NotDescentDirection { slope });
    }

    let curvature = form.curvature(direction);
    if !curvature.is_finite() || curvature <= 0.0 {
        return Err(Error::NotPositiveDefinite { curvature });
    }

    Ok(slope / (2.0 * curvature))
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use nalgebra::{DMatrix, dmatrix, dvector};

    #[test]
    fn identity_step_is_one_half() {
        let form = QuadraticForm::new(DMatrix::identity(2, 2), dvector![0.0, 0.0]);
        let g = dvector![3.0, -4.0];

        assert_relative_eq!(exact_step(&form, &g, &g).unwrap(), 0.5);
    }

    #[test]
    fn step_minimizes_along_the_line() {
        let form = QuadraticForm::new(dmatrix![3.0, 1.0; 1.0, 2.0], dvector![1.0, -1.0]);
        let x = dvector![2.0, 1.0];
        let g = form.gradient(&x);

        let t = exact_step(&form, &g, &g).unwrap();
        let at = |s: f64| form.value(&(&x - s * &g));

        assert!(at(t) <= at(0.9 * t));
        assert!(at(t) <= at(1.1 * t));
        // The new gradient is orthogonal to the search direction.
        assert_relative_eq!(form.gradient(&(&x - t * &g)).dot(&g), 0.0, epsilon = 1e-9);
    }

    #[test]
    fn zero_curvature_is_rejected() {
        let form = QuadraticForm::new(dmatrix![1.0, 0.0; 0.0, 0.0], dvector![0.0, 1.0]);
        let g = dvector![0.0, 2.0];

        assert_eq!(
            exact_step(&form, &g, &g),
            Err(Error::NotPositiveDefinite { curvature: 0.0 })
        );
    }

    #[test]
    fn negative_curvature_is_rejected() {
        let form = QuadraticForm::new(dmatrix![-1.0, 0.0; 0.0, 1.0], dvector![0.0, 0.0]);
        let g = dvector![2.0, 0.0];

        assert!(matches!(
            exact_step(&form, &g, &g),
            Err(Error::NotPositiveDefinite { curvature }) if curvature < 0.0
        ));
    }

    #[test]
    fn uphill_direction_is_rejected() {
        let form = QuadraticForm::new(DMatrix::identity(2, 2), dvector![0.0, 0.0]);
        let g = dvector![1.0, 0.0];

        assert!(matches!(
            exact_step(&form, &g, &(-&g)),
            Err(Error::NotDescentDirection { slope }) if slope < 0.0
        ));
    }
}
