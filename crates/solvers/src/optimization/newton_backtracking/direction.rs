use nalgebra::{DMatrix, DVector};

/// Solves `H·d = g` for the Newton direction `d`.
///
/// Returns `None` when `H` is singular or near-singular: the smallest pivot
/// magnitude of its LU factorization is at most `pivot_tolerance` times the
/// largest, or the solution is not finite.
pub(super) fn newton_direction(
    hessian: DMatrix<f64>,
    gradient: &DVector<f64>,
    pivot_tolerance: f64,
) -> Option<DVector<f64>> {
    let lu = hessian.lu();

    let pivots = lu.u().diagonal().abs();
    if !(pivots.min() > pivot_tolerance * pivots.max()) {
        return None;
    }

    let direction = lu.solve(gradient)?;
    direction
        .iter()
        .all(|v| v.is_finite())
        .then_some(direction)
}
