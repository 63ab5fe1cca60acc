use thiserror::Error;

/// Errors that can occur during exact-step quadratic descent.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum Error {
    /// The curvature `dᵀAd` along the search direction is not positive.
    ///
    /// `A` (or, when scaled, the curvature seen through `D`) is not positive
    /// definite, so the exact step is undefined.
    #[error("matrix is not positive definite along the search direction (curvature {curvature:e})")]
    NotPositiveDefinite { curvature: f64 },

    /// The scaled direction `D·∇f` is not a descent direction.
    ///
    /// `∇fᵀD∇f` is not positive, which happens when `D` is not positive
    /// definite. Stepping would increase the objective.
    #[error("scaled direction is not a descent direction (slope {slope:e})")]
    NotDescentDirection { slope: f64 },
}
