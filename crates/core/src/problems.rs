pub mod closure;
pub mod smooth;

pub use closure::{FnProblem, FnProblemWithHessian};
pub use smooth::{DifferentiableProblem, TwiceDifferentiableProblem};
