//! Iterative descent solvers for unconstrained minimization.
//!
//! See [`optimization`] for the available solvers and the shared
//! event, action, and solution types.

pub mod optimization;
