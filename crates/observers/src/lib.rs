//! Reusable observers for the descent solvers.
//!
//! Every solver in `descent-solvers` emits the same
//! [`Event`][descent_solvers::optimization::Event], so each observer here
//! works with all of them.
//!
//! - [`ProgressWriter`] — one `iter_number = .. norm_grad = .. fun_val = ..`
//!   line per iteration, to stderr or any writer
//! - [`LogProgress`] — one structured `tracing` record per iteration
//! - [`StopAfter`] — stops a solver after a fixed number of iterations
//! - [`traits`] — capability traits for writing observers generically
//!
//! # Features
//!
//! - `plot` — Enables [`PlotObserver`] for visualizing convergence via egui.
//!   This feature adds dependencies on `eframe` and `egui_plot`.

mod limit;
mod log;
mod progress;
pub mod traits;

#[cfg(feature = "plot")]
mod plot;

pub use limit::StopAfter;
pub use log::LogProgress;
pub use progress::{ProgressWriter, format_float};

#[cfg(feature = "plot")]
pub use plot::{PlotObserver, Plottable, ShowConfig};
