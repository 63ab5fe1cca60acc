//! Interactive convergence plots for the descent solvers.
//!
//! Each mode minimizes a small test function and opens a window showing the
//! objective and gradient norm per iteration on a log scale.
//!
//! # Usage
//!
//! ```text
//! cargo run --example plot --features plot -- gradient
//! cargo run --example plot --features plot -- quadratic
//! cargo run --example plot --features plot -- scaled
//! cargo run --example plot --features plot -- newton
//! ```
//!
//! # Modes
//!
//! - **gradient** — Backtracking gradient descent on the Rosenbrock function.
//!   The narrow curved valley makes progress slow; the run is capped with
//!   [`StopAfter`].
//!
//! - **quadratic** — Exact line search on an ill-conditioned quadratic. The
//!   gradient norm zig-zags down at a rate set by the condition number.
//!
//! - **scaled** — The same quadratic with a diagonal (Jacobi) scaling matrix,
//!   which removes the ill-conditioning.
//!
//! - **newton** — Newton's method on the Rosenbrock function, converging
//!   quadratically in a couple dozen iterations.

use std::error::Error;

use descent_core::{FnProblem, Observer, QuadraticForm};
use descent_observers::{PlotObserver, ProgressWriter, ShowConfig, StopAfter};
use descent_solvers::optimization::{
    Action, Event, gradient_backtracking, newton_backtracking, quadratic,
};
use nalgebra::{DMatrix, DVector, dmatrix, dvector};

fn main() -> Result<(), Box<dyn Error>> {
    let mode = std::env::args().nth(1).unwrap_or_else(|| "newton".into());
    match mode.as_str() {
        "gradient" => gradient(),
        "quadratic" => quadratic_form(false),
        "scaled" => quadratic_form(true),
        "newton" => newton(),
        other => {
            eprintln!("Unknown mode: {other}");
            eprintln!("Usage: plot [gradient|quadratic|scaled|newton]");
            std::process::exit(1);
        }
    }
}

fn rosenbrock(x: &DVector<f64>) -> f64 {
    100.0 * (x[1] - x[0].powi(2)).powi(2) + (1.0 - x[0]).powi(2)
}

fn rosenbrock_gradient(x: &DVector<f64>) -> DVector<f64> {
    dvector![
        -400.0 * x[0] * (x[1] - x[0].powi(2)) - 2.0 * (1.0 - x[0]),
        200.0 * (x[1] - x[0].powi(2))
    ]
}

fn rosenbrock_hessian(x: &DVector<f64>) -> DMatrix<f64> {
    dmatrix![
        1200.0 * x[0].powi(2) - 400.0 * x[1] + 2.0, -400.0 * x[0];
        -400.0 * x[0], 200.0
    ]
}

/// Forwards each event to the plot and a stderr progress line, then to `limit`.
fn tee<'p>(
    plot: &'p mut PlotObserver<2>,
    mut limit: StopAfter,
) -> impl for<'a> FnMut(&Event<'a>) -> Option<Action> + 'p {
    let mut progress = ProgressWriter::stderr();
    move |event: &Event<'_>| {
        let _: Option<Action> = plot.observe(event);
        let _: Option<Action> = progress.observe(event);
        limit.observe(event)
    }
}

fn gradient() -> Result<(), Box<dyn Error>> {
    let problem = FnProblem::new(rosenbrock, rosenbrock_gradient);
    let config = gradient_backtracking::Config::new(1.0, 1e-4, 0.5, 1e-5)?;
    let mut obs = PlotObserver::convergence();

    let solution = gradient_backtracking::minimize(
        &problem,
        dvector![-1.2, 1.0],
        &config,
        tee(&mut obs, StopAfter::new(20_000)),
    )?;
    eprintln!("{:?} after {} iterations at {}", solution.status, solution.iters, solution.x);

    obs.show(
        ShowConfig::new()
            .title("Gradient descent with backtracking: Rosenbrock")
            .legend()
            .log_y(),
    )?;
    Ok(())
}

fn quadratic_form(scaled: bool) -> Result<(), Box<dyn Error>> {
    let a = dmatrix![1.0, 0.0; 0.0, 50.0];
    let form = QuadraticForm::new(a.clone(), dvector![-1.0, 25.0]);
    let config = quadratic::Config::new(1e-8)?;
    let x0 = dvector![10.0, 1.0];
    let mut obs = PlotObserver::convergence();

    let observer = tee(&mut obs, StopAfter::new(usize::MAX));
    let solution = if scaled {
        let jacobi = DMatrix::from_diagonal(&a.diagonal().map(|v| 1.0 / v));
        quadratic::minimize_scaled(&form, &jacobi, x0, &config, observer)?
    } else {
        quadratic::minimize(&form, x0, &config, observer)?
    };
    eprintln!("converged in {} iterations at {}", solution.iters, solution.x);

    let title = if scaled {
        "Scaled gradient descent: diag(1, 50) with Jacobi scaling"
    } else {
        "Gradient descent with exact line search: diag(1, 50)"
    };
    obs.show(ShowConfig::new().title(title).legend().log_y())?;
    Ok(())
}

fn newton() -> Result<(), Box<dyn Error>> {
    let problem =
        FnProblem::new(rosenbrock, rosenbrock_gradient).with_hessian(rosenbrock_hessian);
    let config = newton_backtracking::Config::new(1e-4, 0.5, 1e-10)?;
    let mut obs = PlotObserver::convergence();

    let solution = newton_backtracking::minimize(
        &problem,
        dvector![-1.2, 1.0],
        &config,
        tee(&mut obs, StopAfter::new(usize::MAX)),
    )?;
    eprintln!("{:?} after {} iterations at {}", solution.status, solution.iters, solution.x);

    obs.show(
        ShowConfig::new()
            .title("Newton with backtracking: Rosenbrock")
            .legend()
            .log_y(),
    )?;
    Ok(())
}
