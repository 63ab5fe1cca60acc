//! Plotting observer for visualizing solver convergence.
//!
//! See [`PlotObserver`] and [`Plottable`] for usage.

use descent_core::Observer;
use descent_solvers::optimization::Event;
use eframe::egui;
use egui_plot::{Legend, Line, Plot, PlotPoints};

/// Rendering options for [`PlotObserver::show`].
///
/// # Example
///
/// ```ignore
/// obs.show(ShowConfig::new().title("Newton").legend().log_y())?;
/// ```
#[derive(Debug, Clone, Default)]
pub struct ShowConfig {
    title: Option<String>,
    legend: bool,
    log_y: bool,
}

impl ShowConfig {
    /// Creates a config with no title, no legend and a linear y-axis.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the window title.
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Labels each trace in a legend.
    #[must_use]
    pub fn legend(mut self) -> Self {
        self.legend = true;
        self
    }

    /// Plots log₁₀ of the y values. Non-positive values are skipped.
    #[must_use]
    pub fn log_y(mut self) -> Self {
        self.log_y = true;
        self
    }
}

/// Extracts plottable data from a solver event.
///
/// [`Event`] implements `Plottable<2>` with the iteration number on the
/// x-axis and the traces `[objective, gradient norm]`, so a
/// [`PlotObserver::convergence`] can be handed straight to any solver.
///
/// Return `None` from [`x`][Plottable::x] to skip an event entirely, or `None`
/// in a trace slot to skip that trace for the event.
pub trait Plottable<const N: usize> {
    /// The x-axis value for this event, or `None` to skip recording entirely.
    fn x(&self) -> Option<f64>;

    /// The y-axis values for each trace.
    fn traces(&self) -> [Option<f64>; N];
}

#[allow(clippy::cast_precision_loss)]
impl Plottable<2> for Event<'_> {
    fn x(&self) -> Option<f64> {
        Some(self.iter as f64)
    }

    fn traces(&self) -> [Option<f64>; 2] {
        [Some(self.objective), Some(self.gradient_norm)]
    }
}

/// An observer that collects traces during a solve and displays them via egui.
///
/// The const generic `N` is the number of traces. Points are recorded either
/// by passing `&mut PlotObserver` as the solver observer, which requires the
/// event type to implement [`Plottable<N>`][Plottable], or by calling
/// [`record`][PlotObserver::record] from inside a closure observer.
///
/// # Example
///
/// ```ignore
/// let mut obs = PlotObserver::convergence();
/// newton_backtracking::minimize(&problem, x0, &config, &mut obs)?;
/// obs.show(ShowConfig::new().title("Newton").legend().log_y())?;
/// ```
///
/// Plotting the distance to a known minimizer with the closure path:
///
/// ```ignore
/// let mut obs = PlotObserver::<1>::new(["‖x - x*‖"]);
/// quadratic::minimize(&form, x0, &config, |event: &Event<'_>| {
///     obs.record(event.iter as f64, [Some((event.x - &x_star).norm())]);
///     None
/// })?;
/// ```
#[derive(Debug)]
pub struct PlotObserver<const N: usize> {
    names: [String; N],
    data: [Vec<[f64; 2]>; N],
}

impl PlotObserver<2> {
    /// Creates an observer tracing the objective and gradient norm per iteration.
    #[must_use]
    pub fn convergence() -> Self {
        Self::new(["Objective", "Gradient norm"])
    }
}

impl<const N: usize> PlotObserver<N> {
    /// Creates a new `PlotObserver` with the given trace names.
    #[must_use]
    pub fn new(names: [&str; N]) -> Self {
        Self {
            names: names.map(str::to_owned),
            data: std::array::from_fn(|_| Vec::new()),
        }
    }

    /// Records one point per trace at `x`, skipping `None` slots.
    pub fn record(&mut self, x: f64, traces: [Option<f64>; N]) {
        for (points, y) in self.data.iter_mut().zip(traces) {
            if let Some(y) = y {
                points.push([x, y]);
            }
        }
    }

    /// Returns the points recorded for trace `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= N`.
    #[must_use]
    pub fn points(&self, index: usize) -> &[[f64; 2]] {
        &self.data[index]
    }

    /// Opens a blocking egui window displaying all collected traces.
    ///
    /// # Errors
    ///
    /// Returns an error if the native window cannot be created.
    pub fn show(self, config: ShowConfig) -> Result<(), eframe::Error> {
        let title = config.title.unwrap_or_default();
        let traces: Vec<(String, Vec<[f64; 2]>)> = self.names.into_iter().zip(self.data).collect();

        eframe::run_native(
            &title,
            eframe::NativeOptions::default(),
            Box::new(move |_cc| {
                Ok(Box::new(PlotApp {
                    traces,
                    legend: config.legend,
                    log_y: config.log_y,
                }))
            }),
        )
    }
}

impl<const N: usize, E, A> Observer<E, A> for PlotObserver<N>
where
    E: Plottable<N>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        if let Some(x) = event.x() {
            self.record(x, event.traces());
        }
        None
    }
}

impl<const N: usize, E, A> Observer<E, A> for &mut PlotObserver<N>
where
    E: Plottable<N>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        (*self).observe(event)
    }
}

struct PlotApp {
    traces: Vec<(String, Vec<[f64; 2]>)>,
    legend: bool,
    log_y: bool,
}

impl eframe::App for PlotApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            let mut plot = Plot::new("descent_plot").x_axis_label("iteration");
            if self.legend {
                plot = plot.legend(Legend::default());
            }
            if self.log_y {
                plot = plot.y_axis_label("log₁₀");
            }
            plot.show(ui, |plot_ui| {
                for (name, points) in &self.traces {
                    let plot_points: PlotPoints = if self.log_y {
                        points
                            .iter()
                            .filter(|p| p[1] > 0.0)
                            .map(|p| [p[0], p[1].log10()])
                            .collect()
                    } else {
                        points.iter().copied().collect()
                    };
                    plot_ui.line(Line::new(plot_points).name(name));
                }
            });
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use descent_core::QuadraticForm;
    use descent_solvers::optimization::quadratic;
    use nalgebra::{dmatrix, dvector};

    #[test]
    fn record_skips_missing_slots() {
        let mut obs = PlotObserver::<2>::new(["a", "b"]);

        obs.record(1.0, [Some(10.0), None]);
        obs.record(2.0, [None, Some(20.0)]);

        assert_eq!(obs.points(0), [[1.0, 10.0]]);
        assert_eq!(obs.points(1), [[2.0, 20.0]]);
    }

    #[test]
    fn traces_every_solver_iteration() {
        let form = QuadraticForm::new(dmatrix![1.0, 0.0; 0.0, 10.0], dvector![-1.0, 0.0]);
        let mut obs = PlotObserver::convergence();

        let solution = quadratic::minimize(
            &form,
            dvector![4.0, 1.0],
            &quadratic::Config::default(),
            &mut obs,
        )
        .expect("should converge");

        let objectives = obs.points(0);
        assert_eq!(objectives.len(), solution.iters);
        assert_eq!(obs.points(1).len(), solution.iters);
        assert!(objectives.windows(2).all(|w| w[0][0] < w[1][0]));
        assert_eq!(objectives.last().map(|p| p[1]), Some(solution.objective));
    }
}
