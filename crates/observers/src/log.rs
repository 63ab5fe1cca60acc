//! An observer that records progress through `tracing`.

use descent_core::Observer;
use tracing::{Level, debug, error, info, trace, warn};

use crate::traits::{HasGradientNorm, HasIteration, HasObjective, HasStepSize};

/// Emits one `tracing` event per solver iteration.
///
/// Each record carries the structured fields `iter`, `gradient_norm`,
/// `objective` and `step_size`. The level defaults to [`Level::INFO`].
/// Installing a subscriber is left to the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogProgress {
    level: Level,
}

impl Default for LogProgress {
    fn default() -> Self {
        Self::new()
    }
}

impl LogProgress {
    /// Creates an observer that logs at the `INFO` level.
    #[must_use]
    pub fn new() -> Self {
        Self { level: Level::INFO }
    }

    /// Sets the level of the emitted records.
    #[must_use]
    pub fn with_level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    /// Returns the level of the emitted records.
    #[must_use]
    pub fn level(&self) -> Level {
        self.level
    }
}

impl<E, A> Observer<E, A> for LogProgress
where
    E: HasIteration + HasGradientNorm + HasObjective + HasStepSize,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        let iter = event.iteration();
        let gradient_norm = event.gradient_norm();
        let objective = event.objective();
        let step_size = event.step_size();

        if self.level == Level::TRACE {
            trace!(iter, gradient_norm, objective, step_size, "iteration");
        } else if self.level == Level::DEBUG {
            debug!(iter, gradient_norm, objective, step_size, "iteration");
        } else if self.level == Level::INFO {
            info!(iter, gradient_norm, objective, step_size, "iteration");
        } else if self.level == Level::WARN {
            warn!(iter, gradient_norm, objective, step_size, "iteration");
        } else {
            error!(iter, gradient_norm, objective, step_size, "iteration");
        }
        None
    }
}
