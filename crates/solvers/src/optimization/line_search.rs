use nalgebra::DVector;
use thiserror::Error;

use descent_core::DifferentiableProblem;

/// Returned when backtracking exhausts its budget without sufficient decrease.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
#[error("no sufficient decrease after {backtracks} backtracks (last step {step_size:e})")]
pub struct LineSearchFailure {
    /// Number of step reductions performed.
    pub backtracks: usize,

    /// The step size tried last.
    pub step_size: f64,
}

/// Parameters of the Armijo backtracking rule.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Backtracking {
    pub(crate) alpha: f64,
    pub(crate) beta: f64,
    pub(crate) max_backtracks: usize,
}

/// A step accepted by the line search.
#[derive(Debug, Clone)]
pub(crate) struct Accepted {
    pub(crate) step_size: f64,
    pub(crate) x: DVector<f64>,
    pub(crate) objective: f64,
    pub(crate) backtracks: usize,
}

/// Errors raised while backtracking.
#[derive(Debug)]
pub(crate) enum BacktrackError<E> {
    Problem(E),
    Failed(LineSearchFailure),
}

/// Searches along `x - t·direction` for a step satisfying the Armijo rule.
///
/// Starting at `initial_step`, the step is multiplied by `beta` until
///
/// ```text
/// f(x) - f(x - t·direction) >= alpha · t · slope
/// ```
///
/// where `slope` is the directional derivative `∇f(x)ᵀ·direction`.
/// At most `max_backtracks` reductions are made. A NaN trial objective never
/// satisfies the rule.
pub(crate) fn backtrack<P>(
    problem: &P,
    x: &DVector<f64>,
    direction: &DVector<f64>,
    objective: f64,
    slope: f64,
    initial_step: f64,
    params: &Backtracking,
) -> Result<Accepted, BacktrackError<P::Error>>
where
    P: DifferentiableProblem,
{
    let mut step_size = initial_step;

    for backtracks in 0..=params.max_backtracks {
        let trial = x - step_size * direction;
        let trial_objective = problem
            .objective(&trial)
            .map_err(BacktrackError::Problem)?;

        if objective - trial_objective >= params.alpha * step_size * slope {
            return Ok(Accepted {
                step_size,
                x: trial,
                objective: trial_objective,
                backtracks,
            });
        }

        if backtracks < params.max_backtracks {
            step_size *= params.beta;
        }
    }

    Err(BacktrackError::Failed(LineSearchFailure {
        backtracks: params.max_backtracks,
        step_size,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use descent_core::FnProblem;
    use nalgebra::dvector;

    fn squared_norm() -> FnProblem<
        impl Fn(&DVector<f64>) -> f64,
        impl Fn(&DVector<f64>) -> DVector<f64>,
    > {
        FnProblem::new(|x: &DVector<f64>| x.dot(x), |x: &DVector<f64>| 2.0 * x)
    }

    const PARAMS: Backtracking = Backtracking {
        alpha: 0.1,
        beta: 0.5,
        max_backtracks: 50,
    };

    #[test]
    fn accepts_initial_step_when_decrease_is_sufficient() {
        let problem = squared_norm();
        let x = dvector![1.0, 1.0];
        let g = 2.0 * &x;

        // f(x - 0.25·g) = f(0.5, 0.5) = 0.5, decrease 1.5 >= 0.1 · 0.25 · 8
        let accepted = backtrack(&problem, &x, &g, 2.0, g.norm_squared(), 0.25, &PARAMS).unwrap();

        assert_eq!(accepted.backtracks, 0);
        assert_relative_eq!(accepted.step_size, 0.25);
        assert_relative_eq!(accepted.x, dvector![0.5, 0.5]);
        assert_relative_eq!(accepted.objective, 0.5);
    }

    #[test]
    fn shrinks_until_armijo_holds() {
        let problem = squared_norm();
        let x = dvector![1.0, 1.0];
        let g = 2.0 * &x;

        // t = 1 overshoots to (-1, -1) with no decrease; t = 0.5 lands on the origin.
        let accepted = backtrack(&problem, &x, &g, 2.0, g.norm_squared(), 1.0, &PARAMS).unwrap();

        assert_eq!(accepted.backtracks, 1);
        assert_relative_eq!(accepted.step_size, 0.5);
        assert_relative_eq!(accepted.objective, 0.0);
        assert!(2.0 - accepted.objective >= PARAMS.alpha * accepted.step_size * g.norm_squared());
    }

    #[test]
    fn fails_on_ascent_direction() {
        let problem = squared_norm();
        let x = dvector![1.0, 1.0];
        let ascent = -2.0 * &x;
        let params = Backtracking {
            max_backtracks: 10,
            ..PARAMS
        };

        let result = backtrack(&problem, &x, &ascent, 2.0, 8.0, 1.0, &params);

        match result {
            Err(BacktrackError::Failed(failure)) => {
                assert_eq!(failure.backtracks, 10);
                assert_relative_eq!(failure.step_size, 0.5_f64.powi(10));
            }
            other => panic!("expected line search failure, got {other:?}"),
        }
    }

    #[test]
    fn nan_objective_never_accepted() {
        let problem = FnProblem::new(
            |x: &DVector<f64>| if x[0] < 1.0 { f64::NAN } else { x[0] },
            |_: &DVector<f64>| dvector![1.0],
        );
        let params = Backtracking {
            max_backtracks: 3,
            ..PARAMS
        };

        let result = backtrack(&problem, &dvector![1.0], &dvector![1.0], 1.0, 1.0, 1.0, &params);

        assert!(matches!(result, Err(BacktrackError::Failed(_))));
    }
}
