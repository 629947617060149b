use tracing::{debug, info, info_span, trace, warn};

use super::{
    options::{AnnealOptions, LogLevel},
    problem::Problem,
    state::SearchState,
};
use crate::{
    error::{AnnealError, Result},
    objective::Objective,
    rng::RandomNumberGenerator,
    schedule::{acceptance_probability, InverseSchedule},
    variable::VarKind,
};

/// Outcome of a simulated annealing run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AnnealResult {
    /// The best vector evaluated during the run.
    pub best_vector: Vec<f64>,
    /// The objective value of `best_vector`.
    pub best_value: f64,
    /// Current objective value after each iteration; index 0 is the initial evaluation.
    pub trace: Vec<f64>,
    /// Number of candidates that replaced the current solution.
    pub accepted_moves: usize,
    /// Number of accepted candidates that strictly improved on the current solution.
    pub improving_moves: usize,
}

impl AnnealResult {
    /// Splits the result into `(best_vector, best_value, trace)`.
    pub fn into_parts(self) -> (Vec<f64>, f64, Vec<f64>) {
        (self.best_vector, self.best_value, self.trace)
    }
}

/// Runs simulated annealing over a mixed continuous/binary vector.
///
/// The annealer is immutable; all per-run state lives inside [`Annealer::run`],
/// so one annealer can drive any number of independent runs.
#[derive(Debug, Clone)]
pub struct Annealer {
    options: AnnealOptions,
}

impl Annealer {
    /// Creates a new annealer with the given options.
    ///
    /// # Errors
    ///
    /// Returns `AnnealError::Configuration` if the options are invalid; see
    /// [`AnnealOptions::validate`].
    pub fn new(options: AnnealOptions) -> Result<Self> {
        options.validate()?;
        Ok(Self { options })
    }

    pub fn options(&self) -> &AnnealOptions {
        &self.options
    }

    /// Minimizes `objective` starting from the problem's initial vector.
    ///
    /// Each iteration perturbs every dimension of the current vector, records a
    /// strictly better candidate as the new best, and then applies the
    /// Metropolis test at temperature `temp0 / i`. Random draws are consumed in
    /// dimension order, followed by one acceptance draw unless the candidate
    /// strictly improves on the current value.
    ///
    /// # Errors
    ///
    /// Returns `AnnealError::ObjectiveEvaluation` as soon as the objective fails
    /// for any vector, including the initial one. No partial result is returned.
    pub fn run<O>(
        &self,
        objective: &O,
        problem: &Problem,
        rng: &mut RandomNumberGenerator,
    ) -> Result<AnnealResult>
    where
        O: Objective + ?Sized,
    {
        let n_iterations = self.options.get_n_iterations();
        let step_size = self.options.get_step_size();
        let log_level = self.options.get_log_level();
        let schedule = InverseSchedule::new(self.options.get_temp0());

        let span = info_span!(
            "simulated_annealing",
            dimensions = problem.dimensions(),
            n_iterations
        );
        let _enter = span.enter();

        let init_value = evaluate(objective, problem.init(), log_level)?;
        let mut state = SearchState::new(problem.init().to_vec(), init_value);
        let mut trace = Vec::with_capacity(n_iterations + 1);
        trace.push(init_value);

        if log_level != LogLevel::None {
            info!(
                initial_value = init_value,
                temp0 = schedule.initial_temperature(),
                step_size,
                "starting annealing run"
            );
        }

        let mut accepted_moves = 0;
        let mut improving_moves = 0;

        for i in 1..=n_iterations {
            let candidate = state.propose(problem.variables(), step_size, rng);
            let candidate_value = evaluate(objective, &candidate, log_level)?;

            if state.offer_best(&candidate, candidate_value) && log_level == LogLevel::Verbose {
                debug!(iteration = i, best_value = candidate_value, "new best");
            }

            let diff = candidate_value - state.current_value();
            let temperature = schedule.temperature(i);
            let improving = diff < 0.0;
            let accepted =
                improving || rng.uniform() < acceptance_probability(diff, temperature);

            if accepted {
                accepted_moves += 1;
                if improving {
                    improving_moves += 1;
                }
                state.accept(candidate, candidate_value);
            }

            if log_level == LogLevel::Verbose {
                trace!(iteration = i, temperature, diff, accepted, "iteration");
            }

            trace.push(state.current_value());
        }

        let (best_vector, best_value) = state.into_best();

        if log_level != LogLevel::None {
            info!(
                best_value,
                accepted_moves, improving_moves, "annealing run complete"
            );
        }

        Ok(AnnealResult {
            best_vector,
            best_value,
            trace,
            accepted_moves,
            improving_moves,
        })
    }
}

/// Minimizes `objective` over a vector described by parallel `bounds` and
/// `var_kinds` lists.
///
/// All inputs are validated before the objective is called for the first time.
///
/// # Example
///
/// ```rust
/// use mixanneal::{simulated_annealing, RandomNumberGenerator, VarKind};
///
/// let objective = |x: &[f64]| x[0] * x[0] + 3.0 * (x[1] - 1.0).abs();
/// let mut rng = RandomNumberGenerator::from_seed(42);
/// let result = simulated_annealing(
///     &objective,
///     &[(-5.0, 5.0), (0.0, 1.0)],
///     &[VarKind::Continuous, VarKind::Binary],
///     500,
///     0.1,
///     5.0,
///     vec![4.0, 0.0],
///     &mut rng,
/// )
/// .unwrap();
///
/// assert_eq!(result.trace.len(), 501);
/// assert!(result.best_value <= result.trace[0]);
/// ```
///
/// # Errors
///
/// Returns `AnnealError::Configuration` for malformed input and
/// `AnnealError::ObjectiveEvaluation` if the objective fails.
#[allow(clippy::too_many_arguments)]
pub fn simulated_annealing<O>(
    objective: &O,
    bounds: &[(f64, f64)],
    var_kinds: &[VarKind],
    n_iterations: usize,
    step_size: f64,
    temp0: f64,
    init: Vec<f64>,
    rng: &mut RandomNumberGenerator,
) -> Result<AnnealResult>
where
    O: Objective + ?Sized,
{
    let problem = Problem::new(bounds, var_kinds, init)?;
    let options = AnnealOptions::new(n_iterations, step_size, temp0, LogLevel::None);
    Annealer::new(options)?.run(objective, &problem, rng)
}

fn evaluate<O>(objective: &O, vector: &[f64], log_level: LogLevel) -> Result<f64>
where
    O: Objective + ?Sized,
{
    objective.evaluate(vector).map_err(|reason| {
        if log_level != LogLevel::None {
            warn!(?vector, %reason, "objective evaluation failed");
        }
        AnnealError::ObjectiveEvaluation {
            vector: vector.to_vec(),
            reason,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::objective::FallibleObjective;
    use crate::variable::Variable;
    use std::cell::Cell;

    fn single_dimension(init: f64) -> Problem {
        Problem::from_variables(vec![Variable::continuous(-5.0, 5.0)], vec![init]).unwrap()
    }

    #[test]
    fn test_zero_step_single_iteration() {
        let annealer = Annealer::new(AnnealOptions::new(1, 0.0, 1.0, LogLevel::None)).unwrap();
        let mut rng = RandomNumberGenerator::from_seed(0);
        let square = |x: &[f64]| x[0] * x[0];

        let result = annealer
            .run(&square, &single_dimension(5.0), &mut rng)
            .unwrap();

        assert_eq!(result.trace, vec![25.0, 25.0]);
        assert_eq!(result.best_value, 25.0);
        assert_eq!(result.best_vector, vec![5.0]);
        // diff == 0 is accepted through the Metropolis draw, not as an improvement
        assert_eq!(result.accepted_moves, 1);
        assert_eq!(result.improving_moves, 0);
    }

    #[test]
    fn test_invalid_options_rejected() {
        let err = Annealer::new(AnnealOptions::new(0, 0.1, 1.0, LogLevel::None)).unwrap_err();
        assert!(err.is_configuration());
    }

    #[test]
    fn test_initial_evaluation_failure() {
        let annealer = Annealer::new(AnnealOptions::default()).unwrap();
        let mut rng = RandomNumberGenerator::from_seed(0);
        let objective = FallibleObjective(|_: &[f64]| Err::<f64, _>("unavailable"));

        let err = annealer
            .run(&objective, &single_dimension(1.5), &mut rng)
            .unwrap_err();

        assert_eq!(
            err,
            AnnealError::ObjectiveEvaluation {
                vector: vec![1.5],
                reason: "unavailable".to_string(),
            }
        );
    }

    #[test]
    fn test_failure_mid_run_aborts() {
        let annealer = Annealer::new(AnnealOptions::new(50, 0.2, 1.0, LogLevel::None)).unwrap();
        let mut rng = RandomNumberGenerator::from_seed(8);
        let calls = Cell::new(0);
        let objective = FallibleObjective(|x: &[f64]| {
            calls.set(calls.get() + 1);
            if calls.get() == 4 {
                Err("fourth call fails".to_string())
            } else {
                Ok(x[0].abs())
            }
        });

        let err = annealer
            .run(&objective, &single_dimension(2.0), &mut rng)
            .unwrap_err();

        assert_eq!(calls.get(), 4);
        assert!(err.offending_vector().is_some());
    }

    #[test]
    fn test_nan_objective_is_evaluation_error() {
        let annealer = Annealer::new(AnnealOptions::default()).unwrap();
        let mut rng = RandomNumberGenerator::from_seed(0);
        let objective = |_: &[f64]| f64::NAN;

        let err = annealer
            .run(&objective, &single_dimension(0.0), &mut rng)
            .unwrap_err();
        assert_eq!(err.offending_vector(), Some(&[0.0][..]));
    }

    #[test]
    fn test_infinite_objective_does_not_fail() {
        let annealer = Annealer::new(AnnealOptions::new(20, 0.1, 1.0, LogLevel::None)).unwrap();
        let mut rng = RandomNumberGenerator::from_seed(2);
        let objective = |_: &[f64]| f64::INFINITY;

        let result = annealer
            .run(&objective, &single_dimension(0.0), &mut rng)
            .unwrap();

        assert_eq!(result.trace.len(), 21);
        assert_eq!(result.accepted_moves, 0);
        assert_eq!(result.best_vector, vec![0.0]);
    }

    #[test]
    fn test_improving_moves_counted() {
        let annealer = Annealer::new(AnnealOptions::new(300, 0.05, 1.0, LogLevel::None)).unwrap();
        let mut rng = RandomNumberGenerator::from_seed(13);
        let square = |x: &[f64]| x[0] * x[0];

        let result = annealer
            .run(&square, &single_dimension(4.0), &mut rng)
            .unwrap();

        assert!(result.improving_moves > 0);
        assert!(result.improving_moves <= result.accepted_moves);
        assert!(result.accepted_moves <= 300);
        assert!(result.best_value < 16.0);
    }

    #[test]
    fn test_into_parts() {
        let result = AnnealResult {
            best_vector: vec![1.0],
            best_value: 1.0,
            trace: vec![2.0, 1.0],
            accepted_moves: 1,
            improving_moves: 1,
        };
        assert_eq!(result.into_parts(), (vec![1.0], 1.0, vec![2.0, 1.0]));
    }
}
