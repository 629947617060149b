use crate::rng::RandomNumberGenerator;
use crate::variable::Variable;

/// The mutable state of one annealing chain.
///
/// Invariant: once constructed, `best_value <= current_value`, and
/// `best_value` never increases.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchState {
    current: Vec<f64>,
    current_value: f64,
    best: Vec<f64>,
    best_value: f64,
}

impl SearchState {
    /// Seeds both the current and the best solution from `init`.
    pub fn new(init: Vec<f64>, value: f64) -> Self {
        Self {
            best: init.clone(),
            current: init,
            current_value: value,
            best_value: value,
        }
    }

    pub fn current(&self) -> &[f64] {
        &self.current
    }

    pub fn current_value(&self) -> f64 {
        self.current_value
    }

    pub fn best(&self) -> &[f64] {
        &self.best
    }

    pub fn best_value(&self) -> f64 {
        self.best_value
    }

    /// Builds a neighbor of the current vector, perturbing every dimension in order.
    pub fn propose(
        &self,
        variables: &[Variable],
        step_size: f64,
        rng: &mut RandomNumberGenerator,
    ) -> Vec<f64> {
        self.current
            .iter()
            .zip(variables)
            .map(|(&value, var)| var.perturb(value, step_size, rng))
            .collect()
    }

    /// Stores a copy of `candidate` as the best solution if it strictly
    /// improves on it. Returns whether the best changed.
    pub fn offer_best(&mut self, candidate: &[f64], value: f64) -> bool {
        if value < self.best_value {
            self.best.clear();
            self.best.extend_from_slice(candidate);
            self.best_value = value;
            true
        } else {
            false
        }
    }

    /// Makes `candidate` the current solution.
    pub fn accept(&mut self, candidate: Vec<f64>, value: f64) {
        self.current = candidate;
        self.current_value = value;
    }

    /// Consumes the state, returning the best vector and its value.
    pub fn into_best(self) -> (Vec<f64>, f64) {
        (self.best, self.best_value)
    }
}
