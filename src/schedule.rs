//! # Temperature schedule
//!
//! The annealer cools by the inverse of the iteration count,
//! `T(i) = temp0 / i`, and accepts worsening moves with the Metropolis
//! probability `exp(-diff / T)`.

/// Inverse cooling schedule, `T(i) = temp0 / i` for `i >= 1`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InverseSchedule {
    temp0: f64,
}

impl InverseSchedule {
    pub fn new(temp0: f64) -> Self {
        Self { temp0 }
    }

    pub fn initial_temperature(&self) -> f64 {
        self.temp0
    }

    /// Temperature at iteration `i`.
    ///
    /// The schedule is undefined at `i = 0`; iterations are numbered from 1.
    pub fn temperature(&self, i: usize) -> f64 {
        debug_assert!(i >= 1, "temperature schedule starts at iteration 1");
        self.temp0 / i as f64
    }
}

/// Probability of accepting a move that changes the objective by `diff` at
/// temperature `temperature`.
///
/// Saturates instead of overflowing: improving or neutral moves give 1, very
/// unfavorable moves give 0, and an undefined ratio (for instance
/// `inf - inf`) gives 0.
pub fn acceptance_probability(diff: f64, temperature: f64) -> f64 {
    let exponent = -diff / temperature;
    if exponent.is_nan() {
        0.0
    } else {
        exponent.min(0.0).exp()
    }
}
