//! # AnnealOptions
//!
//! The `AnnealOptions` struct holds the hyperparameters of a simulated
//! annealing run: the iteration budget, the relative step size for continuous
//! dimensions, the initial temperature, and how chatty the run should be.
//!
//! ## Example
//!
//! ```rust
//! use mixanneal::annealer::options::{AnnealOptions, LogLevel};
//!
//! // Create a new AnnealOptions instance with custom parameters
//! let custom_options = AnnealOptions::new(200, 0.1, 4.0, LogLevel::Minimal);
//!
//! // Create a new AnnealOptions instance with default parameters
//! let default_options = AnnealOptions::default();
//! assert_eq!(default_options.get_n_iterations(), 800);
//! ```
//!
//! ## Fields
//!
//! - `n_iterations`: Number of proposal/acceptance cycles, at least 1.
//! - `step_size`: Standard deviation of continuous moves, as a fraction of each
//!   dimension's range.
//! - `temp0`: Numerator of the `temp0 / i` cooling schedule.
//! - `log_level`: How many `tracing` events the run emits.

use tracing::warn;

use crate::error::{AnnealError, Result};

/// Verbosity of the `tracing` events emitted during a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LogLevel {
    /// Per-iteration trace events and an event for every new best.
    Verbose,
    /// One event when the run starts and one when it completes.
    Minimal,
    None,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AnnealOptions {
    n_iterations: usize,
    step_size: f64,
    temp0: f64,
    log_level: LogLevel,
}

impl AnnealOptions {
    pub fn new(n_iterations: usize, step_size: f64, temp0: f64, log_level: LogLevel) -> Self {
        Self {
            n_iterations,
            step_size,
            temp0,
            log_level,
        }
    }

    pub fn get_n_iterations(&self) -> usize {
        self.n_iterations
    }

    pub fn get_step_size(&self) -> f64 {
        self.step_size
    }

    pub fn get_temp0(&self) -> f64 {
        self.temp0
    }

    pub fn get_log_level(&self) -> LogLevel {
        self.log_level
    }

    /// Sets the number of iterations.
    pub fn set_n_iterations(&mut self, n_iterations: usize) {
        self.n_iterations = n_iterations;
    }

    /// Sets the relative step size.
    pub fn set_step_size(&mut self, step_size: f64) {
        self.step_size = step_size;
    }

    /// Sets the initial temperature.
    pub fn set_temp0(&mut self, temp0: f64) {
        self.temp0 = temp0;
    }

    /// Sets the log level.
    pub fn set_log_level(&mut self, log_level: LogLevel) {
        self.log_level = log_level;
    }

    /// Checks the hyperparameters.
    ///
    /// # Errors
    ///
    /// Returns `AnnealError::Configuration` if:
    /// - `n_iterations` is 0
    /// - `step_size` is negative or not finite
    /// - `temp0` is not positive or not finite
    pub fn validate(&self) -> Result<()> {
        let problem = if self.n_iterations == 0 {
            Some("Number of iterations must be at least 1".to_string())
        } else if !self.step_size.is_finite() || self.step_size < 0.0 {
            Some(format!(
                "Step size must be a finite non-negative number, got {}",
                self.step_size
            ))
        } else if !self.temp0.is_finite() || self.temp0 <= 0.0 {
            Some(format!(
                "Initial temperature must be a finite positive number, got {}",
                self.temp0
            ))
        } else {
            None
        };

        match problem {
            Some(msg) => {
                warn!(reason = %msg, "rejected annealing options");
                Err(AnnealError::Configuration(msg))
            }
            None => Ok(()),
        }
    }

    /// Returns a builder for creating an `AnnealOptions` instance.
    ///
    /// # Example
    ///
    /// ```rust
    /// use mixanneal::annealer::options::{AnnealOptions, LogLevel};
    ///
    /// let options = AnnealOptions::builder()
    ///     .n_iterations(1000)
    ///     .step_size(0.1)
    ///     .temp0(10.0)
    ///     .log_level(LogLevel::Minimal)
    ///     .build();
    /// assert_eq!(options.get_temp0(), 10.0);
    /// ```
    pub fn builder() -> AnnealOptionsBuilder {
        AnnealOptionsBuilder::default()
    }
}

impl Default for AnnealOptions {
    fn default() -> Self {
        Self {
            n_iterations: 800,
            step_size: 0.25,
            temp0: 8.0,
            log_level: LogLevel::None,
        }
    }
}

/// Builder for `AnnealOptions`.
///
/// Unset fields fall back to the values of `AnnealOptions::default()`.
#[derive(Debug, Clone, Default)]
pub struct AnnealOptionsBuilder {
    n_iterations: Option<usize>,
    step_size: Option<f64>,
    temp0: Option<f64>,
    log_level: Option<LogLevel>,
}

impl AnnealOptionsBuilder {
    /// Sets the number of iterations.
    pub fn n_iterations(mut self, value: usize) -> Self {
        self.n_iterations = Some(value);
        self
    }

    /// Sets the relative step size.
    pub fn step_size(mut self, value: f64) -> Self {
        self.step_size = Some(value);
        self
    }

    /// Sets the initial temperature.
    pub fn temp0(mut self, value: f64) -> Self {
        self.temp0 = Some(value);
        self
    }

    /// Sets the log level.
    pub fn log_level(mut self, value: LogLevel) -> Self {
        self.log_level = Some(value);
        self
    }

    /// Builds the `AnnealOptions` instance.
    pub fn build(self) -> AnnealOptions {
        let defaults = AnnealOptions::default();
        AnnealOptions {
            n_iterations: self.n_iterations.unwrap_or(defaults.n_iterations),
            step_size: self.step_size.unwrap_or(defaults.step_size),
            temp0: self.temp0.unwrap_or(defaults.temp0),
            log_level: self.log_level.unwrap_or(defaults.log_level),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options_are_valid() {
        let options = AnnealOptions::default();
        assert!(options.validate().is_ok());
        assert_eq!(options.get_step_size(), 0.25);
        assert_eq!(options.get_temp0(), 8.0);
        assert_eq!(options.get_log_level(), LogLevel::None);
    }

    #[test]
    fn test_builder_falls_back_to_defaults() {
        let options = AnnealOptions::builder().n_iterations(10).build();
        assert_eq!(options.get_n_iterations(), 10);
        assert_eq!(options.get_step_size(), 0.25);
        assert_eq!(options.get_temp0(), 8.0);
    }

    #[test]
    fn test_setters() {
        let mut options = AnnealOptions::default();
        options.set_n_iterations(5);
        options.set_step_size(0.0);
        options.set_temp0(1.5);
        options.set_log_level(LogLevel::Verbose);
        assert_eq!(options, AnnealOptions::new(5, 0.0, 1.5, LogLevel::Verbose));
    }

    #[test]
    fn test_zero_iterations_rejected() {
        let options = AnnealOptions::new(0, 0.1, 1.0, LogLevel::None);
        match options.validate() {
            Err(AnnealError::Configuration(msg)) => {
                assert!(msg.contains("Number of iterations"));
            }
            other => panic!("Expected Configuration error, got {:?}", other),
        }
    }

    #[test]
    fn test_bad_step_size_rejected() {
        for step in [-0.1, f64::NAN, f64::INFINITY] {
            let options = AnnealOptions::new(10, step, 1.0, LogLevel::None);
            assert!(options.validate().unwrap_err().is_configuration());
        }
    }

    #[test]
    fn test_bad_temperature_rejected() {
        for temp0 in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let options = AnnealOptions::new(10, 0.1, temp0, LogLevel::None);
            assert!(options.validate().unwrap_err().is_configuration());
        }
    }

    #[test]
    fn test_tiny_temperature_accepted() {
        let options = AnnealOptions::new(10, 0.1, 1e-12, LogLevel::None);
        assert!(options.validate().is_ok());
    }
}
