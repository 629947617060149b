//! # Error Types
//!
//! This module defines the error types for the annealing library. A run can fail
//! in exactly two ways: the static configuration is malformed, or the objective
//! could not produce a value for some vector.
//!
//! ## Examples
//!
//! Using the `Result` type:
//!
//! ```rust
//! use mixanneal::error::{AnnealError, Result};
//!
//! fn check_budget(n_iterations: usize) -> Result<()> {
//!     if n_iterations == 0 {
//!         return Err(AnnealError::Configuration(
//!             "Number of iterations must be at least 1".to_string(),
//!         ));
//!     }
//!     Ok(())
//! }
//!
//! assert!(check_budget(0).is_err());
//! ```

use thiserror::Error;

/// Represents errors that can occur while setting up or running an annealing search.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AnnealError {
    /// Malformed static input, detected once before the search loop starts.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// The objective failed to produce a scalar for `vector`.
    #[error("Objective evaluation error at {vector:?}: {reason}")]
    ObjectiveEvaluation { vector: Vec<f64>, reason: String },
}

impl AnnealError {
    /// Returns `true` if this is a configuration error.
    pub fn is_configuration(&self) -> bool {
        matches!(self, AnnealError::Configuration(_))
    }

    /// Returns the offending vector if this is an objective evaluation error.
    pub fn offending_vector(&self) -> Option<&[f64]> {
        match self {
            AnnealError::ObjectiveEvaluation { vector, .. } => Some(vector),
            AnnealError::Configuration(_) => None,
        }
    }
}

/// A specialized Result type for annealing operations.
pub type Result<T> = std::result::Result<T, AnnealError>;
