//! # Objective
//!
//! The annealer minimizes an opaque scalar function of the search vector. Any
//! `Fn(&[f64]) -> f64` is an [`Objective`]; objectives that can fail are
//! wrapped in [`FallibleObjective`].
//!
//! A NaN result is not a usable scalar and is reported as a failure. Infinite
//! values are legal and simply compare as very bad (or very good) solutions.
//!
//! ## Example
//!
//! ```rust
//! use mixanneal::objective::{FallibleObjective, Objective};
//!
//! let sphere = |x: &[f64]| x.iter().map(|v| v * v).sum::<f64>();
//! assert_eq!(sphere.evaluate(&[1.0, 2.0]).unwrap(), 5.0);
//!
//! let guarded = FallibleObjective(|x: &[f64]| {
//!     if x[0] == 0.0 {
//!         Err("pole at zero")
//!     } else {
//!         Ok(1.0 / x[0])
//!     }
//! });
//! assert!(guarded.evaluate(&[0.0]).is_err());
//! ```

use std::fmt::Display;

/// A scalar function to minimize.
///
/// Implementations should be pure functions of their input.
pub trait Objective {
    /// Evaluates the objective at `vector`, or returns a failure reason.
    fn evaluate(&self, vector: &[f64]) -> std::result::Result<f64, String>;
}

impl<F> Objective for F
where
    F: Fn(&[f64]) -> f64,
{
    fn evaluate(&self, vector: &[f64]) -> std::result::Result<f64, String> {
        finite_or_nan_error(self(vector))
    }
}

/// Adapter for objectives that report failure through a `Result`.
#[derive(Debug, Clone, Copy)]
pub struct FallibleObjective<F>(pub F);

impl<F, E> Objective for FallibleObjective<F>
where
    F: Fn(&[f64]) -> std::result::Result<f64, E>,
    E: Display,
{
    fn evaluate(&self, vector: &[f64]) -> std::result::Result<f64, String> {
        let value = (self.0)(vector).map_err(|e| e.to_string())?;
        finite_or_nan_error(value)
    }
}

fn finite_or_nan_error(value: f64) -> std::result::Result<f64, String> {
    if value.is_nan() {
        Err("objective returned NaN".to_string())
    } else {
        Ok(value)
    }
}
