//! # Variables
//!
//! A search vector is a fixed-length sequence of `f64` components. Each
//! dimension is described by a [`Variable`], which fixes how that component is
//! perturbed when the annealer proposes a neighbor.
//!
//! ## Example
//!
//! ```rust
//! use mixanneal::rng::RandomNumberGenerator;
//! use mixanneal::variable::Variable;
//!
//! let mut rng = RandomNumberGenerator::from_seed(1);
//! let x = Variable::continuous(-2.0, 2.0);
//! let moved = x.perturb(0.5, 0.25, &mut rng);
//! assert!((-2.0..=2.0).contains(&moved));
//!
//! let b = Variable::Binary;
//! let flipped = b.perturb(1.0, 0.25, &mut rng);
//! assert!(flipped == 0.0 || flipped == 1.0);
//! ```

use std::fmt;

use crate::rng::RandomNumberGenerator;

/// Probability that a binary component is flipped in one proposal.
pub const BINARY_FLIP_PROBABILITY: f64 = 0.25;

/// Plain kind tag for a dimension, as supplied alongside a bounds list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum VarKind {
    Continuous,
    Binary,
}

impl fmt::Display for VarKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VarKind::Continuous => write!(f, "continuous"),
            VarKind::Binary => write!(f, "binary"),
        }
    }
}

/// Descriptor for one dimension of the search vector.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "lowercase"))]
pub enum Variable {
    /// A real-valued component restricted to `[lower, upper]`.
    Continuous { lower: f64, upper: f64 },
    /// A component restricted to `{0.0, 1.0}`.
    Binary,
}

impl Variable {
    pub fn continuous(lower: f64, upper: f64) -> Self {
        Variable::Continuous { lower, upper }
    }

    /// Returns the kind tag of this descriptor.
    pub fn kind(&self) -> VarKind {
        match self {
            Variable::Continuous { .. } => VarKind::Continuous,
            Variable::Binary => VarKind::Binary,
        }
    }

    /// Returns the `(lower, upper)` limits of valid values.
    pub fn bounds(&self) -> (f64, f64) {
        match *self {
            Variable::Continuous { lower, upper } => (lower, upper),
            Variable::Binary => (0.0, 1.0),
        }
    }

    /// Returns `true` if `value` is a valid component for this dimension.
    pub fn contains(&self, value: f64) -> bool {
        match *self {
            Variable::Continuous { lower, upper } => (lower..=upper).contains(&value),
            Variable::Binary => value == 0.0 || value == 1.0,
        }
    }

    /// Proposes a new value for this dimension.
    ///
    /// Continuous components receive Gaussian noise with standard deviation
    /// `step_size * (upper - lower)` and are clamped back into their bounds.
    /// Binary components are flipped with probability [`BINARY_FLIP_PROBABILITY`].
    /// Exactly one draw is taken from `rng` in either case.
    ///
    /// # Panics
    ///
    /// Panics if a continuous descriptor has `lower > upper` or NaN bounds.
    /// A range whose width overflows `f64` is only safe with a zero step.
    /// [`Problem`](crate::annealer::Problem) rejects such descriptors up front.
    pub fn perturb(&self, value: f64, step_size: f64, rng: &mut RandomNumberGenerator) -> f64 {
        match *self {
            Variable::Continuous { lower, upper } => {
                let z = rng.standard_normal();
                if step_size == 0.0 {
                    return value.clamp(lower, upper);
                }
                let noise = z * step_size * (upper - lower);
                (value + noise).clamp(lower, upper)
            }
            Variable::Binary => {
                if rng.uniform() < BINARY_FLIP_PROBABILITY {
                    1.0 - value
                } else {
                    value
                }
            }
        }
    }
}
