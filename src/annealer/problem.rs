use tracing::warn;

use crate::error::{AnnealError, Result};
use crate::variable::{VarKind, Variable};

/// Static problem data: one descriptor per dimension and the starting vector.
///
/// Construction validates shapes and bounds once, so the search loop never has
/// to. Whether `init` lies inside the bounds is the caller's responsibility;
/// see [`Problem::init_within_bounds`].
#[derive(Debug, Clone, PartialEq)]
pub struct Problem {
    variables: Vec<Variable>,
    init: Vec<f64>,
}

impl Problem {
    /// Builds a problem from parallel `bounds` and `var_kinds` lists.
    ///
    /// Bounds of binary dimensions are checked like any other pair but do not
    /// affect the flip proposal.
    ///
    /// # Errors
    ///
    /// Returns `AnnealError::Configuration` if:
    /// - `bounds`, `var_kinds` and `init` differ in length
    /// - the vector has no dimensions
    /// - any bound is not finite, has `lower > upper`, or spans a range
    ///   wider than `f64` can represent
    pub fn new(bounds: &[(f64, f64)], var_kinds: &[VarKind], init: Vec<f64>) -> Result<Self> {
        if var_kinds.len() != init.len() || bounds.len() != init.len() {
            return Err(configuration(format!(
                "Dimension mismatch: {} variable kinds, {} bounds, {} initial values",
                var_kinds.len(),
                bounds.len(),
                init.len()
            )));
        }
        check_bounds(bounds)?;

        let variables = var_kinds
            .iter()
            .zip(bounds)
            .map(|(kind, &(lower, upper))| match kind {
                VarKind::Continuous => Variable::Continuous { lower, upper },
                VarKind::Binary => Variable::Binary,
            })
            .collect();

        Self::from_variables(variables, init)
    }

    /// Builds a problem from pre-built descriptors.
    ///
    /// # Errors
    ///
    /// Returns `AnnealError::Configuration` on a length mismatch, an empty
    /// vector, or invalid continuous bounds.
    pub fn from_variables(variables: Vec<Variable>, init: Vec<f64>) -> Result<Self> {
        if variables.len() != init.len() {
            return Err(configuration(format!(
                "Dimension mismatch: {} variables, {} initial values",
                variables.len(),
                init.len()
            )));
        }
        if variables.is_empty() {
            return Err(configuration(
                "Search vector must have at least one dimension".to_string(),
            ));
        }
        let bounds: Vec<(f64, f64)> = variables.iter().map(Variable::bounds).collect();
        check_bounds(&bounds)?;

        Ok(Self { variables, init })
    }

    pub fn variables(&self) -> &[Variable] {
        &self.variables
    }

    pub fn init(&self) -> &[f64] {
        &self.init
    }

    pub fn dimensions(&self) -> usize {
        self.variables.len()
    }

    /// Returns `true` if every component of `init` is valid for its dimension.
    ///
    /// The annealer does not call this; an out-of-bounds `init` still seeds the
    /// initial best.
    pub fn init_within_bounds(&self) -> bool {
        self.variables
            .iter()
            .zip(&self.init)
            .all(|(var, &value)| var.contains(value))
    }
}

fn check_bounds(bounds: &[(f64, f64)]) -> Result<()> {
    for (k, &(lower, upper)) in bounds.iter().enumerate() {
        if !lower.is_finite() || !upper.is_finite() {
            return Err(configuration(format!(
                "Bounds of dimension {} must be finite, got ({}, {})",
                k, lower, upper
            )));
        }
        if lower > upper {
            return Err(configuration(format!(
                "Lower bound exceeds upper bound in dimension {}: ({}, {})",
                k, lower, upper
            )));
        }
        if !(upper - lower).is_finite() {
            return Err(configuration(format!(
                "Range of dimension {} overflows: ({}, {})",
                k, lower, upper
            )));
        }
    }
    Ok(())
}

fn configuration(msg: String) -> AnnealError {
    warn!(reason = %msg, "rejected problem configuration");
    AnnealError::Configuration(msg)
}
