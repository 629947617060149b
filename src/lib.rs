pub mod annealer;
pub mod error;
pub mod objective;
pub mod rng;
pub mod schedule;
pub mod variable;

// Re-export commonly used types for convenience
pub use annealer::{simulated_annealing, AnnealOptions, AnnealResult, Annealer, LogLevel, Problem};
pub use error::{AnnealError, Result};
pub use objective::{FallibleObjective, Objective};
pub use rng::RandomNumberGenerator;
pub use variable::{VarKind, Variable};
