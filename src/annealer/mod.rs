//! # Annealer
//!
//! Simulated annealing over a fixed-length vector of continuous and binary
//! components. [`Problem`] holds the validated static data, [`AnnealOptions`]
//! the hyperparameters, and [`Annealer::run`] the search loop itself.
//!
//! ## Example
//!
//! ```rust
//! use mixanneal::annealer::{AnnealOptions, Annealer, Problem};
//! use mixanneal::rng::RandomNumberGenerator;
//! use mixanneal::variable::Variable;
//!
//! let problem = Problem::from_variables(
//!     vec![Variable::continuous(-2.0, 2.0), Variable::Binary],
//!     vec![1.5, 1.0],
//! )
//! .unwrap();
//! let options = AnnealOptions::builder().n_iterations(200).build();
//! let annealer = Annealer::new(options).unwrap();
//!
//! let objective = |x: &[f64]| x[0].powi(2) + x[1];
//! let mut rng = RandomNumberGenerator::from_seed(1);
//! let result = annealer.run(&objective, &problem, &mut rng).unwrap();
//!
//! assert_eq!(result.trace.len(), 201);
//! ```

pub mod options;
pub mod problem;
pub mod runner;
pub mod state;

pub use options::{AnnealOptions, AnnealOptionsBuilder, LogLevel};
pub use problem::Problem;
pub use runner::{simulated_annealing, AnnealResult, Annealer};
pub use state::SearchState;
