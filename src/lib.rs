//! Heuristic search for the symmetric Traveling Salesman Problem.
//!
//! Two independent search engines over a shared instance/tour model:
//!
//! - **Genetic Algorithm (GA)**: steady-state population search with
//!   fitness-proportional (roulette) selection, order crossover (OX1),
//!   inversion mutation (IVM), and worst-replacement. Terminates after a
//!   configurable number of generations without a new best-ever tour.
//! - **List-based Simulated Annealing (LDSA)**: single-solution trajectory
//!   search using a greedy hybrid neighborhood (inverse/insert/swap) under
//!   the Metropolis criterion, with an adaptive list of candidate
//!   temperatures instead of a fixed cooling schedule.
//!
//! The engines never interact; each consumes a [`model::TspInstance`] and
//! returns its best-found [`model::Tour`].
//!
//! # Example
//!
//! ```
//! use tsp_heur::model::TspInstance;
//! use tsp_heur::ga::{GaConfig, GaRunner};
//!
//! // 4 cities, upper-triangular distances d(0,1), d(0,2), d(0,3), d(1,2), ...
//! let instance = TspInstance::from_upper_triangular(
//!     "square", 4, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0],
//! ).unwrap();
//!
//! let config = GaConfig::default().with_stagnation_limit(200).with_seed(42);
//! let result = GaRunner::run(&instance, &config).unwrap();
//! assert!(result.best.is_valid(&instance));
//! ```
//!
//! # References
//!
//! - Davis (1985), "Applying Adaptive Algorithms to Epistatic Domains" (OX1)
//! - Kirkpatrick, Gelatt & Vecchi (1983), "Optimization by Simulated Annealing"
//! - Zhan et al. (2016), "List-Based Simulated Annealing Algorithm for the
//!   Traveling Salesman Problem"

pub mod error;
pub mod ga;
pub mod io;
pub mod model;
pub mod sa;

mod sampling;

pub use error::{Result, TspError};
