//! List-based Simulated Annealing (LDSA) for the TSP.
//!
//! A single-solution trajectory search that replaces the classic cooling
//! schedule with an adaptive, descending list of candidate temperatures:
//! the head of the list drives the Metropolis criterion for one inner loop,
//! and temperatures implied by the uphill moves actually accepted replace
//! it afterwards. The run stops when the head temperature falls to the
//! floor or no new best-ever tour appears for several outer loops.
//!
//! # Key Types
//!
//! - [`SaConfig`]: acceptance target, list length, termination
//! - [`SaRunner`]: executes the annealing loop
//! - [`SaResult`]: best tour found plus run statistics
//!
//! # References
//!
//! - Kirkpatrick, Gelatt & Vecchi (1983), "Optimization by Simulated Annealing"
//! - Zhan et al. (2016), "List-Based Simulated Annealing Algorithm for the
//!   Traveling Salesman Problem"

mod config;
pub mod neighborhood;
mod runner;

pub use config::SaConfig;
pub use runner::{SaResult, SaRunner};
