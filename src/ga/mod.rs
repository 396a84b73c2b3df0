//! Steady-state Genetic Algorithm for the TSP.
//!
//! One child per generation: two parents drawn by fitness-proportional
//! (roulette) selection, recombined with order crossover (OX1), optionally
//! perturbed with inversion mutation (IVM), and inserted in place of the
//! worst individual when strictly shorter. The run ends after
//! `stagnation_limit` consecutive generations without a new best-ever tour.
//!
//! # Key Types
//!
//! - [`GaConfig`]: population size, mutation probability, termination
//! - [`GaRunner`]: executes the steady-state loop
//! - [`GaResult`]: best tour found plus run statistics
//!
//! # References
//!
//! - Davis (1985), "Applying Adaptive Algorithms to Epistatic Domains"
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and
//!   Machine Learning*

mod config;
pub mod operators;
mod runner;
mod selection;

pub use config::GaConfig;
pub use runner::{GaResult, GaRunner};
