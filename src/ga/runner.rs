//! Steady-state GA loop execution.
//!
//! One child per generation: select parents, recombine, maybe mutate,
//! replace the worst individual if the child is strictly shorter, then
//! update the best-ever tour and the stagnation counter.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use super::config::GaConfig;
use super::operators::{inversion_mutation, order_crossover};
use super::selection::{cumulative_probabilities, select_index};
use crate::error::{Result, TspError};
use crate::model::{Tour, TspInstance};

/// Result of a GA run.
#[derive(Debug, Clone)]
pub struct GaResult {
    /// The best tour found during the entire run.
    pub best: Tour,

    /// Length of the best tour (same as `best.length()`).
    pub best_length: f64,

    /// Total number of generations executed.
    pub generations: usize,

    /// Whether the run terminated by reaching the stagnation limit.
    pub stagnated: bool,

    /// Whether the run was cancelled externally.
    pub cancelled: bool,

    /// Best-ever length after initialization and after each generation.
    pub length_history: Vec<f64>,
}

/// Executes the steady-state genetic algorithm.
///
/// # Usage
///
/// ```
/// use tsp_heur::model::TspInstance;
/// use tsp_heur::ga::{GaConfig, GaRunner};
///
/// let instance = TspInstance::from_upper_triangular(
///     "square", 4, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0],
/// ).unwrap();
/// let config = GaConfig::default().with_stagnation_limit(100).with_seed(1);
/// let result = GaRunner::run(&instance, &config).unwrap();
/// assert!(result.best.is_valid(&instance));
/// ```
pub struct GaRunner;

impl GaRunner {
    /// Runs the GA to termination.
    ///
    /// # Errors
    ///
    /// [`TspError::Config`] for an invalid configuration and
    /// [`TspError::DegenerateInstance`] when the instance is too small for
    /// the configured operators, both before any search loop starts.
    pub fn run(instance: &TspInstance, config: &GaConfig) -> Result<GaResult> {
        Self::run_with_cancel(instance, config, None)
    }

    /// Runs the GA with an optional cancellation token.
    ///
    /// When the flag is set the loop stops at the top of the next
    /// generation and returns the best tour found so far.
    pub fn run_with_cancel(
        instance: &TspInstance,
        config: &GaConfig,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<GaResult> {
        config.validate()?;

        let n = instance.size();
        if n < 3 {
            return Err(TspError::DegenerateInstance { size: n, required: 3 });
        }
        if config.mutation_rate > 0.0 && n < 4 {
            return Err(TspError::DegenerateInstance { size: n, required: 4 });
        }

        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::seed_from_u64(rand::random()),
        };

        let mut population: Vec<Tour> = (0..config.population_size)
            .map(|_| Tour::random(instance, &mut rng))
            .collect();
        sort_by_length(&mut population);

        let mut best = population[0].clone();
        let mut stagnation = 0usize;
        let mut generations = 0usize;
        let mut cancelled = false;
        let mut length_history = vec![best.length()];

        debug!(
            instance = instance.name(),
            cities = n,
            population = config.population_size,
            "starting genetic algorithm"
        );

        while config.stagnation_limit == 0 || stagnation < config.stagnation_limit {
            if let Some(ref flag) = cancel {
                if flag.load(Ordering::Relaxed) {
                    cancelled = true;
                    break;
                }
            }
            if config.max_generations > 0 && generations >= config.max_generations {
                break;
            }

            // Fitness-proportional selection; the two draws are independent
            // and may pick the same parent twice.
            let lengths: Vec<f64> = population.iter().map(Tour::length).collect();
            let bins = cumulative_probabilities(&lengths);
            let father = select_index(&bins, rng.random::<f64>());
            let mother = select_index(&bins, rng.random::<f64>());

            let mut child_order =
                order_crossover(population[father].order(), population[mother].order(), &mut rng);
            if rng.random::<f64>() < config.mutation_rate {
                inversion_mutation(&mut child_order, &mut rng);
            }

            // Steady-state replacement: child displaces the worst individual
            // only when strictly shorter.
            let child = Tour::from_order(child_order, instance);
            let worst = population.len() - 1;
            if child.length() < population[worst].length() {
                population[worst] = child;
                sort_by_length(&mut population);
            }

            if population[0].length() < best.length() {
                best = population[0].clone();
                stagnation = 0;
                debug!(generation = generations, length = best.length(), "new best tour");
            } else {
                stagnation += 1;
            }

            generations += 1;
            length_history.push(best.length());
        }

        let stagnated =
            config.stagnation_limit > 0 && stagnation >= config.stagnation_limit;
        debug!(
            generations,
            best_length = best.length(),
            stagnated,
            cancelled,
            "genetic algorithm finished"
        );

        Ok(GaResult {
            best_length: best.length(),
            best,
            generations,
            stagnated,
            cancelled,
            length_history,
        })
    }
}

/// Sort the population ascending by length: index 0 best, last worst.
fn sort_by_length(population: &mut [Tour]) {
    population.sort_by(|a, b| {
        a.length()
            .partial_cmp(&b.length())
            .unwrap_or(std::cmp::Ordering::Equal)
    });
}
