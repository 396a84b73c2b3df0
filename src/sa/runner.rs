//! LDSA execution loop.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use super::config::SaConfig;
use super::neighborhood::greedy_hybrid_neighbor;
use crate::error::{Result, TspError};
use crate::model::{Tour, TspInstance};

/// Result of an LDSA run.
#[derive(Debug, Clone)]
pub struct SaResult {
    /// The best tour found during the entire run.
    pub best: Tour,

    /// Length of the best tour (same as `best.length()`).
    pub best_length: f64,

    /// Number of outer loops executed.
    pub outer_iterations: usize,

    /// Total number of neighbor evaluations across all inner loops.
    pub iterations: usize,

    /// Number of accepted moves (downhill and uphill).
    pub accepted_moves: usize,

    /// Number of strictly improving moves.
    pub improving_moves: usize,

    /// Head of the temperature list when the run stopped.
    pub final_temperature: f64,

    /// Whether the run was cancelled externally.
    pub cancelled: bool,
}

/// Executes list-based simulated annealing.
///
/// # Usage
///
/// ```
/// use tsp_heur::model::TspInstance;
/// use tsp_heur::sa::{SaConfig, SaRunner};
///
/// let instance = TspInstance::from_upper_triangular(
///     "square", 4, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0],
/// ).unwrap();
/// let config = SaConfig::default().with_seed(1);
/// let result = SaRunner::run(&instance, &config).unwrap();
/// assert!(result.best.is_valid(&instance));
/// ```
pub struct SaRunner;

impl SaRunner {
    /// Runs LDSA to termination.
    ///
    /// # Errors
    ///
    /// [`TspError::Config`] for an invalid configuration and
    /// [`TspError::DegenerateInstance`] when the instance has fewer than 4
    /// cities, both before any search loop starts.
    pub fn run(instance: &TspInstance, config: &SaConfig) -> Result<SaResult> {
        Self::run_with_cancel(instance, config, None)
    }

    /// Runs LDSA with an optional cancellation token.
    ///
    /// When the flag is set the search stops at the top of the next outer
    /// loop and returns the best tour found so far.
    pub fn run_with_cancel(
        instance: &TspInstance,
        config: &SaConfig,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<SaResult> {
        config.validate()?;

        let n = instance.size();
        if n < 4 {
            return Err(TspError::DegenerateInstance { size: n, required: 4 });
        }

        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::seed_from_u64(rand::random()),
        };

        let mut x = Tour::random(instance, &mut rng);
        let mut best = x.clone();
        let mut temp_list =
            initial_temp_list(instance, config.p0, config.temp_list_length, &mut rng);
        if !temp_list[0].is_finite() {
            return Err(TspError::NumericInstability(
                "initial temperature list contains non-finite values".into(),
            ));
        }

        let inner_length = (2 * n).max(800);
        let mut stagnation = 0usize;
        let mut outer_iterations = 0usize;
        let mut iterations = 0usize;
        let mut accepted_moves = 0usize;
        let mut improving_moves = 0usize;
        let mut cancelled = false;

        debug!(
            instance = instance.name(),
            cities = n,
            initial_temperature = temp_list[0],
            inner_length,
            "starting list-based simulated annealing"
        );

        while temp_list[0] > config.temp_floor && stagnation < config.stagnation_limit {
            if let Some(ref flag) = cancel {
                if flag.load(Ordering::Relaxed) {
                    cancelled = true;
                    break;
                }
            }
            if config.max_outer_iterations > 0 && outer_iterations >= config.max_outer_iterations
            {
                break;
            }

            let temp = temp_list[0];
            let mut recorded: Vec<f64> = Vec::new();
            stagnation += 1;

            for _ in 0..inner_length {
                let y = greedy_hybrid_neighbor(&x, instance, &mut rng);
                let delta = y.length() - x.length();

                if delta <= 0.0 {
                    if delta < 0.0 {
                        improving_moves += 1;
                    }
                    x = y;
                    accepted_moves += 1;
                    if x.length() < best.length() {
                        best = x.clone();
                        stagnation = 0;
                        debug!(length = best.length(), "new best tour");
                    }
                } else {
                    // ln(0) would produce an infinite temperature estimate;
                    // clamp the sample away from zero instead of aborting.
                    let r = rng.random::<f64>().max(f64::MIN_POSITIVE);
                    if r < (-delta / temp).exp() {
                        x = y;
                        accepted_moves += 1;
                        let t = -delta / r.ln();
                        if t.is_finite() {
                            recorded.push(t);
                        }
                    }
                }
                iterations += 1;
            }

            // The head temperature is consumed and replaced by the average
            // temperature implied by the uphill moves just accepted. With
            // no uphill acceptances the list stays untouched, but the outer
            // loop still counts toward stagnation.
            if !recorded.is_empty() {
                let average = recorded.iter().sum::<f64>() / recorded.len() as f64;
                if average.is_finite() {
                    temp_list.remove(0);
                    temp_list.push(average);
                    sort_descending(&mut temp_list);
                }
            }

            outer_iterations += 1;
        }

        debug!(
            outer_iterations,
            iterations,
            best_length = best.length(),
            final_temperature = temp_list[0],
            cancelled,
            "list-based simulated annealing finished"
        );

        Ok(SaResult {
            best_length: best.length(),
            best,
            outer_iterations,
            iterations,
            accepted_moves,
            improving_moves,
            final_temperature: temp_list[0],
            cancelled,
        })
    }
}

/// Builds the initial descending temperature list: a short greedy descent
/// from a random tour, where each step records the temperature at which the
/// observed length difference would be accepted with probability `p0`.
///
/// The difference is taken after the downhill adoption, so improving steps
/// record 0 and only worsening neighbors contribute positive temperatures.
fn initial_temp_list<R: Rng>(
    instance: &TspInstance,
    p0: f64,
    length: usize,
    rng: &mut R,
) -> Vec<f64> {
    // p0 in (0, 1), so -ln(p0) is positive and finite.
    let denominator = -p0.ln();
    let mut x = Tour::random(instance, rng);
    let mut list = Vec::with_capacity(length);
    for _ in 0..length {
        let y = greedy_hybrid_neighbor(&x, instance, rng);
        let y_length = y.length();
        if y_length < x.length() {
            x = y;
        }
        let t = (y_length - x.length()).abs() / denominator;
        list.push(t);
    }
    sort_descending(&mut list);
    list
}

fn sort_descending(list: &mut [f64]) {
    list.sort_by(|a, b| b.partial_cmp(a).unwrap_or(std::cmp::Ordering::Equal));
}
