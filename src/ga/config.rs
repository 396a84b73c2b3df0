//! GA configuration.

use crate::error::{Result, TspError};

/// Configuration for the steady-state Genetic Algorithm.
///
/// # Examples
///
/// ```
/// use tsp_heur::ga::GaConfig;
///
/// let config = GaConfig::default()
///     .with_population_size(100)
///     .with_mutation_rate(0.2)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct GaConfig {
    /// Number of tours kept in the population.
    pub population_size: usize,

    /// Probability of applying inversion mutation to each child (0.0-1.0).
    pub mutation_rate: f64,

    /// Number of consecutive generations without a new best-ever tour
    /// before the run terminates. 0 disables stagnation-based termination
    /// (a `max_generations` cap is then required).
    pub stagnation_limit: usize,

    /// Hard cap on generations, as a guard against instances where the
    /// stagnation condition takes arbitrarily long. 0 = no cap.
    pub max_generations: usize,

    /// Random seed for reproducibility. `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: 200,
            mutation_rate: 0.1,
            stagnation_limit: 10_000,
            max_generations: 0,
            seed: None,
        }
    }
}

impl GaConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the per-child mutation probability.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Sets the stagnation limit (0 to disable).
    pub fn with_stagnation_limit(mut self, limit: usize) -> Self {
        self.stagnation_limit = limit;
        self
    }

    /// Sets the hard generation cap (0 for no cap).
    pub fn with_max_generations(mut self, n: usize) -> Self {
        self.max_generations = n;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`TspError::Config`] describing the first invalid parameter.
    pub fn validate(&self) -> Result<()> {
        if self.population_size < 2 {
            return Err(TspError::Config(
                "population_size must be at least 2".into(),
            ));
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(TspError::Config(format!(
                "mutation_rate must be in [0, 1], got {}",
                self.mutation_rate
            )));
        }
        if self.stagnation_limit == 0 && self.max_generations == 0 {
            return Err(TspError::Config(
                "either stagnation_limit or max_generations must be set".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GaConfig::default();
        assert_eq!(config.population_size, 200);
        assert!((config.mutation_rate - 0.1).abs() < 1e-12);
        assert_eq!(config.stagnation_limit, 10_000);
        assert_eq!(config.max_generations, 0);
        assert!(config.seed.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = GaConfig::default()
            .with_population_size(50)
            .with_mutation_rate(0.25)
            .with_stagnation_limit(500)
            .with_max_generations(100_000)
            .with_seed(7);
        assert_eq!(config.population_size, 50);
        assert!((config.mutation_rate - 0.25).abs() < 1e-12);
        assert_eq!(config.stagnation_limit, 500);
        assert_eq!(config.max_generations, 100_000);
        assert_eq!(config.seed, Some(7));
    }

    #[test]
    fn test_mutation_rate_clamped() {
        let config = GaConfig::default().with_mutation_rate(1.5);
        assert!((config.mutation_rate - 1.0).abs() < 1e-12);
        let config = GaConfig::default().with_mutation_rate(-0.5);
        assert!((config.mutation_rate - 0.0).abs() < 1e-12);
    }

    #[test]
    fn test_validate_population_too_small() {
        assert!(GaConfig::default().with_population_size(1).validate().is_err());
    }

    #[test]
    fn test_validate_requires_a_termination_condition() {
        let config = GaConfig::default().with_stagnation_limit(0);
        assert!(config.validate().is_err());
        let config = config.with_max_generations(1000);
        assert!(config.validate().is_ok());
    }
}
