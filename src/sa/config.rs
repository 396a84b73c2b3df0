//! LDSA configuration.

use crate::error::{Result, TspError};

/// Configuration for list-based simulated annealing.
///
/// # Examples
///
/// ```
/// use tsp_heur::sa::SaConfig;
///
/// let config = SaConfig::default()
///     .with_p0(0.2)
///     .with_temp_list_length(100)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct SaConfig {
    /// Initial acceptance-probability target used to derive the starting
    /// temperature list. Must lie strictly between 0 and 1.
    pub p0: f64,

    /// Number of candidate temperatures kept in the list.
    pub temp_list_length: usize,

    /// The outer loop stops once the head temperature is at or below this
    /// floor.
    pub temp_floor: f64,

    /// Number of consecutive outer loops without a new best-ever tour
    /// before the run terminates.
    pub stagnation_limit: usize,

    /// Hard cap on outer loops, as a guard against instances where the
    /// natural termination conditions take arbitrarily long. 0 = no cap.
    pub max_outer_iterations: usize,

    /// Random seed for reproducibility. `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for SaConfig {
    fn default() -> Self {
        Self {
            p0: 0.1,
            temp_list_length: 150,
            temp_floor: 2.0,
            stagnation_limit: 10,
            max_outer_iterations: 0,
            seed: None,
        }
    }
}

impl SaConfig {
    /// Sets the initial acceptance-probability target.
    pub fn with_p0(mut self, p0: f64) -> Self {
        self.p0 = p0;
        self
    }

    /// Sets the temperature list length.
    pub fn with_temp_list_length(mut self, len: usize) -> Self {
        self.temp_list_length = len;
        self
    }

    /// Sets the temperature floor.
    pub fn with_temp_floor(mut self, floor: f64) -> Self {
        self.temp_floor = floor;
        self
    }

    /// Sets the outer-loop stagnation limit.
    pub fn with_stagnation_limit(mut self, limit: usize) -> Self {
        self.stagnation_limit = limit;
        self
    }

    /// Sets the hard outer-loop cap (0 for no cap).
    pub fn with_max_outer_iterations(mut self, n: usize) -> Self {
        self.max_outer_iterations = n;
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
        if !(self.p0 > 0.0 && self.p0 < 1.0) {
            return Err(TspError::Config(format!(
                "p0 must be in (0, 1), got {}",
                self.p0
            )));
        }
        if self.temp_list_length == 0 {
            return Err(TspError::Config("temp_list_length must be at least 1".into()));
        }
        if !self.temp_floor.is_finite() || self.temp_floor < 0.0 {
            return Err(TspError::Config(format!(
                "temp_floor must be finite and non-negative, got {}",
                self.temp_floor
            )));
        }
        if self.stagnation_limit == 0 {
            return Err(TspError::Config("stagnation_limit must be at least 1".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SaConfig::default();
        assert!((config.p0 - 0.1).abs() < 1e-12);
        assert_eq!(config.temp_list_length, 150);
        assert!((config.temp_floor - 2.0).abs() < 1e-12);
        assert_eq!(config.stagnation_limit, 10);
        assert_eq!(config.max_outer_iterations, 0);
        assert!(config.seed.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = SaConfig::default()
            .with_p0(0.3)
            .with_temp_list_length(80)
            .with_temp_floor(1.0)
            .with_stagnation_limit(5)
            .with_max_outer_iterations(1_000)
            .with_seed(11);
        assert!((config.p0 - 0.3).abs() < 1e-12);
        assert_eq!(config.temp_list_length, 80);
        assert!((config.temp_floor - 1.0).abs() < 1e-12);
        assert_eq!(config.stagnation_limit, 5);
        assert_eq!(config.max_outer_iterations, 1_000);
        assert_eq!(config.seed, Some(11));
    }

    #[test]
    fn test_validate_p0_bounds() {
        assert!(SaConfig::default().with_p0(0.0).validate().is_err());
        assert!(SaConfig::default().with_p0(1.0).validate().is_err());
        assert!(SaConfig::default().with_p0(f64::NAN).validate().is_err());
    }

    #[test]
    fn test_validate_empty_list() {
        assert!(SaConfig::default().with_temp_list_length(0).validate().is_err());
    }

    #[test]
    fn test_validate_bad_floor() {
        assert!(SaConfig::default().with_temp_floor(-1.0).validate().is_err());
        assert!(SaConfig::default().with_temp_floor(f64::INFINITY).validate().is_err());
        // A zero floor is valid; the stagnation limit still bounds the run.
        assert!(SaConfig::default().with_temp_floor(0.0).validate().is_ok());
    }

    #[test]
    fn test_validate_zero_stagnation() {
        assert!(SaConfig::default().with_stagnation_limit(0).validate().is_err());
    }
}
