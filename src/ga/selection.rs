//! Fitness-proportional (roulette) parent selection.
//!
//! Works on a population sorted ascending by tour length. Each individual
//! gets a relative fitness of `worst_length - length + 1`, so the worst
//! individual keeps weight 1 even when every tour has the same length.
//! Weights are normalized into cumulative probability bins over `[0, 1]`.
//!
//! # References
//!
//! - Goldberg & Deb (1991), "A Comparative Analysis of Selection Schemes
//!   Used in Genetic Algorithms"

/// Builds cumulative probability bins from tour lengths sorted ascending.
///
/// The final bin is forced to exactly 1.0: the normalized partial sums can
/// land slightly below 1.0 after rounding, which would make a sample near
/// 1.0 fall past the last bin.
pub(crate) fn cumulative_probabilities(lengths: &[f64]) -> Vec<f64> {
    debug_assert!(!lengths.is_empty());
    let worst = lengths[lengths.len() - 1];
    let weights: Vec<f64> = lengths.iter().map(|&l| worst - l + 1.0).collect();
    let total: f64 = weights.iter().sum();

    let mut bins = Vec::with_capacity(weights.len());
    let mut cumulative = 0.0;
    for w in weights {
        cumulative += w;
        bins.push(cumulative / total);
    }
    bins[lengths.len() - 1] = 1.0;
    bins
}

/// Returns the index of the first bin that is >= `r`.
///
/// The scan starts at bin 0, so the best individual is reachable through
/// normal sampling: `r = 0.0` always selects index 0 and `r = 1.0` always
/// selects the last index.
pub(crate) fn select_index(bins: &[f64], r: f64) -> usize {
    bins.iter()
        .position(|&b| r <= b)
        .unwrap_or(bins.len() - 1)
}
