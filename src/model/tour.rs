//! Circular tour over an instance, with cached length.

use rand::seq::SliceRandom;
use rand::Rng;

use super::instance::TspInstance;

/// A closed visiting order over all cities of one instance.
///
/// The order is stored as a plain permutation of `0..n`; the closing edge
/// back to `order[0]` is implicit. The closing duplicate city only exists
/// at the serialization boundary (see [`closed_order`](Tour::closed_order)).
///
/// The length is computed once at construction and never changes: engines
/// build new tours instead of mutating existing ones.
#[derive(Debug, Clone)]
pub struct Tour {
    order: Vec<usize>,
    length: f64,
}

impl Tour {
    /// Builds a tour from an explicit visiting order (offspring, neighbor,
    /// or loaded result). The order must be a permutation of `0..n` without
    /// the closing duplicate; engine operators uphold this by construction.
    pub fn from_order(order: Vec<usize>, instance: &TspInstance) -> Self {
        let length = tour_length(&order, instance);
        Self { order, length }
    }

    /// Builds a uniformly random tour (Fisher-Yates shuffle, so every
    /// permutation is equally likely).
    pub fn random<R: Rng>(instance: &TspInstance, rng: &mut R) -> Self {
        let mut order: Vec<usize> = (0..instance.size()).collect();
        order.shuffle(rng);
        Self::from_order(order, instance)
    }

    /// The visiting order, without the closing duplicate.
    pub fn order(&self) -> &[usize] {
        &self.order
    }

    /// Cached total length, including the closing edge.
    pub fn length(&self) -> f64 {
        self.length
    }

    /// The visiting order with the first city repeated at the end, as used
    /// by the file formats.
    pub fn closed_order(&self) -> Vec<usize> {
        let mut closed = self.order.clone();
        if let Some(&first) = closed.first() {
            closed.push(first);
        }
        closed
    }

    /// Structural validity check: the order visits every city of the
    /// instance exactly once. Used by tests and verification, not on the
    /// search hot path.
    pub fn is_valid(&self, instance: &TspInstance) -> bool {
        let n = instance.size();
        if self.order.len() != n {
            return false;
        }
        let mut seen = vec![false; n];
        for &city in &self.order {
            if city >= n || seen[city] {
                return false;
            }
            seen[city] = true;
        }
        true
    }
}

/// Sum of consecutive distances plus the closing edge. O(n), no side
/// effects.
pub(crate) fn tour_length(order: &[usize], instance: &TspInstance) -> f64 {
    let mut length = 0.0;
    for pair in order.windows(2) {
        length += instance.distance(pair[0], pair[1]);
    }
    if let (Some(&last), Some(&first)) = (order.last(), order.first()) {
        if order.len() > 1 {
            length += instance.distance(last, first);
        }
    }
    length
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn square() -> TspInstance {
        TspInstance::from_upper_triangular("square", 4, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap()
    }

    #[test]
    fn test_length_is_literal_sum() {
        let instance = square();
        let tour = Tour::from_order(vec![0, 1, 2, 3], &instance);
        // d(0,1) + d(1,2) + d(2,3) + d(3,0) = 1 + 4 + 6 + 3
        assert!((tour.length() - 14.0).abs() < 1e-12);
    }

    #[test]
    fn test_random_tour_is_valid() {
        let instance = square();
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..200 {
            let tour = Tour::random(&instance, &mut rng);
            assert!(tour.is_valid(&instance));
            assert!(tour.length() >= 0.0);
        }
    }

    #[test]
    fn test_random_tour_covers_permutations() {
        // With 4 cities there are 24 orders; a uniform sampler should see
        // many distinct ones in 500 draws.
        let instance = square();
        let mut rng = StdRng::seed_from_u64(7);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..500 {
            seen.insert(Tour::random(&instance, &mut rng).order().to_vec());
        }
        assert!(seen.len() >= 20, "only {} distinct orders seen", seen.len());
    }

    #[test]
    fn test_closed_order_repeats_first_city() {
        let instance = square();
        let tour = Tour::from_order(vec![2, 0, 3, 1], &instance);
        assert_eq!(tour.closed_order(), vec![2, 0, 3, 1, 2]);
    }

    #[test]
    fn test_is_valid_rejects_duplicates_and_gaps() {
        let instance = square();
        let dup = Tour::from_order(vec![0, 1, 1, 3], &instance);
        assert!(!dup.is_valid(&instance));
        let short = Tour::from_order(vec![0, 1, 2], &instance);
        assert!(!short.is_valid(&instance));
    }
}
