//! Greedy hybrid neighborhood generation.
//!
//! One neighbor step evaluates three candidate moves on the same pair of
//! interior indices `(a, b)` — inverse, insert, and swap — and keeps the
//! shortest result. Ties go to the earlier candidate in that order.

use rand::Rng;

use crate::model::{tour_length, Tour, TspInstance};
use crate::sampling::distinct_pair;

/// Generates the greedy hybrid neighbor of `current`.
///
/// Picks two distinct interior indices (city 0 never moves) and returns the
/// shortest of the inverse/insert/swap candidates as a new tour.
///
/// # Panics
///
/// Panics if the instance has fewer than 4 cities (two distinct interior
/// indices need `n >= 4`). [`SaRunner`](super::SaRunner) rejects such
/// instances as degenerate before any loop starts.
pub fn greedy_hybrid_neighbor<R: Rng>(
    current: &Tour,
    instance: &TspInstance,
    rng: &mut R,
) -> Tour {
    let n = current.order().len();
    assert!(n >= 4, "greedy hybrid neighborhood requires at least 4 cities");
    let (a, b) = distinct_pair(1, n - 1, rng);
    greedy_hybrid_neighbor_at(current, instance, a, b)
}

/// The deterministic part of the neighbor step, with the index pair fixed.
pub(crate) fn greedy_hybrid_neighbor_at(
    current: &Tour,
    instance: &TspInstance,
    a: usize,
    b: usize,
) -> Tour {
    let mut inverse = current.order().to_vec();
    inverse[a..=b].reverse();

    let mut insert = current.order().to_vec();
    let moved = insert.remove(b);
    insert.insert(a, moved);

    let mut swap = current.order().to_vec();
    swap.swap(a, b);

    // Strict comparison keeps the earlier candidate on ties.
    let mut best = inverse;
    let mut best_length = tour_length(&best, instance);
    for candidate in [insert, swap] {
        let length = tour_length(&candidate, instance);
        if length < best_length {
            best = candidate;
            best_length = length;
        }
    }

    Tour::from_order(best, instance)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn instance_of(n: usize, seed: u64) -> TspInstance {
        let mut rng = StdRng::seed_from_u64(seed);
        let entries: Vec<f64> = (0..n * (n - 1) / 2)
            .map(|_| rng.random_range(1.0..100.0))
            .collect();
        TspInstance::from_upper_triangular("random", n, &entries).unwrap()
    }

    #[test]
    fn test_neighbor_is_valid_and_keeps_first_city() {
        let instance = instance_of(10, 42);
        let mut rng = StdRng::seed_from_u64(42);
        let mut current = Tour::random(&instance, &mut rng);
        for _ in 0..200 {
            let neighbor = greedy_hybrid_neighbor(&current, &instance, &mut rng);
            assert!(neighbor.is_valid(&instance));
            assert_eq!(neighbor.order()[0], current.order()[0]);
            current = neighbor;
        }
    }

    #[test]
    fn test_picks_shortest_of_three_moves() {
        let instance = instance_of(8, 7);
        let mut rng = StdRng::seed_from_u64(7);
        let current = Tour::random(&instance, &mut rng);

        for a in 1..6 {
            for b in (a + 1)..7 {
                let neighbor = greedy_hybrid_neighbor_at(&current, &instance, a, b);

                let mut inverse = current.order().to_vec();
                inverse[a..=b].reverse();
                let mut insert = current.order().to_vec();
                let moved = insert.remove(b);
                insert.insert(a, moved);
                let mut swap = current.order().to_vec();
                swap.swap(a, b);

                let lengths = [
                    tour_length(&inverse, &instance),
                    tour_length(&insert, &instance),
                    tour_length(&swap, &instance),
                ];
                let min = lengths.iter().cloned().fold(f64::INFINITY, f64::min);
                assert!(
                    (neighbor.length() - min).abs() < 1e-9,
                    "neighbor {} is not the shortest candidate {min}",
                    neighbor.length()
                );
            }
        }
    }

    #[test]
    fn test_tie_broken_by_evaluation_order() {
        // Uniform distances make every move a tie; the inverse candidate
        // must win.
        let instance = TspInstance::from_upper_triangular("uniform", 5, &[1.0; 10]).unwrap();
        let current = Tour::from_order(vec![0, 1, 2, 3, 4], &instance);
        let neighbor = greedy_hybrid_neighbor_at(&current, &instance, 1, 3);
        assert_eq!(neighbor.order(), &[0, 3, 2, 1, 4]);
    }

    #[test]
    fn test_minimum_size() {
        let instance = instance_of(4, 1);
        let mut rng = StdRng::seed_from_u64(1);
        let current = Tour::random(&instance, &mut rng);
        let neighbor = greedy_hybrid_neighbor(&current, &instance, &mut rng);
        assert!(neighbor.is_valid(&instance));
    }

    #[test]
    #[should_panic(expected = "at least 4 cities")]
    fn test_rejects_three_cities() {
        let instance = TspInstance::from_upper_triangular("tri", 3, &[1.0, 2.0, 3.0]).unwrap();
        let mut rng = StdRng::seed_from_u64(1);
        let current = Tour::random(&instance, &mut rng);
        greedy_hybrid_neighbor(&current, &instance, &mut rng);
    }
}
