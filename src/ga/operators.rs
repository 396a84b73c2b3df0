//! Permutation-preserving genetic operators: order crossover and inversion
//! mutation.
//!
//! Both operate on open visiting orders (no closing duplicate); the runner
//! re-measures the result against the instance.
//!
//! # References
//!
//! - Davis (1985), "Applying Adaptive Algorithms to Epistatic Domains" (OX1)
//! - Fogel (1988) inversion-style reordering mutation (IVM)

use rand::Rng;

use crate::sampling::distinct_pair;

/// Order Crossover (OX1).
///
/// Copies the segment `father[a..b]` (two distinct random cut points with
/// `0 < a < b < n`) into the child at the same positions, then walks the
/// mother's order starting at position `b`, wrapping at `n`, placing each
/// city not already present into the next unfilled slot until the slot at
/// position `a` is reached. Preserves the relative order of the mother's
/// remaining cities.
///
/// # Panics
///
/// Panics if the parents differ in length or have fewer than 3 cities
/// (two distinct interior cut points need `n >= 3`). Engine runners reject
/// such instances as degenerate before any loop starts.
pub fn order_crossover<R: Rng>(father: &[usize], mother: &[usize], rng: &mut R) -> Vec<usize> {
    let n = father.len();
    assert_eq!(n, mother.len(), "parents must have equal length");
    assert!(n >= 3, "order crossover requires at least 3 cities");

    let (a, b) = distinct_pair(1, n, rng);

    let mut child = vec![usize::MAX; n];
    let mut used = vec![false; n];
    for i in a..b {
        child[i] = father[i];
        used[father[i]] = true;
    }

    // Fill from the mother starting at the right cut, wrapping at n. The
    // child slot advances only when a city is placed; the walk ends when
    // the slot at the left cut comes around again.
    let mut slot = b;
    let mut mi = b;
    while slot != a {
        let city = mother[mi];
        if !used[city] {
            child[slot] = city;
            used[city] = true;
            slot = (slot + 1) % n;
        }
        mi = (mi + 1) % n;
    }

    child
}

/// Inversion mutation (IVM).
///
/// Splices out the inclusive block between two distinct random interior
/// indices, reverses it, and reinserts it at a uniformly random position in
/// the remaining sequence.
///
/// # Panics
///
/// Panics if the order has fewer than 4 cities (two distinct interior
/// splice indices need `n >= 4`).
pub fn inversion_mutation<R: Rng>(order: &mut Vec<usize>, rng: &mut R) {
    let n = order.len();
    assert!(n >= 4, "inversion mutation requires at least 4 cities");

    let (a, b) = distinct_pair(1, n - 1, rng);

    let block: Vec<usize> = order.drain(a + 1..=b).rev().collect();
    let at = rng.random_range(0..order.len());
    order.splice(at..at, block);
}
