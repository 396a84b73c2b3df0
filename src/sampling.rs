//! Shared index-sampling helpers for the search operators.

use rand::Rng;

/// Two distinct indices drawn from `lo..hi`, returned sorted ascending.
/// Requires `hi - lo >= 2`.
pub(crate) fn distinct_pair<R: Rng>(lo: usize, hi: usize, rng: &mut R) -> (usize, usize) {
    debug_assert!(hi - lo >= 2);
    let a = rng.random_range(lo..hi);
    let mut b = rng.random_range(lo..hi);
    while b == a {
        b = rng.random_range(lo..hi);
    }
    if a < b {
        (a, b)
    } else {
        (b, a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_distinct_pair_bounds() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..1000 {
            let (a, b) = distinct_pair(1, 9, &mut rng);
            assert!(a < b);
            assert!(a >= 1);
            assert!(b < 9);
        }
    }

    #[test]
    fn test_distinct_pair_two_element_range() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..100 {
            assert_eq!(distinct_pair(3, 5, &mut rng), (3, 4));
        }
    }
}
