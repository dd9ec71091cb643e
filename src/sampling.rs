use crate::point::Point;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::collections::HashSet;

/// Produce a fresh seed for callers that did not supply one.
///
/// The seed is reported back in every outcome so a run can be repeated.
pub fn random_seed() -> u64 {
    rand::random()
}

/// RNG for one restart.
///
/// Every restart gets its own ChaCha stream under the shared seed, so restarts
/// are independent and each can be reproduced on its own.
pub fn restart_rng(seed: u64, restart: usize) -> ChaCha8Rng {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    rng.set_stream(restart as u64);
    rng
}

/// Pick `count` seed locations from `pool` by drawing uniform indices.
///
/// A draw whose point equals an already chosen one is rejected until every
/// distinct point of the pool has been chosen; after that, repeats are
/// accepted so the sampling always finishes.
///
/// Returns an empty vector if `pool` is empty.
pub fn sample_distinct<R: Rng + ?Sized>(pool: &[Point], count: usize, rng: &mut R) -> Vec<Point> {
    if pool.is_empty() {
        return Vec::new();
    }

    let distinct = pool.iter().collect::<HashSet<_>>().len();
    let mut chosen = Vec::with_capacity(count);
    let mut seen = HashSet::with_capacity(count);

    while chosen.len() < count {
        let candidate = pool[rng.gen_range(0..pool.len())];
        if seen.len() >= distinct || seen.insert(candidate) {
            chosen.push(candidate);
        }
    }

    chosen
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pts(coords: &[(i32, i32)]) -> Vec<Point> {
        coords.iter().copied().map(Point::from).collect()
    }

    #[test]
    fn test_sample_without_repeats() {
        let pool: Vec<Point> = (0..20).map(|i| Point::new(i, -i)).collect();
        let mut rng = restart_rng(42, 0);

        let chosen = sample_distinct(&pool, 20, &mut rng);

        assert_eq!(chosen.len(), 20);
        let unique: HashSet<_> = chosen.iter().collect();
        assert_eq!(unique.len(), 20);
    }

    #[test]
    fn test_duplicate_values_count_as_used() {
        let pool = pts(&[(1, 1), (1, 1), (1, 1), (2, 2)]);
        let mut rng = restart_rng(7, 0);

        let chosen = sample_distinct(&pool, 2, &mut rng);
        let unique: HashSet<_> = chosen.iter().collect();
        assert_eq!(unique.len(), 2);
    }

    #[test]
    fn test_exhaustion_allows_repeats() {
        let pool = pts(&[(3, 3), (3, 3)]);
        let mut rng = restart_rng(1, 0);

        let chosen = sample_distinct(&pool, 4, &mut rng);
        assert_eq!(chosen, pts(&[(3, 3), (3, 3), (3, 3), (3, 3)]));
    }

    #[test]
    fn test_empty_pool() {
        let mut rng = restart_rng(1, 0);
        assert!(sample_distinct(&[], 3, &mut rng).is_empty());
    }

    #[test]
    fn test_restart_streams_reproducible_and_independent() {
        let pool: Vec<Point> = (0..100).map(|i| Point::new(i, i * 2)).collect();

        let a = sample_distinct(&pool, 5, &mut restart_rng(9, 3));
        let b = sample_distinct(&pool, 5, &mut restart_rng(9, 3));
        let c = sample_distinct(&pool, 5, &mut restart_rng(9, 4));

        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
