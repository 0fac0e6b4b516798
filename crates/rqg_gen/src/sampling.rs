//! Call-scoped sampling source
//!
//! Gantree: L2_Generator → SamplingSource
//!
//! Every random draw of one generation call goes through a single
//! [`SamplingSource`]. It wraps ChaCha8, whose output stream is fixed for a
//! given seed across platforms and `rand` releases.

use crate::constants::SEED_UPPER_BOUND;
use rand::distributions::uniform::{SampleRange, SampleUniform};
use rand::seq::SliceRandom;
use rand::{Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Seeded pseudo-random generator owned by one generation call
/// Gantree: SamplingSource // 샘플링 소스
#[derive(Debug, Clone)]
pub struct SamplingSource {
    seed: u64,
    rng: ChaCha8Rng,
}

impl SamplingSource {
    /// Deterministic source for `seed`
    /// Gantree: from_seed(seed) -> Self // 시드 생성
    pub fn from_seed(seed: u64) -> Self {
        Self {
            seed,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Draw a fresh seed in `[0, i32::MAX)` from system entropy
    /// Gantree: entropy_seed() -> u64 // 엔트로피 시드
    pub fn entropy_seed() -> u64 {
        rand::thread_rng().gen_range(0..SEED_UPPER_BOUND)
    }

    /// Use `seed` when given, otherwise draw one from entropy
    pub fn resolve(seed: Option<u64>) -> Self {
        Self::from_seed(seed.unwrap_or_else(Self::entropy_seed))
    }

    /// Seed this source was built from
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Uniform integer over `range`
    /// Gantree: integer(range) -> T // 정수 샘플
    pub fn integer<T, R>(&mut self, range: R) -> T
    where
        T: SampleUniform,
        R: SampleRange<T>,
    {
        self.rng.gen_range(range)
    }

    /// Uniform `u64` over the full range
    pub fn next_u64(&mut self) -> u64 {
        self.rng.next_u64()
    }

    /// Uniform real in `[low, high)`
    /// Gantree: uniform(low, high) -> f64 // 실수 샘플
    pub fn uniform(&mut self, low: f64, high: f64) -> f64 {
        self.rng.gen_range(low..high)
    }

    /// Fisher–Yates shuffle in place
    /// Gantree: shuffle(&mut [T]) // 순열
    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        items.shuffle(&mut self.rng);
    }

    /// Uniform choice; `None` for an empty slice
    /// Gantree: choose(&[T]) -> Option<&T> // 선택
    pub fn choose<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        items.choose(&mut self.rng)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_stream() {
        let mut a = SamplingSource::from_seed(42);
        let mut b = SamplingSource::from_seed(42);

        for _ in 0..20 {
            assert_eq!(a.integer(0..1000u32), b.integer(0..1000u32));
            assert_eq!(a.uniform(0.0, 1.0), b.uniform(0.0, 1.0));
        }

        let mut xs: Vec<u32> = (0..10).collect();
        let mut ys = xs.clone();
        a.shuffle(&mut xs);
        b.shuffle(&mut ys);
        assert_eq!(xs, ys);
    }

    #[test]
    fn test_entropy_seed_range() {
        for _ in 0..50 {
            assert!(SamplingSource::entropy_seed() < SEED_UPPER_BOUND);
        }
    }

    #[test]
    fn test_resolve_keeps_explicit_seed() {
        assert_eq!(SamplingSource::resolve(Some(9)).seed(), 9);
        assert!(SamplingSource::resolve(None).seed() < SEED_UPPER_BOUND);
    }

    #[test]
    fn test_draw_ranges() {
        let mut src = SamplingSource::from_seed(1);
        for _ in 0..200 {
            let n: usize = src.integer(1..=2);
            assert!((1..=2).contains(&n));

            let a = src.uniform(0.0, 2.0);
            assert!((0.0..2.0).contains(&a));
        }
    }

    #[test]
    fn test_shuffle_is_permutation() {
        let mut src = SamplingSource::from_seed(3);
        let mut items: Vec<usize> = (0..16).collect();
        src.shuffle(&mut items);
        items.sort_unstable();
        assert_eq!(items, (0..16).collect::<Vec<_>>());
    }

    #[test]
    fn test_choose() {
        let mut src = SamplingSource::from_seed(5);
        let empty: [u8; 0] = [];
        assert!(src.choose(&empty).is_none());
        assert_eq!(src.choose(&[7]), Some(&7));
    }
}
