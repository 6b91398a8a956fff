use serde::{Deserialize, Serialize};

use super::RandomSource;

/// Deterministic mulberry32 generator.
///
/// State is a single `u32` and every step uses wrapping 32-bit arithmetic, so
/// a given seed yields the same sequence on every platform. This is the only
/// place where exact numeric reproducibility matters: it is what makes seeded
/// games shareable.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mulberry32 {
    state: u32,
}

impl Mulberry32 {
    pub const fn new(seed: u32) -> Self {
        Self { state: seed }
    }
}

impl RandomSource for Mulberry32 {
    fn next_f64(&mut self) -> f64 {
        self.state = self.state.wrapping_add(0x6D2B_79F5);
        let mut t = self.state;
        t = (t ^ (t >> 15)).wrapping_mul(t | 1);
        t ^= t.wrapping_add((t ^ (t >> 7)).wrapping_mul(t | 61));
        // 32 bits of output scaled into [0, 1); exact in an f64
        f64::from(t ^ (t >> 14)) / 4_294_967_296.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    fn numerators(seed: u32, n: usize) -> Vec<u32> {
        let mut rng = Mulberry32::new(seed);
        (0..n)
            .map(|_| (rng.next_f64() * 4_294_967_296.0) as u32)
            .collect()
    }

    #[test]
    fn seed_42_matches_reference_sequence() {
        // Outputs are k / 2^32, so comparing the 32-bit numerators is exact.
        assert_eq!(
            numerators(42, 6),
            [
                2581720956, 1925393290, 3661312704, 2876485805, 750819978, 2261697747
            ]
        );
    }

    #[test]
    fn seed_123_matches_reference_sequence() {
        assert_eq!(
            numerators(123, 4),
            [3381219976, 766838775, 2127363934, 993692063]
        );
    }

    #[test]
    fn same_seed_same_sequence() {
        let mut a = Mulberry32::new(0xDEAD_BEEF);
        let mut b = Mulberry32::new(0xDEAD_BEEF);
        for _ in 0..64 {
            assert_eq!(a.next_f64(), b.next_f64());
        }
    }

    #[test]
    fn reseeding_restarts_the_sequence() {
        let mut rng = Mulberry32::new(5);
        let first = rng.next_f64();
        for _ in 0..10 {
            rng.next_f64();
        }
        assert_eq!(Mulberry32::new(5).next_f64(), first);
    }

    #[test]
    fn outputs_stay_in_unit_interval() {
        let mut rng = Mulberry32::new(1);
        for _ in 0..10_000 {
            let value = rng.next_f64();
            assert!((0.0..1.0).contains(&value));
        }
    }
}
