//! RNG module - deterministic traffic generation
//!
//! A simple LCG is enough to pick lanes and speed bonuses, and keeps whole
//! runs reproducible from a seed (handy for tests and benchmarks).

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    ///
    /// Scales the full 32-bit output instead of taking a modulus: the low bits
    /// of an LCG cycle with a short period (bit 0 simply alternates).
    pub fn next_range(&mut self, max: u32) -> u32 {
        if max <= 1 {
            let _ = self.next_u32();
            return 0;
        }
        ((self.next_u32() as u64 * max as u64) >> 32) as u32
    }

    /// Current generator state, usable as a seed to resume the sequence.
    pub fn state(&self) -> u32 {
        self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rng_deterministic() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(12345);

        // Same seed should produce same sequence
        for _ in 0..100 {
            assert_eq!(rng1.next_u32(), rng2.next_u32());
        }
    }

    #[test]
    fn test_rng_different_seeds() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(54321);

        let v1 = rng1.next_u32();
        let v2 = rng2.next_u32();
        assert_ne!(v1, v2);
    }

    #[test]
    fn test_zero_seed_is_usable() {
        let mut rng = SimpleRng::new(0);
        assert_ne!(rng.next_u32(), 0);
    }

    #[test]
    fn test_range_stays_in_bounds() {
        let mut rng = SimpleRng::new(7);
        for max in 1..10 {
            for _ in 0..200 {
                assert!(rng.next_range(max) < max);
            }
        }
    }

    #[test]
    fn test_range_is_roughly_uniform() {
        let mut rng = SimpleRng::new(2024);
        let mut counts = [0u32; 4];
        for _ in 0..8000 {
            counts[rng.next_range(4) as usize] += 1;
        }
        // Expect ~2000 each; a modulus on the low bits would give a fixed cycle.
        for c in counts {
            assert!((1700..=2300).contains(&c), "skewed bucket: {counts:?}");
        }
    }

    #[test]
    fn test_state_resumes_sequence() {
        let mut rng = SimpleRng::new(99);
        rng.next_u32();
        let mut resumed = SimpleRng::new(rng.state());
        assert_eq!(rng.next_u32(), resumed.next_u32());
    }
}
