use std::sync::atomic::{AtomicU64, Ordering};

/// Small seedable PCG-style generator.
///
/// Randomness in this crate is always drawn from an explicitly owned handle,
/// never a global source, so seeded runs are reproducible and concurrent
/// callers have nothing to contend on.
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u64,
}

impl SimpleRng {
    /// Create a generator seeded from the operating system.
    pub fn new() -> Self {
        let mut seed_bytes = [0u8; 8];
        getrandom::getrandom(&mut seed_bytes).unwrap_or_else(|_| {
            // Fallback: a static counter still yields distinct streams
            static COUNTER: AtomicU64 = AtomicU64::new(1);
            seed_bytes = COUNTER.fetch_add(1, Ordering::Relaxed).to_le_bytes();
        });
        Self::with_seed(u64::from_le_bytes(seed_bytes))
    }

    /// Create a generator with a fixed seed for reproducibility.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            state: seed.wrapping_add(1),
        }
    }

    fn next_u64(&mut self) -> u64 {
        // PCG-like step
        self.state = self
            .state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        let xorshifted = (((self.state >> 18) ^ self.state) >> 27) as u32;
        let rot = (self.state >> 59) as u32;
        (xorshifted.rotate_right(rot)) as u64
    }

    /// Uniform value in `0..bound`
    pub fn next_usize(&mut self, bound: usize) -> usize {
        (self.next_u64() as usize) % bound
    }

    /// Fisher-Yates shuffle
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        for i in (1..slice.len()).rev() {
            let j = self.next_usize(i + 1);
            slice.swap(i, j);
        }
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_streams_agree() {
        let mut a = SimpleRng::with_seed(42);
        let mut b = SimpleRng::with_seed(42);
        for _ in 0..100 {
            assert_eq!(a.next_usize(1000), b.next_usize(1000));
        }
    }

    #[test]
    fn test_bound_respected() {
        let mut rng = SimpleRng::with_seed(7);
        for bound in [1usize, 2, 9, 81] {
            for _ in 0..100 {
                assert!(rng.next_usize(bound) < bound);
            }
        }
    }

    #[test]
    fn test_shuffle_is_a_permutation() {
        let mut rng = SimpleRng::with_seed(3);
        let mut values: Vec<u8> = (1..=9).collect();
        rng.shuffle(&mut values);
        let mut sorted = values.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, (1..=9).collect::<Vec<u8>>());
    }
}
