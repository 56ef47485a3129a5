//! Deterministic seeded random numbers for scene generation.
//!
//! xorshift32. Small, fast, and identical on every platform, so the
//! obstacle scatter rebuilds bit-for-bit from the seed in the config.

/// Deterministic seeded random number generator using xorshift32.
#[derive(Debug, Clone)]
pub struct SeededRandom {
    state: u32,
}

impl SeededRandom {
    /// Creates a new generator with the given seed.
    /// Zero is remapped; xorshift sticks at a zero state.
    pub fn new(seed: u32) -> Self {
        Self {
            state: if seed == 0 { 1 } else { seed },
        }
    }

    /// Returns the next raw 32-bit value.
    pub fn next_u32(&mut self) -> u32 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 17;
        x ^= x << 5;
        self.state = x;
        x
    }

    /// Returns the next float in [0, 1).
    pub fn next(&mut self) -> f32 {
        // Top 24 bits, so the mantissa is exact
        (self.next_u32() >> 8) as f32 / (1u32 << 24) as f32
    }

    /// Returns the next integer in [0, max).
    pub fn next_int(&mut self, max: u32) -> u32 {
        if max == 0 {
            0
        } else {
            self.next_u32() % max
        }
    }

    /// Returns the next float in [min, max).
    pub fn next_range(&mut self, min: f32, max: f32) -> f32 {
        min + self.next() * (max - min)
    }
}
