//! Injectable random source.
//!
//! Strategies draw randomness only through [`RandomSource`], so tests can
//! script exact values and replays stay deterministic.

/// Supplies uniformly distributed floats.
pub trait RandomSource {
    /// Returns a value in `[low, high)`. Returns `low` when the range is empty.
    fn next_random(&mut self, low: f32, high: f32) -> f32;
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn next_random(&mut self, low: f32, high: f32) -> f32 {
        (**self).next_random(low, high)
    }
}

/// PCG random number generator (Permuted Congruential Generator).
///
/// Uses the PCG-XSH-RR variant: 64 bits of state, 32-bit output.
///
/// # Properties
///
/// - **Deterministic**: Same seed always produces the same sequence
/// - **Fast**: Single multiply + xorshift + rotate
/// - **Small state**: Only 64 bits
///
/// # References
///
/// - PCG paper: <https://www.pcg-random.org/>
#[derive(Clone, Debug)]
pub struct PcgRandom {
    state: u64,
}

impl PcgRandom {
    /// PCG multiplier constant.
    const MULTIPLIER: u64 = 6364136223846793005;

    /// PCG increment constant.
    const INCREMENT: u64 = 1442695040888963407;

    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    /// Advances the state and returns the next 32-bit output.
    pub fn next_u32(&mut self) -> u32 {
        self.state = self
            .state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT);

        let state = self.state;
        // XOR upper bits with lower bits, shift right
        let xorshifted = (((state >> 18) ^ state) >> 27) as u32;
        // Use upper bits to determine rotation amount
        let rot = (state >> 59) as u32;
        xorshifted.rotate_right(rot)
    }

    /// Uniform float in `[0, 1)` with 24 bits of precision.
    pub fn next_unit(&mut self) -> f32 {
        (self.next_u32() >> 8) as f32 / (1u32 << 24) as f32
    }
}

impl RandomSource for PcgRandom {
    fn next_random(&mut self, low: f32, high: f32) -> f32 {
        if !(high > low) {
            return low;
        }
        let value = low + (high - low) * self.next_unit();
        // Rounding can land exactly on the excluded bound
        if value < high { value } else { low }
    }
}
