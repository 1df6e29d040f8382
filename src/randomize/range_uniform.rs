use rand::{rngs::StdRng, SeedableRng};

use crate::dtypes::Dtype;

use super::Randomizer;

/// Replaces every value with a uniform draw from `[min, max)`.
///
/// The incoming value is ignored; each cell gets an independent sample
/// from this randomizer's own generator.
///
/// ```rust
/// use reinit::prelude::*;
///
/// let mut rand = RangeUniform::seed_from_u64(-0.5, 0.5, 1234);
/// let mut bias = vec![0.0; 3];
/// rand.randomize(&mut bias);
/// assert!(bias.iter().all(|b| (-0.5..0.5).contains(b)));
/// ```
#[derive(Debug, Clone)]
pub struct RangeUniform<E> {
    min: E,
    max: E,
    rng: StdRng,
}

impl<E: Dtype> RangeUniform<E> {
    /// A randomizer over `[min, max)` with an entropy-seeded generator.
    ///
    /// # Panics
    /// Requires `max >= min`.
    pub fn new(min: E, max: E) -> Self {
        Self::with_rng(min, max, StdRng::from_entropy())
    }

    /// Same range, seeded for reproducible output.
    pub fn seed_from_u64(min: E, max: E, seed: u64) -> Self {
        Self::with_rng(min, max, StdRng::seed_from_u64(seed))
    }

    /// Same range, drawing from a caller-supplied generator.
    pub fn with_rng(min: E, max: E, rng: StdRng) -> Self {
        assert!(max >= min, "empty sample range: max {max} < min {min}");
        Self { min, max, rng }
    }
}

impl<E: Dtype> Default for RangeUniform<E> {
    /// The conventional `[-1, 1)` starting range, seeded with 0.
    fn default() -> Self {
        Self::seed_from_u64(-E::one(), E::one(), 0)
    }
}

impl<E: Dtype> Randomizer<E> for RangeUniform<E> {
    fn rng_mut(&mut self) -> &mut StdRng {
        &mut self.rng
    }

    fn randomize_scalar(&mut self, _value: E) -> E {
        let (min, max) = (self.min, self.max);
        self.next_uniform_between(min, max)
    }
}
