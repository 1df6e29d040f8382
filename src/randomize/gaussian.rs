use rand::{distributions::Distribution, rngs::StdRng, Rng, SeedableRng};
use rand_distr::StandardNormal;

use crate::dtypes::Dtype;

use super::Randomizer;

/// Replaces every value with `mean + stddev * z`, where `z ~ N(0, 1)`.
///
/// The incoming value is ignored. `stddev` is not required to be positive;
/// zero degenerates to constant-fill with `mean`.
#[derive(Debug, Clone)]
pub struct Gaussian<E> {
    mean: E,
    stddev: E,
    rng: StdRng,
}

impl<E: Dtype> Gaussian<E> {
    /// A randomizer over `N(mean, stddev^2)` with an entropy-seeded
    /// generator.
    pub fn new(mean: E, stddev: E) -> Self {
        Self::with_rng(mean, stddev, StdRng::from_entropy())
    }

    /// Same distribution, seeded for reproducible output.
    pub fn seed_from_u64(mean: E, stddev: E, seed: u64) -> Self {
        Self::with_rng(mean, stddev, StdRng::seed_from_u64(seed))
    }

    /// Same distribution, drawing from a caller-supplied generator.
    pub fn with_rng(mean: E, stddev: E, rng: StdRng) -> Self {
        Self { mean, stddev, rng }
    }
}

impl<E: Dtype> Default for Gaussian<E> {
    /// The standard normal `N(0, 1)`, seeded with 0.
    fn default() -> Self {
        Self::seed_from_u64(E::zero(), E::one(), 0)
    }
}

impl<E: Dtype> Randomizer<E> for Gaussian<E>
where
    StandardNormal: Distribution<E>,
{
    fn rng_mut(&mut self) -> &mut StdRng {
        &mut self.rng
    }

    fn randomize_scalar(&mut self, _value: E) -> E {
        let z: E = self.rng.sample(StandardNormal);
        self.mean + self.stddev * z
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::{assert_close, TestDtype};

    #[test]
    fn test_sample_moments_converge() {
        let mut rand = Gaussian::seed_from_u64(2.0, 0.5, 0);
        let n = 10_000;
        let mut samples: Vec<TestDtype> = vec![0.0; n];
        rand.randomize(&mut samples);

        let mean = samples.iter().sum::<TestDtype>() / n as TestDtype;
        let var = samples.iter().map(|v| (v - mean) * (v - mean)).sum::<TestDtype>() / n as TestDtype;
        assert_close(mean, 2.0, 0.05);
        assert_close(var.sqrt(), 0.5, 0.05);
    }

    #[test]
    fn test_zero_stddev_fills_with_mean() {
        let mut rand = Gaussian::seed_from_u64(3.25, 0.0, 7);
        let mut data = [0.0; 8];
        rand.randomize(&mut data);
        assert_eq!(data, [3.25; 8]);
    }

    #[test]
    fn test_output_ignores_input() {
        let mut a = Gaussian::seed_from_u64(0.0, 1.0, 9);
        let mut b = Gaussian::seed_from_u64(0.0, 1.0, 9);
        let mut zeros = [0.0; 16];
        let mut huge = [-4.5e7; 16];
        a.randomize(&mut zeros);
        b.randomize(&mut huge);
        assert_eq!(zeros, huge);
    }
}
