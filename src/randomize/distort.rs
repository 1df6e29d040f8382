use rand::{distributions::Distribution, rngs::StdRng, Rng, SeedableRng};
use rand_distr::StandardNormal;

use crate::dtypes::Dtype;

use super::Randomizer;

/// Perturbs the existing value by zero-mean Gaussian noise:
/// `value + factor * z`, where `z ~ N(0, 1)`.
///
/// Unlike the replacement strategies, the output depends on the input, so
/// already-trained weights keep their structure and only jitter. Useful
/// for nudging a network out of a local minimum without restarting
/// training.
#[derive(Debug, Clone)]
pub struct Distort<E> {
    factor: E,
    rng: StdRng,
}

impl<E: Dtype> Distort<E> {
    /// A perturbation of strength `factor` with an entropy-seeded
    /// generator.
    pub fn new(factor: E) -> Self {
        Self::with_rng(factor, StdRng::from_entropy())
    }

    /// Same strength, seeded for reproducible output.
    pub fn seed_from_u64(factor: E, seed: u64) -> Self {
        Self::with_rng(factor, StdRng::seed_from_u64(seed))
    }

    /// Same strength, drawing from a caller-supplied generator.
    pub fn with_rng(factor: E, rng: StdRng) -> Self {
        Self { factor, rng }
    }
}

impl<E: Dtype> Randomizer<E> for Distort<E>
where
    StandardNormal: Distribution<E>,
{
    fn rng_mut(&mut self) -> &mut StdRng {
        &mut self.rng
    }

    fn randomize_scalar(&mut self, value: E) -> E {
        let z: E = self.rng.sample(StandardNormal);
        value + self.factor * z
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::TestDtype;

    #[test]
    fn test_perturbation_stays_near_original() {
        let mut rand = Distort::seed_from_u64(0.01, 0);
        let original: Vec<TestDtype> = (0..64).map(|i| i as TestDtype).collect();
        let mut data = original.clone();
        rand.randomize(&mut data);
        for (new, old) in data.iter().zip(original.iter()) {
            assert!(new != old);
            // 6 sigma of N(0, 0.01^2)
            assert!((new - old).abs() < 0.06);
        }
    }

    #[test]
    fn test_zero_factor_is_identity() {
        let mut rand = Distort::seed_from_u64(0.0, 3);
        let mut data = [1.5, -2.25, 0.0, 8.0];
        rand.randomize(&mut data);
        assert_eq!(data, [1.5, -2.25, 0.0, 8.0]);
    }

    #[test]
    fn test_same_seed_same_jitter() {
        let mut a = Distort::seed_from_u64(0.1, 11);
        let mut b = Distort::seed_from_u64(0.1, 11);
        let mut left = [0.5; 32];
        let mut right = [0.5; 32];
        a.randomize(&mut left);
        b.randomize(&mut right);
        assert_eq!(left, right);
    }
}
