//! Index selection for pool sampling.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Chooses one index out of `len` candidates (`len > 0`).
pub trait Sampler {
    fn pick(&mut self, len: usize) -> usize;
}

/// Uniform sampling over a `rand` generator.
#[derive(Clone, Debug)]
pub struct RandomSampler<R: Rng = StdRng> {
    rng: R,
}

impl<R: Rng> RandomSampler<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RandomSampler<StdRng> {
    /// Reproducible sampler.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    /// Sampler seeded from the operating system.
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_os_rng())
    }
}

impl<R: Rng> Sampler for RandomSampler<R> {
    fn pick(&mut self, len: usize) -> usize {
        self.rng.random_range(0..len)
    }
}

/// Always picks the first candidate.
#[derive(Clone, Copy, Debug, Default)]
pub struct FirstSampler;

impl Sampler for FirstSampler {
    fn pick(&mut self, _len: usize) -> usize {
        0
    }
}
