// source.rs - where the shuffle comes from
use rand::rngs::ThreadRng;
use rand::seq::SliceRandom;
use rand::Rng;

/// Capability that reorders identifiers before they are dealt into groups.
///
/// Implementations must only permute the slice; the partitioner relies on
/// the multiset of identifiers being unchanged.
pub trait RandomSource {
    fn shuffle(&mut self, ids: &mut [String]);
}

/// Uniform Fisher-Yates shuffle driven by any `rand` generator.
pub struct RngSource<R> {
    rng: R,
}

impl<R: Rng> RngSource<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RngSource<ThreadRng> {
    /// Non-seeded source backed by the thread-local generator.
    pub fn thread() -> Self {
        Self::new(rand::thread_rng())
    }
}

impl<R: Rng> RandomSource for RngSource<R> {
    fn shuffle(&mut self, ids: &mut [String]) {
        ids.shuffle(&mut self.rng);
    }
}
