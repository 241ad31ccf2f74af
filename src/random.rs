//! Random-number sources consumed by the sampler.

use std::fmt;
use std::sync::{Arc, Mutex, PoisonError};

use rand::{Rng, SeedableRng};

/// The two uniform draws an alias-table lookup needs.
///
/// Implemented for every [`rand::Rng`], so seeded generators such as
/// `StdRng` or `Pcg32` plug in directly; implement it by hand to feed
/// scripted values in tests.
pub trait RandomSource {
    /// Uniform integer in `0..bound`. `bound` is never zero.
    fn next_u32_bounded(&mut self, bound: u32) -> u32;
    /// Uniform real in `[0, 1)`.
    fn next_f64(&mut self) -> f64;
}

impl<R: Rng + ?Sized> RandomSource for R {
    #[inline]
    fn next_u32_bounded(&mut self, bound: u32) -> u32 {
        self.random_range(0..bound)
    }

    #[inline]
    fn next_f64(&mut self) -> f64 {
        self.random()
    }
}

/// A generator shared between any number of samplers and threads.
///
/// Cloning the handle does not clone the generator: every clone advances the
/// same state, so samplers built from one `SharedSource` draw from a single
/// stream.
pub struct SharedSource<R> {
    inner: Arc<Mutex<R>>,
}

impl<R> SharedSource<R> {
    pub fn new(rng: R) -> Self {
        Self {
            inner: Arc::new(Mutex::new(rng)),
        }
    }

    /// Run `f` with exclusive access to the generator.
    ///
    /// A lock poisoned by a panicking holder is recovered: a generator has no
    /// invariant a half-finished draw can break.
    pub fn with<T>(&self, f: impl FnOnce(&mut R) -> T) -> T {
        let mut guard = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut *guard)
    }
}

impl<R: SeedableRng> SharedSource<R> {
    /// Deterministic source, for reproducible draws.
    pub fn seeded(seed: u64) -> Self {
        Self::new(R::seed_from_u64(seed))
    }

    /// Source seeded from operating-system entropy.
    pub fn from_os_rng() -> Self {
        Self::new(R::from_os_rng())
    }
}

impl<R> Clone for SharedSource<R> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<R> fmt::Debug for SharedSource<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SharedSource")
            .field("handles", &Arc::strong_count(&self.inner))
            .finish_non_exhaustive()
    }
}
