use std::fmt;
use std::sync::{Mutex, PoisonError};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::trace;

/// Source of uniform random picks shared by every request an engine handles.
///
/// Implementations must be safe to call from many threads at once. Each call is
/// an independent draw; no ordering between concurrent callers is implied.
pub trait RandomSource: Send + Sync + fmt::Debug {
    /// Returns an index in `0..len`. Callers never pass `len == 0`.
    fn index(&self, len: usize) -> usize;
}

/// Draws from the calling thread's generator. The default source.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn index(&self, len: usize) -> usize {
        rand::rng().random_range(0..len)
    }
}

/// Reproducible source seeded once at construction.
#[derive(Debug)]
pub struct SeededRandom {
    rng: Mutex<StdRng>,
}

impl SeededRandom {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl RandomSource for SeededRandom {
    fn index(&self, len: usize) -> usize {
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        rng.random_range(0..len)
    }
}

/// Always picks the same position, clamped to the last item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedIndex(pub usize);

impl RandomSource for FixedIndex {
    fn index(&self, len: usize) -> usize {
        self.0.min(len.saturating_sub(1))
    }
}

/// Pick one item uniformly. `None` for an empty slice.
pub fn choose<'a, T>(source: &dyn RandomSource, items: &'a [T]) -> Option<&'a T> {
    if items.is_empty() {
        return None;
    }
    let idx = source.index(items.len());
    trace!(idx, len = items.len(), "random pick");
    items.get(idx)
}
