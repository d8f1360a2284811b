//! Uniform random selection.
//!
//! Every randomized decision in the engine goes through [`RandomSource`], so
//! callers can swap the process-wide generator for a seeded or scripted one.

use rand::Rng;
use rand::rngs::{StdRng, ThreadRng};

/// A uniform random source.
pub trait RandomSource {
    /// Returns an index drawn uniformly from `0..len`. `len` must be non-zero.
    fn index(&mut self, len: usize) -> usize;

    /// Returns one uniform random bit.
    fn coin(&mut self) -> bool {
        self.index(2) == 1
    }
}

impl RandomSource for ThreadRng {
    fn index(&mut self, len: usize) -> usize {
        self.gen_range(0..len)
    }
}

impl RandomSource for StdRng {
    fn index(&mut self, len: usize) -> usize {
        self.gen_range(0..len)
    }
}

/// Pick one element uniformly, or `None` when `items` is empty.
pub fn choose<'a, T, R>(rng: &mut R, items: &'a [T]) -> Option<&'a T>
where
    R: RandomSource + ?Sized,
{
    if items.is_empty() {
        return None;
    }
    items.get(rng.index(items.len()))
}
