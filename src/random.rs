//! Injectable randomness for placement and targeting.
//!
//! Every `rand::Rng` is a [`RandomSource`], so production code passes a
//! `SmallRng`. Tests that need an exact outcome can replay a fixed list of
//! draws with [`Sequence`].

use alloc::vec::Vec;
use rand::Rng;

/// Uniform draws used by the game core.
pub trait RandomSource {
    /// Uniform integer in `low..=high`. Requires `low <= high`.
    fn uniform_int(&mut self, low: usize, high: usize) -> usize;

    /// Uniform choice from `items`; `None` when empty.
    fn uniform_choice<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        if items.is_empty() {
            return None;
        }
        let idx = self.uniform_int(0, items.len() - 1);
        items.get(idx)
    }
}

impl<R: Rng + ?Sized> RandomSource for R {
    fn uniform_int(&mut self, low: usize, high: usize) -> usize {
        self.random_range(low..=high)
    }
}

/// Replays a fixed list of draws, cycling when exhausted.
///
/// Each draw is clamped into the requested range, so `0` always yields the
/// lowest value and `usize::MAX` the highest.
#[derive(Debug, Clone)]
pub struct Sequence {
    draws: Vec<usize>,
    pos: usize,
}

impl Sequence {
    pub fn new(draws: impl Into<Vec<usize>>) -> Self {
        Self {
            draws: draws.into(),
            pos: 0,
        }
    }

    /// Number of draws consumed so far.
    pub fn consumed(&self) -> usize {
        self.pos
    }
}

impl RandomSource for Sequence {
    fn uniform_int(&mut self, low: usize, high: usize) -> usize {
        let draw = if self.draws.is_empty() {
            0
        } else {
            self.draws[self.pos % self.draws.len()]
        };
        self.pos += 1;
        draw.clamp(low, high)
    }
}
