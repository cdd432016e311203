//! Injected randomness.
//!
//! Generation and placement never reach for a global generator; callers hand
//! in a [`RandomSource`]. Any `rand::Rng` qualifies, and [`Scripted`] replays
//! fixed picks for tests and reproducible demos.

use rand::Rng;

pub trait RandomSource {
    /// Uniform index in `0..bound`. `bound` is never zero.
    fn next_index(&mut self, bound: usize) -> usize;
}

impl<R: Rng + ?Sized> RandomSource for R {
    fn next_index(&mut self, bound: usize) -> usize {
        self.gen_range(0..bound)
    }
}

/// Replays a fixed list of picks, cycling when it runs out. Each pick is
/// reduced modulo the requested bound; an empty script always yields 0.
#[derive(Clone, Debug, Default)]
pub struct Scripted {
    picks: Vec<usize>,
    cursor: usize,
}

impl Scripted {
    pub fn new(picks: impl Into<Vec<usize>>) -> Self {
        Self {
            picks: picks.into(),
            cursor: 0,
        }
    }

    pub fn first() -> Self {
        Self::default()
    }
}

impl RandomSource for Scripted {
    fn next_index(&mut self, bound: usize) -> usize {
        if self.picks.is_empty() {
            return 0;
        }
        let pick = self.picks[self.cursor % self.picks.len()];
        self.cursor += 1;
        pick % bound
    }
}
