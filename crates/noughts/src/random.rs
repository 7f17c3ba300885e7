//! Injected randomness.
//!
//! The engine never reaches for a global generator. It draws through
//! [`RandomSource`], which every `rand` generator implements, so tests can
//! pass a seeded [`StdRng`](rand::rngs::StdRng) or an exact
//! [`ScriptedSource`].

use std::collections::VecDeque;

use rand::{Rng, RngCore};
use tracing::trace;

/// Uniform integer draws.
pub trait RandomSource {
    /// Returns a value in `0..bound`. `bound` is never zero.
    fn next_below(&mut self, bound: usize) -> usize;
}

impl<R: RngCore> RandomSource for R {
    fn next_below(&mut self, bound: usize) -> usize {
        self.random_range(0..bound)
    }
}

/// Replays a fixed list of draws, wrapping each into range.
///
/// # Panics
///
/// Panics when a draw is requested after the script is used up.
#[derive(Debug, Clone, Default)]
pub struct ScriptedSource {
    draws: VecDeque<usize>,
    consumed: usize,
}

impl ScriptedSource {
    /// Creates a source that yields `draws` in order.
    pub fn new(draws: impl IntoIterator<Item = usize>) -> Self {
        Self {
            draws: draws.into_iter().collect(),
            consumed: 0,
        }
    }

    /// Number of draws taken so far.
    pub fn consumed(&self) -> usize {
        self.consumed
    }
}

impl RandomSource for ScriptedSource {
    fn next_below(&mut self, bound: usize) -> usize {
        let Some(draw) = self.draws.pop_front() else {
            panic!("ScriptedSource exhausted after {} draws", self.consumed);
        };
        self.consumed += 1;
        let value = draw % bound;
        trace!(value, bound, "Scripted draw");
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_rng_stays_in_bounds() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..500 {
            assert!(rng.next_below(3) < 3);
        }
    }

    #[test]
    fn test_scripted_source_replays_and_wraps() {
        let mut source = ScriptedSource::new([1, 5, 2]);
        assert_eq!(source.next_below(3), 1);
        assert_eq!(source.next_below(3), 2);
        assert_eq!(source.next_below(3), 2);
        assert_eq!(source.consumed(), 3);
    }

    #[test]
    #[should_panic(expected = "ScriptedSource exhausted after 1 draws")]
    fn test_scripted_source_panics_when_exhausted() {
        let mut source = ScriptedSource::new([4]);
        source.next_below(5);
        source.next_below(5);
    }
}
