//! Move selectors: the pluggable choice used by the stochastic strategy and
//! the random baseline.
//!
//! The engine never reaches for a process-wide random source; randomness is
//! injected through a [`Selector`] so tests can substitute a deterministic
//! one and make every sampled playout reproducible bit-for-bit.

use rand::Rng;

/// Chooses one candidate from a non-empty slice, by index.
///
/// Callers guarantee the slice is non-empty; implementors must return an
/// index `< moves.len()`.
pub trait Selector<M> {
    fn choose(&mut self, moves: &[M]) -> usize;
}

/// Adapter turning a closure into a selector, which keeps scripted choices
/// in tests cheap to write.
pub struct FromFn<F>(pub F);

impl<M, F> Selector<M> for FromFn<F>
where
    F: FnMut(&[M]) -> usize,
{
    #[inline]
    fn choose(&mut self, moves: &[M]) -> usize {
        (self.0)(moves)
    }
}

#[derive(Debug, Clone, Copy, Default)]
/// Always picks the first enumerated move.
pub struct FirstMove;

impl<M> Selector<M> for FirstMove {
    #[inline]
    fn choose(&mut self, _moves: &[M]) -> usize {
        0
    }
}

#[derive(Debug, Clone)]
/// Uniformly random choice backed by any [`Rng`].
///
/// Seed with `StdRng::seed_from_u64` for runs that are random but
/// reproducible.
pub struct UniformRandom<R: Rng> {
    rng: R,
}

impl<R: Rng> UniformRandom<R> {
    #[inline]
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<M, R: Rng> Selector<M> for UniformRandom<R> {
    #[inline]
    fn choose(&mut self, moves: &[M]) -> usize {
        self.rng.gen_range(0..moves.len())
    }
}
