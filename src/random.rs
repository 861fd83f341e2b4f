//! Injectable randomness for robot construction and turning.
//!
//! Every random decision in the crate goes through [`RandomSource::draw`], so a
//! seeded [`RngSource`] or a [`ScriptedSource`] makes whole trajectories reproducible.

use rand::rngs::{SmallRng, StdRng};
use rand::{Rng, SeedableRng};

/// A source of uniform choices.
pub trait RandomSource {
    /// Returns a uniform index in `0..n`. Returns 0 when `n` is 0 or 1.
    fn draw(&mut self, n: usize) -> usize;

    /// Returns a uniform integer in the half-open range `lo..hi`.
    fn draw_range(&mut self, lo: i64, hi: i64) -> i64 {
        if hi <= lo {
            return lo;
        }
        lo.saturating_add(self.draw(hi.abs_diff(lo) as usize) as i64)
    }
}

/// Adapter from any [`rand::Rng`] to [`RandomSource`].
#[derive(Clone, Debug)]
pub struct RngSource<R> {
    rng: R,
}

impl<R: Rng> RngSource<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RngSource<SmallRng> {
    /// A fast generator seeded from OS entropy.
    pub fn from_entropy() -> Self {
        Self::new(SmallRng::from_entropy())
    }
}

impl RngSource<StdRng> {
    /// A general-purpose generator seeded from OS entropy.
    pub fn std_from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }

    /// A deterministic generator; equal seeds give equal draw sequences.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> RandomSource for RngSource<R> {
    fn draw(&mut self, n: usize) -> usize {
        if n <= 1 {
            return 0;
        }
        self.rng.gen_range(0..n)
    }
}

/// Replays a fixed script of draws, cycling when exhausted.
///
/// Each scripted value is reduced modulo the requested `n`. An empty script always draws 0.
#[derive(Clone, Debug, Default)]
pub struct ScriptedSource {
    script: Vec<usize>,
    cursor: usize,
}

impl ScriptedSource {
    pub fn new(script: impl IntoIterator<Item = usize>) -> Self {
        Self {
            script: script.into_iter().collect(),
            cursor: 0,
        }
    }

    /// Number of draws consumed so far.
    pub fn consumed(&self) -> usize {
        self.cursor
    }
}

impl RandomSource for ScriptedSource {
    fn draw(&mut self, n: usize) -> usize {
        if self.script.is_empty() || n == 0 {
            self.cursor += 1;
            return 0;
        }
        let value = self.script[self.cursor % self.script.len()];
        self.cursor += 1;
        value % n
    }
}
