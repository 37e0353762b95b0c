//! Choosing who moves first.
//!
//! The engine never touches a random source directly. It asks a
//! [`FirstPlayerChooser`], so tests can pin the opening player.

use super::Mark;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, instrument};

/// Capability for picking the opening mark.
pub trait FirstPlayerChooser {
    /// Returns the mark that moves first.
    fn choose_first_player(&mut self) -> Mark;
}

/// Picks X or O with equal probability.
#[derive(Debug, Clone)]
pub struct RandomChooser<R> {
    rng: R,
}

impl<R: Rng> RandomChooser<R> {
    /// Wraps an existing random source.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RandomChooser<StdRng> {
    /// Seeds from OS entropy.
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }

    /// Deterministic chooser for a given seed.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> FirstPlayerChooser for RandomChooser<R> {
    #[instrument(skip(self))]
    fn choose_first_player(&mut self) -> Mark {
        let mark = if self.rng.gen_bool(0.5) { Mark::X } else { Mark::O };
        debug!(%mark, "Chose first player");
        mark
    }
}

/// Always returns the same mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedChooser(pub Mark);

impl FirstPlayerChooser for FixedChooser {
    fn choose_first_player(&mut self) -> Mark {
        self.0
    }
}

impl<T: FirstPlayerChooser + ?Sized> FirstPlayerChooser for Box<T> {
    fn choose_first_player(&mut self) -> Mark {
        (**self).choose_first_player()
    }
}
