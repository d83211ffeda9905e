//! Dice: the engine's only source of randomness.
//!
//! ## Die
//!
//! The trait the engine consumes. One die instance is shared by every
//! player in a match; `clone_die` exists for callers that explicitly want
//! independent per-player instances (prototype pattern), the default loop
//! never uses it.
//!
//! ## FairDie
//!
//! Seeded ChaCha8 implementation. Same seed, same roll sequence. Clones
//! are reseeded from the prototype's seed and a spawn counter, so each
//! clone produces a different but deterministic sequence.
//!
//! ## SequenceDie
//!
//! Replays a fixed list of rolls, cycling. For tests and scripted matches.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::cell::Cell;

/// An unsigned-roll die the engine can share across players.
pub trait Die {
    /// Produce the next roll.
    fn roll(&mut self) -> u32;

    /// Clone this die into a new, equivalently distributed instance.
    fn clone_die(&self) -> Box<dyn Die>;
}

/// Uniform die over `1..=sides`, backed by seeded ChaCha8.
#[derive(Debug)]
pub struct FairDie {
    rng: ChaCha8Rng,
    seed: u64,
    sides: u32,
    spawned: Cell<u64>,
}

impl FairDie {
    /// A standard six-sided die with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self::with_sides(seed, 6)
    }

    /// A die with an arbitrary number of sides (≥ 1).
    #[must_use]
    pub fn with_sides(seed: u64, sides: u32) -> Self {
        assert!(sides >= 1, "A die needs at least one side");
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
            sides,
            spawned: Cell::new(0),
        }
    }

    /// Number of sides.
    #[must_use]
    pub fn sides(&self) -> u32 {
        self.sides
    }
}

impl Die for FairDie {
    fn roll(&mut self) -> u32 {
        self.rng.gen_range(1..=self.sides)
    }

    fn clone_die(&self) -> Box<dyn Die> {
        let n = self.spawned.get() + 1;
        self.spawned.set(n);
        let seed = self.seed.wrapping_add(n.wrapping_mul(0x9E3779B97F4A7C15));
        Box::new(Self::with_sides(seed, self.sides))
    }
}

/// Die that replays a fixed roll sequence, wrapping around at the end.
#[derive(Clone, Debug)]
pub struct SequenceDie {
    rolls: Vec<u32>,
    next: usize,
}

impl SequenceDie {
    /// Build from a non-empty roll list.
    #[must_use]
    pub fn new(rolls: impl Into<Vec<u32>>) -> Self {
        let rolls = rolls.into();
        assert!(!rolls.is_empty(), "SequenceDie needs at least one roll");
        Self { rolls, next: 0 }
    }
}

impl Die for SequenceDie {
    fn roll(&mut self) -> u32 {
        let value = self.rolls[self.next];
        self.next = (self.next + 1) % self.rolls.len();
        value
    }

    fn clone_die(&self) -> Box<dyn Die> {
        Box::new(self.clone())
    }
}
