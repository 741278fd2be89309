//! Dice values and deterministic dice rolling.
//!
//! ## Key Features
//!
//! - **Deterministic**: same seed produces the same roll sequence
//! - **Forkable**: independent branches for what-if simulation
//! - **Serializable**: O(1) state capture and restore
//!
//! Dice generation is the only source of randomness in the engine; every
//! other computation is a pure function of state and roll.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// A validated die face, 1-6.
///
/// Construction is checked, so a `DieRoll` held anywhere in the engine is
/// known to be in range and the turn resolver is total over its inputs.
///
/// ```
/// use eels_and_escalators::core::DieRoll;
///
/// assert_eq!(DieRoll::new(4).unwrap().value(), 4);
/// assert!(DieRoll::new(0).is_none());
/// assert!(DieRoll::new(7).is_none());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct DieRoll(u8);

impl DieRoll {
    /// Lowest face.
    pub const MIN: u8 = 1;

    /// Highest face.
    pub const MAX: u8 = 6;

    /// Create a roll, returning `None` for values outside 1-6.
    #[must_use]
    pub const fn new(value: u8) -> Option<Self> {
        if value >= Self::MIN && value <= Self::MAX {
            Some(Self(value))
        } else {
            None
        }
    }

    /// Get the face value (1-6).
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Unicode die face for this roll.
    #[must_use]
    pub const fn face_glyph(self) -> char {
        match self.0 {
            1 => '\u{2680}',
            2 => '\u{2681}',
            3 => '\u{2682}',
            4 => '\u{2683}',
            5 => '\u{2684}',
            _ => '\u{2685}',
        }
    }
}

impl TryFrom<u8> for DieRoll {
    type Error = u8;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value).ok_or(value)
    }
}

impl std::fmt::Display for DieRoll {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Deterministic dice roller.
///
/// Uses ChaCha8 for speed with high-quality randomness. Rolls are uniform
/// over 1-6. The roller lives inside [`crate::core::GameState`] so that a
/// game is fully reproducible from its seed.
#[derive(Clone, Debug)]
pub struct DiceRng {
    inner: ChaCha8Rng,
    seed: u64,
    fork_counter: u64,
}

impl DiceRng {
    /// Create a roller from a seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
            fork_counter: 0,
        }
    }

    /// Roll the die: uniform over 1-6.
    pub fn roll_die(&mut self) -> DieRoll {
        DieRoll(self.inner.gen_range(DieRoll::MIN..=DieRoll::MAX))
    }

    /// Fork this roller into an independent branch.
    ///
    /// Each fork yields a different but deterministic sequence. Useful for
    /// exploring alternate rolls without disturbing the live game's
    /// sequence.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        self.fork_counter += 1;
        let fork_seed = self
            .seed
            .wrapping_add(self.fork_counter.wrapping_mul(0x9E3779B97F4A7C15));
        Self {
            inner: ChaCha8Rng::seed_from_u64(fork_seed),
            seed: fork_seed,
            fork_counter: 0,
        }
    }

    /// Capture the roller state for serialization.
    #[must_use]
    pub fn state(&self) -> DiceRngState {
        DiceRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
            fork_counter: self.fork_counter,
        }
    }

    /// Restore a roller from a captured state.
    #[must_use]
    pub fn from_state(state: &DiceRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
            fork_counter: state.fork_counter,
        }
    }
}

/// Serializable roller state.
///
/// Uses the ChaCha8 word position for O(1) capture regardless of how many
/// rolls have been made.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiceRngState {
    /// Original seed.
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter).
    pub word_pos: u128,
    /// Fork counter for deterministic branching.
    pub fork_counter: u64,
}
