//! Chord practice: random chord prompts drawn from the difficulty table.

use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use super::difficulty::{DifficultyConfig, difficulty_config};
use super::{Exercise, Prompt, PromptStream};
use crate::error::{Result, YagaError};
use crate::music::Chord;

/// Infinite stream of random chords for one difficulty level.
///
/// Construction never fails. An unknown level is reported by the first call
/// to `next()` as `Some(Err(UnknownDifficulty))`, after which the stream is
/// finished. For a known level the stream never ends.
pub struct ChordStream<R> {
    difficulty: u32,
    rng: R,
    failed: bool,
}

/// Creates a chord stream for `difficulty` drawing from `rng`.
///
/// Every element is drawn independently: one root, one quality, then an
/// optional extension list and an optional alteration list, each gated by
/// its own uniform draw against the level's chance.
///
/// # Examples
///
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use yaga_core::exercise::chord_practice;
///
/// let chords: Vec<_> = chord_practice(1, StdRng::seed_from_u64(7))
///     .take(3)
///     .collect::<Result<_, _>>()
///     .unwrap();
/// assert_eq!(chords.len(), 3);
/// ```
pub fn chord_practice<R: Rng>(difficulty: u32, rng: R) -> ChordStream<R> {
    ChordStream {
        difficulty,
        rng,
        failed: false,
    }
}

impl<R: Rng> ChordStream<R> {
    pub fn difficulty(&self) -> u32 {
        self.difficulty
    }

    fn draw(&mut self, config: &DifficultyConfig) -> Result<Chord> {
        let rng = &mut self.rng;
        let root = config
            .roots
            .choose(rng)
            .copied()
            .ok_or_else(|| YagaError::internal("difficulty level has no roots"))?;
        let quality = config
            .qualities
            .choose(rng)
            .copied()
            .ok_or_else(|| YagaError::internal("difficulty level has no qualities"))?;

        let mut chord = Chord::new(root, quality);

        if !config.extension_choices.is_empty() && rng.gen_range(0.0..1.0) < config.extension_chance
        {
            chord.extensions = config
                .extension_choices
                .choose(rng)
                .map(|choice| choice.to_vec());
        }

        if !config.alteration_choices.is_empty()
            && rng.gen_range(0.0..1.0) < config.alteration_chance
        {
            chord.alterations = config
                .alteration_choices
                .choose(rng)
                .map(|choice| choice.iter().map(|s| s.to_string()).collect());
        }

        Ok(chord)
    }
}

impl<R: Rng> Iterator for ChordStream<R> {
    type Item = Result<Chord>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        match difficulty_config(self.difficulty) {
            Some(config) => Some(self.draw(config)),
            None => {
                self.failed = true;
                Some(Err(YagaError::unknown_difficulty(self.difficulty)))
            }
        }
    }
}

/// The "Chord Practice" exercise.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChordPractice {
    difficulty: u32,
    seed: Option<u64>,
}

impl ChordPractice {
    pub const NAME: &'static str = "Chord Practice";
    pub const CATEGORY: &'static str = "Basics";

    /// Chord practice drawing from OS entropy.
    pub fn new(difficulty: u32) -> Self {
        Self {
            difficulty,
            seed: None,
        }
    }

    /// Chord practice whose every stream replays the same seeded draws.
    pub fn with_seed(difficulty: u32, seed: u64) -> Self {
        Self {
            difficulty,
            seed: Some(seed),
        }
    }

    /// Typed chord stream, for callers that want `Chord` values directly.
    pub fn chords(&self) -> ChordStream<StdRng> {
        let rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        chord_practice(self.difficulty, rng)
    }
}

impl Exercise for ChordPractice {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn category(&self) -> &str {
        Self::CATEGORY
    }

    fn difficulty(&self) -> u32 {
        self.difficulty
    }

    fn generate_exercise(&self) -> PromptStream {
        Box::new(self.chords().map(|chord| chord.map(Prompt::Chord)))
    }
}
