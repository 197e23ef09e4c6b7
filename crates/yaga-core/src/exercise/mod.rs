//! Exercise domain module.
//!
//! An exercise is anything that can produce an endless stream of prompts
//! for the player. The HTTP surface and the CLI runner only talk to the
//! [`Exercise`] trait, so a new exercise type plugs in by implementing it
//! and registering a constructor in [`registry`].
//!
//! # Module Structure
//!
//! - `difficulty`: per-level generation tables
//! - `chord_practice`: the chord generator and the `ChordPractice` exercise
//! - `registry`: name → constructor lookup used by the CLI

pub mod chord_practice;
pub mod difficulty;
pub mod registry;

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::Result;
use crate::music::Chord;

pub use chord_practice::{ChordPractice, ChordStream, chord_practice};
pub use difficulty::{DifficultyConfig, difficulty_config, levels};
pub use registry::ExerciseRegistry;

/// One prompt shown to the player.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "snake_case")]
pub enum Prompt {
    /// Play this chord
    Chord(Chord),
}

impl Prompt {
    /// Text shown to the player for this prompt.
    pub fn display_text(&self) -> String {
        match self {
            Prompt::Chord(chord) => chord.display_name(),
        }
    }
}

impl fmt::Display for Prompt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display_text())
    }
}

/// Lazy, usually infinite, sequence of prompts.
///
/// Errors surface when an element is pulled, never when the stream is built.
pub type PromptStream = Box<dyn Iterator<Item = Result<Prompt>> + Send>;

/// Parameters every exercise is constructed with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExerciseSettings {
    pub difficulty: u32,
    /// Fixed seed for reproducible draws; `None` uses OS entropy.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl ExerciseSettings {
    pub fn new(difficulty: u32) -> Self {
        Self {
            difficulty,
            seed: None,
        }
    }

    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }
}

impl Default for ExerciseSettings {
    fn default() -> Self {
        Self::new(difficulty::MIN_LEVEL)
    }
}

/// Common surface of all practice exercises.
pub trait Exercise: Send + Sync {
    /// Human-readable exercise name, e.g. "Chord Practice".
    fn name(&self) -> &str;

    /// Grouping shown in menus, e.g. "Basics".
    fn category(&self) -> &str;

    /// Difficulty level the exercise was built with.
    fn difficulty(&self) -> u32;

    /// Starts a fresh prompt stream.
    ///
    /// Each call returns an independent stream with its own draws.
    fn generate_exercise(&self) -> PromptStream;
}
