//! Name → constructor table for exercises.
//!
//! Keys are the identifiers typed on the command line. New exercise types
//! must be appended to [`ExerciseRegistry::ENTRIES`].

use super::{ChordPractice, Exercise, ExerciseSettings};
use crate::error::{Result, YagaError};

type Constructor = fn(ExerciseSettings) -> Box<dyn Exercise>;

fn chord_practice(settings: ExerciseSettings) -> Box<dyn Exercise> {
    Box::new(match settings.seed {
        Some(seed) => ChordPractice::with_seed(settings.difficulty, seed),
        None => ChordPractice::new(settings.difficulty),
    })
}

/// Static registry of available exercises.
pub struct ExerciseRegistry;

impl ExerciseRegistry {
    const ENTRIES: &'static [(&'static str, Constructor)] = &[("chord_practice", chord_practice)];

    /// Registered keys, in registration order.
    pub fn names() -> impl Iterator<Item = &'static str> {
        Self::ENTRIES.iter().map(|(name, _)| *name)
    }

    /// Builds the exercise registered under `name`.
    ///
    /// # Errors
    ///
    /// `YagaError::UnknownExercise` when `name` is not registered. The
    /// difficulty is not validated here; an unknown level surfaces when the
    /// exercise's stream is first advanced.
    pub fn lookup(name: &str, settings: ExerciseSettings) -> Result<Box<dyn Exercise>> {
        Self::ENTRIES
            .iter()
            .find(|(registered, _)| *registered == name)
            .map(|(_, constructor)| constructor(settings))
            .ok_or_else(|| YagaError::unknown_exercise(name, Self::names()))
    }
}
