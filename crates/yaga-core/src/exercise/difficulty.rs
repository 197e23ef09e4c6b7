//! Difficulty table for chord practice.
//!
//! Each level fixes which roots and qualities may be drawn and, for the top
//! level only, how often extensions and alterations are appended. To support
//! another level, add a `DifficultyConfig` constant and an arm in
//! [`difficulty_config`].

use crate::music::{Quality, Root};

pub const MIN_LEVEL: u32 = 1;
pub const MAX_LEVEL: u32 = 5;

/// Generation rules for one difficulty level.
#[derive(Debug, Clone, PartialEq)]
pub struct DifficultyConfig {
    /// Roots that may be drawn. Never empty.
    pub roots: &'static [Root],
    /// Qualities that may be drawn. Never empty.
    pub qualities: &'static [Quality],
    /// Probability in [0, 1] of attaching one of `extension_choices`.
    pub extension_chance: f64,
    /// Probability in [0, 1] of attaching one of `alteration_choices`.
    pub alteration_chance: f64,
    pub extension_choices: &'static [&'static [u32]],
    pub alteration_choices: &'static [&'static [&'static str]],
}

impl DifficultyConfig {
    const fn plain(roots: &'static [Root], qualities: &'static [Quality]) -> Self {
        Self {
            roots,
            qualities,
            extension_chance: 0.0,
            alteration_chance: 0.0,
            extension_choices: &[],
            alteration_choices: &[],
        }
    }
}

const EASY_ROOTS: &[Root] = &[
    Root::A,
    Root::B,
    Root::C,
    Root::D,
    Root::E,
    Root::F,
    Root::G,
];

const MEDIUM_ROOTS: &[Root] = &[
    Root::A,
    Root::B,
    Root::C,
    Root::D,
    Root::E,
    Root::F,
    Root::G,
    Root::BFlat,
    Root::CSharp,
    Root::DSharp,
    Root::FSharp,
    Root::GSharp,
];

const ALL_ROOTS: &[Root] = &Root::ALL;

const EASY_QUALITIES: &[Quality] = &[Quality::Major, Quality::Minor];

const MEDIUM_QUALITIES: &[Quality] = &[Quality::Major, Quality::Minor, Quality::Dominant7];

const HARD_QUALITIES: &[Quality] = &[
    Quality::Major,
    Quality::Minor,
    Quality::Dominant7,
    Quality::Major7,
    Quality::Minor7,
    Quality::Diminished,
    Quality::Sus2,
    Quality::Sus4,
];

const LEVEL_1: DifficultyConfig = DifficultyConfig::plain(EASY_ROOTS, EASY_QUALITIES);
const LEVEL_2: DifficultyConfig = DifficultyConfig::plain(MEDIUM_ROOTS, EASY_QUALITIES);
const LEVEL_3: DifficultyConfig = DifficultyConfig::plain(MEDIUM_ROOTS, MEDIUM_QUALITIES);
const LEVEL_4: DifficultyConfig = DifficultyConfig::plain(ALL_ROOTS, MEDIUM_QUALITIES);
const LEVEL_5: DifficultyConfig = DifficultyConfig {
    roots: ALL_ROOTS,
    qualities: HARD_QUALITIES,
    extension_chance: 0.4,
    alteration_chance: 0.2,
    extension_choices: &[&[7], &[9], &[11], &[13], &[7, 9]],
    alteration_choices: &[&["b5"], &["#5"], &["b9"], &["#9"], &["b5", "b9"]],
};

/// Looks up the configuration for `level`, if the table defines one.
pub fn difficulty_config(level: u32) -> Option<&'static DifficultyConfig> {
    match level {
        1 => Some(&LEVEL_1),
        2 => Some(&LEVEL_2),
        3 => Some(&LEVEL_3),
        4 => Some(&LEVEL_4),
        5 => Some(&LEVEL_5),
        _ => None,
    }
}

/// All defined levels, ascending.
pub fn levels() -> impl Iterator<Item = u32> {
    (MIN_LEVEL..=MAX_LEVEL).filter(|level| difficulty_config(*level).is_some())
}
