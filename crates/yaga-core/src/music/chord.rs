//! Chord value type.
//!
//! A chord is a root, a quality, and optional extension/alteration
//! annotations. Its display name is a plain concatenation of the four parts
//! with no separators, e.g. `C` + `m` + `7` + `b5` renders as `Cm7b5`.

use serde::{Deserialize, Serialize};
use std::fmt;
use strum::{AsRefStr, Display, EnumIter, EnumString};

/// Pitch-class name of a chord root.
///
/// Spellings are kept as written (`A#` and `Bb` are distinct values); no
/// enharmonic normalization happens anywhere in the crate.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    AsRefStr,
    Display,
    EnumString,
    EnumIter,
)]
pub enum Root {
    #[serde(rename = "Ab")]
    #[strum(serialize = "Ab")]
    AFlat,
    #[serde(rename = "A")]
    #[strum(serialize = "A")]
    A,
    #[serde(rename = "A#")]
    #[strum(serialize = "A#")]
    ASharp,
    #[serde(rename = "Bb")]
    #[strum(serialize = "Bb")]
    BFlat,
    #[serde(rename = "B")]
    #[strum(serialize = "B")]
    B,
    #[serde(rename = "C")]
    #[strum(serialize = "C")]
    C,
    #[serde(rename = "C#")]
    #[strum(serialize = "C#")]
    CSharp,
    #[serde(rename = "Db")]
    #[strum(serialize = "Db")]
    DFlat,
    #[serde(rename = "D")]
    #[strum(serialize = "D")]
    D,
    #[serde(rename = "D#")]
    #[strum(serialize = "D#")]
    DSharp,
    #[serde(rename = "Eb")]
    #[strum(serialize = "Eb")]
    EFlat,
    #[serde(rename = "E")]
    #[strum(serialize = "E")]
    E,
    #[serde(rename = "F")]
    #[strum(serialize = "F")]
    F,
    #[serde(rename = "F#")]
    #[strum(serialize = "F#")]
    FSharp,
    #[serde(rename = "Gb")]
    #[strum(serialize = "Gb")]
    GFlat,
    #[serde(rename = "G")]
    #[strum(serialize = "G")]
    G,
    #[serde(rename = "G#")]
    #[strum(serialize = "G#")]
    GSharp,
}

impl Root {
    /// Every root spelling, in table order.
    pub const ALL: [Root; 17] = [
        Root::AFlat,
        Root::A,
        Root::ASharp,
        Root::BFlat,
        Root::B,
        Root::C,
        Root::CSharp,
        Root::DFlat,
        Root::D,
        Root::DSharp,
        Root::EFlat,
        Root::E,
        Root::F,
        Root::FSharp,
        Root::GFlat,
        Root::G,
        Root::GSharp,
    ];

    /// Returns true for sharp or flat spellings.
    pub fn is_accidental(self) -> bool {
        let name = self.as_ref();
        name.ends_with('#') || name.ends_with('b')
    }
}

/// Chord quality suffix. Major renders as the empty string.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    AsRefStr,
    Display,
    EnumString,
    EnumIter,
)]
pub enum Quality {
    #[serde(rename = "")]
    #[strum(serialize = "")]
    Major,
    #[serde(rename = "m")]
    #[strum(serialize = "m")]
    Minor,
    #[serde(rename = "7")]
    #[strum(serialize = "7")]
    Dominant7,
    #[serde(rename = "maj7")]
    #[strum(serialize = "maj7")]
    Major7,
    #[serde(rename = "m7")]
    #[strum(serialize = "m7")]
    Minor7,
    #[serde(rename = "dim")]
    #[strum(serialize = "dim")]
    Diminished,
    #[serde(rename = "sus2")]
    #[strum(serialize = "sus2")]
    Sus2,
    #[serde(rename = "sus4")]
    #[strum(serialize = "sus4")]
    Sus4,
}

/// A chord prompt: root, quality and optional annotations.
///
/// `None` and an empty list render the same way; both mean "no annotation".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chord {
    pub root: Root,
    pub quality: Quality,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extensions: Option<Vec<u32>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alterations: Option<Vec<String>>,
}

impl Chord {
    /// Creates a chord without extensions or alterations.
    ///
    /// # Examples
    ///
    /// ```
    /// use yaga_core::music::{Chord, Quality, Root};
    ///
    /// let chord = Chord::new(Root::C, Quality::Major).with_extensions(vec![7]);
    /// assert_eq!(chord.display_name(), "C7");
    /// ```
    pub fn new(root: Root, quality: Quality) -> Self {
        Self {
            root,
            quality,
            extensions: None,
            alterations: None,
        }
    }

    pub fn with_extensions(mut self, extensions: Vec<u32>) -> Self {
        self.extensions = Some(extensions);
        self
    }

    pub fn with_alterations<I, S>(mut self, alterations: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.alterations = Some(alterations.into_iter().map(Into::into).collect());
        self
    }

    pub fn has_extensions(&self) -> bool {
        self.extensions.as_ref().is_some_and(|e| !e.is_empty())
    }

    pub fn has_alterations(&self) -> bool {
        self.alterations.as_ref().is_some_and(|a| !a.is_empty())
    }

    /// Renders `root ++ quality ++ extensions ++ alterations`.
    ///
    /// ```
    /// use yaga_core::music::{Chord, Quality, Root};
    ///
    /// let chord = Chord::new(Root::D, Quality::Minor).with_alterations(["b5"]);
    /// assert_eq!(chord.display_name(), "Dmb5");
    /// ```
    pub fn display_name(&self) -> String {
        let mut name = String::new();
        name.push_str(self.root.as_ref());
        name.push_str(self.quality.as_ref());
        for extension in self.extensions.iter().flatten() {
            name.push_str(&extension.to_string());
        }
        for alteration in self.alterations.iter().flatten() {
            name.push_str(alteration);
        }
        name
    }
}

impl fmt::Display for Chord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display_name())
    }
}
