//! Music vocabulary shared by the exercises.

mod chord;

pub use chord::{Chord, Quality, Root};
