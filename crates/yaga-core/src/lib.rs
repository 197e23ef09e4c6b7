//! Domain layer for YAGA (Yet Another Guitar App).
//!
//! Chords and difficulty tables, the exercise abstraction with its chord
//! practice generator, the exercise session model and its repository
//! trait, and the configuration model.

pub mod config;
pub mod error;
pub mod exercise;
pub mod music;
pub mod session;

// Re-export common error type
pub use error::{Result, YagaError};
