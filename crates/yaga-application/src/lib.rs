//! Application layer for YAGA.
//!
//! Use cases that combine the domain model with an injected session store.

pub mod session_usecase;

pub use session_usecase::{ExerciseSessionUseCase, NextPrompt};
