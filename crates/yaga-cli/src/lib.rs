//! Command-line front end for YAGA exercises.

pub mod runner;

pub use runner::run_exercise;
