//! Terminal runner: prints prompts from an exercise at a fixed pace.

use std::io::Write;
use std::thread;
use std::time::Duration;

use yaga_core::error::Result;
use yaga_core::exercise::Exercise;

/// Pulls up to `iterations` prompts and writes one per line to `out`,
/// pausing `frequency` between prompts.
///
/// Returns the number of prompts written. Stops early if the stream ends.
///
/// # Errors
///
/// Any error pulled from the stream (e.g. `UnknownDifficulty`) and any
/// failure writing to `out`.
pub fn run_exercise<W: Write>(
    exercise: &dyn Exercise,
    iterations: usize,
    frequency: Duration,
    out: &mut W,
) -> Result<usize> {
    tracing::debug!(
        "Running {} ({}), difficulty {}, {} iterations every {:?}",
        exercise.name(),
        exercise.category(),
        exercise.difficulty(),
        iterations,
        frequency
    );

    let mut written = 0;
    for prompt in exercise.generate_exercise().take(iterations) {
        let prompt = prompt?;
        if written > 0 && !frequency.is_zero() {
            thread::sleep(frequency);
        }
        writeln!(out, "{}", prompt.display_text())?;
        out.flush()?;
        written += 1;
    }
    Ok(written)
}
