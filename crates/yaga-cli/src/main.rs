use anyhow::Result;
use clap::Parser;
use std::process::ExitCode;
use std::time::Duration;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use yaga_cli::run_exercise;
use yaga_core::YagaError;
use yaga_core::exercise::{ExerciseRegistry, ExerciseSettings};

fn available_help() -> String {
    format!(
        "The name of the exercise to run. Available: {}",
        ExerciseRegistry::names().collect::<Vec<_>>().join(", ")
    )
}

#[derive(Parser, Debug)]
#[command(name = "run-exercise")]
#[command(about = "Run a selected guitar exercise with customizable parameters.", long_about = None)]
struct Args {
    #[arg(help = available_help())]
    exercise_name: String,

    /// Frequency in milliseconds at which exercise prompts should occur
    #[arg(short, long, default_value_t = 1000)]
    frequency: u64,

    /// Difficulty level of the exercise
    #[arg(short, long, default_value_t = 1, allow_negative_numbers = true)]
    difficulty: i64,

    /// Number of iterations to run the exercise for
    #[arg(short = 'n', long, default_value_t = 10)]
    iterations: usize,

    /// Seed for reproducible prompts
    #[arg(long)]
    seed: Option<u64>,
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();
}

fn main() -> Result<ExitCode> {
    let args = Args::parse();
    init_tracing();

    // Levels outside u32 can never be in the table.
    let difficulty = u32::try_from(args.difficulty)
        .map_err(|_| YagaError::unknown_difficulty(args.difficulty))?;
    let settings = ExerciseSettings::new(difficulty).with_seed(args.seed);
    let exercise = match ExerciseRegistry::lookup(&args.exercise_name, settings) {
        Ok(exercise) => exercise,
        Err(YagaError::UnknownExercise { name, available }) => {
            eprintln!("Error: Unknown exercise '{}'", name);
            eprintln!("Available exercises: {}", available.join(", "));
            return Ok(ExitCode::FAILURE);
        }
        Err(e) => return Err(e.into()),
    };

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    run_exercise(
        exercise.as_ref(),
        args.iterations,
        Duration::from_millis(args.frequency),
        &mut out,
    )?;

    Ok(ExitCode::SUCCESS)
}
