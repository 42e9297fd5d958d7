//! Roll command implementation

use std::io::{self, Write};
use std::process::ExitCode;

use thiserror::Error;

use crate::dice::{CountError, DiceCount};
use crate::entropy::{roll, EntropyError, EntropySource, OsEntropy};
use crate::output::emit;
use crate::renderer::compose;

use super::{EXIT_ERROR, EXIT_SUCCESS};

/// Everything that can stop a roll from reaching the output
#[derive(Debug, Error)]
pub enum RollError {
    #[error("{0}")]
    Count(#[from] CountError),

    #[error("{0}")]
    Entropy(#[from] EntropyError),

    #[error("failed to write dice: {0}")]
    Output(#[from] io::Error),
}

/// Validate the count, roll, render, and write the result to `writer`.
///
/// Nothing is written unless the count is valid and the roll succeeded.
pub fn roll_to<S, W>(count: Option<&str>, source: &mut S, writer: &mut W) -> Result<(), RollError>
where
    S: EntropySource,
    W: Write,
{
    let count = match count {
        Some(raw) => DiceCount::parse_lenient(raw)?,
        None => DiceCount::default(),
    };
    log::debug!("rolling {} dice", count.get());

    let values = roll(count, source)?;
    emit(writer, &compose(&values))?;
    Ok(())
}

/// Roll dice from the OS entropy source onto stdout.
pub fn run_roll(count: Option<&str>) -> ExitCode {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match roll_to(count, &mut OsEntropy, &mut out) {
        Ok(()) => ExitCode::from(EXIT_SUCCESS),
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(EXIT_ERROR)
        }
    }
}
