//! Random byte sources for rolling dice
//!
//! [`OsEntropy`] reads from the operating system's entropy pool. Anything
//! implementing [`EntropySource`] can stand in for it, which is how tests
//! get deterministic rolls.

use crate::dice::{values_from_draw, DiceCount, DieValue};
use thiserror::Error;

/// Failure to obtain random bytes
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum EntropyError {
    /// The OS entropy source could not be opened or read
    #[error("system entropy source unavailable: {0}")]
    Unavailable(#[from] getrandom::Error),
    /// A finite source ran out of bytes
    #[error("entropy source exhausted: needed {needed} bytes, {available} left")]
    Exhausted { needed: usize, available: usize },
}

/// Something that can fill a buffer with random bytes.
pub trait EntropySource {
    fn fill(&mut self, buf: &mut [u8]) -> Result<(), EntropyError>;
}

impl<S: EntropySource + ?Sized> EntropySource for &mut S {
    fn fill(&mut self, buf: &mut [u8]) -> Result<(), EntropyError> {
        (**self).fill(buf)
    }
}

/// The operating system's entropy source.
///
/// May block until the OS pool has been seeded.
#[derive(Debug, Default, Clone, Copy)]
pub struct OsEntropy;

impl EntropySource for OsEntropy {
    fn fill(&mut self, buf: &mut [u8]) -> Result<(), EntropyError> {
        getrandom::fill(buf)?;
        Ok(())
    }
}

/// Replays a fixed byte sequence, failing once it runs out.
#[derive(Debug, Clone)]
pub struct ReplayEntropy {
    bytes: Vec<u8>,
    pos: usize,
}

impl ReplayEntropy {
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self { bytes: bytes.into(), pos: 0 }
    }

    /// A source whose next draw is exactly `draw`.
    pub fn from_draw(draw: u64) -> Self {
        Self::new(draw.to_le_bytes())
    }

    pub fn remaining(&self) -> usize {
        self.bytes.len() - self.pos
    }
}

impl EntropySource for ReplayEntropy {
    fn fill(&mut self, buf: &mut [u8]) -> Result<(), EntropyError> {
        let available = self.remaining();
        if buf.len() > available {
            return Err(EntropyError::Exhausted { needed: buf.len(), available });
        }
        buf.copy_from_slice(&self.bytes[self.pos..self.pos + buf.len()]);
        self.pos += buf.len();
        Ok(())
    }
}

/// Read one 64-bit draw and derive `n` die values from it.
pub fn get_random_values(
    n: usize,
    source: &mut impl EntropySource,
) -> Result<Vec<DieValue>, EntropyError> {
    let mut bytes = [0u8; 8];
    source.fill(&mut bytes)?;
    let draw = u64::from_le_bytes(bytes);
    let values = values_from_draw(draw, n);
    log::debug!("rolled {:?}", values.iter().map(|v| v.get()).collect::<Vec<_>>());
    Ok(values)
}

/// Roll `count` dice.
pub fn roll(
    count: DiceCount,
    source: &mut impl EntropySource,
) -> Result<Vec<DieValue>, EntropyError> {
    get_random_values(usize::from(count.get()), source)
}
