//! Die values, dice counts and the pip layout table
//!
//! There are nine positions for pips on each d6, enumerated from `0`:
//!
//! ```text
//! #######
//! #0 1 2#
//! #3 4 5#
//! #6 7 8#
//! #######
//! ```
//!
//! A face is therefore a 9-bit pattern, one bit per position.

use std::fmt;
use thiserror::Error;

/// Largest number of dice rendered in one invocation.
pub const MAX_DICE: u8 = 10;

/// Number of faces on a die.
pub const FACES: u8 = 6;

/// Pip patterns for the values 1 through 6, indexed by `value - 1`.
pub const PIP_LAYOUTS: [u16; FACES as usize] = [
    0x010, // center
    0x044, // top right, bottom left
    0x054, // diagonal
    0x145, // four corners
    0x155, // corners and center
    0x16D, // two columns of three
];

/// Error for a dice count outside of `1..=MAX_DICE`
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CountError {
    #[error("no dice to roll")]
    Zero,

    #[error("cannot roll {0} dice, the maximum is {}", MAX_DICE)]
    TooMany(i64),

    #[error("cannot roll a negative number of dice ({0})")]
    Negative(i64),
}

/// The face value of a single d6, always in `1..=6`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DieValue(u8);

impl DieValue {
    /// Create a die value, returning `None` outside of `1..=6`.
    pub fn new(value: u8) -> Option<Self> {
        if value >= 1 && value <= FACES {
            Some(Self(value))
        } else {
            None
        }
    }

    pub fn get(self) -> u8 {
        self.0
    }

    /// The 9-bit pip pattern for this face.
    pub fn pips(self) -> u16 {
        PIP_LAYOUTS[usize::from(self.0 - 1)]
    }

    /// Whether grid position `position` (0-8) holds a pip.
    pub fn has_pip(self, position: u8) -> bool {
        position < 9 && self.pips() & (1 << position) != 0
    }
}

impl fmt::Display for DieValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Number of dice to roll, always in `1..=MAX_DICE`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiceCount(u8);

impl DiceCount {
    pub fn new(count: i64) -> Result<Self, CountError> {
        match count {
            n if n < 0 => Err(CountError::Negative(n)),
            0 => Err(CountError::Zero),
            n if n > i64::from(MAX_DICE) => Err(CountError::TooMany(n)),
            n => Ok(Self(n as u8)),
        }
    }

    /// Parse a count the way C's `atoi` would, then validate the range.
    ///
    /// Leading whitespace and a sign are accepted, the scan stops at the
    /// first non-digit, and text without leading digits counts as `0`.
    /// Huge values saturate instead of wrapping.
    ///
    /// # Examples
    ///
    /// ```
    /// use pipdice::dice::{CountError, DiceCount};
    ///
    /// assert_eq!(DiceCount::parse_lenient(" 3 dice").unwrap().get(), 3);
    /// assert_eq!(DiceCount::parse_lenient("many"), Err(CountError::Zero));
    /// assert_eq!(DiceCount::parse_lenient("11"), Err(CountError::TooMany(11)));
    /// ```
    pub fn parse_lenient(input: &str) -> Result<Self, CountError> {
        Self::new(atoi(input))
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

impl Default for DiceCount {
    fn default() -> Self {
        Self(1)
    }
}

fn atoi(input: &str) -> i64 {
    let trimmed = input.trim_start();
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let magnitude = digits
        .bytes()
        .take_while(u8::is_ascii_digit)
        .fold(0i64, |acc, d| acc.saturating_mul(10).saturating_add(i64::from(d - b'0')));

    if negative {
        -magnitude
    } else {
        magnitude
    }
}

/// Derive `n` die values from one 64-bit draw.
///
/// Each die consumes one base-6 digit of the draw, least significant
/// first. 6^10 fits in 64 bits so every die up to `MAX_DICE` gets an
/// independent digit.
pub fn values_from_draw(mut draw: u64, n: usize) -> Vec<DieValue> {
    let mut values = Vec::with_capacity(n);
    for _ in 0..n {
        values.push(DieValue((draw % u64::from(FACES)) as u8 + 1));
        draw /= u64::from(FACES);
    }
    values
}

/// Build the draw that `values_from_draw` turns back into `values`.
pub fn draw_for_values(values: &[DieValue]) -> u64 {
    values.iter().rev().fold(0u64, |acc, v| acc * u64::from(FACES) + u64::from(v.get() - 1))
}
