use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::validation::WORD_LENGTHS;

const BASE_GUESSES: u32 = 6;
const MIXED_LENGTH_BONUS_GUESSES: u32 = 1;
const BLIND_BONUS_GUESSES: u32 = 4;

/// The length of solutions, and of the guesses that will be accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum WordLength {
    /// Solutions and guesses all have this many letters.
    Fixed(usize),
    /// Solutions have 4 to 6 letters, and guesses may be any of these lengths regardless of the
    /// solution.
    Mixed,
}

impl WordLength {
    pub fn is_mixed(self) -> bool {
        self == WordLength::Mixed
    }
}

impl Default for WordLength {
    fn default() -> Self {
        WordLength::Fixed(5)
    }
}

impl fmt::Display for WordLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WordLength::Fixed(length) => write!(f, "{length}"),
            WordLength::Mixed => write!(f, "mixed"),
        }
    }
}

/// Indicates that a word length could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("expected 4, 5, 6 or \"mixed\", got {input:?}")]
pub struct ParseWordLengthError {
    input: String,
}

impl FromStr for WordLength {
    type Err = ParseWordLengthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("mixed") {
            return Ok(WordLength::Mixed);
        }
        match trimmed.parse::<usize>() {
            Ok(length) if WORD_LENGTHS.contains(&length) => Ok(WordLength::Fixed(length)),
            _ => Err(ParseWordLengthError {
                input: s.to_string(),
            }),
        }
    }
}

/// The rules for a game session, chosen before the solution is drawn.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GameConfig {
    pub word_length: WordLength,
    /// Only reveal how many letters are correct or present, not which ones.
    pub blind: bool,
}

impl GameConfig {
    pub fn new(word_length: WordLength, blind: bool) -> GameConfig {
        GameConfig { word_length, blind }
    }

    /// The number of guesses allowed under these rules.
    ///
    /// Mixed-length games get one extra guess, and blind games get four more.
    pub fn max_guesses(&self) -> u32 {
        let mut max = BASE_GUESSES;
        if self.word_length.is_mixed() {
            max += MIXED_LENGTH_BONUS_GUESSES;
        }
        if self.blind {
            max += BLIND_BONUS_GUESSES;
        }
        max
    }
}
