use std::io;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The result of a given letter at a specific location.
#[derive(Debug, Eq, PartialEq, Clone, Copy, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum LetterResult {
    Correct,
    PresentNotHere,
    NotPresent,
}

/// Where a game session currently stands.
#[derive(Debug, Eq, PartialEq, Clone, Copy, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GameStatus {
    /// The session is waiting for another guess.
    InProgress,
    /// A guess exactly matched the solution.
    Won,
    /// The guess budget ran out before the solution was found.
    Lost,
}

impl GameStatus {
    /// Returns `true` if no further guesses will be accepted.
    pub fn is_terminal(self) -> bool {
        self != GameStatus::InProgress
    }
}

/// Indicates that the word bank could not be loaded or could not supply a word.
#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum WordBankError {
    /// The backing word list could not be read.
    #[display("failed to read word list")]
    #[from]
    Io(io::Error),
    /// The word list had no usable entries.
    #[display("word list contains no usable words")]
    Empty,
    /// Every word of the requested length has already been used.
    #[display("word bank ran out of words of length {length}")]
    OutOfWords { length: usize },
    /// Words of the requested length are not supported.
    #[display("unsupported word length {length}, expected 4 to 6")]
    UnsupportedLength { length: usize },
}

/// Indicates that a game session could not be started, or rejected a guess.
#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum GameError {
    /// The guess was not of an accepted length, or contained non-letter characters.
    #[display("invalid guess {guess:?}")]
    InvalidGuess { guess: String },
    /// The solution was not 4 to 6 letters long, or contained non-letter characters.
    #[display("invalid solution {solution:?}")]
    InvalidSolution { solution: String },
    /// The session already reached a terminal state.
    #[display("the game is already over ({status:?})")]
    GameOver { status: GameStatus },
    /// No solution could be drawn from the word bank.
    #[display("could not start game")]
    #[from]
    WordBank(WordBankError),
}
