use crate::clue::Clue;
use crate::results::LetterResult;
use std::fmt;

/// Decides how much of a [`Clue`] is shown to the player.
///
/// Both variants receive the same clue. They only differ in what they disclose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Presenter {
    /// Shows which letters are correct, and which are present elsewhere in the word.
    #[default]
    FullReveal,
    /// Shows only how many letters are correct, and how many are present elsewhere.
    Blind,
}

/// What the player gets to see about a guess.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Feedback {
    /// Per-letter results, in guess order.
    Revealed {
        letters: Vec<(char, LetterResult)>,
        /// Only set in mixed-length games.
        correct_length: Option<bool>,
    },
    /// Counts only.
    Counts {
        correct: usize,
        present: usize,
        /// Only set in mixed-length games.
        correct_length: Option<bool>,
    },
}

impl Presenter {
    pub fn from_blind(blind: bool) -> Presenter {
        if blind {
            Presenter::Blind
        } else {
            Presenter::FullReveal
        }
    }

    /// Builds the feedback for `guess` from its clue.
    ///
    /// The length hint is included when `mixed_length` is set, since only then can a guess have
    /// a different length than the solution.
    pub fn present(&self, guess: &str, clue: &Clue, mixed_length: bool) -> Feedback {
        let correct_length = mixed_length.then(|| clue.is_correct_length());
        match self {
            Presenter::FullReveal => Feedback::Revealed {
                letters: guess.chars().zip(clue.letter_results()).collect(),
                correct_length,
            },
            Presenter::Blind => Feedback::Counts {
                correct: clue.num_correct(),
                present: clue.num_present(),
                correct_length,
            },
        }
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let correct_length = match self {
            Feedback::Revealed {
                letters,
                correct_length,
            } => {
                for (letter, result) in letters {
                    match result {
                        LetterResult::Correct => write!(f, "[{letter}]")?,
                        LetterResult::PresentNotHere => write!(f, "({letter})")?,
                        LetterResult::NotPresent => write!(f, " {letter} ")?,
                    }
                }
                correct_length
            }
            Feedback::Counts {
                correct,
                present,
                correct_length,
            } => {
                write!(
                    f,
                    "Correct letter and position: {correct}\n\
                     Correct letter, wrong position: {present}"
                )?;
                correct_length
            }
        };
        match correct_length {
            Some(true) => write!(f, "\nThe length is correct."),
            Some(false) => write!(f, "\nThe length is wrong."),
            None => Ok(()),
        }
    }
}
