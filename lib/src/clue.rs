use crate::results::LetterResult;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The feedback for a single guess against the solution.
///
/// `correct_char` and `has_char` always have one entry per letter of the guess. Each letter of
/// the solution accounts for at most one `true` entry across both of them, so a repeated letter
/// in the guess is only reported as often as it occurs in the solution.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Clue {
    exact_match: bool,
    correct_length: bool,
    correct_char: Vec<bool>,
    has_char: Vec<bool>,
}

impl Clue {
    /// Computes the clue for `guess` against `solution`.
    ///
    /// Letters in the right place are claimed first. Each remaining guess letter then claims the
    /// leftmost unclaimed matching letter in the solution, if there is one. Guesses of a different
    /// length than the solution are handled; positions past the end of the solution can only
    /// produce `has_char` matches.
    ///
    /// ```
    /// use rs_wordle_game::Clue;
    ///
    /// let clue = Clue::compute("SPILL", "SPLAT");
    /// assert_eq!(clue.correct_char(), &[true, true, false, false, false]);
    /// assert_eq!(clue.has_char(), &[false, false, false, true, false]);
    /// ```
    pub fn compute(guess: &str, solution: &str) -> Clue {
        let guess_bytes = guess.as_bytes();
        let solution_bytes = solution.as_bytes();

        let mut correct_char = vec![false; guess_bytes.len()];
        let mut has_char = vec![false; guess_bytes.len()];
        let mut claimed = vec![false; solution_bytes.len()];

        for (index, (g, s)) in guess_bytes.iter().zip(solution_bytes).enumerate() {
            if g == s {
                correct_char[index] = true;
                claimed[index] = true;
            }
        }

        for (index, letter) in guess_bytes.iter().enumerate() {
            if correct_char[index] {
                continue;
            }
            for (solution_index, solution_letter) in solution_bytes.iter().enumerate() {
                if !claimed[solution_index] && letter == solution_letter {
                    claimed[solution_index] = true;
                    has_char[index] = true;
                    break;
                }
            }
        }

        Clue {
            exact_match: guess == solution,
            correct_length: guess_bytes.len() == solution_bytes.len(),
            correct_char,
            has_char,
        }
    }

    /// Whether the guess was identical to the solution.
    pub fn is_exact_match(&self) -> bool {
        self.exact_match
    }

    /// Whether the guess had as many letters as the solution.
    pub fn is_correct_length(&self) -> bool {
        self.correct_length
    }

    /// For each guess letter, whether it is the solution's letter at that position.
    pub fn correct_char(&self) -> &[bool] {
        &self.correct_char
    }

    /// For each guess letter, whether it was matched to a letter elsewhere in the solution.
    pub fn has_char(&self) -> &[bool] {
        &self.has_char
    }

    /// The number of letters in the right place.
    pub fn num_correct(&self) -> usize {
        self.correct_char.iter().filter(|c| **c).count()
    }

    /// The number of letters present in the solution, but in a different place.
    pub fn num_present(&self) -> usize {
        self.has_char.iter().filter(|c| **c).count()
    }

    /// Combines both sequences into one result per guess letter.
    pub fn letter_results(&self) -> Vec<LetterResult> {
        self.correct_char
            .iter()
            .zip(&self.has_char)
            .map(|(correct, present)| match (correct, present) {
                (true, _) => LetterResult::Correct,
                (false, true) => LetterResult::PresentNotHere,
                (false, false) => LetterResult::NotPresent,
            })
            .collect()
    }
}

/// Computes the clue for `guess` against `solution`. See [`Clue::compute`].
pub fn compute_clue(guess: &str, solution: &str) -> Clue {
    Clue::compute(guess, solution)
}
